use super::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct Prediction {
  pub(crate) label: &'static str,
  /// Percentage in `[0, 100]`.
  pub(crate) confidence: f32,
}

impl Prediction {
  /// Builds the result for class `index` predicted with `probability`.
  pub(crate) fn new(index: usize, probability: f32) -> Option<Self> {
    Some(Self {
      label: label(index)?,
      confidence: probability * 100.0,
    })
  }
}

impl Display for Prediction {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{} ({:.2}%)", self.label, self.confidence)
  }
}
