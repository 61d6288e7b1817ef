use super::*;

/// Upload state of one interactive session. A classified session keeps its
/// result on display and refuses new uploads until it is reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) enum Session {
  #[default]
  AwaitingUpload,
  Classified(Prediction),
}

impl Session {
  pub(crate) fn accepts_upload(&self) -> bool {
    matches!(self, Self::AwaitingUpload)
  }

  pub(crate) fn record(&mut self, prediction: Prediction) {
    *self = Self::Classified(prediction);
  }

  pub(crate) fn reset(&mut self) {
    *self = Self::AwaitingUpload;
  }

  pub(crate) fn prediction(&self) -> Option<&Prediction> {
    match self {
      Self::AwaitingUpload => None,
      Self::Classified(prediction) => Some(prediction),
    }
  }
}
