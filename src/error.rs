use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("failed to load model from `{}`", .path.display())]
  ModelLoad {
    path: PathBuf,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },
  #[error("invalid image")]
  Decode(#[from] ImageError),
  #[error("prediction failed: {0}")]
  Inference(String),
}

impl Error {
  pub(crate) fn model_load(
    path: &Path,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
  ) -> Self {
    Self::ModelLoad {
      path: path.to_owned(),
      source: source.into(),
    }
  }

  pub(crate) fn inference(message: impl Display) -> Self {
    Self::Inference(message.to_string())
  }
}

/// Renders an error and its causes on one line, collapsing any line breaks
/// the underlying decoders put in their messages.
pub(crate) fn single_line(error: &anyhow::Error) -> String {
  let mut causes = error
    .chain()
    .map(|cause| {
      cause
        .to_string()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
    })
    .collect::<Vec<String>>();

  // Wrappers such as `ImageError::IoError` repeat their source's message.
  causes.dedup();

  causes.join(": ")
}
