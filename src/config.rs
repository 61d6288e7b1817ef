use super::*;

const DEFAULT_MODEL: &str = "model_batik.onnx";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
  pub(crate) model: PathBuf,
  pub(crate) timeout: Option<u64>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      model: PathBuf::from(DEFAULT_MODEL),
      timeout: None,
    }
  }
}

impl Config {
  pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
    let Some(path) = path else {
      return Ok(Self::default());
    };

    let file = File::open(path).with_context(|| {
      format!("failed to open config file `{}`", path.display())
    })?;

    serde_json::from_reader(file).with_context(|| {
      format!("failed to parse config file `{}`", path.display())
    })
  }

  pub(crate) fn with_overrides(
    self,
    model: Option<PathBuf>,
    timeout: Option<u64>,
  ) -> Self {
    Self {
      model: model.unwrap_or(self.model),
      timeout: timeout.or(self.timeout),
    }
  }

  pub(crate) fn timeout(&self) -> Option<Duration> {
    self.timeout.map(Duration::from_secs)
  }
}
