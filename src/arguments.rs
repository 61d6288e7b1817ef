use super::*;

#[derive(Debug, Parser)]
#[clap(about = "Classify Indonesian batik motifs from images")]
pub(crate) struct Arguments {
  #[clap(
    long,
    global = true,
    help = "JSON configuration file with `model` and `timeout` keys"
  )]
  config: Option<PathBuf>,
  #[clap(
    short,
    long,
    global = true,
    env = "BATIK_MODEL",
    help = "Path to the ONNX model artifact"
  )]
  model: Option<PathBuf>,
  #[clap(
    long,
    global = true,
    help = "Seconds to wait for a single prediction before giving up"
  )]
  timeout: Option<u64>,
  #[clap(subcommand)]
  subcommand: Subcommand,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    let config = Config::load(self.config.as_deref())?
      .with_overrides(self.model, self.timeout);

    let cache = ModelCache::default();

    self.subcommand.run(&config, &cache)
  }
}
