use {super::*, interactive::Interactive, labels::Labels, predict::Predict};

mod interactive;
mod labels;
mod predict;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
  #[clap(
    name = "interactive",
    about = "Classify images one at a time in a line-oriented session"
  )]
  Interactive(Interactive),
  #[clap(name = "labels", about = "List the batik motifs the model knows")]
  Labels(Labels),
  #[clap(name = "predict", about = "Predict the motif of an image")]
  Predict(Predict),
}

impl Subcommand {
  pub(crate) fn run(self, config: &Config, cache: &ModelCache) -> Result {
    match self {
      Self::Interactive(interactive) => interactive.run(config, cache),
      Self::Labels(labels) => labels.run(),
      Self::Predict(predict) => predict.run(config, cache),
    }
  }
}
