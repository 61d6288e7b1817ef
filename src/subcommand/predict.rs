use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Predict {
  #[clap(short, long, help = "JPEG or PNG image to classify")]
  image: PathBuf,
  #[clap(long, help = "Print the prediction as JSON")]
  json: bool,
}

#[derive(Serialize)]
struct Output<'a> {
  image: &'a Path,
  #[serde(flatten)]
  prediction: &'a Prediction,
}

impl Predict {
  pub(crate) fn run(self, config: &Config, cache: &ModelCache) -> Result {
    let model = cache.initialize(&config.model)?;

    let spinner = ProgressBar::new_spinner();

    spinner.set_style(
      ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")?,
    );

    spinner.set_message(format!("Processing {}", self.image.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = classify_file(&self.image, &model, config.timeout());

    spinner.finish_and_clear();

    self.write(&mut io::stdout().lock(), &result?)
  }

  fn write(&self, writer: &mut impl Write, prediction: &Prediction) -> Result {
    if self.json {
      serde_json::to_writer(
        &mut *writer,
        &Output {
          image: &self.image,
          prediction,
        },
      )?;

      writeln!(writer)?;
    } else {
      writeln!(writer, "Batik type: {}", prediction.label)?;
      writeln!(writer, "Confidence: {:.2}%", prediction.confidence)?;
    }

    Ok(())
  }
}
