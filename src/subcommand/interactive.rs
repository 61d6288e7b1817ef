use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Interactive {}

impl Interactive {
  pub(crate) fn run(self, config: &Config, cache: &ModelCache) -> Result {
    let model = cache.initialize(&config.model)?;

    Self::session(
      io::stdin().lock(),
      &mut io::stdout().lock(),
      &model,
      config.timeout(),
    )
  }

  fn session(
    reader: impl BufRead,
    writer: &mut impl Write,
    model: &ModelHandle,
    timeout: Option<Duration>,
  ) -> Result {
    let mut session = Session::default();

    writeln!(
      writer,
      "Enter the path of a batik image, `reset` to start over, or `quit`."
    )?;

    for line in reader.lines() {
      match line?.trim() {
        "" => {}
        "quit" | "exit" => break,
        "reset" => {
          session.reset();
          writeln!(writer, "Ready for a new image.")?;
        }
        _ if !session.accepts_upload() => {
          if let Some(prediction) = session.prediction() {
            writeln!(
              writer,
              "Already classified as {prediction}. Enter `reset` to upload another image."
            )?;
          }
        }
        path => match classify_file(Path::new(path), model, timeout) {
          Ok(prediction) => {
            writeln!(writer, "Batik type: {}", prediction.label)?;
            writeln!(writer, "Confidence: {:.2}%", prediction.confidence)?;
            session.record(prediction);
          }
          Err(error) => {
            writeln!(writer, "error: {}", single_line(&error))?
          }
        },
      }
    }

    Ok(())
  }
}
