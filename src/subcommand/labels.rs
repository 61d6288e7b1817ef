use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Labels {}

impl Labels {
  pub(crate) fn run(self) -> Result {
    Self::write(&mut io::stdout().lock())
  }

  fn write(writer: &mut impl Write) -> Result {
    for (index, label) in LABELS.iter().enumerate() {
      writeln!(writer, "{index:>2}  {label}")?;
    }

    Ok(())
  }
}
