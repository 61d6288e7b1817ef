use {
  crate::{
    arguments::Arguments,
    config::Config,
    error::{single_line, Error},
    labels::{label, LABELS},
    math::argmax,
    model::{Model, ModelHandle, OnnxModel},
    pipeline::{classify_file, ModelCache},
    prediction::Prediction,
    preprocess::{preprocess, INPUT_SIZE},
    session::Session,
    subcommand::Subcommand,
  },
  anyhow::{bail, Context},
  clap::Parser,
  image::{
    error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind},
    imageops::{self, FilterType},
    DynamicImage, ImageError, ImageFormat, ImageReader,
  },
  indicatif::{ProgressBar, ProgressStyle},
  ndarray::{Array2, Array4, ArrayView, ArrayView4, Dimension},
  serde::{Deserialize, Serialize},
  std::{
    fmt::{self, Display, Formatter},
    fs::{read, File},
    io::{self, BufRead, Cursor, Write},
    path::{Path, PathBuf},
    process,
    sync::{mpsc, Arc, PoisonError, RwLock},
    thread,
    time::{Duration, Instant},
  },
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
};

mod arguments;
mod config;
mod error;
mod labels;
mod math;
mod model;
mod pipeline;
mod prediction;
mod preprocess;
mod session;
mod subcommand;

#[cfg(test)]
mod testing;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(io::stderr)
    .init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {}", single_line(&error));
    process::exit(1);
  }
}
