use super::*;

struct Loaded {
  path: PathBuf,
  model: ModelHandle,
}

/// Holds the process's model once it has been loaded.
///
/// The cache starts out empty and moves to loaded on the first successful
/// `initialize`. It never unloads, and every later `initialize` hands back
/// the same handle without touching the filesystem.
#[derive(Default)]
pub(crate) struct ModelCache {
  slot: RwLock<Option<Loaded>>,
}

impl ModelCache {
  pub(crate) fn initialize(&self, path: &Path) -> Result<ModelHandle, Error> {
    self.initialize_with(path, |path| {
      Ok(Arc::new(OnnxModel::load(path)?) as ModelHandle)
    })
  }

  pub(crate) fn initialize_with<F>(
    &self,
    path: &Path,
    load: F,
  ) -> Result<ModelHandle, Error>
  where
    F: FnOnce(&Path) -> Result<ModelHandle, Error>,
  {
    {
      let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);

      if let Some(loaded) = slot.as_ref() {
        return Ok(loaded.handle(path));
      }
    }

    let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);

    if let Some(loaded) = slot.as_ref() {
      return Ok(loaded.handle(path));
    }

    let start = Instant::now();

    let model = load(path)?;

    info!(
      path = %path.display(),
      elapsed = ?start.elapsed(),
      "loaded model"
    );

    *slot = Some(Loaded {
      path: path.to_owned(),
      model: Arc::clone(&model),
    });

    Ok(model)
  }

  #[cfg(test)]
  pub(crate) fn is_loaded(&self) -> bool {
    self
      .slot
      .read()
      .unwrap_or_else(PoisonError::into_inner)
      .is_some()
  }
}

impl Loaded {
  fn handle(&self, path: &Path) -> ModelHandle {
    if path != self.path.as_path() {
      warn!(
        loaded = %self.path.display(),
        requested = %path.display(),
        "model already loaded, ignoring requested path"
      );
    }

    Arc::clone(&self.model)
  }
}

pub(crate) fn classify(
  bytes: &[u8],
  model: &dyn Model,
) -> Result<Prediction, Error> {
  let input = preprocess(bytes)?;

  let output = model.predict(input.view())?;

  if output.dim() != (1, LABELS.len()) {
    return Err(Error::inference(format!(
      "expected output shape [1, {}], got {:?}",
      LABELS.len(),
      output.shape()
    )));
  }

  let probabilities = output.row(0);

  if let Some(value) = probabilities
    .iter()
    .find(|value| !(0.0..=1.0).contains(*value))
  {
    return Err(Error::inference(format!(
      "model output {value} is not a probability"
    )));
  }

  let prediction = argmax(&probabilities)
    .and_then(|index| Prediction::new(index, probabilities[index]))
    .ok_or_else(|| Error::inference("model produced no probabilities"))?;

  debug!(
    label = prediction.label,
    confidence = prediction.confidence,
    "classified image"
  );

  Ok(prediction)
}

/// Runs `classify` on a worker thread, giving up after `timeout`.
///
/// The worker is left to finish on its own when the deadline passes.
pub(crate) fn classify_with_timeout(
  bytes: Vec<u8>,
  model: ModelHandle,
  timeout: Duration,
) -> Result<Prediction, Error> {
  let (sender, receiver) = mpsc::channel();

  thread::spawn(move || {
    sender.send(classify(&bytes, model.as_ref())).ok();
  });

  match receiver.recv_timeout(timeout) {
    Ok(result) => result,
    Err(mpsc::RecvTimeoutError::Timeout) => Err(Error::inference(format!(
      "no result after {}s",
      timeout.as_secs_f32()
    ))),
    Err(mpsc::RecvTimeoutError::Disconnected) => {
      Err(Error::inference("inference worker exited without a result"))
    }
  }
}

/// Reads and classifies one image file, honoring an optional deadline.
pub(crate) fn classify_file(
  path: &Path,
  model: &ModelHandle,
  timeout: Option<Duration>,
) -> Result<Prediction> {
  let bytes = read(path)
    .with_context(|| format!("failed to read `{}`", path.display()))?;

  let prediction = match timeout {
    Some(timeout) => classify_with_timeout(bytes, Arc::clone(model), timeout)?,
    None => classify(&bytes, model.as_ref())?,
  };

  Ok(prediction)
}
