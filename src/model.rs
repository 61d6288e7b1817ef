use {
  crate::{Array2, ArrayView4, Error, Path, INPUT_SIZE, LABELS},
  std::sync::Arc,
  tract_onnx::prelude::*,
};

/// A classifier that maps a batch of NHWC image tensors to one probability
/// vector per image.
pub(crate) trait Model: Send + Sync {
  fn predict(&self, batch: ArrayView4<f32>) -> Result<Array2<f32>, Error>;
}

/// Loaded model shared read-only between classifications.
pub(crate) type ModelHandle = Arc<dyn Model>;

pub(crate) struct OnnxModel {
  plan: TypedRunnableModel<TypedModel>,
}

impl OnnxModel {
  pub(crate) fn load(path: &Path) -> Result<Self, Error> {
    if !path.is_file() {
      return Err(Error::model_load(
        path,
        std::io::Error::new(
          std::io::ErrorKind::NotFound,
          "model file does not exist",
        ),
      ));
    }

    let size = INPUT_SIZE as usize;

    let plan = tract_onnx::onnx()
      .model_for_path(path)
      .and_then(|model| {
        model.with_input_fact(0, f32::fact([1, size, size, 3]).into())
      })
      .and_then(|model| model.into_optimized())
      .and_then(|model| model.into_runnable())
      .map_err(|error| Error::model_load(path, error))?;

    let output = plan
      .model()
      .output_fact(0)
      .map_err(|error| Error::model_load(path, error))?;

    let expected = [1, LABELS.len()];

    if output.datum_type != f32::datum_type()
      || output.shape.as_concrete() != Some(&expected[..])
    {
      return Err(Error::model_load(
        path,
        format!("expected f32 output of shape {expected:?}, got {output:?}"),
      ));
    }

    Ok(Self { plan })
  }
}

impl Model for OnnxModel {
  fn predict(&self, batch: ArrayView4<f32>) -> Result<Array2<f32>, Error> {
    let rows = batch.shape()[0];

    let data = batch.iter().copied().collect::<Vec<f32>>();

    let input =
      Tensor::from_shape(batch.shape(), &data).map_err(Error::inference)?;

    let outputs = self
      .plan
      .run(tvec!(input.into()))
      .map_err(|error| Error::inference(format!("{error:#}")))?;

    let output = outputs
      .first()
      .ok_or_else(|| Error::inference("model produced no outputs"))?;

    let values = output
      .as_slice::<f32>()
      .map_err(|error| Error::inference(format!("{error:#}")))?
      .to_vec();

    if rows == 0 || values.len() % rows != 0 {
      return Err(Error::inference(format!(
        "cannot split {} outputs across a batch of {rows}",
        values.len()
      )));
    }

    Array2::from_shape_vec((rows, values.len() / rows), values)
      .map_err(Error::inference)
  }
}
