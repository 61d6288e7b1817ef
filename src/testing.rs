use {
  super::*,
  image::{Rgb, RgbImage},
  prost::Message,
  rand::Rng,
  tract_onnx::pb::{
    attribute_proto::AttributeType,
    tensor_proto::DataType,
    tensor_shape_proto::{dimension, Dimension},
    type_proto, AttributeProto, GraphProto, ModelProto, NodeProto,
    OperatorSetIdProto, TensorProto, TensorShapeProto, TypeProto,
    ValueInfoProto,
  },
  std::sync::atomic::{AtomicUsize, Ordering},
};

pub(crate) fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
  let mut bytes = Vec::new();
  image.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
  bytes
}

pub(crate) fn noise(width: u32, height: u32) -> RgbImage {
  let mut rng = rand::thread_rng();
  RgbImage::from_fn(width, height, |_, _| Rgb(rng.gen()))
}

pub(crate) fn png(width: u32, height: u32) -> Vec<u8> {
  encode(&DynamicImage::ImageRgb8(noise(width, height)), ImageFormat::Png)
}

/// Returns the same probability vector for every image in the batch and
/// rejects inputs that are not shaped like preprocessed images.
pub(crate) struct Fixed {
  probabilities: Vec<f32>,
  pub(crate) calls: AtomicUsize,
}

impl Fixed {
  pub(crate) fn new(probabilities: Vec<f32>) -> Self {
    Self {
      probabilities,
      calls: AtomicUsize::new(0),
    }
  }

  pub(crate) fn one_hot(index: usize) -> Self {
    let mut probabilities = vec![0.0; LABELS.len()];
    probabilities[index] = 1.0;
    Self::new(probabilities)
  }

  pub(crate) fn uniform() -> Self {
    Self::new(vec![1.0 / LABELS.len() as f32; LABELS.len()])
  }
}

impl Model for Fixed {
  fn predict(&self, batch: ArrayView4<f32>) -> Result<Array2<f32>, Error> {
    self.calls.fetch_add(1, Ordering::SeqCst);

    let size = INPUT_SIZE as usize;

    if batch.shape()[1..] != [size, size, 3] {
      return Err(Error::inference(format!(
        "unexpected input shape {:?}",
        batch.shape()
      )));
    }

    let rows = batch.shape()[0];

    Array2::from_shape_vec(
      (rows, self.probabilities.len()),
      self.probabilities.repeat(rows),
    )
    .map_err(Error::inference)
  }
}

pub(crate) struct Failing;

impl Model for Failing {
  fn predict(&self, _: ArrayView4<f32>) -> Result<Array2<f32>, Error> {
    Err(Error::inference("shape mismatch"))
  }
}

pub(crate) struct Slow {
  pub(crate) delay: Duration,
  pub(crate) inner: Fixed,
}

impl Model for Slow {
  fn predict(&self, batch: ArrayView4<f32>) -> Result<Array2<f32>, Error> {
    thread::sleep(self.delay);
    self.inner.predict(batch)
  }
}

fn tensor_info(name: &str, dims: &[i64]) -> ValueInfoProto {
  ValueInfoProto {
    name: name.into(),
    r#type: Some(TypeProto {
      value: Some(type_proto::Value::TensorType(type_proto::Tensor {
        elem_type: DataType::Float as i32,
        shape: Some(TensorShapeProto {
          dim: dims
            .iter()
            .map(|&dim| Dimension {
              value: Some(dimension::Value::DimValue(dim)),
              ..Default::default()
            })
            .collect(),
        }),
      })),
      ..Default::default()
    }),
    ..Default::default()
  }
}

/// Serialized ONNX graph computing `softmax(mean_hw(image) · weights)`,
/// where `weights` is a row-major `3 × classes` matrix.
pub(crate) fn onnx_classifier(weights: &[f32], classes: usize) -> Vec<u8> {
  assert_eq!(weights.len(), 3 * classes);

  let size = i64::from(INPUT_SIZE);

  let node = |op_type: &str, input: &[&str], output: &str| NodeProto {
    op_type: op_type.into(),
    input: input.iter().map(|name| name.to_string()).collect(),
    output: vec![output.into()],
    name: output.into(),
    ..Default::default()
  };

  let mut mean = node("ReduceMean", &["image"], "mean");

  mean.attribute = vec![
    AttributeProto {
      name: "axes".into(),
      r#type: AttributeType::Ints as i32,
      ints: vec![1, 2],
      ..Default::default()
    },
    AttributeProto {
      name: "keepdims".into(),
      r#type: AttributeType::Int as i32,
      i: 0,
      ..Default::default()
    },
  ];

  let mut softmax = node("Softmax", &["logits"], "probabilities");

  softmax.attribute = vec![AttributeProto {
    name: "axis".into(),
    r#type: AttributeType::Int as i32,
    i: 1,
    ..Default::default()
  }];

  ModelProto {
    ir_version: 7,
    opset_import: vec![OperatorSetIdProto {
      domain: String::new(),
      version: 13,
    }],
    graph: Some(GraphProto {
      name: "batik".into(),
      node: vec![mean, node("MatMul", &["mean", "weights"], "logits"), softmax],
      initializer: vec![TensorProto {
        name: "weights".into(),
        dims: vec![3, classes as i64],
        data_type: DataType::Float as i32,
        float_data: weights.to_vec(),
        ..Default::default()
      }],
      input: vec![tensor_info("image", &[1, size, size, 3])],
      output: vec![tensor_info("probabilities", &[1, classes as i64])],
      ..Default::default()
    }),
    ..Default::default()
  }
  .encode_to_vec()
}
