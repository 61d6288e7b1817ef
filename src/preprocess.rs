use super::*;

/// Side length of the square input the classifier was trained on.
pub(crate) const INPUT_SIZE: u32 = 224;

/// Decode PNG or JPEG bytes. Every other encoding is rejected, including
/// formats the `image` crate could otherwise read.
pub(crate) fn decode(bytes: &[u8]) -> Result<DynamicImage, Error> {
  let reader = ImageReader::new(Cursor::new(bytes))
    .with_guessed_format()
    .map_err(ImageError::IoError)?;

  match reader.format() {
    Some(ImageFormat::Png | ImageFormat::Jpeg) => Ok(reader.decode()?),
    format => {
      let hint = format
        .map(ImageFormatHint::Exact)
        .unwrap_or(ImageFormatHint::Unknown);

      Err(
        ImageError::Unsupported(UnsupportedError::from_format_and_kind(
          hint.clone(),
          UnsupportedErrorKind::Format(hint),
        ))
        .into(),
      )
    }
  }
}

/// Turn encoded image bytes into a `(1, 224, 224, 3)` tensor with channel
/// values in `[0, 1]`.
pub(crate) fn preprocess(bytes: &[u8]) -> Result<Array4<f32>, Error> {
  let image = decode(bytes)?.to_rgb8();

  let resized = imageops::resize(
    &image,
    INPUT_SIZE,
    INPUT_SIZE,
    FilterType::CatmullRom,
  );

  let size = INPUT_SIZE as usize;

  // Scale in f64 and narrow afterwards, as numpy does before the f32 cast.
  Ok(Array4::from_shape_fn((1, size, size, 3), |(_, y, x, c)| {
    (f64::from(resized.get_pixel(x as u32, y as u32)[c]) / 255.0) as f32
  }))
}
