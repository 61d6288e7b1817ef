use super::*;

/// Index of the largest value, preferring the lowest index on exact ties.
pub(crate) fn argmax<D>(x: &ArrayView<f32, D>) -> Option<usize>
where
  D: Dimension,
{
  x.iter()
    .enumerate()
    .fold(None, |best: Option<(usize, f32)>, (index, &value)| match best {
      Some((_, max)) if value <= max => best,
      _ => Some((index, value)),
    })
    .map(|(index, _)| index)
}
