/// Motif names in the class order the model was trained with.
pub(crate) const LABELS: [&str; 15] = [
  "Batik Bali",
  "Batik Betawi",
  "Batik Cendrawasih",
  "Batik Dayak",
  "Batik Geblek Renteng",
  "Batik Ikat Celup",
  "Batik Insang",
  "Batik Kawung",
  "Batik Lasem",
  "Batik Megamendung",
  "Batik Pala",
  "Batik Parang",
  "Batik Poleng",
  "Batik Sekar Jagad",
  "Batik Tambal",
];

pub(crate) fn label(index: usize) -> Option<&'static str> {
  LABELS.get(index).copied()
}
