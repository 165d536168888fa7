use std::fmt;

/// Atomic number reserved for the vacancy placeholder printed for ghost atoms.
pub const VACANCY_ATOMIC_NUMBER: u8 = 0;

/// A chemical element as resolved through an [`ElementTable`](crate::core::periodic::table::ElementTable).
///
/// Elements compare by value: two atoms hold equal elements when both the
/// symbol and the atomic number match. The vacancy placeholder (`"Xx"`, Z = 0)
/// only ever appears transiently while a ghost atom is being resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    /// Canonical chemical symbol (e.g. "O", "Mg").
    pub symbol: String,
    /// Atomic number in `0..=118`.
    pub atomic_number: u8,
}

impl Element {
    pub fn new(symbol: &str, atomic_number: u8) -> Self {
        Self {
            symbol: symbol.to_string(),
            atomic_number,
        }
    }

    /// Returns `true` for the vacancy placeholder used by ghost atoms.
    pub fn is_vacancy(&self) -> bool {
        self.atomic_number == VACANCY_ATOMIC_NUMBER
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Z = {})", self.symbol, self.atomic_number)
    }
}
