use crate::core::models::element::Element;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Highest atomic number the table can hold.
pub const MAX_ATOMIC_NUMBER: u32 = 118;

/// CRYSTAL adds this offset to the atomic number of elements described by an
/// Effective Core Potential basis set.
const ECP_OFFSET: u32 = 200;

/// Symbols indexed by atomic number. Index 0 is the vacancy placeholder.
static STANDARD_SYMBOLS: [&str; 119] = [
    "Xx", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S",
    "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge",
    "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd",
    "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm",
    "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn",
    "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementLookupError {
    #[error("Element '{0}' does not exist")]
    UnknownSymbol(String),
    #[error("Invalid atomic number: '{0}'")]
    InvalidAtomicNumber(u32),
    #[error("No element with atomic number {0} in the element table")]
    UnknownNumber(u32),
}

#[derive(Debug, Error)]
pub enum ElementTableError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Atomic number {atomic_number} of '{symbol}' exceeds 118")]
    AtomicNumberOutOfRange { symbol: String, atomic_number: u32 },
    #[error("Duplicate element symbol: '{0}'")]
    DuplicateSymbol(String),
    #[error("Duplicate atomic number: {0}")]
    DuplicateNumber(u32),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementEntry {
    symbol: String,
    #[serde(rename = "atomic-number")]
    atomic_number: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementTableFile {
    #[serde(rename = "element", default)]
    elements: Vec<ElementEntry>,
}

/// Read-only lookup from chemical symbol or atomic number to an [`Element`].
///
/// Built once and handed to every parser by reference; it is never mutated
/// after construction, so one table can be shared between concurrent parses.
#[derive(Debug, Clone)]
pub struct ElementTable {
    by_number: Vec<Option<Element>>,
    by_symbol: HashMap<String, u8>,
}

impl Default for ElementTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl ElementTable {
    /// The full periodic table from H to Og plus the `Xx` vacancy placeholder.
    pub fn standard() -> Self {
        let by_number = STANDARD_SYMBOLS
            .iter()
            .zip(0u8..)
            .map(|(symbol, z)| Some(Element::new(symbol, z)))
            .collect();
        let by_symbol = STANDARD_SYMBOLS
            .iter()
            .zip(0u8..)
            .map(|(symbol, z)| (symbol.to_string(), z))
            .collect();
        Self {
            by_number,
            by_symbol,
        }
    }

    /// Loads a custom table from a TOML file of `[[element]]` entries.
    pub fn load(path: &Path) -> Result<Self, ElementTableError> {
        let content = std::fs::read_to_string(path).map_err(|e| ElementTableError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ElementTableError::Toml { source, .. } => ElementTableError::Toml {
                path: path.to_string_lossy().to_string(),
                source,
            },
            other => other,
        })
    }

    fn from_toml_str(content: &str) -> Result<Self, ElementTableError> {
        let file: ElementTableFile =
            toml::from_str(content).map_err(|e| ElementTableError::Toml {
                path: String::new(),
                source: e,
            })?;

        let mut by_number = vec![None; MAX_ATOMIC_NUMBER as usize + 1];
        let mut by_symbol = HashMap::with_capacity(file.elements.len());
        for entry in file.elements {
            if entry.atomic_number > MAX_ATOMIC_NUMBER {
                return Err(ElementTableError::AtomicNumberOutOfRange {
                    symbol: entry.symbol,
                    atomic_number: entry.atomic_number,
                });
            }
            let symbol = normalize_symbol(&entry.symbol);
            let z = entry.atomic_number as u8;
            let slot = &mut by_number[z as usize];
            if slot.is_some() {
                return Err(ElementTableError::DuplicateNumber(entry.atomic_number));
            }
            if by_symbol.insert(symbol.clone(), z).is_some() {
                return Err(ElementTableError::DuplicateSymbol(symbol));
            }
            *slot = Some(Element::new(&symbol, z));
        }
        Ok(Self {
            by_number,
            by_symbol,
        })
    }

    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }

    /// Looks an element up by symbol, ignoring case (`"XX"` finds `"Xx"`).
    pub fn lookup_symbol(&self, symbol: &str) -> Result<Element, ElementLookupError> {
        let normalized = normalize_symbol(symbol);
        self.by_symbol
            .get(&normalized)
            .and_then(|&z| self.by_number[z as usize].clone())
            .ok_or_else(|| ElementLookupError::UnknownSymbol(symbol.to_string()))
    }

    /// Looks an element up by atomic number.
    ///
    /// Numbers above 200 denote ECP variants and are reduced modulo 200 first.
    pub fn lookup_number(&self, atomic_number: u32) -> Result<Element, ElementLookupError> {
        let z = if atomic_number > ECP_OFFSET {
            atomic_number % ECP_OFFSET
        } else {
            atomic_number
        };
        if z > MAX_ATOMIC_NUMBER {
            return Err(ElementLookupError::InvalidAtomicNumber(z));
        }
        self.by_number[z as usize]
            .clone()
            .ok_or(ElementLookupError::UnknownNumber(z))
    }

    /// Resolves an atom-line token: all-digit tokens by number, anything else by symbol.
    pub fn resolve_token(&self, token: &str) -> Result<Element, ElementLookupError> {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            let number = token
                .parse::<u32>()
                .map_err(|_| ElementLookupError::UnknownSymbol(token.to_string()))?;
            self.lookup_number(number)
        } else {
            self.lookup_symbol(token)
        }
    }
}

fn normalize_symbol(symbol: &str) -> String {
    let mut chars = symbol.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
