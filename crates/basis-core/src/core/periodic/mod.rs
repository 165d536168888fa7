//! Element lookup by symbol or atomic number.
//!
//! The [`table::ElementTable`] is an immutable value: build it once (the
//! built-in periodic table or a TOML file) and pass it to each parser.

pub mod table;
