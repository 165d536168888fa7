//! # CRYSTAL Basis Set Library
//!
//! Extracts atoms, ghost atoms and their basis sets from the text output of the
//! CRYSTAL quantum-chemistry program, and answers queries about them.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Atom`, `BasisSet`,
//!   `CrystalOutput`) and the periodic table used to resolve element tokens.
//!
//! - **[`engine`]: The Logic Core.** The region-aware line parser, the graph
//!   builder with its validation pass, and query resolution over the result.
//!
//! - **[`workflows`]: The Public API.** Complete procedures such as parsing an
//!   output file from disk with progress reporting.

pub mod core;
pub mod engine;
pub mod workflows;
