//! # Core Module
//!
//! Stateless building blocks shared by the parsing engine and its consumers.
//!
//! ## Architecture
//!
//! - **Domain Entities** ([`models`]) - Elements, atoms, basis sets, basis functions,
//!   primitives and the finalized output graph
//! - **Element Lookup** ([`periodic`]) - The read-only periodic table used to resolve
//!   symbols, atomic numbers and ECP-encoded numbers
//!
//! Nothing in this module performs parsing; the values here are created by the
//! [`engine`](crate::engine) and only read afterwards.

pub mod models;
pub mod periodic;
