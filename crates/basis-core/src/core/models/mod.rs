//! # Core Models Module
//!
//! Plain data records for the atom and basis-set graph extracted from a CRYSTAL
//! output.
//!
//! ## Key Components
//!
//! - [`element`] - Chemical element value, including the vacancy placeholder used for ghosts
//! - [`atom`] - Atoms with label, coordinates, ghost flag and basis-set reference
//! - [`basis`] - Basis sets, contracted basis functions, shells and primitives
//! - [`ids`] - Index type used to share one basis set between atoms
//! - [`output`] - The finalized, read-only graph and its orbital bookkeeping
//!
//! Every basis set is owned by the graph and referenced from atoms through a
//! [`ids::BasisSetId`]; atoms of the same element hold the same id.

pub mod atom;
pub mod basis;
pub mod element;
pub mod ids;
pub mod output;
