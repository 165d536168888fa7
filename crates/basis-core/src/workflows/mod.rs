//! # Workflows Module
//!
//! High-level entry points that drive the [`engine`](crate::engine) over a whole
//! input source.
//!
//! - **Parse Workflow** ([`parse`]) - Reads a CRYSTAL output line by line, stops at
//!   the end of the basis-set region and returns the finalized graph.

pub mod parse;
