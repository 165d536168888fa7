//! # Engine Module
//!
//! The stateful part of the library: a line-fed state machine that turns the
//! text of a CRYSTAL output into a validated atom and basis-set graph, and the
//! query resolution that reads that graph back.
//!
//! ## Architecture
//!
//! - **Regions** ([`region`]) - The document regions and the sentinel-driven transitions between them
//! - **Recognizers** ([`recognizer`]) - Classification of a single line into ghost, atom,
//!   basis-function or primitive records, depending on the active region
//! - **Graph Builder** ([`builder`]) - Incremental construction of atoms and per-element basis sets,
//!   ghost resolution and the final validation pass
//! - **Parser** ([`parser`]) - The public `feed`/`finalize` contract tying the three together
//! - **Queries** ([`query`]) - Atom, basis-set and orbital reports over a finalized output
//! - **Progress Monitoring** ([`progress`]) - Progress reporting for long-running workflows
//! - **Error Handling** ([`error`]) - Parse failures, with the offending line number where one exists
//!
//! ## Key Capabilities
//!
//! - **Streaming input** with no requirement to hold the whole output in memory
//! - **Ghost atom resolution** against the declarations printed ahead of the basis-set table
//! - **Basis-set sharing** between all atoms of one element
//! - **Global orbital numbering** derived from parse order

pub mod builder;
pub mod error;
pub mod parser;
pub mod progress;
pub mod query;
pub mod recognizer;
pub mod region;
