//! Filter-chain assembly.
//!
//! A chain is an ordered list of engine filter stages, rendered into the
//! single comma-joined expression the engine's `-af` flag takes. Stage
//! order within each group is fixed: later DSP stages assume the output
//! characteristics of earlier ones.

mod builder;
mod stage;

pub use builder::{build_chain, db_to_linear};
pub use stage::{FilterChain, FilterStage};
