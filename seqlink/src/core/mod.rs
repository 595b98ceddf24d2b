//! Core domain model types for seqlink.
//!
//! This module contains the per-call values that flow through resolution:
//! - Hit coordinates and the hit descriptor
//! - The tagged link result

mod hit;
mod link;

pub use hit::{HitCoordinates, HitDescriptor};
pub use link::LinkResult;
