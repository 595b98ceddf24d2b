//! Markup rendering for hit lines.
//!
//! The host supplies the standard link through [`StandardLinkBuilder`];
//! [`LineRenderer`] combines it with the resolver's custom link into the
//! anchor fragment interleaved with the plain-text hit listing.

mod line;
mod standard;

pub use line::{anchor, LineRenderer};
pub use standard::StandardLinkBuilder;
