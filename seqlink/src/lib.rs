//! # Seqlink
//!
//! Outbound genome-browser links for sequence-search hits.
//!
//! Seqlink turns the raw identifier of a search hit into a link into an
//! external genome browser, and renders the markup line the result viewer
//! shows for that hit:
//!
//! - **Local sequences** (`lcl|<token> `) link to a locus browser window
//!   padded around the hit, or to the gene-prediction browser for EVM models
//! - **Global labels** (`gnl|<db>|<accession>`) link to the annotation
//!   browser assembly of their database
//! - **Anything else** gets no custom link and a warning; the line falls back
//!   to the host's standard link
//!
//! ## Quick Start
//!
//! ```rust
//! use seqlink::prelude::*;
//!
//! let renderer = LineRenderer::new(LinkResolver::default());
//! let standard = |id: &str, _: HitCoordinates| format!("/get_sequence/?id={id}");
//!
//! let line = renderer.render("lcl|scaffold_9 ", HitCoordinates::new(10, 20), &standard);
//! assert!(line.contains("loc=scaffold_9:1..5020"));
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod core;
pub mod errors;
pub mod observability;
pub mod render;
pub mod resolver;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::LinkConfig;
    pub use crate::core::{HitCoordinates, HitDescriptor, LinkResult};
    pub use crate::errors::{ConfigError, InvalidCoordinatesError, SeqlinkError};
    pub use crate::observability::{NoOpWarningSink, TracingWarningSink, WarningSink};
    pub use crate::render::{LineRenderer, StandardLinkBuilder};
    pub use crate::resolver::{classify, Database, IdentifierKind, LinkResolver};
}
