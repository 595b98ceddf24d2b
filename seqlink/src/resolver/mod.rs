//! Custom link resolution for sequence identifiers.
//!
//! This module provides:
//! - Identifier classification against the known identifier patterns
//! - The padded coordinate window used for locus links
//! - The closed table of `gnl|` databases and their link templates
//! - Percent encoding restricted to the RFC 3986 unreserved set
//! - [`LinkResolver`], which ties these together

mod databases;
mod escape;
mod patterns;
mod resolve;
mod window;

pub use databases::Database;
pub use escape::{escape_unreserved, UNRESERVED};
pub use patterns::{classify, IdentifierKind};
pub use resolve::LinkResolver;
pub use window::{CoordinateWindow, DEFAULT_WINDOW_PADDING};
