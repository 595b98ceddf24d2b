//! The link resolver.

use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::databases::Database;
use super::escape::escape_unreserved;
use super::patterns::{classify, IdentifierKind};
use super::window::CoordinateWindow;
use crate::config::LinkConfig;
use crate::core::{HitCoordinates, HitDescriptor, LinkResult};
use crate::observability::{TracingWarningSink, WarningSink};

/// Resolves the custom link for a hit.
///
/// Resolution never fails. Identifiers matching none of the known patterns
/// produce [`LinkResult::NoLink`] and exactly one warning on the configured
/// [`WarningSink`]. The resolver holds no mutable state, so repeated calls
/// with the same input give the same output.
#[derive(Clone)]
pub struct LinkResolver {
    config: LinkConfig,
    sink: Arc<dyn WarningSink>,
}

impl LinkResolver {
    /// Creates a resolver that reports warnings through `tracing`.
    #[must_use]
    pub fn new(config: LinkConfig) -> Self {
        Self {
            config,
            sink: Arc::new(TracingWarningSink),
        }
    }

    /// Replaces the warning sink.
    #[must_use]
    pub fn with_warning_sink(mut self, sink: Arc<dyn WarningSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Resolves the custom link for an identifier and its hit coordinates.
    ///
    /// Local sequences link to the gene-prediction browser when the token
    /// names an EVM gene model, otherwise to the locus browser with a padded
    /// window. Global labels link to the annotation browser of their
    /// database. Coordinates only matter for plain local sequences.
    pub fn resolve(&self, identifier: &str, coordinates: HitCoordinates) -> LinkResult {
        match classify(identifier) {
            IdentifierKind::GeneModel { token, suffix } => {
                debug!(token, suffix, "Resolved gene model link");
                LinkResult::url(format!(
                    "{}?name=EVM_27 prediction {suffix}",
                    self.config.gene_prediction_base_url
                ))
            }
            IdentifierKind::Local { token } => {
                let window = CoordinateWindow::around(coordinates, self.config.window_padding);
                debug!(token, %window, "Resolved locus link");
                LinkResult::url(format!(
                    "{}?loc={token}:{window}",
                    self.config.locus_browser_base_url
                ))
            }
            IdentifierKind::GlobalLabel { database, rest } => {
                let db = Database::from_name(database);
                let escaped = escape_unreserved(&format!("gnl|{database}|{rest}"));
                debug!(database, %db, "Resolved global label link");
                LinkResult::url(db.link(&escaped, &self.config))
            }
            IdentifierKind::Unparsed => {
                self.sink
                    .warn(&format!("Unable to parse sequence id '{identifier}'"));
                LinkResult::NoLink
            }
        }
    }

    /// Resolves the custom link for a hit descriptor.
    pub fn resolve_hit(&self, hit: &HitDescriptor) -> LinkResult {
        self.resolve(&hit.sequence_id, hit.hit_coordinates)
    }
}

impl Default for LinkResolver {
    fn default() -> Self {
        Self::new(LinkConfig::default())
    }
}

impl fmt::Debug for LinkResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkResolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
