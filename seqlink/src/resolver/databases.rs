//! Databases reachable through `gnl|<db>|<accession>` identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::LinkConfig;

/// Taxon shared by every mapped annotation-browser assembly.
const AMBORELLA_TAXA_ID: u32 = 1;

/// The closed set of `gnl|` databases.
///
/// Adding a database means adding a variant here and its name and assembly
/// below; lookups of any other name resolve to [`Database::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Database {
    /// Amborella genome annotation.
    Amborella,
    /// Amborella Trinity transcriptome assembly.
    AmboTrinity,
    /// Any database without a mapping.
    Unknown,
}

impl Database {
    /// Databases with a real link template.
    pub const MAPPED: [Self; 2] = [Self::Amborella, Self::AmboTrinity];

    /// Looks up a database by its exact, case-sensitive name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::MAPPED
            .into_iter()
            .find(|db| db.name() == Some(name))
            .unwrap_or(Self::Unknown)
    }

    /// The token used in identifiers, if mapped.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Self::Amborella => Some("Amborella"),
            Self::AmboTrinity => Some("Ambo_Trinity"),
            Self::Unknown => None,
        }
    }

    /// Annotation-browser assembly, if mapped.
    #[must_use]
    pub const fn assembly_id(self) -> Option<u32> {
        match self {
            Self::Amborella => Some(1),
            Self::AmboTrinity => Some(7),
            Self::Unknown => None,
        }
    }

    /// Builds the link for an already escaped identifier.
    ///
    /// Unmapped databases yield the configured placeholder, not an error.
    #[must_use]
    pub fn link(self, escaped_identifier: &str, config: &LinkConfig) -> String {
        match self.assembly_id() {
            Some(assembly_id) => format!(
                "{}?name={escaped_identifier}&taxaId={AMBORELLA_TAXA_ID}&assemblyId={assembly_id}",
                config.annotation_browser_base_url
            ),
            None => config.unknown_database_placeholder.clone(),
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().unwrap_or("unknown"))
    }
}
