//! Configuration for link resolution.
//!
//! Every field defaults to the value the hosted result viewer has always
//! linked to, so `LinkConfig::default()` reproduces the established links.
//! The database table itself is compiled in; only the external hosts and the
//! window padding are configurable.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{ConfigError, SeqlinkError};
use crate::resolver::DEFAULT_WINDOW_PADDING;

/// Configuration for the link resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Positions added on each side of a hit for the locus-browser window.
    #[serde(default = "default_window_padding")]
    pub window_padding: u64,
    /// Base URL of the gene-prediction browser.
    #[serde(default = "default_gene_prediction_base_url")]
    pub gene_prediction_base_url: String,
    /// Base URL of the genomic-locus browser.
    #[serde(default = "default_locus_browser_base_url")]
    pub locus_browser_base_url: String,
    /// Base URL of the annotation browser.
    #[serde(default = "default_annotation_browser_base_url")]
    pub annotation_browser_base_url: String,
    /// Value returned for `gnl|` databases without a mapping.
    #[serde(default = "default_unknown_database_placeholder")]
    pub unknown_database_placeholder: String,
}

fn default_window_padding() -> u64 {
    DEFAULT_WINDOW_PADDING
}

fn default_gene_prediction_base_url() -> String {
    "http://amborella.uga.edu/mgb2/gbrowse/amborella_amtr_v_0_10/".to_string()
}

fn default_locus_browser_base_url() -> String {
    "http://asparagus.uga.edu/jbrowse/".to_string()
}

fn default_annotation_browser_base_url() -> String {
    "http://jlmwiki.plantbio.uga.edu/aagp/".to_string()
}

fn default_unknown_database_placeholder() -> String {
    "Hello!!!".to_string()
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            window_padding: default_window_padding(),
            gene_prediction_base_url: default_gene_prediction_base_url(),
            locus_browser_base_url: default_locus_browser_base_url(),
            annotation_browser_base_url: default_annotation_browser_base_url(),
            unknown_database_placeholder: default_unknown_database_placeholder(),
        }
    }
}

impl LinkConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window padding.
    #[must_use]
    pub const fn with_window_padding(mut self, padding: u64) -> Self {
        self.window_padding = padding;
        self
    }

    /// Sets the gene-prediction browser base URL.
    #[must_use]
    pub fn with_gene_prediction_base_url(mut self, url: impl Into<String>) -> Self {
        self.gene_prediction_base_url = url.into();
        self
    }

    /// Sets the locus browser base URL.
    #[must_use]
    pub fn with_locus_browser_base_url(mut self, url: impl Into<String>) -> Self {
        self.locus_browser_base_url = url.into();
        self
    }

    /// Sets the annotation browser base URL.
    #[must_use]
    pub fn with_annotation_browser_base_url(mut self, url: impl Into<String>) -> Self {
        self.annotation_browser_base_url = url.into();
        self
    }

    /// Sets the placeholder returned for unmapped databases.
    #[must_use]
    pub fn with_unknown_database_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.unknown_database_placeholder = placeholder.into();
        self
    }

    /// Parses and validates a JSON configuration. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, SeqlinkError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeqlinkError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Checks that padding is positive and every base URL is HTTP(S).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_padding == 0 {
            return Err(ConfigError::ZeroPadding);
        }

        let urls = [
            ("gene_prediction_base_url", &self.gene_prediction_base_url),
            ("locus_browser_base_url", &self.locus_browser_base_url),
            ("annotation_browser_base_url", &self.annotation_browser_base_url),
        ];
        for (field, value) in urls {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(ConfigError::invalid_base_url(field, value.as_str()));
            }
        }

        Ok(())
    }
}
