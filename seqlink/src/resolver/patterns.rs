//! Identifier patterns recognised by the resolver.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// `lcl|<token> ` after optional leading whitespace; the trailing space is required.
static LOCAL_SEQUENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*lcl\|(\S+) ").expect("local sequence pattern compiles"));

/// EVM gene model inside a local token.
static GENE_MODEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"evm_27\.model\.(\S+)").expect("gene model pattern compiles"));

/// `gnl|<db>|<rest>`; `db` stops at the first `|`, anything after `rest` is ignored.
static GLOBAL_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*gnl\|(\S+?)\|(\S+)").expect("global label pattern compiles"));

/// How an identifier was classified, borrowing from the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IdentifierKind<'a> {
    /// A local sequence whose token names an EVM gene model.
    GeneModel {
        /// The full local token.
        token: &'a str,
        /// The part after `evm_27.model.`.
        suffix: &'a str,
    },
    /// Any other local sequence.
    Local {
        /// The sequence token.
        token: &'a str,
    },
    /// A global-namespace label.
    GlobalLabel {
        /// The database name between the first two `|`.
        database: &'a str,
        /// The accession after the database name.
        rest: &'a str,
    },
    /// None of the patterns matched.
    Unparsed,
}

impl IdentifierKind<'_> {
    /// Whether a custom link can be produced for this identifier.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        !matches!(self, Self::Unparsed)
    }
}

/// Classifies an identifier. Local sequences take priority over global labels.
#[must_use]
pub fn classify(identifier: &str) -> IdentifierKind<'_> {
    if let Some(token) = LOCAL_SEQUENCE
        .captures(identifier)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    {
        return match GENE_MODEL
            .captures(token)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        {
            Some(suffix) => IdentifierKind::GeneModel { token, suffix },
            None => IdentifierKind::Local { token },
        };
    }

    if let Some(caps) = GLOBAL_LABEL.captures(identifier) {
        if let (Some(database), Some(rest)) = (caps.get(1), caps.get(2)) {
            return IdentifierKind::GlobalLabel {
                database: database.as_str(),
                rest: rest.as_str(),
            };
        }
    }

    IdentifierKind::Unparsed
}
