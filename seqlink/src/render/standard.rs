//! The host's standard-link collaborator.

use crate::core::HitCoordinates;

/// Produces the default link for a hit, e.g. a full-sequence download.
///
/// Implementations must be side-effect free and must not fail for any
/// identifier. Any `Fn(&str, HitCoordinates) -> String` closure qualifies.
pub trait StandardLinkBuilder: Send + Sync {
    /// Returns the standard link for `sequence_id` at `coordinates`.
    fn standard_link(&self, sequence_id: &str, coordinates: HitCoordinates) -> String;
}

impl<F> StandardLinkBuilder for F
where
    F: Fn(&str, HitCoordinates) -> String + Send + Sync,
{
    fn standard_link(&self, sequence_id: &str, coordinates: HitCoordinates) -> String {
        self(sequence_id, coordinates)
    }
}
