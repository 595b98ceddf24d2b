//! Hit descriptor and coordinate span.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::InvalidCoordinatesError;

/// A 1-based, inclusive coordinate span of a search hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HitCoordinates {
    /// First matched position.
    pub start: u64,
    /// Last matched position.
    pub end: u64,
}

impl HitCoordinates {
    /// Creates coordinates without validation.
    ///
    /// Resolution saturates all window arithmetic, so unchecked values never
    /// cause a failure downstream.
    #[must_use]
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Creates coordinates, rejecting a zero start or a reversed span.
    pub const fn try_new(start: u64, end: u64) -> Result<Self, InvalidCoordinatesError> {
        if start == 0 || start > end {
            return Err(InvalidCoordinatesError::new(start, end));
        }
        Ok(Self { start, end })
    }
}

impl From<(u64, u64)> for HitCoordinates {
    fn from((start, end): (u64, u64)) -> Self {
        Self::new(start, end)
    }
}

impl fmt::Display for HitCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// One hit from a sequence search, as handed over by the result renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitDescriptor {
    /// Raw identifier as it appears in the search output.
    pub sequence_id: String,
    /// Coordinates of the hit on that sequence.
    pub hit_coordinates: HitCoordinates,
}

impl HitDescriptor {
    /// Creates a new hit descriptor.
    #[must_use]
    pub fn new(sequence_id: impl Into<String>, hit_coordinates: impl Into<HitCoordinates>) -> Self {
        Self {
            sequence_id: sequence_id.into(),
            hit_coordinates: hit_coordinates.into(),
        }
    }
}
