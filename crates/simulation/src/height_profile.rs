//! `HeightProfile`: the ordered column heights of a basin.
//!
//! Heights are stored as `u32`, so a profile can never hold a negative
//! column. Signed input goes through `HeightProfile::try_from_signed`, which
//! reports the first negative value instead of clamping it.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Column heights, left to right. Adjacency matters; the empty profile is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeightProfile(Vec<u32>);

impl HeightProfile {
    /// Build a profile from signed values, rejecting the first negative one.
    pub fn try_from_signed(values: &[i64]) -> Result<Self, ProfileError> {
        values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                u32::try_from(value).map_err(|_| {
                    if value < 0 {
                        ProfileError::NegativeHeight { index, value }
                    } else {
                        ProfileError::HeightOverflow { index, value }
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Copy of this profile with one `height` column added at each end.
    pub fn with_boundaries(&self, height: u32) -> Self {
        let mut heights = Vec::with_capacity(self.0.len() + 2);
        heights.push(height);
        heights.extend_from_slice(&self.0);
        heights.push(height);
        Self(heights)
    }

    /// Tallest column, or `None` for an empty profile.
    pub fn max_height(&self) -> Option<u32> {
        self.0.iter().copied().max()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl Deref for HeightProfile {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

impl From<Vec<u32>> for HeightProfile {
    fn from(heights: Vec<u32>) -> Self {
        Self(heights)
    }
}

impl From<&[u32]> for HeightProfile {
    fn from(heights: &[u32]) -> Self {
        Self(heights.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for HeightProfile {
    fn from(heights: [u32; N]) -> Self {
        Self(heights.to_vec())
    }
}

impl FromIterator<u32> for HeightProfile {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Formats as `[a, b, c]`, the way the diagnostics lines print profiles.
impl fmt::Display for HeightProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, h) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{h}")?;
        }
        f.write_str("]")
    }
}

// =============================================================================
// ProfileError
// =============================================================================

/// Errors raised when signed values cannot form a `HeightProfile`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// A column height was below zero.
    NegativeHeight { index: usize, value: i64 },
    /// A column height does not fit in `u32`.
    HeightOverflow { index: usize, value: i64 },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::NegativeHeight { index, value } => {
                write!(f, "Negative height {value} at column {index}")
            }
            ProfileError::HeightOverflow { index, value } => {
                write!(f, "Height {value} at column {index} is too large")
            }
        }
    }
}

impl std::error::Error for ProfileError {}
