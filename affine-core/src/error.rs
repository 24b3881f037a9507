//! Error types for the checked entry points.
//!
//! The algebra itself is total over `f32`; degenerate input only surfaces as an
//! [`Error`] when the caller opts into a checked variant such as
//! [`crate::ProjectionParams::try_matrix`] or [`crate::Vec3::try_unitized`].
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Axis of a view volume, used to report which bound pair collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsAxis {
    /// `left` / `right`
    Horizontal,
    /// `bottom` / `top`
    Vertical,
    /// `near` / `far`
    Depth,
}

impl fmt::Display for BoundsAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoundsAxis::Horizontal => "left/right",
            BoundsAxis::Vertical => "bottom/top",
            BoundsAxis::Depth => "near/far",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// A projection bound pair has zero width, which would divide by zero.
    #[error("degenerate {axis} bounds: {min} and {max} span zero width")]
    DegenerateBounds { axis: BoundsAxis, min: f32, max: f32 },

    /// Normalization of a vector whose length is zero.
    #[error("cannot unitize a zero-length vector")]
    ZeroLength,

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_bounds_message() {
        let err = Error::DegenerateBounds {
            axis: BoundsAxis::Depth,
            min: 5.0,
            max: 5.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("near/far"));
        assert!(msg.contains('5'));
    }
}
