use crate::geometry::unit::UnitKind;

/// Convenience result type used across the crate.
pub type ViewportsResult<T> = Result<T, ViewportsError>;

/// Top-level error taxonomy used by geometry and layout APIs.
///
/// Every error is local and synchronous; nothing here is retryable.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ViewportsError {
    /// A geometry string did not match `<width>x<height>+<x>+<y>`.
    #[error(
        "geometry error: '{input}' does not match format <width>x<height>+<x>+<y>, \
         where all values must be non-negative integers only"
    )]
    GeometryFormat {
        /// The offending input string.
        input: String,
    },

    /// Two rectangles of different units were combined.
    #[error("type mismatch: unsupported operand kinds for {op}: '{lhs}' and '{rhs}'")]
    TypeMismatch {
        /// Name of the attempted operation.
        op: &'static str,
        /// Unit of the left operand.
        lhs: UnitKind,
        /// Unit of the right operand.
        rhs: UnitKind,
    },

    /// A viewport handle does not belong to the layout it was used with.
    #[error("membership error: {0}")]
    Membership(String),

    /// A resolution or scale computation would divide by zero.
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    /// The requested scale does not fit inside the source image.
    #[error("image too small: scale {required} exceeds the maximum fitting scale {max}")]
    ImageTooSmall {
        /// Scale that was asked for.
        required: f64,
        /// Largest scale the source image can satisfy.
        max: f64,
    },

    /// A scale factor that is not finite and strictly positive.
    #[error("invalid scale: {0} (must be finite and > 0)")]
    InvalidScale(f64),

    /// An aggregate query was made on a layout without viewports.
    #[error("empty layout: no viewports to aggregate")]
    EmptyLayout,

    /// Scale resolution needed a source image but none was attached.
    #[error("missing source: no source image attached to the layout")]
    MissingSource,

    /// Reference scale mode was requested without a reference viewport.
    #[error("missing reference: no reference viewport set on the layout")]
    MissingReference,

    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl ViewportsError {
    /// Build a [`ViewportsError::GeometryFormat`] value.
    pub fn geometry(input: impl Into<String>) -> Self {
        Self::GeometryFormat {
            input: input.into(),
        }
    }

    /// Build a [`ViewportsError::Membership`] value.
    pub fn membership(msg: impl Into<String>) -> Self {
        Self::Membership(msg.into())
    }

    /// Build a [`ViewportsError::DivisionByZero`] value.
    pub fn division_by_zero(msg: impl Into<String>) -> Self {
        Self::DivisionByZero(msg.into())
    }

    /// Build a [`ViewportsError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ViewportsError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
