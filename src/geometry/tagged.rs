//! Rectangles whose unit is only known at runtime.
//!
//! Typed code should use [`Rectangle`](super::Rectangle) directly, where a
//! cross-unit operation does not compile. `TaggedRect` exists for values
//! whose unit is data (extent queries by kind, decoded input) and turns the
//! same mistake into [`ViewportsError::TypeMismatch`].

use crate::{
    foundation::error::{ViewportsError, ViewportsResult},
    geometry::{
        rect::{ImageRectangle, PhysicalRectangle, ScreenRectangle},
        unit::UnitKind,
    },
};

/// A rectangle carrying its unit as a runtime tag.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaggedRect {
    /// Real-world units.
    Physical(PhysicalRectangle),
    /// Desktop pixels.
    Screen(ScreenRectangle),
    /// Source-image pixels.
    Image(ImageRectangle),
}

impl TaggedRect {
    /// The runtime unit tag.
    pub fn kind(&self) -> UnitKind {
        match self {
            Self::Physical(_) => UnitKind::Physical,
            Self::Screen(_) => UnitKind::Screen,
            Self::Image(_) => UnitKind::Image,
        }
    }

    /// Same-unit intersection; mismatched units fail.
    pub fn intersect(&self, other: &Self) -> ViewportsResult<Self> {
        match (self, other) {
            (Self::Physical(a), Self::Physical(b)) => Ok(Self::Physical(a.intersect(b))),
            (Self::Screen(a), Self::Screen(b)) => Ok(Self::Screen(a.intersect(b))),
            (Self::Image(a), Self::Image(b)) => Ok(Self::Image(a.intersect(b))),
            _ => Err(self.mismatch("intersect", other)),
        }
    }

    /// Same-unit union; mismatched units fail.
    pub fn unite(&self, other: &Self) -> ViewportsResult<Self> {
        match (self, other) {
            (Self::Physical(a), Self::Physical(b)) => Ok(Self::Physical(a.unite(b))),
            (Self::Screen(a), Self::Screen(b)) => Ok(Self::Screen(a.unite(b))),
            (Self::Image(a), Self::Image(b)) => Ok(Self::Image(a.unite(b))),
            _ => Err(self.mismatch("unite", other)),
        }
    }

    /// True iff both width and height are nonzero.
    pub fn is_nonempty(&self) -> bool {
        match self {
            Self::Physical(r) => r.is_nonempty(),
            Self::Screen(r) => r.is_nonempty(),
            Self::Image(r) => r.is_nonempty(),
        }
    }

    /// `(width, height)` regardless of unit.
    pub fn size(&self) -> (f64, f64) {
        match self {
            Self::Physical(r) => r.size(),
            Self::Screen(r) => r.size(),
            Self::Image(r) => r.size(),
        }
    }

    fn mismatch(&self, op: &'static str, other: &Self) -> ViewportsError {
        ViewportsError::TypeMismatch {
            op,
            lhs: self.kind(),
            rhs: other.kind(),
        }
    }
}

impl From<PhysicalRectangle> for TaggedRect {
    fn from(r: PhysicalRectangle) -> Self {
        Self::Physical(r)
    }
}

impl From<ScreenRectangle> for TaggedRect {
    fn from(r: ScreenRectangle) -> Self {
        Self::Screen(r)
    }
}

impl From<ImageRectangle> for TaggedRect {
    fn from(r: ImageRectangle) -> Self {
        Self::Image(r)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/tagged.rs"]
mod tests;
