use std::{fmt, marker::PhantomData, str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::{
    foundation::error::{ViewportsError, ViewportsResult},
    geometry::unit::{Image, Physical, Screen, Unit},
};

/// Rectangle in real-world units.
pub type PhysicalRectangle = Rectangle<Physical>;
/// Rectangle in desktop pixels.
pub type ScreenRectangle = Rectangle<Screen>;
/// Rectangle in source-image pixels.
pub type ImageRectangle = Rectangle<Image>;

static GEOMETRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)x([0-9]+)\+([0-9]+)\+([0-9]+)$").expect("geometry pattern compiles")
});

const MAX_EXACT_INTEGER: u64 = 1 << 53;

/// Immutable axis-aligned rectangle tagged with the coordinate space `U`.
///
/// Width and height are never negative: a constructor edge that falls before
/// its opposite edge is clamped onto it, yielding zero extent on that axis.
/// All operations return new rectangles; operands must share the same unit,
/// which the type system enforces.
#[derive(Clone, Copy, PartialEq)]
pub struct Rectangle<U: Unit> {
    rect: kurbo::Rect,
    unit: PhantomData<U>,
}

impl<U: Unit> Rectangle<U> {
    /// Create a rectangle from its edges.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        // Do not allow inverted rectangles, collapse to zero extent instead.
        let right = if right > left { right } else { left };
        let bottom = if bottom > top { bottom } else { top };
        Self {
            rect: kurbo::Rect::new(left, top, right, bottom),
            unit: PhantomData,
        }
    }

    /// Rectangle of the given size anchored at the origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Rectangle from a size and a top-left position.
    pub fn from_size_position(width: f64, height: f64, x: f64, y: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Wrap a `kurbo` rectangle, normalizing it to non-negative extent.
    pub fn from_kurbo(rect: kurbo::Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.x1, rect.y1)
    }

    /// The underlying `kurbo` rectangle.
    pub fn to_kurbo(self) -> kurbo::Rect {
        self.rect
    }

    /// Left edge.
    pub fn left(&self) -> f64 {
        self.rect.x0
    }

    /// Top edge.
    pub fn top(&self) -> f64 {
        self.rect.y0
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.rect.x1
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.rect.y1
    }

    /// Horizontal extent, never negative.
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Vertical extent, never negative.
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// `(width, height)`.
    pub fn size(&self) -> (f64, f64) {
        (self.width(), self.height())
    }

    /// `(x, y)` of the top-left corner.
    pub fn position(&self) -> (f64, f64) {
        (self.left(), self.top())
    }

    /// `(left, top, right, bottom)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.left(), self.top(), self.right(), self.bottom())
    }

    /// True iff both width and height are nonzero.
    pub fn is_nonempty(&self) -> bool {
        self.width() != 0.0 && self.height() != 0.0
    }

    /// The overlapping area of `self` and `other`.
    ///
    /// Disjoint or merely touching rectangles yield a zero-area rectangle;
    /// use [`Rectangle::overlap`] to get that case as `None`.
    pub fn intersect(&self, other: &Self) -> Self {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Self::new(left, top, right, bottom)
    }

    /// The intersection, or `None` when it has no area.
    pub fn overlap(&self, other: &Self) -> Option<Self> {
        Some(self.intersect(other)).filter(Self::is_nonempty)
    }

    /// The minimal rectangle enclosing both `self` and `other`.
    pub fn unite(&self, other: &Self) -> Self {
        Self::from_kurbo(self.rect.union(other.rect))
    }

    /// Whether `other` lies entirely within `self` (edges may touch).
    pub fn contains(&self, other: &Self) -> bool {
        self.left() <= other.left()
            && self.top() <= other.top()
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }

    /// Round every edge to `precision` decimal digits.
    ///
    /// Negative precision rounds to tens, hundreds, and so on. Halves round
    /// away from zero.
    /// Precisions past what `f64` can represent leave the edges unchanged.
    pub fn round_to(&self, precision: i32) -> Self {
        let p = 10f64.powi(precision);
        if !p.is_finite() || p == 0.0 {
            return *self;
        }
        let r = |v: f64| (v * p).round() / p;
        Self::new(r(self.left()), r(self.top()), r(self.right()), r(self.bottom()))
    }

    /// Round every edge to the nearest integer.
    pub fn round(&self) -> Self {
        Self::from_kurbo(self.rect.round())
    }

    /// Multiply every coordinate by `factor`.
    ///
    /// A negative factor inverts the edges, which collapses to zero extent.
    pub fn scale(&self, factor: f64) -> Self {
        Self::from_kurbo(self.rect.scale_from_origin(factor))
    }
}

impl PhysicalRectangle {
    /// Project into source-image pixels at `scale` pixels per physical unit.
    pub fn project(&self, scale: f64) -> ImageRectangle {
        ImageRectangle::from_kurbo(self.rect.scale_from_origin(scale))
    }
}

impl ScreenRectangle {
    /// Parse an X11-style geometry string `<width>x<height>+<x>+<y>`.
    ///
    /// All four fields must be non-negative integers; signs, decimals and
    /// surrounding whitespace are rejected. Fields above 2^53 match the
    /// format but fail validation, since `f64` cannot hold them exactly.
    pub fn from_geometry(s: &str) -> ViewportsResult<Self> {
        let caps = GEOMETRY
            .captures(s)
            .ok_or_else(|| ViewportsError::geometry(s))?;
        let field = |i: usize| -> ViewportsResult<f64> {
            caps[i]
                .parse::<u64>()
                .ok()
                .filter(|v| *v <= MAX_EXACT_INTEGER)
                .map(|v| v as f64)
                .ok_or_else(|| {
                    ViewportsError::validation(format!(
                        "geometry field {} in '{s}' exceeds 2^53",
                        &caps[i]
                    ))
                })
        };
        Ok(Self::from_size_position(
            field(1)?,
            field(2)?,
            field(3)?,
            field(4)?,
        ))
    }
}

impl FromStr for ScreenRectangle {
    type Err = ViewportsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_geometry(s)
    }
}

fn write_geometry<U: Unit>(r: &Rectangle<U>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
        f,
        "{}x{}+{}+{}",
        r.width(),
        r.height(),
        r.left(),
        r.top()
    )
}

impl fmt::Display for ScreenRectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_geometry(self, f)
    }
}

impl fmt::Display for ImageRectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_geometry(self, f)
    }
}

impl fmt::Display for PhysicalRectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl<U: Unit> fmt::Debug for Rectangle<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(left={}, top={}, right={}, bottom={})",
            U::KIND,
            self.left(),
            self.top(),
            self.right(),
            self.bottom()
        )
    }
}

impl<U: Unit> serde::Serialize for Rectangle<U> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct as _;
        let mut s = serializer.serialize_struct("Rectangle", 6)?;
        s.serialize_field("left", &self.left())?;
        s.serialize_field("top", &self.top())?;
        s.serialize_field("right", &self.right())?;
        s.serialize_field("bottom", &self.bottom())?;
        s.serialize_field("width", &self.width())?;
        s.serialize_field("height", &self.height())?;
        s.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rect.rs"]
mod tests;
