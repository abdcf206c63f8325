use crate::{
    foundation::core::MM_PER_INCH,
    foundation::error::{ViewportsError, ViewportsResult},
    geometry::rect::{PhysicalRectangle, ScreenRectangle},
};

/// One display surface: where it sits on the desk and where it sits on the desktop.
///
/// The two rectangles live in unrelated coordinate spaces, so no relation
/// between them is required.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Viewport {
    physical: PhysicalRectangle,
    screen: ScreenRectangle,
    name: String,
    scale: f64,
}

impl Viewport {
    /// Create a viewport named after its screen geometry, with scale `1.0`.
    pub fn new(physical: PhysicalRectangle, screen: ScreenRectangle) -> Self {
        Self {
            physical,
            screen,
            name: screen.to_string(),
            scale: 1.0,
        }
    }

    /// Create a named viewport.
    pub fn named(
        name: impl Into<String>,
        physical: PhysicalRectangle,
        screen: ScreenRectangle,
    ) -> Self {
        Self {
            name: name.into(),
            ..Self::new(physical, screen)
        }
    }

    /// Physical extent.
    pub fn physical(&self) -> &PhysicalRectangle {
        &self.physical
    }

    /// Desktop extent.
    pub fn screen(&self) -> &ScreenRectangle {
        &self.screen
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scale relative to another viewport, `1.0` until [`Viewport::scale_to`] runs.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Pixels per physical unit along the horizontal axis.
    pub fn resolution(&self) -> ViewportsResult<f64> {
        let physical_width = self.physical.width();
        if physical_width == 0.0 {
            return Err(ViewportsError::division_by_zero(format!(
                "viewport '{}' has zero physical width",
                self.name
            )));
        }
        Ok(self.screen.width() / physical_width)
    }

    /// Pixels per inch, assuming square pixels and physical units in millimetres.
    pub fn dpi(&self) -> ViewportsResult<f64> {
        Ok(self.resolution()? * MM_PER_INCH)
    }

    /// Set this viewport's scale to `self.resolution() / other.resolution()`.
    ///
    /// On error the scale is left unchanged.
    pub fn scale_to(&mut self, other: &Viewport) -> ViewportsResult<()> {
        self.scale = self.relative_scale(other)?;
        Ok(())
    }

    pub(crate) fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    pub(crate) fn relative_scale(&self, other: &Viewport) -> ViewportsResult<f64> {
        let ours = self.resolution()?;
        let theirs = other.resolution()?;
        if theirs == 0.0 {
            return Err(ViewportsError::division_by_zero(format!(
                "viewport '{}' has zero screen width",
                other.name
            )));
        }
        Ok(ours / theirs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/model.rs"]
mod tests;
