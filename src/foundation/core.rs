use crate::foundation::error::{ViewportsError, ViewportsResult};

/// Millimetres per inch, used to express resolutions as DPI.
pub const MM_PER_INCH: f64 = 25.4;

/// Pixel dimensions of a source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageSize {
    /// Create an image size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse `<width>x<height>`, as accepted by `--image-size` on the command line.
    pub fn parse(s: &str) -> ViewportsResult<Self> {
        let bad = || ViewportsError::validation(format!("image size '{s}' is not <width>x<height>"));
        let (w, h) = s.split_once('x').ok_or_else(bad)?;
        let width = w.parse::<u32>().map_err(|_| bad())?;
        let height = h.parse::<u32>().map_err(|_| bad())?;
        Ok(Self { width, height })
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Check that a scale factor is finite and strictly positive.
pub(crate) fn check_scale(scale: f64) -> ViewportsResult<f64> {
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(ViewportsError::InvalidScale(scale))
    }
}
