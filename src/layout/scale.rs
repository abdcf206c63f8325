use std::{fmt, str::FromStr};

use crate::{
    foundation::core::{ImageSize, check_scale},
    foundation::error::{ViewportsError, ViewportsResult},
    layout::model::Layout,
};

/// How a layout picks the pixels-per-physical-unit factor for cutting.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// A caller-chosen factor; must be finite, positive and fit the source.
    Explicit(f64),
    /// Highest viewport resolution, clamped down to what the source can supply.
    Auto,
    /// Largest factor at which the physical extent still fits the source.
    Max,
    /// The reference viewport's resolution; never clamped.
    Reference,
}

impl FromStr for ScaleMode {
    type Err = ViewportsError;

    /// Parse `auto`, `max`, `reference` (or `ref`), or a number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "max" => Ok(Self::Max),
            "reference" | "ref" => Ok(Self::Reference),
            other => other
                .parse::<f64>()
                .map(Self::Explicit)
                .map_err(|_| {
                    ViewportsError::validation(format!(
                        "scale mode '{s}' is not auto, max, reference or a number"
                    ))
                }),
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(v) => write!(f, "{v}"),
            Self::Auto => f.write_str("auto"),
            Self::Max => f.write_str("max"),
            Self::Reference => f.write_str("reference"),
        }
    }
}

impl Layout {
    /// Largest uniform scale at which the unified physical extent fits in `image`.
    ///
    /// The limiting axis is height when the image is relatively wider than the
    /// extent, width otherwise.
    pub fn max_scale(&self, image: ImageSize) -> ViewportsResult<f64> {
        let extent = self.physical_size()?;
        let (pw, ph) = extent.size();
        if pw == 0.0 || ph == 0.0 {
            return Err(ViewportsError::division_by_zero(format!(
                "unified physical extent {pw}x{ph} has a zero side"
            )));
        }
        let iw = f64::from(image.width);
        let ih = f64::from(image.height);
        // iw / ih > pw / ph, cross-multiplied so a zero-height image is fine.
        if iw * ph > ih * pw {
            Ok(ih / ph)
        } else {
            Ok(iw / pw)
        }
    }

    /// Resolve `mode` against the attached source image.
    pub fn resolve_scale(&self, mode: ScaleMode) -> ViewportsResult<f64> {
        self.resolve_scale_for(mode, self.source())
    }

    /// Resolve `mode` against an explicit source size.
    ///
    /// Only [`ScaleMode::Explicit`] works without a source; with one it is
    /// still checked against [`Layout::max_scale`].
    #[tracing::instrument(skip(self))]
    pub fn resolve_scale_for(
        &self,
        mode: ScaleMode,
        source: Option<ImageSize>,
    ) -> ViewportsResult<f64> {
        match mode {
            ScaleMode::Explicit(scale) => {
                let scale = check_scale(scale)?;
                if let Some(image) = source {
                    let max = self.max_scale(image)?;
                    if scale > max {
                        return Err(ViewportsError::ImageTooSmall {
                            required: scale,
                            max,
                        });
                    }
                }
                Ok(scale)
            }
            ScaleMode::Auto => {
                let image = source.ok_or(ViewportsError::MissingSource)?;
                let max = self.fitting_scale(image)?;
                let best = check_scale(self.highest_resolution()?)?;
                if best > max {
                    tracing::debug!(wanted = best, max, "auto scale clamped to source image");
                    Ok(max)
                } else {
                    Ok(best)
                }
            }
            ScaleMode::Max => {
                let image = source.ok_or(ViewportsError::MissingSource)?;
                self.fitting_scale(image)
            }
            ScaleMode::Reference => {
                let reference = self.reference().ok_or(ViewportsError::MissingReference)?;
                let image = source.ok_or(ViewportsError::MissingSource)?;
                let required = check_scale(reference.resolution()?)?;
                let max = self.max_scale(image)?;
                if required > max {
                    return Err(ViewportsError::ImageTooSmall { required, max });
                }
                Ok(required)
            }
        }
    }

    /// [`Layout::max_scale`], failing with [`ViewportsError::ImageTooSmall`]
    /// when the image has no pixels along the limiting axis.
    fn fitting_scale(&self, image: ImageSize) -> ViewportsResult<f64> {
        let max = self.max_scale(image)?;
        if max > 0.0 {
            return Ok(max);
        }
        Err(ViewportsError::ImageTooSmall {
            required: self.highest_resolution()?,
            max,
        })
    }

    fn highest_resolution(&self) -> ViewportsResult<f64> {
        let mut best = f64::NEG_INFINITY;
        for v in self.viewports() {
            best = best.max(v.resolution()?);
        }
        Ok(best)
    }

    /// Set every viewport's scale relative to the reference viewport.
    ///
    /// All ratios are computed before any viewport is touched, so on error
    /// no scale changes.
    pub fn scale_to_reference(&mut self) -> ViewportsResult<()> {
        let reference = self
            .reference()
            .cloned()
            .ok_or(ViewportsError::MissingReference)?;
        let scales = self
            .viewports()
            .iter()
            .map(|v| v.relative_scale(&reference))
            .collect::<ViewportsResult<Vec<_>>>()?;
        for (i, scale) in scales.into_iter().enumerate() {
            self.viewport_mut(i).set_scale(scale);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/scale.rs"]
mod tests;
