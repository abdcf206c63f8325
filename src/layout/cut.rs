use crate::{
    foundation::core::{ImageSize, check_scale},
    foundation::error::ViewportsResult,
    geometry::rect::ImageRectangle,
    layout::{
        model::{Layout, ViewportId},
        scale::ScaleMode,
    },
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Region of the source image that belongs to one viewport.
pub struct CutRect {
    /// Viewport the region is cut for.
    #[serde(skip)]
    pub viewport: ViewportId,
    /// Viewport display name.
    pub name: String,
    /// Integer-rounded region in source-image pixels.
    pub rect: ImageRectangle,
    /// The same region as a `<width>x<height>+<x>+<y>` string.
    pub geometry: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A resolved scale together with the cut rectangles it produces.
pub struct CutPlan {
    /// Mode the scale was resolved with.
    pub mode: ScaleMode,
    /// Pixels per physical unit used for every cut.
    pub scale: f64,
    /// Source image the plan was resolved against, if any.
    pub source: Option<ImageSize>,
    /// Largest scale the source allows, if a source was given.
    pub max_scale: Option<f64>,
    /// One cut per viewport, in layout order.
    pub cuts: Vec<CutRect>,
}

impl Layout {
    /// Pixel-space rectangle for every viewport at `scale`:
    /// `round(physical.scale(scale))`, in layout order.
    ///
    /// Performs no pixel I/O; the caller's compositor reads these regions.
    pub fn cut_rectangles(&self, scale: f64) -> ViewportsResult<Vec<CutRect>> {
        let scale = check_scale(scale)?;
        Ok(self
            .ids()
            .zip(self.viewports())
            .map(|(viewport, v)| {
                let rect = v.physical().project(scale).round();
                CutRect {
                    viewport,
                    name: v.name().to_string(),
                    geometry: rect.to_string(),
                    rect,
                }
            })
            .collect())
    }

    /// Resolve `mode` against the attached source and cut every viewport.
    #[tracing::instrument(skip(self))]
    pub fn plan(&self, mode: ScaleMode) -> ViewportsResult<CutPlan> {
        let source = self.source();
        let scale = self.resolve_scale_for(mode, source)?;
        let max_scale = source.map(|image| self.max_scale(image)).transpose()?;
        let cuts = self.cut_rectangles(scale)?;
        tracing::debug!(scale, cuts = cuts.len(), "cut plan resolved");
        Ok(CutPlan {
            mode,
            scale,
            source,
            max_scale,
            cuts,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/cut.rs"]
mod tests;
