use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    foundation::core::ImageSize,
    foundation::error::{ViewportsError, ViewportsResult},
    geometry::{
        rect::{PhysicalRectangle, Rectangle, ScreenRectangle},
        tagged::TaggedRect,
        unit::Unit,
    },
    source::dimensions::ImageDimensions,
    viewport::model::Viewport,
};

static NEXT_LAYOUT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Handle to a viewport inside the [`Layout`] that issued it.
///
/// Handles carry the identity of their layout, so a handle from one layout
/// is never mistaken for a member of another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewportId {
    layout: u64,
    index: usize,
}

impl ViewportId {
    /// Position of the viewport in insertion order.
    pub fn index(self) -> usize {
        self.index
    }
}

/// Which coordinate space an extent query aggregates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExtentKind {
    /// Union of the physical rectangles.
    Physical,
    /// Union of the screen rectangles.
    Screen,
}

/// Coarse lifecycle of a layout, derived from its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutState {
    /// No viewports yet.
    Empty,
    /// At least one viewport, no reference.
    Populated,
    /// At least one viewport and a reference viewport.
    ReferenceSet,
}

/// Two viewports whose screen rectangles share area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlap {
    /// Earlier viewport in insertion order.
    pub first: ViewportId,
    /// Later viewport in insertion order.
    pub second: ViewportId,
    /// The shared screen area; always non-empty.
    pub area: ScreenRectangle,
}

/// An ordered set of viewports plus aggregate queries over them.
///
/// Built incrementally with [`Layout::add_viewport`], optionally
/// [`Layout::set_reference`] and [`Layout::attach_source`], then queried.
/// Queries never mutate the layout.
#[derive(Clone, Debug)]
pub struct Layout {
    token: u64,
    viewports: Vec<Viewport>,
    reference: Option<usize>,
    source: Option<ImageSize>,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self {
            token: NEXT_LAYOUT_TOKEN.fetch_add(1, Ordering::Relaxed),
            viewports: Vec::new(),
            reference: None,
            source: None,
        }
    }

    /// Append a viewport. No duplicate check is made.
    pub fn add_viewport(&mut self, viewport: Viewport) -> ViewportId {
        self.viewports.push(viewport);
        self.id_at(self.viewports.len() - 1)
    }

    /// Viewports in insertion order.
    pub fn viewports(&self) -> &[Viewport] {
        &self.viewports
    }

    /// Handles in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = ViewportId> + '_ {
        (0..self.viewports.len()).map(|index| self.id_at(index))
    }

    /// Number of viewports.
    pub fn len(&self) -> usize {
        self.viewports.len()
    }

    /// Whether the layout has no viewports.
    pub fn is_empty(&self) -> bool {
        self.viewports.is_empty()
    }

    /// Look up a viewport by handle; `None` for foreign handles.
    pub fn get(&self, id: ViewportId) -> Option<&Viewport> {
        if id.layout != self.token {
            return None;
        }
        self.viewports.get(id.index)
    }

    /// Handle of the first viewport with this name.
    pub fn id_of(&self, name: &str) -> Option<ViewportId> {
        self.viewports
            .iter()
            .position(|v| v.name() == name)
            .map(|index| self.id_at(index))
    }

    /// Make `id` the reference viewport.
    ///
    /// Fails with [`ViewportsError::Membership`] if `id` was not issued by
    /// this layout; the current reference is kept in that case.
    pub fn set_reference(&mut self, id: ViewportId) -> ViewportsResult<()> {
        if self.get(id).is_none() {
            return Err(ViewportsError::membership(format!(
                "viewport #{} is not a member of this layout",
                id.index
            )));
        }
        self.reference = Some(id.index);
        tracing::debug!(reference = %self.viewports[id.index].name(), "reference viewport set");
        Ok(())
    }

    /// The reference viewport, if one was set.
    pub fn reference(&self) -> Option<&Viewport> {
        self.reference.map(|index| &self.viewports[index])
    }

    /// Record the pixel size of the source image. Only the size is kept.
    pub fn attach_source(&mut self, image: &impl ImageDimensions) {
        self.source = Some(image.image_size());
    }

    /// Pixel size of the attached source image.
    pub fn source(&self) -> Option<ImageSize> {
        self.source
    }

    /// Lifecycle state derived from the current contents.
    pub fn state(&self) -> LayoutState {
        match (self.viewports.is_empty(), self.reference) {
            (true, _) => LayoutState::Empty,
            (false, None) => LayoutState::Populated,
            (false, Some(_)) => LayoutState::ReferenceSet,
        }
    }

    /// Every unordered pair of viewports whose screen rectangles overlap.
    ///
    /// Each pair is compared once; pairs are reported in insertion order.
    pub fn pairwise_overlaps(&self) -> Vec<Overlap> {
        let mut out = Vec::new();
        for (i, a) in self.viewports.iter().enumerate() {
            for (j, b) in self.viewports.iter().enumerate().skip(i + 1) {
                if let Some(area) = a.screen().overlap(b.screen()) {
                    out.push(Overlap {
                        first: self.id_at(i),
                        second: self.id_at(j),
                        area,
                    });
                }
            }
        }
        out
    }

    /// Whether any two viewports overlap on screen.
    pub fn has_overlaps(&self) -> bool {
        !self.pairwise_overlaps().is_empty()
    }

    /// Whether `screen` overlaps any viewport already in the layout.
    pub fn overlaps_any(&self, screen: &ScreenRectangle) -> bool {
        self.viewports
            .iter()
            .any(|v| v.screen().intersect(screen).is_nonempty())
    }

    /// Bounding box of all physical rectangles.
    pub fn physical_size(&self) -> ViewportsResult<PhysicalRectangle> {
        fold_union(self.viewports.iter().map(|v| *v.physical()))
    }

    /// Bounding box of all screen rectangles.
    pub fn screen_size(&self) -> ViewportsResult<ScreenRectangle> {
        fold_union(self.viewports.iter().map(|v| *v.screen()))
    }

    /// Bounding box of either space, tagged with its unit.
    pub fn unified_extent(&self, which: ExtentKind) -> ViewportsResult<TaggedRect> {
        Ok(match which {
            ExtentKind::Physical => self.physical_size()?.into(),
            ExtentKind::Screen => self.screen_size()?.into(),
        })
    }

    pub(crate) fn viewport_mut(&mut self, index: usize) -> &mut Viewport {
        &mut self.viewports[index]
    }

    fn id_at(&self, index: usize) -> ViewportId {
        ViewportId {
            layout: self.token,
            index,
        }
    }
}

fn fold_union<U: Unit>(
    mut rects: impl Iterator<Item = Rectangle<U>>,
) -> ViewportsResult<Rectangle<U>> {
    let first = rects.next().ok_or(ViewportsError::EmptyLayout)?;
    Ok(rects.fold(first, |acc, r| acc.unite(&r)))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/model.rs"]
mod tests;
