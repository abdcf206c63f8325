//! Viewports models how several display surfaces sit relative to each other.
//!
//! Each display has a physical extent (where it is on the desk, in
//! millimetres) and a screen extent (where it is on the desktop, in pixels).
//! A [`Layout`] aggregates displays to answer questions about them: which
//! overlap on screen, how large the combined extents are, and which scale
//! factor maps a source image onto all of them at once.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: build [`Viewport`]s from [`PhysicalRectangle`]s and
//!    geometry strings (`1920x1200+0+320`), directly or via [`LayoutConfig`].
//! 2. **Aggregate**: add them to a [`Layout`]; query overlaps and extents.
//! 3. **Resolve**: attach a source image and pick a [`ScaleMode`].
//! 4. **Cut**: [`Layout::cut_rectangles`] returns, per viewport, the region of
//!    the source image an external compositor should read.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Units in the type system**: physical, screen and image rectangles are
//!   distinct types; combining them does not compile.
//! - **No pixel IO**: the core only ever sees an image's dimensions.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod geometry;
mod layout;
mod source;
mod viewport;

pub use config::model::{LayoutConfig, PhysicalConfig, ViewportConfig};
pub use foundation::core::{ImageSize, MM_PER_INCH};
pub use foundation::error::{ViewportsError, ViewportsResult};
pub use geometry::rect::{ImageRectangle, PhysicalRectangle, Rectangle, ScreenRectangle};
pub use geometry::tagged::TaggedRect;
pub use geometry::unit::{Image, Physical, Screen, Unit, UnitKind};
pub use layout::cut::{CutPlan, CutRect};
pub use layout::model::{ExtentKind, Layout, LayoutState, Overlap, ViewportId};
pub use layout::scale::ScaleMode;
pub use source::dimensions::ImageDimensions;
pub use viewport::model::Viewport;
