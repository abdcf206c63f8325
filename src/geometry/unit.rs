//! Marker types tagging which coordinate space a rectangle lives in.
//!
//! This module contains the sealed [`Unit`] trait and its three implementors:
//! [`Physical`] (real-world units, millimetres by convention), [`Screen`]
//! (desktop pixels) and [`Image`] (source-image pixels). A
//! [`Rectangle`](super::Rectangle) carries one of these as a phantom type so
//! that mixing spaces is a compile error rather than a silent bug.

use std::fmt;

mod private {
    pub trait Sealed {}
}

/// Runtime name of a coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// Real-world units.
    Physical,
    /// Desktop pixel units.
    Screen,
    /// Source-image pixel units.
    Image,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Physical => "PhysicalRectangle",
            Self::Screen => "ScreenRectangle",
            Self::Image => "ImageRectangle",
        })
    }
}

/// A coordinate space. Sealed: only the markers in this module implement it.
pub trait Unit:
    private::Sealed + Copy + Default + fmt::Debug + PartialEq + Send + Sync + 'static
{
    /// Runtime tag of this space.
    const KIND: UnitKind;
}

/// Real-world space, e.g. millimetres measured on the desk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Physical;

/// Logical desktop space, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Screen;

/// Pixel space of a source image that is cut up across viewports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Image;

impl private::Sealed for Physical {}
impl private::Sealed for Screen {}
impl private::Sealed for Image {}

impl Unit for Physical {
    const KIND: UnitKind = UnitKind::Physical;
}

impl Unit for Screen {
    const KIND: UnitKind = UnitKind::Screen;
}

impl Unit for Image {
    const KIND: UnitKind = UnitKind::Image;
}
