use std::collections::BTreeSet;

use crate::{
    foundation::core::check_scale,
    foundation::error::{ViewportsError, ViewportsResult},
    geometry::rect::{PhysicalRectangle, ScreenRectangle},
    layout::{model::Layout, scale::ScaleMode},
    viewport::model::Viewport,
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Declarative description of a layout, as read from JSON.
///
/// ```json
/// {
///   "viewports": [
///     { "name": "Left", "physical": [0, 86.4, 518, 410.4], "screen": "1920x1200+0+320" },
///     { "name": "Laptop", "physical": { "size": [346, 194], "position": [624, 384] },
///       "screen": "1920x1080+1920+1200" }
///   ],
///   "reference": "Left",
///   "scale": "auto"
/// }
/// ```
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Viewports in layout order.
    pub viewports: Vec<ViewportConfig>,
    /// Name of the reference viewport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Default scale mode: `auto`, `max`, `reference` or a number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One viewport entry.
#[serde(deny_unknown_fields)]
pub struct ViewportConfig {
    /// Display name; defaults to the screen geometry string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Physical placement.
    pub physical: PhysicalConfig,
    /// Screen placement as `<width>x<height>+<x>+<y>`.
    pub screen: String,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Physical placement, either as edges or as size plus position.
pub enum PhysicalConfig {
    /// `[left, top, right, bottom]`.
    Edges([f64; 4]),
    /// Size and top-left position.
    Sized {
        /// `[width, height]`.
        size: [f64; 2],
        /// `[x, y]`.
        position: [f64; 2],
    },
}

impl PhysicalConfig {
    fn values(&self) -> [f64; 4] {
        match *self {
            Self::Edges(v) => v,
            Self::Sized { size, position } => [size[0], size[1], position[0], position[1]],
        }
    }

    /// The described physical rectangle.
    pub fn to_rect(&self) -> PhysicalRectangle {
        match *self {
            Self::Edges([l, t, r, b]) => PhysicalRectangle::new(l, t, r, b),
            Self::Sized {
                size: [w, h],
                position: [x, y],
            } => PhysicalRectangle::from_size_position(w, h, x, y),
        }
    }
}

impl LayoutConfig {
    /// Decode a config from JSON text. Does not validate.
    pub fn from_json_str(s: &str) -> ViewportsResult<Self> {
        serde_json::from_str(s).map_err(|e| ViewportsError::serde(e.to_string()))
    }

    /// Check the config without building anything.
    pub fn validate(&self) -> ViewportsResult<()> {
        let mut names = BTreeSet::new();
        for (i, v) in self.viewports.iter().enumerate() {
            let screen = ScreenRectangle::from_geometry(&v.screen)?;
            let name = v.name.clone().unwrap_or_else(|| screen.to_string());
            if name.trim().is_empty() {
                return Err(ViewportsError::validation(format!(
                    "viewport #{i} has an empty name"
                )));
            }
            if v.physical.values().iter().any(|x| !x.is_finite()) {
                return Err(ViewportsError::validation(format!(
                    "viewport '{name}' physical values must be finite"
                )));
            }
            if let PhysicalConfig::Sized { size, .. } = v.physical
                && size.iter().any(|x| *x < 0.0)
            {
                return Err(ViewportsError::validation(format!(
                    "viewport '{name}' physical size must be >= 0"
                )));
            }
            if !names.insert(name.clone()) {
                return Err(ViewportsError::validation(format!(
                    "duplicate viewport name '{name}'"
                )));
            }
        }

        if let Some(reference) = &self.reference
            && !names.contains(reference)
        {
            return Err(ViewportsError::validation(format!(
                "reference '{reference}' does not name a viewport"
            )));
        }
        if let Some(scale) = &self.scale
            && let ScaleMode::Explicit(v) = scale.parse::<ScaleMode>()?
        {
            check_scale(v)?;
        }
        Ok(())
    }

    /// Default scale mode, if the config names one.
    pub fn scale_mode(&self) -> ViewportsResult<Option<ScaleMode>> {
        self.scale.as_deref().map(str::parse::<ScaleMode>).transpose()
    }

    /// Validate and build the layout, applying the reference if given.
    pub fn build(&self) -> ViewportsResult<Layout> {
        self.validate()?;
        let mut layout = Layout::new();
        for v in &self.viewports {
            let physical = v.physical.to_rect();
            let screen = ScreenRectangle::from_geometry(&v.screen)?;
            let viewport = match &v.name {
                Some(name) => Viewport::named(name.clone(), physical, screen),
                None => Viewport::new(physical, screen),
            };
            layout.add_viewport(viewport);
        }
        if let Some(reference) = &self.reference {
            let id = layout.id_of(reference).ok_or_else(|| {
                ViewportsError::membership(format!("no viewport named '{reference}'"))
            })?;
            layout.set_reference(id)?;
        }
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
