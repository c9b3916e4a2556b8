use crate::{Layout, Orientation, Point2};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Serializable definition of a [Layout]. This is the format used to load a
/// layout from a config file. Any missing fields are populated with defaults,
/// so an empty config is valid.
///
/// Sizes and spacing have a lower bound of 0.001 here. [Layout::new] only
/// requires them to be positive, but anything that small in a config file is
/// almost certainly a typo.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pointy-topped or flat-topped hexes
    pub orientation: Orientation,

    /// Horizontal distance from the center of a hex to its vertices, in
    /// pixels. See [Layout::size].
    #[validate(range(min = 0.001))]
    pub size_x: f64,

    /// Vertical distance from the center of a hex to its vertices, in pixels.
    /// See [Layout::size].
    #[validate(range(min = 0.001))]
    pub size_y: f64,

    /// Pixel x of the center of the origin hex
    pub origin_x: f64,

    /// Pixel y of the center of the origin hex
    pub origin_y: f64,

    /// Scaling factor for the distance between hex centers. See
    /// [Layout::spacing].
    #[validate(range(min = 0.001))]
    pub spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Layout::default().to_config()
    }
}

impl Layout {
    /// Build a layout from a config. The config is validated first; if that
    /// fails, the returned error can be downcast to
    /// [validator::ValidationErrors] to see which fields were invalid.
    pub fn from_config(config: LayoutConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let layout = Self::new(
            config.orientation,
            Point2::new(config.size_x, config.size_y),
            Point2::new(config.origin_x, config.origin_y),
        )
        .and_then(|layout| layout.with_spacing(config.spacing))
        .context("invalid layout config")?;
        Ok(layout)
    }

    /// Get the config that would rebuild this layout
    pub fn to_config(&self) -> LayoutConfig {
        LayoutConfig {
            orientation: self.orientation(),
            size_x: self.size().x,
            size_y: self.size().y,
            origin_x: self.origin().x,
            origin_y: self.origin().y,
            spacing: self.spacing(),
        }
    }
}
