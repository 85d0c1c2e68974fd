//! Configuration for the drawing surface and for generate requests.

use crate::app::Theme;
use crate::stepper::Mode;

/// Configuration of the logical drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Surface width in drawing units.
    pub width: f64,
    /// Surface height in drawing units.
    pub height: f64,
    /// Marker radius in drawing units, independent of zoom.
    pub marker_radius: f64,
    /// Smallest world extent per axis when fitting the bounding box.
    pub min_extent: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            marker_radius: 4.0,
            min_extent: 1.0,
        }
    }
}

/// Combined application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Drawing surface.
    pub render: RenderConfig,
    /// Stepper selected at startup.
    pub mode: Mode,
    /// Largest number of records a generate request may produce.
    pub max_steps: usize,
    /// Theme at startup.
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            mode: Mode::Basic,
            max_steps: 10_000,
            theme: Theme::GruvboxDark,
        }
    }
}
