//! Scene construction for a step table.
//!
//! [`render`] lays the plotted pixels of a sequence out as a list of drawing
//! commands in world coordinates together with the [`Viewport`] that fits
//! them onto the surface. Backends (the terminal canvas in `ui::plot`, the
//! SVG writer in [`svg`]) only replay the commands.

pub mod svg;
mod viewport;

pub use viewport::Viewport;

use crate::config::RenderConfig;
use crate::geometry::{Bounds, Point};
use crate::stepper::Sequence;

/// One drawing operation, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Wipe the surface.
    Clear,
    /// Thin unit grid line.
    GridLine {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Bold axis line through 0.
    AxisLine {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Path segment between consecutive plotted pixels.
    Segment {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Filled dot on a plotted pixel.
    Marker {
        /// Centre.
        center: Point,
        /// Radius in world units; constant on the surface.
        radius: f64,
    },
}

/// A fitted viewport and the commands to draw through it.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Surface transform, `None` when there is nothing to draw.
    pub viewport: Option<Viewport>,
    /// Commands in drawing order.
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// A scene that only clears the surface.
    pub fn cleared() -> Self {
        Self {
            viewport: None,
            commands: vec![DrawCommand::Clear],
        }
    }

    /// Whether the scene draws anything besides clearing.
    pub fn is_blank(&self) -> bool {
        self.commands.iter().all(|c| matches!(c, DrawCommand::Clear))
    }
}

/// Build the scene for a step table.
pub fn render(sequence: &Sequence, config: &RenderConfig) -> Scene {
    render_points(&sequence.plot_points(), config)
}

/// Build the scene for already rounded plot points, in path order.
pub fn render_points(points: &[Point], config: &RenderConfig) -> Scene {
    let Some(bounds) = Bounds::from_points(points) else {
        return Scene::cleared();
    };
    let bounds = bounds.with_min_extent(config.min_extent);
    let viewport = Viewport::fit(&bounds, config.width, config.height);

    let mut commands = vec![DrawCommand::Clear];

    let spacing = grid_spacing(viewport.scale);
    for x in grid_lines(bounds.min_x, bounds.max_x, spacing) {
        commands.push(DrawCommand::GridLine {
            from: Point::new(x, bounds.min_y),
            to: Point::new(x, bounds.max_y),
        });
    }
    for y in grid_lines(bounds.min_y, bounds.max_y, spacing) {
        commands.push(DrawCommand::GridLine {
            from: Point::new(bounds.min_x, y),
            to: Point::new(bounds.max_x, y),
        });
    }

    commands.push(DrawCommand::AxisLine {
        from: Point::new(bounds.min_x, 0.0),
        to: Point::new(bounds.max_x, 0.0),
    });
    commands.push(DrawCommand::AxisLine {
        from: Point::new(0.0, bounds.min_y),
        to: Point::new(0.0, bounds.max_y),
    });

    let radius = config.marker_radius / viewport.scale;
    let mut prev: Option<Point> = None;
    for &p in points {
        if let Some(from) = prev {
            commands.push(DrawCommand::Segment { from, to: p });
        }
        commands.push(DrawCommand::Marker { center: p, radius });
        prev = Some(p);
    }

    tracing::debug!(
        points = points.len(),
        commands = commands.len(),
        scale = viewport.scale,
        "Rendered scene"
    );

    Scene {
        viewport: Some(viewport),
        commands,
    }
}

/// Closest grid lines may get on the surface before the grid is thinned.
const MIN_GRID_GAP: f64 = 4.0;

/// World distance between grid lines: 1, or the smallest whole number of
/// units that keeps lines at least [`MIN_GRID_GAP`] apart on the surface.
fn grid_spacing(scale: f64) -> f64 {
    let spacing = (MIN_GRID_GAP / scale).ceil();
    if spacing.is_finite() {
        spacing.max(1.0)
    } else {
        f64::MAX
    }
}

/// Multiples of `spacing` inside `[lo, hi]`.
fn grid_lines(lo: f64, hi: f64, spacing: f64) -> impl Iterator<Item = f64> {
    let first = (lo / spacing).ceil() as i64;
    let last = (hi / spacing).floor() as i64;
    (first..=last).map(move |v| v as f64 * spacing)
}
