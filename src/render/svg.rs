//! SVG backend for [`Scene`]s.

use super::{DrawCommand, Scene};
use crate::config::RenderConfig;
use crate::geometry::Point;

const GRID_STROKE: &str = "#ddd";
const AXIS_STROKE: &str = "#000";
const PATH_STROKE: &str = "blue";
const MARKER_FILL: &str = "red";

/// Write a scene as a standalone SVG document sized to the surface.
pub fn to_svg(scene: &Scene, config: &RenderConfig) -> String {
    let background = format!(
        r#"  <rect width="{}" height="{}" fill="white"/>"#,
        config.width, config.height
    );

    let mut lines = vec![format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = config.width,
        h = config.height,
    )];

    if let Some(vp) = scene.viewport {
        lines.extend(scene.commands.iter().map(|cmd| match *cmd {
            DrawCommand::Clear => background.clone(),
            DrawCommand::GridLine { from, to } => {
                line(vp.to_surface(from), vp.to_surface(to), GRID_STROKE, 1.0)
            },
            DrawCommand::AxisLine { from, to } => {
                line(vp.to_surface(from), vp.to_surface(to), AXIS_STROKE, 2.0)
            },
            DrawCommand::Segment { from, to } => {
                line(vp.to_surface(from), vp.to_surface(to), PATH_STROKE, 1.0)
            },
            DrawCommand::Marker { center, radius } => {
                let c = vp.to_surface(center);
                format!(
                    r#"  <circle cx="{:.3}" cy="{:.3}" r="{:.3}" fill="{}"/>"#,
                    c.x,
                    c.y,
                    radius * vp.scale,
                    MARKER_FILL
                )
            },
        }));
    } else if !scene.commands.is_empty() {
        lines.push(background);
    }

    lines.push("</svg>\n".to_string());
    lines.join("\n")
}

fn line(from: Point, to: Point, stroke: &str, width: f64) -> String {
    format!(
        r#"  <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="{}" stroke-width="{}"/>"#,
        from.x, from.y, to.x, to.y, stroke, width
    )
}
