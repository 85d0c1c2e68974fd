//! Terminal backend for [`Scene`]s.
//!
//! Commands are replayed on a Braille canvas whose bounds are the world
//! rectangle the viewport shows, so the canvas does the world-to-cell mapping.

use crate::render::{DrawCommand, Scene};
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

/// Draw the plot panel.
pub(super) fn draw_plot(
    f: &mut Frame<'_>,
    area: Rect,
    scene: &Scene,
    title: &str,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(colors.heading));

    let Some(viewport) = scene.viewport else {
        let hint = Paragraph::new("Enter endpoints and press Enter")
            .style(Style::default().fg(colors.border))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(hint, area);
        return;
    };

    let world = viewport.visible_world();
    let canvas = Canvas::default()
        .block(block)
        .background_color(colors.bg)
        .marker(Marker::Braille)
        .x_bounds([world.min_x, world.max_x])
        .y_bounds([world.min_y, world.max_y])
        .paint(|ctx| {
            let mut layered = false;
            for cmd in &scene.commands {
                match *cmd {
                    DrawCommand::Clear => {},
                    DrawCommand::GridLine { from, to } => {
                        ctx.draw(&CanvasLine::new(from.x, from.y, to.x, to.y, colors.grid));
                    },
                    DrawCommand::AxisLine { from, to } => {
                        ctx.draw(&CanvasLine::new(from.x, from.y, to.x, to.y, colors.axis));
                    },
                    DrawCommand::Segment { from, to } => {
                        // Keep the path above grid and axes.
                        if !layered {
                            ctx.layer();
                            layered = true;
                        }
                        ctx.draw(&CanvasLine::new(from.x, from.y, to.x, to.y, colors.path));
                    },
                    DrawCommand::Marker { center, radius } => {
                        if !layered {
                            ctx.layer();
                            layered = true;
                        }
                        ctx.draw(&Circle {
                            x: center.x,
                            y: center.y,
                            radius,
                            color: colors.marker,
                        });
                        ctx.draw(&Points {
                            coords: &[(center.x, center.y)],
                            color: colors.marker,
                        });
                    },
                }
            }
        });

    f.render_widget(canvas, area);
}
