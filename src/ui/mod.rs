//! User interface rendering.

mod form;
mod keymap_bar;
mod plot;
mod status_bar;
mod table;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    f.render_widget(Block::default().style(Style::default().bg(colors.bg)), f.area());

    // Form, content, status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    form::draw_form(f, chunks[0], app, &colors);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let title = format!("Plot ({})", app.session.sequence.mode().name());
    plot::draw_plot(f, content[0], &app.scene, &title, &colors);
    table::draw_table(
        f,
        content[1],
        &app.session.sequence,
        app.table_scroll,
        &colors,
    );

    status_bar::draw_status(f, chunks[2], &app.status, &app.session.phase, &colors);
    keymap_bar::draw_keymap(f, chunks[3], &colors);
}
