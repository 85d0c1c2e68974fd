//! Endpoint input row.

use crate::app::App;
use crate::session::Field;
use crate::stepper::Mode;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the four endpoint fields and the mode selector.
pub(super) fn draw_form(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 6),
            Constraint::Ratio(1, 6),
            Constraint::Ratio(1, 6),
            Constraint::Ratio(1, 6),
            Constraint::Ratio(2, 6),
        ])
        .split(area);

    for (field, chunk) in Field::ALL.iter().zip(chunks.iter()) {
        let focused = *field == app.focus;
        let border = if focused { colors.focus } else { colors.border };
        let mut text = app.session.inputs.get(*field).to_string();
        if focused {
            text.push('▏');
        }

        let input = Paragraph::new(text)
            .style(Style::default().fg(colors.value))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(format!(" {} ", field.label()))
                    .title_style(Style::default().fg(colors.label)),
            );
        f.render_widget(input, *chunk);
    }

    let mode_span = |mode: Mode| {
        let style = if app.session.mode == mode {
            Style::default()
                .fg(colors.bg)
                .bg(colors.heading)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        };
        Span::styled(format!(" {} ", mode.name()), style)
    };

    let selector = Paragraph::new(Line::from(vec![
        mode_span(Mode::Basic),
        Span::raw("  "),
        mode_span(Mode::Dda),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .title(" Mode ")
            .title_style(Style::default().fg(colors.label)),
    );
    f.render_widget(selector, chunks[4]);
}
