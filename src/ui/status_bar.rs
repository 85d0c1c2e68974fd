//! Status bar UI component.

use crate::session::Phase;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub(super) fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    phase: &Phase,
    colors: &ThemeColors,
) {
    let fg = match phase {
        Phase::Invalid(_) => colors.error,
        Phase::Idle | Phase::Rendered => colors.status_fg,
    };

    let paragraph =
        Paragraph::new(status.to_string()).style(Style::default().fg(fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
