//! Step table panel.

use crate::stepper::Sequence;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// Draw the step table starting at row `scroll`.
pub(super) fn draw_table(
    f: &mut Frame<'_>,
    area: Rect,
    sequence: &Sequence,
    scroll: usize,
    colors: &ThemeColors,
) {
    // Borders and header
    let visible_rows = (area.height as usize).saturating_sub(3);
    let total = sequence.len();
    let start = scroll.min(total);
    let end = (start + visible_rows).min(total);

    let header = Row::new(sequence.columns().iter().map(|c| {
        Cell::from(*c).style(
            Style::default()
                .fg(colors.label)
                .add_modifier(Modifier::BOLD),
        )
    }));

    let rows: Vec<Row<'_>> = sequence
        .rows()
        .into_iter()
        .skip(start)
        .take(end - start)
        .map(|cells| {
            Row::new(
                cells
                    .into_iter()
                    .map(|c| Cell::from(c).style(Style::default().fg(colors.value))),
            )
        })
        .collect();

    let widths = vec![Constraint::Fill(1); sequence.columns().len()];

    let title = if total == 0 {
        format!(" Steps ({}) ", sequence.mode().name())
    } else {
        format!(
            " Steps ({}) {}-{}/{} ",
            sequence.mode().name(),
            start + 1,
            end,
            total
        )
    };

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .style(Style::default().bg(colors.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(title)
                .title_style(Style::default().fg(colors.heading)),
        );

    f.render_widget(table, area);
}
