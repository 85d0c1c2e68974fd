//! Step table formatting.
//!
//! Cell values, plus the plain-text and tab-separated renditions used by
//! `--print` and the clipboard.

use unicode_width::UnicodeWidthStr;

use crate::stepper::Sequence;

/// Format a table value with at most four decimals, trimming trailing zeros.
pub fn format_number(val: f64) -> String {
    if !val.is_finite() {
        return if val.is_nan() {
            "NaN".to_string()
        } else if val.is_sign_positive() {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }
    let s = format!("{:.4}", val);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Render the table with a header row and right-aligned columns.
pub fn to_text(sequence: &Sequence) -> String {
    let columns = sequence.columns();
    let rows = sequence.rows();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.width()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let mut text = String::new();
    let header: Vec<&str> = columns.to_vec();
    push_line(&mut text, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_line(&mut text, &rule, &widths);
    for row in &rows {
        push_line(&mut text, row, &widths);
    }
    text
}

/// Render the table as tab-separated values, header first.
pub fn to_tsv(sequence: &Sequence) -> String {
    let mut text = sequence.columns().join("\t");
    text.push('\n');
    for row in sequence.rows() {
        text.push_str(&row.join("\t"));
        text.push('\n');
    }
    text
}

fn push_line<S: AsRef<str>>(text: &mut String, cells: &[S], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| {
            let cell = cell.as_ref();
            let pad = w.saturating_sub(cell.width());
            format!("{}{}", " ".repeat(pad), cell)
        })
        .collect();
    text.push_str(line.join("  ").trim_end());
    text.push('\n');
}
