//! Clipboard integration.

use crate::error::Result;
use crate::stepper::Sequence;
use crate::table;
use arboard::Clipboard;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copy a step table to the clipboard as tab-separated values.
pub fn copy_table(sequence: &Sequence) -> Result<()> {
    copy_to_clipboard(&table::to_tsv(sequence))
}
