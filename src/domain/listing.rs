//! Indexed list rendering
//!
//! Turns records into `"\t<n>. <text>"` lines numbered from 1. The record
//! decides what its public-only text looks like; rendering never inspects
//! privacy flags itself.

/// Offset between 0-based positions and the index shown to users
pub const DISPLAYED_INDEX_OFFSET: usize = 1;

/// A record that can describe itself as text
pub trait DisplayRecord {
    /// Full text, private details included
    fn as_text(&self) -> String;

    /// Text with every private detail left out
    fn as_text_hide_private(&self) -> String;
}

impl<T: DisplayRecord + ?Sized> DisplayRecord for &T {
    fn as_text(&self) -> String {
        (**self).as_text()
    }

    fn as_text_hide_private(&self) -> String {
        (**self).as_text_hide_private()
    }
}

/// Which details a listing shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Private details hidden
    #[default]
    Public,
    /// Everything, private details included
    All,
}

/// Formats one list item
pub fn indexed_item(display_index: usize, text: &str) -> String {
    format!("\t{}. {}", display_index, text)
}

/// Renders records as indexed lines, private details hidden
pub fn render<R: DisplayRecord>(records: &[R]) -> Vec<String> {
    render_with(records, Visibility::Public)
}

/// Renders records as indexed lines with the given visibility
pub fn render_with<R: DisplayRecord>(records: &[R], visibility: Visibility) -> Vec<String> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| {
            let text = match visibility {
                Visibility::Public => record.as_text_hide_private(),
                Visibility::All => record.as_text(),
            };
            indexed_item(position + DISPLAYED_INDEX_OFFSET, &text)
        })
        .collect()
}

/// Joins rendered lines with a line break between items
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Converts a 1-based display index to a position, if it is in range
pub fn position_of(display_index: usize, len: usize) -> Option<usize> {
    display_index
        .checked_sub(DISPLAYED_INDEX_OFFSET)
        .filter(|&position| position < len)
}
