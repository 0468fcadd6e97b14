//! Blocks of `//` comment lines.

use crate::object::Mode;
use common_framework::{BufferView, Cursor, TextSpan};
use tracing::debug;

fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with("//")
}

fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_blank_row(buffer: &dyn BufferView, row: usize) -> bool {
    buffer.line(row).is_some_and(is_blank_line)
}

/// First row in `rows` that is neither a comment nor blank.
fn first_code_row<I>(buffer: &dyn BufferView, rows: I) -> Option<usize>
where
    I: IntoIterator<Item = usize>,
{
    rows.into_iter().find(|&row| match buffer.line(row) {
        Some(line) => !is_comment_line(line) && !is_blank_line(line),
        None => true,
    })
}

/// Finds the comment block around the cursor's row as whole lines.
///
/// Blank lines between comment lines belong to the block. In outer mode
/// blank lines at either edge are kept as well; inner mode trims them.
pub fn detect_comment(cursor: Cursor, buffer: &dyn BufferView, mode: Mode) -> Option<TextSpan> {
    let row = cursor.row()?;
    if !is_comment_line(buffer.line(row)?) {
        return None;
    }

    let mut first = first_code_row(buffer, (0..row).rev()).map_or(0, |code| code + 1);
    let mut last = first_code_row(buffer, row..buffer.line_count())
        .map_or(buffer.line_count().saturating_sub(1), |code| code - 1);

    if mode == Mode::Inner {
        while is_blank_row(buffer, first) && last > first {
            first += 1;
        }
        while is_blank_row(buffer, last) && last > first {
            last -= 1;
        }
    }
    debug!(first, last, ?mode, "comment block");
    Some(TextSpan::new(Cursor::new(first, 0), Cursor::new(last + 1, 0)))
}
