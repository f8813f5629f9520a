//! Offset to line/column lookup for syntax errors.

/// Where an offset falls in its source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    /// 1-based line number.
    pub line: u32,
    /// Characters between the line start and the offset (the caret position).
    pub column: u32,
    /// The full text of the line, without its newline.
    pub line_text: String,
}

/// Locate a byte offset in `source`.
///
/// Offsets past the end are clamped to the end; offsets inside a multi-byte
/// character are moved back to its start.
pub fn locate(source: &str, offset: usize) -> SourceLocation {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }

    let before = &source[..offset];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[offset..]
        .find('\n')
        .map_or(source.len(), |i| offset + i);

    let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
    let column = source[line_start..offset].chars().count();

    SourceLocation {
        line: u32::try_from(line).unwrap_or(u32::MAX),
        column: u32::try_from(column).unwrap_or(u32::MAX),
        line_text: source[line_start..line_end].to_string(),
    }
}
