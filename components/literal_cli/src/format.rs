//! Fixed-width column layout for human-readable output

/// Pad `s` with spaces to `width` characters.
///
/// Positive widths left-align, negative widths right-align. Text already
/// at least as wide is returned unchanged.
///
/// ```
/// use literal_cli::format::pad;
///
/// assert_eq!(pad("ab", 4), "ab  ");
/// assert_eq!(pad("ab", -4), "  ab");
/// assert_eq!(pad("abcdef", 4), "abcdef");
/// ```
pub fn pad(s: &str, width: isize) -> String {
    let len = s.chars().count();
    let target = width.unsigned_abs();
    if len >= target {
        return s.to_string();
    }
    let fill = " ".repeat(target - len);
    if width < 0 {
        fill + s
    } else {
        format!("{}{}", s, fill)
    }
}

/// Lay out `(text, width)` cells side by side.
///
/// When a cell overflows its column, the row continues on a new line
/// indented to where the next column starts. A width of zero leaves the
/// column unbounded, which suits the last cell of a row.
pub fn columns(cells: &[(&str, isize)]) -> String {
    let mut out = String::new();
    let mut indent = 0;
    for (text, width) in cells {
        let cell = pad(text, *width);
        let width = width.unsigned_abs();
        indent += width;
        out.push_str(&cell);
        if width != 0 && cell.chars().count() > width {
            out.push('\n');
            out.push_str(&" ".repeat(indent));
        }
    }
    out
}
