//! Word wrapping shared by components that size a layout slot to their text.
//!
//! Height and content come from the same `textwrap` call, so the rendered
//! lines always fit the slot they were measured for.

/// Wrap options for a column of `width` cells.
pub fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(usize::from(width.max(1)))
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Wrapped lines of `text`; at least one line, even for empty text.
pub fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    let lines: Vec<String> = textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}
