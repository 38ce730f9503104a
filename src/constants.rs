use unicode_normalization::char::is_combining_mark;

// Placeholder used in mark lists, e.g. "◌̈"
pub const DOTTED_CIRCLE: char = '\u{25CC}';

// Zero width characters that sometimes end up in database strings
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Characters that only structure a character set string and never count
/// as a support signal.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, DOTTED_CIRCLE | ZERO_WIDTH_SPACE | BYTE_ORDER_MARK)
}

pub fn is_mark(c: char) -> bool {
    is_combining_mark(c)
}
