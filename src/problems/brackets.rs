//! Bracket balancing for `()`, `[]` and `{}`.
//!
//! Openers are pushed with their byte offset; a closer must match the opener
//! on top. Characters other than the six brackets are ignored.

fn opener_for(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// Byte offset of the first bracket that cannot be matched, if any.
///
/// For a stray or mismatched closer this is the closer's offset; for an
/// opener left unclosed at the end it is the offset of the innermost
/// such opener.
pub fn first_unbalanced(text: &str) -> Option<usize> {
    let mut open: Vec<(usize, char)> = Vec::new();
    for (offset, c) in text.char_indices() {
        match c {
            '(' | '[' | '{' => open.push((offset, c)),
            _ => {
                if let Some(expected) = opener_for(c) {
                    match open.pop() {
                        Some((_, o)) if o == expected => {}
                        _ => return Some(offset),
                    }
                }
            }
        }
    }
    open.last().map(|&(offset, _)| offset)
}

/// Whether every bracket in `text` is closed in the right order.
pub fn is_balanced(text: &str) -> bool {
    first_unbalanced(text).is_none()
}
