//! Every well-formed string of `n` bracket pairs.
//!
//! Partial strings are expanded from an explicit stack. A `(` may be added
//! while fewer than `n` are open, a `)` while it has an unmatched `(`. The
//! `(` branch is pushed last so it is expanded first, which yields the
//! strings in lexicographic order.

struct Partial {
    text: String,
    opened: usize,
    closed: usize,
}

/// All balanced strings of `pairs` pairs of parentheses, sorted.
///
/// The output has Catalan(`pairs`) entries; `pairs == 0` yields `[""]`.
pub fn generate_parentheses(pairs: usize) -> Vec<String> {
    let mut done = Vec::new();
    let mut pending = vec![Partial {
        text: String::with_capacity(2 * pairs),
        opened: 0,
        closed: 0,
    }];

    while let Some(partial) = pending.pop() {
        if partial.closed == pairs {
            done.push(partial.text);
            continue;
        }
        if partial.closed < partial.opened {
            let mut text = partial.text.clone();
            text.push(')');
            pending.push(Partial {
                text,
                opened: partial.opened,
                closed: partial.closed + 1,
            });
        }
        if partial.opened < pairs {
            let mut text = partial.text;
            text.push('(');
            pending.push(Partial {
                text,
                opened: partial.opened + 1,
                closed: partial.closed,
            });
        }
    }
    done
}
