//! Palindromes over alphanumeric characters, ignoring case.

use crate::converge::converge;
use crate::traits::{ConvergePolicy, Side};

/// Compares mirrored characters until the first mismatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct MirrorMatch;

impl ConvergePolicy for MirrorMatch {
    type Value = char;
    type State = bool;
    type Output = bool;

    fn init(&self) -> Self::State {
        true
    }

    fn step(&self, matched: &mut Self::State, chars: &[char], left: usize, right: usize) -> Side {
        if chars[left] == chars[right] {
            Side::Both
        } else {
            *matched = false;
            Side::Stop
        }
    }

    fn finish(&self, matched: Self::State) -> Self::Output {
        matched
    }
}

/// Whether `text` reads the same both ways once everything but letters and
/// digits is dropped and letters are lowercased.
pub fn is_palindrome(text: &str) -> bool {
    let folded: Vec<char> = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    converge(&MirrorMatch, &folded)
}
