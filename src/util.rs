use crate::error::{Error, Result};

/// Rejects empty keys for operations that need at least one character.
pub fn require_non_empty(op: &'static str, key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::InvalidArgument {
            op,
            reason: "key must be a non-empty string",
        });
    }
    Ok(())
}

/// Finds the length (in bytes) of the longest prefix of `s` accepted by `is_terminal`.
///
/// `is_terminal` is fed the characters of `s` in order. It answers whether the prefix
/// ending at that character is accepted, or `None` once the walk can go no further.
pub fn longest_accepted<F>(s: &str, mut is_terminal: F) -> usize
where
    F: FnMut(char) -> Option<bool>,
{
    let mut longest = 0;

    for (idx, c) in s.char_indices() {
        match is_terminal(c) {
            Some(true) => longest = idx + c.len_utf8(),
            Some(false) => {}
            None => break,
        }
    }

    longest
}
