//! Defines the trait used to check loosely-typed query input for character sequences.
use std::borrow::Cow;

/// A value that may or may not be a word (a character sequence).
///
/// The list-based queries accept anything implementing this trait and reject
/// elements that are not strings or are empty, instead of failing to compile.
/// This lets input decoded from a dynamic format (for instance a JSON array such
/// as `["abc", 123]`) be validated element by element.
pub trait AsWord {
    /// Returns the character sequence, or `None` if this value is not one.
    fn as_word(&self) -> Option<&str>;
}

impl AsWord for str {
    fn as_word(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsWord for String {
    fn as_word(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl AsWord for Box<str> {
    fn as_word(&self) -> Option<&str> {
        Some(self)
    }
}

impl<'c> AsWord for Cow<'c, str> {
    fn as_word(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: AsWord + ?Sized> AsWord for &T {
    fn as_word(&self) -> Option<&str> {
        (**self).as_word()
    }
}

/// `None` stands for a missing element.
impl<T: AsWord> AsWord for Option<T> {
    fn as_word(&self) -> Option<&str> {
        self.as_ref().and_then(AsWord::as_word)
    }
}

#[cfg(feature = "json")]
impl AsWord for serde_json::Value {
    fn as_word(&self) -> Option<&str> {
        self.as_str()
    }
}

/// Returns the word in `value` if it is a non-empty character sequence.
pub(crate) fn non_empty_word<W: AsWord + ?Sized>(value: &W) -> Option<&str> {
    value.as_word().filter(|word| !word.is_empty())
}
