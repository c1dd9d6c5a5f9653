//! Longest common prefix of a list of words.

use tracing::{error, info, warn};

use crate::error::{Error, Result};
use crate::word::{non_empty_word, AsWord};
use crate::Trie;
use crate::LOG_TARGET;

impl<V: Default> Trie<V> {
    /// Inserts `strings` and returns the longest prefix shared by every key.
    ///
    /// Each word is stored with `V::default()`; words already in the trie keep
    /// their value. The walk from the root then follows the only child for as
    /// long as there is exactly one and the current node is not itself a stored
    /// word, so the prefix never runs past a fork or past a complete word.
    ///
    /// Bad input never fails the call. An empty list is reported at error level,
    /// and a list holding an empty or non-string element is reported as a
    /// warning. Both leave the trie untouched and return the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::<()>::new();
    /// assert_eq!(trie.find_longest_common_word(&["flower", "flow", "flight"]), "fl");
    /// ```
    pub fn find_longest_common_word<W: AsWord>(&mut self, strings: &[W]) -> String {
        match self.try_find_longest_common_word(strings) {
            Ok(prefix) => {
                info!(target: LOG_TARGET, prefix = %prefix, "Longest common prefix");
                prefix
            }
            Err(err @ Error::EmptyInput) => {
                error!(target: LOG_TARGET, %err, "Rejected common prefix input");
                String::new()
            }
            Err(err) => {
                warn!(target: LOG_TARGET, %err, "Returning empty prefix");
                String::new()
            }
        }
    }

    /// Like [`find_longest_common_word`](Trie::find_longest_common_word), but
    /// returns the validation error instead of logging it.
    ///
    /// Every element is checked before anything is inserted.
    pub fn try_find_longest_common_word<W: AsWord>(&mut self, strings: &[W]) -> Result<String> {
        if strings.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut words = Vec::with_capacity(strings.len());
        for (index, value) in strings.iter().enumerate() {
            match non_empty_word(value) {
                Some(word) => words.push(word),
                None => return Err(Error::InvalidWord { index }),
            }
        }

        for word in words {
            if !self.contains_key(word)? {
                self.put(word, V::default())?;
            }
        }

        Ok(self.common_prefix())
    }
}

impl<V> Trie<V> {
    /// Returns the prefix shared by every stored key, stopping at the first fork
    /// or at the first stored key along the way.
    pub fn common_prefix(&self) -> String {
        let mut prefix = String::new();
        let mut current = self.root();

        while current.child_count() == 1 && current.value().is_none() {
            match current.children().next() {
                Some((c, child)) => {
                    prefix.push(c);
                    current = child;
                }
                None => break,
            }
        }

        prefix
    }
}

/// Computes the longest common prefix of `strings` with a scratch trie.
///
/// # Examples
///
/// ```
/// use char_trie::longest_common_prefix;
///
/// assert_eq!(longest_common_prefix(&["interspecies", "interstellar", "interstate"]), "inters");
/// assert_eq!(longest_common_prefix(&["dog", "racecar", "car"]), "");
/// ```
pub fn longest_common_prefix<W: AsWord>(strings: &[W]) -> String {
    Trie::<()>::new().find_longest_common_word(strings)
}
