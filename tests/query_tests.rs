use char_trie::{longest_common_prefix, Error, Trie};

fn homework() -> Trie<usize> {
    let mut trie = Trie::new();
    for (i, word) in ["apple", "application", "banana", "cat"].iter().enumerate() {
        trie.put(word, i).unwrap();
    }
    trie
}

#[test]
fn test_suffix_counts() {
    let trie = homework();

    assert_eq!(trie.count_words_with_suffix("e"), 1);
    assert_eq!(trie.count_words_with_suffix("ion"), 1);
    assert_eq!(trie.count_words_with_suffix("a"), 1);
    assert_eq!(trie.count_words_with_suffix("at"), 1);
}

#[test]
fn test_prefix_existence() {
    let trie = homework();

    assert!(trie.has_prefix("app"));
    assert!(!trie.has_prefix("bat"));
    assert!(trie.has_prefix("ban"));
    assert!(trie.has_prefix("ca"));
}

#[test]
fn test_suffix_counts_after_delete() {
    let mut trie = homework();
    trie.put("station", 4).unwrap();
    assert_eq!(trie.count_words_with_suffix("ion"), 2);

    assert!(trie.delete("application").unwrap());
    assert_eq!(trie.count_words_with_suffix("ion"), 1);
    assert!(trie.has_prefix("app"));
    assert!(!trie.has_prefix("appl1"));
}

#[test]
fn test_longest_common_word() {
    let mut trie = Trie::<()>::new();
    assert_eq!(trie.find_longest_common_word(&["flower", "flow", "flight"]), "fl");

    let mut trie = Trie::<()>::new();
    assert_eq!(
        trie.find_longest_common_word(&["interspecies", "interstellar", "interstate"]),
        "inters"
    );

    let mut trie = Trie::<()>::new();
    assert_eq!(trie.find_longest_common_word(&["dog", "racecar", "car"]), "");
}

#[test]
fn test_longest_common_word_bad_input() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(longest_common_prefix(&empty), "");
    assert_eq!(longest_common_prefix(&["", "abc", "def"]), "");

    let mut trie = Trie::<()>::new();
    assert_eq!(
        trie.try_find_longest_common_word(&empty),
        Err(Error::EmptyInput)
    );
    assert_eq!(
        trie.try_find_longest_common_word(&["", "abc", "def"]),
        Err(Error::InvalidWord { index: 0 })
    );
}

#[cfg(feature = "json")]
#[test]
fn test_longest_common_word_rejects_non_strings() {
    let values: Vec<serde_json::Value> = serde_json::from_str(r#"["abc", 123]"#).unwrap();

    let mut trie = Trie::<()>::new();
    assert_eq!(trie.find_longest_common_word(&values), "");
    assert_eq!(
        trie.try_find_longest_common_word(&values),
        Err(Error::InvalidWord { index: 1 })
    );
    assert!(trie.is_empty());

    let values: Vec<serde_json::Value> =
        serde_json::from_str(r#"["flower", "flow", "flight"]"#).unwrap();
    assert_eq!(longest_common_prefix(&values), "fl");
}

#[test]
fn test_common_word_accumulates_over_calls() {
    let mut trie = Trie::<()>::new();
    assert_eq!(trie.find_longest_common_word(&["interstate"]), "interstate");
    assert_eq!(trie.find_longest_common_word(&["internal"]), "inter");
    assert_eq!(trie.len(), 2);
}

#[test]
fn test_hard_failures_surface() {
    let mut trie = homework();

    let err = trie.put("", 0).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        err.to_string(),
        "Illegal argument for put: key must be a non-empty string"
    );

    assert!(trie.get("").unwrap_err().is_invalid_argument());
    assert!(trie.delete("").unwrap_err().is_invalid_argument());
    assert!(trie.longest_prefix_of("").unwrap_err().is_invalid_argument());

    // The empty prefix is valid for enumeration
    assert_eq!(trie.keys_with_prefix(""), trie.keys());
    assert_eq!(trie.len(), 4);
}
