//! Suffix counting and prefix checks over a small word list.
//!
//! Run with `RUST_LOG=char_trie=info` to see the query log.
use char_trie::Trie;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), char_trie::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let words = ["apple", "application", "banana", "cat"];
    println!("Words in trie: {:?}", words);

    let mut trie = Trie::new();
    for (i, word) in words.iter().enumerate() {
        trie.put(word, i)?;
    }

    for suffix in ["e", "ion", "a", "at"].iter() {
        let count = trie.count_words_with_suffix(suffix);
        println!("Words ending with {:?}: {}", suffix, count);
        assert_eq!(count, 1);
    }

    assert!(trie.has_prefix("app"));
    assert!(!trie.has_prefix("bat"));
    assert!(trie.has_prefix("ban"));
    assert!(trie.has_prefix("ca"));

    // Logged at error level, answered with 0
    assert_eq!(trie.count_words_with_suffix(""), 0);

    Ok(())
}
