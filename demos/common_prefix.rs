//! Longest common prefix of word lists, including rejected input.
//!
//! Run with `RUST_LOG=char_trie=info` to see the query log.
use char_trie::Trie;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cases: &[(&[&str], &str)] = &[
        (&["flower", "flow", "flight"], "fl"),
        (&["interspecies", "interstellar", "interstate"], "inters"),
        (&["dog", "racecar", "car"], ""),
        (&[], ""),
        (&["", "abc", "def"], ""),
    ];

    for (words, expected) in cases {
        let mut trie = Trie::<()>::new();
        let prefix = trie.find_longest_common_word(*words);
        println!("{:?} -> {:?}", words, prefix);
        assert_eq!(prefix, *expected);
    }

    // A list decoded from JSON can hold things that are not strings
    let mixed: Vec<serde_json::Value> = serde_json::from_str(r#"["abc", 123]"#)?;
    let mut trie = Trie::<()>::new();
    assert_eq!(trie.find_longest_common_word(&mixed), "");

    Ok(())
}
