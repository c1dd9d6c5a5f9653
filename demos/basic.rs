//! Examples of using the trie
use char_trie::Trie;

fn main() -> Result<(), char_trie::Error> {
    // Create a new trie with string keys
    let mut trie = Trie::new();

    // Insert some values
    trie.put("she", 0)?;
    trie.put("sells", 1)?;
    trie.put("shells", 2)?;
    trie.put("by", 3)?;

    // Check values
    assert_eq!(trie.get("she")?, Some(&0));
    assert_eq!(trie.get("shell")?, None);

    println!("All keys: {:?}", trie.keys());
    println!("Keys under \"sh\": {:?}", trie.keys_with_prefix("sh"));
    println!(
        "Longest key prefixing \"shellsort\": {:?}",
        trie.longest_prefix_of("shellsort")?
    );

    // Deleting prunes the branch that only "shells" used
    assert!(trie.delete("shells")?);
    assert!(!trie.delete("shells")?);
    println!("After delete: {:?} ({} keys)", trie.keys(), trie.len());

    // Empty keys are a caller bug, not a lookup miss
    if let Err(err) = trie.put("", 9) {
        println!("Rejected: {}", err);
    }

    Ok(())
}

#[test]
fn test_prefix_view() {
    let mut trie = Trie::new();
    trie.put("hello", 1).unwrap();
    trie.put("help", 2).unwrap();
    trie.put("world", 3).unwrap();

    // Create a view of the "hel" prefix
    let view = trie.view_subtrie("hel");

    assert!(view.exists());
    assert_eq!(view.len(), 2);
    assert!(view.contains_key("hello"));
    assert!(!view.contains_key("world"));
    assert_eq!(view.get("help"), Some(&2));
}
