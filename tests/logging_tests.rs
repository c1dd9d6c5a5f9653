use char_trie::{Trie, LOG_TARGET};
use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;

/// Records the level and target of every event.
#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        self.events
            .lock()
            .unwrap()
            .push((*meta.level(), meta.target().to_string()));
    }
}

fn recorded<F: FnOnce()>(f: F) -> Vec<(Level, String)> {
    let recorder = Recorder::default();
    let subscriber = Registry::default().with(recorder.clone());
    tracing::subscriber::with_default(subscriber, f);

    let events = recorder.events.lock().unwrap().clone();
    events
}

fn only(level: Level) -> Vec<(Level, String)> {
    vec![(level, LOG_TARGET.to_string())]
}

fn homework() -> Trie<usize> {
    let mut trie = Trie::new();
    for (i, word) in ["apple", "application", "banana", "cat"].iter().enumerate() {
        trie.put(word, i).unwrap();
    }
    trie
}

#[test]
fn test_report_levels() {
    let trie = homework();

    // Malformed input is an error, a count of zero is just information
    assert_eq!(
        recorded(|| assert_eq!(trie.count_words_with_suffix(""), 0)),
        only(Level::ERROR)
    );
    assert_eq!(
        recorded(|| assert_eq!(trie.count_words_with_suffix("zzz"), 0)),
        only(Level::INFO)
    );

    assert_eq!(recorded(|| assert!(!trie.has_prefix(""))), only(Level::ERROR));
    assert_eq!(recorded(|| assert!(!trie.has_prefix("bat"))), only(Level::INFO));

    let empty: &[&str] = &[];
    assert_eq!(
        recorded(|| assert_eq!(Trie::<()>::new().find_longest_common_word(empty), "")),
        only(Level::ERROR)
    );
    assert_eq!(
        recorded(|| {
            assert_eq!(Trie::<()>::new().find_longest_common_word(&["", "abc"]), "")
        }),
        only(Level::WARN)
    );
    assert_eq!(
        recorded(|| {
            assert_eq!(Trie::<()>::new().find_longest_common_word(&["dog", "car"]), "")
        }),
        only(Level::INFO)
    );

    #[cfg(feature = "json")]
    {
        let mixed: Vec<serde_json::Value> = serde_json::from_str(r#"["abc", 123]"#).unwrap();
        assert_eq!(
            recorded(|| assert_eq!(Trie::<()>::new().find_longest_common_word(&mixed), "")),
            only(Level::WARN)
        );
    }
}

#[test]
fn test_hard_failures_are_not_logged() {
    let mut trie = homework();

    let events = recorded(|| {
        assert!(trie.put("", 0).is_err());
        assert!(trie.get("").is_err());
        assert!(trie.delete("").is_err());
    });
    assert!(events.is_empty());
}
