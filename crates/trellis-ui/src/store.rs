//! Gallery yewdux store.
//!
//! # Design
//! - One store with two slices: the actions log and the theme.
//! - The log is capped so long sessions keep a bounded history.

use trellis_core::theme::ThemeMode;
use yewdux::store::Store;

/// Maximum number of retained action entries.
pub const ACTION_LOG_LIMIT: usize = 50;

/// Global gallery state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct GalleryStore {
    /// Callback invocations recorded by stories.
    pub actions: ActionLog,
    /// Theme chosen in this session; `None` until the user toggles it.
    pub theme: Option<ThemeMode>,
}

/// One recorded callback invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionEntry {
    /// Monotonic sequence number.
    pub seq: u64,
    /// Component and callback, e.g. `RadioGroup.on_change`.
    pub source: String,
    /// Debug rendering of the callback payload.
    pub payload: String,
}

/// Newest-first log of callback invocations.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ActionLog {
    next_seq: u64,
    entries: Vec<ActionEntry>,
}

impl ActionLog {
    /// Record an invocation, evicting the oldest entry past the limit.
    pub fn record(&mut self, source: impl Into<String>, payload: impl Into<String>) {
        self.next_seq += 1;
        self.entries.insert(
            0,
            ActionEntry {
                seq: self.next_seq,
                source: source.into(),
                payload: payload.into(),
            },
        );
        self.entries.truncate(ACTION_LOG_LIMIT);
    }

    /// Drop every entry; sequence numbers keep counting.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[ActionEntry] {
        &self.entries
    }

    /// Whether nothing has been recorded since the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entries_come_first() {
        let mut log = ActionLog::default();
        log.record("Button.onclick", "()");
        log.record("RadioGroup.on_change", "\"pro\"");
        let sources: Vec<&str> = log.entries().iter().map(|e| e.source.as_str()).collect();
        assert_eq!(sources, vec!["RadioGroup.on_change", "Button.onclick"]);
        assert_eq!(log.entries()[0].seq, 2);
    }

    #[test]
    fn log_is_capped() {
        let mut log = ActionLog::default();
        for index in 0..(ACTION_LOG_LIMIT + 5) {
            log.record("Tabs.on_change", index.to_string());
        }
        assert_eq!(log.entries().len(), ACTION_LOG_LIMIT);
        assert_eq!(log.entries()[0].payload, (ACTION_LOG_LIMIT + 4).to_string());
    }

    #[test]
    fn clearing_keeps_sequence_monotonic() {
        let mut log = ActionLog::default();
        log.record("Alert.on_dismiss", "()");
        log.clear();
        assert!(log.is_empty());
        log.record("Alert.on_dismiss", "()");
        assert_eq!(log.entries()[0].seq, 2);
    }

    #[test]
    fn store_starts_without_a_theme_choice() {
        let store = GalleryStore::default();
        assert_eq!(store.theme, None);
        assert!(store.actions.is_empty());
    }
}
