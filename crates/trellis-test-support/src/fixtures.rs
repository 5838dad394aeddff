//! Test fixtures and environment helpers.

use trellis_core::items::OptionItem;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs the subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Options `a`, `b`, `c`, ... labelled `Option A`, `Option B`, ...
#[must_use]
pub fn letter_options(count: u8) -> Vec<OptionItem> {
    (b'a'..b'a'.saturating_add(count.min(26)))
        .map(|byte| {
            let value = char::from(byte).to_string();
            let label = format!("Option {}", value.to_ascii_uppercase());
            OptionItem::new(value, label)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_options_are_sequential() {
        let options = letter_options(3);
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
        assert_eq!(options[1].label, "Option B");
    }

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
