use trellis_core::items::OptionItem;
use trellis_core::resolver::{Ownership, SelectEffect, ValueResolver, is_member, toggle_member};
use trellis_test_support::{CallRecorder, letter_options};

/// Native `checked` flags of a radio set sharing one `name`: a click checks
/// the target and unchecks every sibling before any handler runs.
struct NativeRadios {
    values: Vec<String>,
    checked: Vec<bool>,
}

impl NativeRadios {
    fn rendered(options: &[OptionItem], shown: Option<&String>) -> Self {
        let values: Vec<String> = options.iter().map(|option| option.value.clone()).collect();
        let checked = values.iter().map(|value| Some(value) == shown).collect();
        Self { values, checked }
    }

    fn click(&mut self, value: &str) {
        for (slot, candidate) in self.checked.iter_mut().zip(&self.values) {
            *slot = candidate == value;
        }
    }

    fn restore(&mut self, shown: Option<&String>) {
        for (slot, candidate) in self.checked.iter_mut().zip(&self.values) {
            *slot = Some(candidate) == shown;
        }
    }

    fn checked_value(&self) -> Option<&str> {
        self.values
            .iter()
            .zip(&self.checked)
            .find(|(_, checked)| **checked)
            .map(|(value, _)| value.as_str())
    }
}

/// Click `value` and apply the resolver's verdict the way the radio group does.
fn click(
    native: &mut NativeRadios,
    resolver: &mut ValueResolver<String>,
    supplied: Option<&String>,
    on_change: &CallRecorder<String>,
    value: &str,
) {
    native.click(value);
    let selection = resolver.select(value.to_string());
    if selection.effect == SelectEffect::Restore {
        native.restore(resolver.current(supplied));
    }
    on_change.record(selection.value);
}

#[test]
fn controlled_selection_tracks_last_supplied_value() {
    let options = letter_options(3);
    let supplied = "a".to_string();
    let mut resolver = ValueResolver::new(Some(&supplied), None);
    let mut native = NativeRadios::rendered(&options, resolver.current(Some(&supplied)));
    let on_change = CallRecorder::new();
    assert_eq!(resolver.ownership(), Ownership::Controlled);

    for _ in 0..3 {
        click(&mut native, &mut resolver, Some(&supplied), &on_change, "b");
        click(&mut native, &mut resolver, Some(&supplied), &on_change, "c");
        assert_eq!(native.checked_value(), Some("a"));
        assert_eq!(resolver.current(Some(&supplied)), Some(&supplied));
    }
    assert_eq!(on_change.count(), 6);

    let next = "c".to_string();
    assert_eq!(resolver.current(Some(&next)), Some(&next));
}

#[test]
fn uncontrolled_click_selects_and_reports_once() {
    let options = letter_options(2);
    let mut resolver = ValueResolver::<String>::new(None, None);
    let mut native = NativeRadios::rendered(&options, resolver.current(None));
    let on_change = CallRecorder::new();
    assert_eq!(resolver.current(None), None);

    click(&mut native, &mut resolver, None, &on_change, "b");

    assert_eq!(resolver.current(None).map(String::as_str), Some("b"));
    assert_eq!(native.checked_value(), Some("b"));
    assert_eq!(on_change.calls(), vec!["b".to_string()]);
}

#[test]
fn default_value_seeds_initial_selection() {
    let resolver = ValueResolver::<String>::new(None, Some("c".to_string()));
    let native = NativeRadios::rendered(&letter_options(3), resolver.current(None));
    assert_eq!(resolver.current(None).map(String::as_str), Some("c"));
    assert_eq!(native.checked_value(), Some("c"));
}

#[test]
fn controlled_selection_always_asks_for_restore() {
    let supplied = "a".to_string();
    let mut resolver = ValueResolver::new(Some(&supplied), Some("b".to_string()));
    for value in ["a", "b", "zz"] {
        assert_eq!(resolver.select(value.to_string()).effect, SelectEffect::Restore);
    }
    let mut resolver = ValueResolver::<String>::new(None, None);
    assert_eq!(resolver.select("a".to_string()).effect, SelectEffect::Rerender);
}

#[test]
fn values_outside_the_option_set_are_tolerated() {
    let mut resolver = ValueResolver::new(None, Some("zz".to_string()));
    assert_eq!(resolver.current(None).map(String::as_str), Some("zz"));
    let native = NativeRadios::rendered(&letter_options(2), resolver.current(None));
    assert_eq!(native.checked_value(), None);
    assert_eq!(resolver.select("yy".to_string()).value, "yy");
}

#[test]
fn checkbox_group_toggles_members_uncontrolled() {
    let options = letter_options(3);
    let mut resolver = ValueResolver::<Vec<String>>::new(None, Some(vec!["c".to_string()]));
    let on_change = CallRecorder::<Vec<String>>::new();

    let current = resolver.current(None).cloned().unwrap_or_default();
    let next = toggle_member(&current, &"a".to_string(), &options);
    on_change.record(resolver.select(next).value);

    assert_eq!(
        resolver.current(None),
        Some(&vec!["a".to_string(), "c".to_string()])
    );
    assert!(is_member(resolver.current(None), &"a".to_string()));
    assert_eq!(on_change.count(), 1);
}
