//! Controlled/uncontrolled value resolution for selection controls.
//!
//! # Design
//! - Ownership is decided once, from the first render's `value`, and never
//!   changes afterwards.
//! - Controlled instances never mutate their own copy; they only report the
//!   selection so the parent can supply the next `value`. Native form
//!   controls flip their own state on click, so a controlled selection asks
//!   the caller to put that state back to `value`.
//! - Selections are not checked against the option set.

use crate::items::OptionItem;

/// Who owns the displayed value of a selection control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ownership {
    /// The parent supplies `value` and re-renders on change.
    Controlled,
    /// The control keeps its own state, seeded from `default_value`.
    Uncontrolled,
}

/// What a control must do after reporting a user selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectEffect {
    /// The control owns the value and re-renders to show the new selection.
    Rerender,
    /// The parent owns the value; native control state goes back to the
    /// supplied `value` until the parent renders a new one.
    Restore,
}

/// A user selection as seen by the control that received it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection<T> {
    /// Value to report via `on_change`.
    pub value: T,
    /// Follow-up the control owes the DOM.
    pub effect: SelectEffect,
}

/// Per-instance resolver state for a selection control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueResolver<T> {
    ownership: Ownership,
    internal: Option<T>,
}

impl<T: Clone> ValueResolver<T> {
    /// Create the resolver for a freshly mounted control.
    #[must_use]
    pub fn new(value: Option<&T>, default_value: Option<T>) -> Self {
        if value.is_some() {
            Self {
                ownership: Ownership::Controlled,
                internal: None,
            }
        } else {
            Self {
                ownership: Ownership::Uncontrolled,
                internal: default_value,
            }
        }
    }

    /// Ownership mode fixed at construction.
    #[must_use]
    pub const fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Value to display given the props of the current render.
    #[must_use]
    pub fn current<'a>(&'a self, value: Option<&'a T>) -> Option<&'a T> {
        match self.ownership {
            Ownership::Controlled => value,
            Ownership::Uncontrolled => self.internal.as_ref(),
        }
    }

    /// Record a user selection.
    pub fn select(&mut self, next: T) -> Selection<T> {
        match self.ownership {
            Ownership::Controlled => Selection {
                value: next,
                effect: SelectEffect::Restore,
            },
            Ownership::Uncontrolled => {
                self.internal = Some(next.clone());
                Selection {
                    value: next,
                    effect: SelectEffect::Rerender,
                }
            }
        }
    }
}

/// Toggle `member` in a multi-selection, keeping the order of `options`.
///
/// Values that are not part of `options` are kept and appended after the
/// known ones in their original order.
#[must_use]
pub fn toggle_member<V>(selected: &[V], member: &V, options: &[OptionItem<V>]) -> Vec<V>
where
    V: Clone + PartialEq,
{
    let mut next: Vec<V> = selected.iter().filter(|v| *v != member).cloned().collect();
    if next.len() == selected.len() {
        next.push(member.clone());
    }
    let mut ordered: Vec<V> = options
        .iter()
        .filter(|option| next.contains(&option.value))
        .map(|option| option.value.clone())
        .collect();
    for value in next {
        if !ordered.contains(&value) {
            ordered.push(value);
        }
    }
    ordered
}

/// Whether `value` is part of a multi-selection.
#[must_use]
pub fn is_member<V: PartialEq>(selected: Option<&Vec<V>>, value: &V) -> bool {
    selected.is_some_and(|values| values.contains(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<OptionItem<&'static str>> {
        vec![
            OptionItem::new("a", "Alpha"),
            OptionItem::new("b", "Bravo"),
            OptionItem::new("c", "Charlie"),
        ]
    }

    #[test]
    fn ownership_is_decided_by_first_value() {
        let controlled = ValueResolver::new(Some(&"a"), Some("b"));
        assert_eq!(controlled.ownership(), Ownership::Controlled);
        let uncontrolled = ValueResolver::<&str>::new(None, Some("b"));
        assert_eq!(uncontrolled.ownership(), Ownership::Uncontrolled);
    }

    #[test]
    fn controlled_ignores_default_and_own_selection() {
        let mut resolver = ValueResolver::new(Some(&"a"), Some("b"));
        assert_eq!(resolver.current(Some(&"a")), Some(&"a"));
        let selection = resolver.select("c");
        assert_eq!(selection.value, "c");
        assert_eq!(selection.effect, SelectEffect::Restore);
        assert_eq!(resolver.current(Some(&"a")), Some(&"a"));
    }

    #[test]
    fn uncontrolled_tracks_selection() {
        let mut resolver = ValueResolver::<&str>::new(None, None);
        assert_eq!(resolver.current(None), None);
        assert_eq!(resolver.select("b").effect, SelectEffect::Rerender);
        assert_eq!(resolver.current(None), Some(&"b"));
    }

    #[test]
    fn uncontrolled_ignores_later_value_props() {
        let mut resolver = ValueResolver::new(None, Some("a"));
        resolver.select("c");
        assert_eq!(resolver.current(Some(&"b")), Some(&"c"));
    }

    #[test]
    fn toggle_member_adds_in_option_order() {
        let next = toggle_member(&["c"], &"a", &options());
        assert_eq!(next, vec!["a", "c"]);
        let next = toggle_member(&next, &"c", &options());
        assert_eq!(next, vec!["a"]);
    }

    #[test]
    fn toggle_member_keeps_unknown_values() {
        let next = toggle_member(&["zz"], &"b", &options());
        assert_eq!(next, vec!["b", "zz"]);
    }

    #[test]
    fn membership_handles_missing_selection() {
        assert!(!is_member::<&str>(None, &"a"));
        assert!(is_member(Some(&vec!["a"]), &"a"));
    }
}
