//! Yew bindings for the `trellis-core` resolver and overlay driver.
//!
//! # Design
//! - Resolver state is a per-instance `use_mut_ref`; uncontrolled updates
//!   force a re-render, controlled ones hand the supplied value to a restore
//!   callback so native form state cannot drift from `value`.
//! - The overlay driver is memoised per config and disposed when the
//!   component unmounts or the config changes.

use crate::components::platform::{BrowserScheduler, DocumentEffects};
use std::rc::Rc;
use trellis_core::config::{LibraryConfig, OverlayConfig};
use trellis_core::driver::OverlayDriver;
use trellis_core::overlay::OverlayPhase;
use trellis_core::resolver::{SelectEffect, ValueResolver};
use yew::prelude::*;

/// Overlay driver wired to the browser.
pub type BrowserOverlay = OverlayDriver<BrowserScheduler, DocumentEffects>;

/// Resolve a selection control's displayed value.
///
/// Returns the value to render and the callback to invoke on user selection.
#[hook]
pub fn use_controllable<T>(
    value: Option<T>,
    default_value: Option<T>,
    on_change: Callback<T>,
) -> (Option<T>, Callback<T>)
where
    T: Clone + PartialEq + 'static,
{
    use_restorable(value, default_value, on_change, Callback::noop())
}

/// [`use_controllable`] for controls backed by native form state.
///
/// When the parent owns the value, `restore` receives the supplied value
/// before `on_change` fires and must write it back into the DOM.
#[hook]
pub fn use_restorable<T>(
    value: Option<T>,
    default_value: Option<T>,
    on_change: Callback<T>,
    restore: Callback<Option<T>>,
) -> (Option<T>, Callback<T>)
where
    T: Clone + PartialEq + 'static,
{
    let resolver = {
        let value = value.clone();
        use_mut_ref(move || ValueResolver::new(value.as_ref(), default_value))
    };
    let rerender = use_force_update();
    let current = resolver.borrow().current(value.as_ref()).cloned();
    let select = {
        let current = current.clone();
        Callback::from(move |next: T| {
            let selection = resolver.borrow_mut().select(next);
            match selection.effect {
                SelectEffect::Rerender => rerender.force_update(),
                SelectEffect::Restore => restore.emit(current.clone()),
            }
            on_change.emit(selection.value);
        })
    };
    (current, select)
}

/// Library configuration from context, falling back to defaults.
#[hook]
pub fn use_library_config() -> LibraryConfig {
    use_context::<LibraryConfig>().unwrap_or_default()
}

/// Per-instance overrides applied on top of the library's overlay config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayOverrides {
    pub close_on_escape: Option<bool>,
    pub close_on_backdrop: Option<bool>,
    pub exit_duration_ms: Option<u32>,
}

impl OverlayOverrides {
    #[must_use]
    pub fn apply(self, base: OverlayConfig) -> OverlayConfig {
        OverlayConfig {
            close_on_escape: self.close_on_escape.unwrap_or(base.close_on_escape),
            close_on_backdrop: self.close_on_backdrop.unwrap_or(base.close_on_backdrop),
            exit_duration_ms: self.exit_duration_ms.unwrap_or(base.exit_duration_ms),
            lock_scroll: base.lock_scroll,
        }
    }
}

/// What an overlay component needs to render itself.
#[derive(Clone, PartialEq)]
pub struct OverlayHandle {
    /// Current lifecycle phase; render nothing while unmounted.
    pub phase: OverlayPhase,
    /// Attach to the backdrop element.
    pub on_backdrop: Callback<MouseEvent>,
}

/// Sequence an overlay's mount/enter/exit lifecycle from its `open` prop.
#[hook]
pub fn use_overlay(open: bool, config: OverlayConfig, on_close: Callback<()>) -> OverlayHandle {
    let phase = use_state_eq(OverlayPhase::default);
    let driver = {
        let setter = phase.setter();
        use_memo(config, move |config| {
            BrowserOverlay::new(
                *config,
                BrowserScheduler::default(),
                DocumentEffects::default(),
                Rc::new(move |next: OverlayPhase| setter.set(next)),
            )
        })
    };

    use_effect_with(driver.clone(), |driver| {
        let driver = Rc::clone(driver);
        move || driver.dispose()
    });
    use_effect_with((driver.clone(), on_close), |(driver, on_close)| {
        let on_close = on_close.clone();
        driver.set_close_handler(Rc::new(move || on_close.emit(())));
        || ()
    });
    use_effect_with((driver.clone(), open), |(driver, open)| {
        driver.set_open(*open);
        || ()
    });

    let on_backdrop = Callback::from(move |_: MouseEvent| driver.backdrop_clicked());
    OverlayHandle {
        phase: *phase,
        on_backdrop,
    }
}
