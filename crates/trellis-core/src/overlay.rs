//! Open/close sequencing for modal and drawer overlays.
//!
//! # Design
//! - The machine is pure: inputs return the commands a driver must execute.
//! - Every scheduled paint/timer carries the epoch it was issued for; results
//!   for an older epoch are ignored, so reopen/close races cannot resurrect a
//!   stale transition.
//! - Page effects (scroll lock, key listener) are attached on `Mount` and
//!   detached on `Unmount`, which is emitted on every path out of the mounted
//!   states.

use crate::config::OverlayConfig;

/// Lifecycle of an overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayPhase {
    /// Not rendered.
    #[default]
    Unmounted,
    /// Rendered with the closed style, waiting for a paint.
    Entering,
    /// Rendered with the open style.
    Visible,
    /// Rendered with the closed style until the exit timer fires.
    Exiting,
}

impl OverlayPhase {
    /// Whether the overlay is part of the render tree.
    #[must_use]
    pub const fn is_mounted(self) -> bool {
        !matches!(self, Self::Unmounted)
    }

    /// Visual style to render while mounted.
    #[must_use]
    pub const fn visual(self) -> OverlayVisual {
        match self {
            Self::Visible => OverlayVisual::Open,
            Self::Unmounted | Self::Entering | Self::Exiting => OverlayVisual::Closed,
        }
    }
}

/// Style applied to the overlay surface; switching between them drives the CSS transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayVisual {
    /// Hidden/offset style.
    Closed,
    /// Fully shown style.
    Open,
}

/// Side effects requested by the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayCommand {
    /// Notify the view that the phase changed.
    PhaseChanged(OverlayPhase),
    /// Attach page effects (scroll lock, key listener).
    Mount,
    /// Detach page effects.
    Unmount,
    /// Call back into [`OverlayTransition::painted`] after the next paint.
    AwaitPaint {
        /// Epoch the paint belongs to.
        epoch: u64,
    },
    /// Call back into [`OverlayTransition::exit_elapsed`] after `delay_ms`.
    StartExitTimer {
        /// Epoch the timer belongs to.
        epoch: u64,
        /// Delay before unmounting.
        delay_ms: u32,
    },
    /// Drop any pending paint or timer.
    CancelPending,
    /// Invoke the consumer's close callback.
    RequestClose,
}

/// Key that dismisses an overlay.
pub const ESCAPE_KEY: &str = "Escape";

/// Pure overlay state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayTransition {
    phase: OverlayPhase,
    epoch: u64,
    config: OverlayConfig,
}

impl OverlayTransition {
    /// Machine in the `Unmounted` phase.
    #[must_use]
    pub const fn new(config: OverlayConfig) -> Self {
        Self {
            phase: OverlayPhase::Unmounted,
            epoch: 0,
            config,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Epoch of the most recent scheduled transition.
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Configuration the machine was built with.
    #[must_use]
    pub const fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Apply the consumer's `open` prop.
    pub fn set_open(&mut self, open: bool) -> Vec<OverlayCommand> {
        if open { self.open() } else { self.close() }
    }

    fn open(&mut self) -> Vec<OverlayCommand> {
        match self.phase {
            OverlayPhase::Unmounted => {
                self.epoch += 1;
                self.phase = OverlayPhase::Entering;
                vec![
                    OverlayCommand::PhaseChanged(OverlayPhase::Entering),
                    OverlayCommand::Mount,
                    OverlayCommand::AwaitPaint { epoch: self.epoch },
                ]
            }
            OverlayPhase::Exiting => {
                self.epoch += 1;
                self.phase = OverlayPhase::Entering;
                vec![
                    OverlayCommand::CancelPending,
                    OverlayCommand::PhaseChanged(OverlayPhase::Entering),
                    OverlayCommand::AwaitPaint { epoch: self.epoch },
                ]
            }
            OverlayPhase::Entering | OverlayPhase::Visible => Vec::new(),
        }
    }

    fn close(&mut self) -> Vec<OverlayCommand> {
        match self.phase {
            OverlayPhase::Entering | OverlayPhase::Visible => {
                self.epoch += 1;
                self.phase = OverlayPhase::Exiting;
                vec![
                    OverlayCommand::CancelPending,
                    OverlayCommand::PhaseChanged(OverlayPhase::Exiting),
                    OverlayCommand::StartExitTimer {
                        epoch: self.epoch,
                        delay_ms: self.config.exit_duration_ms,
                    },
                ]
            }
            OverlayPhase::Unmounted | OverlayPhase::Exiting => Vec::new(),
        }
    }

    /// The paint requested for `epoch` happened.
    pub fn painted(&mut self, epoch: u64) -> Vec<OverlayCommand> {
        if self.phase != OverlayPhase::Entering || epoch != self.epoch {
            return Vec::new();
        }
        self.phase = OverlayPhase::Visible;
        vec![OverlayCommand::PhaseChanged(OverlayPhase::Visible)]
    }

    /// The exit timer started for `epoch` fired.
    pub fn exit_elapsed(&mut self, epoch: u64) -> Vec<OverlayCommand> {
        if self.phase != OverlayPhase::Exiting || epoch != self.epoch {
            return Vec::new();
        }
        self.phase = OverlayPhase::Unmounted;
        vec![
            OverlayCommand::PhaseChanged(OverlayPhase::Unmounted),
            OverlayCommand::Unmount,
        ]
    }

    /// A key was pressed while the key listener is attached.
    #[must_use]
    pub fn key_pressed(&self, key: &str) -> Vec<OverlayCommand> {
        if self.phase.is_mounted() && self.config.close_on_escape && key == ESCAPE_KEY {
            vec![OverlayCommand::RequestClose]
        } else {
            Vec::new()
        }
    }

    /// The backdrop behind the overlay surface was clicked.
    #[must_use]
    pub fn backdrop_clicked(&self) -> Vec<OverlayCommand> {
        if self.phase.is_mounted() && self.config.close_on_backdrop {
            vec![OverlayCommand::RequestClose]
        } else {
            Vec::new()
        }
    }

    /// The owning component is going away; release everything.
    pub fn teardown(&mut self) -> Vec<OverlayCommand> {
        if !self.phase.is_mounted() {
            return Vec::new();
        }
        self.epoch += 1;
        self.phase = OverlayPhase::Unmounted;
        vec![OverlayCommand::CancelPending, OverlayCommand::Unmount]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> OverlayTransition {
        OverlayTransition::new(OverlayConfig::default())
    }

    #[test]
    fn open_mounts_then_waits_for_paint() {
        let mut overlay = machine();
        let commands = overlay.set_open(true);
        assert_eq!(
            commands,
            vec![
                OverlayCommand::PhaseChanged(OverlayPhase::Entering),
                OverlayCommand::Mount,
                OverlayCommand::AwaitPaint { epoch: 1 },
            ]
        );
        assert_eq!(overlay.phase().visual(), OverlayVisual::Closed);
        assert_eq!(
            overlay.painted(1),
            vec![OverlayCommand::PhaseChanged(OverlayPhase::Visible)]
        );
        assert_eq!(overlay.phase().visual(), OverlayVisual::Open);
    }

    #[test]
    fn close_starts_exit_timer_with_configured_delay() {
        let mut overlay = machine();
        overlay.set_open(true);
        overlay.painted(1);
        let commands = overlay.set_open(false);
        assert_eq!(
            commands,
            vec![
                OverlayCommand::CancelPending,
                OverlayCommand::PhaseChanged(OverlayPhase::Exiting),
                OverlayCommand::StartExitTimer {
                    epoch: 2,
                    delay_ms: 300,
                },
            ]
        );
        assert!(overlay.phase().is_mounted());
        assert_eq!(
            overlay.exit_elapsed(2),
            vec![
                OverlayCommand::PhaseChanged(OverlayPhase::Unmounted),
                OverlayCommand::Unmount,
            ]
        );
        assert!(!overlay.phase().is_mounted());
    }

    #[test]
    fn stale_paint_after_close_is_ignored() {
        let mut overlay = machine();
        overlay.set_open(true);
        overlay.set_open(false);
        assert!(overlay.painted(1).is_empty());
        assert_eq!(overlay.phase(), OverlayPhase::Exiting);
    }

    #[test]
    fn reopen_during_exit_returns_to_entering() {
        let mut overlay = machine();
        overlay.set_open(true);
        overlay.painted(1);
        overlay.set_open(false);
        let commands = overlay.set_open(true);
        assert_eq!(commands[0], OverlayCommand::CancelPending);
        assert!(!commands.contains(&OverlayCommand::Mount));
        assert!(overlay.exit_elapsed(2).is_empty());
        assert_eq!(overlay.phase(), OverlayPhase::Entering);
        overlay.painted(3);
        assert_eq!(overlay.phase(), OverlayPhase::Visible);
    }

    #[test]
    fn repeated_props_are_idempotent() {
        let mut overlay = machine();
        assert!(overlay.set_open(false).is_empty());
        overlay.set_open(true);
        assert!(overlay.set_open(true).is_empty());
    }

    #[test]
    fn escape_only_closes_when_enabled_and_mounted() {
        let mut overlay = machine();
        assert!(overlay.key_pressed(ESCAPE_KEY).is_empty());
        overlay.set_open(true);
        assert_eq!(
            overlay.key_pressed(ESCAPE_KEY),
            vec![OverlayCommand::RequestClose]
        );
        assert!(overlay.key_pressed("Enter").is_empty());

        let mut quiet = OverlayTransition::new(OverlayConfig {
            close_on_escape: false,
            ..OverlayConfig::default()
        });
        quiet.set_open(true);
        assert!(quiet.key_pressed(ESCAPE_KEY).is_empty());
    }

    #[test]
    fn backdrop_respects_config() {
        let mut overlay = OverlayTransition::new(OverlayConfig {
            close_on_backdrop: false,
            ..OverlayConfig::default()
        });
        overlay.set_open(true);
        assert!(overlay.backdrop_clicked().is_empty());
    }

    #[test]
    fn teardown_releases_mounted_overlay() {
        let mut overlay = machine();
        assert!(overlay.teardown().is_empty());
        overlay.set_open(true);
        assert_eq!(
            overlay.teardown(),
            vec![OverlayCommand::CancelPending, OverlayCommand::Unmount]
        );
        assert_eq!(overlay.phase(), OverlayPhase::Unmounted);
    }
}
