//! Environment seams used by [`crate::driver::OverlayDriver`].
//!
//! The browser implementations live in the UI crate; tests use the manual
//! implementations from `trellis-test-support`.

use std::rc::Rc;

/// Deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Listener invoked with the `key` of every keydown while attached.
pub type KeyHandler = Rc<dyn Fn(&str)>;

/// Identifier for a scheduled task, used for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

/// Defers work to the next paint boundary or after a delay.
pub trait Scheduler {
    /// Run `task` once the current style has been painted, so that a class
    /// change made by the task starts a CSS transition.
    fn after_paint(&mut self, task: Task) -> TaskId;

    /// Run `task` after `delay_ms` milliseconds.
    fn after_delay(&mut self, delay_ms: u32, task: Task) -> TaskId;

    /// Drop a pending task. Unknown or already-run ids are ignored.
    fn cancel(&mut self, id: TaskId);
}

/// Document-level effects held while an overlay is mounted.
pub trait PageEffects {
    /// Prevent the page behind the overlay from scrolling.
    fn lock_scroll(&mut self);

    /// Restore page scrolling.
    fn unlock_scroll(&mut self);

    /// Attach a global keydown listener, replacing any previous one.
    fn listen_keys(&mut self, handler: KeyHandler);

    /// Remove the keydown listener if attached.
    fn unlisten_keys(&mut self);
}

/// What the holder of a [`ScrollLock`] must do after releasing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Release<S> {
    /// Other overlays still hold the lock; leave the page alone.
    Held,
    /// Last holder left; put back the state captured by the first one.
    Restore(Option<S>),
}

/// Page scroll lock shared by every mounted overlay.
///
/// Only the first holder captures the page's own state and only the last one
/// restores it, so overlapping overlays cannot clobber each other.
#[derive(Debug)]
pub struct ScrollLock<S> {
    holders: usize,
    saved: Option<S>,
}

impl<S> Default for ScrollLock<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ScrollLock<S> {
    /// Unheld lock.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            holders: 0,
            saved: None,
        }
    }

    /// Number of overlays currently holding the lock.
    #[must_use]
    pub const fn holders(&self) -> usize {
        self.holders
    }

    /// Take the lock. `capture` runs for the first holder only.
    ///
    /// Returns `true` when the caller must apply the lock to the page.
    pub fn acquire(&mut self, capture: impl FnOnce() -> Option<S>) -> bool {
        self.holders += 1;
        if self.holders == 1 {
            self.saved = capture();
            true
        } else {
            false
        }
    }

    /// Give the lock back. Releasing an unheld lock is a no-op.
    pub fn release(&mut self) -> Release<S> {
        match self.holders {
            0 => Release::Held,
            1 => {
                self.holders = 0;
                Release::Restore(self.saved.take())
            }
            _ => {
                self.holders -= 1;
                Release::Held
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_holders_restore_the_original_state_once() {
        let mut lock = ScrollLock::<&str>::new();
        assert!(lock.acquire(|| None));
        assert!(!lock.acquire(|| Some("hidden")));
        assert_eq!(lock.holders(), 2);

        assert_eq!(lock.release(), Release::Held);
        assert_eq!(lock.release(), Release::Restore(None));
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn first_holder_state_survives_out_of_order_release() {
        let mut lock = ScrollLock::new();
        lock.acquire(|| Some("auto"));
        lock.acquire(|| Some("hidden"));
        lock.release();
        assert!(!lock.acquire(|| Some("hidden")));
        assert_eq!(lock.holders(), 2);
        assert_eq!(lock.release(), Release::Held);
        assert_eq!(lock.release(), Release::Restore(Some("auto")));
    }

    #[test]
    fn releasing_an_unheld_lock_is_ignored() {
        let mut lock = ScrollLock::<String>::default();
        assert_eq!(lock.release(), Release::Held);
        assert!(lock.acquire(|| None));
        assert_eq!(lock.holders(), 1);
    }
}
