//! Executes [`OverlayTransition`] commands against a scheduler and page effects.
//!
//! # Design
//! - State lives behind `Rc<RefCell<_>>`; scheduled tasks and key listeners
//!   hold only a `Weak`, so a dropped driver turns them into no-ops.
//! - Commands are computed under a borrow and executed after it is released;
//!   consumer callbacks may re-enter the driver.
//! - Dropping the last handle releases page effects and pending tasks even if
//!   `dispose` was never called.

use crate::config::OverlayConfig;
use crate::overlay::{OverlayCommand, OverlayPhase, OverlayTransition};
use crate::schedule::{KeyHandler, PageEffects, Scheduler, TaskId};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

/// Called with the new phase after every transition.
pub type PhaseHandler = Rc<dyn Fn(OverlayPhase)>;
/// Called when the overlay asks its consumer to close it.
pub type CloseHandler = Rc<dyn Fn()>;

struct DriverState<S: Scheduler, P: PageEffects> {
    machine: OverlayTransition,
    scheduler: S,
    page: P,
    pending: Option<TaskId>,
    scroll_locked: bool,
    listening: bool,
    on_phase: PhaseHandler,
    on_close: CloseHandler,
}

impl<S: Scheduler, P: PageEffects> DriverState<S, P> {
    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }

    fn release_page(&mut self) {
        if self.scroll_locked {
            self.page.unlock_scroll();
            self.scroll_locked = false;
        }
        if self.listening {
            self.page.unlisten_keys();
            self.listening = false;
        }
    }
}

impl<S: Scheduler, P: PageEffects> Drop for DriverState<S, P> {
    fn drop(&mut self) {
        self.cancel_pending();
        self.release_page();
    }
}

/// Shared handle that sequences one overlay instance.
pub struct OverlayDriver<S: Scheduler, P: PageEffects> {
    inner: Rc<RefCell<DriverState<S, P>>>,
}

impl<S: Scheduler, P: PageEffects> Clone for OverlayDriver<S, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: Scheduler, P: PageEffects> PartialEq for OverlayDriver<S, P> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S: Scheduler, P: PageEffects> fmt::Debug for OverlayDriver<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayDriver")
            .field(
                "phase",
                &self.inner.try_borrow().ok().map(|state| state.machine.phase()),
            )
            .finish_non_exhaustive()
    }
}

impl<S: Scheduler + 'static, P: PageEffects + 'static> OverlayDriver<S, P> {
    /// Build an unmounted driver. The close handler starts as a no-op.
    pub fn new(config: OverlayConfig, scheduler: S, page: P, on_phase: PhaseHandler) -> Self {
        Self {
            inner: Rc::new(RefCell::new(DriverState {
                machine: OverlayTransition::new(config),
                scheduler,
                page,
                pending: None,
                scroll_locked: false,
                listening: false,
                on_phase,
                on_close: Rc::new(|| {}),
            })),
        }
    }

    /// Replace the consumer's close callback.
    pub fn set_close_handler(&self, handler: CloseHandler) {
        self.inner.borrow_mut().on_close = handler;
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> OverlayPhase {
        self.inner.borrow().machine.phase()
    }

    /// Apply the consumer's `open` prop.
    pub fn set_open(&self, open: bool) {
        let commands = self.inner.borrow_mut().machine.set_open(open);
        self.execute(commands);
    }

    /// Forward a key press from the page listener.
    pub fn key_pressed(&self, key: &str) {
        let commands = self.inner.borrow().machine.key_pressed(key);
        self.execute(commands);
    }

    /// Forward a click on the backdrop.
    pub fn backdrop_clicked(&self) {
        let commands = self.inner.borrow().machine.backdrop_clicked();
        self.execute(commands);
    }

    /// Release timers and page effects; call when the owning component unmounts.
    pub fn dispose(&self) {
        let commands = self.inner.borrow_mut().machine.teardown();
        self.execute(commands);
    }

    fn painted(&self, epoch: u64) {
        let commands = {
            let mut state = self.inner.borrow_mut();
            if state.machine.epoch() == epoch {
                state.pending = None;
            }
            state.machine.painted(epoch)
        };
        if commands.is_empty() {
            trace!(epoch, "ignoring stale overlay paint");
        }
        self.execute(commands);
    }

    fn exit_elapsed(&self, epoch: u64) {
        let commands = {
            let mut state = self.inner.borrow_mut();
            if state.machine.epoch() == epoch {
                state.pending = None;
            }
            state.machine.exit_elapsed(epoch)
        };
        if commands.is_empty() {
            trace!(epoch, "ignoring stale overlay exit timer");
        }
        self.execute(commands);
    }

    fn weak(&self) -> Weak<RefCell<DriverState<S, P>>> {
        Rc::downgrade(&self.inner)
    }

    fn upgrade(weak: &Weak<RefCell<DriverState<S, P>>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    fn execute(&self, commands: Vec<OverlayCommand>) {
        for command in commands {
            debug!(?command, "overlay command");
            match command {
                OverlayCommand::PhaseChanged(phase) => {
                    let handler = Rc::clone(&self.inner.borrow().on_phase);
                    handler(phase);
                }
                OverlayCommand::RequestClose => {
                    let handler = Rc::clone(&self.inner.borrow().on_close);
                    handler();
                }
                OverlayCommand::Mount => self.attach_page(),
                OverlayCommand::Unmount => self.inner.borrow_mut().release_page(),
                OverlayCommand::CancelPending => self.inner.borrow_mut().cancel_pending(),
                OverlayCommand::AwaitPaint { epoch } => {
                    let weak = self.weak();
                    let mut state = self.inner.borrow_mut();
                    state.cancel_pending();
                    let id = state.scheduler.after_paint(Box::new(move || {
                        if let Some(driver) = Self::upgrade(&weak) {
                            driver.painted(epoch);
                        }
                    }));
                    state.pending = Some(id);
                }
                OverlayCommand::StartExitTimer { epoch, delay_ms } => {
                    let weak = self.weak();
                    let mut state = self.inner.borrow_mut();
                    state.cancel_pending();
                    let id = state.scheduler.after_delay(
                        delay_ms,
                        Box::new(move || {
                            if let Some(driver) = Self::upgrade(&weak) {
                                driver.exit_elapsed(epoch);
                            }
                        }),
                    );
                    state.pending = Some(id);
                }
            }
        }
    }

    fn attach_page(&self) {
        let weak = self.weak();
        let mut state = self.inner.borrow_mut();
        let config = *state.machine.config();
        if config.lock_scroll && !state.scroll_locked {
            state.page.lock_scroll();
            state.scroll_locked = true;
        }
        if config.close_on_escape && !state.listening {
            let handler: KeyHandler = Rc::new(move |key: &str| {
                if let Some(driver) = Self::upgrade(&weak) {
                    driver.key_pressed(key);
                }
            });
            state.page.listen_keys(handler);
            state.listening = true;
        }
    }
}
