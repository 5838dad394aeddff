//! Deterministic stand-ins for the browser seams used by overlay drivers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use trellis_core::schedule::{KeyHandler, PageEffects, Release, Scheduler, ScrollLock, Task, TaskId};

#[derive(Default)]
struct SchedulerState {
    now_ms: u64,
    next_id: u64,
    paints: Vec<(TaskId, Task)>,
    timers: Vec<(TaskId, u64, Task)>,
    cancelled: Vec<TaskId>,
}

impl SchedulerState {
    fn allocate(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId(self.next_id)
    }
}

/// Scheduler driven by the test: paints run on [`ManualScheduler::paint`],
/// timers on [`ManualScheduler::advance`] against a virtual clock.
///
/// Clones share the same queue so a test can keep a handle after moving one
/// into a driver.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<SchedulerState>>,
}

impl ManualScheduler {
    /// Empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    /// Number of paint callbacks waiting.
    #[must_use]
    pub fn pending_paints(&self) -> usize {
        self.state.borrow().paints.len()
    }

    /// Number of timers waiting.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Ids cancelled so far, in order.
    #[must_use]
    pub fn cancelled(&self) -> Vec<TaskId> {
        self.state.borrow().cancelled.clone()
    }

    /// Run every paint callback queued before this call; returns how many ran.
    pub fn paint(&self) -> usize {
        let tasks = std::mem::take(&mut self.state.borrow_mut().paints);
        let count = tasks.len();
        for (_, task) in tasks {
            task();
        }
        count
    }

    /// Move the clock forward, firing due timers in deadline order.
    pub fn advance(&self, delta_ms: u64) {
        let target = self.now_ms() + delta_ms;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, at, _))| *at <= target)
                    .min_by_key(|(_, (id, at, _))| (*at, *id))
                    .map(|(index, _)| index);
                due.map(|index| {
                    let (_, at, task) = state.timers.remove(index);
                    state.now_ms = at;
                    task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.state.borrow_mut().now_ms = target;
    }
}

impl Scheduler for ManualScheduler {
    fn after_paint(&mut self, task: Task) -> TaskId {
        let mut state = self.state.borrow_mut();
        let id = state.allocate();
        state.paints.push((id, task));
        id
    }

    fn after_delay(&mut self, delay_ms: u32, task: Task) -> TaskId {
        let mut state = self.state.borrow_mut();
        let id = state.allocate();
        let at = state.now_ms + u64::from(delay_ms);
        state.timers.push((id, at, task));
        id
    }

    fn cancel(&mut self, id: TaskId) {
        let mut state = self.state.borrow_mut();
        state.paints.retain(|(pending, _)| *pending != id);
        state.timers.retain(|(pending, _, _)| *pending != id);
        state.cancelled.push(id);
    }
}

#[derive(Default)]
struct PageState {
    overflow: Option<String>,
    lock: ScrollLock<String>,
    lock_calls: u32,
    unlock_calls: u32,
}

/// Page effects that record scroll locking and let tests press keys.
///
/// Clones act for the same overlay. [`RecordingPage::share_document`] hands
/// out effects for a second overlay on the same document, so overlapping
/// locks can be observed through the body's `overflow`.
#[derive(Clone, Default)]
pub struct RecordingPage {
    state: Rc<RefCell<PageState>>,
    holding: Rc<Cell<bool>>,
    handler: Rc<RefCell<Option<KeyHandler>>>,
}

impl RecordingPage {
    /// Fresh page with scrolling enabled and no listener.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects for another overlay mounted on the same document.
    #[must_use]
    pub fn share_document(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            ..Self::default()
        }
    }

    /// Set the body's inline `overflow` before any overlay mounts.
    pub fn set_overflow(&self, value: &str) {
        self.state.borrow_mut().overflow = Some(value.to_string());
    }

    /// The body's inline `overflow`, if any.
    #[must_use]
    pub fn overflow(&self) -> Option<String> {
        self.state.borrow().overflow.clone()
    }

    /// Whether scrolling is currently locked.
    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.overflow().as_deref() == Some("hidden")
    }

    /// `(lock, unlock)` call counts across the document.
    #[must_use]
    pub fn scroll_calls(&self) -> (u32, u32) {
        let state = self.state.borrow();
        (state.lock_calls, state.unlock_calls)
    }

    /// Whether this overlay's keydown listener is attached.
    #[must_use]
    pub fn has_key_listener(&self) -> bool {
        self.handler.borrow().is_some()
    }

    /// Dispatch a keydown to this overlay's listener, if any.
    pub fn press(&self, key: &str) {
        let handler = self.handler.borrow().clone();
        if let Some(handler) = handler {
            handler(key);
        }
    }
}

impl PageEffects for RecordingPage {
    fn lock_scroll(&mut self) {
        let mut state = self.state.borrow_mut();
        state.lock_calls += 1;
        if self.holding.replace(true) {
            return;
        }
        let PageState { overflow, lock, .. } = &mut *state;
        if lock.acquire(|| overflow.clone()) {
            *overflow = Some("hidden".to_string());
        }
    }

    fn unlock_scroll(&mut self) {
        let mut state = self.state.borrow_mut();
        state.unlock_calls += 1;
        if !self.holding.replace(false) {
            return;
        }
        if let Release::Restore(previous) = state.lock.release() {
            state.overflow = previous;
        }
    }

    fn listen_keys(&mut self, handler: KeyHandler) {
        *self.handler.borrow_mut() = Some(handler);
    }

    fn unlisten_keys(&mut self) {
        *self.handler.borrow_mut() = None;
    }
}

/// Records every value passed to a callback.
#[derive(Clone)]
pub struct CallRecorder<T> {
    calls: Rc<RefCell<Vec<T>>>,
}

impl<T> Default for CallRecorder<T> {
    fn default() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T: Clone + 'static> CallRecorder<T> {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store one invocation.
    pub fn record(&self, value: T) {
        self.calls.borrow_mut().push(value);
    }

    /// All recorded values.
    #[must_use]
    pub fn calls(&self) -> Vec<T> {
        self.calls.borrow().clone()
    }

    /// Number of invocations.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Callback that records its argument.
    #[must_use]
    pub fn handler(&self) -> Rc<dyn Fn(T)> {
        let calls = Rc::clone(&self.calls);
        Rc::new(move |value| calls.borrow_mut().push(value))
    }
}

impl CallRecorder<()> {
    /// Zero-argument callback that records each call.
    #[must_use]
    pub fn unit_handler(&self) -> Rc<dyn Fn()> {
        let calls = Rc::clone(&self.calls);
        Rc::new(move || calls.borrow_mut().push(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_fire_at_their_deadline() {
        let mut scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        scheduler.after_delay(300, Box::new(move || flag.set(true)));
        scheduler.advance(299);
        assert!(!fired.get());
        scheduler.advance(1);
        assert!(fired.get());
        assert_eq!(scheduler.now_ms(), 300);
    }

    #[test]
    fn cancelled_tasks_never_run() {
        let mut scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let id = scheduler.after_paint(Box::new(move || counter.set(counter.get() + 1)));
        scheduler.cancel(id);
        assert_eq!(scheduler.paint(), 0);
        assert_eq!(fired.get(), 0);
        assert_eq!(scheduler.cancelled(), vec![id]);
    }

    #[test]
    fn page_press_reaches_listener() {
        let mut page = RecordingPage::new();
        let keys = CallRecorder::<String>::new();
        let record = keys.handler();
        page.listen_keys(Rc::new(move |key: &str| record(key.to_string())));
        page.press("Escape");
        page.unlisten_keys();
        page.press("Escape");
        assert_eq!(keys.calls(), vec!["Escape".to_string()]);
    }

    #[test]
    fn repeated_lock_from_one_overlay_is_held_once() {
        let mut page = RecordingPage::new();
        page.lock_scroll();
        page.lock_scroll();
        page.unlock_scroll();
        assert!(!page.is_scroll_locked());
        assert_eq!(page.overflow(), None);
        assert_eq!(page.scroll_calls(), (2, 1));
    }
}
