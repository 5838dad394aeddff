//! Browser implementations of the overlay scheduling and page-effect seams.
//!
//! # Design
//! - Paint deferral waits two animation frames so the closed style is
//!   committed before the open style is applied.
//! - Handles are dropped lazily after they fire; dropping a gloo handle from
//!   inside its own callback would free the running closure.

use gloo::console;
use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::utils::{body, window};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use trellis_core::schedule::{KeyHandler, PageEffects, Release, Scheduler, ScrollLock, Task, TaskId};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

// Handles are held only so dropping them cancels the callback.
enum Pending {
    Frame(#[allow(dead_code)] AnimationFrame),
    Timer(#[allow(dead_code)] Timeout),
}

/// [`Scheduler`] backed by `requestAnimationFrame` and `setTimeout`.
#[derive(Default)]
pub struct BrowserScheduler {
    next_id: u64,
    pending: Rc<RefCell<HashMap<TaskId, Pending>>>,
    fired: Rc<RefCell<Vec<TaskId>>>,
}

impl BrowserScheduler {
    fn allocate(&mut self) -> TaskId {
        let fired: Vec<TaskId> = self.fired.borrow_mut().drain(..).collect();
        if !fired.is_empty() {
            let mut pending = self.pending.borrow_mut();
            for id in fired {
                pending.remove(&id);
            }
        }
        self.next_id += 1;
        TaskId(self.next_id)
    }
}

impl Scheduler for BrowserScheduler {
    fn after_paint(&mut self, task: Task) -> TaskId {
        let id = self.allocate();
        let pending = Rc::clone(&self.pending);
        let fired = Rc::clone(&self.fired);
        let first = request_animation_frame(move |_| {
            let second = request_animation_frame(move |_| {
                fired.borrow_mut().push(id);
                task();
            });
            if let Some(slot) = pending.borrow_mut().get_mut(&id) {
                // The first frame's handle is still running; park it with the
                // fired list and keep the second one cancellable.
                let previous = std::mem::replace(slot, Pending::Frame(second));
                drop_later(previous);
            }
        });
        self.pending.borrow_mut().insert(id, Pending::Frame(first));
        id
    }

    fn after_delay(&mut self, delay_ms: u32, task: Task) -> TaskId {
        let id = self.allocate();
        let fired = Rc::clone(&self.fired);
        let timer = Timeout::new(delay_ms, move || {
            fired.borrow_mut().push(id);
            task();
        });
        self.pending.borrow_mut().insert(id, Pending::Timer(timer));
        id
    }

    fn cancel(&mut self, id: TaskId) {
        self.pending.borrow_mut().remove(&id);
    }
}

/// Releases a handle on the next macrotask instead of inside its own callback.
fn drop_later(handle: Pending) {
    let _ = Timeout::new(0, move || drop(handle)).forget();
}

thread_local! {
    static BODY_SCROLL: RefCell<ScrollLock<String>> = const { RefCell::new(ScrollLock::new()) };
}

/// [`PageEffects`] acting on `<body>` and the window's keydown events.
///
/// The body's `overflow` is shared by every mounted overlay through one
/// [`ScrollLock`].
#[derive(Default)]
pub struct DocumentEffects {
    listener: Option<EventListener>,
    holding: bool,
}

impl PageEffects for DocumentEffects {
    fn lock_scroll(&mut self) {
        if std::mem::replace(&mut self.holding, true) {
            return;
        }
        let style = body().style();
        let first = BODY_SCROLL.with_borrow_mut(|lock| {
            lock.acquire(|| {
                style
                    .get_property_value("overflow")
                    .ok()
                    .filter(|value| !value.is_empty())
            })
        });
        if first && let Err(err) = style.set_property("overflow", "hidden") {
            console::error!("scroll lock failed", err);
        }
    }

    fn unlock_scroll(&mut self) {
        if !std::mem::replace(&mut self.holding, false) {
            return;
        }
        let Release::Restore(previous) = BODY_SCROLL.with_borrow_mut(ScrollLock::release) else {
            return;
        };
        let style = body().style();
        let result = match previous {
            Some(previous) => style.set_property("overflow", &previous),
            None => style.remove_property("overflow").map(|_| ()),
        };
        if let Err(err) = result {
            console::error!("scroll unlock failed", err);
        }
    }

    fn listen_keys(&mut self, handler: KeyHandler) {
        self.listener = Some(EventListener::new(&window(), "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                handler(&event.key());
            }
        }));
    }

    fn unlisten_keys(&mut self) {
        self.listener = None;
    }
}
