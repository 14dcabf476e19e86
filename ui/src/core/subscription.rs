//! Scoped scroll subscriptions.
//!
//! A [`ScrollSource`] hands out [`ScrollSubscription`] guards. Dropping a guard
//! detaches its handler, so a listener can never outlive the component that
//! acquired it. Sources push the current offset once on subscribe.

use std::cell::RefCell;
use std::rc::Rc;

/// Receives every scroll offset (CSS pixels from the top of the page).
pub type ScrollHandler = Box<dyn FnMut(f64)>;

#[derive(Debug, thiserror::Error)]
pub enum ScrollError {
    #[error("no browser window is available")]
    NoWindow,
    #[error("failed to attach scroll listener: {0}")]
    Listener(String),
}

pub trait ScrollSource {
    fn subscribe(&self, handler: ScrollHandler) -> Result<ScrollSubscription, ScrollError>;
}

/// Shape in which a scroll source is shared through Dioxus context.
pub type SharedScrollSource = Rc<dyn ScrollSource>;

/// Guard for an attached scroll handler. Releases exactly once.
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Detach now instead of waiting for drop.
    pub fn release(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(release) = self.release.take() {
            release();
            tracing::debug!("scroll subscription released");
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[derive(Default)]
struct ManualInner {
    offset: f64,
    next_id: u64,
    handlers: Vec<(u64, ScrollHandler)>,
    delivering: bool,
    released: Vec<u64>,
}

/// In-process scroll source driven by [`ManualScrollSource::emit`].
///
/// Used by headless hosts and tests. Handlers may subscribe or release on the
/// same source while a delivery is running; a handler released mid-delivery
/// is not called again, and one added mid-delivery first sees the next emit.
#[derive(Clone, Default)]
pub struct ManualScrollSource {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualScrollSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, offset_px: f64) {
        let mut batch = {
            let mut inner = self.inner.borrow_mut();
            inner.offset = offset_px;
            inner.delivering = true;
            std::mem::take(&mut inner.handlers)
        };

        for (id, handler) in batch.iter_mut() {
            if self.inner.borrow().released.contains(id) {
                continue;
            }
            handler(offset_px);
        }

        let released = {
            let mut inner = self.inner.borrow_mut();
            inner.delivering = false;
            std::mem::take(&mut inner.released)
        };
        let (kept, dropped): (Vec<_>, Vec<_>) = batch
            .into_iter()
            .partition(|(id, _)| !released.contains(id));

        {
            let mut inner = self.inner.borrow_mut();
            let late = std::mem::replace(&mut inner.handlers, kept);
            inner.handlers.extend(late);
        }
        // Handlers may own guards on this source.
        drop(dropped);
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

impl PartialEq for ManualScrollSource {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ScrollSource for ManualScrollSource {
    fn subscribe(&self, mut handler: ScrollHandler) -> Result<ScrollSubscription, ScrollError> {
        let offset = self.inner.borrow().offset;
        handler(offset);

        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.handlers.push((id, handler));
            id
        };

        let inner = Rc::downgrade(&self.inner);
        Ok(ScrollSubscription::new(move || {
            let Some(inner) = inner.upgrade() else {
                return;
            };
            let removed = {
                let mut inner = inner.borrow_mut();
                if inner.delivering {
                    inner.released.push(id);
                }
                inner
                    .handlers
                    .iter()
                    .position(|(hid, _)| *hid == id)
                    .map(|at| inner.handlers.remove(at))
            };
            drop(removed);
        }))
    }
}

/// `window` scroll listener for the web build.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScrollSource;

#[cfg(target_arch = "wasm32")]
impl ScrollSource for WindowScrollSource {
    fn subscribe(&self, mut handler: ScrollHandler) -> Result<ScrollSubscription, ScrollError> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or(ScrollError::NoWindow)?;
        handler(window.scroll_y().unwrap_or(0.0));

        let reader = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Ok(offset) = reader.scroll_y() {
                handler(offset);
            }
        });
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|err| ScrollError::Listener(format!("{err:?}")))?;
        tracing::debug!("window scroll listener attached");

        Ok(ScrollSubscription::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                tracing::warn!("failed to detach scroll listener: {err:?}");
            }
            drop(callback);
        }))
    }
}

/// Webview scroll bridge for native shells.
///
/// Installs a JS listener through `document::eval` that posts `window.scrollY`
/// back to Rust. Must be subscribed from inside the Dioxus runtime.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalScrollSource;

#[cfg(not(target_arch = "wasm32"))]
static NEXT_BRIDGE_ID: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

#[cfg(not(target_arch = "wasm32"))]
impl ScrollSource for EvalScrollSource {
    fn subscribe(&self, mut handler: ScrollHandler) -> Result<ScrollSubscription, ScrollError> {
        use dioxus::prelude::{document, spawn};
        use std::sync::atomic::Ordering;

        let id = NEXT_BRIDGE_ID.fetch_add(1, Ordering::Relaxed);
        let mut bridge = document::eval(&attach_script(id));
        let task = spawn(async move {
            while let Ok(offset) = bridge.recv::<f64>().await {
                handler(offset);
            }
        });
        tracing::debug!(bridge = id, "webview scroll bridge attached");

        Ok(ScrollSubscription::new(move || {
            task.cancel();
            let _ = document::eval(&detach_script(id));
        }))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn attach_script(id: u64) -> String {
    format!(
        r#"
        const registry = window.__saafScroll || (window.__saafScroll = {{}});
        const handler = () => dioxus.send(window.scrollY);
        registry[{id}] = handler;
        window.addEventListener("scroll", handler, {{ passive: true }});
        handler();
        await new Promise(() => {{}});
        "#
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn detach_script(id: u64) -> String {
    format!(
        r#"
        const registry = window.__saafScroll || {{}};
        const handler = registry[{id}];
        if (handler) {{
            window.removeEventListener("scroll", handler);
            delete registry[{id}];
        }}
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscribe_delivers_current_offset() {
        let source = ManualScrollSource::new();
        source.emit(120.0);

        let seen = Rc::new(Cell::new(None));
        let sink = seen.clone();
        let _sub = source
            .subscribe(Box::new(move |y| sink.set(Some(y))))
            .expect("manual subscribe");
        assert_eq!(seen.get(), Some(120.0));
    }

    #[test]
    fn drop_detaches_handler() {
        let source = ManualScrollSource::new();
        let calls = Rc::new(Cell::new(0u32));
        let counter = calls.clone();
        let sub = source
            .subscribe(Box::new(move |_| counter.set(counter.get() + 1)))
            .expect("manual subscribe");
        assert_eq!(source.subscriber_count(), 1);

        source.emit(10.0);
        drop(sub);
        source.emit(20.0);

        // One initial delivery plus one emit.
        assert_eq!(calls.get(), 2);
        assert_eq!(source.subscriber_count(), 0);
    }

    #[test]
    fn release_runs_exactly_once() {
        let released = Rc::new(Cell::new(0u32));
        let counter = released.clone();
        let sub = ScrollSubscription::new(move || counter.set(counter.get() + 1));
        assert!(sub.is_active());
        sub.release();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn guard_outliving_source_is_harmless() {
        let source = ManualScrollSource::new();
        let sub = source.subscribe(Box::new(|_| {})).expect("manual subscribe");
        drop(source);
        drop(sub);
    }

    #[test]
    fn handler_can_release_a_sibling_mid_delivery() {
        let source = ManualScrollSource::new();
        let slot: Rc<RefCell<Option<ScrollSubscription>>> = Rc::default();
        let sibling_calls = Rc::new(Cell::new(0u32));

        let target = slot.clone();
        let _first = source
            .subscribe(Box::new(move |y| {
                if y > 50.0 {
                    target.borrow_mut().take();
                }
            }))
            .expect("manual subscribe");

        let counter = sibling_calls.clone();
        let second = source
            .subscribe(Box::new(move |_| counter.set(counter.get() + 1)))
            .expect("manual subscribe");
        slot.borrow_mut().replace(second);
        assert_eq!(source.subscriber_count(), 2);

        source.emit(80.0);
        source.emit(90.0);

        // Only the initial delivery; the sibling was released before its turn.
        assert_eq!(sibling_calls.get(), 1);
        assert_eq!(source.subscriber_count(), 1);
        assert!(slot.borrow().is_none());
    }

    #[test]
    fn handler_can_subscribe_mid_delivery() {
        let source = ManualScrollSource::new();
        let late: Rc<RefCell<Vec<ScrollSubscription>>> = Rc::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let host = source.clone();
        let guards = late.clone();
        let sink = seen.clone();
        let _first = source
            .subscribe(Box::new(move |y| {
                if y > 50.0 && guards.borrow().is_empty() {
                    let sink = sink.clone();
                    let sub = host
                        .subscribe(Box::new(move |y| sink.borrow_mut().push(y)))
                        .expect("manual subscribe");
                    guards.borrow_mut().push(sub);
                }
            }))
            .expect("manual subscribe");

        source.emit(80.0);
        assert_eq!(source.subscriber_count(), 2);
        source.emit(10.0);

        assert_eq!(*seen.borrow(), vec![80.0, 10.0]);
    }
}
