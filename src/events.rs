//! Single-threaded publish/subscribe used to feed viewport events into the
//! scroll controller. Dropping a [`Subscription`] unsubscribes its handler.

use std::{cell::RefCell, rc::Rc};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewportEvent {
    Scroll,
    Resize,
}

type Handler<E> = Rc<dyn Fn(&E)>;

struct HubInner<E> {
    next_id: u64,
    handlers: Vec<(u64, Handler<E>)>,
}

pub struct EventHub<E> {
    inner: Rc<RefCell<HubInner<E>>>,
}

impl<E> Clone for EventHub<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: 'static> Default for EventHub<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> EventHub<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    pub fn subscribe(&self, handler: impl Fn(&E) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.handlers.push((id, Rc::new(handler)));
            id
        };

        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().handlers.retain(|(existing, _)| *existing != id);
            }
        })
    }

    /// Delivers `event` to every handler registered when the call started.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<Handler<E>> = self
            .inner
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        for handler in snapshot {
            handler(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

/// Scoped registration; the release closure runs exactly once on drop.
#[must_use = "dropping a subscription immediately unsubscribes it"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn unsubscribe(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}
