//! This module contains the observer/subject plumbing used by [`AbstractSearch`][crate::search::AbstractSearch]
//! to notify [`SearchListener`]s after each iteration, and [`LoggingListener`], a listener that
//! prints progress to stdout.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// An observer of a subject of type `T` (in this crate, always an
/// [`AbstractSearch`][crate::search::AbstractSearch]). `update` is called synchronously by
/// [`Subject::notify`].
pub trait SearchListener<T> {
    /// Called once per [`notify`][Subject::notify] call on the subject this listener is
    /// attached to.
    fn update(&self, subject: &T);
}

/// A stable identifier returned by [`Subject::attach`], used to [`detach`][Subject::detach] a
/// listener later.
pub type ListenerId = u64;

/// Holds a collection of attached [`SearchListener`]s and fans out [`notify`][Subject::notify]
/// calls to them in attachment order.
///
/// * Detaching the current or a later listener while `notify` is iterating is safe: removed slots
///   are simply skipped.
/// * Attaching a new listener while `notify` is running does not affect the in-progress
///   notification cycle; the new listener is queued and only receives updates starting with the
///   *next* `notify` call. This is the resolution chosen for the "re-entrant attach during
///   notify" behavior the design notes leave unspecified upstream.
pub struct Subject<T> {
    listeners: RefCell<Vec<Option<(ListenerId, Rc<dyn SearchListener<T>>)>>>,
    pending: RefCell<Vec<(ListenerId, Rc<dyn SearchListener<T>>)>>,
    notifying: Cell<bool>,
    next_id: Cell<ListenerId>,
}

impl<T> Default for Subject<T> {
    fn default() -> Self {
        Subject {
            listeners: RefCell::new(Vec::new()),
            pending: RefCell::new(Vec::new()),
            notifying: Cell::new(false),
            next_id: Cell::new(0),
        }
    }
}

impl<T> Subject<T> {
    /// Creates a subject with no attached listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `listener`, returning an id that can later be passed to
    /// [`detach`][Subject::detach]. If called from within a listener's `update` (i.e. during a
    /// `notify` call), the listener is queued for the next notification cycle.
    pub fn attach(&self, listener: Rc<dyn SearchListener<T>>) -> ListenerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        if self.notifying.get() {
            self.pending.borrow_mut().push((id, listener));
        } else {
            self.listeners.borrow_mut().push(Some((id, listener)));
        }
        id
    }

    /// Detaches the listener previously returned by `attach`, if still attached. Safe to call
    /// from within `notify`.
    pub fn detach(&self, id: ListenerId) {
        for slot in self.listeners.borrow_mut().iter_mut() {
            if matches!(slot, Some((existing, _)) if *existing == id) {
                *slot = None;
            }
        }
        self.pending.borrow_mut().retain(|(existing, _)| *existing != id);
    }

    /// The number of currently attached listeners (queued-but-not-yet-active attaches are not
    /// counted).
    pub fn len(&self) -> usize {
        self.listeners.borrow().iter().filter(|s| s.is_some()).count()
    }

    /// Whether there are no currently attached listeners.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls `update(subject)` on every attached listener, in attachment order, exactly once.
    pub fn notify(&self, subject: &T) {
        let queued: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        if !queued.is_empty() {
            self.listeners
                .borrow_mut()
                .extend(queued.into_iter().map(Some));
        }

        self.notifying.set(true);
        let snapshot_len = self.listeners.borrow().len();
        for idx in 0..snapshot_len {
            let listener = self
                .listeners
                .borrow()
                .get(idx)
                .and_then(|slot| slot.clone());
            if let Some((_, listener)) = listener {
                listener.update(subject);
            }
        }
        self.notifying.set(false);
    }
}

/// Anything a [`LoggingListener`] can describe when notified: an iteration counter and a
/// human-readable description of what just happened.
pub trait SearchProgress {
    /// The 1-based iteration counter of the search.
    fn iteration(&self) -> u32;

    /// A human-readable description of the most recent step.
    fn step_description(&self) -> String;
}

/// A [`SearchListener`] that prints the iteration number and step description to stdout,
/// mirroring the teacher framework's `default_function_between_steps` print hook.
pub struct LoggingListener;

impl<T: SearchProgress> SearchListener<T> for LoggingListener {
    fn update(&self, subject: &T) {
        println!(
            "iteration {}: {}",
            subject.iteration(),
            subject.step_description()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell as StdRefCell;

    struct Counter(StdRefCell<u32>);

    impl SearchListener<()> for Counter {
        fn update(&self, _subject: &()) {
            *self.0.borrow_mut() += 1;
        }
    }

    #[test]
    fn notify_calls_update_exactly_once_per_listener() {
        let subject: Subject<()> = Subject::new();
        let counter = Rc::new(Counter(StdRefCell::new(0)));
        subject.attach(counter.clone());
        for _ in 0..100 {
            subject.notify(&());
        }
        assert_eq!(*counter.0.borrow(), 100);
    }

    #[test]
    fn detach_during_notify_stops_future_updates() {
        struct SelfDetaching {
            id: StdRefCell<Option<ListenerId>>,
            subject: Rc<Subject<()>>,
            count: StdRefCell<u32>,
        }
        impl SearchListener<()> for SelfDetaching {
            fn update(&self, _subject: &()) {
                *self.count.borrow_mut() += 1;
                if let Some(id) = *self.id.borrow() {
                    self.subject.detach(id);
                }
            }
        }

        let subject: Rc<Subject<()>> = Rc::new(Subject::new());
        let listener = Rc::new(SelfDetaching {
            id: StdRefCell::new(None),
            subject: subject.clone(),
            count: StdRefCell::new(0),
        });
        let id = subject.attach(listener.clone());
        *listener.id.borrow_mut() = Some(id);

        subject.notify(&());
        subject.notify(&());
        subject.notify(&());

        assert_eq!(*listener.count.borrow(), 1);
    }

    #[test]
    fn attach_during_notify_is_queued_for_next_cycle() {
        struct Attacher {
            subject: Rc<Subject<()>>,
            spawned: StdRefCell<bool>,
        }
        impl SearchListener<()> for Attacher {
            fn update(&self, _subject: &()) {
                if !*self.spawned.borrow() {
                    *self.spawned.borrow_mut() = true;
                    self.subject.attach(Rc::new(Counter(StdRefCell::new(0))));
                }
            }
        }

        let subject: Rc<Subject<()>> = Rc::new(Subject::new());
        subject.attach(Rc::new(Attacher {
            subject: subject.clone(),
            spawned: StdRefCell::new(false),
        }));

        assert_eq!(subject.len(), 1);
        subject.notify(&()); // Attacher spawns a Counter, queued.
        assert_eq!(subject.len(), 1);
        subject.notify(&()); // Counter is now active.
        assert_eq!(subject.len(), 2);
    }

    #[test]
    fn detach_removes_a_listener_still_queued_in_pending() {
        struct Attacher {
            subject: Rc<Subject<()>>,
            spawned_id: StdRefCell<Option<ListenerId>>,
        }
        impl SearchListener<()> for Attacher {
            fn update(&self, _subject: &()) {
                if self.spawned_id.borrow().is_none() {
                    let id = self.subject.attach(Rc::new(Counter(StdRefCell::new(0))));
                    *self.spawned_id.borrow_mut() = Some(id);
                    self.subject.detach(id);
                }
            }
        }

        let subject: Rc<Subject<()>> = Rc::new(Subject::new());
        subject.attach(Rc::new(Attacher {
            subject: subject.clone(),
            spawned_id: StdRefCell::new(None),
        }));

        subject.notify(&()); // Attacher queues then immediately detaches a Counter.
        subject.notify(&()); // The detached Counter must not have activated.
        assert_eq!(subject.len(), 1);
    }
}
