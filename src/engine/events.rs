//! Change notification.
//!
//! Presentation code subscribes a callback and is told, synchronously and
//! after the state has changed, what just happened. Listeners run in
//! registration order.

use serde::{Deserialize, Serialize};

use crate::core::Letter;

use super::hint::HintDenial;
use super::status::GameStatus;

/// Something that changed in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game replaced whatever was there before.
    GameStarted { word_len: usize },
    /// A letter was guessed.
    LetterGuessed { letter: Letter, correct: bool },
    /// A hint of the given tier was applied.
    HintGranted { tier: u32 },
    /// A hint request was refused; state is unchanged.
    HintDenied(HintDenial),
    /// The game reached a terminal status.
    GameOver(GameStatus),
}

/// Handle returned by `subscribe`, used to unsubscribe.
///
/// Only `subscribe` hands these out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

impl ListenerId {
    /// Create a new listener ID.
    #[must_use]
    pub(crate) const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

/// Boxed listener callback.
pub type Listener = Box<dyn FnMut(&GameEvent)>;

/// Ordered list of listeners.
#[derive(Default)]
pub struct ListenerList {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u32,
}

impl ListenerList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> ListenerId {
        let id = ListenerId::new(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns true if it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Deliver `event` to every listener.
    pub fn emit(&mut self, event: &GameEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// True if nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ListenerList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerList")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut list = ListenerList::new();

        let first = Rc::clone(&seen);
        list.subscribe(move |_| first.borrow_mut().push(1));
        let second = Rc::clone(&seen);
        list.subscribe(move |_| second.borrow_mut().push(2));

        list.emit(&GameEvent::GameStarted { word_len: 5 });
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut list = ListenerList::new();

        let counter = Rc::clone(&count);
        let id = list.subscribe(move |_| *counter.borrow_mut() += 1);
        assert_eq!(list.len(), 1);

        assert!(list.unsubscribe(id));
        assert!(!list.unsubscribe(id));
        assert!(list.is_empty());

        list.emit(&GameEvent::HintDenied(HintDenial::GameOver));
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut list = ListenerList::new();
        let a = list.subscribe(|_| {});
        let b = list.subscribe(|_| {});
        assert_ne!(a, b);
        assert_eq!(b.raw(), a.raw() + 1);
        assert_eq!(format!("{}", a), "Listener(0)");
    }
}
