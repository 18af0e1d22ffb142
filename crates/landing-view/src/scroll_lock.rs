//! Reference-counted body scroll lock.
//!
//! Both the mobile menu and the scheduling modal suppress background
//! scrolling while open. Each holds its own [`ScrollLease`] on a shared
//! [`ScrollLock`]; the body class is only removed when the last lease is
//! released, so closing one never unlocks scrolling the other still needs.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::tree::ViewTree;

/// Class put on `<body>` while at least one lease is held.
pub const SCROLL_LOCK_CLASS: &str = "modal-open";

/// Shared holder count. Cloning yields another handle to the same counter.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<u32>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holders(&self) -> u32 {
        self.holders.get()
    }

    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    /// A new, unheld lease on this lock.
    pub fn lease(&self) -> ScrollLease {
        ScrollLease {
            lock: self.clone(),
            held: false,
        }
    }
}

/// One component's claim on the scroll lock.
///
/// Acquiring an already-held lease or releasing an unheld one does nothing,
/// so a component can never count twice or release a claim it never made.
#[derive(Debug)]
pub struct ScrollLease {
    lock: ScrollLock,
    held: bool,
}

impl ScrollLease {
    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn acquire<V: ViewTree + ?Sized>(&mut self, view: &mut V) {
        if self.held {
            return;
        }
        self.held = true;
        let count = self.lock.holders.get() + 1;
        self.lock.holders.set(count);
        if count == 1 {
            let body = view.body();
            view.add_class(body, SCROLL_LOCK_CLASS);
        }
        debug!(holders = count, "scroll lock acquired");
    }

    pub fn release<V: ViewTree + ?Sized>(&mut self, view: &mut V) {
        if !self.held {
            return;
        }
        self.held = false;
        let count = self.lock.holders.get().saturating_sub(1);
        self.lock.holders.set(count);
        if count == 0 {
            let body = view.body();
            view.remove_class(body, SCROLL_LOCK_CLASS);
        }
        debug!(holders = count, "scroll lock released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDom;

    fn locked(dom: &MemoryDom) -> bool {
        dom.has_class(dom.body(), SCROLL_LOCK_CLASS)
    }

    #[test]
    fn single_lease_locks_and_unlocks() {
        let mut dom = MemoryDom::new(800.0, 600.0);
        let lock = ScrollLock::new();
        let mut lease = lock.lease();

        lease.acquire(&mut dom);
        assert!(locked(&dom));
        assert!(lease.is_held());
        assert_eq!(lock.holders(), 1);

        lease.release(&mut dom);
        assert!(!locked(&dom));
        assert!(!lock.is_locked());
    }

    #[test]
    fn lock_survives_until_last_release() {
        let mut dom = MemoryDom::new(800.0, 600.0);
        let lock = ScrollLock::new();
        let mut nav = lock.lease();
        let mut modal = lock.lease();

        nav.acquire(&mut dom);
        modal.acquire(&mut dom);
        assert_eq!(lock.holders(), 2);

        nav.release(&mut dom);
        assert!(locked(&dom), "modal still needs the lock");

        modal.release(&mut dom);
        assert!(!locked(&dom));
    }

    #[test]
    fn repeated_acquire_and_release_are_no_ops() {
        let mut dom = MemoryDom::new(800.0, 600.0);
        let lock = ScrollLock::new();
        let mut nav = lock.lease();
        let mut modal = lock.lease();

        modal.acquire(&mut dom);
        nav.acquire(&mut dom);
        nav.acquire(&mut dom);
        assert_eq!(lock.holders(), 2);

        nav.release(&mut dom);
        nav.release(&mut dom);
        assert_eq!(lock.holders(), 1);
        assert!(locked(&dom));
    }

    #[test]
    fn releasing_unheld_lease_leaves_lock_alone() {
        let mut dom = MemoryDom::new(800.0, 600.0);
        let lock = ScrollLock::new();
        let mut holder = lock.lease();
        let mut bystander = lock.lease();

        holder.acquire(&mut dom);
        bystander.release(&mut dom);
        assert!(locked(&dom));
        assert_eq!(lock.holders(), 1);
    }
}
