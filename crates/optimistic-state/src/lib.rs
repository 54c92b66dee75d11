//! Optimistic State
//!
//! Apply a UI change before the server confirms it, then either reconcile
//! with the server's answer or restore the state that was showing before.
//!
//! The state lives in a [`StateCell`]: anything that can be read and written
//! (a DOM-backed view, a `RefCell`, a reactive signal). [`apply_optimistic`]
//! snapshots the cell, mutates it, and hands back a [`Pending`] that must be
//! settled exactly once.

use std::cell::RefCell;
use std::rc::Rc;

/// Readable/writable holder of the displayed state
pub trait StateCell<S> {
    fn read(&self) -> S;
    fn write(&self, state: S);
}

impl<S: Clone> StateCell<S> for Rc<RefCell<S>> {
    fn read(&self) -> S {
        self.borrow().clone()
    }

    fn write(&self, state: S) {
        *self.borrow_mut() = state;
    }
}

/// An optimistic change waiting for the server's verdict
#[must_use = "an optimistic change must be committed or rolled back"]
pub struct Pending<S, C: StateCell<S>> {
    cell: C,
    before: S,
    guess: S,
}

/// Snapshot `cell`, apply `mutate` to it, and write the result back.
pub fn apply_optimistic<S, C, F>(cell: C, mutate: F) -> Pending<S, C>
where
    S: Clone,
    C: StateCell<S>,
    F: FnOnce(&mut S),
{
    let before = cell.read();
    let mut guess = before.clone();
    mutate(&mut guess);
    cell.write(guess.clone());
    Pending { cell, before, guess }
}

impl<S: Clone, C: StateCell<S>> Pending<S, C> {
    /// State shown before the change was applied
    pub fn before(&self) -> &S {
        &self.before
    }

    /// State shown while the request is in flight
    pub fn guess(&self) -> &S {
        &self.guess
    }

    /// Server accepted the change. `reconcile` overwrites the optimistic
    /// guess with whatever the server reported; the result is displayed.
    pub fn commit<F>(self, reconcile: F) -> S
    where
        F: FnOnce(&mut S),
    {
        let mut confirmed = self.cell.read();
        reconcile(&mut confirmed);
        self.cell.write(confirmed.clone());
        confirmed
    }

    /// Server rejected the change (or never answered). Restores the exact
    /// pre-change state.
    pub fn rollback(self) -> S {
        self.cell.write(self.before.clone());
        self.before
    }
}
