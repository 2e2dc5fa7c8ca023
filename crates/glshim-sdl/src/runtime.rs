//! The host runtime's side of native threads: thread registration and the
//! exclusive execution token.

use std::collections::HashSet;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

/// What a native thread must do before and around running host code.
///
/// Host code may only run on a thread that has been registered, and only
/// while that thread holds the exclusive token.
pub trait HostRuntime: Send + Sync {
    /// Make the calling thread known to the host runtime. Idempotent.
    fn register_current_thread(&self);

    /// Block until the calling thread holds the exclusive token.
    fn acquire_exclusive(&self);

    /// Give up the exclusive token held by the calling thread.
    fn release_exclusive(&self);

    /// Run `f` with the token released, re-acquiring it afterwards. For
    /// blocking native calls made from host code.
    fn blocking_section<T>(&self, f: impl FnOnce() -> T) -> T
    where
        Self: Sized,
    {
        self.release_exclusive();
        let _reacquire = Reacquire(self);
        f()
    }
}

struct Reacquire<'a, R: HostRuntime>(&'a R);

impl<R: HostRuntime> Drop for Reacquire<'_, R> {
    fn drop(&mut self) {
        self.0.acquire_exclusive();
    }
}

/// Holds the exclusive token until dropped.
#[must_use = "the token is released as soon as the guard is dropped"]
pub struct ExclusiveGuard<'a, R: HostRuntime + ?Sized> {
    runtime: &'a R,
}

impl<'a, R: HostRuntime + ?Sized> ExclusiveGuard<'a, R> {
    pub fn acquire(runtime: &'a R) -> Self {
        runtime.acquire_exclusive();
        Self { runtime }
    }
}

impl<R: HostRuntime + ?Sized> Drop for ExclusiveGuard<'_, R> {
    fn drop(&mut self) {
        self.runtime.release_exclusive();
    }
}

#[derive(Debug, Default)]
struct TokenState {
    holder: Option<ThreadId>,
    registered: HashSet<ThreadId>,
}

/// In-process [`HostRuntime`]: a single token handed between threads.
#[derive(Debug, Default)]
pub struct ExclusiveToken {
    state: Mutex<TokenState>,
    released: Condvar,
}

impl ExclusiveToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// The thread currently holding the token.
    pub fn holder(&self) -> Option<ThreadId> {
        self.state().holder
    }

    pub fn is_registered(&self, thread: ThreadId) -> bool {
        self.state().registered.contains(&thread)
    }

    fn state(&self) -> MutexGuard<'_, TokenState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HostRuntime for ExclusiveToken {
    fn register_current_thread(&self) {
        let id = thread::current().id();
        if self.state().registered.insert(id) {
            tracing::trace!(thread = ?id, "registered native thread");
        }
    }

    fn acquire_exclusive(&self) {
        let id = thread::current().id();
        let mut state = self.state();
        debug_assert!(
            state.registered.contains(&id),
            "acquiring the exclusive token from an unregistered thread"
        );
        debug_assert_ne!(state.holder, Some(id), "exclusive token is not reentrant");
        while state.holder.is_some() {
            state = self
                .released
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
        state.holder = Some(id);
    }

    fn release_exclusive(&self) {
        let id = thread::current().id();
        let mut state = self.state();
        if state.holder == Some(id) {
            state.holder = None;
            drop(state);
            self.released.notify_one();
        } else {
            tracing::warn!(thread = ?id, "released an exclusive token it did not hold");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::sync::Arc;
    use std::time::Duration;

    fn registered_token() -> ExclusiveToken {
        let token = ExclusiveToken::new();
        token.register_current_thread();
        token
    }

    #[test]
    fn guard_releases_on_drop() {
        let token = registered_token();
        {
            let _guard = ExclusiveGuard::acquire(&token);
            assert_eq!(token.holder(), Some(thread::current().id()));
        }
        assert_eq!(token.holder(), None);
    }

    #[test]
    fn registration_is_idempotent() {
        let token = registered_token();
        token.register_current_thread();
        assert!(token.is_registered(thread::current().id()));
        assert_eq!(token.state().registered.len(), 1);
    }

    #[test]
    fn second_thread_waits_for_release() {
        let token = Arc::new(registered_token());
        token.acquire_exclusive();

        let (acquired_tx, acquired_rx) = mpsc::channel();
        let worker = {
            let token = Arc::clone(&token);
            thread::spawn(move || {
                token.register_current_thread();
                let _guard = ExclusiveGuard::acquire(&*token);
                acquired_tx.send(thread::current().id()).unwrap();
            })
        };

        // Still held here, so the worker cannot have acquired it.
        assert!(acquired_rx
            .recv_timeout(Duration::from_millis(50))
            .is_err());

        token.release_exclusive();
        let worker_id = acquired_rx.recv().unwrap();
        worker.join().unwrap();

        assert_ne!(worker_id, thread::current().id());
        assert_eq!(token.holder(), None);
    }

    #[test]
    fn blocking_section_hands_the_token_back() {
        let token = registered_token();
        token.acquire_exclusive();

        let held_inside = token.blocking_section(|| token.holder());

        assert_eq!(held_inside, None);
        assert_eq!(token.holder(), Some(thread::current().id()));
        token.release_exclusive();
    }
}
