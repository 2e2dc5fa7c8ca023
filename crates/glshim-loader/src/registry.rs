//! The symbol table: one entry per entry point name, filled on first use.

use std::collections::HashMap;
use std::ffi::{c_void, CString};
use std::ptr::NonNull;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use glshim_core::{Config, ProcSource};
use once_cell::sync::Lazy;

use crate::{ContextLoader, GlLibrary, LoadError, SymbolSource};

/// A resolved, non-null entry point address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address(NonNull<c_void>);

// SAFETY: an entry point address is immutable for the process lifetime.
unsafe impl Send for Address {}
unsafe impl Sync for Address {}

impl Address {
    pub fn new(ptr: NonNull<c_void>) -> Self {
        Self(ptr)
    }

    pub fn as_ptr(self) -> *const c_void {
        self.0.as_ptr()
    }

    /// Reinterpret as a function pointer.
    ///
    /// # Safety
    ///
    /// `F` must be a function pointer type matching the entry point's real
    /// signature and calling convention.
    pub unsafe fn cast<F: Copy>(self) -> F {
        debug_assert_eq!(
            std::mem::size_of::<F>(),
            std::mem::size_of::<*const c_void>(),
            "entry points can only be cast to function pointers"
        );
        std::mem::transmute_copy(&self.0.as_ptr())
    }
}

/// Per-symbol state. `Resolved` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolState {
    Unresolved,
    Resolved(Address),
    Failed(LoadError),
}

/// Name-keyed cache of entry points over one [`SymbolSource`].
///
/// Each name is looked up in the source at most once; later calls return the
/// cached address or the cached error.
pub struct Registry<S> {
    source: S,
    table: Mutex<HashMap<String, SymbolState>>,
    lookups: AtomicUsize,
}

impl<S: SymbolSource> Registry<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            table: Mutex::new(HashMap::new()),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn resolve(&self, name: &str) -> Result<Address, LoadError> {
        // The lock is held across the lookup so concurrent first calls cannot
        // both reach the source.
        let mut table = self.table();
        match table.get(name) {
            Some(SymbolState::Resolved(address)) => return Ok(*address),
            Some(SymbolState::Failed(err)) => return Err(err.clone()),
            Some(SymbolState::Unresolved) | None => {}
        }

        let result = self.lookup(name);
        let state = match &result {
            Ok(address) => SymbolState::Resolved(*address),
            Err(err) => SymbolState::Failed(err.clone()),
        };
        table.insert(name.to_owned(), state);
        result
    }

    fn lookup(&self, name: &str) -> Result<Address, LoadError> {
        let c_name = CString::new(name).map_err(|_| LoadError::InvalidName {
            name: name.to_owned(),
        })?;

        self.lookups.fetch_add(1, Ordering::Relaxed);
        match self.source.lookup(&c_name) {
            Some(ptr) => {
                tracing::trace!(symbol = name, address = ?ptr, "resolved");
                Ok(Address(ptr))
            }
            None => {
                tracing::debug!(symbol = name, source = self.source.describe(), "not found");
                Err(LoadError::MissingSymbol {
                    name: name.to_owned(),
                    source: self.source.describe().to_owned(),
                })
            }
        }
    }

    pub fn state(&self, name: &str) -> SymbolState {
        self.table()
            .get(name)
            .cloned()
            .unwrap_or(SymbolState::Unresolved)
    }

    /// Number of times the underlying source has been consulted.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn resolved_count(&self) -> usize {
        self.table()
            .values()
            .filter(|state| matches!(state, SymbolState::Resolved(_)))
            .count()
    }

    fn table(&self) -> MutexGuard<'_, HashMap<String, SymbolState>> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =====================================================================
// Process-wide registry
// =====================================================================

pub type DynSource = Box<dyn SymbolSource>;

static GLOBAL: Lazy<Result<Registry<DynSource>, LoadError>> =
    Lazy::new(|| open_source(Config::get()).map(Registry::new));

fn open_source(config: &Config) -> Result<DynSource, LoadError> {
    match config.proc_source {
        ProcSource::Library => Ok(Box::new(GlLibrary::open(config)?)),
        ProcSource::Context => Ok(Box::new(ContextLoader::new())),
    }
}

/// Open the GL library on first call and return the process-wide registry.
///
/// The outcome is decided once: if the library could not be opened, every
/// later call returns the same error.
pub fn ensure_library_loaded() -> Result<&'static Registry<DynSource>, LoadError> {
    GLOBAL.as_ref().map_err(Clone::clone)
}

/// Resolve `name` through the process-wide registry.
pub fn resolve(name: &str) -> Result<Address, LoadError> {
    ensure_library_loaded()?.resolve(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fake_add, FakeGl};

    #[test]
    fn resolves_once_per_symbol() {
        let registry = Registry::new(FakeGl::new());
        assert_eq!(registry.state("glAddEXT"), SymbolState::Unresolved);

        let first = registry.resolve("glAddEXT").unwrap();
        let second = registry.resolve("glAddEXT").unwrap();

        assert_eq!(first, second);
        assert_eq!(first.as_ptr(), fake_add as *const c_void);
        assert_eq!(registry.lookup_count(), 1);
        assert_eq!(registry.source().lookups_of("glAddEXT"), 1);
        assert_eq!(registry.state("glAddEXT"), SymbolState::Resolved(first));
    }

    #[test]
    fn failure_is_terminal() {
        let registry = Registry::new(FakeGl::new());

        let err = registry.resolve("glMissingNV").unwrap_err();
        assert_eq!(err.symbol(), Some("glMissingNV"));
        assert!(err.to_string().contains("glMissingNV"));
        assert!(err.to_string().contains("fake GL"));

        assert_eq!(registry.resolve("glMissingNV").unwrap_err(), err);
        assert_eq!(registry.lookup_count(), 1);
        assert_eq!(registry.state("glMissingNV"), SymbolState::Failed(err));
        assert_eq!(registry.resolved_count(), 0);
    }

    #[test]
    fn interior_nul_never_reaches_the_source() {
        let registry = Registry::new(FakeGl::new());
        let err = registry.resolve("glBad\0Name").unwrap_err();
        assert!(matches!(err, LoadError::InvalidName { .. }));
        assert_eq!(registry.lookup_count(), 0);
    }

    #[test]
    fn concurrent_first_calls_look_up_once() {
        let registry = Registry::new(FakeGl::new());
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| registry.resolve("glAddEXT").unwrap());
            }
        });
        assert_eq!(registry.source().lookups_of("glAddEXT"), 1);
        assert_eq!(registry.resolved_count(), 1);
    }

    #[test]
    fn casts_to_a_callable_function() {
        let registry = Registry::new(FakeGl::new());
        let address = registry.resolve("glAddEXT").unwrap();
        let add: unsafe extern "system" fn(i32, i32) -> i32 = unsafe { address.cast() };
        assert_eq!(unsafe { add(2, 3) }, 5);
    }
}
