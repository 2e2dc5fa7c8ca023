//! Runtime resolution of OpenGL entry points.
//!
//! The GL library is opened once per process ([`ensure_library_loaded`]) and
//! never closed. Entry points are resolved by name through a [`Registry`],
//! which consults the underlying [`SymbolSource`] at most once per name and
//! caches both successes and failures.
//!
//! - [`ExtFn`] is a per-symbol slot for extension entry points, and
//!   [`ext_fns!`] declares callable wrappers over such slots.
//! - [`load_core_bindings`] fills the `gl` crate's function table from the
//!   same registry.
//!
//! ### Failure
//!
//! A missing library or entry point is terminal for that library or entry
//! point: the [`LoadError`] names it and is returned again on every later
//! request, without retrying.

mod bindings;
mod error;
mod ext;
mod library;
mod registry;
mod source;

#[cfg(test)]
mod testing;

pub use bindings::{core_bindings_loaded, load_core_bindings, load_core_bindings_from};
pub use error::LoadError;
pub use ext::ExtFn;
pub use library::{GlLibrary, LIBRARY_CANDIDATES};
pub use registry::{ensure_library_loaded, resolve, Address, DynSource, Registry, SymbolState};
pub use source::{ContextLoader, SymbolSource};
