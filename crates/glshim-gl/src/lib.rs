//! Generated OpenGL stubs for the host binding layer.
//!
//! Every stub has the shape [`StubFn`]: it takes the host's argument list,
//! checks arity, converts each argument to its native type, calls the entry
//! point and converts the result back to a [`Value`].
//!
//! - [`standard`] covers OpenGL 1.1 to 2.1 through the `gl` crate table,
//!   which [`init`] fills from the shared loader registry.
//! - [`compat`] covers the fixed-function entry points of the same versions,
//!   which the core-profile `gl` crate leaves out; they resolve by name on
//!   first call.
//! - [`extensions`] covers vendor extensions, each resolved on its first call.
//!
//! Hosts usually bind by name with [`lookup_stub`] or [`call`].

#[macro_use]
mod macros;

pub mod compat;
pub mod extensions;
pub mod standard;

use std::fmt;

use anyhow::Context;
pub use glshim_core::{Args, Value};

/// Signature shared by every generated stub.
pub type StubFn = for<'a, 'b> fn(&'a Args<'b>) -> anyhow::Result<Value>;

/// A core entry point was called before [`init`], or the driver lacks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotLoaded(pub &'static str);

impl fmt::Display for NotLoaded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OpenGL entry point `{}` is not loaded (call glshim_gl::init with a current context)",
            self.0
        )
    }
}

impl std::error::Error for NotLoaded {}

/// Set up logging and load the core GL table from the process-wide loader.
///
/// Call once a GL context is current. Returns the number of resolved entry
/// points.
pub fn init() -> anyhow::Result<usize> {
    glshim_core::logging::init();
    let loaded = glshim_loader::load_core_bindings().context("loading core OpenGL entry points")?;
    tracing::info!(loaded, "OpenGL stubs ready");
    Ok(loaded)
}

fn all_stubs() -> impl Iterator<Item = &'static (&'static str, StubFn)> {
    standard::STUBS
        .iter()
        .chain(compat::STUBS.iter())
        .chain(extensions::STUBS.iter())
}

/// The stub for a GL entry point, by its C name (`glBlendFunc`).
pub fn lookup_stub(name: &str) -> Option<StubFn> {
    all_stubs()
        .find(|(stub_name, _)| *stub_name == name)
        .map(|&(_, stub)| stub)
}

/// Names of every generated stub.
pub fn stub_names() -> impl Iterator<Item = &'static str> {
    all_stubs().map(|&(name, _)| name)
}

/// Call a stub by entry point name.
pub fn call(name: &str, args: &Args<'_>) -> anyhow::Result<Value> {
    let stub = lookup_stub(name).with_context(|| format!("unknown OpenGL entry point `{name}`"))?;
    stub(args).with_context(|| format!("{name} failed"))
}
