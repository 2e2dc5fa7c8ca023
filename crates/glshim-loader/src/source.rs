//! Where entry point addresses come from.

use std::ffi::{c_void, CStr};
use std::ptr::NonNull;

/// Something that can look up a GL entry point by name.
pub trait SymbolSource: Send + Sync {
    /// Address of `name`, or `None` if this source does not provide it.
    fn lookup(&self, name: &CStr) -> Option<NonNull<c_void>>;

    /// Human readable origin, used in error messages.
    fn describe(&self) -> &str;
}

impl<S: SymbolSource + ?Sized> SymbolSource for Box<S> {
    fn lookup(&self, name: &CStr) -> Option<NonNull<c_void>> {
        (**self).lookup(name)
    }

    fn describe(&self) -> &str {
        (**self).describe()
    }
}

/// The platform context loader from the `gl_loader` crate
/// (`wglGetProcAddress`, `glXGetProcAddress` or the macOS framework).
///
/// Unlike [`GlLibrary`](crate::GlLibrary) this needs a current GL context
/// for extension entry points on some platforms. On GLX it also returns a
/// dispatch stub for names the driver does not implement, so a missing entry
/// point is only reported where the platform loader reports one.
#[derive(Debug)]
pub struct ContextLoader {
    _private: (),
}

impl ContextLoader {
    pub fn new() -> Self {
        gl_loader::init_gl();
        tracing::debug!("initialised gl_loader context loader");
        Self { _private: () }
    }
}

impl Default for ContextLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolSource for ContextLoader {
    fn lookup(&self, name: &CStr) -> Option<NonNull<c_void>> {
        let name = name.to_str().ok()?;
        NonNull::new(gl_loader::get_proc_address(name) as *mut c_void)
    }

    fn describe(&self) -> &str {
        "the platform context loader"
    }
}
