//! The process-wide OpenGL library handle.

use std::ffi::{c_char, c_void, CStr, OsStr};
use std::ptr::NonNull;

use glshim_core::Config;
use libloading::Library;

use crate::{LoadError, SymbolSource};

/// Libraries tried in order when no explicit path is configured.
#[cfg(target_os = "windows")]
pub const LIBRARY_CANDIDATES: &[&str] = &["opengl32.dll"];
#[cfg(target_os = "macos")]
pub const LIBRARY_CANDIDATES: &[&str] = &[
    "libGL.dylib",
    "/System/Library/Frameworks/OpenGL.framework/OpenGL",
];
#[cfg(all(unix, not(target_os = "macos")))]
pub const LIBRARY_CANDIDATES: &[&str] = &["libGL.so.1", "libGL.so"];
#[cfg(not(any(windows, unix)))]
pub const LIBRARY_CANDIDATES: &[&str] = &[];

// opengl32.dll only exports GL 1.1; everything newer comes from the ICD
// through `wglGetProcAddress`. Elsewhere the library's own symbol table is
// authoritative: `glXGetProcAddressARB` hands out a dispatch stub for any
// name, so it can never report a missing entry point.
#[cfg(target_os = "windows")]
const PROC_ADDRESS_SYMBOL: Option<&[u8]> = Some(b"wglGetProcAddress\0");
#[cfg(not(target_os = "windows"))]
const PROC_ADDRESS_SYMBOL: Option<&[u8]> = None;

type GetProcAddressFn = unsafe extern "system" fn(*const c_char) -> *const c_void;

/// An opened GL library. Never closed once opened.
pub struct GlLibrary {
    library: Library,
    name: String,
    get_proc_address: Option<GetProcAddressFn>,
}

impl std::fmt::Debug for GlLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlLibrary")
            .field("name", &self.name)
            .field("get_proc_address", &self.get_proc_address.is_some())
            .finish()
    }
}

impl GlLibrary {
    /// Open the configured library, or the first platform candidate that
    /// loads.
    pub fn open(config: &Config) -> Result<Self, LoadError> {
        match &config.gl_library {
            Some(path) => Self::open_first(&[path.as_os_str()]),
            None => Self::open_first(LIBRARY_CANDIDATES),
        }
    }

    pub fn open_first<P: AsRef<OsStr>>(candidates: &[P]) -> Result<Self, LoadError> {
        let mut reason = String::from("no candidates for this platform");

        for candidate in candidates {
            let candidate = candidate.as_ref();
            // SAFETY: loading the system GL library runs only its own
            // initialisers.
            match unsafe { Library::new(candidate) } {
                Ok(library) => {
                    let name = candidate.to_string_lossy().into_owned();
                    return Ok(Self::from_library(library, name));
                }
                Err(err) => {
                    tracing::trace!(candidate = ?candidate, %err, "GL library candidate failed");
                    reason = err.to_string();
                }
            }
        }

        let err = LoadError::LibraryNotFound {
            tried: candidates
                .iter()
                .map(|c| c.as_ref().to_string_lossy().into_owned())
                .collect(),
            reason,
        };
        tracing::error!("{err}");
        Err(err)
    }

    fn from_library(library: Library, name: String) -> Self {
        let get_proc_address = PROC_ADDRESS_SYMBOL.and_then(|symbol| {
            // SAFETY: the signature matches the window-system API.
            unsafe { library.get::<GetProcAddressFn>(symbol) }
                .ok()
                .map(|f| *f)
        });

        tracing::debug!(
            library = %name,
            proc_address = get_proc_address.is_some(),
            "opened GL library"
        );

        Self {
            library,
            name,
            get_proc_address,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// `wglGetProcAddress` signals failure with small sentinel values as well as
/// null.
fn is_valid_proc(ptr: *const c_void) -> bool {
    !matches!(ptr as isize, -1..=3)
}

impl SymbolSource for GlLibrary {
    fn lookup(&self, name: &CStr) -> Option<NonNull<c_void>> {
        if let Some(get_proc_address) = self.get_proc_address {
            let ptr = unsafe { get_proc_address(name.as_ptr()) };
            if is_valid_proc(ptr) {
                return NonNull::new(ptr as *mut c_void);
            }
        }

        let symbol = unsafe { self.library.get::<*const c_void>(name.to_bytes_with_nul()) }.ok()?;
        NonNull::new(*symbol as *mut c_void)
    }

    fn describe(&self) -> &str {
        &self.name
    }
}
