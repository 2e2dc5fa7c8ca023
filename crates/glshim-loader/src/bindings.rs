//! Loading of the `gl` crate's core function table through the registry, so
//! core and extension calls share one library handle and one cache.

use std::sync::Once;

use crate::{ensure_library_loaded, LoadError, Registry, SymbolSource};

static CORE_INIT: Once = Once::new();

/// Fill the `gl` crate's function pointers from the process-wide registry.
///
/// The table is loaded exactly once; later calls only report the number of
/// resolved entry points. Entry points the driver lacks stay unloaded and
/// surface as errors when a stub tries to call them.
pub fn load_core_bindings() -> Result<usize, LoadError> {
    let registry = ensure_library_loaded()?;
    CORE_INIT.call_once(|| {
        let loaded = load_core_bindings_from(registry);
        tracing::debug!(loaded, source = registry.source().describe(), "core GL bindings loaded");
    });
    Ok(registry.resolved_count())
}

/// Fill the `gl` crate's function pointers from `registry`, returning how
/// many it resolved.
pub fn load_core_bindings_from<S: SymbolSource>(registry: &Registry<S>) -> usize {
    let mut loaded = 0;
    gl::load_with(|name| match registry.resolve(name) {
        Ok(address) => {
            loaded += 1;
            address.as_ptr()
        }
        Err(_) => std::ptr::null(),
    });
    loaded
}

/// Whether [`load_core_bindings`] has run.
pub fn core_bindings_loaded() -> bool {
    CORE_INIT.is_completed()
}
