//! Per-symbol cached extension entry points and the `ext_fns!` dispatch
//! macro.

use std::marker::PhantomData;

use once_cell::sync::OnceCell;

use crate::{ensure_library_loaded, Address, LoadError, Registry, SymbolSource};

/// A lazily resolved extension entry point with signature `F`.
///
/// Meant to live in a `static`. The first [`get`](ExtFn::get) resolves the
/// symbol and caches the outcome; every later call returns the cached
/// function pointer, or the cached error, without touching the loader.
pub struct ExtFn<F> {
    name: &'static str,
    slot: OnceCell<Result<Address, LoadError>>,
    _signature: PhantomData<F>,
}

impl<F: Copy> ExtFn<F> {
    /// # Safety
    ///
    /// `F` must be an `unsafe extern "system" fn` type matching the real
    /// signature of the entry point called `name`.
    pub const unsafe fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: OnceCell::new(),
            _signature: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the first resolution has happened and succeeded.
    pub fn is_resolved(&self) -> bool {
        matches!(self.slot.get(), Some(Ok(_)))
    }

    /// Resolve through the process-wide registry.
    pub fn get(&self) -> Result<F, LoadError> {
        self.get_with(ensure_library_loaded)
    }

    /// Resolve through the registry returned by `registry`, which is only
    /// called while the slot is still empty.
    pub fn get_with<'r, S, R>(&self, registry: R) -> Result<F, LoadError>
    where
        S: SymbolSource + 'r,
        R: FnOnce() -> Result<&'r Registry<S>, LoadError>,
    {
        match self.slot.get() {
            Some(cached) => Self::typed(cached),
            None => self.get_in(registry()?),
        }
    }

    /// Resolve through an explicit registry.
    pub fn get_in<S: SymbolSource>(&self, registry: &Registry<S>) -> Result<F, LoadError> {
        let cached = self.slot.get_or_init(|| {
            let result = registry.resolve(self.name);
            if let Err(err) = &result {
                tracing::error!(symbol = self.name, "{err}");
            }
            result
        });
        Self::typed(cached)
    }

    fn typed(cached: &Result<Address, LoadError>) -> Result<F, LoadError> {
        match cached {
            // SAFETY: the signature was vouched for in `new`.
            Ok(address) => Ok(unsafe { address.cast::<F>() }),
            Err(err) => Err(err.clone()),
        }
    }
}

/// Declare extension entry points that resolve on first call.
///
/// Each `fn glName(args) -> Ret;` line becomes an `unsafe fn glName(args) ->
/// Result<Ret, LoadError>` backed by its own static [`ExtFn`], so the symbol
/// is looked up at most once per process and every later call goes straight
/// through the cached pointer.
///
/// Entry points resolve through the process-wide registry unless the block
/// starts with `in <expr>;`, where `<expr>` evaluates to a
/// `&'static Registry<_>`.
///
/// ```ignore
/// glshim_loader::ext_fns! {
///     pub fn glBindFramebufferEXT(target: GLenum, framebuffer: GLuint);
///     pub fn glCheckFramebufferStatusEXT(target: GLenum) -> GLenum;
/// }
/// ```
#[macro_export]
macro_rules! ext_fns {
    (in $registry:expr; $($items:tt)*) => {
        $crate::ext_fns! {
            @with [|| ::core::result::Result::Ok::<_, $crate::LoadError>($registry)]
            $($items)*
        }
    };
    (@with [$registry:expr] $(
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
    )*) => {
        $(
            $(#[$meta])*
            #[allow(non_snake_case, clippy::too_many_arguments)]
            $vis unsafe fn $name(
                $($arg: $ty),*
            ) -> ::core::result::Result<$crate::__ext_ret!($($ret)?), $crate::LoadError> {
                static ENTRY: $crate::ExtFn<unsafe extern "system" fn($($ty),*) $(-> $ret)?> =
                    unsafe { $crate::ExtFn::new(stringify!($name)) };
                let entry = ENTRY.get_with($registry)?;
                Ok(entry($($arg),*))
            }
        )*
    };
    ($($items:tt)*) => {
        $crate::ext_fns! {
            @with [$crate::ensure_library_loaded]
            $($items)*
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ext_ret {
    () => { () };
    ($ret:ty) => { $ret };
}
