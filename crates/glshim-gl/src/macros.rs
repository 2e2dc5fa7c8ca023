//! Stub generators. One signature line per entry point expands into a
//! function that unmarshals its arguments, calls the entry point and
//! marshals the result back.

macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count!($($tail)*) };
}

macro_rules! marshal_ret {
    ($ret:ident) => {{
        let () = $ret;
        ::glshim_core::Value::UNIT
    }};
    ($ret:ident, $ty:ty) => {{
        let ret: $ty = $ret.into();
        ::glshim_core::IntoValue::into_value(ret)
    }};
}

/// Stubs over the statically known `gl` crate table. Arguments use host-side
/// types and are converted with `Into` to the native parameter types.
macro_rules! gl_stubs {
    ($(
        $(#[$meta:meta])*
        $stub:ident => $func:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
    )*) => {
        $(
            $(#[$meta])*
            pub fn $stub(args: &::glshim_core::Args<'_>) -> ::anyhow::Result<::glshim_core::Value> {
                args.expect_arity(count!($($arg)*))?;
                #[allow(unused_mut)]
                let mut _cursor = args.cursor();
                $(let $arg: $ty = _cursor.next()?;)*
                if !gl::$func::is_loaded() {
                    return Err($crate::NotLoaded(concat!("gl", stringify!($func))).into());
                }
                // SAFETY: values are forwarded unchanged; their validity is
                // the caller's contract with OpenGL.
                let ret = unsafe { gl::$func($($arg.into()),*) };
                Ok(marshal_ret!(ret $(, $ret)?))
            }
        )*

        pub(crate) const STUBS: &[(&str, $crate::StubFn)] = &[
            $((concat!("gl", stringify!($func)), $stub as $crate::StubFn)),*
        ];
    };
}

/// Stubs over extension entry points, resolved on first call through
/// `glshim_loader::ext_fns!`. Arguments use the native types directly.
macro_rules! ext_stubs {
    ($(
        $(#[$meta:meta])*
        $stub:ident => $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
    )*) => {
        /// Resolve-on-first-call wrappers for every extension entry point
        /// in this module.
        pub mod entry {
            #[allow(unused_imports)]
            use super::*;

            glshim_loader::ext_fns! {
                $(pub fn $name($($arg: $ty),*) $(-> $ret)?;)*
            }
        }

        $(
            $(#[$meta])*
            pub fn $stub(args: &::glshim_core::Args<'_>) -> ::anyhow::Result<::glshim_core::Value> {
                args.expect_arity(count!($($arg)*))?;
                #[allow(unused_mut)]
                let mut _cursor = args.cursor();
                $(let $arg: $ty = _cursor.next()?;)*
                // SAFETY: as for core stubs; the wrapper carries the native
                // signature.
                let ret = unsafe { entry::$name($($arg),*) }?;
                Ok(marshal_ret!(ret $(, $ret)?))
            }
        )*

        pub(crate) const STUBS: &[(&str, $crate::StubFn)] = &[
            $((stringify!($name), $stub as $crate::StubFn)),*
        ];
    };
}
