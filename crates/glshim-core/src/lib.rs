//! Shared pieces of the glshim binding layer.
//!
//! - [`value`] models host runtime values and converts them to native GL
//!   scalars ([`FromValue`] / [`IntoValue`]).
//! - [`error`] carries failures reported by the wrapped native libraries.
//! - [`config`] reads the environment once per process.
//! - [`logging`] installs the `tracing` subscriber.

pub mod config;
pub mod error;
pub mod logging;
pub mod value;

pub use config::{Config, ProcSource};
pub use error::{NativeError, Subsystem};
pub use value::{ArgError, Args, FromValue, GlBool, IntoValue, Value, FAST_CALL_MAX_ARGS};
