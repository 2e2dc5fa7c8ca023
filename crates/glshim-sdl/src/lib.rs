//! SDL side of the binding layer.
//!
//! The audio callback runs on a native audio thread, so it cannot simply call
//! into host code. [`AudioBridge`] registers that thread with the host
//! ([`HostRuntime`]) before the first callback and holds the host's exclusive
//! token only while the host handler runs. [`ExclusiveToken`] is an
//! in-process implementation of that token.
//!
//! With the `native` feature, `native` links SDL2 and wraps audio, image,
//! mixer and TrueType font loading, turning every SDL failure into a
//! [`glshim_core::NativeError`].

pub mod audio;
pub mod runtime;

#[cfg(feature = "native")]
pub mod native;

pub use audio::{AudioBridge, AudioHandler};
pub use runtime::{ExclusiveGuard, ExclusiveToken, HostRuntime};
