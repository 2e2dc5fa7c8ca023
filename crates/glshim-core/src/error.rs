//! Errors surfaced from the wrapped native libraries.

use std::fmt;

/// Which native library reported a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsystem {
    Gl,
    Sdl,
    Image,
    Mixer,
    Ttf,
}

impl Subsystem {
    /// Name of the library as it appears in its own error messages.
    pub fn library_name(self) -> &'static str {
        match self {
            Subsystem::Gl => "OpenGL",
            Subsystem::Sdl => "SDL",
            Subsystem::Image => "SDL_image",
            Subsystem::Mixer => "SDL_mixer",
            Subsystem::Ttf => "SDL_ttf",
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.library_name())
    }
}

/// A failure reported by a native library, carrying the library's own error
/// string unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeError {
    pub subsystem: Subsystem,
    pub message: String,
}

impl NativeError {
    pub fn new(subsystem: Subsystem, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(%subsystem, %message, "native call failed");
        Self { subsystem, message }
    }
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{} call failed", self.subsystem)
        } else {
            write!(f, "{}: {}", self.subsystem, self.message)
        }
    }
}

impl std::error::Error for NativeError {}
