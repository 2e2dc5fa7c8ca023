//! Thin SDL wrappers. Every failure carries the native library's own error
//! string (`SDL_GetError`, `IMG_GetError`, `TTF_GetError`, `Mix_GetError`).

use std::path::Path;

use anyhow::Context;
use glshim_core::{NativeError, Subsystem};
use sdl2::audio::{AudioCallback, AudioDevice, AudioFormatNum, AudioSpecDesired};
use sdl2::image::LoadSurface;
use sdl2::mixer::{Channel, Chunk, Music, Sdl2MixerContext};
use sdl2::pixels::Color;
use sdl2::surface::Surface;
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::{AudioSubsystem, Sdl};

use crate::audio::{AudioBridge, AudioHandler};
use crate::runtime::HostRuntime;

fn native_error(subsystem: Subsystem) -> impl Fn(String) -> NativeError {
    move |message| NativeError::new(subsystem, message)
}

impl<R, H, T> AudioCallback for AudioBridge<R, H, T>
where
    R: HostRuntime + 'static,
    H: AudioHandler<T>,
    T: AudioFormatNum + 'static,
{
    type Channel = T;

    fn callback(&mut self, out: &mut [T]) {
        self.fill(out);
    }
}

/// SDL with audio, mixer and TrueType fonts initialised.
pub struct NativeContext {
    pub sdl: Sdl,
    pub audio: AudioSubsystem,
    pub ttf: Sdl2TtfContext,
    _mixer: Sdl2MixerContext,
}

impl NativeContext {
    pub fn init() -> anyhow::Result<Self> {
        let sdl = sdl2::init()
            .map_err(native_error(Subsystem::Sdl))
            .context("initialising SDL")?;
        let audio = sdl
            .audio()
            .map_err(native_error(Subsystem::Sdl))
            .context("initialising the SDL audio subsystem")?;
        let ttf = sdl2::ttf::init()
            .map_err(|err| NativeError::new(Subsystem::Ttf, err.to_string()))
            .context("initialising SDL_ttf")?;
        let mixer = sdl2::mixer::init(sdl2::mixer::InitFlag::OGG)
            .map_err(native_error(Subsystem::Mixer))
            .context("initialising SDL_mixer")?;

        tracing::debug!("SDL subsystems initialised");
        Ok(Self {
            sdl,
            audio,
            ttf,
            _mixer: mixer,
        })
    }
}

/// Open a playback device driven by `bridge`.
pub fn open_audio<R, H, T>(
    audio: &AudioSubsystem,
    desired: &AudioSpecDesired,
    bridge: AudioBridge<R, H, T>,
) -> Result<AudioDevice<AudioBridge<R, H, T>>, NativeError>
where
    R: HostRuntime + 'static,
    H: AudioHandler<T>,
    T: AudioFormatNum + 'static,
{
    audio
        .open_playback(None::<&str>, desired, |obtained| {
            tracing::debug!(
                freq = obtained.freq,
                channels = obtained.channels,
                samples = obtained.samples,
                "audio device opened"
            );
            bridge
        })
        .map_err(native_error(Subsystem::Sdl))
}

pub fn load_image(path: impl AsRef<Path>) -> Result<Surface<'static>, NativeError> {
    Surface::from_file(path).map_err(native_error(Subsystem::Image))
}

pub fn open_font<'ttf>(
    ttf: &'ttf Sdl2TtfContext,
    path: impl AsRef<Path>,
    point_size: u16,
) -> Result<Font<'ttf, 'static>, NativeError> {
    ttf.load_font(path, point_size)
        .map_err(native_error(Subsystem::Ttf))
}

pub fn render_text(
    font: &Font<'_, '_>,
    text: &str,
    color: Color,
) -> Result<Surface<'static>, NativeError> {
    font.render(text)
        .blended(color)
        .map_err(|err| NativeError::new(Subsystem::Ttf, err.to_string()))
}

/// Open the mixer's output device with SDL_mixer's default format.
pub fn open_mixer(chunk_size: i32) -> Result<(), NativeError> {
    sdl2::mixer::open_audio(
        sdl2::mixer::DEFAULT_FREQUENCY,
        sdl2::mixer::DEFAULT_FORMAT,
        sdl2::mixer::DEFAULT_CHANNELS,
        chunk_size,
    )
    .map_err(native_error(Subsystem::Mixer))
}

pub fn load_chunk(path: impl AsRef<Path>) -> Result<Chunk, NativeError> {
    Chunk::from_file(path).map_err(native_error(Subsystem::Mixer))
}

pub fn load_music(path: impl AsRef<Path>) -> Result<Music<'static>, NativeError> {
    Music::from_file(path).map_err(native_error(Subsystem::Mixer))
}

/// Play `chunk` on the first free channel; `loops` of -1 repeats forever.
pub fn play_chunk(chunk: &Chunk, loops: i32) -> Result<Channel, NativeError> {
    Channel::all()
        .play(chunk, loops)
        .map_err(native_error(Subsystem::Mixer))
}

pub fn play_music(music: &Music<'_>, loops: i32) -> Result<(), NativeError> {
    music.play(loops).map_err(native_error(Subsystem::Mixer))
}
