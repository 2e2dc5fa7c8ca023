//! Audio callback bridge between the native audio thread and host code.

use std::marker::PhantomData;
use std::sync::Arc;
use std::thread::{self, ThreadId};

use crate::runtime::{ExclusiveGuard, HostRuntime};

/// Host code that fills an audio buffer.
///
/// Runs on the real-time audio thread and must not block for long.
pub trait AudioHandler<T>: Send {
    fn fill(&mut self, out: &mut [T]);
}

impl<T, F> AudioHandler<T> for F
where
    F: FnMut(&mut [T]) + Send,
{
    fn fill(&mut self, out: &mut [T]) {
        self(out)
    }
}

/// Wraps a host [`AudioHandler`] so it can be driven from a native audio
/// thread.
///
/// On the first callback from a given thread the bridge registers that thread
/// with the host runtime, before the handler ever runs. Each callback then
/// takes the runtime's exclusive token, runs the handler and gives the token
/// back, also when the handler panics.
pub struct AudioBridge<R, H, T> {
    runtime: Arc<R>,
    handler: H,
    registered_on: Option<ThreadId>,
    callbacks: u64,
    _sample: PhantomData<fn(&mut [T])>,
}

impl<R, H, T> AudioBridge<R, H, T>
where
    R: HostRuntime,
    H: AudioHandler<T>,
{
    pub fn new(runtime: Arc<R>, handler: H) -> Self {
        Self {
            runtime,
            handler,
            registered_on: None,
            callbacks: 0,
            _sample: PhantomData,
        }
    }

    /// One native callback.
    pub fn fill(&mut self, out: &mut [T]) {
        let current = thread::current().id();
        if self.registered_on != Some(current) {
            self.runtime.register_current_thread();
            tracing::debug!(thread = ?current, "audio callback thread registered");
            self.registered_on = Some(current);
        }

        let _token = ExclusiveGuard::acquire(&*self.runtime);
        self.handler.fill(out);
        self.callbacks += 1;
    }

    /// Number of completed callbacks.
    pub fn callbacks(&self) -> u64 {
        self.callbacks
    }

    pub fn runtime(&self) -> &Arc<R> {
        &self.runtime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::ExclusiveToken;
    use std::sync::Mutex;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Register,
        Acquire,
        Handler,
        Release,
    }

    #[derive(Default)]
    struct RecordingRuntime {
        events: Mutex<Vec<Event>>,
    }

    impl RecordingRuntime {
        fn push(&self, event: Event) {
            self.events.lock().unwrap().push(event);
        }

        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }
    }

    impl HostRuntime for RecordingRuntime {
        fn register_current_thread(&self) {
            self.push(Event::Register);
        }

        fn acquire_exclusive(&self) {
            self.push(Event::Acquire);
        }

        fn release_exclusive(&self) {
            self.push(Event::Release);
        }
    }

    #[test]
    fn registers_once_before_the_first_handler_call() {
        use Event::*;

        let runtime = Arc::new(RecordingRuntime::default());
        let log = Arc::clone(&runtime);
        let mut bridge = AudioBridge::new(Arc::clone(&runtime), move |out: &mut [i16]| {
            log.push(Handler);
            out.fill(3);
        });

        let mut buffer = [0i16; 8];
        bridge.fill(&mut buffer);
        bridge.fill(&mut buffer);

        assert_eq!(buffer, [3; 8]);
        assert_eq!(bridge.callbacks(), 2);
        assert_eq!(
            runtime.events(),
            vec![Register, Acquire, Handler, Release, Acquire, Handler, Release]
        );
    }

    #[test]
    fn token_is_released_when_the_handler_panics() {
        let runtime = Arc::new(RecordingRuntime::default());
        let mut bridge = AudioBridge::new(Arc::clone(&runtime), |_: &mut [u8]| {
            panic!("handler failed");
        });

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            bridge.fill(&mut [0u8; 4]);
        }));

        assert!(result.is_err());
        assert_eq!(runtime.events().last(), Some(&Event::Release));
    }

    #[test]
    fn handler_runs_while_the_audio_thread_holds_the_token() {
        let token = Arc::new(ExclusiveToken::new());
        token.register_current_thread();
        // Host code owns the token until it enters a blocking section.
        token.acquire_exclusive();

        let observed = Arc::new(Mutex::new(Vec::new()));
        let audio_thread = {
            let token = Arc::clone(&token);
            let observed = Arc::clone(&observed);
            let handler_token = Arc::clone(&token);
            thread::spawn(move || {
                let mut bridge = AudioBridge::new(token, move |out: &mut [f32]| {
                    let me = thread::current().id();
                    observed.lock().unwrap().push(handler_token.holder() == Some(me));
                    out.fill(0.0);
                });
                let mut buffer = [1.0f32; 16];
                for _ in 0..3 {
                    bridge.fill(&mut buffer);
                }
                (bridge.callbacks(), buffer)
            })
        };

        let (callbacks, buffer) = token.blocking_section(|| audio_thread.join().unwrap());

        assert_eq!(callbacks, 3);
        assert_eq!(buffer, [0.0; 16]);
        assert_eq!(*observed.lock().unwrap(), vec![true, true, true]);
        assert_eq!(token.holder(), Some(thread::current().id()));
        token.release_exclusive();
    }
}
