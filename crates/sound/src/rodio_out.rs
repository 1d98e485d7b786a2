//! Sine-wave speaker on the default audio output device.
//!
//! Each volume-on starts a fresh sink playing a sine at the current tone;
//! volume-off stops it. That mirrors a PWM buzzer, which only knows a
//! frequency and on/off.

use rodio::source::SineWave;
use rodio::{OutputStream, OutputStreamHandle, Sink};

use log::{debug, warn};

use crate::types::hal::Audio;

const VOLUME: f32 = 0.2;

pub struct RodioSpeaker {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Option<Sink>,
    tone_hz: u16,
}

impl RodioSpeaker {
    pub fn open() -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        debug!("opened default audio output");
        Ok(Self {
            _stream: stream,
            handle,
            sink: None,
            tone_hz: 0,
        })
    }

    fn start(&mut self) {
        if self.sink.is_some() {
            return;
        }
        let sink = match Sink::try_new(&self.handle) {
            Ok(sink) => sink,
            Err(e) => {
                warn!("creating audio sink failed: {e}");
                return;
            }
        };
        sink.set_volume(VOLUME);
        sink.append(SineWave::new(self.tone_hz as f32));
        self.sink = Some(sink);
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

impl Audio for RodioSpeaker {
    fn set_tone(&mut self, frequency_hz: u16) {
        self.tone_hz = frequency_hz;
    }

    fn set_volume(&mut self, on: bool) {
        if on {
            self.start();
        } else {
            self.stop();
        }
    }
}
