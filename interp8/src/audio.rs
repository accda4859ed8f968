use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

use interp8_core::Audio;

const SAMPLE_RATE: i32 = 44_100;
const VOLUME: f32 = 0.25;

/// A square wave at a fixed pitch
struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase <= 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// # Beeper
/// The SDL2 playback device.
///
/// SDL2 audio handles can't leave the thread that opened them, so the timer
/// thread only flips a `BeepSignal` and the main loop calls `sync` to follow it.
pub struct Beeper {
    device: AudioDevice<SquareWave>,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl, tone: f32) -> Result<Self, String> {
        let audio_subsystem = sdl.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(SAMPLE_RATE),
            channels: Some(1),
            samples: None,
        };
        let device = audio_subsystem.open_playback(None, &desired, |spec| SquareWave {
            phase_inc: tone / spec.freq as f32,
            phase: 0.0,
            volume: VOLUME,
        })?;
        Ok(Beeper { device })
    }

    /// Plays or pauses to match `playing`; both are no-ops when already in that state
    pub fn sync(&self, playing: bool) {
        if playing {
            self.device.resume();
        } else {
            self.device.pause();
        }
    }
}

/// Whether the beep should be playing, shared between the timer thread and the main loop
#[derive(Clone, Default)]
pub struct BeepSignal {
    playing: Arc<AtomicBool>,
}

impl BeepSignal {
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }
}

impl Audio for BeepSignal {
    fn start(&mut self) {
        self.playing.store(true, Ordering::SeqCst);
    }

    fn stop(&mut self) {
        self.playing.store(false, Ordering::SeqCst);
    }
}
