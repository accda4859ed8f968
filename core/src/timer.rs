use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{info, trace};

/// Something that can make a beep.
///
/// Calling `start` while already playing, or `stop` while already silent,
/// must do nothing.
pub trait Audio: Send {
    fn start(&mut self);
    fn stop(&mut self);
}

/// Audio sink that never makes a sound
pub struct Mute;

impl Audio for Mute {
    fn start(&mut self) {}
    fn stop(&mut self) {}
}

/// # Timers
/// The delay and sound countdown registers.
///
/// They are shared between the CPU, which reads and writes them through
/// opcodes, and a background ticker, which counts them down at a fixed rate.
/// Each register is a single atomic byte so a decrement can never be lost to
/// a concurrent write.
#[derive(Debug, Default)]
pub struct Timers {
    delay: AtomicU8,
    sound: AtomicU8,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(&self) -> u8 {
        self.delay.load(Ordering::SeqCst)
    }

    pub fn set_delay(&self, value: u8) {
        self.delay.store(value, Ordering::SeqCst);
    }

    pub fn sound(&self) -> u8 {
        self.sound.load(Ordering::SeqCst)
    }

    pub fn set_sound(&self, value: u8) {
        self.sound.store(value, Ordering::SeqCst);
    }

    /// Advances both timers by one tick
    /// - decrements the delay timer if it is above 0
    /// - starts the beep and decrements the sound timer if it is above 0
    /// - otherwise stops the beep
    pub fn tick(&self, audio: &mut dyn Audio) {
        let _ = self
            .delay
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |d| d.checked_sub(1));

        match self
            .sound
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |s| s.checked_sub(1))
        {
            Ok(_) => audio.start(),
            Err(_) => audio.stop(),
        }

        trace!("ticked timers [delay: {}] [sound: {}]", self.delay(), self.sound());
    }

    /// Ticks the timers on a background thread `hz` times a second until the
    /// returned handle is stopped or dropped.
    pub fn spawn(timers: Arc<Timers>, mut audio: Box<dyn Audio>, hz: u32) -> TimerHandle {
        let period = Duration::from_secs(1) / hz.max(1);
        let running = Arc::new(AtomicBool::new(true));
        let keep_going = Arc::clone(&running);

        let thread = thread::spawn(move || {
            info!("timer thread started [period: {:?}]", period);
            while keep_going.load(Ordering::SeqCst) {
                timers.tick(audio.as_mut());
                thread::sleep(period);
            }
            audio.stop();
            info!("timer thread stopped");
        });

        TimerHandle {
            running,
            thread: Some(thread),
        }
    }
}

/// Owns the background ticker started by `Timers::spawn`
pub struct TimerHandle {
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl TimerHandle {
    /// Stops ticking and waits for the thread to finish
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
