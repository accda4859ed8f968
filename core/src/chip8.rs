use std::io::Read;
use std::sync::Arc;

use log::info;

use crate::config::Config;
use crate::constants::KEY_COUNT;
use crate::cpu::{Bus, Cpu, CycleStatus};
use crate::display::Display;
use crate::error::Result;
use crate::memory::Memory;
use crate::timer::{Audio, TimerHandle, Timers};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - the `cpu` and the `memory` and `display` it works on
///  - the delay and sound `timers`, shared with a background ticker
///  - `pressed_keys` with public interfaces for manipulating them
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU
/// - starting its timers
/// - inspecting its display for rendering by some screen
pub struct Chip8 {
    cpu: Cpu,
    memory: Memory,
    display: Display,
    timers: Arc<Timers>,
    pressed_keys: [bool; KEY_COUNT],
    draw_flag: bool,
    config: Config,
}

impl Chip8 {
    pub fn new(config: Config) -> Self {
        Self::with_cpu(Cpu::new(config.quirks), config)
    }

    /// A machine whose random numbers are reproducible
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_cpu(Cpu::with_seed(config.quirks, seed), config)
    }

    fn with_cpu(cpu: Cpu, config: Config) -> Self {
        Chip8 {
            cpu,
            memory: Memory::new(),
            display: Display::new(),
            timers: Arc::new(Timers::new()),
            pressed_keys: [false; KEY_COUNT],
            draw_flag: false,
            config,
        }
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a source that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<()> {
        let size = self.memory.load_rom(reader)?;
        info!("loaded ROM [size: {}]", size);
        Ok(())
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        if let Some(pressed) = self.pressed_keys.get_mut(key as usize) {
            *pressed = true;
        }
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) {
        if let Some(pressed) = self.pressed_keys.get_mut(key as usize) {
            *pressed = false;
        }
    }

    pub fn pressed_keys(&self) -> &[bool; KEY_COUNT] {
        &self.pressed_keys
    }

    /// Advances the CPU by a single instruction
    /// - remembers whether the display needs redrawing
    pub fn advance_cpu(&mut self) -> Result<CycleStatus> {
        let mut bus = Bus {
            memory: &mut self.memory,
            display: &mut self.display,
            timers: &self.timers,
            keys: &mut self.pressed_keys,
        };
        let status = self.cpu.step(&mut bus)?;
        if status == CycleStatus::RedrawScreen {
            self.draw_flag = true;
        }
        Ok(status)
    }

    /// Runs the instructions that fit into one presented frame.
    /// Stops early once the CPU is waiting on a key or on the next frame.
    pub fn advance_frame(&mut self) -> Result<()> {
        self.begin_frame();
        for _ in 0..self.config.instructions_per_frame() {
            if self.advance_cpu()? == CycleStatus::Waiting {
                break;
            }
        }
        Ok(())
    }

    /// Marks the start of a presented frame, allowing the next sprite draw
    pub fn begin_frame(&mut self) {
        self.cpu.begin_frame();
    }

    /// Returns the Display if it changed since the last call
    pub fn take_frame(&mut self) -> Option<&Display> {
        if std::mem::replace(&mut self.draw_flag, false) {
            Some(&self.display)
        } else {
            None
        }
    }

    /// Writes the current display as packed colours
    pub fn render_to(&self, pixels: &mut [u32]) {
        self.display.render_to(pixels);
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// The delay and sound timers, for sharing with a ticker
    pub fn timers(&self) -> Arc<Timers> {
        Arc::clone(&self.timers)
    }

    /// Starts counting the timers down on a background thread
    pub fn start_timer(&self, audio: Box<dyn Audio>) -> TimerHandle {
        Timers::spawn(self.timers(), audio, self.config.timer_hz)
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
