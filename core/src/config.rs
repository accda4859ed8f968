use crate::constants::{DEFAULT_INSTRUCTIONS_PER_SECOND, DEFAULT_TIMER_HZ};

/// Behaviours that differ between Chip-8 interpreters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quirks {
    /// 8xy1, 8xy2 and 8xy3 reset VF to 0
    pub logic_resets_flag: bool,
    /// Only one sprite may be drawn per frame; later draws wait for `Chip8::begin_frame`
    pub display_wait: bool,
}

impl Default for Quirks {
    fn default() -> Self {
        Quirks {
            logic_resets_flag: true,
            display_wait: true,
        }
    }
}

/// How fast and how faithfully the machine runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub instructions_per_second: u32,
    pub timer_hz: u32,
    pub quirks: Quirks,
}

impl Config {
    /// Number of instructions to execute per presented frame; frames are
    /// presented at the timer rate
    pub fn instructions_per_frame(&self) -> u32 {
        (self.instructions_per_second / self.timer_hz.max(1)).max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            instructions_per_second: DEFAULT_INSTRUCTIONS_PER_SECOND,
            timer_hz: DEFAULT_TIMER_HZ,
            quirks: Quirks::default(),
        }
    }
}
