pub use chip8::Chip8;
pub use config::{Config, Quirks};
pub use cpu::{Bus, Cpu, CycleStatus};
pub use display::Display;
pub use error::{Error, Result};
pub use instruction::Instruction;
pub use memory::Memory;
pub use timer::{Audio, Mute, TimerHandle, Timers};

mod chip8;
mod config;
pub mod constants;
mod cpu;
mod display;
mod error;
mod instruction;
mod memory;
mod opcode;
mod operations;
mod timer;
