use std::path::PathBuf;

use clap::Parser;

use interp8_core::{Config, Quirks};

mod audio;
mod keymap;
mod run;

use crate::run::Presentation;

/// Runs a Chip-8 ROM in a window
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Instructions executed per second
    #[arg(long, default_value_t = interp8_core::constants::DEFAULT_INSTRUCTIONS_PER_SECOND)]
    ips: u32,

    /// Size of each Chip-8 pixel in window pixels
    #[arg(short, long, default_value_t = 10)]
    scale: u32,

    /// Pitch of the beep in Hz
    #[arg(short, long, default_value_t = 440.0)]
    tone: f32,

    /// Leave VF untouched after OR, AND and XOR
    #[arg(long)]
    legacy_logic: bool,

    /// Allow any number of sprite draws per frame
    #[arg(long)]
    no_display_wait: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            instructions_per_second: self.ips,
            quirks: Quirks {
                logic_resets_flag: !self.legacy_logic,
                display_wait: !self.no_display_wait,
            },
            ..Config::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let presentation = Presentation {
        scale: args.scale,
        tone: args.tone,
    };
    run::run(&args.rom, args.config(), presentation)
}
