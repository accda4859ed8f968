use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use log::{debug, info};
use sdl2::event::Event;
use sdl2::keyboard::Scancode;

use interp8_core::{Chip8, Config};
use interp8_screen::Screen;

use crate::audio::{BeepSignal, Beeper};
use crate::keymap::keymap;

const TITLE: &str = "Interp-8";

/// How the window and speaker are set up
pub struct Presentation {
    pub scale: u32,
    pub tone: f32,
}

pub fn run(rom: &Path, config: Config, presentation: Presentation) -> anyhow::Result<()> {
    let mut chip8 = Chip8::new(config);

    // Load ROM
    let file = File::open(rom).with_context(|| format!("unable to open {}", rom.display()))?;
    chip8
        .load_rom(&mut BufReader::new(file))
        .with_context(|| format!("unable to load {}", rom.display()))?;

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut screen = Screen::new(&sdl, TITLE, presentation.scale).map_err(|e| anyhow!(e))?;
    let beeper = Beeper::new(&sdl, presentation.tone).map_err(|e| anyhow!(e))?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    let signal = BeepSignal::default();
    let _timer = chip8.start_timer(Box::new(signal.clone()));

    // One frame per timer tick
    let frame_time = Duration::from_secs(1) / config.timer_hz.max(1);
    info!(
        "running {} at {} instructions per second",
        rom.display(),
        config.instructions_per_second
    );

    'event: loop {
        let frame_start = Instant::now();

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    scancode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_press(kc);
                    }
                }
                Event::KeyUp {
                    scancode: Some(key),
                    ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_release(kc);
                    }
                }
                _ => continue,
            };
        }

        // Update state
        chip8.advance_frame().context("the ROM faulted")?;

        // If the display changed, render the current frame
        if let Some(display) = chip8.take_frame() {
            screen.render(display).map_err(|e| anyhow!(e))?;
        }
        beeper.sync(signal.is_playing());

        // Handle timing
        let elapsed = frame_start.elapsed();
        if frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
    }

    debug!("window closed at pc {:04X}", chip8.cpu().pc);
    Ok(())
}
