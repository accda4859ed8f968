use log::debug;
use sdl2::pixels::PixelFormatEnum;

use interp8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use interp8_core::Display;

/// # Screen
/// Presents a Chip-8 Display in an SDL2 window.
/// The 64x32 plane is uploaded as a texture and stretched over the whole window.
pub struct Screen {
    canvas: sdl2::render::WindowCanvas,
    pixels: Vec<u32>,
}

impl Screen {
    /// Creates a new window bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `title` the window title
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, title: &str, scale: u32) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                title,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| e.to_string())?;
        debug!("opened {}x scaled window", scale);

        Ok(Screen {
            canvas,
            pixels: vec![0; DISPLAY_WIDTH * DISPLAY_HEIGHT],
        })
    }

    /// Formats a Chip-8 Display for rendering as an SDL2 RGBA8888 texture.
    ///
    /// RGBA8888 is a packed format: every pixel is one native-endian u32, so
    /// the packed colours from `Display::render_to` are copied byte for byte.
    fn to_texture_bytes(pixels: &[u32]) -> Vec<u8> {
        pixels.iter().flat_map(|p| p.to_ne_bytes()).collect()
    }

    /// Uploads the Display as a texture and presents it.
    ///
    /// # Arguments
    /// * `display` the Chip-8 Display to present
    pub fn render(&mut self, display: &Display) -> Result<(), String> {
        display.render_to(&mut self.pixels);

        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGBA8888,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        let bytes = Screen::to_texture_bytes(&self.pixels);
        let row = DISPLAY_WIDTH * 4;
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            for (y, line) in bytes.chunks(row).enumerate() {
                buffer[y * pitch..y * pitch + row].copy_from_slice(line);
            }
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
