use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, INK, PAPER};
use crate::error::Result;
use crate::memory::Memory;

/// The bit-plane is indexed as [y][x]
pub type BitPlane = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// # Display
/// The Chip-8 display is composed of 64x32 monochrome pixels.
/// The on/off state of these pixels is encoded as 1/0 respectively in a 2d array.
///
/// Sprites are XORed onto the plane rather than copied so that drawing the
/// same sprite twice in the same place erases it again.
#[derive(Clone)]
pub struct Display {
    plane: BitPlane,
}

impl Display {
    pub fn new() -> Self {
        Display {
            plane: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    /// XORs a sprite onto the plane and reports whether any lit pixel was turned off.
    ///
    /// Only the anchor wraps; rows and columns that run off the right or
    /// bottom edge are clipped.
    ///
    /// # Arguments
    /// * `memory` where the sprite lives
    /// * `x` horizontal position of the sprite's top-left corner
    /// * `y` vertical position of the sprite's top-left corner
    /// * `height` number of 8 pixel rows in the sprite
    /// * `address` location of the first row in memory
    pub fn draw_sprite(
        &mut self,
        memory: &Memory,
        x: u8,
        y: u8,
        height: u8,
        address: u16,
    ) -> Result<bool> {
        let rows = memory.slice(address as usize, height as usize)?;
        let x = x as usize % DISPLAY_WIDTH;
        let y = y as usize % DISPLAY_HEIGHT;
        let mut collision = false;

        for (dy, row) in rows.iter().enumerate() {
            let py = y + dy;
            if py >= DISPLAY_HEIGHT {
                break;
            }
            for bit in 0..8 {
                let px = x + bit;
                if px >= DISPLAY_WIDTH {
                    break;
                }
                let pixel = (row >> (7 - bit)) & 1;
                collision |= pixel & self.plane[py][px] == 1;
                self.plane[py][px] ^= pixel;
            }
        }

        Ok(collision)
    }

    /// Turns every pixel off
    pub fn clear(&mut self) {
        self.plane = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    /// Writes `INK` for every lit pixel and `PAPER` for every unlit one, row by row.
    ///
    /// # Arguments
    /// * `pixels` a buffer of exactly `DISPLAY_WIDTH * DISPLAY_HEIGHT` colours
    pub fn render_to(&self, pixels: &mut [u32]) {
        assert_eq!(pixels.len(), DISPLAY_WIDTH * DISPLAY_HEIGHT);
        for (out, &cell) in pixels.iter_mut().zip(self.plane.iter().flatten()) {
            *out = if cell == 1 { INK } else { PAPER };
        }
    }

    /// Whether the pixel at (x, y) is lit
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.plane[y][x] == 1
    }

    pub fn plane(&self) -> &BitPlane {
        &self.plane
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
