use std::io::Read;
use std::ops::{Deref, DerefMut};

use log::debug;

use crate::constants::{MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET};
use crate::error::{Error, Result};

/// # Memory
/// 4096 bytes of flat, byte-addressable storage.
///
/// - 0x000..0x050 holds the built-in font
/// - 0x050..0x200 is otherwise reserved for the interpreter
/// - 0x200.. is where ROMs are loaded
///
/// Raw indexing is available through `Deref`; the checked accessors report
/// an `AddressOutOfRange` fault instead of panicking and are what the CPU uses.
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        bytes[..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    /// Copy a program image into memory starting at `PROGRAM_START`
    ///
    /// # Arguments
    /// * `reader` a source that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<usize> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        if rom.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.bytes[start..start + rom.len()].copy_from_slice(&rom);
        debug!("loaded {} byte ROM at {:#05X}", rom.len(), start);
        Ok(rom.len())
    }

    /// Read the byte at `address`
    pub fn read(&self, address: usize) -> Result<u8> {
        self.bytes
            .get(address)
            .copied()
            .ok_or(Error::AddressOutOfRange { address })
    }

    /// Read the big-endian 16 bit word starting at `address`
    pub fn read_word(&self, address: usize) -> Result<u16> {
        let word = self.slice(address, 2)?;
        Ok(u16::from(word[0]) << 8 | u16::from(word[1]))
    }

    /// Borrow `len` bytes starting at `address`
    pub fn slice(&self, address: usize, len: usize) -> Result<&[u8]> {
        let end = Self::end_of(address, len)?;
        Ok(&self.bytes[address..end])
    }

    /// Mutably borrow `len` bytes starting at `address`
    pub fn slice_mut(&mut self, address: usize, len: usize) -> Result<&mut [u8]> {
        let end = Self::end_of(address, len)?;
        Ok(&mut self.bytes[address..end])
    }

    fn end_of(address: usize, len: usize) -> Result<usize> {
        match address.checked_add(len) {
            Some(end) if end <= MEMORY_SIZE => Ok(end),
            // report the first byte that doesn't exist
            _ => Err(Error::AddressOutOfRange {
                address: address.max(MEMORY_SIZE),
            }),
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Memory {
    type Target = [u8; MEMORY_SIZE];

    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

impl DerefMut for Memory {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.bytes
    }
}
