/// # Opcodes
///
/// Opcodes are 16 bits each, fetched big-endian from memory. Which instruction
/// an opcode encodes is cased on some combination of its nibbles:
/// - `(n, _, _, _)` the instruction family; applies to all opcodes
/// - `(_, _, _, n)` the operation within the 0x8 ALU family
/// - `(_, _, n, n)` the operation within the 0xE and 0xF families
/// - `(_, n, n, n)` fixed functions like CLS (0x00E0) and RET (0x00EE)
///
/// The nibbles that don't select the instruction carry its operands:
/// - `[_nnn]` a 12-bit address
/// - `[__kk]` an immediate byte
/// - `[_x__]` the register Vx, or the end of the range V0..=Vx
/// - `[__y_]` the register Vy
/// - `[___n]` the height of a sprite
pub trait Opcode {
    /// All four nibbles, most significant first.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// Index of the register named by the second nibble.
    /// `[_x__]`
    fn x(&self) -> usize;

    /// Index of the register named by the third nibble.
    /// `[__y_]`
    fn y(&self) -> usize;

    /// The fourth nibble.
    /// `[___n]`
    fn n(&self) -> u8;

    /// The least significant byte.
    /// `[__kk]`
    fn kk(&self) -> u8;

    /// Everything but the most significant nibble.
    /// `[_nnn]`
    fn addr(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (
            (self >> 12) as u8,
            self.x() as u8,
            self.y() as u8,
            self.n(),
        )
    }

    fn x(&self) -> usize {
        ((self & 0x0F00) >> 8) as usize
    }

    fn y(&self) -> usize {
        ((self & 0x00F0) >> 4) as usize
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn kk(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn addr(&self) -> u16 {
        self & 0x0FFF
    }
}
