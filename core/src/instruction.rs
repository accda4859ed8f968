use crate::opcode::Opcode;

/// A decoded opcode.
///
/// `x` and `y` are register indices, `kk` an immediate byte, `addr` a 12-bit
/// address and `n` a sprite height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// 0nnn: call machine code routine; ignored
    Sys { addr: u16 },
    /// 00E0: clear the display
    Clr,
    /// 00EE: PC = STACK.pop()
    Rts,
    /// 1nnn: PC = addr
    Jump { addr: u16 },
    /// 2nnn: STACK.push(PC); PC = addr
    Call { addr: u16 },
    /// 3xkk: if Vx == kk then skip
    Ske { x: usize, kk: u8 },
    /// 4xkk: if Vx != kk then skip
    Skne { x: usize, kk: u8 },
    /// 5xy0: if Vx == Vy then skip
    Skre { x: usize, y: usize },
    /// 6xkk: Vx = kk
    Load { x: usize, kk: u8 },
    /// 7xkk: Vx += kk
    Add { x: usize, kk: u8 },
    /// 8xy0: Vx = Vy
    Mv { x: usize, y: usize },
    /// 8xy1: Vx |= Vy
    Or { x: usize, y: usize },
    /// 8xy2: Vx &= Vy
    And { x: usize, y: usize },
    /// 8xy3: Vx ^= Vy
    Xor { x: usize, y: usize },
    /// 8xy4: Vx += Vy; VF = carry
    Addr { x: usize, y: usize },
    /// 8xy5: Vx -= Vy; VF = !borrow
    Sub { x: usize, y: usize },
    /// 8xy6: Vx >>= 1; VF = shifted out bit
    Shr { x: usize },
    /// 8xy7: Vx = Vy - Vx; VF = !borrow
    Subn { x: usize, y: usize },
    /// 8xyE: Vx <<= 1; VF = shifted out bit
    Shl { x: usize },
    /// 9xy0: if Vx != Vy then skip
    Skrne { x: usize, y: usize },
    /// Annn: I = addr
    Loadi { addr: u16 },
    /// Bnnn: PC = V0 + addr
    Jumpi { addr: u16 },
    /// Cxkk: Vx = random byte & kk
    Rand { x: usize, kk: u8 },
    /// Dxyn: draw n rows from I at (Vx, Vy); VF = collision
    Draw { x: usize, y: usize, n: u8 },
    /// Ex9E: if key Vx is pressed then skip
    Skpr { x: usize },
    /// ExA1: if key Vx is not pressed then skip
    Skup { x: usize },
    /// Fx07: Vx = DT
    Moved { x: usize },
    /// Fx0A: wait for a key press and store it in Vx
    Keyd { x: usize },
    /// Fx15: DT = Vx
    Loadd { x: usize },
    /// Fx18: ST = Vx
    Loads { x: usize },
    /// Fx1E: I += Vx
    Addi { x: usize },
    /// Fx29: I = address of the font glyph for Vx
    Ldspr { x: usize },
    /// Fx33: mem[I..I+3] = bcd(Vx)
    Bcd { x: usize },
    /// Fx55: mem[I..=I+x] = V0..=Vx
    Stor { x: usize },
    /// Fx65: V0..=Vx = mem[I..=I+x]
    Read { x: usize },
    /// Anything outside the instruction set; executed as a no-op
    Unknown(u16),
}

impl Instruction {
    /// Selects the Instruction a raw opcode encodes
    pub fn decode(op: u16) -> Instruction {
        use Instruction::*;

        let (x, y) = (op.x(), op.y());
        match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Clr,
            (0x0, 0x0, 0xE, 0xE) => Rts,
            (0x0, ..) => Sys { addr: op.addr() },
            (0x1, ..) => Jump { addr: op.addr() },
            (0x2, ..) => Call { addr: op.addr() },
            (0x3, ..) => Ske { x, kk: op.kk() },
            (0x4, ..) => Skne { x, kk: op.kk() },
            (0x5, .., 0x0) => Skre { x, y },
            (0x6, ..) => Load { x, kk: op.kk() },
            (0x7, ..) => Add { x, kk: op.kk() },
            (0x8, .., 0x0) => Mv { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => Addr { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0x8, .., 0x6) => Shr { x },
            (0x8, .., 0x7) => Subn { x, y },
            (0x8, .., 0xE) => Shl { x },
            (0x9, .., 0x0) => Skrne { x, y },
            (0xA, ..) => Loadi { addr: op.addr() },
            (0xB, ..) => Jumpi { addr: op.addr() },
            (0xC, ..) => Rand { x, kk: op.kk() },
            (0xD, ..) => Draw { x, y, n: op.n() },
            (0xE, _, 0x9, 0xE) => Skpr { x },
            (0xE, _, 0xA, 0x1) => Skup { x },
            (0xF, _, 0x0, 0x7) => Moved { x },
            (0xF, _, 0x0, 0xA) => Keyd { x },
            (0xF, _, 0x1, 0x5) => Loadd { x },
            (0xF, _, 0x1, 0x8) => Loads { x },
            (0xF, _, 0x1, 0xE) => Addi { x },
            (0xF, _, 0x2, 0x9) => Ldspr { x },
            (0xF, _, 0x3, 0x3) => Bcd { x },
            (0xF, _, 0x5, 0x5) => Stor { x },
            (0xF, _, 0x6, 0x5) => Read { x },
            _ => Unknown(op),
        }
    }
}

impl From<u16> for Instruction {
    fn from(op: u16) -> Self {
        Instruction::decode(op)
    }
}
