use log::trace;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Quirks;
use crate::constants::{KEY_COUNT, OPCODE_SIZE, PROGRAM_START, STACK_CAPACITY};
use crate::display::Display;
use crate::error::Result;
use crate::instruction::Instruction;
use crate::memory::Memory;
use crate::timer::Timers;

/// What a single CPU step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStatus {
    /// The instruction ran and the display is unchanged
    Continue,
    /// The instruction ran and cleared or drew to the display
    RedrawScreen,
    /// The instruction is blocked and will run again on the next step
    Waiting,
}

/// Everything the CPU reads and writes but doesn't own
pub struct Bus<'a> {
    pub memory: &'a mut Memory,
    pub display: &'a mut Display,
    pub timers: &'a Timers,
    pub keys: &'a mut [bool; KEY_COUNT],
}

/// # Chip-8 CPU
///
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is also the carry, borrow and collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter, starting where ROMs are loaded
///
/// Stack
/// - up to 15 return addresses; calls beyond that are not recorded
///
/// The delay and sound timers live in `Timers` because a background thread
/// counts them down.
pub struct Cpu {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub(crate) stack: Vec<u16>,
    pub(crate) halted: bool,
    pub(crate) drew_this_frame: bool,
    pub(crate) quirks: Quirks,
    pub(crate) rng: StdRng,
}

impl Cpu {
    pub fn new(quirks: Quirks) -> Self {
        Self::with_rng(quirks, StdRng::from_entropy())
    }

    /// A CPU whose random numbers are reproducible
    pub fn with_seed(quirks: Quirks, seed: u64) -> Self {
        Self::with_rng(quirks, StdRng::seed_from_u64(seed))
    }

    fn with_rng(quirks: Quirks, rng: StdRng) -> Self {
        Cpu {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            stack: Vec::with_capacity(STACK_CAPACITY),
            halted: false,
            drew_this_frame: false,
            quirks,
            rng,
        }
    }

    /// Whether the CPU is spinning on a key read
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Saved return addresses, oldest first
    pub fn stack(&self) -> &[u16] {
        &self.stack
    }

    /// Allows one more sprite draw under the `display_wait` quirk
    pub fn begin_frame(&mut self) {
        self.drew_this_frame = false;
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    pub fn fetch(&self, memory: &Memory) -> Result<u16> {
        memory.read_word(self.pc as usize)
    }

    /// Advances the CPU by a single instruction
    /// - fetches and decodes the opcode at the pc
    /// - moves the pc past it
    /// - executes it
    pub fn step(&mut self, bus: &mut Bus) -> Result<CycleStatus> {
        let op = self.fetch(bus.memory)?;
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.v,
            self.i,
            self.pc
        );
        self.pc = self.pc.wrapping_add(OPCODE_SIZE);
        self.execute(Instruction::decode(op), bus)
    }

    /// Applies a decoded instruction; the pc must already point past it
    pub fn execute(&mut self, instruction: Instruction, bus: &mut Bus) -> Result<CycleStatus> {
        use Instruction::*;

        match instruction {
            Sys { addr } => self.sys(addr),
            Clr => return Ok(self.clr(bus)),
            Rts => self.rts(),
            Jump { addr } => self.jump(addr),
            Call { addr } => self.call(addr),
            Ske { x, kk } => self.skip_if(self.v[x] == kk),
            Skne { x, kk } => self.skip_if(self.v[x] != kk),
            Skre { x, y } => self.skip_if(self.v[x] == self.v[y]),
            Load { x, kk } => self.load(x, kk),
            Add { x, kk } => self.add(x, kk),
            Mv { x, y } => self.mv(x, y),
            Or { x, y } => self.or(x, y),
            And { x, y } => self.and(x, y),
            Xor { x, y } => self.xor(x, y),
            Addr { x, y } => self.addr(x, y),
            Sub { x, y } => self.sub(x, y),
            Shr { x } => self.shr(x),
            Subn { x, y } => self.subn(x, y),
            Shl { x } => self.shl(x),
            Skrne { x, y } => self.skip_if(self.v[x] != self.v[y]),
            Loadi { addr } => self.loadi(addr),
            Jumpi { addr } => self.jumpi(addr),
            Rand { x, kk } => self.rand(x, kk),
            Draw { x, y, n } => return self.draw(x, y, n, bus),
            Skpr { x } => self.skip_if(self.key_pressed(x, bus)),
            Skup { x } => self.skip_if(!self.key_pressed(x, bus)),
            Moved { x } => self.v[x] = bus.timers.delay(),
            Keyd { x } => return Ok(self.keyd(x, bus)),
            Loadd { x } => bus.timers.set_delay(self.v[x]),
            Loads { x } => bus.timers.set_sound(self.v[x]),
            Addi { x } => self.addi(x),
            Ldspr { x } => self.ldspr(x),
            Bcd { x } => self.bcd(x, bus)?,
            Stor { x } => self.stor(x, bus)?,
            Read { x } => self.read(x, bus)?,
            Unknown(op) => self.unknown(op),
        }

        Ok(CycleStatus::Continue)
    }
}
