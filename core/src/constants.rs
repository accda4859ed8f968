/// Horizontal resolution of the display in pixels
pub const DISPLAY_WIDTH: usize = 64;

/// Vertical resolution of the display in pixels
pub const DISPLAY_HEIGHT: usize = 32;

/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Where ROMs are loaded into memory and where the program counter starts
pub const PROGRAM_START: u16 = 0x200;

/// Largest ROM that fits between `PROGRAM_START` and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Number of return addresses the call stack can hold
pub const STACK_CAPACITY: usize = 15;

/// Every opcode is two bytes wide
pub const OPCODE_SIZE: u16 = 2;

/// The register that doubles as the carry/borrow/collision flag
pub const FLAG: usize = 0xF;

/// Number of keys on the hexadecimal keypad
pub const KEY_COUNT: usize = 16;

/// Default CPU speed in instructions per second
pub const DEFAULT_INSTRUCTIONS_PER_SECOND: u32 = 700;

/// Rate at which the delay and sound timers count down
pub const DEFAULT_TIMER_HZ: u32 = 60;

/// Packed RGBA colour of a lit pixel
pub const INK: u32 = 0xFFFF_FFFF;

/// Packed RGBA colour of an unlit pixel
pub const PAPER: u32 = 0x0000_00FF;

/// Each glyph is 5 rows tall, so the glyph for digit `d` lives at `d * 5`
pub const GLYPH_HEIGHT: u16 = 5;

/// The built-in hexadecimal font, loaded at address 0x000.
/// Each glyph is 4 pixels wide; the low nibble of every row is blank.
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
