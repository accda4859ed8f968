use log::{debug, warn};
use rand::Rng;

use crate::constants::{FLAG, GLYPH_HEIGHT, OPCODE_SIZE, STACK_CAPACITY};
use crate::cpu::{Bus, Cpu, CycleStatus};
use crate::error::Result;

impl Cpu {
    /// Skip the next instruction when `condition` holds
    pub(crate) fn skip_if(&mut self, condition: bool) {
        if condition {
            self.pc = self.pc.wrapping_add(OPCODE_SIZE);
        }
    }

    /// Point the pc back at the instruction that just ran so it runs again
    fn retry(&mut self) -> CycleStatus {
        self.pc = self.pc.wrapping_sub(OPCODE_SIZE);
        CycleStatus::Waiting
    }

    pub(crate) fn key_pressed(&self, x: usize, bus: &Bus) -> bool {
        bus.keys
            .get(self.v[x] as usize)
            .copied()
            .unwrap_or(false)
    }

    /// machine code routines don't exist here
    pub(crate) fn sys(&mut self, addr: u16) {
        debug!("ignoring SYS {:03X}", addr);
    }

    /// clear
    pub(crate) fn clr(&mut self, bus: &mut Bus) -> CycleStatus {
        bus.display.clear();
        CycleStatus::RedrawScreen
    }

    /// PC = STACK.pop()
    pub(crate) fn rts(&mut self) {
        match self.stack.pop() {
            Some(addr) => self.pc = addr,
            None => debug!("ignoring RET with an empty stack at {:04X}", self.pc),
        }
    }

    /// PC = addr
    pub(crate) fn jump(&mut self, addr: u16) {
        self.pc = addr;
    }

    /// STACK.push(PC); PC = addr
    /// The return address is dropped once the stack is full but the jump still happens.
    pub(crate) fn call(&mut self, addr: u16) {
        if self.stack.len() < STACK_CAPACITY {
            self.stack.push(self.pc);
        } else {
            debug!("stack full, dropping return address {:04X}", self.pc);
        }
        self.pc = addr;
    }

    /// Vx = kk
    pub(crate) fn load(&mut self, x: usize, kk: u8) {
        self.v[x] = kk;
    }

    /// Vx += kk
    /// Add kk to Vx; allow for overflow but implicitly drop it
    pub(crate) fn add(&mut self, x: usize, kk: u8) {
        self.v[x] = self.v[x].wrapping_add(kk);
    }

    /// Vx = Vy
    pub(crate) fn mv(&mut self, x: usize, y: usize) {
        self.v[x] = self.v[y];
    }

    /// Vx |= Vy
    pub(crate) fn or(&mut self, x: usize, y: usize) {
        self.v[x] |= self.v[y];
        self.reset_flag_after_logic();
    }

    /// Vx &= Vy
    pub(crate) fn and(&mut self, x: usize, y: usize) {
        self.v[x] &= self.v[y];
        self.reset_flag_after_logic();
    }

    /// Vx ^= Vy
    pub(crate) fn xor(&mut self, x: usize, y: usize) {
        self.v[x] ^= self.v[y];
        self.reset_flag_after_logic();
    }

    fn reset_flag_after_logic(&mut self) {
        if self.quirks.logic_resets_flag {
            self.v[FLAG] = 0x0;
        }
    }

    /// Vx += Vy; VF = overflow
    pub(crate) fn addr(&mut self, x: usize, y: usize) {
        let (res, over) = self.v[x].overflowing_add(self.v[y]);
        self.v[x] = res;
        self.v[FLAG] = over as u8;
    }

    /// Vx -= Vy; VF = !underflow
    pub(crate) fn sub(&mut self, x: usize, y: usize) {
        let (res, under) = self.v[x].overflowing_sub(self.v[y]);
        self.v[x] = res;
        self.v[FLAG] = !under as u8;
    }

    /// Vx >>= 1; VF = lsb
    pub(crate) fn shr(&mut self, x: usize) {
        let lsb = self.v[x] & 0x1;
        self.v[x] >>= 1;
        self.v[FLAG] = lsb;
    }

    /// Vx = Vy - Vx; VF = !underflow
    pub(crate) fn subn(&mut self, x: usize, y: usize) {
        let (res, under) = self.v[y].overflowing_sub(self.v[x]);
        self.v[x] = res;
        self.v[FLAG] = !under as u8;
    }

    /// Vx <<= 1; VF = msb
    pub(crate) fn shl(&mut self, x: usize) {
        let msb = self.v[x] >> 7;
        self.v[x] <<= 1;
        self.v[FLAG] = msb;
    }

    /// I = addr
    pub(crate) fn loadi(&mut self, addr: u16) {
        self.i = addr;
    }

    /// PC = V0 + addr
    pub(crate) fn jumpi(&mut self, addr: u16) {
        self.pc = addr.wrapping_add(u16::from(self.v[0x0]));
    }

    /// Vx = rand_byte & kk
    pub(crate) fn rand(&mut self, x: usize, kk: u8) {
        let rand_byte: u8 = self.rng.gen();
        self.v[x] = rand_byte & kk;
    }

    /// draw_sprite(x=Vx y=Vy size=n)
    /// XORs a sprite from memory I..I+n at position Vx, Vy.
    /// Sets VF if any pixels were erased.
    /// With the `display_wait` quirk a second draw in the same frame is retried instead.
    pub(crate) fn draw(&mut self, x: usize, y: usize, n: u8, bus: &mut Bus) -> Result<CycleStatus> {
        if self.quirks.display_wait && self.drew_this_frame {
            return Ok(self.retry());
        }

        let collision = bus
            .display
            .draw_sprite(bus.memory, self.v[x], self.v[y], n, self.i)?;
        self.v[FLAG] = collision as u8;
        self.drew_this_frame = true;
        Ok(CycleStatus::RedrawScreen)
    }

    /// await keypress for Vx
    /// The first visit only halts; every later visit scans keys 0..F and
    /// consumes the lowest one that is pressed.
    pub(crate) fn keyd(&mut self, x: usize, bus: &mut Bus) -> CycleStatus {
        if self.halted {
            if let Some(key) = bus.keys.iter().position(|&pressed| pressed) {
                bus.keys[key] = false;
                self.v[x] = key as u8;
                self.halted = false;
                debug!("resuming with key {:X} in V{:X}", key, x);
                return CycleStatus::Continue;
            }
        } else {
            debug!("halting until a key is pressed for V{:X}", x);
        }

        self.halted = true;
        self.retry()
    }

    /// I += Vx
    pub(crate) fn addi(&mut self, x: usize) {
        self.i = self.i.wrapping_add(u16::from(self.v[x]));
    }

    /// I = Vx * 5
    /// Set I to the memory address of the font glyph for Vx
    pub(crate) fn ldspr(&mut self, x: usize) {
        self.i = u16::from(self.v[x]) * GLYPH_HEIGHT;
    }

    /// mem[I..I+3] = bcd(Vx)
    /// Store BCD repr of Vx in memory starting at address I
    pub(crate) fn bcd(&mut self, x: usize, bus: &mut Bus) -> Result<()> {
        let value = self.v[x];
        let bcd = [value / 100, value / 10 % 10, value % 10];
        bus.memory
            .slice_mut(self.i as usize, bcd.len())?
            .copy_from_slice(&bcd);
        Ok(())
    }

    /// mem[I..=I+x] = V0..=Vx; I += x + 1
    pub(crate) fn stor(&mut self, x: usize, bus: &mut Bus) -> Result<()> {
        bus.memory
            .slice_mut(self.i as usize, x + 1)?
            .copy_from_slice(&self.v[..=x]);
        self.i = self.i.wrapping_add(x as u16 + 1);
        Ok(())
    }

    /// V0..=Vx = mem[I..=I+x]; I += x + 1
    pub(crate) fn read(&mut self, x: usize, bus: &mut Bus) -> Result<()> {
        self.v[..=x].copy_from_slice(bus.memory.slice(self.i as usize, x + 1)?);
        self.i = self.i.wrapping_add(x as u16 + 1);
        Ok(())
    }

    pub(crate) fn unknown(&mut self, op: u16) {
        warn!(
            "skipping unknown opcode {:04X} at {:04X}",
            op,
            self.pc.wrapping_sub(OPCODE_SIZE)
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Quirks;
    use crate::cpu::rig::Rig;
    use crate::cpu::CycleStatus;

    #[test]
    fn test_00e0_cls() {
        let mut rig = Rig::new();
        rig.memory[0x300] = 0x80;
        rig.display.draw_sprite(&rig.memory, 0, 0, 1, 0x300).unwrap();
        assert_eq!(rig.exec(0x00E0), CycleStatus::RedrawScreen);
        assert!(!rig.display.pixel(0, 0));
        assert_eq!(rig.cpu.pc, 0x202);
    }

    #[test]
    fn test_00ee_ret() {
        let mut rig = Rig::new();
        rig.cpu.stack.push(0x0ABC);
        rig.exec(0x00EE);
        assert!(rig.cpu.stack().is_empty());
        assert_eq!(rig.cpu.pc, 0x0ABC);
    }

    #[test]
    fn test_00ee_ret_with_empty_stack() {
        let mut rig = Rig::new();
        rig.exec(0x00EE);
        assert_eq!(rig.cpu.pc, 0x202);
    }

    #[test]
    fn test_0nnn_sys_is_ignored() {
        let mut rig = Rig::new();
        assert_eq!(rig.exec(0x0123), CycleStatus::Continue);
        assert_eq!(rig.cpu.pc, 0x202);
    }

    #[test]
    fn test_1nnn_jp() {
        let mut rig = Rig::new();
        rig.exec(0x1ABC);
        assert_eq!(rig.cpu.pc, 0x0ABC);
    }

    #[test]
    fn test_2nnn_call() {
        let mut rig = Rig::new();
        rig.exec(0x2456);
        assert_eq!(rig.cpu.stack(), &[0x0202]);
        assert_eq!(rig.cpu.pc, 0x0456);
    }

    #[test]
    fn test_2nnn_call_past_capacity_still_jumps() {
        let mut rig = Rig::new();
        for n in 0..15u16 {
            let target = 0x300 + n * 2;
            rig.exec(0x2000 | target);
            assert_eq!(rig.cpu.pc, target);
        }
        assert_eq!(rig.cpu.stack().len(), 15);
        let full = rig.cpu.stack().to_vec();

        rig.exec(0x2ABC);
        assert_eq!(rig.cpu.stack(), &full[..]);
        assert_eq!(rig.cpu.pc, 0x0ABC);
    }

    #[test]
    fn test_3xkk_se_skips() {
        let mut rig = Rig::new();
        rig.cpu.v[0x1] = 0x11;
        rig.exec(0x3111);
        assert_eq!(rig.cpu.pc, 0x0204);
    }

    #[test]
    fn test_3xkk_se_doesntskip() {
        let mut rig = Rig::new();
        rig.exec(0x3111);
        assert_eq!(rig.cpu.pc, 0x0202);
    }

    #[test]
    fn test_4xkk_sne_skips() {
        let mut rig = Rig::new();
        rig.exec(0x4111);
        assert_eq!(rig.cpu.pc, 0x0204);
    }

    #[test]
    fn test_4xkk_sne_doesntskip() {
        let mut rig = Rig::new();
        rig.cpu.v[0x1] = 0x11;
        rig.exec(0x4111);
        assert_eq!(rig.cpu.pc, 0x0202);
    }

    #[test]
    fn test_5xy0_se_skips() {
        let mut rig = Rig::new();
        rig.cpu.v[0x1] = 0x11;
        rig.cpu.v[0x2] = 0x11;
        rig.exec(0x5120);
        assert_eq!(rig.cpu.pc, 0x0204);
    }

    #[test]
    fn test_5xy0_se_doesntskip() {
        let mut rig = Rig::new();
        rig.cpu.v[0x1] = 0x11;
        rig.exec(0x5120);
        assert_eq!(rig.cpu.pc, 0x0202);
    }

    #[test]
    fn test_6xkk_ld() {
        let mut rig = Rig::new();
        rig.exec(0x6122);
        assert_eq!(rig.cpu.v[0x1], 0x22);
    }

    #[test]
    fn test_7xkk_add() {
        let mut rig = Rig::new();
        rig.cpu.v[0x1] = 0x1;
        rig.exec(0x7122);
        assert_eq!(rig.cpu.v[0x1], 0x23);
    }

    #[test]
    fn test_7xkk_add_wraps_without_touching_flag() {
        for r in 0..0xF {
            let mut rig = Rig::new();
            rig.cpu.v[r] = 0x7;
            rig.cpu.v[0xF] = 0xAA;
            let op = 0x7000 | (r as u16) << 8 | 200;
            rig.exec(op);
            rig.exec(op);
            assert_eq!(rig.cpu.v[r], ((0x7 + 400) % 256) as u8);
            assert_eq!(rig.cpu.v[0xF], 0xAA);
        }
    }

    #[test]
    fn test_8xy0_ld() {
        let mut rig = Rig::new();
        rig.cpu.v[0x2] = 0x1;
        rig.exec(0x8120);
        assert_eq!(rig.cpu.v[0x1], 0x1);
    }

    #[test]
    fn test_8xy1_or() {
        let mut rig = Rig::new();
        rig.cpu.v[0x1] = 0x6;
        rig.cpu.v[0x2] = 0x3;
        rig.cpu.v[0xF] = 0x1;
        rig.exec(0x8121);
        assert_eq!(rig.cpu.v[0x1], 0x7);
        assert_eq!(rig.cpu.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy2_and() {
        let mut rig = Rig::new();
        rig.cpu.v[0x1] = 0x6;
        rig.cpu.v[0x2] = 0x3;
        rig.cpu.v[0xF] = 0x1;
        rig.exec(0x8122);
        assert_eq!(rig.cpu.v[0x1], 0x2);
        assert_eq!(rig.cpu.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy3_xor() {
        let mut rig = Rig::new();
        rig.cpu.v[0x1] = 0x6;
        rig.cpu.v[0x2] = 0x3;
        rig.cpu.v[0xF] = 0x1;
        rig.exec(0x8123);
        assert_eq!(rig.cpu.v[0x1], 0x5);
        assert_eq!(rig.cpu.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy1_or_keeps_flag_with_legacy_logic() {
        let mut rig = Rig::with_quirks(Quirks {
            logic_resets_flag: false,
            ..Quirks::default()
        });
        rig.cpu.v[0x1] = 0x6;
        rig.cpu.v[0x2] = 0x3;
        rig.cpu.v[0xF] = 0x1;
        rig.exec(0x8121);
        assert_eq!(rig.cpu.v[0x1], 0x7);
        assert_eq!(rig.cpu.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy4_add_carry() {
        let mut rig = Rig::new();
        rig.cpu.v[0x0] = 250;
        rig.cpu.v[0x1] = 10;
        rig.exec(0x8014);
        assert_eq!(rig.cpu.v[0x0], 4);
        assert_eq!(rig.cpu.v[0xF], 1);
    }

    #[test]
    fn test_8xy4_add_nocarry() {
        let mut rig = Rig::new();
        rig.cpu.v[0x0] = 1;
        rig.cpu.v[0x1] = 1;
        rig.cpu.v[0xF] = 1;
        rig.exec(0x8014);
        assert_eq!(rig.cpu.v[0x0], 2);
        assert_eq!(rig.cpu.v[0xF], 0);
    }

    #[test]
    fn test_8xy4_flag_wins_when_vf_is_the_destination() {
        let mut rig = Rig::new();
        rig.cpu.v[0xF] = 0xFF;
        rig.cpu.v[0x1] = 0x02;
        rig.exec(0x8F14);
        assert_eq!(rig.cpu.v[0xF], 1);
    }

    #[test]
    fn test_8xy5_sub_noborrow() {
        let mut rig = Rig::new();
        rig.cpu.v[0x0] = 5;
        rig.cpu.v[0x1] = 3;
        rig.exec(0x8015);
        assert_eq!(rig.cpu.v[0x0], 2);
        assert_eq!(rig.cpu.v[0xF], 1);
    }

    #[test]
    fn test_8xy5_sub_borrow() {
        let mut rig = Rig::new();
        rig.cpu.v[0x0] = 3;
        rig.cpu.v[0x1] = 5;
        rig.exec(0x8015);
        assert_eq!(rig.cpu.v[0x0], 254);
        assert_eq!(rig.cpu.v[0xF], 0);
    }

    #[test]
    fn test_8xy5_sub_equal_is_no_borrow() {
        let mut rig = Rig::new();
        rig.cpu.v[0x0] = 9;
        rig.cpu.v[0x1] = 9;
        rig.exec(0x8015);
        assert_eq!(rig.cpu.v[0x0], 0);
        assert_eq!(rig.cpu.v[0xF], 1);
    }

    #[test]
    fn test_8xy6_shr_lsb() {
        let mut rig = Rig::new();
        rig.cpu.v[0x0] = 0b0000_0011;
        rig.exec(0x8006);
        assert_eq!(rig.cpu.v[0x0], 1);
        assert_eq!(rig.cpu.v[0xF], 1);
    }

    #[test]
    fn test_8xy6_shr_nolsb() {
        let mut rig = Rig::new();
        rig.cpu.v[0x1] = 0x4;
        rig.cpu.v[0xF] = 0x1;
        rig.exec(0x8106);
        assert_eq!(rig.cpu.v[0x1], 0x2);
        assert_eq!(rig.cpu.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy7_subn_noborrow() {
        let mut rig = Rig::new();
        rig.cpu.v[0x1] = 0x11;
        rig.cpu.v[0x2] = 0x33;
        rig.exec(0x8127);
        assert_eq!(rig.cpu.v[0x1], 0x22);
        assert_eq!(rig.cpu.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy7_subn_borrow() {
        let mut rig = Rig::new();
        rig.cpu.v[0x1] = 0x12;
        rig.cpu.v[0x2] = 0x11;
        rig.exec(0x8127);
        assert_eq!(rig.cpu.v[0x1], 0xFF);
        assert_eq!(rig.cpu.v[0xF], 0x0);
    }

    #[test]
    fn test_8xye_shl_msb() {
        let mut rig = Rig::new();
        rig.cpu.v[0x0] = 0b1000_0001;
        rig.exec(0x800E);
        assert_eq!(rig.cpu.v[0x0], 2);
        assert_eq!(rig.cpu.v[0xF], 1);
    }

    #[test]
    fn test_8xye_shl_nomsb() {
        let mut rig = Rig::new();
        rig.cpu.v[0x1] = 0x4;
        rig.exec(0x810E);
        assert_eq!(rig.cpu.v[0x1], 0x8);
        assert_eq!(rig.cpu.v[0xF], 0x0);
    }

    #[test]
    fn test_9xy0_sne_skips() {
        let mut rig = Rig::new();
        rig.cpu.v[0x1] = 0x11;
        rig.exec(0x9120);
        assert_eq!(rig.cpu.pc, 0x0204);
    }

    #[test]
    fn test_9xy0_sne_doesntskip() {
        let mut rig = Rig::new();
        rig.cpu.v[0x1] = 0x11;
        rig.cpu.v[0x2] = 0x11;
        rig.exec(0x9120);
        assert_eq!(rig.cpu.pc, 0x0202);
    }

    #[test]
    fn test_annn_ld() {
        let mut rig = Rig::new();
        rig.exec(0xAABC);
        assert_eq!(rig.cpu.i, 0xABC);
    }

    #[test]
    fn test_bnnn_jp() {
        let mut rig = Rig::new();
        rig.cpu.v[0x0] = 0x2;
        rig.exec(0xBABC);
        assert_eq!(rig.cpu.pc, 0xABE);
    }

    #[test]
    fn test_cxkk_rnd_is_masked() {
        let mut rig = Rig::new();
        for _ in 0..32 {
            rig.exec(0xC10F);
            assert_eq!(rig.cpu.v[0x1] & 0xF0, 0);
        }
        rig.exec(0xC200);
        assert_eq!(rig.cpu.v[0x2], 0);
    }

    #[test]
    fn test_dxyn_drw_draws() {
        let mut rig = Rig::new();
        rig.cpu.v[0x0] = 0x1;
        // the 0 glyph lives at address 0
        rig.exec(0xD005);
        assert!(rig.display.pixel(1, 1));
        assert!(rig.display.pixel(4, 5));
        assert!(!rig.display.pixel(2, 2));
        assert_eq!(rig.cpu.v[0xF], 0);
    }

    #[test]
    fn test_dxyn_drw_collides() {
        let mut rig = Rig::with_quirks(Quirks {
            display_wait: false,
            ..Quirks::default()
        });
        rig.exec(0xD001);
        assert_eq!(rig.cpu.v[0xF], 0x0);
        rig.exec(0xD001);
        assert_eq!(rig.cpu.v[0xF], 0x1);
        rig.exec(0xD001);
        assert_eq!(rig.cpu.v[0xF], 0x0);
    }

    #[test]
    fn test_ex9e_skp_skips() {
        let mut rig = Rig::new();
        rig.keys[0xE] = true;
        rig.cpu.v[0x1] = 0xE;
        rig.exec(0xE19E);
        assert_eq!(rig.cpu.pc, 0x0204);
    }

    #[test]
    fn test_ex9e_skp_doesntskip() {
        let mut rig = Rig::new();
        rig.exec(0xE19E);
        assert_eq!(rig.cpu.pc, 0x0202);
    }

    #[test]
    fn test_exa1_sknp_skips() {
        let mut rig = Rig::new();
        rig.exec(0xE1A1);
        assert_eq!(rig.cpu.pc, 0x0204);
    }

    #[test]
    fn test_exa1_sknp_doesntskip() {
        let mut rig = Rig::new();
        rig.keys[0xE] = true;
        rig.cpu.v[0x1] = 0xE;
        rig.exec(0xE1A1);
        assert_eq!(rig.cpu.pc, 0x0202);
    }

    #[test]
    fn test_ex9e_skp_key_outside_keypad_is_not_pressed() {
        let mut rig = Rig::new();
        rig.keys = [true; 16];
        rig.cpu.v[0x1] = 0x42;
        rig.exec(0xE19E);
        assert_eq!(rig.cpu.pc, 0x0202);
    }

    #[test]
    fn test_fx07_ld() {
        let mut rig = Rig::new();
        rig.timers.set_delay(0xF);
        rig.exec(0xF107);
        assert_eq!(rig.cpu.v[0x1], 0xF);
    }

    #[test]
    fn test_fx0a_ld_halts() {
        let mut rig = Rig::new();
        assert_eq!(rig.exec(0xF10A), CycleStatus::Waiting);
        assert!(rig.cpu.halted());
        assert_eq!(rig.cpu.pc, 0x0200);
    }

    #[test]
    fn test_fx15_ld() {
        let mut rig = Rig::new();
        rig.cpu.v[0x1] = 0xF;
        rig.exec(0xF115);
        assert_eq!(rig.timers.delay(), 0xF);
    }

    #[test]
    fn test_fx18_ld() {
        let mut rig = Rig::new();
        rig.cpu.v[0x1] = 0xF;
        rig.exec(0xF118);
        assert_eq!(rig.timers.sound(), 0xF);
    }

    #[test]
    fn test_fx1e_add() {
        let mut rig = Rig::new();
        rig.cpu.i = 0x1;
        rig.cpu.v[0x1] = 0x1;
        rig.exec(0xF11E);
        assert_eq!(rig.cpu.i, 0x2);
    }

    #[test]
    fn test_fx1e_add_wraps() {
        let mut rig = Rig::new();
        rig.cpu.i = 0xFFFF;
        rig.cpu.v[0x1] = 0x2;
        rig.exec(0xF11E);
        assert_eq!(rig.cpu.i, 0x1);
    }

    #[test]
    fn test_fx29_ld() {
        let mut rig = Rig::new();
        rig.cpu.v[0x1] = 0x2;
        rig.exec(0xF129);
        assert_eq!(rig.cpu.i, 0xA);
    }

    #[test]
    fn test_fx33_ld() {
        let mut rig = Rig::new();
        // 0x7B -> 123
        rig.cpu.v[0x1] = 0x7B;
        rig.cpu.i = 0x300;
        rig.exec(0xF133);
        assert_eq!(rig.memory[0x300..0x303], [0x1, 0x2, 0x3]);
        assert_eq!(rig.cpu.i, 0x300);
    }

    #[test]
    fn test_fx33_ld_past_end_of_memory_faults() {
        let mut rig = Rig::new();
        rig.cpu.i = 0xFFE;
        rig.memory[0x200..0x202].copy_from_slice(&[0xF1, 0x33]);
        assert!(rig.step().is_err());
    }

    #[test]
    fn test_fx55_ld() {
        let mut rig = Rig::new();
        rig.cpu.i = 0x300;
        rig.cpu.v[0x0..0x5].copy_from_slice(&[0x1, 0x2, 0x3, 0x4, 0x5]);
        rig.exec(0xF455);
        assert_eq!(rig.memory[0x300..0x305], [0x1, 0x2, 0x3, 0x4, 0x5]);
        assert_eq!(rig.memory[0x305], 0);
        assert_eq!(rig.cpu.i, 0x305);
    }

    #[test]
    fn test_fx65_ld() {
        let mut rig = Rig::new();
        rig.cpu.i = 0x300;
        rig.memory[0x300..0x305].copy_from_slice(&[0x1, 0x2, 0x3, 0x4, 0x5]);
        rig.exec(0xF465);
        assert_eq!(rig.cpu.v[0x0..0x5], [0x1, 0x2, 0x3, 0x4, 0x5]);
        assert_eq!(rig.cpu.v[0x5], 0);
        assert_eq!(rig.cpu.i, 0x305);
    }

    #[test]
    fn test_fx55_fx65_round_trip() {
        let mut rig = Rig::new();
        rig.cpu.i = 0x300;
        rig.cpu.v[0x0..0x4].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        rig.exec(0xF355);
        assert_eq!(rig.cpu.i, 0x304);

        rig.cpu.v = [0; 16];
        rig.cpu.i = 0x300;
        rig.exec(0xF365);
        assert_eq!(rig.cpu.v[0x0..0x4], [0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(rig.cpu.i, 0x304);
    }
}
