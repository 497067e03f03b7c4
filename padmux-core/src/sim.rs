//! Software register model
//!
//! A register-accurate model of the peripheral for host-side tests: plain
//! storage for configuration registers, sticky one-way lock bits,
//! write-1-to-clear state/status registers, and a test register that
//! latches interrupt state. It implements [`RegisterBus`], so a
//! [`Pinmux`](crate::Pinmux) drives it exactly as it would drive hardware.
//!
//! The model also exposes the edges only hardware can cause (latching a
//! pad's sleep-active bit on sleep entry, raising an interrupt line) so
//! tests can exercise the wake-up and interrupt paths.

use heapless::FnvIndexMap;
use padmux_hal::RegisterBus;

use crate::handle::Params;
use crate::ids::{DioPad, IrqLine, MioPad};
use crate::regs::{self, RegMap};

/// Register capacity of the model; must be a power of two
/// (`FnvIndexMap` requirement) and large enough for the modeled geometry.
const CAPACITY: usize = 1024;

/// In-memory pin-multiplexer register file
pub struct SimBus {
    map: RegMap,
    irq_mask: u32,
    store: FnvIndexMap<u32, u32, CAPACITY>,
}

impl SimBus {
    /// Model an instance with the given parameters
    ///
    /// Every register reads as zero until written, matching the post-reset
    /// state.
    pub fn new(params: &Params) -> Self {
        let irq_mask = if params.irq_lines >= 32 {
            u32::MAX
        } else {
            (1 << params.irq_lines) - 1
        };
        Self {
            map: RegMap::new(params),
            irq_mask,
            store: FnvIndexMap::new(),
        }
    }

    /// Latch the sleep-active bit of MIO pad `pad`, as the hardware does
    /// when the device enters low-power sleep
    pub fn latch_mio_sleep(&mut self, pad: MioPad) {
        let (word, bit) = regs::status_word_bit(pad.0);
        let offset = self.map.mio_sleep_status(word);
        let latched = self.load(offset) | (1 << bit);
        self.put(offset, latched);
    }

    /// Latch the sleep-active bit of DIO pad `pad`
    pub fn latch_dio_sleep(&mut self, pad: DioPad) {
        let (word, bit) = regs::status_word_bit(pad.0);
        let offset = self.map.dio_sleep_status(word);
        let latched = self.load(offset) | (1 << bit);
        self.put(offset, latched);
    }

    /// Raise interrupt `line`, as the hardware does on a pad event
    pub fn raise_irq(&mut self, line: IrqLine) {
        let raised = self.load(regs::INTR_STATE) | ((1 << line.0) & self.irq_mask);
        self.put(regs::INTR_STATE, raised);
    }

    /// Raw register read, for test assertions
    pub fn raw(&self, offset: u32) -> u32 {
        self.load(offset)
    }

    fn load(&self, offset: u32) -> u32 {
        self.store.get(&offset).copied().unwrap_or(0)
    }

    fn put(&mut self, offset: u32, value: u32) {
        if self.store.insert(offset, value).is_err() {
            panic!("register model capacity exceeded");
        }
    }
}

impl RegisterBus for SimBus {
    fn read32(&self, offset: u32) -> u32 {
        self.load(offset)
    }

    fn write32(&mut self, offset: u32, value: u32) {
        if offset == regs::INTR_TEST {
            // Test writes latch into the state register instead of storing.
            let state = self.load(regs::INTR_STATE) | (value & self.irq_mask);
            self.put(regs::INTR_STATE, state);
        } else if offset == regs::INTR_STATE || self.map.is_sleep_status(offset) {
            // Write-1-to-clear.
            let cleared = self.load(offset) & !value;
            self.put(offset, cleared);
        } else if self.map.is_lock(offset) {
            // Lock bits are sticky; writes can only ever set them.
            let locked = self.load(offset) | (value & regs::LOCK_BIT);
            self.put(offset, locked);
        } else if offset == regs::INTR_ENABLE {
            self.put(offset, value & self.irq_mask);
        } else {
            self.put(offset, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> Params {
        Params {
            peripheral_inputs: 8,
            peripheral_outputs: 9,
            mio_pads: 12,
            dio_pads: 5,
            irq_lines: 13,
        }
    }

    #[test]
    fn test_registers_reset_to_zero() {
        let sim = SimBus::new(&params());
        assert_eq!(sim.read32(regs::INTR_STATE), 0);
        let map = RegMap::new(&params());
        assert_eq!(sim.read32(map.insel(3)), 0);
    }

    #[test]
    fn test_plain_registers_store_writes() {
        let mut sim = SimBus::new(&params());
        let map = RegMap::new(&params());
        sim.write32(map.insel(2), 7);
        assert_eq!(sim.read32(map.insel(2)), 7);
        sim.write32(map.insel(2), 3);
        assert_eq!(sim.read32(map.insel(2)), 3);
    }

    #[test]
    fn test_intr_state_is_write_one_to_clear() {
        let mut sim = SimBus::new(&params());
        sim.raise_irq(IrqLine(0));
        sim.raise_irq(IrqLine(5));

        sim.write32(regs::INTR_STATE, 1 << 0);
        assert_eq!(sim.read32(regs::INTR_STATE), 1 << 5);
    }

    #[test]
    fn test_intr_test_latches_state() {
        let mut sim = SimBus::new(&params());
        sim.write32(regs::INTR_TEST, 1 << 3);
        assert_eq!(sim.read32(regs::INTR_STATE), 1 << 3);
        // The test register itself holds nothing.
        assert_eq!(sim.read32(regs::INTR_TEST), 0);
    }

    #[test]
    fn test_intr_registers_mask_unpopulated_lines() {
        let mut sim = SimBus::new(&params());
        sim.write32(regs::INTR_ENABLE, 0xFFFF_FFFF);
        assert_eq!(sim.read32(regs::INTR_ENABLE), 0x1FFF);
    }

    #[test]
    fn test_lock_bits_are_sticky() {
        let mut sim = SimBus::new(&params());
        let map = RegMap::new(&params());
        let offset = map.outsel_lock(4);

        sim.write32(offset, regs::LOCK_BIT);
        assert_eq!(sim.read32(offset), regs::LOCK_BIT);

        // Neither zero nor garbage writes release a lock.
        sim.write32(offset, 0);
        assert_eq!(sim.read32(offset), regs::LOCK_BIT);
        sim.write32(offset, 0xFFFF_FFFE);
        assert_eq!(sim.read32(offset), regs::LOCK_BIT);
    }

    #[test]
    fn test_sleep_status_is_write_one_to_clear() {
        let mut sim = SimBus::new(&params());
        let map = RegMap::new(&params());
        sim.latch_mio_sleep(MioPad(4));
        sim.latch_mio_sleep(MioPad(9));

        sim.write32(map.mio_sleep_status(0), 1 << 4);
        assert_eq!(sim.read32(map.mio_sleep_status(0)), 1 << 9);
    }
}
