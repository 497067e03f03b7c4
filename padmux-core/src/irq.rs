//! Interrupt enablement
//!
//! Direct state/enable/test register access for the peripheral's interrupt
//! lines, plus an all-lines snapshot used to mask the whole peripheral
//! across a critical region and restore the exact prior enablement
//! afterwards. These registers are a separate block from the routing and
//! sleep tables and carry no locks.

use padmux_hal::RegisterBus;

use crate::error::Result;
use crate::handle::Pinmux;
use crate::ids::IrqLine;
use crate::regs;

/// Saved enablement of every interrupt line
///
/// Produced by [`Pinmux::irq_disable_all`] and consumed by
/// [`Pinmux::irq_restore_all`]. A plain value: copy, compare, and store it
/// freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IrqSnapshot(u32);

fn line_bit(line: IrqLine) -> u32 {
    1 << line.0
}

impl<B: RegisterBus> Pinmux<B> {
    /// Whether interrupt `line` is pending
    pub fn irq_is_pending(&self, line: IrqLine) -> Result<bool> {
        self.check_irq_line(line)?;
        Ok(self.bus.read32(regs::INTR_STATE) & line_bit(line) != 0)
    }

    /// Acknowledge pending interrupt `line`
    pub fn irq_acknowledge(&mut self, line: IrqLine) -> Result<()> {
        self.check_irq_line(line)?;
        // Write-1-to-clear; other lines keep their state.
        self.bus.write32(regs::INTR_STATE, line_bit(line));
        Ok(())
    }

    /// Whether interrupt `line` is enabled
    pub fn irq_is_enabled(&self, line: IrqLine) -> Result<bool> {
        self.check_irq_line(line)?;
        Ok(self.bus.read32(regs::INTR_ENABLE) & line_bit(line) != 0)
    }

    /// Enable or disable interrupt `line`
    pub fn irq_set_enabled(&mut self, line: IrqLine, enable: bool) -> Result<()> {
        self.check_irq_line(line)?;
        let mut word = self.bus.read32(regs::INTR_ENABLE);
        if enable {
            word |= line_bit(line);
        } else {
            word &= !line_bit(line);
        }
        self.bus.write32(regs::INTR_ENABLE, word);
        Ok(())
    }

    /// Force interrupt `line` to pending from software
    pub fn irq_force(&mut self, line: IrqLine) -> Result<()> {
        self.check_irq_line(line)?;
        self.bus.write32(regs::INTR_TEST, line_bit(line));
        Ok(())
    }

    /// Disable every interrupt line, returning the prior enablement
    ///
    /// The read and the clearing write are adjacent; no operation in this
    /// crate can observe the block between them.
    #[must_use = "restoring enablement later requires the snapshot"]
    pub fn irq_disable_all(&mut self) -> IrqSnapshot {
        let snapshot = IrqSnapshot(self.bus.read32(regs::INTR_ENABLE));
        self.bus.write32(regs::INTR_ENABLE, 0);
        snapshot
    }

    /// Restore the enablement captured by [`Pinmux::irq_disable_all`]
    ///
    /// Writes the snapshot back verbatim, including lines that were already
    /// disabled when it was taken.
    pub fn irq_restore_all(&mut self, snapshot: IrqSnapshot) {
        self.bus.write32(regs::INTR_ENABLE, snapshot.0);
    }
}
