//! Mux routing table
//!
//! Every peripheral input signal is fed by a multiplexer choosing among the
//! MIO pads and constant sources; every MIO pad output is fed by a
//! multiplexer choosing among the peripheral outputs and constant sources.
//! Entries are independent of each other, and each carries its own one-way
//! lock.

use padmux_hal::RegisterBus;

use crate::error::{Error, Result};
use crate::handle::Pinmux;
use crate::ids::{InputSelect, MioPad, OutputSelect, PeripheralInput};

impl<B: RegisterBus> Pinmux<B> {
    /// Route `select` to peripheral input `input`
    ///
    /// Fails with [`Error::InvalidArgument`] when either identifier is
    /// outside the instantiated populations and with [`Error::Locked`] when
    /// the entry has been locked; in both cases nothing is written.
    pub fn set_input_select(&mut self, input: PeripheralInput, select: InputSelect) -> Result<()> {
        self.check_peripheral_input(input)?;
        self.check_input_select(select)?;
        self.ensure_unlocked(self.map.insel_lock(input.0))?;
        self.bus.write32(self.map.insel(input.0), select.encode());
        Ok(())
    }

    /// Currently selected source for peripheral input `input`
    pub fn input_select(&self, input: PeripheralInput) -> Result<InputSelect> {
        self.check_peripheral_input(input)?;
        let raw = self.bus.read32(self.map.insel(input.0));
        InputSelect::decode(raw, self.params.mio_pads).ok_or(Error::Unexpected)
    }

    /// Permanently lock the routing of peripheral input `input`
    ///
    /// Reentrant: locking an already-locked entry succeeds and changes
    /// nothing.
    pub fn lock_input_select(&mut self, input: PeripheralInput) -> Result<()> {
        self.check_peripheral_input(input)?;
        self.set_lock(self.map.insel_lock(input.0));
        Ok(())
    }

    /// Whether the routing of peripheral input `input` is locked
    pub fn is_input_select_locked(&self, input: PeripheralInput) -> Result<bool> {
        self.check_peripheral_input(input)?;
        Ok(self.lock_state(self.map.insel_lock(input.0)).is_locked())
    }

    /// Route `select` to the output of MIO pad `pad`
    ///
    /// Same contract as [`Pinmux::set_input_select`].
    pub fn set_output_select(&mut self, pad: MioPad, select: OutputSelect) -> Result<()> {
        self.check_mio_pad(pad)?;
        self.check_output_select(select)?;
        self.ensure_unlocked(self.map.outsel_lock(pad.0))?;
        self.bus.write32(self.map.outsel(pad.0), select.encode());
        Ok(())
    }

    /// Currently selected source for the output of MIO pad `pad`
    pub fn output_select(&self, pad: MioPad) -> Result<OutputSelect> {
        self.check_mio_pad(pad)?;
        let raw = self.bus.read32(self.map.outsel(pad.0));
        OutputSelect::decode(raw, self.params.peripheral_outputs).ok_or(Error::Unexpected)
    }

    /// Permanently lock the output routing of MIO pad `pad`
    ///
    /// Reentrant: locking an already-locked entry succeeds and changes
    /// nothing.
    pub fn lock_output_select(&mut self, pad: MioPad) -> Result<()> {
        self.check_mio_pad(pad)?;
        self.set_lock(self.map.outsel_lock(pad.0));
        Ok(())
    }

    /// Whether the output routing of MIO pad `pad` is locked
    pub fn is_output_select_locked(&self, pad: MioPad) -> Result<bool> {
        self.check_mio_pad(pad)?;
        Ok(self.lock_state(self.map.outsel_lock(pad.0)).is_locked())
    }

    fn check_input_select(&self, select: InputSelect) -> Result<()> {
        match select {
            InputSelect::Pad(pad) => self.check_mio_pad(pad),
            InputSelect::ConstantZero | InputSelect::ConstantOne => Ok(()),
        }
    }

    fn check_output_select(&self, select: OutputSelect) -> Result<()> {
        match select {
            OutputSelect::Peripheral(output) => self.check_peripheral_output(output),
            OutputSelect::ConstantZero | OutputSelect::ConstantOne | OutputSelect::HighZ => Ok(()),
        }
    }
}
