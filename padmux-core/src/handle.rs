//! Handle construction
//!
//! The handle is a plain value wrapping the register-bus capability and the
//! instantiation parameters. Creating one computes the register map and
//! performs no hardware access; all mutable state lives in the hardware
//! registers behind the bus.

use padmux_hal::RegisterBus;

use crate::error::{Error, Result};
use crate::ids::{DioPad, IrqLine, MioPad, PeripheralInput, PeripheralOutput};
use crate::regs::RegMap;

/// Hardware instantiation parameters for one pin-multiplexer instance
///
/// These describe the populations chosen when the peripheral was
/// instantiated in a top-level design. Every identifier an operation takes
/// is validated against them before any register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Params {
    /// Number of multiplexed peripheral input signals
    pub peripheral_inputs: u16,
    /// Number of multiplexed peripheral output signals
    pub peripheral_outputs: u16,
    /// Number of MIO pads on the padring
    pub mio_pads: u16,
    /// Number of DIO pads on the padring
    pub dio_pads: u16,
    /// Number of interrupt lines; at most 32, they share one register word
    pub irq_lines: u8,
}

impl Params {
    fn validate(&self) -> Result<()> {
        if self.peripheral_inputs == 0
            || self.peripheral_outputs == 0
            || self.mio_pads == 0
            || self.dio_pads == 0
            || self.irq_lines == 0
            || self.irq_lines > 32
        {
            return Err(Error::InvalidArgument);
        }
        Ok(())
    }
}

/// A handle to one pin-multiplexer instance
///
/// Generic over the register bus, so the same driver runs on hardware and
/// against the [`sim::SimBus`](crate::sim::SimBus) model in tests. Queries
/// take `&self`; anything that writes a register takes `&mut self`.
pub struct Pinmux<B> {
    pub(crate) bus: B,
    pub(crate) params: Params,
    pub(crate) map: RegMap,
}

impl<B: RegisterBus> Pinmux<B> {
    /// Create a handle over `bus`
    ///
    /// Pure value construction: the register map is computed from `params`
    /// and nothing is read or written. Fails with
    /// [`Error::InvalidArgument`] when a population count is zero or
    /// `irq_lines` exceeds the 32 bits of the interrupt registers.
    pub fn init(bus: B, params: Params) -> Result<Self> {
        params.validate()?;
        let map = RegMap::new(&params);
        Ok(Self { bus, params, map })
    }

    /// The instantiation parameters this handle was created with
    pub fn params(&self) -> &Params {
        &self.params
    }

    pub(crate) fn check_peripheral_input(&self, input: PeripheralInput) -> Result<()> {
        if input.0 < self.params.peripheral_inputs {
            Ok(())
        } else {
            Err(Error::InvalidArgument)
        }
    }

    pub(crate) fn check_peripheral_output(&self, output: PeripheralOutput) -> Result<()> {
        if output.0 < self.params.peripheral_outputs {
            Ok(())
        } else {
            Err(Error::InvalidArgument)
        }
    }

    pub(crate) fn check_mio_pad(&self, pad: MioPad) -> Result<()> {
        if pad.0 < self.params.mio_pads {
            Ok(())
        } else {
            Err(Error::InvalidArgument)
        }
    }

    pub(crate) fn check_dio_pad(&self, pad: DioPad) -> Result<()> {
        if pad.0 < self.params.dio_pads {
            Ok(())
        } else {
            Err(Error::InvalidArgument)
        }
    }

    pub(crate) fn check_irq_line(&self, line: IrqLine) -> Result<()> {
        if line.0 < self.params.irq_lines {
            Ok(())
        } else {
            Err(Error::InvalidArgument)
        }
    }
}
