//! Identifier and selection types
//!
//! Pads, peripheral signals, and interrupt lines are opaque indices into
//! the populations declared by [`Params`](crate::Params); the driver
//! validates membership before touching any register. The select types
//! model the multiplexer sources, including the constant sources the
//! hardware can route in place of a pad or peripheral signal.

/// A multiplexed peripheral input signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PeripheralInput(pub u16);

/// A multiplexed peripheral output signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PeripheralOutput(pub u16);

/// A multiplexed (MIO) padring pad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MioPad(pub u16);

/// A dedicated (DIO) padring pad
///
/// DIO pads have a fixed peripheral association and no routing entry, but
/// still carry sleep configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DioPad(pub u16);

/// One of the peripheral's interrupt lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IrqLine(pub u8);

/// Source routed to a peripheral input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputSelect {
    /// Tie the input to constant zero
    ConstantZero,
    /// Tie the input to constant one
    ConstantOne,
    /// Connect the input to an MIO pad
    Pad(MioPad),
}

impl InputSelect {
    /// Select value of the first MIO pad; lower values are the constants.
    const FIRST_PAD: u32 = 2;

    pub(crate) fn encode(self) -> u32 {
        match self {
            InputSelect::ConstantZero => 0,
            InputSelect::ConstantOne => 1,
            InputSelect::Pad(pad) => Self::FIRST_PAD + u32::from(pad.0),
        }
    }

    pub(crate) fn decode(raw: u32, mio_pads: u16) -> Option<Self> {
        match raw {
            0 => Some(InputSelect::ConstantZero),
            1 => Some(InputSelect::ConstantOne),
            n => {
                let pad = n - Self::FIRST_PAD;
                if pad < u32::from(mio_pads) {
                    Some(InputSelect::Pad(MioPad(pad as u16)))
                } else {
                    None
                }
            }
        }
    }
}

/// Source routed to an MIO pad output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputSelect {
    /// Drive the pad to constant zero
    ConstantZero,
    /// Drive the pad to constant one
    ConstantOne,
    /// Leave the pad high-impedance
    HighZ,
    /// Connect the pad to a peripheral output
    Peripheral(PeripheralOutput),
}

impl OutputSelect {
    /// Select value of the first peripheral output; lower values are the
    /// constants.
    const FIRST_PERIPHERAL: u32 = 3;

    pub(crate) fn encode(self) -> u32 {
        match self {
            OutputSelect::ConstantZero => 0,
            OutputSelect::ConstantOne => 1,
            OutputSelect::HighZ => 2,
            OutputSelect::Peripheral(output) => Self::FIRST_PERIPHERAL + u32::from(output.0),
        }
    }

    pub(crate) fn decode(raw: u32, peripheral_outputs: u16) -> Option<Self> {
        match raw {
            0 => Some(OutputSelect::ConstantZero),
            1 => Some(OutputSelect::ConstantOne),
            2 => Some(OutputSelect::HighZ),
            n => {
                let output = n - Self::FIRST_PERIPHERAL;
                if output < u32::from(peripheral_outputs) {
                    Some(OutputSelect::Peripheral(PeripheralOutput(output as u16)))
                } else {
                    None
                }
            }
        }
    }
}

/// Pad behavior while the device is in low-power sleep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SleepMode {
    /// Drive the pad low
    Low,
    /// Drive the pad high
    High,
    /// Leave the pad high-impedance
    HighZ,
    /// Hold the last driven value
    #[default]
    Keep,
}

impl SleepMode {
    pub(crate) fn encode(self) -> u32 {
        match self {
            SleepMode::Low => 0,
            SleepMode::High => 1,
            SleepMode::HighZ => 2,
            SleepMode::Keep => 3,
        }
    }

    pub(crate) fn decode(bits: u32) -> Self {
        match bits & 0b11 {
            0 => SleepMode::Low,
            1 => SleepMode::High,
            2 => SleepMode::HighZ,
            _ => SleepMode::Keep,
        }
    }
}

/// Sleep behavior for one pad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SleepConfig {
    /// Whether sleep behavior takes effect for this pad
    pub enable: bool,
    /// Behavior while the device sleeps
    pub mode: SleepMode,
}
