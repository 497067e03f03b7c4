//! Driver error taxonomy
//!
//! Every fallible operation reports one of three failure kinds, so callers
//! can tell a caller bug apart from hardware that has been permanently
//! frozen.

/// Errors returned by pin-multiplexer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// An identifier or parameter is outside its valid set. Detected before
    /// any register access; the hardware is untouched.
    InvalidArgument,
    /// The targeted resource's one-way lock bit is set. The requested write
    /// was not performed and cannot succeed until hardware reset.
    Locked,
    /// The hardware returned a value the instantiation parameters cannot
    /// represent.
    Unexpected,
}

/// Convenience alias for pin-multiplexer results
pub type Result<T> = core::result::Result<T, Error>;
