//! Board-agnostic pin-multiplexer driver
//!
//! The pin multiplexer connects peripheral input/output signals to the
//! padring's MIO and DIO pads. Every peripheral input is fed by a
//! multiplexer choosing among the MIO pads and constant sources; every MIO
//! pad output is fed by a multiplexer choosing among the peripheral outputs
//! and constant sources. Each pad additionally carries a low-power sleep
//! behavior, and most configuration can be frozen with one-way hardware
//! locks.
//!
//! This crate contains all driver logic that does not depend on how the
//! register block is reached:
//!
//! - Handle construction and parameter validation
//! - The mux routing table (input and output selects)
//! - Per-pad sleep configuration for the MIO and DIO namespaces
//! - The one-way lock discipline shared by both
//! - Interrupt enablement, including the all-lines snapshot/restore pair
//! - A register-accurate software model for host-side tests
//!
//! Register access goes through [`padmux_hal::RegisterBus`], so the same
//! driver runs over memory-mapped hardware (`padmux-hal-mmio`) and over the
//! bundled [`sim::SimBus`] model.
//!
//! # Locking
//!
//! Routing entries and per-pad sleep configurations each carry a one-way
//! lock. Setting a lock is idempotent; nothing clears one short of a
//! hardware reset. Mutating a locked resource fails with [`Error::Locked`]
//! before any register is written.
//!
//! # Concurrency
//!
//! Every operation is synchronous and completes in a bounded number of
//! register accesses. Queries take `&self` and may be shared across
//! execution contexts; mutating operations take `&mut self` and require
//! external serialization per peripheral instance, because the
//! check-then-act lock verification is not atomic against a concurrent
//! writer.

#![no_std]
#![deny(unsafe_code)]

pub mod error;
mod handle;
pub mod ids;
pub mod irq;
pub mod lock;
mod regs;
mod routing;
pub mod sim;
mod sleep;

pub use error::{Error, Result};
pub use handle::{Params, Pinmux};
pub use ids::{
    DioPad, InputSelect, IrqLine, MioPad, OutputSelect, PeripheralInput, PeripheralOutput,
    SleepConfig, SleepMode,
};
pub use irq::IrqSnapshot;
pub use lock::LockState;
