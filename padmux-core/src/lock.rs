//! One-way lock discipline
//!
//! Every lockable resource (a routing entry, a pad's sleep configuration)
//! carries a lock register whose bit 0 can be set exactly once per hardware
//! reset. There is no unlock operation anywhere: the transition
//! Unlocked → Locked is terminal for the lifetime of the handle, and only a
//! full hardware reset (outside this driver's authority) starts over.
//! Mutators consult the lock register before writing anything, so a
//! `Locked` failure is guaranteed side-effect-free.

use padmux_hal::RegisterBus;

use crate::error::{Error, Result};
use crate::handle::Pinmux;
use crate::regs::LOCK_BIT;

/// Lock state of one lockable resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockState {
    /// Configuration writes are accepted
    Unlocked,
    /// Configuration is frozen until hardware reset
    Locked,
}

impl LockState {
    pub(crate) fn from_register(word: u32) -> Self {
        if word & LOCK_BIT != 0 {
            LockState::Locked
        } else {
            LockState::Unlocked
        }
    }

    /// Whether the resource is locked
    pub fn is_locked(self) -> bool {
        matches!(self, LockState::Locked)
    }
}

impl<B: RegisterBus> Pinmux<B> {
    /// Read the lock register at `offset`
    pub(crate) fn lock_state(&self, offset: u32) -> LockState {
        LockState::from_register(self.bus.read32(offset))
    }

    /// Fail with [`Error::Locked`] unless the resource at `offset` is
    /// unlocked
    pub(crate) fn ensure_unlocked(&self, offset: u32) -> Result<()> {
        match self.lock_state(offset) {
            LockState::Unlocked => Ok(()),
            LockState::Locked => Err(Error::Locked),
        }
    }

    /// Set the one-way lock at `offset`
    ///
    /// Setting an already-set lock is a successful no-op; the redundant
    /// write is skipped.
    pub(crate) fn set_lock(&mut self, offset: u32) {
        if self.lock_state(offset) == LockState::Unlocked {
            self.bus.write32(offset, LOCK_BIT);
        }
    }
}
