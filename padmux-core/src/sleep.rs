//! Sleep configuration store
//!
//! Each pad carries a sleep behavior that takes effect when the device
//! enters low-power sleep, a one-way lock over that behavior, and a latched
//! sleep-active bit. The MIO and DIO namespaces are parallel but separate.
//!
//! Hardware latches the sleep-active bit on sleep entry; this driver only
//! observes it. After wake-up a pad keeps driving its sleep behavior until
//! the latch is explicitly cleared. Reconfiguring the pad does not clear
//! it, and clearing stays available when the configuration is locked,
//! because clearing the latch is not a configuration change.

use padmux_hal::RegisterBus;

use crate::error::Result;
use crate::handle::Pinmux;
use crate::ids::{DioPad, MioPad, SleepConfig, SleepMode};
use crate::regs::{self, sleep_cfg};

fn encode_config(config: SleepConfig) -> u32 {
    let mut word = config.mode.encode() << sleep_cfg::MODE_SHIFT;
    if config.enable {
        word |= sleep_cfg::EN;
    }
    word
}

fn decode_config(word: u32) -> SleepConfig {
    SleepConfig {
        enable: word & sleep_cfg::EN != 0,
        mode: SleepMode::decode((word >> sleep_cfg::MODE_SHIFT) & sleep_cfg::MODE_MASK),
    }
}

impl<B: RegisterBus> Pinmux<B> {
    /// Set the sleep behavior of MIO pad `pad`
    ///
    /// Enable and mode are packed into a single register write, so both
    /// fields take effect together. Fails with
    /// [`Error::Locked`](crate::Error::Locked) once the pad's sleep
    /// configuration has been locked.
    pub fn configure_mio_sleep(&mut self, pad: MioPad, config: SleepConfig) -> Result<()> {
        self.check_mio_pad(pad)?;
        self.ensure_unlocked(self.map.mio_sleep_lock(pad.0))?;
        self.bus
            .write32(self.map.mio_sleep_cfg(pad.0), encode_config(config));
        Ok(())
    }

    /// Current sleep behavior of MIO pad `pad`
    pub fn mio_sleep_config(&self, pad: MioPad) -> Result<SleepConfig> {
        self.check_mio_pad(pad)?;
        Ok(decode_config(self.bus.read32(self.map.mio_sleep_cfg(pad.0))))
    }

    /// Permanently lock the sleep behavior of MIO pad `pad`
    ///
    /// Reentrant: locking an already-locked pad succeeds and changes
    /// nothing.
    pub fn lock_mio_sleep(&mut self, pad: MioPad) -> Result<()> {
        self.check_mio_pad(pad)?;
        self.set_lock(self.map.mio_sleep_lock(pad.0));
        Ok(())
    }

    /// Whether the sleep behavior of MIO pad `pad` is locked
    pub fn is_mio_sleep_locked(&self, pad: MioPad) -> Result<bool> {
        self.check_mio_pad(pad)?;
        Ok(self.lock_state(self.map.mio_sleep_lock(pad.0)).is_locked())
    }

    /// Clear the latched sleep-active bit of MIO pad `pad`
    ///
    /// This is what hands the pad back to normal operation after wake-up.
    /// Works whether or not the configuration is locked, and is a harmless
    /// no-op when the pad never entered sleep.
    pub fn clear_mio_sleep_state(&mut self, pad: MioPad) -> Result<()> {
        self.check_mio_pad(pad)?;
        let (word, bit) = regs::status_word_bit(pad.0);
        self.bus.write32(self.map.mio_sleep_status(word), 1 << bit);
        Ok(())
    }

    /// Whether MIO pad `pad` is still latched in its sleep behavior
    pub fn mio_sleep_state(&self, pad: MioPad) -> Result<bool> {
        self.check_mio_pad(pad)?;
        let (word, bit) = regs::status_word_bit(pad.0);
        Ok(self.bus.read32(self.map.mio_sleep_status(word)) & (1 << bit) != 0)
    }

    /// Set the sleep behavior of DIO pad `pad`
    ///
    /// Same contract as [`Pinmux::configure_mio_sleep`].
    pub fn configure_dio_sleep(&mut self, pad: DioPad, config: SleepConfig) -> Result<()> {
        self.check_dio_pad(pad)?;
        self.ensure_unlocked(self.map.dio_sleep_lock(pad.0))?;
        self.bus
            .write32(self.map.dio_sleep_cfg(pad.0), encode_config(config));
        Ok(())
    }

    /// Current sleep behavior of DIO pad `pad`
    pub fn dio_sleep_config(&self, pad: DioPad) -> Result<SleepConfig> {
        self.check_dio_pad(pad)?;
        Ok(decode_config(self.bus.read32(self.map.dio_sleep_cfg(pad.0))))
    }

    /// Permanently lock the sleep behavior of DIO pad `pad`
    ///
    /// Reentrant: locking an already-locked pad succeeds and changes
    /// nothing.
    pub fn lock_dio_sleep(&mut self, pad: DioPad) -> Result<()> {
        self.check_dio_pad(pad)?;
        self.set_lock(self.map.dio_sleep_lock(pad.0));
        Ok(())
    }

    /// Whether the sleep behavior of DIO pad `pad` is locked
    pub fn is_dio_sleep_locked(&self, pad: DioPad) -> Result<bool> {
        self.check_dio_pad(pad)?;
        Ok(self.lock_state(self.map.dio_sleep_lock(pad.0)).is_locked())
    }

    /// Clear the latched sleep-active bit of DIO pad `pad`
    ///
    /// Same contract as [`Pinmux::clear_mio_sleep_state`].
    pub fn clear_dio_sleep_state(&mut self, pad: DioPad) -> Result<()> {
        self.check_dio_pad(pad)?;
        let (word, bit) = regs::status_word_bit(pad.0);
        self.bus.write32(self.map.dio_sleep_status(word), 1 << bit);
        Ok(())
    }

    /// Whether DIO pad `pad` is still latched in its sleep behavior
    pub fn dio_sleep_state(&self, pad: DioPad) -> Result<bool> {
        self.check_dio_pad(pad)?;
        let (word, bit) = regs::status_word_bit(pad.0);
        Ok(self.bus.read32(self.map.dio_sleep_status(word)) & (1 << bit) != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::handle::Params;
    use crate::sim::SimBus;

    fn params() -> Params {
        Params {
            peripheral_inputs: 8,
            peripheral_outputs: 9,
            mio_pads: 12,
            dio_pads: 5,
            irq_lines: 13,
        }
    }

    fn pinmux() -> Pinmux<SimBus> {
        Pinmux::init(SimBus::new(&params()), params()).unwrap()
    }

    #[test]
    fn test_config_encoding_packs_both_fields() {
        let config = SleepConfig {
            enable: true,
            mode: SleepMode::HighZ,
        };
        let word = encode_config(config);
        assert_eq!(word, 0b101);
        assert_eq!(decode_config(word), config);
    }

    #[test]
    fn test_sleep_config_roundtrip() {
        let mut mux = pinmux();
        for mode in [
            SleepMode::Low,
            SleepMode::High,
            SleepMode::HighZ,
            SleepMode::Keep,
        ] {
            for enable in [false, true] {
                let config = SleepConfig { enable, mode };
                mux.configure_mio_sleep(MioPad(5), config).unwrap();
                assert_eq!(mux.mio_sleep_config(MioPad(5)).unwrap(), config);

                mux.configure_dio_sleep(DioPad(2), config).unwrap();
                assert_eq!(mux.dio_sleep_config(DioPad(2)).unwrap(), config);
            }
        }
    }

    #[test]
    fn test_namespaces_are_separate() {
        let mut mux = pinmux();
        mux.configure_mio_sleep(
            MioPad(2),
            SleepConfig {
                enable: true,
                mode: SleepMode::Low,
            },
        )
        .unwrap();
        mux.lock_mio_sleep(MioPad(2)).unwrap();

        // The DIO pad with the same index is unaffected.
        assert!(!mux.is_dio_sleep_locked(DioPad(2)).unwrap());
        mux.configure_dio_sleep(
            DioPad(2),
            SleepConfig {
                enable: true,
                mode: SleepMode::High,
            },
        )
        .unwrap();

        // DIO population is smaller than MIO's.
        assert_eq!(
            mux.configure_dio_sleep(DioPad(5), SleepConfig::default()),
            Err(Error::InvalidArgument)
        );
        assert!(mux
            .configure_mio_sleep(MioPad(5), SleepConfig::default())
            .is_ok());
    }

    #[test]
    fn test_lock_freezes_configuration() {
        let mut mux = pinmux();
        let config = SleepConfig {
            enable: true,
            mode: SleepMode::HighZ,
        };
        mux.configure_mio_sleep(MioPad(3), config).unwrap();
        // Not asleep: entering sleep is hardware-driven.
        assert!(!mux.mio_sleep_state(MioPad(3)).unwrap());

        mux.lock_mio_sleep(MioPad(3)).unwrap();
        assert_eq!(
            mux.configure_mio_sleep(
                MioPad(3),
                SleepConfig {
                    enable: true,
                    mode: SleepMode::Low,
                }
            ),
            Err(Error::Locked)
        );
        assert_eq!(mux.mio_sleep_config(MioPad(3)).unwrap(), config);
    }

    #[test]
    fn test_clear_state_ignores_lock() {
        let mut mux = pinmux();
        mux.lock_mio_sleep(MioPad(7)).unwrap();
        mux.bus.latch_mio_sleep(MioPad(7));
        assert!(mux.mio_sleep_state(MioPad(7)).unwrap());

        mux.clear_mio_sleep_state(MioPad(7)).unwrap();
        assert!(!mux.mio_sleep_state(MioPad(7)).unwrap());

        mux.lock_dio_sleep(DioPad(1)).unwrap();
        mux.bus.latch_dio_sleep(DioPad(1));
        mux.clear_dio_sleep_state(DioPad(1)).unwrap();
        assert!(!mux.dio_sleep_state(DioPad(1)).unwrap());
    }

    #[test]
    fn test_reconfigure_does_not_clear_latch() {
        let mut mux = pinmux();
        mux.configure_mio_sleep(
            MioPad(4),
            SleepConfig {
                enable: true,
                mode: SleepMode::Keep,
            },
        )
        .unwrap();
        mux.bus.latch_mio_sleep(MioPad(4));

        mux.configure_mio_sleep(
            MioPad(4),
            SleepConfig {
                enable: false,
                mode: SleepMode::HighZ,
            },
        )
        .unwrap();
        // Still latched; only the explicit clear releases the pad.
        assert!(mux.mio_sleep_state(MioPad(4)).unwrap());
    }

    #[test]
    fn test_clear_without_sleep_is_noop() {
        let mut mux = pinmux();
        mux.clear_mio_sleep_state(MioPad(0)).unwrap();
        assert!(!mux.mio_sleep_state(MioPad(0)).unwrap());
    }

    #[test]
    fn test_clear_targets_one_pad() {
        let mut mux = pinmux();
        mux.bus.latch_mio_sleep(MioPad(4));
        mux.bus.latch_mio_sleep(MioPad(9));

        mux.clear_mio_sleep_state(MioPad(4)).unwrap();
        assert!(!mux.mio_sleep_state(MioPad(4)).unwrap());
        assert!(mux.mio_sleep_state(MioPad(9)).unwrap());
    }
}
