//! PCAL-family extensions: pull resistors, drive strength and per-bank
//! output drive mode.

use embedded_hal::i2c::I2c;
use log::debug;

use crate::caps::Capability;
use crate::consts::DRIVE_STRENGTH_MAX;
use crate::device::{pin_mask, Pca95xx};
use crate::error::{self, Error, Result};
use crate::gpio::{DriveMode, Pull};

impl<I2C: I2c> Pca95xx<I2C> {
    /// Configures the pull resistor of a single pin.
    ///
    /// Requesting [`Pull::None`] on a model without pull resistors is a
    /// no-op rather than an error: such a chip is permanently in the
    /// no-pull state.
    pub fn set_pull(&self, pin: u8, pull: Pull) -> Result<(), I2C::Error> {
        self.check_pin(pin)?;
        let mask = pin_mask(pin);
        let map = self.map();
        match pull {
            Pull::Up => {
                let ext = self.extended_regs(Capability::PullUp)?;
                debug!("pin {pin}: set pull-up");
                let mut bus = self.transport();
                // Select is programmed before enable so the opposite
                // resistor never engages momentarily.
                Self::update_port(&mut bus, ext.pull_select, map.width, mask, 0)?;
                Self::update_port(&mut bus, ext.pull_enable, map.width, mask, 0)?;
            }
            Pull::Down => {
                let ext = self.extended_regs(Capability::PullDown)?;
                debug!("pin {pin}: set pull-down");
                let mut bus = self.transport();
                Self::update_port(&mut bus, ext.pull_select, map.width, 0, mask)?;
                Self::update_port(&mut bus, ext.pull_enable, map.width, mask, 0)?;
            }
            Pull::None => {
                let available = if self.supports(Capability::PullUp) {
                    Capability::PullUp
                } else if self.supports(Capability::PullDown) {
                    Capability::PullDown
                } else {
                    return Ok(());
                };
                let ext = self.extended_regs(available)?;
                debug!("pin {pin}: disable pull resistor");
                // Clearing the enable bit alone expresses "no pull".
                let mut bus = self.transport();
                Self::update_port(&mut bus, ext.pull_enable, map.width, 0, mask)?;
            }
        }
        Ok(())
    }

    /// Reads the pull resistor configuration of a single pin.
    pub fn pull(&self, pin: u8) -> Result<Pull, I2C::Error> {
        self.check_pin(pin)?;
        let caps = self.capabilities();
        if !caps.has(Capability::PullUp) && !caps.has(Capability::PullDown) {
            return Err(error::unsupported_pulls());
        }
        let available = if caps.has(Capability::PullUp) {
            Capability::PullUp
        } else {
            Capability::PullDown
        };
        let ext = self.extended_regs(available)?;
        let mask = pin_mask(pin);
        let map = self.map();
        let mut bus = self.transport();
        if bus.read_port(ext.pull_enable, map.width)? & mask == 0 {
            return Ok(Pull::None);
        }
        Ok(if bus.read_port(ext.pull_select, map.width)? & mask != 0 {
            Pull::Up
        } else {
            Pull::Down
        })
    }

    /// Sets the output drive strength of a single pin.
    ///
    /// `level` selects 1/4, 1/2, 3/4 or full strength (0 through 3). Each
    /// pin has a 2-bit field in the 16-bit drive register of its bank; pins
    /// 8-15 live in the second bank's register.
    pub fn set_drive_strength(&self, pin: u8, level: u8) -> Result<(), I2C::Error> {
        self.check_pin(pin)?;
        let ext = self.extended_regs(Capability::DriveStrength)?;
        if level > DRIVE_STRENGTH_MAX {
            return Err(Error::InvalidArgument(format!(
                "drive strength {level} out of range (0-{DRIVE_STRENGTH_MAX})"
            )));
        }
        debug!("pin {pin}: set drive strength {level}");
        let reg = ext.drive[usize::from(pin / 8)];
        let shift = u16::from(pin % 8) * 2;
        let mut bus = self.transport();
        let current = bus.read_u16le(reg)?;
        let new = (current & !(0b11 << shift)) | (u16::from(level) << shift);
        bus.write_u16le(reg, new)?;
        Ok(())
    }

    /// Reads the output drive strength of a single pin (0 through 3).
    pub fn drive_strength(&self, pin: u8) -> Result<u8, I2C::Error> {
        self.check_pin(pin)?;
        let ext = self.extended_regs(Capability::DriveStrength)?;
        let reg = ext.drive[usize::from(pin / 8)];
        let shift = u16::from(pin % 8) * 2;
        let value = self.transport().read_u16le(reg)?;
        Ok(((value >> shift) & 0b11) as u8)
    }

    /// Configures the output stage of a whole 8-pin bank as push-pull or
    /// open-drain.
    ///
    /// This is a bank-level setting: all pins of the bank switch together.
    /// Bank 0 covers pins 0-7, bank 1 (16-pin models only) pins 8-15.
    pub fn set_bank_drive_mode(&self, bank: u8, mode: DriveMode) -> Result<(), I2C::Error> {
        let ext = self.extended_regs(Capability::DriveMode)?;
        self.check_bank(bank)?;
        debug!("bank {bank}: set drive mode {mode:?}");
        let mask = 1u8 << bank;
        let mut bus = self.transport();
        let current = bus.read_u8(ext.output_config)?;
        let new = match mode {
            DriveMode::PushPull => current & !mask,
            DriveMode::OpenDrain => current | mask,
        };
        bus.write_u8(ext.output_config, new)?;
        Ok(())
    }

    /// Reads the output stage configuration of an 8-pin bank.
    pub fn bank_drive_mode(&self, bank: u8) -> Result<DriveMode, I2C::Error> {
        let ext = self.extended_regs(Capability::DriveMode)?;
        self.check_bank(bank)?;
        let value = self.transport().read_u8(ext.output_config)?;
        Ok(if value & (1u8 << bank) != 0 {
            DriveMode::OpenDrain
        } else {
            DriveMode::PushPull
        })
    }

    fn check_bank(&self, bank: u8) -> Result<(), I2C::Error> {
        let banks = self.map().banks();
        if bank >= banks {
            Err(Error::InvalidArgument(format!(
                "bank {bank} out of range (0-{})",
                banks - 1
            )))
        } else {
            Ok(())
        }
    }
}
