//! Direction, pull and drive-mode types plus the basic per-pin operations
//! shared by all supported models.

use embedded_hal::i2c::I2c;
use log::debug;

use crate::device::{pin_mask, Pca95xx};
use crate::error::Result;

/// Direction of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// Pull resistor configuration of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    None,
    Up,
    Down,
}

/// Output stage configuration of a whole 8-pin bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveMode {
    PushPull,
    OpenDrain,
}

impl<I2C: I2c> Pca95xx<I2C> {
    /// Sets the direction of a single pin.
    pub fn set_direction(&self, pin: u8, direction: Direction) -> Result<(), I2C::Error> {
        self.check_pin(pin)?;
        debug!("pin {pin}: set direction {direction:?}");
        let map = self.map();
        // Direction register: 1 = input, 0 = output.
        let (set, clear) = match direction {
            Direction::Input => (pin_mask(pin), 0),
            Direction::Output => (0, pin_mask(pin)),
        };
        let mut bus = self.transport();
        Self::update_port(&mut bus, map.direction, map.width, set, clear)?;
        Ok(())
    }

    /// Reads the configured direction of a single pin.
    pub fn direction(&self, pin: u8) -> Result<Direction, I2C::Error> {
        self.check_pin(pin)?;
        let map = self.map();
        let reg = self.transport().read_port(map.direction, map.width)?;
        Ok(if reg & pin_mask(pin) != 0 {
            Direction::Input
        } else {
            Direction::Output
        })
    }

    /// Sets the output value of a single pin.
    ///
    /// Writing a pin that is configured as an input is accepted; the value
    /// takes effect once the pin is switched to output.
    pub fn set_value(&self, pin: u8, value: bool) -> Result<(), I2C::Error> {
        self.check_pin(pin)?;
        debug!("pin {pin}: set value {value}");
        let map = self.map();
        let (set, clear) = if value {
            (pin_mask(pin), 0)
        } else {
            (0, pin_mask(pin))
        };
        let mut bus = self.transport();
        Self::update_port(&mut bus, map.output, map.width, set, clear)?;
        Ok(())
    }

    /// Reads the current level of a single pin from the input register.
    ///
    /// On a latched pin this is the read that clears a pending interrupt.
    pub fn value(&self, pin: u8) -> Result<bool, I2C::Error> {
        self.check_pin(pin)?;
        let map = self.map();
        let reg = self.transport().read_port(map.input, map.width)?;
        Ok(reg & pin_mask(pin) != 0)
    }

    /// Reads the value most recently written to a pin's output latch.
    ///
    /// Unlike [`value`](Self::value) this reflects what the chip drives, not
    /// what the pin sees.
    pub fn output_value(&self, pin: u8) -> Result<bool, I2C::Error> {
        self.check_pin(pin)?;
        let map = self.map();
        let reg = self.transport().read_port(map.output, map.width)?;
        Ok(reg & pin_mask(pin) != 0)
    }

    /// Enables or disables input polarity inversion for a single pin.
    pub fn set_polarity_inverted(&self, pin: u8, inverted: bool) -> Result<(), I2C::Error> {
        self.check_pin(pin)?;
        debug!("pin {pin}: set polarity inverted {inverted}");
        let map = self.map();
        let (set, clear) = if inverted {
            (pin_mask(pin), 0)
        } else {
            (0, pin_mask(pin))
        };
        let mut bus = self.transport();
        Self::update_port(&mut bus, map.polarity, map.width, set, clear)?;
        Ok(())
    }

    /// Reads whether input polarity inversion is enabled for a single pin.
    pub fn polarity_inverted(&self, pin: u8) -> Result<bool, I2C::Error> {
        self.check_pin(pin)?;
        let map = self.map();
        let reg = self.transport().read_port(map.polarity, map.width)?;
        Ok(reg & pin_mask(pin) != 0)
    }

    /// Reads the whole input register in one transaction.
    ///
    /// The high byte is zero on 8-pin models. This is the documented
    /// read-to-clear action for pending latched interrupts, exposed so
    /// callers decide when clearing happens.
    pub fn read_input_port(&self) -> Result<u16, I2C::Error> {
        let map = self.map();
        self.transport().read_port(map.input, map.width)
    }
}
