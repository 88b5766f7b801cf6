//! Per-pin view over an expander, including the `embedded-hal` digital pin
//! trait implementations.

use embedded_hal::digital;
use embedded_hal::i2c::I2c;

use crate::device::Pca95xx;
use crate::error::Result;
use crate::gpio::{Direction, Pull};

/// A single pin of an expander.
///
/// Obtained from [`Pca95xx::pin`]. The view borrows the device and does not
/// own it; any number of views may coexist, including for the same pin, and
/// all register traffic funnels through the device's internal lock.
#[derive(Debug, Clone, Copy)]
pub struct ExpanderPin<'a, I2C> {
    device: &'a Pca95xx<I2C>,
    pin: u8,
}

impl<'a, I2C: I2c> ExpanderPin<'a, I2C> {
    pub(crate) fn new(device: &'a Pca95xx<I2C>, pin: u8) -> Self {
        Self { device, pin }
    }

    /// The pin index within the expander.
    pub fn number(&self) -> u8 {
        self.pin
    }

    /// Sets the direction of this pin.
    pub fn set_direction(&self, direction: Direction) -> Result<(), I2C::Error> {
        self.device.set_direction(self.pin, direction)
    }

    /// Reads the configured direction of this pin.
    pub fn direction(&self) -> Result<Direction, I2C::Error> {
        self.device.direction(self.pin)
    }

    /// Sets the output value of this pin.
    pub fn set_value(&self, value: bool) -> Result<(), I2C::Error> {
        self.device.set_value(self.pin, value)
    }

    /// Reads the current level of this pin from the input register.
    pub fn value(&self) -> Result<bool, I2C::Error> {
        self.device.value(self.pin)
    }

    /// Reads the value most recently written to this pin's output latch.
    pub fn output_value(&self) -> Result<bool, I2C::Error> {
        self.device.output_value(self.pin)
    }

    /// Enables or disables input polarity inversion for this pin.
    pub fn set_polarity_inverted(&self, inverted: bool) -> Result<(), I2C::Error> {
        self.device.set_polarity_inverted(self.pin, inverted)
    }

    /// Reads whether input polarity inversion is enabled for this pin.
    pub fn polarity_inverted(&self) -> Result<bool, I2C::Error> {
        self.device.polarity_inverted(self.pin)
    }

    /// Configures the pull resistor of this pin.
    pub fn set_pull(&self, pull: Pull) -> Result<(), I2C::Error> {
        self.device.set_pull(self.pin, pull)
    }

    /// Reads the pull resistor configuration of this pin.
    pub fn pull(&self) -> Result<Pull, I2C::Error> {
        self.device.pull(self.pin)
    }

    /// Sets the output drive strength of this pin (0 through 3).
    pub fn set_drive_strength(&self, level: u8) -> Result<(), I2C::Error> {
        self.device.set_drive_strength(self.pin, level)
    }

    /// Reads the output drive strength of this pin.
    pub fn drive_strength(&self) -> Result<u8, I2C::Error> {
        self.device.drive_strength(self.pin)
    }

    /// Enables or disables the interrupt for this pin.
    pub fn set_interrupt_enabled(&self, enable: bool, latch: bool) -> Result<(), I2C::Error> {
        self.device.set_interrupt_enabled(self.pin, enable, latch)
    }

    /// Switches this pin between latching and non-latching interrupt
    /// operation.
    pub fn set_interrupt_latched(&self, latched: bool) -> Result<(), I2C::Error> {
        self.device.set_interrupt_latched(self.pin, latched)
    }

    /// Reads whether the interrupt for this pin is unmasked.
    pub fn interrupt_enabled(&self) -> Result<bool, I2C::Error> {
        self.device.interrupt_enabled(self.pin)
    }

    /// Configures the pin as an output driving `value`.
    ///
    /// The output latch is programmed before the direction flips so the pin
    /// never drives a stale level.
    pub fn switch_to_output(&self, value: bool) -> Result<(), I2C::Error> {
        self.set_value(value)?;
        self.set_direction(Direction::Output)
    }

    /// Configures the pin as an input with the given pull resistor and
    /// polarity.
    ///
    /// `Pull::None` works on every model; `Pull::Up`/`Pull::Down` need the
    /// corresponding capability.
    pub fn switch_to_input(&self, pull: Pull, invert_polarity: bool) -> Result<(), I2C::Error> {
        self.set_direction(Direction::Input)?;
        self.set_pull(pull)?;
        self.set_polarity_inverted(invert_polarity)
    }
}

impl<I2C: I2c> digital::ErrorType for ExpanderPin<'_, I2C> {
    type Error = crate::Error<I2C::Error>;
}

impl<I2C: I2c> digital::OutputPin for ExpanderPin<'_, I2C> {
    fn set_low(&mut self) -> Result<(), I2C::Error> {
        self.set_value(false)
    }

    fn set_high(&mut self) -> Result<(), I2C::Error> {
        self.set_value(true)
    }
}

impl<I2C: I2c> digital::StatefulOutputPin for ExpanderPin<'_, I2C> {
    fn is_set_high(&mut self) -> Result<bool, I2C::Error> {
        self.output_value()
    }

    fn is_set_low(&mut self) -> Result<bool, I2C::Error> {
        self.output_value().map(|v| !v)
    }
}

impl<I2C: I2c> digital::InputPin for ExpanderPin<'_, I2C> {
    fn is_high(&mut self) -> Result<bool, I2C::Error> {
        self.value()
    }

    fn is_low(&mut self) -> Result<bool, I2C::Error> {
        self.value().map(|v| !v)
    }
}
