//! Interrupt masking, latching and status decoding (PCAL models).
//!
//! Latching behavior: on a non-latched pin the interrupt clears by itself if
//! the input reverts before the input register is read. A latched pin keeps
//! the triggering value in the input register and the interrupt line
//! asserted until that register is read, even if the physical input has
//! already reverted. None of the operations here perform that clearing read;
//! use [`Pca95xx::read_input_port`] (or any input read) when the pending
//! state should be discharged.

use embedded_hal::i2c::I2c;
use log::debug;

use crate::caps::Capability;
use crate::device::{pin_mask, Pca95xx};
use crate::error::Result;

impl<I2C: I2c> Pca95xx<I2C> {
    /// Enables or disables the interrupt for a single pin.
    ///
    /// Enabling with `latch` switches the pin to latching operation;
    /// enabling without it switches back to non-latching. Disabling only
    /// sets the mask bit and leaves the latch configuration alone.
    pub fn set_interrupt_enabled(
        &self,
        pin: u8,
        enable: bool,
        latch: bool,
    ) -> Result<(), I2C::Error> {
        self.check_pin(pin)?;
        let ext = self.extended_regs(Capability::Latching)?;
        debug!("pin {pin}: interrupt enable={enable} latch={latch}");
        let mask = pin_mask(pin);
        let map = self.map();
        let mut bus = self.transport();
        if enable {
            // 0 in the mask register unmasks the pin.
            Self::update_port(&mut bus, ext.irq_mask, map.width, 0, mask)?;
            if latch {
                Self::update_port(&mut bus, ext.input_latch, map.width, mask, 0)?;
            } else {
                Self::update_port(&mut bus, ext.input_latch, map.width, 0, mask)?;
            }
        } else {
            Self::update_port(&mut bus, ext.irq_mask, map.width, mask, 0)?;
        }
        Ok(())
    }

    /// Switches a pin between latching and non-latching interrupt operation
    /// without touching the interrupt mask or any pending state.
    pub fn set_interrupt_latched(&self, pin: u8, latched: bool) -> Result<(), I2C::Error> {
        self.check_pin(pin)?;
        let ext = self.extended_regs(Capability::Latching)?;
        debug!("pin {pin}: interrupt latched={latched}");
        let mask = pin_mask(pin);
        let map = self.map();
        let (set, clear) = if latched { (mask, 0) } else { (0, mask) };
        let mut bus = self.transport();
        Self::update_port(&mut bus, ext.input_latch, map.width, set, clear)?;
        Ok(())
    }

    /// Reads whether the interrupt for a single pin is currently unmasked.
    pub fn interrupt_enabled(&self, pin: u8) -> Result<bool, I2C::Error> {
        self.check_pin(pin)?;
        let ext = self.extended_regs(Capability::Latching)?;
        let map = self.map();
        let reg = self.transport().read_port(ext.irq_mask, map.width)?;
        Ok(reg & pin_mask(pin) == 0)
    }

    /// Returns the pins currently asserting the interrupt line, in ascending
    /// order.
    ///
    /// One status-register read; the status register is not clear-on-read,
    /// so calling this repeatedly is safe while an interrupt is pending.
    pub fn asserted_interrupt_pins(&self) -> Result<Vec<u8>, I2C::Error> {
        let ext = self.extended_regs(Capability::Latching)?;
        let map = self.map();
        let status = self.transport().read_port(ext.irq_status, map.width)?;
        Ok(asserted_pins(status, map.max_pin))
    }
}

/// Decodes a raw interrupt status value into the asserted pin indices.
pub(crate) fn asserted_pins(status: u16, max_pin: u8) -> Vec<u8> {
    (0..=max_pin).filter(|&p| status & pin_mask(p) != 0).collect()
}

#[cfg(test)]
mod tests {
    use super::asserted_pins;

    #[test]
    fn decodes_ascending() {
        assert_eq!(asserted_pins(0b0000_0101, 7), vec![0, 2]);
        assert_eq!(asserted_pins(0x8001, 15), vec![0, 15]);
    }

    #[test]
    fn empty_status_decodes_empty() {
        assert_eq!(asserted_pins(0x0000, 15), Vec::<u8>::new());
    }

    #[test]
    fn bits_above_max_pin_are_ignored() {
        assert_eq!(asserted_pins(0x8100, 7), Vec::<u8>::new());
    }
}
