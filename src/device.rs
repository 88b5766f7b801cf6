//! Device handle, chip model table and power-on reset.

use std::sync::{Mutex, MutexGuard};

use embedded_hal::i2c::I2c;
use log::debug;

use crate::bus::RegisterTransport;
use crate::caps::{Capabilities, Capability};
use crate::consts;
use crate::error::{self, Error, Result};
use crate::pin::ExpanderPin;
use crate::registers::{
    ExtendedRegs, RegisterMap, PCA9554_MAP, PCA9555_MAP, PCAL9554_MAP, PCAL9555_MAP,
};

/// The supported chip models.
///
/// The basic models (PCA9554/PCA9555) provide direction, output, input and
/// polarity registers; the extended models (PCAL9554/PCAL9555) add pull
/// resistors, drive strength, per-bank drive mode and maskable latching
/// interrupts. The two members of each pair differ only in pin count and
/// register width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChipModel {
    /// PCA9554: basic, 8 pins.
    Pca9554,
    /// PCA9555: basic, 16 pins.
    Pca9555,
    /// PCAL9554: extended, 8 pins.
    Pcal9554,
    /// PCAL9555: extended, 16 pins.
    Pcal9555,
}

impl ChipModel {
    pub(crate) fn register_map(self) -> &'static RegisterMap {
        match self {
            ChipModel::Pca9554 => &PCA9554_MAP,
            ChipModel::Pca9555 => &PCA9555_MAP,
            ChipModel::Pcal9554 => &PCAL9554_MAP,
            ChipModel::Pcal9555 => &PCAL9555_MAP,
        }
    }

    /// Highest valid pin index for this model (pins are zero-indexed).
    pub fn max_pin(self) -> u8 {
        self.register_map().max_pin
    }

    /// Capability set of this model.
    pub fn capabilities(self) -> Capabilities {
        self.register_map().caps
    }
}

/// A handle to one expander chip on the bus.
///
/// All register traffic for the chip goes through an internal lock, so a
/// `Pca95xx` can be shared between threads (it is `Sync` whenever the bus
/// type is `Send`) and every read-modify-write sequence hits the bus as one
/// uninterrupted read/write pair. Register values are never cached: each
/// getter is a live bus transaction, and writes do not read back.
#[derive(Debug)]
pub struct Pca95xx<I2C> {
    transport: Mutex<RegisterTransport<I2C>>,
    model: ChipModel,
    map: &'static RegisterMap,
}

impl<I2C> Pca95xx<I2C> {
    /// Creates a handle for a chip of the given model at `address`.
    ///
    /// No bus traffic is issued; the physical chip keeps whatever register
    /// state it had. Call [`reset_to_defaults`](Self::reset_to_defaults) for
    /// a defined starting point.
    pub fn new(i2c: I2C, address: u8, model: ChipModel) -> Self {
        Self {
            transport: Mutex::new(RegisterTransport::new(i2c, address)),
            model,
            map: model.register_map(),
        }
    }

    /// Creates a handle for a PCA9554 at `address`.
    pub fn pca9554(i2c: I2C, address: u8) -> Self {
        Self::new(i2c, address, ChipModel::Pca9554)
    }

    /// Creates a handle for a PCA9555 at `address`.
    pub fn pca9555(i2c: I2C, address: u8) -> Self {
        Self::new(i2c, address, ChipModel::Pca9555)
    }

    /// Creates a handle for a PCAL9554 at `address`.
    pub fn pcal9554(i2c: I2C, address: u8) -> Self {
        Self::new(i2c, address, ChipModel::Pcal9554)
    }

    /// Creates a handle for a PCAL9555 at `address`.
    pub fn pcal9555(i2c: I2C, address: u8) -> Self {
        Self::new(i2c, address, ChipModel::Pcal9555)
    }

    /// The chip model this handle was constructed for.
    pub fn model(&self) -> ChipModel {
        self.model
    }

    /// The capability set of this chip model.
    pub fn capabilities(&self) -> Capabilities {
        self.map.caps
    }

    /// Returns `true` if this chip model provides `cap`.
    pub fn supports(&self, cap: Capability) -> bool {
        self.map.caps.has(cap)
    }

    /// Highest valid pin index (pins are zero-indexed).
    pub fn max_pin(&self) -> u8 {
        self.map.max_pin
    }

    /// The bus address this handle talks to.
    pub fn address(&self) -> u8 {
        self.transport().address()
    }

    /// Consumes the handle and hands the bus back.
    pub fn release(self) -> I2C {
        self.transport
            .into_inner()
            .unwrap_or_else(|e| e.into_inner())
            .release()
    }

    // The transport holds no logical state a panicked holder could corrupt,
    // so a poisoned lock is recovered rather than propagated.
    pub(crate) fn transport(&self) -> MutexGuard<'_, RegisterTransport<I2C>> {
        self.transport.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn map(&self) -> &'static RegisterMap {
        self.map
    }
}

impl<I2C: I2c> Pca95xx<I2C> {
    /// Returns a view of a single pin.
    ///
    /// Any number of pin views may coexist, including for the same pin; all
    /// of them funnel their register traffic through this handle's lock.
    pub fn pin(&self, pin: u8) -> Result<ExpanderPin<'_, I2C>, I2C::Error> {
        self.check_pin(pin)?;
        Ok(ExpanderPin::new(self, pin))
    }

    /// Writes the documented power-on value to every writable register.
    ///
    /// Basic registers first (output, polarity, direction), then the
    /// extended block in the order the datasheet lists for bring-up:
    /// drive strength, input latch, pull enable, pull select, interrupt
    /// mask, output port configuration.
    pub fn reset_to_defaults(&self) -> Result<(), I2C::Error> {
        debug!(
            "{:?} @ 0x{:02X}: resetting to power-on defaults",
            self.model,
            self.address()
        );
        let map = self.map;
        let mut bus = self.transport();
        bus.write_port(map.output, map.width, consts::defaults::OUTPUT)?;
        bus.write_port(map.polarity, map.width, consts::defaults::POLARITY)?;
        bus.write_port(map.direction, map.width, consts::defaults::DIRECTION)?;
        if let Some(ext) = map.extended.as_ref() {
            for bank in 0..map.banks() {
                bus.write_u16le(ext.drive[bank as usize], consts::defaults::OUTPUT_DRIVE)?;
            }
            bus.write_port(ext.input_latch, map.width, consts::defaults::INPUT_LATCH)?;
            bus.write_port(ext.pull_enable, map.width, consts::defaults::PULL_ENABLE)?;
            bus.write_port(ext.pull_select, map.width, consts::defaults::PULL_SELECT)?;
            bus.write_port(ext.irq_mask, map.width, consts::defaults::IRQ_MASK)?;
            bus.write_u8(ext.output_config, consts::defaults::OUTPUT_PORT_CONFIG)?;
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn check_pin(&self, pin: u8) -> Result<(), I2C::Error> {
        if pin > self.map.max_pin {
            Err(Error::InvalidPin {
                pin,
                max: self.map.max_pin,
            })
        } else {
            Ok(())
        }
    }

    /// Looks up the extended register block, failing with the capability
    /// that motivated the access if this model is a basic one.
    pub(crate) fn extended_regs(
        &self,
        required: Capability,
    ) -> Result<&'static ExtendedRegs, I2C::Error> {
        match self.map.extended {
            Some(ref ext) if self.map.caps.has(required) => Ok(ext),
            _ => Err(error::unsupported(required)),
        }
    }

    /// Read-modify-write of a port-wide register: exactly one read followed
    /// by exactly one write, under the caller's lock guard.
    pub(crate) fn update_port(
        bus: &mut RegisterTransport<I2C>,
        reg: u8,
        width: crate::registers::PortWidth,
        set: u16,
        clear: u16,
    ) -> Result<u16, I2C::Error> {
        let current = bus.read_port(reg, width)?;
        let new = (current | set) & !clear;
        bus.write_port(reg, width, new)?;
        Ok(new)
    }
}

/// Single-bit mask for a pin index within a port-wide register.
#[inline]
pub(crate) fn pin_mask(pin: u8) -> u16 {
    1u16 << pin
}
