//! Byte-level register transport over the I2C bus collaborator.

use embedded_hal::i2c::I2c;
use log::trace;

use crate::error::{Error, Result};
use crate::registers::PortWidth;

/// Register transport bound to one bus address.
///
/// Owns a small scratch buffer so register writes need no allocation. The
/// buffer belongs to this device alone; callers serialize access through the
/// device lock.
#[derive(Debug)]
pub(crate) struct RegisterTransport<I2C> {
    i2c: I2C,
    address: u8,
    buf: [u8; 3],
}

impl<I2C> RegisterTransport<I2C> {
    pub(crate) fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buf: [0; 3],
        }
    }

    pub(crate) fn address(&self) -> u8 {
        self.address
    }

    pub(crate) fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterTransport<I2C> {
    /// Reads an 8-bit register.
    pub(crate) fn read_u8(&mut self, reg: u8) -> Result<u8, I2C::Error> {
        self.buf[0] = reg;
        let mut data = [0u8; 1];
        self.i2c
            .write_read(self.address, &self.buf[..1], &mut data)
            .map_err(Error::Bus)?;
        trace!("read reg 0x{:02X} = 0x{:02X}", reg, data[0]);
        Ok(data[0])
    }

    /// Writes an 8-bit register.
    pub(crate) fn write_u8(&mut self, reg: u8, value: u8) -> Result<(), I2C::Error> {
        self.buf[0] = reg;
        self.buf[1] = value;
        trace!("write reg 0x{:02X} = 0x{:02X}", reg, value);
        self.i2c
            .write(self.address, &self.buf[..2])
            .map_err(Error::Bus)
    }

    /// Reads a 16-bit register transmitted as two consecutive addresses,
    /// low byte first.
    pub(crate) fn read_u16le(&mut self, reg: u8) -> Result<u16, I2C::Error> {
        self.buf[0] = reg;
        let mut data = [0u8; 2];
        self.i2c
            .write_read(self.address, &self.buf[..1], &mut data)
            .map_err(Error::Bus)?;
        let value = u16::from_le_bytes(data);
        trace!("read reg 0x{:02X} = 0x{:04X}", reg, value);
        Ok(value)
    }

    /// Writes a 16-bit register, low byte first.
    pub(crate) fn write_u16le(&mut self, reg: u8, value: u16) -> Result<(), I2C::Error> {
        let [lo, hi] = value.to_le_bytes();
        self.buf = [reg, lo, hi];
        trace!("write reg 0x{:02X} = 0x{:04X}", reg, value);
        self.i2c.write(self.address, &self.buf).map_err(Error::Bus)
    }

    /// Reads a port-wide register at the model's width, widened to `u16`.
    pub(crate) fn read_port(&mut self, reg: u8, width: PortWidth) -> Result<u16, I2C::Error> {
        match width {
            PortWidth::Eight => self.read_u8(reg).map(u16::from),
            PortWidth::Sixteen => self.read_u16le(reg),
        }
    }

    /// Writes a port-wide register at the model's width. The value is
    /// truncated to the low byte on 8-bit models.
    pub(crate) fn write_port(
        &mut self,
        reg: u8,
        width: PortWidth,
        value: u16,
    ) -> Result<(), I2C::Error> {
        match width {
            PortWidth::Eight => self.write_u8(reg, value as u8),
            PortWidth::Sixteen => self.write_u16le(reg, value),
        }
    }
}
