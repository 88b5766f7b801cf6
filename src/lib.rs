//! # pca95xx
//!
//! A Rust driver for the PCA9554/PCA9555 and PCAL9554/PCAL9555 families of
//! I2C GPIO expanders, built on the `embedded-hal` 1.0 I2C traits.
//!
//! ## Features
//!
//! *   One device handle type ([`Pca95xx`]) covering all four chip models,
//!     driven by a per-model register table ([`ChipModel`]).
//! *   Per-pin views ([`ExpanderPin`]) with direction, value, polarity,
//!     pull resistor, drive strength and interrupt control.
//! *   `embedded-hal` digital pin traits (`InputPin`, `OutputPin`,
//!     `StatefulOutputPin`) implemented on the pin view, so expander pins
//!     drop into code written for native GPIOs.
//! *   Capability negotiation: operations a chip model cannot perform fail
//!     with [`Error::UnsupportedCapability`] before any bus traffic instead
//!     of silently doing nothing.
//! *   Software reset to the documented power-on register values
//!     ([`Pca95xx::reset_to_defaults`]).
//! *   Interrupt status decoding ([`Pca95xx::asserted_interrupt_pins`]) and
//!     per-pin latching control on the PCAL models.
//!
//! ## Chip support
//!
//! | Model | Pins | Extras |
//! |---|---|---|
//! | PCA9554 | 8 | polarity inversion |
//! | PCA9555 | 16 | polarity inversion |
//! | PCAL9554 | 8 | pulls, drive strength, drive mode, latching interrupts |
//! | PCAL9555 | 16 | pulls, drive strength, drive mode, latching interrupts |
//!
//! The 16-pin models use register pairs transmitted little-endian; the
//! driver handles the width difference internally, so pin-level code is
//! identical across models.
//!
//! ## Usage
//!
//! ```no_run
//! use linux_embedded_hal::I2cdev;
//! use pca95xx::{Pca95xx, Pull};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let i2c = I2cdev::new("/dev/i2c-1")?;
//!     let expander = Pca95xx::pcal9555(i2c, 0x20);
//!     expander.reset_to_defaults()?;
//!
//!     let led = expander.pin(4)?;
//!     led.switch_to_output(true)?;
//!
//!     let button = expander.pin(12)?;
//!     button.switch_to_input(Pull::Up, false)?;
//!     if button.value()? {
//!         led.set_value(false)?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! A [`Pca95xx`] serializes all register access through an internal lock, so
//! the handle can be shared between threads (`&Pca95xx` is enough for every
//! operation) and each read-modify-write sequence reaches the bus as one
//! uninterrupted read/write pair. Sharing the *bus* between several chips is
//! the bus implementation's business, e.g. via `embedded-hal-bus`.
//!
//! ## Interrupts
//!
//! The PCAL models can unmask per-pin interrupts and optionally latch the
//! triggering input value until it is read. Configuring the mask or latch
//! never performs the clearing read itself; call
//! [`Pca95xx::read_input_port`] (or read any pin's value) when a pending
//! latched interrupt should be discharged. See the `interrupt_poll` demo.

mod bus;
mod caps;
mod consts;
mod device;
mod error;
pub mod gpio;
mod interrupt;
mod pcal;
mod pin;
mod registers;

pub use caps::{Capabilities, Capability};
pub use device::{ChipModel, Pca95xx};
pub use error::{Error, Result};
pub use gpio::{Direction, DriveMode, Pull};
pub use pin::ExpanderPin;
