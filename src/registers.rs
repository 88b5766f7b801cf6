//! Canonical register layout records for the four supported chip models.
//!
//! Every model is described by one [`RegisterMap`] constant; the rest of the
//! crate dispatches on these records instead of on per-chip code paths.

use crate::caps::Capabilities;
use crate::consts;

/// Width of the port-wide registers (input, output, polarity, direction and
/// the extended per-pin registers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PortWidth {
    Eight,
    Sixteen,
}

/// Registers only present on the PCAL models.
#[derive(Debug)]
pub(crate) struct ExtendedRegs {
    /// One 16-bit drive-strength register per 8-pin bank (2 bits per pin).
    /// 8-pin models only use the first entry.
    pub drive: [u8; 2],
    pub input_latch: u8,
    pub pull_enable: u8,
    pub pull_select: u8,
    pub irq_mask: u8,
    pub irq_status: u8,
    /// Always 8 bits wide; one drive-mode bit per bank.
    pub output_config: u8,
}

/// Fixed register layout, pin range and capability set of one chip model.
#[derive(Debug)]
pub(crate) struct RegisterMap {
    pub max_pin: u8,
    pub width: PortWidth,
    pub caps: Capabilities,
    pub input: u8,
    pub output: u8,
    pub polarity: u8,
    pub direction: u8,
    pub extended: Option<ExtendedRegs>,
}

impl RegisterMap {
    /// Number of 8-pin banks on this model.
    pub(crate) fn banks(&self) -> u8 {
        (self.max_pin + 1) / 8
    }
}

pub(crate) static PCA9554_MAP: RegisterMap = RegisterMap {
    max_pin: 7,
    width: PortWidth::Eight,
    caps: Capabilities::BASIC,
    input: consts::pca9554::INPUT,
    output: consts::pca9554::OUTPUT,
    polarity: consts::pca9554::POLARITY,
    direction: consts::pca9554::DIRECTION,
    extended: None,
};

pub(crate) static PCA9555_MAP: RegisterMap = RegisterMap {
    max_pin: 15,
    width: PortWidth::Sixteen,
    caps: Capabilities::BASIC,
    input: consts::pca9555::INPUT_0,
    output: consts::pca9555::OUTPUT_0,
    polarity: consts::pca9555::POLARITY_0,
    direction: consts::pca9555::DIRECTION_0,
    extended: None,
};

pub(crate) static PCAL9554_MAP: RegisterMap = RegisterMap {
    max_pin: 7,
    width: PortWidth::Eight,
    caps: Capabilities::EXTENDED,
    input: consts::pca9554::INPUT,
    output: consts::pca9554::OUTPUT,
    polarity: consts::pca9554::POLARITY,
    direction: consts::pca9554::DIRECTION,
    extended: Some(ExtendedRegs {
        drive: [consts::pcal9554::OUTPUT_DRIVE, consts::pcal9554::OUTPUT_DRIVE],
        input_latch: consts::pcal9554::INPUT_LATCH,
        pull_enable: consts::pcal9554::PULL_ENABLE,
        pull_select: consts::pcal9554::PULL_SELECT,
        irq_mask: consts::pcal9554::IRQ_MASK,
        irq_status: consts::pcal9554::IRQ_STATUS,
        output_config: consts::pcal9554::OUTPUT_PORT_CONFIG,
    }),
};

pub(crate) static PCAL9555_MAP: RegisterMap = RegisterMap {
    max_pin: 15,
    width: PortWidth::Sixteen,
    caps: Capabilities::EXTENDED,
    input: consts::pca9555::INPUT_0,
    output: consts::pca9555::OUTPUT_0,
    polarity: consts::pca9555::POLARITY_0,
    direction: consts::pca9555::DIRECTION_0,
    extended: Some(ExtendedRegs {
        drive: [
            consts::pcal9555::OUTPUT_DRIVE_0,
            consts::pcal9555::OUTPUT_DRIVE_1,
        ],
        input_latch: consts::pcal9555::INPUT_LATCH_0,
        pull_enable: consts::pcal9555::PULL_ENABLE_0,
        pull_select: consts::pcal9555::PULL_SELECT_0,
        irq_mask: consts::pcal9555::IRQ_MASK_0,
        irq_status: consts::pcal9555::IRQ_STATUS_0,
        output_config: consts::pcal9555::OUTPUT_PORT_CONFIG,
    }),
};
