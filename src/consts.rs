//! Register addresses and power-on default values for the supported chips.

/// Highest drive strength level (full strength).
pub(crate) const DRIVE_STRENGTH_MAX: u8 = 3;

// PCA9554: basic 8-bit expander.
pub(crate) mod pca9554 {
    pub const INPUT: u8 = 0x00;
    pub const OUTPUT: u8 = 0x01;
    pub const POLARITY: u8 = 0x02;
    pub const DIRECTION: u8 = 0x03;
}

// PCA9555: basic 16-bit expander. Each port register is a pair of 8-bit
// registers at consecutive addresses, transmitted low byte first.
pub(crate) mod pca9555 {
    pub const INPUT_0: u8 = 0x00;
    pub const OUTPUT_0: u8 = 0x02;
    pub const POLARITY_0: u8 = 0x04;
    pub const DIRECTION_0: u8 = 0x06;
}

// PCAL9554 additions. The drive-strength register holds 2 bits per pin and
// is therefore 16 bits even on this 8-pin chip.
pub(crate) mod pcal9554 {
    pub const OUTPUT_DRIVE: u8 = 0x40;
    pub const INPUT_LATCH: u8 = 0x42;
    pub const PULL_ENABLE: u8 = 0x43;
    pub const PULL_SELECT: u8 = 0x44;
    pub const IRQ_MASK: u8 = 0x45;
    pub const IRQ_STATUS: u8 = 0x46;
    pub const OUTPUT_PORT_CONFIG: u8 = 0x4F;
}

// PCAL9555 additions: one 16-bit drive-strength register per 8-pin bank,
// the rest are 16-bit pairs like the base registers.
pub(crate) mod pcal9555 {
    pub const OUTPUT_DRIVE_0: u8 = 0x40;
    pub const OUTPUT_DRIVE_1: u8 = 0x42;
    pub const INPUT_LATCH_0: u8 = 0x44;
    pub const PULL_ENABLE_0: u8 = 0x46;
    pub const PULL_SELECT_0: u8 = 0x48;
    pub const IRQ_MASK_0: u8 = 0x4A;
    pub const IRQ_STATUS_0: u8 = 0x4C;
    pub const OUTPUT_PORT_CONFIG: u8 = 0x4F;
}

// Documented power-on register values. 16-bit patterns are truncated to the
// low byte on the 8-bit models.
pub(crate) mod defaults {
    pub const OUTPUT: u16 = 0xFFFF;
    pub const POLARITY: u16 = 0x0000;
    pub const DIRECTION: u16 = 0xFFFF; // all pins input
    pub const OUTPUT_DRIVE: u16 = 0xFFFF; // full strength
    pub const INPUT_LATCH: u16 = 0x0000;
    pub const PULL_ENABLE: u16 = 0x0000;
    pub const PULL_SELECT: u16 = 0xFFFF;
    pub const IRQ_MASK: u16 = 0xFFFF; // all interrupts masked
    pub const OUTPUT_PORT_CONFIG: u8 = 0x00; // push-pull
}
