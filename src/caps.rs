//! Optional-feature flags advertised by each supported chip model.

use std::fmt;

/// An optional hardware feature that an expander model may or may not
/// provide.
///
/// The basic PCA models only support polarity inversion; the PCAL models add
/// the full set. Operations that need a capability the chip does not have
/// fail with [`Error::UnsupportedCapability`](crate::Error::UnsupportedCapability)
/// before touching the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Capability {
    /// Internal pull-up resistors.
    PullUp = 0,
    /// Internal pull-down resistors.
    PullDown = 1,
    /// Per-pin input polarity inversion.
    InvertPolarity = 2,
    /// Per-bank push-pull / open-drain output stage selection.
    DriveMode = 3,
    /// Per-pin output drive strength selection (four levels).
    DriveStrength = 4,
    /// Latching interrupt operation, including the interrupt mask and
    /// status registers.
    Latching = 5,
}

impl Capability {
    pub(crate) const ALL: [Capability; 6] = [
        Capability::PullUp,
        Capability::PullDown,
        Capability::InvertPolarity,
        Capability::DriveMode,
        Capability::DriveStrength,
        Capability::Latching,
    ];

    #[inline]
    const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// The set of capabilities a chip model provides.
///
/// Fixed per model at construction and never mutated afterwards.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Capabilities(u8);

impl Capabilities {
    /// The empty set.
    pub const NONE: Capabilities = Capabilities(0);

    /// Capability set of the basic PCA9554/PCA9555 models.
    pub(crate) const BASIC: Capabilities = Capabilities::NONE.with(Capability::InvertPolarity);

    /// Capability set of the extended PCAL9554/PCAL9555 models.
    pub(crate) const EXTENDED: Capabilities = Capabilities::BASIC
        .with(Capability::PullUp)
        .with(Capability::PullDown)
        .with(Capability::DriveMode)
        .with(Capability::DriveStrength)
        .with(Capability::Latching);

    pub(crate) const fn single(cap: Capability) -> Capabilities {
        Capabilities(cap.mask())
    }

    pub(crate) const fn with(self, cap: Capability) -> Capabilities {
        Capabilities(self.0 | cap.mask())
    }

    /// Returns `true` if the set contains `cap`.
    #[inline]
    pub const fn has(self, cap: Capability) -> bool {
        self.0 & cap.mask() != 0
    }

    /// Iterates over the capabilities in the set.
    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL.into_iter().filter(move |c| self.has(*c))
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("none");
        }
        let mut first = true;
        for cap in self.iter() {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "{cap:?}")?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Capabilities({self})")
    }
}

impl From<Capability> for Capabilities {
    fn from(cap: Capability) -> Self {
        Capabilities::single(cap)
    }
}
