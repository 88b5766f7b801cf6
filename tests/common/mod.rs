//! Shared test support: an in-memory register model that behaves like a
//! PCA95xx-style chip on the bus (register pointer write, auto-incrementing
//! data phase).

use std::sync::{Arc, Mutex};

use embedded_hal::i2c::{ErrorType, I2c, Operation};

struct ChipState {
    regs: [u8; 256],
    pointer: usize,
}

impl Default for ChipState {
    fn default() -> Self {
        Self {
            regs: [0; 256],
            pointer: 0,
        }
    }
}

/// A fake chip with 256 byte-wide registers.
///
/// Clones share the same register file, so a clone kept by the test can
/// inspect what the driver wrote.
#[derive(Clone, Default)]
pub struct FakeChip {
    state: Arc<Mutex<ChipState>>,
}

#[allow(dead_code)]
impl FakeChip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reg(&self, addr: u8) -> u8 {
        self.state.lock().unwrap().regs[usize::from(addr)]
    }

    pub fn reg16(&self, addr: u8) -> u16 {
        let st = self.state.lock().unwrap();
        u16::from_le_bytes([
            st.regs[usize::from(addr)],
            st.regs[usize::from(addr) + 1],
        ])
    }

    pub fn set_reg(&self, addr: u8, value: u8) {
        self.state.lock().unwrap().regs[usize::from(addr)] = value;
    }

    pub fn set_reg16(&self, addr: u8, value: u16) {
        let mut st = self.state.lock().unwrap();
        let [lo, hi] = value.to_le_bytes();
        st.regs[usize::from(addr)] = lo;
        st.regs[usize::from(addr) + 1] = hi;
    }
}

impl ErrorType for FakeChip {
    type Error = core::convert::Infallible;
}

impl I2c for FakeChip {
    fn transaction(
        &mut self,
        _address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut st = self.state.lock().unwrap();
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    if let Some((&reg, data)) = bytes.split_first() {
                        st.pointer = usize::from(reg);
                        for &byte in data {
                            let p = st.pointer;
                            st.regs[p] = byte;
                            st.pointer = (p + 1) % 256;
                        }
                    }
                }
                Operation::Read(buffer) => {
                    for byte in buffer.iter_mut() {
                        let p = st.pointer;
                        *byte = st.regs[p];
                        st.pointer = (p + 1) % 256;
                    }
                }
            }
        }
        Ok(())
    }
}
