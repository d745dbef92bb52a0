//! TWI (I2C) register access
//!
//! Binds a blocking embedded-hal I2C bus to one 7-bit device address and
//! offers the register-level primitives the drivers are written against.
//! Reads use a repeated start between the register pointer write and the
//! data phase, so the bus is held for the whole transaction.

use core::fmt::Debug;
use embedded_hal::blocking::i2c::{Write, WriteRead};

use crate::error::Error;

/// Register access to a single device on a TWI bus
pub struct Twi<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C, E> Twi<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
    E: Debug,
{
    /// Bind `i2c` to the device at `address`
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// 7-bit address this bus handle talks to
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Write a single register
    pub fn write_reg(&mut self, reg: u8, val: u8) -> Result<(), Error<E>> {
        log_trace!("twi write {:#x} <- {:#x}", reg, val);
        self.i2c
            .write(self.address, &[reg, val])
            .map_err(Error::Bus)
    }

    /// Read a single register
    pub fn read_reg(&mut self, reg: u8) -> Result<u8, Error<E>> {
        let mut buf = [0u8; 1];
        self.read_regs(reg, &mut buf)?;
        Ok(buf[0])
    }

    /// Burst-read `buffer.len()` consecutive registers starting at `reg`
    pub fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c
            .write_read(self.address, &[reg], buffer)
            .map_err(Error::Bus)?;
        log_trace!("twi read {:#x} ({} bytes)", reg, buffer.len());
        Ok(())
    }

    /// Read-modify-write: clear the bits in `mask`, then set `bits & mask`.
    ///
    /// The register is always written back, even if the value is unchanged.
    pub fn modify_reg(&mut self, reg: u8, mask: u8, bits: u8) -> Result<u8, Error<E>> {
        let current = self.read_reg(reg)?;
        let updated = (current & !mask) | (bits & mask);
        self.write_reg(reg, updated)?;
        Ok(updated)
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}
