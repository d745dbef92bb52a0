//! Gyroscope/accelerometer driver
//!
//! Translates between the register encodings of an MPU6050-class chip and
//! calibrated, unit-scaled samples. Chip specifics come from a [`Device`]
//! table; the bus is any blocking embedded-hal I2C implementation.
//!
//! Typical bring-up:
//!
//! ```ignore
//! let mut imu = Imu::mpu6050(i2c, ADDRESS_AD0_LOW);
//! imu.init(false)?;
//! imu.set_accel_range(AccelRange::G4)?;
//! imu.calibrate_gyro(DEFAULT_CALIBRATION_SAMPLES)?;
//! let rate = imu.read_gyro()?;
//! ```

use core::fmt::Debug;
use embedded_hal::blocking::i2c::{Write, WriteRead};

use super::calibration::{Accumulator, Offsets};
use super::device::Device;
use super::range::{AccelRange, GyroRange, FS_SEL_MASK};
use super::sample::{RawSample, Vec3};
use crate::config::{NO_DEVICE_ID, STANDARD_GRAVITY, WAKE_VALUE};
use crate::error::Error;
use crate::hal::Twi;

/// IMU driver bound to one device on the bus
pub struct Imu<I2C> {
    twi: Twi<I2C>,
    device: &'static Device,
    gyro_offsets: Offsets,
    accel_offsets: Offsets,
    gyro_range: GyroRange,
    accel_range: AccelRange,
}

impl<I2C, E> Imu<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
    E: Debug,
{
    /// Create a driver for `device` at the 7-bit `address`.
    ///
    /// No bus traffic happens until [`init`](Self::init). Offsets start at
    /// zero and the cached ranges at the power-on defaults.
    pub fn new(i2c: I2C, address: u8, device: &'static Device) -> Self {
        Self {
            twi: Twi::new(i2c, address),
            device,
            gyro_offsets: Offsets::default(),
            accel_offsets: Offsets::default(),
            gyro_range: GyroRange::default(),
            accel_range: AccelRange::default(),
        }
    }

    pub fn device(&self) -> &'static Device {
        self.device
    }

    pub fn address(&self) -> u8 {
        self.twi.address()
    }

    /// Wake the chip and check its identity register.
    ///
    /// Returns the identity byte. An all-ones byte means nothing answered and
    /// is always an error; any other byte the device table does not list is
    /// an error unless `bypass_check` is set.
    pub fn init(&mut self, bypass_check: bool) -> Result<u8, Error<E>> {
        let regs = self.device.registers;
        self.twi.write_reg(regs.pwr_mgmt_1, WAKE_VALUE)?;

        let id = self.twi.read_reg(regs.who_am_i)?;
        if id == NO_DEVICE_ID {
            log_error!("{}: no response at {:#x}", self.device.name, self.address());
            return Err(Error::NotPresent);
        }
        if !self.device.accepts_identity(id) {
            if !bypass_check {
                log_error!("{}: unexpected identity {:#x}", self.device.name, id);
                return Err(Error::UnknownIdentity(id));
            }
            log_warn!("{}: identity {:#x} accepted by bypass", self.device.name, id);
        }

        log_info!("{} ready at {:#x} (id {:#x})", self.device.name, self.address(), id);
        Ok(id)
    }

    /// Read the identity register
    pub fn who_am_i(&mut self) -> Result<u8, Error<E>> {
        self.twi.read_reg(self.device.registers.who_am_i)
    }

    /// Write the gyro full-scale range, keeping the other GYRO_CONFIG bits
    pub fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), Error<E>> {
        self.twi
            .modify_reg(self.device.registers.gyro_config, FS_SEL_MASK, range.bits())?;
        self.gyro_range = range;
        log_debug!("gyro range -> {}", range.full_scale_dps());
        Ok(())
    }

    /// Set the gyro range from a raw selector (0-3).
    ///
    /// Any other selector is ignored without touching the bus; the return
    /// value says whether the range was applied.
    pub fn set_gyro_range_selector(&mut self, selector: u8) -> Result<bool, Error<E>> {
        match GyroRange::try_from(selector) {
            Ok(range) => self.set_gyro_range(range).map(|()| true),
            Err(bad) => {
                log_warn!("ignoring gyro range selector {}", bad);
                Ok(false)
            }
        }
    }

    /// Read the gyro range back from the device
    pub fn get_gyro_range(&mut self) -> Result<GyroRange, Error<E>> {
        let reg = self.twi.read_reg(self.device.registers.gyro_config)?;
        let range = GyroRange::from_bits(reg);
        if range != self.gyro_range {
            log_warn!(
                "gyro range mismatch: device {} cached {}",
                range.selector(),
                self.gyro_range.selector()
            );
        }
        Ok(range)
    }

    /// Gyro range last written by this driver
    pub fn gyro_range(&self) -> GyroRange {
        self.gyro_range
    }

    /// Write the accel full-scale range, keeping the other ACCEL_CONFIG bits
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), Error<E>> {
        self.twi
            .modify_reg(self.device.registers.accel_config, FS_SEL_MASK, range.bits())?;
        self.accel_range = range;
        log_debug!("accel range -> {}", range.full_scale_g());
        Ok(())
    }

    /// Set the accel range from a raw selector (0-3); see
    /// [`set_gyro_range_selector`](Self::set_gyro_range_selector).
    pub fn set_accel_range_selector(&mut self, selector: u8) -> Result<bool, Error<E>> {
        match AccelRange::try_from(selector) {
            Ok(range) => self.set_accel_range(range).map(|()| true),
            Err(bad) => {
                log_warn!("ignoring accel range selector {}", bad);
                Ok(false)
            }
        }
    }

    pub fn get_accel_range(&mut self) -> Result<AccelRange, Error<E>> {
        let reg = self.twi.read_reg(self.device.registers.accel_config)?;
        let range = AccelRange::from_bits(reg);
        if range != self.accel_range {
            log_warn!(
                "accel range mismatch: device {} cached {}",
                range.selector(),
                self.accel_range.selector()
            );
        }
        Ok(range)
    }

    pub fn accel_range(&self) -> AccelRange {
        self.accel_range
    }

    /// Average `samples` raw gyro readings into the gyro offsets.
    ///
    /// The sensor must be at rest for the whole pass. On error the previous
    /// offsets are kept.
    pub fn calibrate_gyro(&mut self, samples: u16) -> Result<Offsets, Error<E>> {
        let offsets = self.average(self.device.registers.gyro_xout_h, samples)?;
        self.gyro_offsets = offsets;
        log_info!("gyro offsets {} {} {}", offsets.x, offsets.y, offsets.z);
        Ok(offsets)
    }

    /// Average `samples` raw accel readings into the accel offsets.
    ///
    /// The offsets absorb whatever the sensor sees during the pass, gravity
    /// included, so it must be held still in the reference orientation.
    pub fn calibrate_accel(&mut self, samples: u16) -> Result<Offsets, Error<E>> {
        let offsets = self.average(self.device.registers.accel_xout_h, samples)?;
        self.accel_offsets = offsets;
        log_info!("accel offsets {} {} {}", offsets.x, offsets.y, offsets.z);
        Ok(offsets)
    }

    pub fn gyro_offsets(&self) -> Offsets {
        self.gyro_offsets
    }

    /// Restore previously saved gyro offsets
    pub fn set_gyro_offsets(&mut self, offsets: Offsets) {
        self.gyro_offsets = offsets;
    }

    pub fn accel_offsets(&self) -> Offsets {
        self.accel_offsets
    }

    /// Restore previously saved accel offsets
    pub fn set_accel_offsets(&mut self, offsets: Offsets) {
        self.accel_offsets = offsets;
    }

    /// Uncorrected gyro counts
    pub fn read_gyro_raw(&mut self) -> Result<RawSample, Error<E>> {
        self.read_block(self.device.registers.gyro_xout_h)
    }

    /// Uncorrected accel counts
    pub fn read_accel_raw(&mut self) -> Result<RawSample, Error<E>> {
        self.read_block(self.device.registers.accel_xout_h)
    }

    /// Angular rate in deg/s
    pub fn read_gyro(&mut self) -> Result<Vec3, Error<E>> {
        let raw = self.read_gyro_raw()?;
        Ok(raw
            .corrected(self.gyro_offsets)
            .scaled(self.gyro_range.divisor(self.device)))
    }

    /// Acceleration in m/s^2
    pub fn read_accel(&mut self) -> Result<Vec3, Error<E>> {
        let raw = self.read_accel_raw()?;
        Ok(raw
            .corrected(self.accel_offsets)
            .scaled(self.accel_range.divisor(self.device))
            .scale(STANDARD_GRAVITY))
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.twi.release()
    }

    fn read_block(&mut self, reg: u8) -> Result<RawSample, Error<E>> {
        let mut data = [0u8; RawSample::SIZE];
        self.twi.read_regs(reg, &mut data)?;
        Ok(RawSample::from(data))
    }

    fn average(&mut self, reg: u8, samples: u16) -> Result<Offsets, Error<E>> {
        let mut acc = Accumulator::default();
        for _ in 0..samples {
            acc.add(self.read_block(reg)?);
        }
        acc.mean().ok_or(Error::NoSamples)
    }
}
