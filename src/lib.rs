//! Blocking driver for MPU6050-class IMUs
//!
//! Wakes and identifies the chip, configures the gyro and accelerometer
//! full-scale ranges, averages rest-state offsets and converts raw register
//! bytes into deg/s and m/s^2. The bus is any blocking embedded-hal 0.2 I2C
//! implementation; the driver owns it until [`Imu::release`] is called.
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod logger;

pub mod config;
pub mod drivers;
pub mod error;
pub mod hal;
pub mod testing;

pub use drivers::{AccelRange, Device, GyroRange, Imu, Offsets, RawSample, Vec3, MPU6050};
pub use error::Error;
