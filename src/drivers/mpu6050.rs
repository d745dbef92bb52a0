//! MPU6050 6-axis IMU description

use core::fmt::Debug;
use embedded_hal::blocking::i2c::{Write, WriteRead};

use super::device::{Device, Registers};
use super::Imu;
use crate::config::{ADDRESS_AD0_HIGH, ADDRESS_AD0_LOW};

// MPU6050 registers
pub const REG_USER_CTRL: u8 = 0x6A;
pub const REG_PWR_MGMT_1: u8 = 0x6B;
pub const REG_WHO_AM_I: u8 = 0x75;
pub const REG_GYRO_CONFIG: u8 = 0x1B;
pub const REG_ACCEL_CONFIG: u8 = 0x1C;
pub const REG_ACCEL_XOUT_H: u8 = 0x3B;
pub const REG_GYRO_XOUT_H: u8 = 0x43;

/// WHO_AM_I reports the bus address the part answers on
const IDENTITIES: [u8; 2] = [ADDRESS_AD0_LOW, ADDRESS_AD0_HIGH];

pub const MPU6050: Device = Device {
    name: "MPU6050",
    identities: &IDENTITIES,
    registers: Registers {
        pwr_mgmt_1: REG_PWR_MGMT_1,
        who_am_i: REG_WHO_AM_I,
        user_ctrl: REG_USER_CTRL,
        gyro_config: REG_GYRO_CONFIG,
        accel_config: REG_ACCEL_CONFIG,
        gyro_xout_h: REG_GYRO_XOUT_H,
        accel_xout_h: REG_ACCEL_XOUT_H,
    },
    gyro_divisors: [131.0, 65.5, 32.8, 16.4],
    accel_divisors: [16384.0, 8192.0, 4096.0, 2048.0],
};

impl<I2C, E> Imu<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
    E: Debug,
{
    /// Create an MPU6050 driver at `address` (0x68 or 0x69)
    pub fn mpu6050(i2c: I2C, address: u8) -> Self {
        Self::new(i2c, address, &MPU6050)
    }
}
