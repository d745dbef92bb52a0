//! Per-chip description tables
//!
//! The protocol translation in [`Imu`](super::Imu) is written once; what
//! differs between supported chips lives here as data.

/// Register addresses the driver touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Registers {
    pub pwr_mgmt_1: u8,
    pub who_am_i: u8,
    pub user_ctrl: u8,
    pub gyro_config: u8,
    pub accel_config: u8,
    /// First of six gyro output bytes (X/Y/Z, high byte first)
    pub gyro_xout_h: u8,
    /// First of six accel output bytes (X/Y/Z, high byte first)
    pub accel_xout_h: u8,
}

/// Static description of a supported IMU chip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Device {
    pub name: &'static str,
    /// Values the identity register may legitimately hold
    pub identities: &'static [u8],
    pub registers: Registers,
    /// LSB per deg/s, indexed by gyro full-scale selector
    pub gyro_divisors: [f32; 4],
    /// LSB per g, indexed by accel full-scale selector
    pub accel_divisors: [f32; 4],
}

impl Device {
    /// True if `id` is one of the identity bytes listed for this chip
    pub fn accepts_identity(&self, id: u8) -> bool {
        self.identities.contains(&id)
    }
}
