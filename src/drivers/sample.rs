//! Raw and scaled 3-axis samples

use ufmt::{uDisplay, uWrite, uwrite, Formatter};

use super::calibration::Offsets;
use crate::config::BURST_LEN;

/// Three signed axis counts as read from an X/Y/Z output block
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawSample {
    pub const SIZE: usize = BURST_LEN;

    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Subtract calibration offsets, staying in the raw-count domain.
    ///
    /// Wraps on overflow, like the 16-bit arithmetic on the device side.
    pub fn corrected(self, offsets: Offsets) -> Self {
        Self {
            x: self.x.wrapping_sub(offsets.x),
            y: self.y.wrapping_sub(offsets.y),
            z: self.z.wrapping_sub(offsets.z),
        }
    }

    /// Convert counts to physical units given the sensitivity in LSB per unit
    pub fn scaled(self, divisor: f32) -> Vec3 {
        Vec3 {
            x: self.x as f32 / divisor,
            y: self.y as f32 / divisor,
            z: self.z as f32 / divisor,
        }
    }
}

impl From<[u8; RawSample::SIZE]> for RawSample {
    fn from(data: [u8; RawSample::SIZE]) -> Self {
        Self {
            x: i16::from_be_bytes([data[0], data[1]]),
            y: i16::from_be_bytes([data[2], data[3]]),
            z: i16::from_be_bytes([data[4], data[5]]),
        }
    }
}

impl uDisplay for RawSample {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uwrite!(f, "X={} Y={} Z={}", self.x, self.y, self.z)
    }
}

/// 3-axis sensor data in physical units
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }
}
