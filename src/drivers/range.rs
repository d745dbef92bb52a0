//! Full-scale range selectors
//!
//! Both config registers keep the selector in bits 3-4 (FS_SEL / AFS_SEL).

use ufmt::{uDisplay, uWrite, uwrite, Formatter};

use super::device::Device;

/// Bits 3-4 of GYRO_CONFIG / ACCEL_CONFIG
pub const FS_SEL_MASK: u8 = 0x18;
pub const FS_SEL_SHIFT: u8 = 3;

/// Gyroscope full-scale range
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GyroRange {
    #[default]
    Dps250 = 0,  // ±250°/s
    Dps500 = 1,  // ±500°/s
    Dps1000 = 2, // ±1000°/s
    Dps2000 = 3, // ±2000°/s
}

impl GyroRange {
    pub const ALL: [GyroRange; 4] = [
        GyroRange::Dps250,
        GyroRange::Dps500,
        GyroRange::Dps1000,
        GyroRange::Dps2000,
    ];

    /// Selector value 0-3
    pub fn selector(self) -> u8 {
        self as u8
    }

    /// Selector positioned for GYRO_CONFIG
    pub fn bits(self) -> u8 {
        self.selector() << FS_SEL_SHIFT
    }

    /// Decode the selector from a raw GYRO_CONFIG value
    pub fn from_bits(reg: u8) -> Self {
        match (reg & FS_SEL_MASK) >> FS_SEL_SHIFT {
            0 => GyroRange::Dps250,
            1 => GyroRange::Dps500,
            2 => GyroRange::Dps1000,
            _ => GyroRange::Dps2000,
        }
    }

    /// LSB per deg/s on `device`
    pub fn divisor(self, device: &Device) -> f32 {
        device.gyro_divisors[self as usize]
    }

    /// Upper bound of the measurable rate in deg/s
    pub fn full_scale_dps(self) -> u16 {
        250 << self.selector()
    }
}

impl TryFrom<u8> for GyroRange {
    type Error = u8;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            0..=3 => Ok(Self::ALL[selector as usize]),
            other => Err(other),
        }
    }
}

impl uDisplay for GyroRange {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uwrite!(f, "+/-{}dps", self.full_scale_dps())
    }
}

/// Accelerometer full-scale range
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AccelRange {
    #[default]
    G2 = 0,  // ±2g
    G4 = 1,  // ±4g
    G8 = 2,  // ±8g
    G16 = 3, // ±16g
}

impl AccelRange {
    pub const ALL: [AccelRange; 4] = [
        AccelRange::G2,
        AccelRange::G4,
        AccelRange::G8,
        AccelRange::G16,
    ];

    pub fn selector(self) -> u8 {
        self as u8
    }

    pub fn bits(self) -> u8 {
        self.selector() << FS_SEL_SHIFT
    }

    pub fn from_bits(reg: u8) -> Self {
        match (reg & FS_SEL_MASK) >> FS_SEL_SHIFT {
            0 => AccelRange::G2,
            1 => AccelRange::G4,
            2 => AccelRange::G8,
            _ => AccelRange::G16,
        }
    }

    /// LSB per g on `device`
    pub fn divisor(self, device: &Device) -> f32 {
        device.accel_divisors[self as usize]
    }

    pub fn full_scale_g(self) -> u8 {
        2 << self.selector()
    }
}

impl TryFrom<u8> for AccelRange {
    type Error = u8;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            0..=3 => Ok(Self::ALL[selector as usize]),
            other => Err(other),
        }
    }
}

impl uDisplay for AccelRange {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uwrite!(f, "+/-{}g", self.full_scale_g())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::mpu6050::MPU6050;

    #[test]
    fn selector_encoding_matches_register_layout() {
        assert_eq!(GyroRange::Dps250.bits(), 0b0000_0000);
        assert_eq!(GyroRange::Dps500.bits(), 0b0000_1000);
        assert_eq!(GyroRange::Dps1000.bits(), 0b0001_0000);
        assert_eq!(GyroRange::Dps2000.bits(), 0b0001_1000);
        assert_eq!(AccelRange::G16.bits(), 0b0001_1000);
    }

    #[test]
    fn decode_ignores_neighbouring_bits() {
        for range in GyroRange::ALL {
            assert_eq!(GyroRange::from_bits(range.bits() | 0b1110_0111), range);
        }
        for range in AccelRange::ALL {
            assert_eq!(AccelRange::from_bits(range.bits() | 0b1110_0111), range);
        }
    }

    #[test]
    fn raw_selectors() {
        assert_eq!(GyroRange::try_from(2), Ok(GyroRange::Dps1000));
        assert_eq!(AccelRange::try_from(3), Ok(AccelRange::G16));
        assert_eq!(GyroRange::try_from(4), Err(4));
        assert_eq!(AccelRange::try_from(0xFF), Err(0xFF));
    }

    #[test]
    fn divisor_tables() {
        let gyro: [f32; 4] = GyroRange::ALL.map(|r| r.divisor(&MPU6050));
        assert_eq!(gyro, [131.0, 65.5, 32.8, 16.4]);
        let accel: [f32; 4] = AccelRange::ALL.map(|r| r.divisor(&MPU6050));
        assert_eq!(accel, [16384.0, 8192.0, 4096.0, 2048.0]);
    }

    #[test]
    fn full_scale_values() {
        assert_eq!(GyroRange::ALL.map(GyroRange::full_scale_dps), [250, 500, 1000, 2000]);
        assert_eq!(AccelRange::ALL.map(AccelRange::full_scale_g), [2, 4, 8, 16]);
    }
}
