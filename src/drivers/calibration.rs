//! Offset calibration

use ufmt::{uDisplay, uWrite, uwrite, Formatter};

use super::sample::RawSample;

/// Per-axis bias in raw counts, subtracted from every reading
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Offsets {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Offsets {
    pub const SIZE: usize = 6;

    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Serialized form for storage (X, Y, Z, big-endian)
    pub fn to_be_bytes(self) -> [u8; Self::SIZE] {
        let [x0, x1] = self.x.to_be_bytes();
        let [y0, y1] = self.y.to_be_bytes();
        let [z0, z1] = self.z.to_be_bytes();
        [x0, x1, y0, y1, z0, z1]
    }

    pub fn from_be_bytes(bytes: [u8; Self::SIZE]) -> Self {
        let raw = RawSample::from(bytes);
        Self::new(raw.x, raw.y, raw.z)
    }
}

impl uDisplay for Offsets {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uwrite!(f, "X={} Y={} Z={}", self.x, self.y, self.z)
    }
}

/// Running per-axis sum of raw samples.
///
/// i64 sums cannot overflow for any `u16` sample count.
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    sum: [i64; 3],
    count: u32,
}

impl Accumulator {
    pub(crate) fn add(&mut self, sample: RawSample) {
        self.sum[0] += i64::from(sample.x);
        self.sum[1] += i64::from(sample.y);
        self.sum[2] += i64::from(sample.z);
        self.count += 1;
    }

    /// Truncating integer mean, `None` if nothing was added
    pub(crate) fn mean(&self) -> Option<Offsets> {
        if self.count == 0 {
            return None;
        }
        let n = i64::from(self.count);
        // The mean of i16 values always fits in i16
        Some(Offsets::new(
            (self.sum[0] / n) as i16,
            (self.sum[1] / n) as i16,
            (self.sum[2] / n) as i16,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_truncates_toward_zero() {
        let mut acc = Accumulator::default();
        acc.add(RawSample::new(100, 100, 100));
        acc.add(RawSample::new(102, 98, 101));
        acc.add(RawSample::new(99, 101, 99));
        acc.add(RawSample::new(103, 100, 100));
        assert_eq!(acc.mean(), Some(Offsets::new(101, 99, 100)));

        let mut acc = Accumulator::default();
        acc.add(RawSample::new(-3, 3, 0));
        acc.add(RawSample::new(-4, 4, 1));
        assert_eq!(acc.mean(), Some(Offsets::new(-3, 3, 0)));
    }

    #[test]
    fn empty_has_no_mean() {
        assert_eq!(Accumulator::default().mean(), None);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let mut acc = Accumulator::default();
        for _ in 0..u16::MAX {
            acc.add(RawSample::new(i16::MIN, i16::MAX, i16::MIN));
        }
        assert_eq!(acc.mean(), Some(Offsets::new(i16::MIN, i16::MAX, i16::MIN)));
    }

    #[test]
    fn persisted_form() {
        let offsets = Offsets::new(-2, 0x1234, 1);
        let bytes = offsets.to_be_bytes();
        assert_eq!(bytes, [0xFF, 0xFE, 0x12, 0x34, 0x00, 0x01]);
        assert_eq!(Offsets::from_be_bytes(bytes), offsets);
    }
}
