//! Configuration constants for the MPU6050 driver

/// Bus address with the AD0 pin tied low
pub const ADDRESS_AD0_LOW: u8 = 0x68;

/// Bus address with the AD0 pin tied high
pub const ADDRESS_AD0_HIGH: u8 = 0x69;

/// Samples averaged by a calibration pass when the caller has no preference
pub const DEFAULT_CALIBRATION_SAMPLES: u16 = 100;

/// Conversion from g to m/s^2 applied to accelerometer samples
pub const STANDARD_GRAVITY: f32 = 9.81;

/// PWR_MGMT_1 value that clears the sleep bit and selects the internal clock
pub const WAKE_VALUE: u8 = 0x00;

/// Length of an X/Y/Z burst read (three big-endian 16-bit words)
pub const BURST_LEN: usize = 6;

/// Identity byte read back when nothing drives the bus
pub const NO_DEVICE_ID: u8 = 0xFF;
