pub mod calibration;
pub mod device;
pub mod imu;
pub mod mpu6050;
pub mod range;
pub mod sample;

pub use calibration::Offsets;
pub use device::{Device, Registers};
pub use imu::Imu;
pub use mpu6050::MPU6050;
pub use range::{AccelRange, GyroRange};
pub use sample::{RawSample, Vec3};
