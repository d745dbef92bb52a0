use embedded_hal_mock::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use mpu6050_imu::config::{ADDRESS_AD0_LOW, STANDARD_GRAVITY};
use mpu6050_imu::drivers::mpu6050::{
    REG_ACCEL_CONFIG, REG_ACCEL_XOUT_H, REG_GYRO_CONFIG, REG_GYRO_XOUT_H, REG_PWR_MGMT_1,
    REG_WHO_AM_I,
};
use mpu6050_imu::{AccelRange, Error, GyroRange, Imu, Offsets, Vec3};

const ADDR: u8 = ADDRESS_AD0_LOW;

fn block(reg: u8, x: i16, y: i16, z: i16) -> I2cTransaction {
    let mut data = Vec::with_capacity(6);
    for v in [x, y, z] {
        data.extend_from_slice(&v.to_be_bytes());
    }
    I2cTransaction::write_read(ADDR, vec![reg], data)
}

#[test]
fn bring_up_calibrate_and_read_accel() {
    let expectations = [
        // init
        I2cTransaction::write(ADDR, vec![REG_PWR_MGMT_1, 0x00]),
        I2cTransaction::write_read(ADDR, vec![REG_WHO_AM_I], vec![0x68]),
        // select ±4g
        I2cTransaction::write_read(ADDR, vec![REG_ACCEL_CONFIG], vec![0x00]),
        I2cTransaction::write(ADDR, vec![REG_ACCEL_CONFIG, 0x08]),
        // four calibration samples
        block(REG_ACCEL_XOUT_H, 100, 100, 100),
        block(REG_ACCEL_XOUT_H, 102, 98, 101),
        block(REG_ACCEL_XOUT_H, 99, 101, 99),
        block(REG_ACCEL_XOUT_H, 103, 100, 100),
        // a reading equal to the bias
        block(REG_ACCEL_XOUT_H, 101, 99, 100),
        // and one 1g above it on Z
        block(REG_ACCEL_XOUT_H, 101, 99, 100 + 8192),
    ];
    let mut imu = Imu::mpu6050(I2cMock::new(&expectations), ADDR);

    assert_eq!(imu.init(false).unwrap(), 0x68);
    assert!(imu.set_accel_range_selector(1).unwrap());
    assert_eq!(imu.accel_range(), AccelRange::G4);

    let offsets = imu.calibrate_accel(4).unwrap();
    assert_eq!(offsets, Offsets::new(101, 99, 100));

    assert_eq!(imu.read_accel().unwrap(), Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(imu.read_accel().unwrap(), Vec3::new(0.0, 0.0, STANDARD_GRAVITY));

    imu.release().done();
}

#[test]
fn gyro_range_state_follows_the_device() {
    let expectations = [
        I2cTransaction::write_read(ADDR, vec![REG_GYRO_CONFIG], vec![0b0000_0111]),
        I2cTransaction::write(ADDR, vec![REG_GYRO_CONFIG, 0b0001_1111]),
        I2cTransaction::write_read(ADDR, vec![REG_GYRO_CONFIG], vec![0b0001_1111]),
        block(REG_GYRO_XOUT_H, 164, -328, 0),
    ];
    let mut imu = Imu::mpu6050(I2cMock::new(&expectations), ADDR);

    imu.set_gyro_range(GyroRange::Dps2000).unwrap();
    // selector 9 is ignored and causes no bus traffic
    assert!(!imu.set_gyro_range_selector(9).unwrap());
    assert_eq!(imu.get_gyro_range().unwrap(), GyroRange::Dps2000);

    let v = imu.read_gyro().unwrap();
    assert_eq!(v, Vec3::new(164.0 / 16.4, -328.0 / 16.4, 0.0));

    imu.release().done();
}

#[test]
fn saved_offsets_survive_a_new_driver() {
    let expectations = [
        block(REG_GYRO_XOUT_H, -5, 3, 12),
        block(REG_GYRO_XOUT_H, -5, 3, 12),
    ];
    let mut imu = Imu::mpu6050(I2cMock::new(&expectations), ADDR);
    let stored = imu.calibrate_gyro(1).unwrap().to_be_bytes();
    let bus = imu.release();

    let mut imu = Imu::mpu6050(bus, ADDR);
    imu.set_gyro_offsets(Offsets::from_be_bytes(stored));
    assert_eq!(imu.read_gyro().unwrap(), Vec3::default());

    imu.release().done();
}

#[test]
fn missing_device_is_reported() {
    let expectations = [
        I2cTransaction::write(ADDR, vec![REG_PWR_MGMT_1, 0x00]),
        I2cTransaction::write_read(ADDR, vec![REG_WHO_AM_I], vec![0xFF]),
    ];
    let mut imu = Imu::mpu6050(I2cMock::new(&expectations), ADDR);

    let err = imu.init(true).unwrap_err();
    assert!(matches!(err, Error::NotPresent));
    assert_eq!(err.to_string(), "no device answered at the configured address");

    imu.release().done();
}
