//! On-target self tests
//!
//! Runs a suite of checks against a live sensor and prints one line per case
//! to any `ufmt` writer, typically a serial console.

use core::fmt::Debug;
use embedded_hal::blocking::i2c::{Write, WriteRead};
use ufmt::{uWrite, uwrite};

use crate::config::NO_DEVICE_ID;
use crate::drivers::{AccelRange, GyroRange, Imu, RawSample};
use crate::error::Error;

pub trait SelfTest<I2C> {
    fn name(&self) -> &'static str;
    fn run(&self, imu: &mut Imu<I2C>) -> TestResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail(TestError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestError {
    AssertionFailed(&'static str),
    /// The driver reported an error; the bus error detail is dropped
    Driver(&'static str),
}

impl TestError {
    fn describe(&self) -> &'static str {
        match self {
            TestError::AssertionFailed(what) | TestError::Driver(what) => what,
        }
    }
}

fn driver_error<E: Debug>(err: &Error<E>) -> TestError {
    TestError::Driver(match err {
        Error::Bus(_) => "bus error",
        Error::NotPresent => "device not present",
        Error::UnknownIdentity(_) => "unknown identity",
        Error::NoSamples => "no samples",
    })
}

macro_rules! check {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(err) => return TestResult::Fail(driver_error(&err)),
        }
    };
}

macro_rules! ensure {
    ($cond:expr, $msg:expr) => {
        if !$cond {
            return TestResult::Fail(TestError::AssertionFailed($msg));
        }
    };
}

pub struct TestRunner<W> {
    out: W,
    total_tests: u32,
    passed_tests: u32,
}

impl<W: uWrite> TestRunner<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            total_tests: 0,
            passed_tests: 0,
        }
    }

    /// Run every case in order and return how many passed
    pub fn run_suite<I2C>(
        &mut self,
        name: &'static str,
        imu: &mut Imu<I2C>,
        tests: &[&dyn SelfTest<I2C>],
    ) -> u32 {
        self.total_tests = 0;
        self.passed_tests = 0;
        uwrite!(self.out, "\n=== Test Suite: {} ===\n", name).ok();

        for test in tests {
            self.total_tests += 1;
            uwrite!(self.out, "Running {}: ", test.name()).ok();

            match test.run(imu) {
                TestResult::Pass => {
                    self.passed_tests += 1;
                    self.out.write_str("PASS\n").ok();
                }
                TestResult::Fail(err) => {
                    uwrite!(self.out, "FAIL - {}\n", err.describe()).ok();
                }
            }
        }

        self.print_summary(name);
        self.passed_tests
    }

    fn print_summary(&mut self, name: &'static str) {
        let percent = if self.total_tests == 0 {
            0
        } else {
            (self.passed_tests * 100) / self.total_tests
        };
        uwrite!(
            self.out,
            "Passed: {}/{} ({}%) in {}\n",
            self.passed_tests,
            self.total_tests,
            percent,
            name
        )
        .ok();
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Wakes the chip and checks its identity byte
pub struct IdentityTest;

impl<I2C, E> SelfTest<I2C> for IdentityTest
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
    E: Debug,
{
    fn name(&self) -> &'static str {
        "Identity"
    }

    fn run(&self, imu: &mut Imu<I2C>) -> TestResult {
        check!(imu.init(false));
        TestResult::Pass
    }
}

/// Writes every gyro range, reads it back, then restores the original
pub struct GyroRangeTest;

impl<I2C, E> SelfTest<I2C> for GyroRangeTest
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
    E: Debug,
{
    fn name(&self) -> &'static str {
        "Gyro range"
    }

    fn run(&self, imu: &mut Imu<I2C>) -> TestResult {
        let original = imu.gyro_range();
        for range in GyroRange::ALL {
            check!(imu.set_gyro_range(range));
            ensure!(check!(imu.get_gyro_range()) == range, "gyro range read-back");
        }
        check!(imu.set_gyro_range(original));
        TestResult::Pass
    }
}

pub struct AccelRangeTest;

impl<I2C, E> SelfTest<I2C> for AccelRangeTest
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
    E: Debug,
{
    fn name(&self) -> &'static str {
        "Accel range"
    }

    fn run(&self, imu: &mut Imu<I2C>) -> TestResult {
        let original = imu.accel_range();
        for range in AccelRange::ALL {
            check!(imu.set_accel_range(range));
            ensure!(check!(imu.get_accel_range()) == range, "accel range read-back");
        }
        check!(imu.set_accel_range(original));
        TestResult::Pass
    }
}

/// Both output blocks can be burst-read and are not floating high
pub struct BurstReadTest;

impl<I2C, E> SelfTest<I2C> for BurstReadTest
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
    E: Debug,
{
    fn name(&self) -> &'static str {
        "Burst read"
    }

    fn run(&self, imu: &mut Imu<I2C>) -> TestResult {
        let floating = i16::from_be_bytes([NO_DEVICE_ID, NO_DEVICE_ID]);
        let floating = RawSample::new(floating, floating, floating);

        let gyro = check!(imu.read_gyro_raw());
        ensure!(gyro != floating, "gyro block reads all ones");
        let accel = check!(imu.read_accel_raw());
        ensure!(accel != floating, "accel block reads all ones");
        TestResult::Pass
    }
}
