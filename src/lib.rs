#![deny(unsafe_code)]
#![no_std]

pub use rtcc::{
    DateTimeAccess, Datelike, Hours, NaiveDate, NaiveDateTime, NaiveTime, Rtcc, Timelike,
};

use core::marker::PhantomData;

/// All possible errors in this crate
#[derive(Debug)]
pub enum Error<E> {
    /// I²C bus error
    Comm(E),
    /// Invalid input data provided
    InvalidInputData,
    /// Internal device state is invalid.
    ///
    /// Register contents did not decode to a valid value. The device is
    /// probably missing initialization, or the transfer was corrupted.
    InvalidDeviceState,
    /// The field is decode-only and cannot be written.
    ReadOnlyField,
}

struct Register;

impl Register {
    const SECONDS: u8 = 0x00;
    const MINUTES: u8 = 0x01;
    const HOURS: u8 = 0x02;
    const DOW: u8 = 0x03;
    const DOM: u8 = 0x04;
    const MONTH: u8 = 0x05;
    const ALARM1_SECONDS: u8 = 0x07;
    const ALARM1_MINUTES: u8 = 0x08;
    const ALARM1_HOURS: u8 = 0x09;
    const ALARM1_DAY: u8 = 0x0A;
    const ALARM2_MINUTES: u8 = 0x0B;
    const ALARM2_HOURS: u8 = 0x0C;
    const ALARM2_DAY: u8 = 0x0D;
    const CONTROL: u8 = 0x0E;
    const STATUS: u8 = 0x0F;
    const TEMP_MSB: u8 = 0x11;
}

struct BitFlags;

impl BitFlags {
    const H24_H12: u8 = 0b0100_0000;
    const AM_PM: u8 = 0b0010_0000;
    const CH: u8 = 0b1000_0000;
    const EOSC: u8 = 0b1000_0000;
    const INTCN: u8 = 0b0000_0100;
    const ALARM2_INT_EN: u8 = 0b0000_0010;
    const ALARM1_INT_EN: u8 = 0b0000_0001;
    const OSC_STOP: u8 = 0b1000_0000;
    const ALARM2F: u8 = 0b0000_0010;
    const ALARM1F: u8 = 0b0000_0001;
    const ALARM_MATCH: u8 = 0b1000_0000;
    const WEEKDAY: u8 = 0b0100_0000;
}

const DEVICE_ADDRESS: u8 = 0b110_1000;
const DEFAULT_YEAR_BASE: u16 = 2000;

/// IC markers
pub mod ic {
    /// DS3231 IC marker
    pub struct DS3231;
    /// DS1307 IC marker
    pub struct DS1307;
    /// DS1337 IC marker
    pub struct DS1337;
}

/// DS3231, DS1307 and DS1337 RTC register-map driver
#[derive(Debug)]
pub struct DsRtc<I2C, IC> {
    i2c: I2C,
    year_base: u16,
    _ic: PhantomData<IC>,
}

mod codec;
pub mod fields;
mod device;
pub use crate::device::alarms::{
    Alarm1Matching, Alarm2Matching, AlarmDayMode, DayAlarm1, DayAlarm2, WeekdayAlarm1,
    WeekdayAlarm2,
};
pub use crate::fields::Flag;
mod ds1307;
mod ds1337;
mod ds3231;

mod private {
    use super::ic;
    pub trait Sealed {}

    impl Sealed for ic::DS3231 {}
    impl Sealed for ic::DS1307 {}
    impl Sealed for ic::DS1337 {}
}

/// Chip-model constants for features whose register/bit position varies
/// between the supported chips.
pub trait ChipMap: private::Sealed {
    /// Flag that halts the oscillator while set.
    const OSC_STOP_FLAG: Flag;
}

/// Marker for chips with control/status registers at 0x0E/0x0F.
pub trait WithControlStatus: ChipMap {}

/// Marker for chips with the two alarm register blocks.
pub trait WithAlarms: WithControlStatus {}

/// Marker for chips with the temperature register pair.
pub trait WithTemperature: WithControlStatus {}
