//! Alarm support.
//!
//! The alarm registers interleave two kinds of state: BCD time fields in
//! the low bits, and configuration bits on top of them (one match bit per
//! register, plus the day-mode bit in the day register). The configuration
//! is always read and written as one `(matching, day mode)` pair so the
//! device never holds a half-updated match pattern.

use crate::codec::set_bit;
use crate::fields::{encode_into, field_spec, Field, FieldValue, ALARM1_BLOCK, ALARM2_BLOCK};
use crate::{BitFlags, DsRtc, Error, Hours, Register, WithAlarms};

/// Alarm1 trigger rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alarm1Matching {
    /// Alarm once per second.
    EverySecond,
    /// Alarm when seconds match.
    SecondsMatch,
    /// Alarm when minutes and seconds match.
    MinutesAndSecondsMatch,
    /// Alarm when hours, minutes and seconds match.
    HoursMinutesAndSecondsMatch,
    /// Alarm when day/weekday, hours, minutes and seconds match.
    AllMatch,
}

/// Alarm2 trigger rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alarm2Matching {
    /// Alarm once per minute. (00 seconds of every minute)
    OncePerMinute,
    /// Alarm when minutes match.
    MinutesMatch,
    /// Alarm when hours and minutes match.
    HoursAndMinutesMatch,
    /// Alarm when day/weekday, hours and minutes match.
    AllMatch,
}

/// Interpretation of the alarm day register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmDayMode {
    /// The day register holds a day of the month (1-31).
    DayOfMonth,
    /// The day register holds a day of the week (1-7).
    Weekday,
}

/// Alarm1 register description: day of the month, hour, minute, second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayAlarm1 {
    /// Day of the month, 1-31
    pub day: u8,
    /// Hour
    pub hour: Hours,
    /// Minute, 0-59
    pub minute: u8,
    /// Second, 0-59
    pub second: u8,
}

/// Alarm1 register description: weekday, hour, minute, second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayAlarm1 {
    /// Weekday, 1-7
    pub weekday: u8,
    /// Hour
    pub hour: Hours,
    /// Minute, 0-59
    pub minute: u8,
    /// Second, 0-59
    pub second: u8,
}

/// Alarm2 register description: day of the month, hour, minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayAlarm2 {
    /// Day of the month, 1-31
    pub day: u8,
    /// Hour
    pub hour: Hours,
    /// Minute, 0-59
    pub minute: u8,
}

/// Alarm2 register description: weekday, hour, minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayAlarm2 {
    /// Weekday, 1-7
    pub weekday: u8,
    /// Hour
    pub hour: Hours,
    /// Minute, 0-59
    pub minute: u8,
}

impl Alarm1Matching {
    /// Match bits for the four alarm 1 registers, seconds register first.
    const fn match_bits(self) -> [bool; 4] {
        match self {
            Alarm1Matching::EverySecond => [true, true, true, true],
            Alarm1Matching::SecondsMatch => [false, true, true, true],
            Alarm1Matching::MinutesAndSecondsMatch => [false, false, true, true],
            Alarm1Matching::HoursMinutesAndSecondsMatch => [false, false, false, true],
            Alarm1Matching::AllMatch => [false, false, false, false],
        }
    }

    fn from_match_bits<E>(bits: [bool; 4]) -> Result<Self, Error<E>> {
        match bits {
            [true, true, true, true] => Ok(Alarm1Matching::EverySecond),
            [false, true, true, true] => Ok(Alarm1Matching::SecondsMatch),
            [false, false, true, true] => Ok(Alarm1Matching::MinutesAndSecondsMatch),
            [false, false, false, true] => Ok(Alarm1Matching::HoursMinutesAndSecondsMatch),
            [false, false, false, false] => Ok(Alarm1Matching::AllMatch),
            _ => Err(Error::InvalidDeviceState),
        }
    }
}

impl Alarm2Matching {
    /// Match bits for the three alarm 2 registers, minutes register first.
    const fn match_bits(self) -> [bool; 3] {
        match self {
            Alarm2Matching::OncePerMinute => [true, true, true],
            Alarm2Matching::MinutesMatch => [false, true, true],
            Alarm2Matching::HoursAndMinutesMatch => [false, false, true],
            Alarm2Matching::AllMatch => [false, false, false],
        }
    }

    fn from_match_bits<E>(bits: [bool; 3]) -> Result<Self, Error<E>> {
        match bits {
            [true, true, true] => Ok(Alarm2Matching::OncePerMinute),
            [false, true, true] => Ok(Alarm2Matching::MinutesMatch),
            [false, false, true] => Ok(Alarm2Matching::HoursAndMinutesMatch),
            [false, false, false] => Ok(Alarm2Matching::AllMatch),
            _ => Err(Error::InvalidDeviceState),
        }
    }
}

fn apply_config<const N: usize>(regs: &mut [u8; N], match_bits: [bool; N], day_mode: AlarmDayMode) {
    for (reg, bit) in regs.iter_mut().zip(match_bits) {
        *reg = set_bit(*reg, BitFlags::ALARM_MATCH, bit);
    }
    regs[N - 1] = set_bit(
        regs[N - 1],
        BitFlags::WEEKDAY,
        matches!(day_mode, AlarmDayMode::Weekday),
    );
}

fn config_bits<const N: usize>(regs: &[u8; N]) -> ([bool; N], AlarmDayMode) {
    let mut bits = [false; N];
    for (bit, reg) in bits.iter_mut().zip(regs) {
        *bit = reg & BitFlags::ALARM_MATCH != 0;
    }
    let day_mode = if regs[N - 1] & BitFlags::WEEKDAY != 0 {
        AlarmDayMode::Weekday
    } else {
        AlarmDayMode::DayOfMonth
    };
    (bits, day_mode)
}

impl<I2C, E, IC> DsRtc<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
    IC: WithAlarms,
{
    /// Set Alarm1 for day of the month.
    ///
    /// Will return an `Error::InvalidInputData` if any of the parameters is
    /// out of range.
    pub fn set_alarm1_day(
        &mut self,
        alarm: DayAlarm1,
        matching: Alarm1Matching,
    ) -> Result<(), Error<E>> {
        self.update_block::<4>(Register::ALARM1_SECONDS, |regs| {
            encode_alarm1_time(regs, Field::DayOfMonth, alarm.day, alarm.hour, alarm.minute, alarm.second)?;
            apply_config(regs, matching.match_bits(), AlarmDayMode::DayOfMonth);
            Ok(())
        })
    }

    /// Set Alarm1 for a weekday.
    pub fn set_alarm1_weekday(
        &mut self,
        alarm: WeekdayAlarm1,
        matching: Alarm1Matching,
    ) -> Result<(), Error<E>> {
        self.update_block::<4>(Register::ALARM1_SECONDS, |regs| {
            encode_alarm1_time(regs, Field::Weekday, alarm.weekday, alarm.hour, alarm.minute, alarm.second)?;
            apply_config(regs, matching.match_bits(), AlarmDayMode::Weekday);
            Ok(())
        })
    }

    /// Set Alarm2 for day of the month.
    pub fn set_alarm2_day(
        &mut self,
        alarm: DayAlarm2,
        matching: Alarm2Matching,
    ) -> Result<(), Error<E>> {
        self.update_block::<3>(Register::ALARM2_MINUTES, |regs| {
            encode_alarm2_time(regs, Field::DayOfMonth, alarm.day, alarm.hour, alarm.minute)?;
            apply_config(regs, matching.match_bits(), AlarmDayMode::DayOfMonth);
            Ok(())
        })
    }

    /// Set Alarm2 for a weekday.
    pub fn set_alarm2_weekday(
        &mut self,
        alarm: WeekdayAlarm2,
        matching: Alarm2Matching,
    ) -> Result<(), Error<E>> {
        self.update_block::<3>(Register::ALARM2_MINUTES, |regs| {
            encode_alarm2_time(regs, Field::Weekday, alarm.weekday, alarm.hour, alarm.minute)?;
            apply_config(regs, matching.match_bits(), AlarmDayMode::Weekday);
            Ok(())
        })
    }

    /// Rewrite the Alarm1 configuration, keeping the stored alarm time.
    ///
    /// The match bits and the day-mode bit are spread over the alarm
    /// registers, so both components are taken together and merged in a
    /// single read-modify-write across the whole block.
    pub fn set_alarm1_matching(
        &mut self,
        matching: Alarm1Matching,
        day_mode: AlarmDayMode,
    ) -> Result<(), Error<E>> {
        self.update_block::<4>(Register::ALARM1_SECONDS, |regs| {
            apply_config(regs, matching.match_bits(), day_mode);
            Ok(())
        })
    }

    /// Rewrite the Alarm2 configuration, keeping the stored alarm time.
    pub fn set_alarm2_matching(
        &mut self,
        matching: Alarm2Matching,
        day_mode: AlarmDayMode,
    ) -> Result<(), Error<E>> {
        self.update_block::<3>(Register::ALARM2_MINUTES, |regs| {
            apply_config(regs, matching.match_bits(), day_mode);
            Ok(())
        })
    }

    /// Read the Alarm1 configuration pair.
    pub fn alarm1_config(&mut self) -> Result<(Alarm1Matching, AlarmDayMode), Error<E>> {
        let mut regs = [0u8; 4];
        self.read_registers(Register::ALARM1_SECONDS, &mut regs)?;
        let (bits, day_mode) = config_bits(&regs);
        Ok((Alarm1Matching::from_match_bits(bits)?, day_mode))
    }

    /// Read the Alarm2 configuration pair.
    pub fn alarm2_config(&mut self) -> Result<(Alarm2Matching, AlarmDayMode), Error<E>> {
        let mut regs = [0u8; 3];
        self.read_registers(Register::ALARM2_MINUTES, &mut regs)?;
        let (bits, day_mode) = config_bits(&regs);
        Ok((Alarm2Matching::from_match_bits(bits)?, day_mode))
    }
}

fn encode_alarm1_time<E>(
    regs: &mut [u8; 4],
    day_field: Field,
    day_value: u8,
    hour: Hours,
    minute: u8,
    second: u8,
) -> Result<(), Error<E>> {
    let base = Register::ALARM1_SECONDS;
    let seconds = field_spec(ALARM1_BLOCK, Field::Seconds).ok_or(Error::InvalidInputData)?;
    let minutes = field_spec(ALARM1_BLOCK, Field::Minutes).ok_or(Error::InvalidInputData)?;
    let hours = field_spec(ALARM1_BLOCK, Field::Hours).ok_or(Error::InvalidInputData)?;
    let day = field_spec(ALARM1_BLOCK, day_field).ok_or(Error::InvalidInputData)?;
    encode_into(regs, base, seconds, FieldValue::Units(second))?;
    encode_into(regs, base, minutes, FieldValue::Units(minute))?;
    encode_into(regs, base, hours, FieldValue::Time(hour))?;
    encode_into(regs, base, day, FieldValue::Units(day_value))
}

fn encode_alarm2_time<E>(
    regs: &mut [u8; 3],
    day_field: Field,
    day_value: u8,
    hour: Hours,
    minute: u8,
) -> Result<(), Error<E>> {
    let base = Register::ALARM2_MINUTES;
    let minutes = field_spec(ALARM2_BLOCK, Field::Minutes).ok_or(Error::InvalidInputData)?;
    let hours = field_spec(ALARM2_BLOCK, Field::Hours).ok_or(Error::InvalidInputData)?;
    let day = field_spec(ALARM2_BLOCK, day_field).ok_or(Error::InvalidInputData)?;
    encode_into(regs, base, minutes, FieldValue::Units(minute))?;
    encode_into(regs, base, hours, FieldValue::Time(hour))?;
    encode_into(regs, base, day, FieldValue::Units(day_value))
}
