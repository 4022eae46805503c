//! Timekeeping access through the clock-block descriptors.

use crate::fields::{decode_from, encode_into, field_spec, Field, FieldValue, CLOCK_BLOCK};
use crate::{DsRtc, Error, Register};
use log::{debug, error};
use rtcc::{DateTimeAccess, Datelike, Hours, NaiveDate, NaiveDateTime, NaiveTime, Rtcc, Timelike};

/// Collapse an hour value to its 24-hour representation.
pub(crate) fn hours_as_h24(hours: Hours) -> u8 {
    match hours {
        Hours::H24(h) => h,
        Hours::AM(12) => 0,
        Hours::AM(h) => h,
        Hours::PM(12) => 12,
        Hours::PM(h) => h + 12,
    }
}

impl<I2C, E, IC> DsRtc<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    fn clock_units(&mut self, field: Field) -> Result<u8, Error<E>> {
        let spec = field_spec(CLOCK_BLOCK, field).ok_or(Error::InvalidInputData)?;
        match self.read_field(spec)? {
            FieldValue::Units(value) => Ok(value),
            _ => Err(Error::InvalidDeviceState),
        }
    }

    fn set_clock_units(&mut self, field: Field, value: u8) -> Result<(), Error<E>> {
        let spec = field_spec(CLOCK_BLOCK, field).ok_or(Error::InvalidInputData)?;
        self.write_field(spec, FieldValue::Units(value))
    }

    fn year_offset(&self, year: u16) -> Result<u8, Error<E>> {
        match year.checked_sub(self.year_base) {
            Some(offset) if offset < 100 => Ok(offset as u8),
            _ => Err(Error::InvalidInputData),
        }
    }
}

impl<I2C, E, IC> DateTimeAccess for DsRtc<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = Error<E>;

    fn datetime(&mut self) -> Result<NaiveDateTime, Self::Error> {
        let mut regs = [0u8; 7];
        self.read_registers(Register::SECONDS, &mut regs)?;

        let mut units = [0u8; 5];
        for (slot, field) in units.iter_mut().zip([
            Field::Seconds,
            Field::Minutes,
            Field::DayOfMonth,
            Field::Month,
            Field::Year,
        ]) {
            let spec = field_spec(CLOCK_BLOCK, field).ok_or(Error::InvalidInputData)?;
            match decode_from(&regs, Register::SECONDS, spec)? {
                FieldValue::Units(value) => *slot = value,
                _ => return Err(Error::InvalidDeviceState),
            }
        }
        let [second, minute, day, month, year_offset] = units;

        let spec = field_spec(CLOCK_BLOCK, Field::Hours).ok_or(Error::InvalidInputData)?;
        let hour = match decode_from(&regs, Register::SECONDS, spec)? {
            FieldValue::Time(hours) => hours_as_h24(hours),
            _ => return Err(Error::InvalidDeviceState),
        };

        let year = self.year_base + u16::from(year_offset);
        NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            .and_then(|date| {
                date.and_hms_opt(u32::from(hour), u32::from(minute), u32::from(second))
            })
            .ok_or_else(|| {
                error!("clock registers do not form a valid datetime: {:?}", regs);
                Error::InvalidDeviceState
            })
    }

    fn set_datetime(&mut self, datetime: &NaiveDateTime) -> Result<(), Self::Error> {
        let year_offset = self.year_offset(u16::try_from(datetime.year()).map_err(|_| Error::InvalidInputData)?)?;
        let updates = [
            (Field::Seconds, datetime.second() as u8),
            (Field::Minutes, datetime.minute() as u8),
            (Field::Weekday, datetime.weekday().number_from_sunday() as u8),
            (Field::DayOfMonth, datetime.day() as u8),
            (Field::Month, datetime.month() as u8),
            (Field::Year, year_offset),
        ];
        let hour = datetime.hour() as u8;
        debug!("setting datetime, year offset {}", year_offset);

        self.update_block::<7>(Register::SECONDS, |regs| {
            for (field, value) in updates {
                let spec = field_spec(CLOCK_BLOCK, field).ok_or(Error::InvalidInputData)?;
                encode_into(regs, Register::SECONDS, spec, FieldValue::Units(value))?;
            }
            let spec = field_spec(CLOCK_BLOCK, Field::Hours).ok_or(Error::InvalidInputData)?;
            encode_into(
                regs,
                Register::SECONDS,
                spec,
                FieldValue::Time(Hours::H24(hour)),
            )
        })
    }
}

impl<I2C, E, IC> Rtcc for DsRtc<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    fn seconds(&mut self) -> Result<u8, Self::Error> {
        self.clock_units(Field::Seconds)
    }

    fn minutes(&mut self) -> Result<u8, Self::Error> {
        self.clock_units(Field::Minutes)
    }

    fn hours(&mut self) -> Result<Hours, Self::Error> {
        let spec = field_spec(CLOCK_BLOCK, Field::Hours).ok_or(Error::InvalidInputData)?;
        match self.read_field(spec)? {
            FieldValue::Time(hours) => Ok(hours),
            _ => Err(Error::InvalidDeviceState),
        }
    }

    fn time(&mut self) -> Result<NaiveTime, Self::Error> {
        let mut regs = [0u8; 3];
        self.read_registers(Register::SECONDS, &mut regs)?;
        let second = CLOCK_BLOCK[0].decode::<E>(&regs[..1])?;
        let minute = CLOCK_BLOCK[1].decode::<E>(&regs[1..2])?;
        let hour = CLOCK_BLOCK[2].decode::<E>(&regs[2..3])?;
        match (second, minute, hour) {
            (FieldValue::Units(s), FieldValue::Units(m), FieldValue::Time(h)) => {
                NaiveTime::from_hms_opt(
                    u32::from(hours_as_h24(h)),
                    u32::from(m),
                    u32::from(s),
                )
                .ok_or(Error::InvalidDeviceState)
            }
            _ => Err(Error::InvalidDeviceState),
        }
    }

    fn weekday(&mut self) -> Result<u8, Self::Error> {
        self.clock_units(Field::Weekday)
    }

    fn day(&mut self) -> Result<u8, Self::Error> {
        self.clock_units(Field::DayOfMonth)
    }

    fn month(&mut self) -> Result<u8, Self::Error> {
        self.clock_units(Field::Month)
    }

    fn year(&mut self) -> Result<u16, Self::Error> {
        let offset = self.clock_units(Field::Year)?;
        Ok(self.year_base + u16::from(offset))
    }

    fn date(&mut self) -> Result<NaiveDate, Self::Error> {
        let mut regs = [0u8; 3];
        self.read_registers(Register::DOM, &mut regs)?;
        let day = decode_from::<E>(&regs, Register::DOM, &CLOCK_BLOCK[4])?;
        let month = decode_from::<E>(&regs, Register::DOM, &CLOCK_BLOCK[5])?;
        let year = decode_from::<E>(&regs, Register::DOM, &CLOCK_BLOCK[6])?;
        match (day, month, year) {
            (FieldValue::Units(d), FieldValue::Units(m), FieldValue::Units(y)) => {
                NaiveDate::from_ymd_opt(
                    i32::from(self.year_base + u16::from(y)),
                    u32::from(m),
                    u32::from(d),
                )
                .ok_or(Error::InvalidDeviceState)
            }
            _ => Err(Error::InvalidDeviceState),
        }
    }

    fn set_seconds(&mut self, seconds: u8) -> Result<(), Self::Error> {
        self.set_clock_units(Field::Seconds, seconds)
    }

    fn set_minutes(&mut self, minutes: u8) -> Result<(), Self::Error> {
        self.set_clock_units(Field::Minutes, minutes)
    }

    fn set_hours(&mut self, hours: Hours) -> Result<(), Self::Error> {
        let spec = field_spec(CLOCK_BLOCK, Field::Hours).ok_or(Error::InvalidInputData)?;
        self.write_field(spec, FieldValue::Time(hours))
    }

    fn set_time(&mut self, time: &NaiveTime) -> Result<(), Self::Error> {
        let second = time.second() as u8;
        let minute = time.minute() as u8;
        let hour = time.hour() as u8;
        self.update_block::<3>(Register::SECONDS, |regs| {
            encode_into(regs, Register::SECONDS, &CLOCK_BLOCK[0], FieldValue::Units(second))?;
            encode_into(regs, Register::SECONDS, &CLOCK_BLOCK[1], FieldValue::Units(minute))?;
            encode_into(
                regs,
                Register::SECONDS,
                &CLOCK_BLOCK[2],
                FieldValue::Time(Hours::H24(hour)),
            )
        })
    }

    fn set_weekday(&mut self, weekday: u8) -> Result<(), Self::Error> {
        self.set_clock_units(Field::Weekday, weekday)
    }

    fn set_day(&mut self, day: u8) -> Result<(), Self::Error> {
        self.set_clock_units(Field::DayOfMonth, day)
    }

    fn set_month(&mut self, month: u8) -> Result<(), Self::Error> {
        self.set_clock_units(Field::Month, month)
    }

    fn set_year(&mut self, year: u16) -> Result<(), Self::Error> {
        let offset = self.year_offset(year)?;
        self.set_clock_units(Field::Year, offset)
    }

    fn set_date(&mut self, date: &NaiveDate) -> Result<(), Self::Error> {
        let day = date.day() as u8;
        let month = date.month() as u8;
        let offset =
            self.year_offset(u16::try_from(date.year()).map_err(|_| Error::InvalidInputData)?)?;
        self.update_block::<3>(Register::DOM, |regs| {
            encode_into(regs, Register::DOM, &CLOCK_BLOCK[4], FieldValue::Units(day))?;
            encode_into(regs, Register::DOM, &CLOCK_BLOCK[5], FieldValue::Units(month))?;
            encode_into(regs, Register::DOM, &CLOCK_BLOCK[6], FieldValue::Units(offset))
        })
    }
}
