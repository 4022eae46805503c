pub mod clock {
    use chrono::{DateTime, FixedOffset};
    use ds_rtc::{
        ic, Alarm2Matching, DateTimeAccess, DayAlarm2, DsRtc, Error, Hours, NaiveDateTime, Rtcc,
    };
    use log::info;

    /// DS3231-backed wall clock keeping local time at a fixed UTC offset.
    ///
    /// The RTC registers hold local time; the offset is only applied when
    /// converting to and from timezone-aware values.
    pub struct Clock<I2C> {
        rtc: DsRtc<I2C, ic::DS3231>,
        offset: FixedOffset,
    }

    impl<I2C, E> Clock<I2C>
    where
        I2C: embedded_hal::i2c::I2c<Error = E>,
    {
        // Constructor for Clock
        pub fn new(i2c: I2C, offset: FixedOffset) -> Clock<I2C> {
            Clock {
                rtc: DsRtc::new_ds3231(i2c),
                offset,
            }
        }

        /// Method to get the hours, collapsed to 24-hour form
        pub fn get_hour(&mut self) -> Result<u8, Error<E>> {
            let hour = self.rtc.hours()?;
            Ok(match hour {
                Hours::AM(12) => 0,
                Hours::AM(h) => h,
                Hours::PM(12) => 12,
                Hours::PM(h) => h + 12,
                Hours::H24(h) => h,
            })
        }

        /// Method to get the minutes
        pub fn get_minutes(&mut self) -> Result<u8, Error<E>> {
            self.rtc.minutes()
        }

        /// Method to get the seconds
        pub fn get_seconds(&mut self) -> Result<u8, Error<E>> {
            self.rtc.seconds()
        }

        /// Method for setting a local datetime
        pub fn set_date_time(&mut self, datetime: &NaiveDateTime) -> Result<(), Error<E>> {
            self.rtc.set_datetime(datetime)
        }

        /// Method for returning the local datetime
        pub fn get_date_time(&mut self) -> Result<NaiveDateTime, Error<E>> {
            self.rtc.datetime()
        }

        /// Current local time as a timezone-aware value
        pub fn local_datetime(&mut self) -> Result<DateTime<FixedOffset>, Error<E>> {
            self.get_date_time()?
                .and_local_timezone(self.offset)
                .single()
                .ok_or(Error::InvalidDeviceState)
        }

        /// Sets the RTC from a timezone-aware value, converting to the
        /// clock's own offset first
        pub fn set_local_datetime(
            &mut self,
            datetime: &DateTime<FixedOffset>,
        ) -> Result<(), Error<E>> {
            let local = datetime.with_timezone(&self.offset).naive_local();
            self.set_date_time(&local)
        }

        /// Returns a unix timestamp based on the current date time
        pub fn datetime_to_unix_timestamp(&mut self) -> Result<i64, Error<E>> {
            Ok(self.local_datetime()?.timestamp())
        }

        /// Die temperature of the DS3231 in degrees Celsius
        pub fn temperature(&mut self) -> Result<f32, Error<E>> {
            self.rtc.temperature()
        }

        /// Arms alarm 2 to raise the INT pin every day at the given local
        /// time. Hour is 24-hour form.
        pub fn set_daily_alarm(&mut self, hour: u8, minute: u8) -> Result<(), Error<E>> {
            let alarm = DayAlarm2 {
                day: 1,
                hour: Hours::H24(hour),
                minute,
            };
            self.rtc
                .set_alarm2_day(alarm, Alarm2Matching::HoursAndMinutesMatch)?;
            self.rtc.use_int_sqw_output_as_interrupt()?;
            self.rtc.enable_alarm2_interrupts()?;
            info!("daily alarm armed for {:02}:{:02}", hour, minute);
            Ok(())
        }

        /// Whether the daily alarm has gone off since it was last acknowledged
        pub fn alarm_fired(&mut self) -> Result<bool, Error<E>> {
            self.rtc.has_alarm2_matched()
        }

        /// Clears the daily alarm flag so the INT pin releases
        pub fn acknowledge_alarm(&mut self) -> Result<(), Error<E>> {
            self.rtc.clear_alarm2_matched_flag()
        }

        /// Gives back the I²C bus
        pub fn destroy(self) -> I2C {
            self.rtc.destroy()
        }
    }
}

pub use clock::Clock;
