//! Device status: alarm/oscillator flags and the temperature reading.

use crate::fields::{FieldValue, TEMPERATURE};
use crate::{BitFlags, DsRtc, Error, Register, WithControlStatus, WithTemperature};

impl<I2C, E, IC> DsRtc<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
    IC: WithControlStatus,
{
    /// Whether the Alarm1 time has matched since the flag was last cleared.
    pub fn has_alarm1_matched(&mut self) -> Result<bool, Error<E>> {
        let status = self.read_register(Register::STATUS)?;
        Ok(status & BitFlags::ALARM1F != 0)
    }

    /// Whether the Alarm2 time has matched since the flag was last cleared.
    pub fn has_alarm2_matched(&mut self) -> Result<bool, Error<E>> {
        let status = self.read_register(Register::STATUS)?;
        Ok(status & BitFlags::ALARM2F != 0)
    }

    /// Clear the Alarm1-matched flag. The Alarm2 flag is written back as
    /// set; the hardware only honors zero-writes, so this cannot clear an
    /// alarm that asserted between the read and the write.
    pub fn clear_alarm1_matched_flag(&mut self) -> Result<(), Error<E>> {
        let status = self.read_register(Register::STATUS)?;
        self.write_register(Register::STATUS, (status | BitFlags::ALARM2F) & !BitFlags::ALARM1F)
    }

    /// Clear the Alarm2-matched flag.
    pub fn clear_alarm2_matched_flag(&mut self) -> Result<(), Error<E>> {
        let status = self.read_register(Register::STATUS)?;
        self.write_register(Register::STATUS, (status | BitFlags::ALARM1F) & !BitFlags::ALARM2F)
    }

    /// Whether the oscillator has stopped at some point since the flag was
    /// last cleared (e.g. the device was powered down or disabled).
    pub fn has_been_stopped(&mut self) -> Result<bool, Error<E>> {
        let status = self.read_register(Register::STATUS)?;
        Ok(status & BitFlags::OSC_STOP != 0)
    }

    /// Clear the oscillator-stopped flag.
    pub fn clear_has_been_stopped_flag(&mut self) -> Result<(), Error<E>> {
        let status = self.read_register(Register::STATUS)?;
        self.write_status_without_clearing_alarm(status & !BitFlags::OSC_STOP)
    }
}

impl<I2C, E, IC> DsRtc<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
    IC: WithTemperature,
{
    /// Read the last measured die temperature in degrees Celsius.
    ///
    /// The resolution is 0.25 °C. The register pair is decode-only.
    pub fn temperature(&mut self) -> Result<f32, Error<E>> {
        match self.read_field(&TEMPERATURE)? {
            FieldValue::Celsius(value) => Ok(value),
            _ => Err(Error::InvalidDeviceState),
        }
    }
}
