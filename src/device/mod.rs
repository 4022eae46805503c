//! Device communication: transport helpers and the read-modify-write cycle.

pub(crate) mod alarms;
mod configuration;
mod datetime;
mod status;

use crate::fields::{FieldSpec, FieldValue};
use crate::{DsRtc, Error, DEVICE_ADDRESS};

// register space tops out at 0x12, plus one address byte in front
const MAX_PAYLOAD: usize = 0x13 + 1;

impl<I2C, IC> DsRtc<I2C, IC> {
    /// Interpret the two-digit year against a different base century.
    ///
    /// The chips store only a two-digit year; the default base is 2000.
    pub fn with_year_base(mut self, year_base: u16) -> Self {
        self.year_base = year_base;
        self
    }

    /// Destroy driver instance, return I²C bus instance.
    pub fn destroy(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E, IC> DsRtc<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    pub(crate) fn read_register(&mut self, register: u8) -> Result<u8, Error<E>> {
        let mut data = [0];
        self.i2c
            .write_read(DEVICE_ADDRESS, &[register], &mut data)
            .map_err(Error::Comm)?;
        Ok(data[0])
    }

    pub(crate) fn read_registers(&mut self, first: u8, buffer: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c
            .write_read(DEVICE_ADDRESS, &[first], buffer)
            .map_err(Error::Comm)
    }

    pub(crate) fn write_register(&mut self, register: u8, data: u8) -> Result<(), Error<E>> {
        let payload: [u8; 2] = [register, data];
        self.i2c.write(DEVICE_ADDRESS, &payload).map_err(Error::Comm)
    }

    pub(crate) fn write_registers(&mut self, first: u8, data: &[u8]) -> Result<(), Error<E>> {
        let mut payload = [0u8; MAX_PAYLOAD];
        payload[0] = first;
        payload[1..=data.len()].copy_from_slice(data);
        self.i2c
            .write(DEVICE_ADDRESS, &payload[..=data.len()])
            .map_err(Error::Comm)
    }

    /// Read the registers a field spans and decode it.
    pub(crate) fn read_field(&mut self, spec: &FieldSpec) -> Result<FieldValue, Error<E>> {
        let mut regs = [0u8; 2];
        let span = spec.span as usize;
        self.read_registers(spec.index, &mut regs[..span])?;
        spec.decode(&regs[..span])
    }

    /// Read-modify-write one field: fetch the registers it spans, merge the
    /// new value under the field's mask, write back. A validation failure
    /// aborts before the write, leaving the device untouched.
    pub(crate) fn write_field(&mut self, spec: &FieldSpec, value: FieldValue) -> Result<(), Error<E>> {
        let mut regs = [0u8; 2];
        let span = spec.span as usize;
        self.read_registers(spec.index, &mut regs[..span])?;
        spec.encode(value, &mut regs[..span])?;
        self.write_registers(spec.index, &regs[..span])
    }

    /// Read-modify-write a whole register block in one bus round-trip each
    /// way. `merge` validates and merges every updated field into the
    /// buffer before anything is written back.
    pub(crate) fn update_block<const N: usize>(
        &mut self,
        first: u8,
        merge: impl FnOnce(&mut [u8; N]) -> Result<(), Error<E>>,
    ) -> Result<(), Error<E>> {
        let mut regs = [0u8; N];
        self.read_registers(first, &mut regs)?;
        merge(&mut regs)?;
        self.write_registers(first, &regs)
    }
}
