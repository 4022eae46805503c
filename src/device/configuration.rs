//! Device configuration

use crate::fields::Flag;
use crate::{BitFlags, ChipMap, DsRtc, Error, Register, WithControlStatus};

impl<I2C, E, IC> DsRtc<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
    IC: ChipMap,
{
    /// Read one control flag.
    pub fn flag(&mut self, flag: Flag) -> Result<bool, Error<E>> {
        let data = self.read_register(flag.register)?;
        Ok(flag.is_set(data))
    }

    /// Set or clear one control flag, preserving the rest of its register.
    pub fn set_flag(&mut self, flag: Flag, value: bool) -> Result<(), Error<E>> {
        let current = self.read_register(flag.register)?;
        let data = flag.apply(current, value);
        if data != current {
            self.write_register(flag.register, data)?;
        }
        Ok(())
    }

    /// Enable the oscillator (set the clock running) (default).
    pub fn enable(&mut self) -> Result<(), Error<E>> {
        self.set_flag(IC::OSC_STOP_FLAG, false)
    }

    /// Disable the oscillator (stops the clock).
    pub fn disable(&mut self) -> Result<(), Error<E>> {
        self.set_flag(IC::OSC_STOP_FLAG, true)
    }

    /// Whether the oscillator is running.
    pub fn running(&mut self) -> Result<bool, Error<E>> {
        let stopped = self.flag(IC::OSC_STOP_FLAG)?;
        Ok(!stopped)
    }
}

impl<I2C, E, IC> DsRtc<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
    IC: WithControlStatus,
{
    /// Enable Alarm1 interrupts.
    pub fn enable_alarm1_interrupts(&mut self) -> Result<(), Error<E>> {
        self.set_flag(
            Flag {
                register: Register::CONTROL,
                mask: BitFlags::ALARM1_INT_EN,
            },
            true,
        )
    }

    /// Disable Alarm1 interrupts.
    pub fn disable_alarm1_interrupts(&mut self) -> Result<(), Error<E>> {
        self.set_flag(
            Flag {
                register: Register::CONTROL,
                mask: BitFlags::ALARM1_INT_EN,
            },
            false,
        )
    }

    /// Enable Alarm2 interrupts.
    pub fn enable_alarm2_interrupts(&mut self) -> Result<(), Error<E>> {
        self.set_flag(
            Flag {
                register: Register::CONTROL,
                mask: BitFlags::ALARM2_INT_EN,
            },
            true,
        )
    }

    /// Disable Alarm2 interrupts.
    pub fn disable_alarm2_interrupts(&mut self) -> Result<(), Error<E>> {
        self.set_flag(
            Flag {
                register: Register::CONTROL,
                mask: BitFlags::ALARM2_INT_EN,
            },
            false,
        )
    }

    /// Set the interrupt/square-wave output to be used as interrupt output.
    pub fn use_int_sqw_output_as_interrupt(&mut self) -> Result<(), Error<E>> {
        self.set_flag(
            Flag {
                register: Register::CONTROL,
                mask: BitFlags::INTCN,
            },
            true,
        )
    }

    /// Set the interrupt/square-wave output to be used as square-wave output. (default)
    pub fn use_int_sqw_output_as_square_wave(&mut self) -> Result<(), Error<E>> {
        self.set_flag(
            Flag {
                register: Register::CONTROL,
                mask: BitFlags::INTCN,
            },
            false,
        )
    }

    /// Write the status register without accidentally clearing an alarm
    /// flag that asserted after the register was read.
    pub(crate) fn write_status_without_clearing_alarm(&mut self, status: u8) -> Result<(), Error<E>> {
        let data = status | BitFlags::ALARM2F | BitFlags::ALARM1F;
        self.write_register(Register::STATUS, data)
    }
}
