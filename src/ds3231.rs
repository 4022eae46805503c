//! Functions exclusive of DS3231

use crate::fields::Flag;
use crate::{
    ic, BitFlags, ChipMap, DsRtc, Register, WithAlarms, WithControlStatus, WithTemperature,
    DEFAULT_YEAR_BASE,
};
use core::marker::PhantomData;

impl<I2C> DsRtc<I2C, ic::DS3231>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Create a new instance of the DS3231 device.
    pub fn new_ds3231(i2c: I2C) -> Self {
        DsRtc {
            i2c,
            year_base: DEFAULT_YEAR_BASE,
            _ic: PhantomData,
        }
    }
}

impl ChipMap for ic::DS3231 {
    // EOSC: oscillator keeps running on VCC regardless, stops on battery
    const OSC_STOP_FLAG: Flag = Flag {
        register: Register::CONTROL,
        mask: BitFlags::EOSC,
    };
}

impl WithControlStatus for ic::DS3231 {}
impl WithAlarms for ic::DS3231 {}
impl WithTemperature for ic::DS3231 {}
