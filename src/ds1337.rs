//! Functions exclusive of DS1337

use crate::fields::Flag;
use crate::{ic, BitFlags, ChipMap, DsRtc, Register, WithAlarms, WithControlStatus, DEFAULT_YEAR_BASE};
use core::marker::PhantomData;

impl<I2C> DsRtc<I2C, ic::DS1337>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Create a new instance of the DS1337 device.
    pub fn new_ds1337(i2c: I2C) -> Self {
        DsRtc {
            i2c,
            year_base: DEFAULT_YEAR_BASE,
            _ic: PhantomData,
        }
    }
}

impl ChipMap for ic::DS1337 {
    const OSC_STOP_FLAG: Flag = Flag {
        register: Register::CONTROL,
        mask: BitFlags::EOSC,
    };
}

impl WithControlStatus for ic::DS1337 {}
impl WithAlarms for ic::DS1337 {}
