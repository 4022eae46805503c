//! Functions exclusive of DS1307

use crate::fields::Flag;
use crate::{ic, BitFlags, ChipMap, DsRtc, Register, DEFAULT_YEAR_BASE};
use core::marker::PhantomData;

impl<I2C> DsRtc<I2C, ic::DS1307>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Create a new instance of the DS1307 device.
    pub fn new_ds1307(i2c: I2C) -> Self {
        DsRtc {
            i2c,
            year_base: DEFAULT_YEAR_BASE,
            _ic: PhantomData,
        }
    }
}

impl ChipMap for ic::DS1307 {
    // CH: clock-halt bit on top of the seconds register
    const OSC_STOP_FLAG: Flag = Flag {
        register: Register::SECONDS,
        mask: BitFlags::CH,
    };
}
