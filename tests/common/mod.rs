use ds_rtc::{ic, DsRtc};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

pub const DEV_ADDR: u8 = 0b110_1000;

pub fn new_ds3231(transactions: &[I2cTrans]) -> DsRtc<I2cMock, ic::DS3231> {
    DsRtc::new_ds3231(I2cMock::new(transactions))
}

pub fn new_ds1307(transactions: &[I2cTrans]) -> DsRtc<I2cMock, ic::DS1307> {
    DsRtc::new_ds1307(I2cMock::new(transactions))
}

pub fn new_ds1337(transactions: &[I2cTrans]) -> DsRtc<I2cMock, ic::DS1337> {
    DsRtc::new_ds1337(I2cMock::new(transactions))
}

pub fn destroy<IC>(rtc: DsRtc<I2cMock, IC>) {
    rtc.destroy().done();
}
