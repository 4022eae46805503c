use ds_rtc::{Alarm2Matching, DayAlarm2, Hours, Rtcc};
use embedded_hal_mock::eh1::i2c::Transaction as I2cTrans;

mod common;
use common::{destroy, new_ds1337, DEV_ADDR};

#[test]
fn read_seconds() {
    let mut rtc = new_ds1337(&[I2cTrans::write_read(DEV_ADDR, vec![0x00], vec![0x58])]);
    assert_eq!(rtc.seconds().unwrap(), 58);
    destroy(rtc);
}

#[test]
fn disable_sets_eosc() {
    let mut rtc = new_ds1337(&[
        I2cTrans::write_read(DEV_ADDR, vec![0x0E], vec![0x00]),
        I2cTrans::write(DEV_ADDR, vec![0x0E, 0x80]),
    ]);
    rtc.disable().unwrap();
    destroy(rtc);
}

#[test]
fn set_alarm2_day() {
    let alarm = DayAlarm2 {
        day: 15,
        hour: Hours::H24(7),
        minute: 30,
    };
    let mut rtc = new_ds1337(&[
        I2cTrans::write_read(DEV_ADDR, vec![0x0B], vec![0x00, 0x00, 0x00]),
        I2cTrans::write(DEV_ADDR, vec![0x0B, 0x30, 0x07, 0x15]),
    ]);
    rtc.set_alarm2_day(alarm, Alarm2Matching::AllMatch).unwrap();
    destroy(rtc);
}

#[test]
fn enable_alarm1_interrupts() {
    let mut rtc = new_ds1337(&[
        I2cTrans::write_read(DEV_ADDR, vec![0x0E], vec![0x00]),
        I2cTrans::write(DEV_ADDR, vec![0x0E, 0x01]),
    ]);
    rtc.enable_alarm1_interrupts().unwrap();
    destroy(rtc);
}

#[test]
fn query_and_clear_alarm2_flag() {
    let mut rtc = new_ds1337(&[
        I2cTrans::write_read(DEV_ADDR, vec![0x0F], vec![0x02]),
        I2cTrans::write_read(DEV_ADDR, vec![0x0F], vec![0x02]),
        I2cTrans::write(DEV_ADDR, vec![0x0F, 0x01]),
    ]);
    assert!(rtc.has_alarm2_matched().unwrap());
    rtc.clear_alarm2_matched_flag().unwrap();
    destroy(rtc);
}
