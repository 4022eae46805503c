use ds_rtc::{
    Alarm1Matching, Alarm2Matching, AlarmDayMode, DayAlarm1, DayAlarm2, Error, Hours,
    WeekdayAlarm1,
};
use embedded_hal_mock::eh1::i2c::Transaction as I2cTrans;

mod common;
use common::{destroy, new_ds3231, DEV_ADDR};

#[test]
fn set_alarm1_day() {
    let alarm = DayAlarm1 {
        day: 3,
        hour: Hours::H24(20),
        minute: 15,
        second: 30,
    };
    let mut rtc = new_ds3231(&[
        I2cTrans::write_read(DEV_ADDR, vec![0x07], vec![0x00; 4]),
        // only hours+minutes+seconds matter: match bit set on the day register
        I2cTrans::write(DEV_ADDR, vec![0x07, 0x30, 0x15, 0x20, 0x83]),
    ]);
    rtc.set_alarm1_day(alarm, Alarm1Matching::HoursMinutesAndSecondsMatch)
        .unwrap();
    destroy(rtc);
}

#[test]
fn set_alarm1_weekday_sets_day_mode_bit() {
    let alarm = WeekdayAlarm1 {
        weekday: 5,
        hour: Hours::AM(11),
        minute: 0,
        second: 0,
    };
    let mut rtc = new_ds3231(&[
        I2cTrans::write_read(DEV_ADDR, vec![0x07], vec![0x00; 4]),
        I2cTrans::write(DEV_ADDR, vec![0x07, 0x00, 0x00, 0x40 | 0x11, 0x40 | 0x05]),
    ]);
    rtc.set_alarm1_weekday(alarm, Alarm1Matching::AllMatch)
        .unwrap();
    destroy(rtc);
}

#[test]
fn set_alarm1_rejects_invalid_minute() {
    let alarm = DayAlarm1 {
        day: 1,
        hour: Hours::H24(0),
        minute: 60,
        second: 0,
    };
    let mut rtc = new_ds3231(&[I2cTrans::write_read(DEV_ADDR, vec![0x07], vec![0x00; 4])]);
    assert!(matches!(
        rtc.set_alarm1_day(alarm, Alarm1Matching::AllMatch),
        Err(Error::InvalidInputData)
    ));
    destroy(rtc);
}

#[test]
fn set_alarm2_day() {
    let alarm = DayAlarm2 {
        day: 21,
        hour: Hours::H24(7),
        minute: 45,
    };
    let mut rtc = new_ds3231(&[
        I2cTrans::write_read(DEV_ADDR, vec![0x0B], vec![0x00; 3]),
        I2cTrans::write(DEV_ADDR, vec![0x0B, 0x45, 0x07, 0x80 | 0x21]),
    ]);
    rtc.set_alarm2_day(alarm, Alarm2Matching::HoursAndMinutesMatch)
        .unwrap();
    destroy(rtc);
}

#[test]
fn rewrite_alarm1_matching_preserves_time_fields() {
    let mut rtc = new_ds3231(&[
        I2cTrans::write_read(DEV_ADDR, vec![0x07], vec![0x30, 0x15, 0x20, 0x03]),
        I2cTrans::write(DEV_ADDR, vec![0x07, 0xB0, 0x95, 0xA0, 0xC3]),
    ]);
    rtc.set_alarm1_matching(Alarm1Matching::EverySecond, AlarmDayMode::Weekday)
        .unwrap();
    destroy(rtc);
}

#[test]
fn rewrite_alarm2_matching_preserves_time_fields() {
    let mut rtc = new_ds3231(&[
        I2cTrans::write_read(DEV_ADDR, vec![0x0B], vec![0x45, 0x07, 0x21]),
        I2cTrans::write(DEV_ADDR, vec![0x0B, 0x45, 0x07, 0x80 | 0x21]),
    ]);
    rtc.set_alarm2_matching(
        Alarm2Matching::HoursAndMinutesMatch,
        AlarmDayMode::DayOfMonth,
    )
    .unwrap();
    destroy(rtc);
}

#[test]
fn read_alarm1_config() {
    let mut rtc = new_ds3231(&[I2cTrans::write_read(
        DEV_ADDR,
        vec![0x07],
        vec![0xB0, 0x95, 0xA0, 0xC3],
    )]);
    assert_eq!(
        rtc.alarm1_config().unwrap(),
        (Alarm1Matching::EverySecond, AlarmDayMode::Weekday)
    );
    destroy(rtc);
}

#[test]
fn read_alarm2_config() {
    let mut rtc = new_ds3231(&[I2cTrans::write_read(
        DEV_ADDR,
        vec![0x0B],
        vec![0x45, 0x07, 0x80 | 0x21],
    )]);
    assert_eq!(
        rtc.alarm2_config().unwrap(),
        (Alarm2Matching::HoursAndMinutesMatch, AlarmDayMode::DayOfMonth)
    );
    destroy(rtc);
}

#[test]
fn inconsistent_alarm1_match_bits_surface_invalid_device_state() {
    let mut rtc = new_ds3231(&[I2cTrans::write_read(
        DEV_ADDR,
        vec![0x07],
        vec![0xB0, 0x15, 0xA0, 0x83],
    )]);
    assert!(matches!(
        rtc.alarm1_config(),
        Err(Error::InvalidDeviceState)
    ));
    destroy(rtc);
}
