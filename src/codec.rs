//! Pure register codecs.
//!
//! Every function here is a stateless byte transform; nothing in this
//! module touches the bus.

use crate::{BitFlags, Error, Hours};

/// Convert a packed-BCD byte into its decimal value.
///
/// A nibble above 9 cannot come from a healthy device, so it is reported
/// instead of being wrapped into a wrong value.
pub(crate) fn packed_bcd_to_decimal<E>(data: u8) -> Result<u8, Error<E>> {
    if (data & 0x0F) > 9 || (data >> 4) > 9 {
        return Err(Error::InvalidDeviceState);
    }
    Ok(10 * (data >> 4) + (data & 0x0F))
}

/// Convert a decimal value (already validated by the caller) to packed BCD.
pub(crate) fn decimal_to_packed_bcd(dec: u8) -> u8 {
    ((dec / 10) << 4) | (dec % 10)
}

/// Decode the hour byte, branching on the 12/24-hour mode bit.
pub(crate) fn hours_from_register<E>(data: u8) -> Result<Hours, Error<E>> {
    if data & BitFlags::H24_H12 == 0 {
        let hour = packed_bcd_to_decimal(data & 0x3F)?;
        if hour > 23 {
            return Err(Error::InvalidDeviceState);
        }
        Ok(Hours::H24(hour))
    } else {
        let hour = packed_bcd_to_decimal(data & 0x1F)?;
        if !(1..=12).contains(&hour) {
            return Err(Error::InvalidDeviceState);
        }
        if data & BitFlags::AM_PM == 0 {
            Ok(Hours::AM(hour))
        } else {
            Ok(Hours::PM(hour))
        }
    }
}

/// Encode an hour value, setting the mode bit consistently with the chosen
/// representation.
pub(crate) fn hours_to_register<E>(hours: Hours) -> Result<u8, Error<E>> {
    match hours {
        Hours::H24(h) => {
            if h > 23 {
                return Err(Error::InvalidInputData);
            }
            Ok(decimal_to_packed_bcd(h))
        }
        Hours::AM(h) => {
            if !(1..=12).contains(&h) {
                return Err(Error::InvalidInputData);
            }
            Ok(BitFlags::H24_H12 | decimal_to_packed_bcd(h))
        }
        Hours::PM(h) => {
            if !(1..=12).contains(&h) {
                return Err(Error::InvalidInputData);
            }
            Ok(BitFlags::H24_H12 | BitFlags::AM_PM | decimal_to_packed_bcd(h))
        }
    }
}

/// Decode the temperature register pair: signed integer part in the first
/// byte, two fraction bits (0.25 °C steps) at the top of the second.
pub(crate) fn temperature_from_registers(msb: u8, lsb: u8) -> f32 {
    let raw = (i16::from(msb as i8) << 2) | i16::from(lsb >> 6);
    f32::from(raw) * 0.25
}

/// Set or clear the masked bit, preserving every other bit of the byte.
pub(crate) fn set_bit(byte: u8, mask: u8, value: bool) -> u8 {
    if value {
        byte | mask
    } else {
        byte & !mask
    }
}
