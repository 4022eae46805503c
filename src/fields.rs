//! Field descriptors.
//!
//! A [`FieldSpec`] maps one logical value to the register(s) it lives in and
//! to the bits it owns there. Decoding is a pure function of the register
//! bytes; encoding merges into the current bytes under the field's mask so
//! bits belonging to other fields are never disturbed. The descriptor
//! tables are constants shared by every device instance of the family.

use crate::codec;
use crate::{Error, Hours, Register};

/// Logical fields of the timekeeping and alarm register blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Seconds, 0-59
    Seconds,
    /// Minutes, 0-59
    Minutes,
    /// Hour with 12/24-hour representation
    Hours,
    /// Day of the week, 1-7
    Weekday,
    /// Day of the month, 1-31
    DayOfMonth,
    /// Month, 1-12
    Month,
    /// Two-digit year offset from the base century
    Year,
    /// Die temperature (decode-only)
    Temperature,
}

/// Decode/encode rule attached to a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// Packed BCD with an inclusive legal range.
    Bcd { min: u8, max: u8 },
    /// Hour byte carrying the 12/24-hour mode bit and the AM/PM bit.
    Hours,
    /// Two-digit year in the second register of the span.
    YearOffset,
    /// Signed fixed-point temperature, 0.25 °C steps. Decode-only.
    Temperature,
}

/// A decoded, or to-be-encoded, field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// Plain numeric value (seconds, minutes, days, year offset, ...)
    Units(u8),
    /// Hour in its 12/24-hour representation
    Time(Hours),
    /// Temperature in degrees Celsius
    Celsius(f32),
}

/// One read/write bit of a control or status register.
///
/// The position is supplied per chip/feature; the set/clear logic is
/// position-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    /// Register index the bit lives in.
    pub register: u8,
    /// Single-bit mask within that register.
    pub mask: u8,
}

impl Flag {
    /// Whether the flag is set in the given register byte.
    pub fn is_set(&self, byte: u8) -> bool {
        byte & self.mask != 0
    }

    /// Return the byte with the flag set or cleared, all other bits kept.
    pub fn apply(&self, byte: u8, value: bool) -> u8 {
        codec::set_bit(byte, self.mask, value)
    }
}

/// Maps a logical field to its registers and the bits it owns there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The logical field this descriptor encodes.
    pub field: Field,
    /// First register index.
    pub index: u8,
    /// Number of consecutive registers.
    pub span: u8,
    /// Bits owned by this field, one mask per spanned register.
    pub mask: [u8; 2],
    /// How the owned bits are interpreted.
    pub codec: Codec,
}

impl FieldSpec {
    const fn single(field: Field, index: u8, mask: u8, codec: Codec) -> Self {
        FieldSpec {
            field,
            index,
            span: 1,
            mask: [mask, 0x00],
            codec,
        }
    }

    /// Decode the field out of the register bytes it spans.
    pub fn decode<E>(&self, regs: &[u8]) -> Result<FieldValue, Error<E>> {
        match self.codec {
            Codec::Bcd { min, max } => {
                let value = codec::packed_bcd_to_decimal(regs[0] & self.mask[0])?;
                if value < min || value > max {
                    return Err(Error::InvalidDeviceState);
                }
                Ok(FieldValue::Units(value))
            }
            Codec::Hours => {
                let hours = codec::hours_from_register(regs[0] & self.mask[0])?;
                Ok(FieldValue::Time(hours))
            }
            Codec::YearOffset => {
                let value = codec::packed_bcd_to_decimal(regs[1] & self.mask[1])?;
                Ok(FieldValue::Units(value))
            }
            Codec::Temperature => Ok(FieldValue::Celsius(codec::temperature_from_registers(
                regs[0], regs[1],
            ))),
        }
    }

    /// Merge the encoded value into the current register bytes.
    ///
    /// Bits outside the field's mask are left exactly as read, which is the
    /// merge step of the read-modify-write cycle. Validation happens before
    /// any byte is modified.
    pub fn encode<E>(&self, value: FieldValue, regs: &mut [u8]) -> Result<(), Error<E>> {
        let mut encoded = [0u8; 2];
        match (self.codec, value) {
            (Codec::Bcd { min, max }, FieldValue::Units(v)) => {
                if v < min || v > max {
                    return Err(Error::InvalidInputData);
                }
                encoded[0] = codec::decimal_to_packed_bcd(v);
            }
            (Codec::Hours, FieldValue::Time(hours)) => {
                encoded[0] = codec::hours_to_register(hours)?;
            }
            (Codec::YearOffset, FieldValue::Units(v)) => {
                if v > 99 {
                    return Err(Error::InvalidInputData);
                }
                encoded[1] = codec::decimal_to_packed_bcd(v);
            }
            (Codec::Temperature, _) => return Err(Error::ReadOnlyField),
            _ => return Err(Error::InvalidInputData),
        }
        for (i, reg) in regs.iter_mut().enumerate() {
            *reg = (*reg & !self.mask[i]) | (encoded[i] & self.mask[i]);
        }
        Ok(())
    }
}

/// Timekeeping block at 0x00-0x06, shared by the DS3231, DS1307 and DS1337.
///
/// The masks keep the clock-halt bit (DS1307, seconds register) and the
/// century bit (DS3231, month register) out of the time fields.
pub const CLOCK_BLOCK: &[FieldSpec] = &[
    FieldSpec::single(
        Field::Seconds,
        Register::SECONDS,
        0x7F,
        Codec::Bcd { min: 0, max: 59 },
    ),
    FieldSpec::single(
        Field::Minutes,
        Register::MINUTES,
        0x7F,
        Codec::Bcd { min: 0, max: 59 },
    ),
    FieldSpec::single(Field::Hours, Register::HOURS, 0x7F, Codec::Hours),
    FieldSpec::single(
        Field::Weekday,
        Register::DOW,
        0x07,
        Codec::Bcd { min: 1, max: 7 },
    ),
    FieldSpec::single(
        Field::DayOfMonth,
        Register::DOM,
        0x3F,
        Codec::Bcd { min: 1, max: 31 },
    ),
    FieldSpec::single(
        Field::Month,
        Register::MONTH,
        0x1F,
        Codec::Bcd { min: 1, max: 12 },
    ),
    FieldSpec {
        field: Field::Year,
        index: Register::MONTH,
        span: 2,
        mask: [0x00, 0xFF],
        codec: Codec::YearOffset,
    },
];

/// Alarm 1 block at 0x07-0x0A (DS3231/DS1337).
///
/// Bit 7 of every register is an alarm match bit and bit 6 of the day
/// register is the day-mode bit; both belong to the alarm configuration,
/// so the time-field masks exclude them.
pub const ALARM1_BLOCK: &[FieldSpec] = &[
    FieldSpec::single(
        Field::Seconds,
        Register::ALARM1_SECONDS,
        0x7F,
        Codec::Bcd { min: 0, max: 59 },
    ),
    FieldSpec::single(
        Field::Minutes,
        Register::ALARM1_MINUTES,
        0x7F,
        Codec::Bcd { min: 0, max: 59 },
    ),
    FieldSpec::single(Field::Hours, Register::ALARM1_HOURS, 0x7F, Codec::Hours),
    FieldSpec::single(
        Field::DayOfMonth,
        Register::ALARM1_DAY,
        0x3F,
        Codec::Bcd { min: 1, max: 31 },
    ),
    FieldSpec::single(
        Field::Weekday,
        Register::ALARM1_DAY,
        0x0F,
        Codec::Bcd { min: 1, max: 7 },
    ),
];

/// Alarm 2 block at 0x0B-0x0D (DS3231/DS1337). No seconds register.
pub const ALARM2_BLOCK: &[FieldSpec] = &[
    FieldSpec::single(
        Field::Minutes,
        Register::ALARM2_MINUTES,
        0x7F,
        Codec::Bcd { min: 0, max: 59 },
    ),
    FieldSpec::single(Field::Hours, Register::ALARM2_HOURS, 0x7F, Codec::Hours),
    FieldSpec::single(
        Field::DayOfMonth,
        Register::ALARM2_DAY,
        0x3F,
        Codec::Bcd { min: 1, max: 31 },
    ),
    FieldSpec::single(
        Field::Weekday,
        Register::ALARM2_DAY,
        0x0F,
        Codec::Bcd { min: 1, max: 7 },
    ),
];

/// Temperature register pair at 0x11-0x12 (DS3231). Decode-only.
pub const TEMPERATURE: FieldSpec = FieldSpec {
    field: Field::Temperature,
    index: Register::TEMP_MSB,
    span: 2,
    mask: [0xFF, 0xC0],
    codec: Codec::Temperature,
};

/// Find a field's descriptor within a block.
pub fn field_spec(block: &[FieldSpec], field: Field) -> Option<&FieldSpec> {
    block.iter().find(|spec| spec.field == field)
}

/// Decode a field from a buffer that starts at register `base`.
pub fn decode_from<E>(regs: &[u8], base: u8, spec: &FieldSpec) -> Result<FieldValue, Error<E>> {
    let i = (spec.index - base) as usize;
    spec.decode(&regs[i..i + spec.span as usize])
}

/// Encode a field into a buffer that starts at register `base`.
pub fn encode_into<E>(
    regs: &mut [u8],
    base: u8,
    spec: &FieldSpec,
    value: FieldValue,
) -> Result<(), Error<E>> {
    let i = (spec.index - base) as usize;
    spec.encode(value, &mut regs[i..i + spec.span as usize])
}
