//! Name and single-byte scalar fields

use super::{byte_at, from_biased, saturate, slot_mut, to_biased};
use crate::layout::{NAME_LEN, OFFSET_NAME, ScalarField};
use crate::types::QuarterStep;
use crate::{Error, Result};

/// Check that a name fits the 19-byte window and survives a round trip.
pub fn validate_name(name: &str) -> Result<()> {
    if !name.is_ascii() {
        return Err(Error::InvalidArgument(format!(
            "name must be ASCII: {:?}",
            name
        )));
    }
    if name.len() > NAME_LEN {
        return Err(Error::InvalidArgument(format!(
            "name must be at most {} characters, got {}",
            NAME_LEN,
            name.len()
        )));
    }
    if name.contains('\0') {
        return Err(Error::InvalidArgument(
            "name must not contain NUL".to_string(),
        ));
    }
    Ok(())
}

/// Read the name, stopping at the first NUL
pub fn read_name(buf: &[u8]) -> String {
    buf.iter()
        .skip(OFFSET_NAME)
        .take(NAME_LEN)
        .take_while(|&&b| b != 0)
        .map(|&b| b as char)
        .collect()
}

/// Write the name, clearing the rest of the window
pub fn write_name(buf: &mut [u8], name: &str) -> Result<()> {
    validate_name(name)?;
    let window = slot_mut(buf, OFFSET_NAME, NAME_LEN)?;
    window.fill(0);
    window[..name.len()].copy_from_slice(name.as_bytes());
    Ok(())
}

fn read_stored(buf: &[u8], field: ScalarField) -> i32 {
    from_biased(byte_at(buf, field.offset()))
}

fn write_stored(buf: &mut [u8], field: ScalarField, stored: i32) -> Result<()> {
    slot_mut(buf, field.offset(), 1)?[0] = to_biased(stored);
    Ok(())
}

fn read_quarter_step(buf: &[u8], field: ScalarField) -> QuarterStep {
    QuarterStep::from_quarters(read_stored(buf, field))
}

fn write_quarter_step(buf: &mut [u8], field: ScalarField, value: QuarterStep) -> Result<()> {
    let (min, max) = field.range();
    let quarters = saturate(field.name(), value.quarters(), min * 4, max * 4);
    write_stored(buf, field, quarters)
}

fn read_integer(buf: &[u8], field: ScalarField) -> i32 {
    read_stored(buf, field)
}

fn write_integer(buf: &mut [u8], field: ScalarField, value: i32) -> Result<()> {
    let (min, max) = field.range();
    write_stored(buf, field, saturate(field.name(), value, min, max))
}

/// Sharpening, -3.0..=9.0
pub fn read_sharpening(buf: &[u8]) -> QuarterStep {
    read_quarter_step(buf, ScalarField::Sharpening)
}

pub fn write_sharpening(buf: &mut [u8], value: QuarterStep) -> Result<()> {
    write_quarter_step(buf, ScalarField::Sharpening, value)
}

/// Mid-range sharpening, -5.0..=5.0
pub fn read_mid_range_sharpening(buf: &[u8]) -> QuarterStep {
    read_quarter_step(buf, ScalarField::MidRangeSharpening)
}

pub fn write_mid_range_sharpening(buf: &mut [u8], value: QuarterStep) -> Result<()> {
    write_quarter_step(buf, ScalarField::MidRangeSharpening, value)
}

/// Clarity, -5.0..=5.0
pub fn read_clarity(buf: &[u8]) -> QuarterStep {
    read_quarter_step(buf, ScalarField::Clarity)
}

pub fn write_clarity(buf: &mut [u8], value: QuarterStep) -> Result<()> {
    write_quarter_step(buf, ScalarField::Clarity, value)
}

pub fn read_contrast(buf: &[u8]) -> i32 {
    read_integer(buf, ScalarField::Contrast)
}

pub fn write_contrast(buf: &mut [u8], value: i32) -> Result<()> {
    write_integer(buf, ScalarField::Contrast, value)
}

pub fn read_highlights(buf: &[u8]) -> i32 {
    read_integer(buf, ScalarField::Highlights)
}

pub fn write_highlights(buf: &mut [u8], value: i32) -> Result<()> {
    write_integer(buf, ScalarField::Highlights, value)
}

pub fn read_shadows(buf: &[u8]) -> i32 {
    read_integer(buf, ScalarField::Shadows)
}

pub fn write_shadows(buf: &mut [u8], value: i32) -> Result<()> {
    write_integer(buf, ScalarField::Shadows, value)
}

pub fn read_white_level(buf: &[u8]) -> i32 {
    read_integer(buf, ScalarField::WhiteLevel)
}

pub fn write_white_level(buf: &mut [u8], value: i32) -> Result<()> {
    write_integer(buf, ScalarField::WhiteLevel, value)
}

pub fn read_black_level(buf: &[u8]) -> i32 {
    read_integer(buf, ScalarField::BlackLevel)
}

pub fn write_black_level(buf: &mut [u8], value: i32) -> Result<()> {
    write_integer(buf, ScalarField::BlackLevel, value)
}

pub fn read_saturation(buf: &[u8]) -> i32 {
    read_integer(buf, ScalarField::Saturation)
}

pub fn write_saturation(buf: &mut [u8], value: i32) -> Result<()> {
    write_integer(buf, ScalarField::Saturation, value)
}

/// Color grading blending, 0..=100
pub fn read_color_grading_blending(buf: &[u8]) -> i32 {
    read_integer(buf, ScalarField::GradingBlending)
}

pub fn write_color_grading_blending(buf: &mut [u8], value: i32) -> Result<()> {
    write_integer(buf, ScalarField::GradingBlending, value)
}

/// Color grading balance, -100..=100
pub fn read_color_grading_balance(buf: &[u8]) -> i32 {
    read_integer(buf, ScalarField::GradingBalance)
}

pub fn write_color_grading_balance(buf: &mut [u8], value: i32) -> Result<()> {
    write_integer(buf, ScalarField::GradingBalance, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{OFFSET_CLARITY, OFFSET_CONTRAST, OFFSET_SHARPENING};

    fn blank() -> Vec<u8> {
        vec![0x80; 0x190]
    }

    #[test]
    fn test_name_roundtrip() {
        let mut buf = blank();
        write_name(&mut buf, "PORTRAIT-01").unwrap();
        assert_eq!(read_name(&buf), "PORTRAIT-01");
        assert_eq!(buf[OFFSET_NAME + 11], 0);
    }

    #[test]
    fn test_name_overwrite_clears_tail() {
        let mut buf = blank();
        write_name(&mut buf, "ABCDEFGHIJKLMNOPQRS").unwrap();
        write_name(&mut buf, "XY").unwrap();
        assert_eq!(read_name(&buf), "XY");
    }

    #[test]
    fn test_name_without_nul_keeps_all_bytes() {
        let mut buf = blank();
        buf[OFFSET_NAME..OFFSET_NAME + NAME_LEN].copy_from_slice(b"ABCDEFGHIJKLMNOPQRS");
        assert_eq!(read_name(&buf), "ABCDEFGHIJKLMNOPQRS");
    }

    #[test]
    fn test_name_too_long() {
        let mut buf = blank();
        let err = write_name(&mut buf, "ABCDEFGHIJKLMNOPQRST").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_name_rejects_non_ascii_and_nul() {
        assert!(validate_name("café").is_err());
        assert!(validate_name("a\0b").is_err());
        assert!(validate_name("").is_ok());
    }

    #[test]
    fn test_quarter_step_bytes() {
        let mut buf = blank();
        write_sharpening(&mut buf, QuarterStep::from_f64(2.0)).unwrap();
        assert_eq!(buf[OFFSET_SHARPENING], 0x88);

        write_clarity(&mut buf, QuarterStep::from_f64(-0.25)).unwrap();
        assert_eq!(buf[OFFSET_CLARITY], 0x7f);
        assert_eq!(read_clarity(&buf).to_f64(), -0.25);
    }

    #[test]
    fn test_sub_quarter_fractions_floor() {
        let mut buf = blank();
        write_clarity(&mut buf, QuarterStep::from_f64(0.4)).unwrap();
        assert_eq!(buf[OFFSET_CLARITY], 0x81);
        write_clarity(&mut buf, QuarterStep::from_f64(-0.1)).unwrap();
        assert_eq!(buf[OFFSET_CLARITY], 0x7f);
        write_clarity(&mut buf, QuarterStep::from_f64(1.2)).unwrap();
        assert_eq!(buf[OFFSET_CLARITY], 0x84);
    }

    #[test]
    fn test_quarter_step_saturates() {
        let mut buf = blank();
        write_sharpening(&mut buf, QuarterStep::from_f64(12.0)).unwrap();
        assert_eq!(read_sharpening(&buf), QuarterStep::from_units(9));

        write_sharpening(&mut buf, QuarterStep::from_f64(-4.5)).unwrap();
        assert_eq!(read_sharpening(&buf), QuarterStep::from_units(-3));
    }

    #[test]
    fn test_integer_saturates() {
        let mut buf = blank();
        write_contrast(&mut buf, 250).unwrap();
        assert_eq!(buf[OFFSET_CONTRAST], 0x80 + 100);
        write_contrast(&mut buf, i32::MIN).unwrap();
        assert_eq!(read_contrast(&buf), -100);
    }

    #[test]
    fn test_blending_floor_is_zero() {
        let mut buf = blank();
        write_color_grading_blending(&mut buf, -20).unwrap();
        assert_eq!(read_color_grading_blending(&buf), 0);
    }

    #[test]
    fn test_short_buffer() {
        let mut buf = vec![0u8; 0x20];
        assert_eq!(read_contrast(&buf), 0);
        assert!(matches!(
            write_contrast(&mut buf, 10),
            Err(Error::BufferSize { .. })
        ));
        assert!(matches!(
            write_name(&mut buf, "test"),
            Err(Error::BufferSize { .. })
        ));
    }
}
