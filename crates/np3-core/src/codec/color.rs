//! Color blender and color grading

use super::{byte_at, from_biased, pack_hue, saturate, slot_mut, to_biased, unpack_hue};
use super::scalar::{
    read_color_grading_balance, read_color_grading_blending, write_color_grading_balance,
    write_color_grading_blending,
};
use crate::Result;
use crate::layout::{BlenderAxis, COLOR_BLENDER_STRIDE, COLOR_GRADING_STRIDE, GradingZone};
use crate::profile::{ColorBlender, ColorBlenderValues, ColorGrading, ColorGradingValues};

fn biased_component(field: &'static str, value: i32) -> u8 {
    to_biased(saturate(field, value, -100, 100))
}

/// Read one blender axis: three biased bytes
pub fn read_color_blender_axis(buf: &[u8], axis: BlenderAxis) -> ColorBlenderValues {
    let offset = axis.offset();
    ColorBlenderValues {
        hue: from_biased(byte_at(buf, offset)),
        chroma: from_biased(byte_at(buf, offset + 1)),
        brightness: from_biased(byte_at(buf, offset + 2)),
    }
}

pub fn write_color_blender_axis(
    buf: &mut [u8],
    axis: BlenderAxis,
    values: &ColorBlenderValues,
) -> Result<()> {
    let slot = slot_mut(buf, axis.offset(), COLOR_BLENDER_STRIDE)?;
    slot[0] = biased_component("color_blender.hue", values.hue);
    slot[1] = biased_component("color_blender.chroma", values.chroma);
    slot[2] = biased_component("color_blender.brightness", values.brightness);
    Ok(())
}

pub fn read_color_blender(buf: &[u8]) -> ColorBlender {
    let mut blender = ColorBlender::default();
    for axis in BlenderAxis::ALL {
        *blender.axis_mut(axis) = read_color_blender_axis(buf, axis);
    }
    blender
}

pub fn write_color_blender(buf: &mut [u8], blender: &ColorBlender) -> Result<()> {
    for axis in BlenderAxis::ALL {
        write_color_blender_axis(buf, axis, blender.axis(axis))?;
    }
    Ok(())
}

/// Read one grading zone: 12-bit hue, then biased chroma and brightness
pub fn read_color_grading_zone(buf: &[u8], zone: GradingZone) -> ColorGradingValues {
    let offset = zone.offset();
    ColorGradingValues {
        hue: unpack_hue(byte_at(buf, offset), byte_at(buf, offset + 1)),
        chroma: from_biased(byte_at(buf, offset + 2)),
        brightness: from_biased(byte_at(buf, offset + 3)),
    }
}

/// Hue wraps modulo 360; chroma and brightness saturate.
pub fn write_color_grading_zone(
    buf: &mut [u8],
    zone: GradingZone,
    values: &ColorGradingValues,
) -> Result<()> {
    let slot = slot_mut(buf, zone.offset(), COLOR_GRADING_STRIDE)?;
    slot[..2].copy_from_slice(&pack_hue(values.hue));
    slot[2] = biased_component("color_grading.chroma", values.chroma);
    slot[3] = biased_component("color_grading.brightness", values.brightness);
    Ok(())
}

pub fn read_color_grading(buf: &[u8]) -> ColorGrading {
    ColorGrading {
        highlights: read_color_grading_zone(buf, GradingZone::Highlights),
        mid_tone: read_color_grading_zone(buf, GradingZone::MidTone),
        shadows: read_color_grading_zone(buf, GradingZone::Shadows),
        blending: read_color_grading_blending(buf),
        balance: read_color_grading_balance(buf),
    }
}

pub fn write_color_grading(buf: &mut [u8], grading: &ColorGrading) -> Result<()> {
    for zone in GradingZone::ALL {
        write_color_grading_zone(buf, zone, grading.zone(zone))?;
    }
    write_color_grading_blending(buf, grading.blending)?;
    write_color_grading_balance(buf, grading.balance)
}
