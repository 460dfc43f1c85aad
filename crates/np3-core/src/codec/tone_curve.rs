//! Tone curve section
//!
//! Only present in files long enough to hold it. The point list is a count
//! byte followed by (x, y) byte pairs; the raw curve is 257 big-endian u16
//! samples at a fixed offset, independent of the point count.

use super::slot_mut;
use crate::Result;
use crate::layout::{
    MAX_TONE_CURVE_POINTS, MIN_TONE_CURVE_SIZE, OFFSET_TONE_CURVE_POINTS, OFFSET_TONE_CURVE_RAW,
    TONE_CURVE_END, TONE_CURVE_RAW_LEN,
};
use crate::profile::ToneCurve;
use crate::types::ToneCurvePoint;

/// Size of the point list region: count byte plus 20 pairs
const POINTS_REGION_LEN: usize = 1 + MAX_TONE_CURVE_POINTS * 2;

/// Read the tone curve, or `None` if the buffer has no tone curve section
pub fn read_tone_curve(buf: &[u8]) -> Option<ToneCurve> {
    if buf.len() < MIN_TONE_CURVE_SIZE {
        return None;
    }
    Some(ToneCurve {
        raw: read_raw(buf),
        points: read_points(buf),
    })
}

fn read_points(buf: &[u8]) -> Vec<ToneCurvePoint> {
    let count = buf[OFFSET_TONE_CURVE_POINTS] as usize;
    let start = OFFSET_TONE_CURVE_POINTS + 1;
    // A count of up to 255 still ends before MIN_TONE_CURVE_SIZE
    bytemuck::cast_slice::<u8, ToneCurvePoint>(&buf[start..start + count * 2]).to_vec()
}

fn read_raw(buf: &[u8]) -> Vec<u16> {
    let byte = |i: usize| buf.get(i).copied().unwrap_or(0);
    (0..TONE_CURVE_RAW_LEN)
        .map(|i| {
            let offset = OFFSET_TONE_CURVE_RAW + i * 2;
            u16::from_be_bytes([byte(offset), byte(offset + 1)])
        })
        .collect()
}

/// Write the point list and raw curve.
///
/// Points past the twentieth are dropped, unused pair slots are zeroed, and
/// samples saturate at 32767. The buffer must reach the end of the raw curve.
pub fn write_tone_curve(buf: &mut [u8], curve: &ToneCurve) -> Result<()> {
    slot_mut(buf, OFFSET_TONE_CURVE_POINTS, TONE_CURVE_END - OFFSET_TONE_CURVE_POINTS)?;
    let curve = curve.normalized();

    let region = slot_mut(buf, OFFSET_TONE_CURVE_POINTS, POINTS_REGION_LEN)?;
    region.fill(0);
    region[0] = curve.points.len() as u8;
    let pairs: &[u8] = bytemuck::cast_slice(curve.points.as_slice());
    region[1..1 + pairs.len()].copy_from_slice(pairs);

    let raw = slot_mut(buf, OFFSET_TONE_CURVE_RAW, TONE_CURVE_RAW_LEN * 2)?;
    for (chunk, sample) in raw.chunks_exact_mut(2).zip(&curve.raw) {
        chunk.copy_from_slice(&sample.to_be_bytes());
    }
    Ok(())
}
