//! NP3 decoding

use crate::codec::color::{read_color_blender, read_color_grading};
use crate::codec::scalar::*;
use crate::codec::tone_curve::read_tone_curve;
use crate::profile::PictureControl;

/// Decode an NP3 buffer.
///
/// Never fails. Bytes missing from a truncated buffer read as logical zero,
/// so callers should pass a complete file; the tone curve is `None` unless the
/// buffer is long enough to hold that section.
pub fn decode(buf: &[u8]) -> PictureControl {
    tracing::trace!(len = buf.len(), "decoding picture control");

    PictureControl {
        name: read_name(buf),
        sharpening: read_sharpening(buf),
        mid_range_sharpening: read_mid_range_sharpening(buf),
        clarity: read_clarity(buf),
        contrast: read_contrast(buf),
        highlights: read_highlights(buf),
        shadows: read_shadows(buf),
        white_level: read_white_level(buf),
        black_level: read_black_level(buf),
        saturation: read_saturation(buf),
        color_blender: read_color_blender(buf),
        color_grading: read_color_grading(buf),
        tone_curve: read_tone_curve(buf),
    }
}
