//! NP3 encoding

use crate::Result;
use crate::codec::color::{write_color_blender, write_color_grading};
use crate::codec::scalar::*;
use crate::codec::tone_curve::write_tone_curve;
use crate::profile::PictureControl;
use crate::template::Template;

/// Encode a profile into a new NP3 buffer.
///
/// The name is validated first; every other value is normalized once (see
/// [`PictureControl::normalized`]) and then written over a copy of the
/// matching [`Template`].
///
/// # Errors
///
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the name is
/// longer than 19 characters or is not plain ASCII.
pub fn encode(profile: &PictureControl) -> Result<Vec<u8>> {
    validate_name(&profile.name)?;
    let profile = profile.normalized();
    let template = Template::for_profile(&profile);
    tracing::trace!(?template, name = %profile.name, "encoding picture control");

    let mut buf = template.to_vec();
    write_name(&mut buf, &profile.name)?;
    write_sharpening(&mut buf, profile.sharpening)?;
    write_mid_range_sharpening(&mut buf, profile.mid_range_sharpening)?;
    write_clarity(&mut buf, profile.clarity)?;
    write_contrast(&mut buf, profile.contrast)?;
    write_highlights(&mut buf, profile.highlights)?;
    write_shadows(&mut buf, profile.shadows)?;
    write_white_level(&mut buf, profile.white_level)?;
    write_black_level(&mut buf, profile.black_level)?;
    write_saturation(&mut buf, profile.saturation)?;
    write_color_blender(&mut buf, &profile.color_blender)?;
    write_color_grading(&mut buf, &profile.color_grading)?;
    if let Some(curve) = &profile.tone_curve {
        write_tone_curve(&mut buf, curve)?;
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode;
    use crate::layout::OFFSET_SHARPENING;
    use crate::profile::ToneCurve;

    #[test]
    fn test_encode_default_profile() {
        let buf = encode(&PictureControl::new("test")).unwrap();
        assert_eq!(buf.len(), Template::Standard.len());
        assert_eq!(buf[OFFSET_SHARPENING], 0x88);
        assert_eq!(decode(&buf), PictureControl::new("test"));
    }

    #[test]
    fn test_encode_keeps_template_bytes() {
        let buf = encode(&PictureControl::new("keep")).unwrap();
        let template = Template::Standard.bytes();
        assert_eq!(&buf[..0x18], &template[..0x18]);
        assert_eq!(&buf[0x188..], &template[0x188..]);
    }

    #[test]
    fn test_encode_with_tone_curve() {
        let profile = PictureControl {
            tone_curve: Some(ToneCurve::linear()),
            ..PictureControl::new("curve")
        };
        let buf = encode(&profile).unwrap();
        assert_eq!(buf.len(), Template::ToneCurve.len());
        assert_eq!(decode(&buf), profile);
    }

    #[test]
    fn test_encode_rejects_long_name() {
        let result = encode(&PictureControl::new("ABCDEFGHIJKLMNOPQRST"));
        assert!(matches!(result, Err(crate::Error::InvalidArgument(_))));
    }
}
