//! Saturation and Wraparound
//!
//! Out-of-range values must produce the same bytes as their nearest
//! in-range value.

use np3_core::{
    BlenderAxis, ColorBlenderValues, ColorGradingValues, GradingZone, PictureControl, QuarterStep,
    decode, encode,
};
use np3_tests::init_tracing;

fn encode_with(adjust: impl FnOnce(&mut PictureControl)) -> Vec<u8> {
    let mut profile = PictureControl::new("clamp");
    adjust(&mut profile);
    encode(&profile).unwrap()
}

#[test]
fn integer_scalars_saturate() {
    init_tracing();
    assert_eq!(
        encode_with(|p| p.contrast = 101),
        encode_with(|p| p.contrast = 100)
    );
    assert_eq!(
        encode_with(|p| p.highlights = -1000),
        encode_with(|p| p.highlights = -100)
    );
    assert_eq!(
        encode_with(|p| p.saturation = i32::MAX),
        encode_with(|p| p.saturation = 100)
    );
    assert_eq!(
        encode_with(|p| p.white_level = i32::MIN),
        encode_with(|p| p.white_level = -100)
    );
}

#[test]
fn quarter_step_scalars_saturate() {
    init_tracing();
    assert_eq!(
        encode_with(|p| p.sharpening = QuarterStep::from_f64(9.25)),
        encode_with(|p| p.sharpening = QuarterStep::from_units(9))
    );
    assert_eq!(
        encode_with(|p| p.sharpening = QuarterStep::from_f64(-3.5)),
        encode_with(|p| p.sharpening = QuarterStep::from_units(-3))
    );
    assert_eq!(
        encode_with(|p| p.mid_range_sharpening = QuarterStep::from_f64(f64::INFINITY)),
        encode_with(|p| p.mid_range_sharpening = QuarterStep::from_units(5))
    );
    assert_eq!(
        encode_with(|p| p.clarity = QuarterStep::from_f64(-6.0)),
        encode_with(|p| p.clarity = QuarterStep::from_units(-5))
    );
}

#[test]
fn grading_blending_and_balance_saturate() {
    let decoded = decode(&encode_with(|p| {
        p.color_grading.blending = 101;
        p.color_grading.balance = -101;
    }));
    assert_eq!(decoded.color_grading.blending, 100);
    assert_eq!(decoded.color_grading.balance, -100);

    let decoded = decode(&encode_with(|p| p.color_grading.blending = -1));
    assert_eq!(decoded.color_grading.blending, 0);
}

#[test]
fn blender_components_saturate() {
    for axis in BlenderAxis::ALL {
        let decoded = decode(&encode_with(|p| {
            *p.color_blender.axis_mut(axis) = ColorBlenderValues::new(150, -150, 7)
        }));
        assert_eq!(
            *decoded.color_blender.axis(axis),
            ColorBlenderValues::new(100, -100, 7),
            "{:?}",
            axis
        );
    }
}

#[test]
fn grading_hue_wraps() {
    let cases = [(-10, 350), (370, 10), (360, 0), (-360, 0), (719, 359), (-1, 359)];
    for zone in GradingZone::ALL {
        for (input, expected) in cases {
            let decoded = decode(&encode_with(|p| {
                *p.color_grading.zone_mut(zone) = ColorGradingValues::new(input, 0, 0)
            }));
            assert_eq!(decoded.color_grading.zone(zone).hue, expected, "{:?} {}", zone, input);
        }
    }
}

#[test]
fn grading_components_saturate() {
    let decoded = decode(&encode_with(|p| {
        p.color_grading.highlights = ColorGradingValues::new(90, 500, -500)
    }));
    assert_eq!(
        decoded.color_grading.highlights,
        ColorGradingValues::new(90, 100, -100)
    );
}
