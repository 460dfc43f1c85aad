//! JSON Option Documents
//!
//! Partial JSON documents deserialize into fully defaulted profiles.

use np3_core::{PictureControl, QuarterStep, decode, encode};
use np3_tests::fixtures::fixture_names;
use np3_tests::{init_tracing, load_fixture};

#[test]
fn every_fixture_encodes_to_expected() -> anyhow::Result<()> {
    init_tracing();
    let names = fixture_names()?;
    assert!(!names.is_empty());

    for name in names {
        let fixture = load_fixture(&name)?;
        let decoded = decode(&encode(&fixture.input)?);
        assert_eq!(decoded, fixture.expected, "fixture {}", name);
    }
    Ok(())
}

#[test]
fn name_only_document() -> anyhow::Result<()> {
    let profile: PictureControl = serde_json::from_str(r#"{"name":"test"}"#)?;
    assert_eq!(profile, PictureControl::new("test"));
    Ok(())
}

#[test]
fn legacy_spellings_are_accepted() -> anyhow::Result<()> {
    let profile: PictureControl =
        serde_json::from_str(r#"{"name":"x","sharpning":4.75,"midRangeSharpning":-2}"#)?;
    assert_eq!(profile.sharpening, QuarterStep::from_quarters(19));
    assert_eq!(profile.mid_range_sharpening, QuarterStep::from_units(-2));
    Ok(())
}

#[test]
fn fractional_integers_floor() -> anyhow::Result<()> {
    let profile: PictureControl = serde_json::from_str(
        r#"{
            "name": "frac",
            "contrast": 12.5,
            "shadows": -12.5,
            "colorBlender": { "red": { "hue": 3.9 } },
            "colorGrading": { "highlights": { "hue": 45.7 }, "blending": 20.2 }
        }"#,
    )?;
    assert_eq!(profile.contrast, 12);
    assert_eq!(profile.shadows, -13);
    assert_eq!(profile.color_blender.red.hue, 3);
    assert_eq!(profile.color_grading.highlights.hue, 45);
    assert_eq!(profile.color_grading.blending, 20);
    Ok(())
}

#[test]
fn fractional_quarter_steps_floor() -> anyhow::Result<()> {
    let profile: PictureControl =
        serde_json::from_str(r#"{"name":"q","clarity":0.4,"sharpening":-0.1}"#)?;
    assert_eq!(profile.clarity, QuarterStep::from_quarters(1));
    assert_eq!(profile.sharpening, QuarterStep::from_quarters(-1));
    Ok(())
}

#[test]
fn serialized_profile_reads_back() -> anyhow::Result<()> {
    let profile = np3_tests::ProfileGenerator::new(99).any();
    let json = serde_json::to_string(&profile)?;
    let back: PictureControl = serde_json::from_str(&json)?;
    assert_eq!(back, profile);
    Ok(())
}

#[test]
fn serialized_keys_are_camel_case() -> anyhow::Result<()> {
    let value = serde_json::to_value(PictureControl::new("keys"))?;
    assert_eq!(value["midRangeSharpening"], 1.0);
    assert_eq!(value["colorGrading"]["blending"], 50);
    assert!(value.get("toneCurve").is_none());
    Ok(())
}

#[test]
fn overlong_name_in_document_fails_on_encode() -> anyhow::Result<()> {
    let profile: PictureControl =
        serde_json::from_str(r#"{"name":"THIS-NAME-IS-TOO-LONG"}"#)?;
    assert!(encode(&profile).is_err());
    Ok(())
}
