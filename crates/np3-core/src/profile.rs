//! Picture Control Profile
//!
//! The structured form of an NP3 file. The same type is produced by
//! [`decode`](crate::decode) and consumed by [`encode`](crate::encode).
//!
//! Every field except `name` has a documented default, so a profile can be
//! built from a name alone and then adjusted:
//!
//! ```
//! use np3_core::{PictureControl, QuarterStep};
//!
//! let profile = PictureControl {
//!     contrast: 20,
//!     clarity: QuarterStep::from_f64(1.25),
//!     ..PictureControl::new("MY-LOOK")
//! };
//! assert_eq!(profile.color_grading.blending, 50);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::types::floor_to_i32;

use crate::codec::{saturate, wrap_hue};
use crate::layout::{BlenderAxis, GradingZone, MAX_TONE_CURVE_POINTS, ScalarField, TONE_CURVE_RAW_LEN};
use crate::types::{QuarterStep, ToneCurvePoint};
use crate::{Result, decode, encode};

/// Default sharpening, in quarters (2.0)
pub const DEFAULT_SHARPENING: QuarterStep = QuarterStep::from_quarters(8);
/// Default mid-range sharpening, in quarters (1.0)
pub const DEFAULT_MID_RANGE_SHARPENING: QuarterStep = QuarterStep::from_quarters(4);
/// Default clarity, in quarters (0.5)
pub const DEFAULT_CLARITY: QuarterStep = QuarterStep::from_quarters(2);
/// Default color grading blending
pub const DEFAULT_BLENDING: i32 = 50;
/// Largest raw tone curve sample
pub const TONE_CURVE_MAX_SAMPLE: u16 = 32767;

/// Flexible color picture control
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct PictureControl {
    /// 0-19 ASCII characters
    pub name: String,
    /// -3.0..=9.0, default 2.0
    #[cfg_attr(feature = "serde", serde(alias = "sharpning"))]
    pub sharpening: QuarterStep,
    /// -5.0..=5.0, default 1.0
    #[cfg_attr(feature = "serde", serde(alias = "midRangeSharpning"))]
    pub mid_range_sharpening: QuarterStep,
    /// -5.0..=5.0, default 0.5
    pub clarity: QuarterStep,
    /// -100..=100
    #[cfg_attr(feature = "serde", serde(deserialize_with = "floor_to_i32"))]
    pub contrast: i32,
    /// -100..=100
    #[cfg_attr(feature = "serde", serde(deserialize_with = "floor_to_i32"))]
    pub highlights: i32,
    /// -100..=100
    #[cfg_attr(feature = "serde", serde(deserialize_with = "floor_to_i32"))]
    pub shadows: i32,
    /// -100..=100
    #[cfg_attr(feature = "serde", serde(deserialize_with = "floor_to_i32"))]
    pub white_level: i32,
    /// -100..=100
    #[cfg_attr(feature = "serde", serde(deserialize_with = "floor_to_i32"))]
    pub black_level: i32,
    /// -100..=100
    #[cfg_attr(feature = "serde", serde(deserialize_with = "floor_to_i32"))]
    pub saturation: i32,
    pub color_blender: ColorBlender,
    pub color_grading: ColorGrading,
    /// Selects the extended template when present
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub tone_curve: Option<ToneCurve>,
}

impl Default for PictureControl {
    fn default() -> Self {
        Self {
            name: String::new(),
            sharpening: DEFAULT_SHARPENING,
            mid_range_sharpening: DEFAULT_MID_RANGE_SHARPENING,
            clarity: DEFAULT_CLARITY,
            contrast: 0,
            highlights: 0,
            shadows: 0,
            white_level: 0,
            black_level: 0,
            saturation: 0,
            color_blender: ColorBlender::default(),
            color_grading: ColorGrading::default(),
            tone_curve: None,
        }
    }
}

impl PictureControl {
    /// Create a profile with every adjustment at its default
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Decode from NP3 bytes
    pub fn from_bytes(data: &[u8]) -> Self {
        decode(data)
    }

    /// Encode to NP3 bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        encode(self)
    }

    /// Copy with every value brought into the range the format can hold.
    ///
    /// Numbers saturate, hues wrap into `0..360`, and tone curve points past
    /// the twentieth are dropped. The name is left untouched.
    pub fn normalized(&self) -> Self {
        let scalar = |field: ScalarField, value: i32| {
            let (min, max) = field.range();
            saturate(field.name(), value, min, max)
        };
        let quarter = |field: ScalarField, value: QuarterStep| {
            let (min, max) = field.range();
            QuarterStep::from_quarters(saturate(field.name(), value.quarters(), min * 4, max * 4))
        };

        Self {
            name: self.name.clone(),
            sharpening: quarter(ScalarField::Sharpening, self.sharpening),
            mid_range_sharpening: quarter(ScalarField::MidRangeSharpening, self.mid_range_sharpening),
            clarity: quarter(ScalarField::Clarity, self.clarity),
            contrast: scalar(ScalarField::Contrast, self.contrast),
            highlights: scalar(ScalarField::Highlights, self.highlights),
            shadows: scalar(ScalarField::Shadows, self.shadows),
            white_level: scalar(ScalarField::WhiteLevel, self.white_level),
            black_level: scalar(ScalarField::BlackLevel, self.black_level),
            saturation: scalar(ScalarField::Saturation, self.saturation),
            color_blender: self.color_blender.normalized(),
            color_grading: ColorGrading {
                blending: scalar(ScalarField::GradingBlending, self.color_grading.blending),
                balance: scalar(ScalarField::GradingBalance, self.color_grading.balance),
                ..self.color_grading.normalized_zones()
            },
            tone_curve: self.tone_curve.as_ref().map(ToneCurve::normalized),
        }
    }
}

/// Hue, chroma and brightness shift for one color blender axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ColorBlenderValues {
    /// -100..=100
    #[cfg_attr(feature = "serde", serde(deserialize_with = "floor_to_i32"))]
    pub hue: i32,
    /// -100..=100
    #[cfg_attr(feature = "serde", serde(deserialize_with = "floor_to_i32"))]
    pub chroma: i32,
    /// -100..=100
    #[cfg_attr(feature = "serde", serde(deserialize_with = "floor_to_i32"))]
    pub brightness: i32,
}

impl ColorBlenderValues {
    pub const fn new(hue: i32, chroma: i32, brightness: i32) -> Self {
        Self {
            hue,
            chroma,
            brightness,
        }
    }

    fn normalized(&self) -> Self {
        Self {
            hue: saturate("color_blender.hue", self.hue, -100, 100),
            chroma: saturate("color_blender.chroma", self.chroma, -100, 100),
            brightness: saturate("color_blender.brightness", self.brightness, -100, 100),
        }
    }
}

/// Eight-axis color blender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ColorBlender {
    pub red: ColorBlenderValues,
    pub orange: ColorBlenderValues,
    pub yellow: ColorBlenderValues,
    pub green: ColorBlenderValues,
    pub cyan: ColorBlenderValues,
    pub blue: ColorBlenderValues,
    pub purple: ColorBlenderValues,
    pub magenta: ColorBlenderValues,
}

impl ColorBlender {
    pub fn axis(&self, axis: BlenderAxis) -> &ColorBlenderValues {
        match axis {
            BlenderAxis::Red => &self.red,
            BlenderAxis::Orange => &self.orange,
            BlenderAxis::Yellow => &self.yellow,
            BlenderAxis::Green => &self.green,
            BlenderAxis::Cyan => &self.cyan,
            BlenderAxis::Blue => &self.blue,
            BlenderAxis::Purple => &self.purple,
            BlenderAxis::Magenta => &self.magenta,
        }
    }

    pub fn axis_mut(&mut self, axis: BlenderAxis) -> &mut ColorBlenderValues {
        match axis {
            BlenderAxis::Red => &mut self.red,
            BlenderAxis::Orange => &mut self.orange,
            BlenderAxis::Yellow => &mut self.yellow,
            BlenderAxis::Green => &mut self.green,
            BlenderAxis::Cyan => &mut self.cyan,
            BlenderAxis::Blue => &mut self.blue,
            BlenderAxis::Purple => &mut self.purple,
            BlenderAxis::Magenta => &mut self.magenta,
        }
    }

    fn normalized(&self) -> Self {
        let mut out = *self;
        for axis in BlenderAxis::ALL {
            *out.axis_mut(axis) = self.axis(axis).normalized();
        }
        out
    }
}

/// Hue, chroma and brightness for one color grading zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ColorGradingValues {
    /// Degrees, wrapped into 0..360 on encode
    #[cfg_attr(feature = "serde", serde(deserialize_with = "floor_to_i32"))]
    pub hue: i32,
    /// -100..=100
    #[cfg_attr(feature = "serde", serde(deserialize_with = "floor_to_i32"))]
    pub chroma: i32,
    /// -100..=100
    #[cfg_attr(feature = "serde", serde(deserialize_with = "floor_to_i32"))]
    pub brightness: i32,
}

impl ColorGradingValues {
    pub const fn new(hue: i32, chroma: i32, brightness: i32) -> Self {
        Self {
            hue,
            chroma,
            brightness,
        }
    }

    fn normalized(&self) -> Self {
        Self {
            hue: wrap_hue(self.hue),
            chroma: saturate("color_grading.chroma", self.chroma, -100, 100),
            brightness: saturate("color_grading.brightness", self.brightness, -100, 100),
        }
    }
}

/// Three-zone color grading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ColorGrading {
    pub highlights: ColorGradingValues,
    pub mid_tone: ColorGradingValues,
    pub shadows: ColorGradingValues,
    /// 0..=100, default 50
    #[cfg_attr(feature = "serde", serde(deserialize_with = "floor_to_i32"))]
    pub blending: i32,
    /// -100..=100
    #[cfg_attr(feature = "serde", serde(deserialize_with = "floor_to_i32"))]
    pub balance: i32,
}

impl Default for ColorGrading {
    fn default() -> Self {
        Self {
            highlights: ColorGradingValues::default(),
            mid_tone: ColorGradingValues::default(),
            shadows: ColorGradingValues::default(),
            blending: DEFAULT_BLENDING,
            balance: 0,
        }
    }
}

impl ColorGrading {
    pub fn zone(&self, zone: GradingZone) -> &ColorGradingValues {
        match zone {
            GradingZone::Highlights => &self.highlights,
            GradingZone::MidTone => &self.mid_tone,
            GradingZone::Shadows => &self.shadows,
        }
    }

    pub fn zone_mut(&mut self, zone: GradingZone) -> &mut ColorGradingValues {
        match zone {
            GradingZone::Highlights => &mut self.highlights,
            GradingZone::MidTone => &mut self.mid_tone,
            GradingZone::Shadows => &mut self.shadows,
        }
    }

    fn normalized_zones(&self) -> Self {
        let mut out = *self;
        for zone in GradingZone::ALL {
            *out.zone_mut(zone) = self.zone(zone).normalized();
        }
        out
    }
}

/// Tone curve: the sampled curve plus the anchor points it was drawn from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ToneCurve {
    /// 257 samples, 0..=32767
    pub raw: Vec<u16>,
    /// At most 20 points are stored
    pub points: Vec<ToneCurvePoint>,
}

impl Default for ToneCurve {
    fn default() -> Self {
        Self::linear()
    }
}

impl ToneCurve {
    /// Identity curve from (0, 0) to (255, 255)
    pub fn linear() -> Self {
        Self {
            raw: (0..TONE_CURVE_RAW_LEN).map(Self::identity_sample).collect(),
            points: vec![ToneCurvePoint::new(0, 0), ToneCurvePoint::new(255, 255)],
        }
    }

    /// Sample `index` of the identity ramp
    pub fn identity_sample(index: usize) -> u16 {
        (index as u32 * 128).min(TONE_CURVE_MAX_SAMPLE as u32) as u16
    }

    /// Exactly 257 samples in range and at most 20 points
    pub fn normalized(&self) -> Self {
        if self.raw.len() != TONE_CURVE_RAW_LEN {
            tracing::debug!(
                samples = self.raw.len(),
                expected = TONE_CURVE_RAW_LEN,
                "raw tone curve resized"
            );
        }
        if self.points.len() > MAX_TONE_CURVE_POINTS {
            tracing::debug!(
                points = self.points.len(),
                kept = MAX_TONE_CURVE_POINTS,
                "dropping tone curve points"
            );
        }

        let raw = (0..TONE_CURVE_RAW_LEN)
            .map(|i| {
                let sample = self.raw.get(i).copied().unwrap_or_else(|| Self::identity_sample(i));
                saturate("tone_curve.raw", sample as i32, 0, TONE_CURVE_MAX_SAMPLE as i32) as u16
            })
            .collect();
        let points = self.points.iter().take(MAX_TONE_CURVE_POINTS).copied().collect();

        Self { raw, points }
    }
}
