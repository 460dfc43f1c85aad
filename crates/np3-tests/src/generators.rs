//! Random profile generation
//!
//! Every generated value lies inside its field's range and on the format's
//! resolution (quarter steps, whole hues), so a generated profile must
//! survive encode then decode unchanged.

use np3_core::layout::{MAX_TONE_CURVE_POINTS, NAME_LEN, TONE_CURVE_RAW_LEN};
use np3_core::{
    BlenderAxis, ColorBlenderValues, ColorGradingValues, GradingZone, PictureControl, QuarterStep,
    ScalarField, ToneCurve, ToneCurvePoint,
};
use rand::distributions::Alphanumeric;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Deterministic source of valid profiles
pub struct ProfileGenerator {
    rng: ChaCha8Rng,
}

impl ProfileGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn scalar(&mut self, field: ScalarField) -> i32 {
        let (min, max) = field.range();
        self.rng.gen_range(min..=max)
    }

    fn quarter(&mut self, field: ScalarField) -> QuarterStep {
        let (min, max) = field.range();
        QuarterStep::from_quarters(self.rng.gen_range(min * 4..=max * 4))
    }

    fn component(&mut self) -> i32 {
        self.rng.gen_range(-100..=100)
    }

    /// Profile without a tone curve
    pub fn standard(&mut self) -> PictureControl {
        let mut profile = PictureControl {
            name: random_name(&mut self.rng),
            sharpening: self.quarter(ScalarField::Sharpening),
            mid_range_sharpening: self.quarter(ScalarField::MidRangeSharpening),
            clarity: self.quarter(ScalarField::Clarity),
            contrast: self.scalar(ScalarField::Contrast),
            highlights: self.scalar(ScalarField::Highlights),
            shadows: self.scalar(ScalarField::Shadows),
            white_level: self.scalar(ScalarField::WhiteLevel),
            black_level: self.scalar(ScalarField::BlackLevel),
            saturation: self.scalar(ScalarField::Saturation),
            ..Default::default()
        };

        for axis in BlenderAxis::ALL {
            *profile.color_blender.axis_mut(axis) =
                ColorBlenderValues::new(self.component(), self.component(), self.component());
        }
        for zone in GradingZone::ALL {
            let hue = self.rng.gen_range(0..360);
            *profile.color_grading.zone_mut(zone) =
                ColorGradingValues::new(hue, self.component(), self.component());
        }
        profile.color_grading.blending = self.scalar(ScalarField::GradingBlending);
        profile.color_grading.balance = self.scalar(ScalarField::GradingBalance);
        profile
    }

    /// Profile with a random tone curve of up to 20 points
    pub fn with_tone_curve(&mut self) -> PictureControl {
        let mut profile = self.standard();
        profile.tone_curve = Some(self.tone_curve(MAX_TONE_CURVE_POINTS));
        profile
    }

    pub fn tone_curve(&mut self, max_points: usize) -> ToneCurve {
        let raw = (0..TONE_CURVE_RAW_LEN)
            .map(|_| self.rng.gen_range(0..=32767u16))
            .collect();
        let count = self.rng.gen_range(0..=max_points);
        let points = (0..count)
            .map(|_| ToneCurvePoint::new(self.rng.gen_range(0..=255), self.rng.gen_range(0..=255)))
            .collect();
        ToneCurve { raw, points }
    }

    /// Either kind, chosen at random
    pub fn any(&mut self) -> PictureControl {
        if self.rng.gen_bool(0.5) {
            self.with_tone_curve()
        } else {
            self.standard()
        }
    }
}

/// ASCII alphanumeric name of 0 to 19 characters
pub fn random_name<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(0..=NAME_LEN);
    (0..len).map(|_| rng.sample(Alphanumeric) as char).collect()
}
