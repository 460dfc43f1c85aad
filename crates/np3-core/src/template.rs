//! Baseline NP3 Files
//!
//! Encoding starts from a copy of one of two pre-built files holding the
//! canonical non-field content. Their bytes outside the field table are
//! opaque and are carried through unchanged.

use crate::layout::{MIN_TONE_CURVE_SIZE, TONE_CURVE_END};
use crate::profile::PictureControl;

static STANDARD: &[u8] = include_bytes!("../assets/standard.np3");
static TONE_CURVE: &[u8] = include_bytes!("../assets/tone_curve.np3");

/// Which baseline file to start from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// No tone curve section
    Standard,
    /// Extended with space for the tone curve
    ToneCurve,
}

impl Template {
    /// Pick the template able to hold `profile`
    pub fn for_profile(profile: &PictureControl) -> Self {
        if profile.tone_curve.is_some() {
            Self::ToneCurve
        } else {
            Self::Standard
        }
    }

    pub fn bytes(self) -> &'static [u8] {
        match self {
            Self::Standard => STANDARD,
            Self::ToneCurve => TONE_CURVE,
        }
    }

    pub fn len(self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(self) -> bool {
        self.bytes().is_empty()
    }

    /// Fresh, caller-owned copy
    pub fn to_vec(self) -> Vec<u8> {
        self.bytes().to_vec()
    }

    pub fn has_tone_curve(self) -> bool {
        self.len() >= MIN_TONE_CURVE_SIZE
    }
}

const _: () = assert!(include_bytes!("../assets/standard.np3").len() < MIN_TONE_CURVE_SIZE);
const _: () = assert!(include_bytes!("../assets/tone_curve.np3").len() >= TONE_CURVE_END);
