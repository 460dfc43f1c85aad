//! NP3 Field Layout
//!
//! Every field of a flexible color picture control lives at a fixed byte
//! offset from the start of the file. Nothing in the format points at
//! anything else; validity is purely positional.
//!
//! | Field                   | Offset          | Width    |
//! |-------------------------|-----------------|----------|
//! | name                    | `0x018`         | 19       |
//! | sharpening              | `0x052`         | 1        |
//! | clarity                 | `0x05C`         | 1        |
//! | mid-range sharpening    | `0x0F2`         | 1        |
//! | contrast .. saturation  | `0x110`..`0x142`| 1 each   |
//! | color blender (8 axes)  | `0x14C`, step 3 | 3 each   |
//! | color grading (3 zones) | `0x170`, step 4 | 4 each   |
//! | grading blending        | `0x180`         | 1        |
//! | grading balance         | `0x182`         | 1        |
//! | tone curve points       | `0x194`         | 1 + 40   |
//! | tone curve raw samples  | `0x1CC`         | 514      |

/// Name window (ASCII, NUL padded)
pub const OFFSET_NAME: usize = 0x18;
/// Capacity of the name window in bytes
pub const NAME_LEN: usize = 19;

pub const OFFSET_SHARPENING: usize = 0x52;
pub const OFFSET_CLARITY: usize = 0x5c;
pub const OFFSET_MID_RANGE_SHARPENING: usize = 0xf2;
pub const OFFSET_CONTRAST: usize = 0x110;
pub const OFFSET_HIGHLIGHTS: usize = 0x11a;
pub const OFFSET_SHADOWS: usize = 0x124;
pub const OFFSET_WHITE_LEVEL: usize = 0x12e;
pub const OFFSET_BLACK_LEVEL: usize = 0x138;
pub const OFFSET_SATURATION: usize = 0x142;

/// First color blender axis (red)
pub const OFFSET_COLOR_BLENDER: usize = 0x14c;
/// Bytes per color blender axis: hue, chroma, brightness
pub const COLOR_BLENDER_STRIDE: usize = 3;

/// First color grading zone (highlights)
pub const OFFSET_COLOR_GRADING: usize = 0x170;
/// Bytes per color grading zone: packed hue (2), chroma, brightness
pub const COLOR_GRADING_STRIDE: usize = 4;
pub const OFFSET_COLOR_GRADING_BLENDING: usize = 0x180;
pub const OFFSET_COLOR_GRADING_BALANCE: usize = 0x182;

/// Point count byte, followed by up to [`MAX_TONE_CURVE_POINTS`] (x, y) pairs
pub const OFFSET_TONE_CURVE_POINTS: usize = 0x194;
pub const MAX_TONE_CURVE_POINTS: usize = 20;

/// 257 big-endian u16 samples
pub const OFFSET_TONE_CURVE_RAW: usize = 0x1cc;
pub const TONE_CURVE_RAW_LEN: usize = 257;
/// End of the raw curve block (exclusive)
pub const TONE_CURVE_END: usize = OFFSET_TONE_CURVE_RAW + TONE_CURVE_RAW_LEN * 2;

/// Buffers shorter than this carry no tone curve section
pub const MIN_TONE_CURVE_SIZE: usize = 0x3cd;

/// Single-byte scalar fields, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    Sharpening,
    Clarity,
    MidRangeSharpening,
    Contrast,
    Highlights,
    Shadows,
    WhiteLevel,
    BlackLevel,
    Saturation,
    GradingBlending,
    GradingBalance,
}

impl ScalarField {
    pub const ALL: [ScalarField; 11] = [
        Self::Sharpening,
        Self::Clarity,
        Self::MidRangeSharpening,
        Self::Contrast,
        Self::Highlights,
        Self::Shadows,
        Self::WhiteLevel,
        Self::BlackLevel,
        Self::Saturation,
        Self::GradingBlending,
        Self::GradingBalance,
    ];

    pub const fn offset(self) -> usize {
        match self {
            Self::Sharpening => OFFSET_SHARPENING,
            Self::Clarity => OFFSET_CLARITY,
            Self::MidRangeSharpening => OFFSET_MID_RANGE_SHARPENING,
            Self::Contrast => OFFSET_CONTRAST,
            Self::Highlights => OFFSET_HIGHLIGHTS,
            Self::Shadows => OFFSET_SHADOWS,
            Self::WhiteLevel => OFFSET_WHITE_LEVEL,
            Self::BlackLevel => OFFSET_BLACK_LEVEL,
            Self::Saturation => OFFSET_SATURATION,
            Self::GradingBlending => OFFSET_COLOR_GRADING_BLENDING,
            Self::GradingBalance => OFFSET_COLOR_GRADING_BALANCE,
        }
    }

    /// Valid logical range, inclusive. Quarter-step fields are in whole units.
    pub const fn range(self) -> (i32, i32) {
        match self {
            Self::Sharpening => (-3, 9),
            Self::Clarity | Self::MidRangeSharpening => (-5, 5),
            Self::GradingBlending => (0, 100),
            _ => (-100, 100),
        }
    }

    /// Whether one stored unit is a quarter of a logical unit
    pub const fn is_quarter_step(self) -> bool {
        matches!(
            self,
            Self::Sharpening | Self::Clarity | Self::MidRangeSharpening
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sharpening => "sharpening",
            Self::Clarity => "clarity",
            Self::MidRangeSharpening => "mid_range_sharpening",
            Self::Contrast => "contrast",
            Self::Highlights => "highlights",
            Self::Shadows => "shadows",
            Self::WhiteLevel => "white_level",
            Self::BlackLevel => "black_level",
            Self::Saturation => "saturation",
            Self::GradingBlending => "color_grading.blending",
            Self::GradingBalance => "color_grading.balance",
        }
    }
}

/// Color blender axes, by hue sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlenderAxis {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Magenta,
}

impl BlenderAxis {
    pub const ALL: [BlenderAxis; 8] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::Purple,
        Self::Magenta,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn offset(self) -> usize {
        OFFSET_COLOR_BLENDER + self.index() * COLOR_BLENDER_STRIDE
    }
}

/// Color grading tonal zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradingZone {
    Highlights,
    MidTone,
    Shadows,
}

impl GradingZone {
    pub const ALL: [GradingZone; 3] = [Self::Highlights, Self::MidTone, Self::Shadows];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn offset(self) -> usize {
        OFFSET_COLOR_GRADING + self.index() * COLOR_GRADING_STRIDE
    }
}
