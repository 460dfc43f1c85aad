//! # np3 - NP3 Picture Control Codec
//!
//! Reads and writes "flexible color picture control" files (`.NP3`): the
//! camera-side color and tone recipes holding sharpening, contrast, tonal
//! levels, an eight-axis color blender, three-zone color grading and an
//! optional tone curve.
//!
//! The format is a flat buffer with every field at a fixed offset (see
//! [`layout`]). Decoding reads each field in place; encoding copies a
//! baseline [`Template`] and overwrites the fields.
//!
//! ## Quick Start
//!
//! ```
//! use np3_core::{PictureControl, QuarterStep, decode, encode};
//!
//! let profile = PictureControl {
//!     sharpening: QuarterStep::from_f64(3.5),
//!     contrast: -15,
//!     ..PictureControl::new("SOFT-FILM")
//! };
//!
//! let bytes = encode(&profile).unwrap();
//! assert_eq!(decode(&bytes), profile);
//! ```
//!
//! ## Patching single fields
//!
//! ```
//! use np3_core::{encode, read_contrast, write_contrast, PictureControl};
//!
//! let mut bytes = encode(&PictureControl::new("BASE")).unwrap();
//! write_contrast(&mut bytes, 40).unwrap();
//! assert_eq!(read_contrast(&bytes), 40);
//! ```
//!
//! ## Out-of-range values
//!
//! Numbers saturate to the field's range and grading hues wrap modulo 360.
//! The only input that is rejected is a name that does not fit the 19-byte
//! ASCII window.

pub mod codec;
pub mod error;
pub mod layout;
pub mod profile;
pub mod template;
pub mod types;

mod decode;
mod encode;

pub use codec::color::{
    read_color_blender, read_color_blender_axis, read_color_grading, read_color_grading_zone,
    write_color_blender, write_color_blender_axis, write_color_grading, write_color_grading_zone,
};
pub use codec::scalar::{
    read_black_level, read_clarity, read_color_grading_balance, read_color_grading_blending,
    read_contrast, read_highlights, read_mid_range_sharpening, read_name, read_saturation,
    read_shadows, read_sharpening, read_white_level, validate_name, write_black_level,
    write_clarity, write_color_grading_balance, write_color_grading_blending, write_contrast,
    write_highlights, write_mid_range_sharpening, write_name, write_saturation, write_shadows,
    write_sharpening, write_white_level,
};
pub use codec::tone_curve::{read_tone_curve, write_tone_curve};
pub use decode::decode;
pub use encode::encode;
pub use error::{Error, Result};
pub use layout::{BlenderAxis, GradingZone, ScalarField};
pub use profile::{
    ColorBlender, ColorBlenderValues, ColorGrading, ColorGradingValues, PictureControl, ToneCurve,
};
pub use template::Template;
pub use types::{QuarterStep, ToneCurvePoint};

/// Version of np3
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
