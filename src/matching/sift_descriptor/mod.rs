use serde::{Serialize, Deserialize};
use crate::{float,Float};

pub mod keypoint;
pub mod orientation_histogram;
pub mod local_image_descriptor;
pub mod feature_vector;
pub mod affine_transformation;

pub const ORIENTATION_BINS: usize = 36;
pub const DESCRIPTOR_ORIENTATION_BINS: usize = 8;
pub const DESCRIPTOR_LENGTH: usize = 128;

/// How a gradient is turned into an angle before binning.
///
/// `SingleQuadrant` uses `atan(gy/gx)`, which folds opposite gradient directions onto each other.
/// `FourQuadrant` uses `atan2(gy,gx)` and keeps them apart.
#[derive(Debug,Copy,Clone,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArctangentMode {
    SingleQuadrant,
    FourQuadrant
}

impl Default for ArctangentMode {
    fn default() -> ArctangentMode {
        ArctangentMode::SingleQuadrant
    }
}

impl ArctangentMode {
    pub fn angle(&self, x_gradient: Float, y_gradient: Float) -> Float {
        match self {
            ArctangentMode::SingleQuadrant => (y_gradient/x_gradient).atan(),
            ArctangentMode::FourQuadrant => y_gradient.atan2(x_gradient)
        }
    }
}

/// Wraps an angle into `[0, 2π)`.
pub fn reduce_orientation(orientation: Float) -> Float {
    let full_turn = 2.0*float::consts::PI;
    let mut reduced = orientation % full_turn;
    while reduced < 0.0 {
        reduced += full_turn;
    }
    // -ε + 2π rounds to 2π
    match reduced {
        r if r >= full_turn => 0.0,
        r => r
    }
}

/// Orientation of a gradient in `[0, 2π)`, or `None` when the x component is zero and the gradient casts no vote.
pub fn gradient_orientation(x_gradient: Float, y_gradient: Float, arctangent: ArctangentMode) -> Option<Float> {
    match x_gradient {
        gx if gx == 0.0 => None,
        gx => Some(reduce_orientation(arctangent.angle(gx, y_gradient)))
    }
}

/// Bin index of `orientation` for a histogram of `bin_count` equal bins over a full turn.
pub fn orientation_bin(orientation: Float, bin_count: usize) -> usize {
    let bin_range = 2.0*float::consts::PI/(bin_count as Float);
    let index = (orientation/bin_range).floor() as usize;
    index.min(bin_count-1)
}
