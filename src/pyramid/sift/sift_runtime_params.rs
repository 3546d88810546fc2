use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};
use crate::{Float, Result};
use crate::matching::sift_descriptor::ArctangentMode;

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct SiftRuntimeParams {
    pub scale_count: usize,
    pub octave_count: usize,
    pub blur_half_factor: Float,
    // None accepts every nearest neighbour
    pub acceptance_threshold: Option<Float>,
    pub arctangent: ArctangentMode
}

impl Default for SiftRuntimeParams {
    fn default() -> SiftRuntimeParams {
        SiftRuntimeParams {
            scale_count: 3,
            octave_count: 5,
            blur_half_factor: 3.0,
            acceptance_threshold: Some(0.03),
            arctangent: ArctangentMode::SingleQuadrant
        }
    }
}

pub fn load_runtime_params<P: AsRef<Path>>(path: P) -> Result<SiftRuntimeParams> {
    let contents = fs::read_to_string(path)?;
    let runtime_params = serde_yaml::from_str(&contents)?;
    Ok(runtime_params)
}
