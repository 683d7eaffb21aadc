use log::debug;
use serde::{Deserialize, Serialize};

pub mod clip;
pub mod error;
pub mod formats;
pub mod geometry;
pub mod measurements;

pub use clip::{cohen_sutherland_clip, midpoint_clip, Algorithm, ClipResult};
pub use error::ClipError;
pub use geometry::{Point, Segment, Window};

/// Everything needed to clip a single segment
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default)]
    pub algorithm: Algorithm,
    pub window: Window,
    pub segment: Segment,
    #[serde(default)]
    pub midpoint: clip::MidpointConfig,
}

/// Clip the configured segment with the configured algorithm
pub fn run(config: &Config) -> Result<ClipResult, ClipError> {
    let Config {
        algorithm,
        window,
        segment,
        midpoint,
    } = config;

    debug!(
        "Clipping {:?} against {:?} using {}",
        segment,
        window,
        algorithm.name()
    );
    algorithm.clip(*segment, window, *midpoint)
}
