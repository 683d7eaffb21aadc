use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipError {
    /// The clip window's bounds are not ordered
    #[error("Invalid window: min {min:?} must not exceed max {max:?} on either axis")]
    InvalidWindow { min: (f64, f64), max: (f64, f64) },

    /// A boundary correction would divide by zero or never settle
    #[error("Degenerate input: {reason}")]
    DegenerateInput { reason: String },

    /// Bounds for the midpoint refinement are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
