// src/motion/mod.rs - profile synthesis and real-time evaluation

pub mod evaluator;
pub mod junction;
pub mod math;
pub mod profile;
pub mod s_curve;

pub use junction::junction_velocity;
pub use profile::{MotionProfile, Phase, ProfileShape};
pub use s_curve::ScurvePlanner;
