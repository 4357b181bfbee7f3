pub mod detector;
pub mod keypoint;
pub mod preprocess;

pub use detector::PoseDetector;
pub use keypoint::{Keypoint, KeypointIndex, Pose};
pub use preprocess::preprocess_for_movenet;
