pub mod analyzer;
pub mod angle;
pub mod joint;
pub mod risk;

pub use analyzer::{analyze, JointReading};
pub use angle::joint_angle;
pub use joint::MonitoredJoint;
pub use risk::RiskLevel;
