use crate::pose::Pose;

use super::angle::joint_angle;
use super::joint::MonitoredJoint;
use super::risk::RiskLevel;

/// 1フレーム分の解析結果
#[derive(Debug, Clone, Copy)]
pub struct JointReading {
    pub joint: MonitoredJoint,
    /// 関節角度（度、0〜180）
    pub angle: f32,
    pub level: RiskLevel,
}

/// 姿勢から監視対象関節の角度と負荷レベルを求める
///
/// 3点すべてが信頼度閾値を満たすフレームのみ解析する。
/// 人が写っていない・関節が隠れているフレームはNoneを返すだけで
/// エラーではない。呼び出し側はそのフレームのオーバーレイを
/// 省略してループを続ける。
pub fn analyze(pose: &Pose, joint: MonitoredJoint, confidence_threshold: f32) -> Option<JointReading> {
    let (a_idx, b_idx, c_idx) = joint.triple();

    let a = pose.get_valid(a_idx, confidence_threshold)?;
    let b = pose.get_valid(b_idx, confidence_threshold)?;
    let c = pose.get_valid(c_idx, confidence_threshold)?;

    let angle = joint_angle(a.position(), b.position(), c.position());
    let level = RiskLevel::classify(angle);

    Some(JointReading {
        joint,
        angle,
        level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{Keypoint, KeypointIndex};

    fn pose_with(points: &[(KeypointIndex, f32, f32, f32)]) -> Pose {
        let mut keypoints = [Keypoint::default(); KeypointIndex::COUNT];
        for &(idx, x, y, confidence) in points {
            keypoints[idx as usize] = Keypoint::new(x, y, confidence);
        }
        Pose::new(keypoints)
    }

    #[test]
    fn test_no_person_yields_none() {
        // 全キーポイントが信頼度0: 人が写っていないフレーム
        let pose = Pose::default();
        assert!(analyze(&pose, MonitoredJoint::LeftElbow, 0.3).is_none());
    }

    #[test]
    fn test_occluded_joint_yields_none() {
        // 手首だけ閾値未満
        let pose = pose_with(&[
            (KeypointIndex::LeftShoulder, 0.5, 0.2, 0.9),
            (KeypointIndex::LeftElbow, 0.5, 0.4, 0.9),
            (KeypointIndex::LeftWrist, 0.5, 0.6, 0.1),
        ]);
        assert!(analyze(&pose, MonitoredJoint::LeftElbow, 0.3).is_none());
    }

    #[test]
    fn test_straight_arm_high_risk() {
        // 肩・肘・手首が一直線: 180度 -> High
        let pose = pose_with(&[
            (KeypointIndex::LeftShoulder, 0.5, 0.2, 0.9),
            (KeypointIndex::LeftElbow, 0.5, 0.4, 0.9),
            (KeypointIndex::LeftWrist, 0.5, 0.6, 0.9),
        ]);
        let reading = analyze(&pose, MonitoredJoint::LeftElbow, 0.3).unwrap();
        assert!((reading.angle - 180.0).abs() < 1e-3);
        assert_eq!(reading.level, RiskLevel::High);
    }

    #[test]
    fn test_bent_arm_low_risk() {
        // 肘で直角に曲げた腕: 90度 -> Low
        let pose = pose_with(&[
            (KeypointIndex::LeftShoulder, 0.5, 0.2, 0.9),
            (KeypointIndex::LeftElbow, 0.5, 0.4, 0.9),
            (KeypointIndex::LeftWrist, 0.7, 0.4, 0.9),
        ]);
        let reading = analyze(&pose, MonitoredJoint::LeftElbow, 0.3).unwrap();
        assert!((reading.angle - 90.0).abs() < 1e-3);
        assert_eq!(reading.level, RiskLevel::Low);
        assert_eq!(reading.joint, MonitoredJoint::LeftElbow);
    }

    #[test]
    fn test_knee_uses_leg_landmarks() {
        let pose = pose_with(&[
            (KeypointIndex::RightHip, 0.4, 0.5, 0.9),
            (KeypointIndex::RightKnee, 0.4, 0.7, 0.9),
            (KeypointIndex::RightAnkle, 0.4, 0.9, 0.9),
        ]);
        let reading = analyze(&pose, MonitoredJoint::RightKnee, 0.3).unwrap();
        assert!((reading.angle - 180.0).abs() < 1e-3);
        // 腕のランドマークは一切使っていないので肘解析はNone
        assert!(analyze(&pose, MonitoredJoint::LeftElbow, 0.3).is_none());
    }
}
