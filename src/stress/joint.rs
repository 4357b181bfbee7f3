use serde::Deserialize;

use crate::pose::KeypointIndex;

/// 監視対象の関節
///
/// 1フレームにつき1関節のみ解析する。閾値は肘向けの値なので
/// デフォルトは左肘。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitoredJoint {
    LeftElbow,
    RightElbow,
    LeftKnee,
    RightKnee,
}

impl MonitoredJoint {
    /// 角度計算に使うランドマーク3点 (端点, 頂点, 端点)
    ///
    /// 頂点が関節そのもの。
    pub fn triple(&self) -> (KeypointIndex, KeypointIndex, KeypointIndex) {
        match self {
            Self::LeftElbow => (
                KeypointIndex::LeftShoulder,
                KeypointIndex::LeftElbow,
                KeypointIndex::LeftWrist,
            ),
            Self::RightElbow => (
                KeypointIndex::RightShoulder,
                KeypointIndex::RightElbow,
                KeypointIndex::RightWrist,
            ),
            Self::LeftKnee => (
                KeypointIndex::LeftHip,
                KeypointIndex::LeftKnee,
                KeypointIndex::LeftAnkle,
            ),
            Self::RightKnee => (
                KeypointIndex::RightHip,
                KeypointIndex::RightKnee,
                KeypointIndex::RightAnkle,
            ),
        }
    }

    /// 関節そのもののキーポイント（オーバーレイの表示位置）
    pub fn vertex(&self) -> KeypointIndex {
        self.triple().1
    }
}
