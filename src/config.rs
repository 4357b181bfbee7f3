use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::stress::MonitoredJoint;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CameraConfig {
    /// カメラデバイス番号
    #[serde(default = "default_camera_index")]
    pub index: i32,
    /// キャプチャ幅（ピクセル）
    #[serde(default = "default_camera_width")]
    pub width: u32,
    /// キャプチャ高さ（ピクセル）
    #[serde(default = "default_camera_height")]
    pub height: u32,
    /// 要求FPS
    #[serde(default = "default_camera_fps")]
    pub fps: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// MoveNet ONNXモデルのパス
    #[serde(default = "default_model_path")]
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalysisConfig {
    /// 監視対象の関節
    #[serde(default = "default_joint")]
    pub joint: MonitoredJoint,
    /// キーポイント信頼度の閾値
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,
}

fn default_camera_index() -> i32 { 0 }
fn default_camera_width() -> u32 { 640 }
fn default_camera_height() -> u32 { 480 }
fn default_camera_fps() -> u32 { 30 }
fn default_model_path() -> String { "models/movenet_lightning.onnx".to_string() }
fn default_joint() -> MonitoredJoint { MonitoredJoint::LeftElbow }
fn default_confidence_threshold() -> f32 { 0.3 }

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            index: default_camera_index(),
            width: default_camera_width(),
            height: default_camera_height(),
            fps: default_camera_fps(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            joint: default_joint(),
            confidence_threshold: default_confidence_threshold(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// 設定ファイルが無い・壊れている場合はデフォルト値で起動する
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(_) => Config::default(),
        }
    }
}
