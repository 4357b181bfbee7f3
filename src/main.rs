use anyhow::Result;
use std::time::Instant;

use joint_tracker::camera::OpenCvCamera;
use joint_tracker::config::Config;
use joint_tracker::pose::{preprocess_for_movenet, PoseDetector};
use joint_tracker::render::MinifbRenderer;
use joint_tracker::stress::analyze;

const CONFIG_PATH: &str = "config.toml";

fn main() -> Result<()> {
    let config = Config::load_or_default(CONFIG_PATH);

    println!("=== Joint Stress Tracker ({}) ===", env!("GIT_VERSION"));
    println!("監視関節: {:?}", config.analysis.joint);
    println!("終了: Qキー");

    // カメラを開く。失敗したらループに入らず正常終了する
    println!("カメラを開いています...");
    let mut camera = match OpenCvCamera::open_with_config(
        config.camera.index,
        Some(config.camera.width),
        Some(config.camera.height),
        Some(config.camera.fps),
    ) {
        Ok(camera) => camera,
        Err(e) => {
            println!("カメラにアクセスできません: {}", e);
            return Ok(());
        }
    };
    let (width, height) = camera.resolution();
    println!("カメラ解像度: {}x{}", width, height);

    println!("モデル読み込み中: {}", config.model.path);
    let mut detector = PoseDetector::new(&config.model.path)?;

    let mut renderer = MinifbRenderer::new("Joint Stress Tracker", width as usize, height as usize)?;

    let threshold = config.analysis.confidence_threshold;
    let joint = config.analysis.joint;

    // FPS計測用
    let mut frame_count = 0u32;
    let mut fps_timer = Instant::now();

    // メインループ: 取得 -> 検出 -> 解析 -> 描画。フレーム間で状態を持たない
    while renderer.is_open() {
        // 読み込み失敗はストリーム終端として扱う
        let frame = match camera.read_frame() {
            Ok(frame) => frame,
            Err(_) => break,
        };

        let input = preprocess_for_movenet(&frame)?;

        // 推論失敗はそのフレームだけスキップ
        let pose = match detector.detect(input) {
            Ok(pose) => pose,
            Err(e) => {
                eprintln!("推論エラー: {}", e);
                continue;
            }
        };

        renderer.draw_frame(&frame)?;
        renderer.draw_pose(&pose, threshold);

        // 3点すべて検出できたフレームのみオーバーレイを出す
        if let Some(reading) = analyze(&pose, joint, threshold) {
            renderer.draw_angle_marker(pose.get(joint.vertex()), reading.angle);
            renderer.draw_status_panel(&reading);
        }

        renderer.update()?;

        frame_count += 1;
        let elapsed = fps_timer.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            let fps = frame_count as f32 / elapsed;
            println!(
                "FPS: {:.1}, Avg confidence: {:.2}",
                fps,
                pose.average_confidence()
            );
            frame_count = 0;
            fps_timer = Instant::now();
        }
    }

    println!("終了します");
    Ok(())
}
