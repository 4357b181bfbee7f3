use anyhow::Result;
use std::time::Instant;

use joint_tracker::camera::OpenCvCamera;
use joint_tracker::config::Config;
use joint_tracker::render::MinifbRenderer;

const CONFIG_PATH: &str = "config.toml";

/// 推論なしのカメラプレビュー。デバイス番号と画角の確認用。
fn main() -> Result<()> {
    let config = Config::load_or_default(CONFIG_PATH);

    println!("=== カメラビュー ===");
    println!("終了: Qキー");

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

    let mut renderer = MinifbRenderer::new("Camera View", width as usize, height as usize)?;

    let mut frame_count = 0u32;
    let mut fps_timer = Instant::now();

    while renderer.is_open() {
        let frame = match camera.read_frame() {
            Ok(frame) => frame,
            Err(_) => break,
        };

        renderer.draw_frame(&frame)?;
        renderer.update()?;

        frame_count += 1;
        let elapsed = fps_timer.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            println!("FPS: {:.1}", frame_count as f32 / elapsed);
            frame_count = 0;
            fps_timer = Instant::now();
        }
    }

    Ok(())
}
