use anyhow::Result;
use minifb::{Key, Window, WindowOptions};
use opencv::core::Mat;
use opencv::prelude::*;

use crate::pose::{Keypoint, Pose};
use crate::render::font::{glyph, GLYPH_SPACING, GLYPH_WIDTH};
use crate::render::skeleton::{
    KEYPOINT_COLOR, LOW_CONFIDENCE_COLOR, SKELETON_COLOR, SKELETON_CONNECTIONS,
};
use crate::stress::JointReading;

/// ステータスパネルの幅（ピクセル）
const PANEL_WIDTH: usize = 250;

/// ステータスパネルの高さ（ピクセル）
const PANEL_HEIGHT: usize = 85;

/// ステータスパネルの背景色 (RGB)
const PANEL_COLOR: u32 = 0x1075F5;

/// 見出しテキストの色 (RGB)
const CAPTION_COLOR: u32 = 0x000000;

/// 角度値テキストの色 (RGB)
const VALUE_COLOR: u32 = 0xFFFFFF;

/// minifbを使用したレンダラー
///
/// フレーム・骨格・負荷オーバーレイをソフトウェア描画し、
/// 終了キー（QまたはEsc）の監視も担う。
pub struct MinifbRenderer {
    window: Window,
    buffer: Vec<u32>,
    width: usize,
    height: usize,
}

impl MinifbRenderer {
    /// ウィンドウを作成
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )?;

        let buffer = vec![0u32; width * height];

        Ok(Self {
            window,
            buffer,
            width,
            height,
        })
    }

    /// ウィンドウが開いていて終了キーが押されていないか
    pub fn is_open(&self) -> bool {
        self.window.is_open()
            && !self.window.is_key_down(Key::Q)
            && !self.window.is_key_down(Key::Escape)
    }

    /// BGR Mat をバッファにコピー
    pub fn draw_frame(&mut self, frame: &Mat) -> Result<()> {
        let frame_width = frame.cols() as usize;
        let frame_height = frame.rows() as usize;

        // サイズが異なる場合はクロップ
        for y in 0..self.height.min(frame_height) {
            for x in 0..self.width.min(frame_width) {
                let pixel = frame.at_2d::<opencv::core::Vec3b>(y as i32, x as i32)?;
                // BGR -> RGB -> u32
                let r = pixel[2] as u32;
                let g = pixel[1] as u32;
                let b = pixel[0] as u32;
                self.buffer[y * self.width + x] = (r << 16) | (g << 8) | b;
            }
        }

        Ok(())
    }

    /// 骨格とキーポイントを描画
    pub fn draw_pose(&mut self, pose: &Pose, confidence_threshold: f32) {
        let w = self.width as u32;
        let h = self.height as u32;

        for (start_idx, end_idx) in SKELETON_CONNECTIONS.iter() {
            let start = pose.get(*start_idx);
            let end = pose.get(*end_idx);

            if start.is_valid(confidence_threshold) && end.is_valid(confidence_threshold) {
                let (x1, y1) = start.to_pixel(w, h);
                let (x2, y2) = end.to_pixel(w, h);
                self.draw_line(x1, y1, x2, y2, SKELETON_COLOR);
            }
        }

        for kp in pose.keypoints.iter() {
            let (px, py) = kp.to_pixel(w, h);
            let color = if kp.is_valid(confidence_threshold) {
                KEYPOINT_COLOR
            } else {
                LOW_CONFIDENCE_COLOR
            };
            self.draw_circle(px, py, 4, color);
        }
    }

    /// 関節の横に現在の角度を描画
    pub fn draw_angle_marker(&mut self, vertex: &Keypoint, angle: f32) {
        let (px, py) = vertex.to_pixel(self.width as u32, self.height as u32);
        let text = format!("{}", angle.round() as i32);
        self.draw_text(&text, px + 8, py - 4, 1, VALUE_COLOR);
    }

    /// 左上のステータスパネル（角度と負荷レベル）を描画
    pub fn draw_status_panel(&mut self, reading: &JointReading) {
        self.fill_rect(0, 0, PANEL_WIDTH, PANEL_HEIGHT, PANEL_COLOR);

        self.draw_text("JOINT ANGLE", 10, 10, 1, CAPTION_COLOR);
        let angle_text = format!("{}", reading.angle.round() as i32);
        self.draw_text(&angle_text, 10, 28, 3, VALUE_COLOR);

        self.draw_text("STRESS LEVEL", 130, 10, 1, CAPTION_COLOR);
        self.draw_text(reading.level.label(), 130, 32, 2, reading.level.color());
    }

    /// バッファをウィンドウに表示
    pub fn update(&mut self) -> Result<()> {
        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)?;
        Ok(())
    }

    /// Bresenhamのアルゴリズムで線を描画
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// 円を描画（塗りつぶし）
    fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: u32) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// 矩形を描画（塗りつぶし）
    fn fill_rect(&mut self, x: i32, y: i32, width: usize, height: usize, color: u32) {
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// 5x7フォントでテキストを描画
    ///
    /// 英大文字と数字のみ。グリフのない文字は空白になる。
    fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: usize, color: u32) {
        let advance = ((GLYPH_WIDTH + GLYPH_SPACING) * scale) as i32;
        let mut cursor_x = x;

        for c in text.chars() {
            if let Some(rows) = glyph(c) {
                for (row_idx, row) in rows.iter().enumerate() {
                    for col in 0..GLYPH_WIDTH {
                        if row & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                            // scale倍に拡大したドット
                            for sy in 0..scale as i32 {
                                for sx in 0..scale as i32 {
                                    self.set_pixel(
                                        cursor_x + (col * scale) as i32 + sx,
                                        y + (row_idx * scale) as i32 + sy,
                                        color,
                                    );
                                }
                            }
                        }
                    }
                }
            }
            cursor_x += advance;
        }
    }

    /// ピクセルをセット（境界チェック付き）
    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.buffer[y as usize * self.width + x as usize] = color;
        }
    }
}
