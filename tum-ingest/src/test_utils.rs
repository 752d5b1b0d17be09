//! Fixture datasets written to temporary directories.

use image::{ImageBuffer, Luma, Rgb, RgbImage};
use std::fs;
use std::path::Path;

pub struct FixtureFrame {
    pub timestamp: f64,
    pub depth: u16,
    pub color: [u8; 3],
}

/// Write `rgb.txt`, `depth.txt`, the pose list, and one 1x1 PNG pair per frame.
///
/// Depth frames are stamped 5 ms after their color frame, poses 1 ms after,
/// with translation `(i, 2i, 3i)` and identity rotation.
pub fn write_dataset(dir: &Path, frames: &[FixtureFrame], pose_list: &str) {
    fs::create_dir_all(dir.join("rgb")).unwrap();
    fs::create_dir_all(dir.join("depth")).unwrap();

    let mut rgb = String::from("# color images\n# timestamp filename\n");
    let mut depth = String::from("# depth maps\n# timestamp filename\n");
    let mut poses = String::from("# ground truth trajectory\n# timestamp tx ty tz qx qy qz qw\n");

    for (i, frame) in frames.iter().enumerate() {
        let color_name = format!("rgb/{}.png", i);
        let depth_name = format!("depth/{}.png", i);

        RgbImage::from_pixel(1, 1, Rgb(frame.color))
            .save(dir.join(&color_name))
            .unwrap();
        ImageBuffer::<Luma<u16>, Vec<u16>>::from_pixel(1, 1, Luma([frame.depth]))
            .save(dir.join(&depth_name))
            .unwrap();

        let n = i as f32;
        rgb.push_str(&format!("{:.6} {}\n", frame.timestamp, color_name));
        depth.push_str(&format!("{:.6} {}\n", frame.timestamp + 0.005, depth_name));
        poses.push_str(&format!(
            "{:.6} {} {} {} 0 0 0 1\n",
            frame.timestamp + 0.001,
            n,
            2.0 * n,
            3.0 * n
        ));
    }

    fs::write(dir.join("rgb.txt"), rgb).unwrap();
    fs::write(dir.join("depth.txt"), depth).unwrap();
    fs::write(dir.join(pose_list), poses).unwrap();
}

/// `count` frames at 30 Hz starting at t = 1.0 s.
pub fn frames_at_30hz(count: usize) -> Vec<FixtureFrame> {
    (0..count)
        .map(|i| FixtureFrame {
            timestamp: 1.0 + i as f64 / 30.0,
            depth: 1000 * (i as u16 + 1),
            color: [i as u8, 10, 20],
        })
        .collect()
}
