//! Reader configuration and dataset file names

use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Color image list inside the dataset directory
pub const RGB_LIST: &str = "rgb.txt";
/// Depth image list inside the dataset directory
pub const DEPTH_LIST: &str = "depth.txt";
/// Pose lists, in preference order. The first one present is used.
pub const POSE_LISTS: [&str; 2] = ["groundtruth.txt", "poses.txt"];

/// Configuration for opening a TUM RGB-D directory.
///
/// `min_range` and `max_range` are carried for consumers that filter points
/// by distance; the reader itself never applies them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Directory holding the list files and the referenced images
    pub data_dir: PathBuf,
    /// Minimum valid range in meters
    #[serde(default = "default_min_range")]
    pub min_range: f32,
    /// Maximum valid range in meters
    #[serde(default = "default_max_range")]
    pub max_range: f32,
    /// Divisor applied to raw depth pixels (5000 per meter in TUM datasets)
    #[serde(default = "default_depth_scaling")]
    pub depth_scaling: f32,
}

fn default_min_range() -> f32 {
    0.01
}

fn default_max_range() -> f32 {
    30.0
}

fn default_depth_scaling() -> f32 {
    5000.0
}

impl ReaderConfig {
    /// Create a config with default ranges and depth scaling.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            min_range: default_min_range(),
            max_range: default_max_range(),
            depth_scaling: default_depth_scaling(),
        }
    }

    /// Set the valid range passed on to consumers.
    pub fn with_range(mut self, min_range: f32, max_range: f32) -> Self {
        self.min_range = min_range;
        self.max_range = max_range;
        self
    }

    /// Set the depth divisor.
    pub fn with_depth_scaling(mut self, depth_scaling: f32) -> Self {
        self.depth_scaling = depth_scaling;
        self
    }

    /// Parse a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        serde_json::from_str(json).map_err(|e| DataError::Config(e.to_string()))
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, DataError> {
        let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DataError::MissingFile(path.to_path_buf()),
            _ => DataError::Io(e),
        })?;
        Self::from_json_str(&json)
    }

    pub fn rgb_list_path(&self) -> PathBuf {
        self.data_dir.join(RGB_LIST)
    }

    pub fn depth_list_path(&self) -> PathBuf {
        self.data_dir.join(DEPTH_LIST)
    }

    /// First pose list found on disk.
    ///
    /// Fails with [`DataError::MissingFile`] naming the last candidate when
    /// neither exists.
    pub fn pose_list_path(&self) -> Result<PathBuf, DataError> {
        let mut last = None;
        for name in POSE_LISTS {
            let path = self.data_dir.join(name);
            if path.is_file() {
                return Ok(path);
            }
            last = Some(path);
        }
        Err(DataError::MissingFile(
            last.unwrap_or_else(|| self.data_dir.clone()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_defaults() {
        let config = ReaderConfig::new("/data/fr1_xyz");
        assert_eq!(config.data_dir, PathBuf::from("/data/fr1_xyz"));
        assert_eq!(config.min_range, 0.01);
        assert_eq!(config.max_range, 30.0);
        assert_eq!(config.depth_scaling, 5000.0);
    }

    #[test]
    fn test_config_builder() {
        let config = ReaderConfig::new("seq")
            .with_range(0.1, 4.0)
            .with_depth_scaling(1000.0);
        assert_eq!(config.min_range, 0.1);
        assert_eq!(config.max_range, 4.0);
        assert_eq!(config.depth_scaling, 1000.0);
    }

    #[test]
    fn test_config_from_json_fills_defaults() {
        let config = ReaderConfig::from_json_str(r#"{ "data_dir": "seq", "max_range": 8.0 }"#).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("seq"));
        assert_eq!(config.min_range, 0.01);
        assert_eq!(config.max_range, 8.0);
        assert_eq!(config.depth_scaling, 5000.0);
    }

    #[test]
    fn test_config_from_json_requires_dir() {
        let err = ReaderConfig::from_json_str(r#"{ "depth_scaling": 1000.0 }"#).unwrap_err();
        assert!(matches!(err, DataError::Config(_)));
    }

    #[test]
    fn test_config_from_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reader.json");
        std::fs::write(&path, r#"{ "data_dir": "seq", "depth_scaling": 1000.0 }"#).unwrap();

        let config = ReaderConfig::from_json_file(&path).unwrap();
        assert_eq!(config.depth_scaling, 1000.0);
    }

    #[test]
    fn test_pose_list_prefers_groundtruth() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("groundtruth.txt"), "").unwrap();
        std::fs::write(dir.path().join("poses.txt"), "").unwrap();

        let config = ReaderConfig::new(dir.path());
        assert_eq!(config.pose_list_path().unwrap(), dir.path().join("groundtruth.txt"));
    }

    #[test]
    fn test_pose_list_falls_back_to_poses() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("poses.txt"), "").unwrap();

        let config = ReaderConfig::new(dir.path());
        assert_eq!(config.pose_list_path().unwrap(), dir.path().join("poses.txt"));
    }

    #[test]
    fn test_pose_list_missing() {
        let dir = tempdir().unwrap();
        let config = ReaderConfig::new(dir.path());

        match config.pose_list_path().unwrap_err() {
            DataError::MissingFile(path) => assert_eq!(path, dir.path().join("poses.txt")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
