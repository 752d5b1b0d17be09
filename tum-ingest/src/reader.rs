//! Associated RGB-D frame reader
//!
//! Opening a directory parses the three list files, associates them once,
//! and parses every matched pose. Image and depth pixels are decoded on each
//! access and never cached.
//!
//! Frames carry a 1-based `index` (reader position + 1). Downstream
//! consumers number frames from 1, so this offset is kept.

use crate::error::ReaderError;
use crate::frame::RgbdFrame;
use crate::image_io::{load_color, load_depth};
use std::path::{Path, PathBuf};
use tracing::info;
use tum_data::{MAX_TIME_OFFSET, Pose, ReaderConfig, associate, parse_list};

/// Matched frame metadata kept for the lifetime of the reader
#[derive(Debug, Clone)]
struct FrameEntry {
    timestamp: f64,
    color_path: PathBuf,
    depth_path: PathBuf,
    pose: Pose,
}

/// Indexed, iterable access to a TUM RGB-D sequence
#[derive(Debug, Clone)]
pub struct TumReader {
    config: ReaderConfig,
    entries: Vec<FrameEntry>,
}

impl TumReader {
    /// Open a dataset directory with default ranges and depth scaling.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, ReaderError> {
        Self::open(ReaderConfig::new(data_dir))
    }

    /// Open a dataset directory described by `config`.
    #[tracing::instrument(skip_all, fields(dir = %config.data_dir.display()))]
    pub fn open(config: ReaderConfig) -> Result<Self, ReaderError> {
        let rgb_list = config.rgb_list_path();
        let depth_list = config.depth_list_path();
        let pose_list = config.pose_list_path()?;

        let color = parse_list(&rgb_list, 1)?;
        let depth = parse_list(&depth_list, 1)?;
        let poses = parse_list(&pose_list, 0)?;

        let matches = associate(&color, &depth, &poses, MAX_TIME_OFFSET);

        let entries = matches
            .into_iter()
            .map(|m| {
                Ok(FrameEntry {
                    timestamp: m.timestamp,
                    color_path: config.data_dir.join(&m.color),
                    depth_path: config.data_dir.join(&m.depth),
                    pose: Pose::from_tokens(m.pose.as_slice())?,
                })
            })
            .collect::<Result<Vec<_>, tum_data::DataError>>()?;

        info!(
            "Opened TUM sequence: {} frames ({} color, {} depth, {} poses from {})",
            entries.len(),
            color.len(),
            depth.len(),
            poses.len(),
            pose_list.display()
        );

        Ok(Self { config, entries })
    }

    /// Number of associated frames
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load the frame at `index` (0-based). The returned frame's `index` is `index + 1`.
    pub fn get(&self, index: usize) -> Result<RgbdFrame, ReaderError> {
        let entry = self.entry(index)?;

        let depth = load_depth(&entry.depth_path, self.config.depth_scaling)?;
        let color = load_color(&entry.color_path)?;

        Ok(RgbdFrame {
            index: index + 1,
            timestamp: entry.timestamp,
            translation: entry.pose.translation,
            rotation: entry.pose.rotation,
            depth,
            color,
        })
    }

    /// Iterate over all frames from the first one. Each call starts over.
    pub fn iter(&self) -> Frames<'_> {
        Frames {
            reader: self,
            current: 0,
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    pub fn min_range(&self) -> f32 {
        self.config.min_range
    }

    pub fn max_range(&self) -> f32 {
        self.config.max_range
    }

    pub fn depth_scaling(&self) -> f32 {
        self.config.depth_scaling
    }

    /// Color timestamp of the frame at `index`
    pub fn timestamp(&self, index: usize) -> Result<f64, ReaderError> {
        Ok(self.entry(index)?.timestamp)
    }

    /// Pose of the frame at `index`, without touching any image
    pub fn pose(&self, index: usize) -> Result<Pose, ReaderError> {
        Ok(self.entry(index)?.pose)
    }

    pub fn color_path(&self, index: usize) -> Result<&Path, ReaderError> {
        Ok(&self.entry(index)?.color_path)
    }

    pub fn depth_path(&self, index: usize) -> Result<&Path, ReaderError> {
        Ok(&self.entry(index)?.depth_path)
    }

    fn entry(&self, index: usize) -> Result<&FrameEntry, ReaderError> {
        self.entries.get(index).ok_or(ReaderError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }
}

/// Iterator over reader frames
pub struct Frames<'a> {
    reader: &'a TumReader,
    current: usize,
}

impl Iterator for Frames<'_> {
    type Item = Result<RgbdFrame, ReaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.reader.len() {
            let result = self.reader.get(self.current);
            self.current += 1;
            Some(result)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.reader.len().saturating_sub(self.current);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames<'_> {}

impl<'a> IntoIterator for &'a TumReader {
    type Item = Result<RgbdFrame, ReaderError>;
    type IntoIter = Frames<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
