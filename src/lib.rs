//! TUM RGB-D
//!
//! Reads TUM-format RGB-D directories (`rgb.txt`, `depth.txt`,
//! `groundtruth.txt`/`poses.txt`), associates the three streams by nearest
//! timestamp, and hands out synchronized frames.
//!
//! - [`data`]: list parsing, association, poses, configuration
//! - [`ingest`]: the frame reader and stream

pub use tum_data as data;
pub use tum_ingest as ingest;

pub use tum_data::{DataError, Pose, ReaderConfig};
pub use tum_ingest::{CameraStream, ReaderError, RgbdFrame, TumReader, TumStream};
