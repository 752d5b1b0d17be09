//! TUM Data Crate
//!
//! Parsing and association for TUM-format RGB-D dataset directories.
//! This crate never decodes images; it turns the three list files into
//! matched, pose-annotated records that `tum-ingest` loads on demand.

pub mod association;
pub mod config;
pub mod error;
pub mod list;
pub mod pose;

pub use association::{MAX_TIME_OFFSET, Match, associate, nearest};
pub use config::{DEPTH_LIST, POSE_LISTS, RGB_LIST, ReaderConfig};
pub use error::DataError;
pub use list::{ListRecord, parse_list, parse_list_str};
pub use pose::Pose;
