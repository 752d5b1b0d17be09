//! TUM Ingest Crate
//!
//! Lazy RGB-D frame access over TUM-format dataset directories.
//!
//! ## Modules
//!
//! - [`reader`]: [`TumReader`], indexed and iterable access to associated frames
//! - [`frame`]: the [`RgbdFrame`] handed out per access
//! - [`image_io`]: depth and color decoding
//! - [`camera`]: the [`CameraStream`] trait and a cursor-based stream over a reader
//!
//! ## Example
//!
//! ```ignore
//! use tum_ingest::TumReader;
//!
//! let reader = TumReader::new("rgbd_dataset_freiburg1_xyz")?;
//! for frame in &reader {
//!     let frame = frame?;
//!     println!("{} {:?}", frame.index, frame.translation);
//! }
//! ```

pub mod camera;
pub mod error;
pub mod frame;
pub mod image_io;
pub mod reader;

#[cfg(test)]
pub(crate) mod test_utils;

pub use camera::{CameraStream, TumStream};
pub use error::ReaderError;
pub use frame::{ColorImage, DepthImage, RgbdFrame};
pub use reader::{Frames, TumReader};

pub use tum_data::{DataError, Pose, ReaderConfig};
