//! Camera stream interface over an associated sequence

use crate::error::ReaderError;
use crate::frame::RgbdFrame;
use crate::reader::TumReader;

/// Trait for camera stream sources
pub trait CameraStream {
    /// Get the next frame from the stream
    /// Returns None when the stream ends
    fn next_frame(&mut self) -> Result<Option<RgbdFrame>, ReaderError>;

    /// Get the frame rate (frames per second), if known
    fn frame_rate(&self) -> Option<f32>;

    /// Check if the stream is still active
    fn is_active(&self) -> bool;
}

/// Sequential stream over a [`TumReader`] with a rewindable cursor
pub struct TumStream {
    reader: TumReader,
    cursor: usize,
}

impl TumStream {
    pub fn new(reader: TumReader) -> Self {
        Self { reader, cursor: 0 }
    }

    /// Rewind to the first frame. Associations are left untouched.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Number of frames already returned since the last reset
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn reader(&self) -> &TumReader {
        &self.reader
    }

    pub fn into_reader(self) -> TumReader {
        self.reader
    }
}

impl From<TumReader> for TumStream {
    fn from(reader: TumReader) -> Self {
        Self::new(reader)
    }
}

impl CameraStream for TumStream {
    fn next_frame(&mut self) -> Result<Option<RgbdFrame>, ReaderError> {
        if self.cursor >= self.reader.len() {
            return Ok(None);
        }
        let frame = self.reader.get(self.cursor)?;
        self.cursor += 1;
        Ok(Some(frame))
    }

    fn frame_rate(&self) -> Option<f32> {
        let n = self.reader.len();
        if n < 2 {
            return None;
        }
        let first = self.reader.timestamp(0).ok()?;
        let last = self.reader.timestamp(n - 1).ok()?;
        let span = last - first;
        (span > 0.0).then(|| ((n - 1) as f64 / span) as f32)
    }

    fn is_active(&self) -> bool {
        self.cursor < self.reader.len()
    }
}
