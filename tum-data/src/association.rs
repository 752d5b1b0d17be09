//! Nearest-timestamp association of color, depth, and pose streams.
//!
//! Each color record is paired with the closest depth record and the closest
//! pose record. Ties go to the earliest record in list order.

use crate::list::ListRecord;
use tracing::debug;

/// Largest accepted offset (seconds) between a color frame and its partners.
/// The bound is inclusive.
pub const MAX_TIME_OFFSET: f64 = 0.02;

/// A color frame with its matched depth frame and pose record.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Color frame timestamp in seconds
    pub timestamp: f64,
    /// Color image path, relative to the dataset directory
    pub color: String,
    /// Depth image path, relative to the dataset directory
    pub depth: String,
    /// Pose tokens (tx ty tz qx qy qz qw ...)
    pub pose: Vec<String>,
}

/// Find the record closest in time to `target`.
///
/// Returns the index of the first minimum and its absolute offset, or `None`
/// when `records` is empty.
pub fn nearest(records: &[ListRecord], target: f64) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, record) in records.iter().enumerate() {
        let delta = (record.timestamp - target).abs();
        if delta.is_nan() {
            continue;
        }
        if best.is_none_or(|(_, best_delta)| delta < best_delta) {
            best = Some((idx, delta));
        }
    }

    best
}

fn within(records: &[ListRecord], target: f64, max_offset: f64) -> Option<&ListRecord> {
    nearest(records, target)
        .filter(|&(_, delta)| delta <= max_offset)
        .map(|(idx, _)| &records[idx])
}

/// Associate every color record with its nearest depth and pose records.
///
/// Color records without a depth or pose partner inside `max_offset` are
/// dropped. Output order follows `color`.
pub fn associate(
    color: &[ListRecord],
    depth: &[ListRecord],
    pose: &[ListRecord],
    max_offset: f64,
) -> Vec<Match> {
    let mut matches = Vec::with_capacity(color.len());

    for record in color {
        let Some(color_path) = record.first_token() else {
            continue;
        };
        let Some(depth_record) = within(depth, record.timestamp, max_offset) else {
            continue;
        };
        let Some(pose_record) = within(pose, record.timestamp, max_offset) else {
            continue;
        };
        let Some(depth_path) = depth_record.first_token() else {
            continue;
        };

        matches.push(Match {
            timestamp: record.timestamp,
            color: color_path.to_owned(),
            depth: depth_path.to_owned(),
            pose: pose_record.tokens.clone(),
        });
    }

    debug!(
        "Associated {} of {} color frames ({} discarded)",
        matches.len(),
        color.len(),
        color.len() - matches.len()
    );

    matches
}
