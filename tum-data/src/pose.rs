//! Ground-truth pose records

use crate::error::DataError;
use glam::Vec3;

/// Camera pose from a `groundtruth.txt` line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Camera position (tx, ty, tz)
    pub translation: Vec3,
    /// Camera orientation (quaternion: x, y, z, w)
    pub rotation: [f32; 4],
}

impl Pose {
    /// Parse `tx ty tz qx qy qz qw`. Tokens past the seventh are ignored.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, DataError> {
        if tokens.len() < 7 {
            return Err(DataError::InvalidPose(format!(
                "expected 7 fields (tx ty tz qx qy qz qw), got {}",
                tokens.len()
            )));
        }

        let mut values = [0.0f32; 7];
        for (value, token) in values.iter_mut().zip(tokens) {
            let token = token.as_ref();
            *value = token
                .parse()
                .map_err(|e| DataError::InvalidPose(format!("'{}': {}", token, e)))?;
        }

        let [tx, ty, tz, qx, qy, qz, qw] = values;
        Ok(Self {
            translation: Vec3::new(tx, ty, tz),
            rotation: [qx, qy, qz, qw],
        })
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: [0.0, 0.0, 0.0, 1.0],
        }
    }
}
