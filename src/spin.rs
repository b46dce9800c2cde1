//! Spinning-ring workload
//!
//! Rotates a ring of vertices by an accumulating yaw/pitch/roll step every
//! frame, pushing the whole ring through the batched transform path. The
//! ring's radius is invariant under rotation, so the largest radius error
//! seen across all frames measures accumulated numeric drift.

use std::fmt;

use spatial3d_core::Transform3D;
use spatial3d_math::{BatchError, Quaternion, Vector3, VectorTransform};

use crate::config::SpinConfig;

/// Summary of a completed run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinReport {
    pub frames: u32,
    pub vertices: usize,
    /// Largest `|length - radius|` over every vertex of every frame
    pub max_radius_drift: f32,
    pub final_rotation: Quaternion,
}

/// Error type for the spin workload
#[derive(Debug)]
pub enum SpinError {
    /// The frame buffer did not fit the ring
    Batch(BatchError),
}

impl fmt::Display for SpinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinError::Batch(err) => write!(f, "Spin batch error: {}", err),
        }
    }
}

impl std::error::Error for SpinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpinError::Batch(err) => Some(err),
        }
    }
}

impl From<BatchError> for SpinError {
    fn from(err: BatchError) -> Self {
        SpinError::Batch(err)
    }
}

/// Evenly spaced points on a circle of `radius` in the XZ plane
pub fn ring(count: usize, radius: f32) -> Vec<Vector3> {
    (0..count)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / count as f32;
            let (sin, cos) = angle.sin_cos();
            Vector3::new(radius * cos, 0.0, radius * sin)
        })
        .collect()
}

/// Run the workload described by `config`
pub fn run(config: &SpinConfig) -> Result<SpinReport, SpinError> {
    let rest = ring(config.vertex_count, config.radius);
    let mut frame = vec![Vector3::ZERO; rest.len()];

    let step = Quaternion::from_yaw_pitch_roll(config.yaw_rate, config.pitch_rate, config.roll_rate);
    let mut rotation = Quaternion::IDENTITY;
    let mut max_drift = 0.0f32;

    log::info!(
        "Spinning {} vertices for {} frames via the {} path",
        rest.len(),
        config.frames,
        if config.use_matrix_path { "matrix" } else { "quaternion" }
    );

    for index in 0..config.frames {
        rotation = Quaternion::concatenate(rotation, step).normalized();

        if config.use_matrix_path {
            Transform3D::from_position_rotation(Vector3::ZERO, rotation)
                .transform_points(&rest, &mut frame)?;
        } else {
            rotation.apply_all(&rest, &mut frame)?;
        }

        let drift = frame
            .iter()
            .map(|v| (v.length() - config.radius).abs())
            .fold(0.0f32, f32::max);
        max_drift = max_drift.max(drift);

        log::debug!("Frame {}: rotation {}, drift {:e}", index, rotation, drift);
    }

    log::info!("Finished {} frames, max radius drift {:e}", config.frames, max_drift);

    Ok(SpinReport {
        frames: config.frames,
        vertices: rest.len(),
        max_radius_drift: max_drift,
        final_rotation: rotation,
    })
}
