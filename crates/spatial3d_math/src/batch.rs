//! Batched transforms over runs of vectors
//!
//! One transform is applied to `count` consecutive vectors:
//! `destination[destination_index + i] = T(source[source_index + i])`.
//!
//! Ranges are validated before anything is written, so a failed call leaves
//! the destination untouched. No routine here allocates.
//!
//! Source and destination may share storage through the `*_in_place`
//! methods, which take a single buffer and two offsets and walk the range in
//! whichever direction never reads a slot that was already written.

use crate::{BatchError, Matrix, Quaternion, Vector3};

/// A transform that maps one vector to another
///
/// Implementors supply [`apply`](Self::apply); the batch methods are shared.
pub trait VectorTransform {
    fn apply(&self, v: Vector3) -> Vector3;

    /// Transform `count` vectors from `source` into `destination`
    fn apply_range(
        &self,
        source: &[Vector3],
        source_index: usize,
        destination: &mut [Vector3],
        destination_index: usize,
        count: usize,
    ) -> Result<(), BatchError> {
        BatchError::check_source(source_index, count, source.len())?;
        BatchError::check_destination(destination_index, count, destination.len())?;

        let src = &source[source_index..source_index + count];
        let dst = &mut destination[destination_index..destination_index + count];
        for (out, v) in dst.iter_mut().zip(src) {
            *out = self.apply(*v);
        }
        Ok(())
    }

    /// Transform every vector of `source` into the front of `destination`
    ///
    /// `destination` must be at least as long as `source`.
    fn apply_all(&self, source: &[Vector3], destination: &mut [Vector3]) -> Result<(), BatchError> {
        self.apply_range(source, 0, destination, 0, source.len())
    }

    /// Transform `count` vectors within one buffer
    ///
    /// The two ranges may overlap; each source slot is read before any write
    /// could reach it.
    fn apply_range_in_place(
        &self,
        buffer: &mut [Vector3],
        source_index: usize,
        destination_index: usize,
        count: usize,
    ) -> Result<(), BatchError> {
        BatchError::check_source(source_index, count, buffer.len())?;
        BatchError::check_destination(destination_index, count, buffer.len())?;

        if destination_index <= source_index {
            for i in 0..count {
                buffer[destination_index + i] = self.apply(buffer[source_index + i]);
            }
        } else {
            for i in (0..count).rev() {
                buffer[destination_index + i] = self.apply(buffer[source_index + i]);
            }
        }
        Ok(())
    }

    /// Transform every vector of `buffer` in place
    fn apply_all_in_place(&self, buffer: &mut [Vector3]) {
        for v in buffer.iter_mut() {
            *v = self.apply(*v);
        }
    }
}

/// Affine transform: rotation, scale and translation
impl VectorTransform for Matrix {
    #[inline]
    fn apply(&self, v: Vector3) -> Vector3 {
        v.transform(self)
    }
}

impl VectorTransform for Quaternion {
    #[inline]
    fn apply(&self, v: Vector3) -> Vector3 {
        v.rotate(*self)
    }
}

/// Applies a matrix to directions and normals, skipping its translation row
#[derive(Clone, Copy, Debug)]
pub struct NormalTransform<'a>(pub &'a Matrix);

impl VectorTransform for NormalTransform<'_> {
    #[inline]
    fn apply(&self, v: Vector3) -> Vector3 {
        v.transform_normal(self.0)
    }
}
