//! Exact quarter-turn rotation over packed RGB buffers.
//!
//! Rotations are pure coordinate remaps with no interpolation, drawing into
//! buffers recycled through a [`SurfacePool`].

use std::sync::Mutex;

/// Bytes per pixel in the rotation buffers (packed RGB).
pub(crate) const PIXEL_BYTES: usize = 3;

/// Default number of surfaces retained for reuse.
pub const DEFAULT_POOL_CAPACITY: usize = 5;

/// Pool of reusable pixel buffers.
///
/// Rotation output buffers are returned here after encoding so repeated
/// renders (reorder, rotate, print preview) do not reallocate.
pub struct SurfacePool {
    buffers: Mutex<Vec<Vec<u8>>>,
    capacity: usize,
}

impl SurfacePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffers: Mutex::new(Vec::new()),
            capacity,
        }
    }

    /// Take a buffer of exactly `len` bytes, reusing a pooled allocation
    /// when one is available.
    pub fn acquire(&self, len: usize) -> Vec<u8> {
        let mut buf = self
            .buffers
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_default();
        buf.clear();
        buf.resize(len, 0);
        buf
    }

    /// Return a buffer to the pool. Dropped if the pool is full.
    pub fn release(&self, buf: Vec<u8>) {
        let mut buffers = self.buffers.lock().unwrap();
        if buffers.len() < self.capacity {
            buffers.push(buf);
        }
    }

    pub fn clear(&self) {
        self.buffers.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.buffers.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.lock().unwrap().is_empty()
    }
}

impl Default for SurfacePool {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_CAPACITY)
    }
}

/// A rotated pixel surface. `data` should be handed back to the pool once
/// the caller is done with it.
pub(crate) struct Surface {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Rotate a packed RGB buffer by `steps` clockwise quarter turns.
///
/// Output dimensions match the source for even totals and swap for odd
/// totals. `steps` is normalized mod 4; 0 produces a straight copy.
pub(crate) fn rotate_steps(
    src: &[u8],
    width: u32,
    height: u32,
    steps: u8,
    pool: &SurfacePool,
) -> Surface {
    let steps = steps % 4;
    let (w, h) = (width as usize, height as usize);
    let (out_w, out_h) = if steps % 2 == 0 { (w, h) } else { (h, w) };

    let mut dst = pool.acquire(out_w * out_h * PIXEL_BYTES);

    for y in 0..h {
        for x in 0..w {
            let (dx, dy) = match steps {
                0 => (x, y),
                1 => (h - 1 - y, x),
                2 => (w - 1 - x, h - 1 - y),
                _ => (y, w - 1 - x),
            };
            let si = (y * w + x) * PIXEL_BYTES;
            let di = (dy * out_w + dx) * PIXEL_BYTES;
            dst[di..di + PIXEL_BYTES].copy_from_slice(&src[si..si + PIXEL_BYTES]);
        }
    }

    Surface {
        data: dst,
        width: out_w as u32,
        height: out_h as u32,
    }
}
