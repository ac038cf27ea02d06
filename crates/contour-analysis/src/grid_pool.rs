//! Thread-local storage for binary threshold grids.
//!
//! Contour tracing needs a fresh `width * height` grid for every threshold.
//! Instead of allocating one per pass, each thread keeps a single buffer that
//! grows to the largest region it has seen and is cleared before reuse. Rayon
//! workers each get their own buffer, so parallel passes never share one.

use std::cell::RefCell;

/// Initial capacity, enough for a 256x256 region.
const INITIAL_CELLS: usize = 256 * 256;

/// Largest buffer kept alive between traces, a 1024x1024 region.
pub const MAX_RETAINED_CELLS: usize = 1024 * 1024;

thread_local! {
    static BINARY_GRID: RefCell<Vec<u8>> = RefCell::new(Vec::with_capacity(INITIAL_CELLS));
}

/// Run `f` with a zeroed grid of exactly `width * height` cells.
///
/// `f` must not call `with_binary_grid` again on the same thread.
#[inline]
pub fn with_binary_grid<F, R>(width: usize, height: usize, f: F) -> R
where
    F: FnOnce(&mut [u8]) -> R,
{
    BINARY_GRID.with(|buf| {
        let mut buf = buf.borrow_mut();
        let size = width * height;

        if buf.len() < size {
            buf.resize(size, 0);
        }
        buf[..size].fill(0);

        f(&mut buf[..size])
    })
}

/// Capacity of this thread's grid buffer.
pub fn grid_capacity() -> usize {
    BINARY_GRID.with(|buf| buf.borrow().capacity())
}

/// Shrink this thread's buffer back to its initial size once it has grown
/// past [`MAX_RETAINED_CELLS`].
pub fn release_oversized() {
    BINARY_GRID.with(|buf| {
        let mut buf = buf.borrow_mut();
        if buf.capacity() > MAX_RETAINED_CELLS {
            buf.clear();
            buf.shrink_to(INITIAL_CELLS);
        }
    });
}
