//! Heapsort over a max-heap.

use crate::session::{Interrupted, RunContext};

pub fn sort(data: &mut [u32], ctx: &mut RunContext<'_>) -> Result<(), Interrupted> {
    let n = data.len();
    for root in (0..n / 2).rev() {
        sift_down(data, n, root, ctx)?;
    }
    for end in (1..n).rev() {
        data.swap(0, end);
        ctx.step(data, &[0, end])?;
        sift_down(data, end, 0, ctx)?;
    }
    Ok(())
}

/// Restore the heap property below `root` within the first `heap_size` slots
fn sift_down(
    data: &mut [u32],
    heap_size: usize,
    root: usize,
    ctx: &mut RunContext<'_>,
) -> Result<(), Interrupted> {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < heap_size {
        ctx.step(data, &[root, left])?;
        if data[left] > data[largest] {
            largest = left;
        }
    }
    if right < heap_size {
        ctx.step(data, &[largest, right])?;
        if data[right] > data[largest] {
            largest = right;
        }
    }
    if largest != root {
        data.swap(root, largest);
        ctx.step(data, &[root, largest])?;
        sift_down(data, heap_size, largest, ctx)?;
    }
    Ok(())
}
