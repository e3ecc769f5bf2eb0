//! Insertion sort that locates each slot by recursive binary search.

use crate::session::{Interrupted, RunContext};

pub fn sort(data: &mut [u32], ctx: &mut RunContext<'_>) -> Result<(), Interrupted> {
    for i in 1..data.len() {
        let key = data[i];
        let slot = search(data, key, 0, i, ctx)?;
        for j in (slot..i).rev() {
            data[j + 1] = data[j];
            ctx.step(data, &[j, j + 1])?;
        }
        data[slot] = key;
        ctx.step(data, &[slot])?;
    }
    Ok(())
}

/// Insertion point for `key` in the sorted range `left..right`; every midpoint compared is emitted.
fn search(
    data: &[u32],
    key: u32,
    left: usize,
    right: usize,
    ctx: &mut RunContext<'_>,
) -> Result<usize, Interrupted> {
    if left >= right {
        return Ok(left);
    }
    let mid = (left + right - 1) / 2;
    ctx.step(data, &[mid])?;

    if data[mid] == key {
        Ok(mid + 1)
    } else if data[mid] < key {
        search(data, key, mid + 1, right, ctx)
    } else {
        search(data, key, left, mid, ctx)
    }
}
