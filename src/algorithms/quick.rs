//! Quicksort with Lomuto partitioning around the last element.

use crate::session::{Interrupted, RunContext};

pub fn sort(data: &mut [u32], ctx: &mut RunContext<'_>) -> Result<(), Interrupted> {
    if data.len() > 1 {
        let high = data.len() - 1;
        quick_sort(data, 0, high, ctx)?;
    }
    Ok(())
}

/// Sort the inclusive range `low..=high`
fn quick_sort(
    data: &mut [u32],
    low: usize,
    high: usize,
    ctx: &mut RunContext<'_>,
) -> Result<(), Interrupted> {
    if low >= high {
        return Ok(());
    }
    let pivot = partition(data, low, high, ctx)?;
    if pivot > low {
        quick_sort(data, low, pivot - 1, ctx)?;
    }
    quick_sort(data, pivot + 1, high, ctx)
}

/// Elements `<= pivot` move left of the pivot's final position
fn partition(
    data: &mut [u32],
    low: usize,
    high: usize,
    ctx: &mut RunContext<'_>,
) -> Result<usize, Interrupted> {
    let pivot = data[high];
    let mut store = low;
    for j in low..high {
        ctx.step(data, &[j, high])?;
        if data[j] <= pivot {
            data.swap(store, j);
            ctx.step(data, &[store, j])?;
            store += 1;
        }
    }
    data.swap(store, high);
    ctx.step(data, &[store, high])?;
    Ok(store)
}
