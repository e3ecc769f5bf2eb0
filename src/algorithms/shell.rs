//! Shellsort with halving gaps.

use crate::session::{Interrupted, RunContext};

pub fn sort(data: &mut [u32], ctx: &mut RunContext<'_>) -> Result<(), Interrupted> {
    let n = data.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let value = data[i];
            let mut j = i;
            while j >= gap && data[j - gap] > value {
                ctx.step(data, &[j - gap, j])?;
                data[j] = data[j - gap];
                ctx.step(data, &[j, j - gap])?;
                j -= gap;
            }
            data[j] = value;
            ctx.step(data, &[j])?;
        }
        gap /= 2;
    }
    Ok(())
}
