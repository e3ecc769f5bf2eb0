//! Selection sort.

use crate::session::{Interrupted, RunContext};

pub fn sort(data: &mut [u32], ctx: &mut RunContext<'_>) -> Result<(), Interrupted> {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            ctx.step(data, &[j, min])?;
            if data[j] < data[min] {
                min = j;
                ctx.step(data, &[min, i])?;
            }
        }
        if min != i {
            data.swap(i, min);
            ctx.step(data, &[i, min])?;
        }
    }
    Ok(())
}
