//! Insertion sort.

use crate::session::{Interrupted, RunContext};

pub fn sort(data: &mut [u32], ctx: &mut RunContext<'_>) -> Result<(), Interrupted> {
    for i in 1..data.len() {
        let key = data[i];
        // `slot` is where `key` lands; data[slot - 1] is the element compared
        let mut slot = i;
        while slot > 0 && data[slot - 1] > key {
            ctx.step(data, &[slot - 1, i])?;
            data[slot] = data[slot - 1];
            ctx.step(data, &[slot - 1, slot])?;
            slot -= 1;
        }
        data[slot] = key;
        ctx.step(data, &[slot])?;
    }
    Ok(())
}
