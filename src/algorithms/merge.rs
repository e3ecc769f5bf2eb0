//! Top-down merge sort.

use crate::session::{Interrupted, RunContext};

pub fn sort(data: &mut [u32], ctx: &mut RunContext<'_>) -> Result<(), Interrupted> {
    if data.len() > 1 {
        let right = data.len() - 1;
        merge_sort(data, 0, right, ctx)?;
    }
    Ok(())
}

fn merge_sort(
    data: &mut [u32],
    left: usize,
    right: usize,
    ctx: &mut RunContext<'_>,
) -> Result<(), Interrupted> {
    if left < right {
        let mid = (left + right) / 2;
        merge_sort(data, left, mid, ctx)?;
        merge_sort(data, mid + 1, right, ctx)?;
        merge(data, left, mid, right, ctx)?;
    }
    Ok(())
}

/// Merge the sorted runs `left..=mid` and `mid+1..=right`
fn merge(
    data: &mut [u32],
    left: usize,
    mid: usize,
    right: usize,
    ctx: &mut RunContext<'_>,
) -> Result<(), Interrupted> {
    let lo = data[left..=mid].to_vec();
    let hi = data[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < lo.len() && j < hi.len() {
        ctx.step(data, &[left + i, mid + 1 + j])?;
        if lo[i] <= hi[j] {
            data[k] = lo[i];
            i += 1;
        } else {
            data[k] = hi[j];
            j += 1;
        }
        ctx.step(data, &[k])?;
        k += 1;
    }

    for &value in lo[i..].iter().chain(&hi[j..]) {
        data[k] = value;
        ctx.step(data, &[k])?;
        k += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::algorithms::testing::{actives, trace};
    use crate::algorithms::Algorithm;

    #[test]
    fn test_merge_trace() {
        let events = trace(Algorithm::Merge, &[2, 1, 3]);

        assert_eq!(
            actives(&events),
            vec![
                vec![0, 1], // merge [2] with [1]
                vec![0],
                vec![1],    // drain 2
                vec![0, 2], // merge [1,2] with [3]
                vec![0],
                vec![1, 2],
                vec![1],
                vec![2],    // drain 3
            ]
        );
        assert_eq!(events[1].snapshot, vec![1, 1, 3]);
        assert_eq!(events.last().unwrap().snapshot, vec![1, 2, 3]);
    }

    #[test]
    fn test_write_count() {
        // every level writes each element once
        let events = trace(Algorithm::Merge, &[4, 3, 2, 1]);
        let writes = actives(&events).iter().filter(|a| a.len() == 1).count();
        assert_eq!(writes, 8);
    }
}
