//! Bubble sort with early exit on a pass without swaps.

use crate::session::{Interrupted, RunContext};

pub fn sort(data: &mut [u32], ctx: &mut RunContext<'_>) -> Result<(), Interrupted> {
    let n = data.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            ctx.step(data, &[j, j + 1])?;
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
                ctx.step(data, &[j, j + 1])?;
            }
        }
        if !swapped {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::algorithms::testing::{actives, trace};
    use crate::algorithms::Algorithm;

    #[test]
    fn test_sorted_input_single_pass() {
        let events = trace(Algorithm::Bubble, &[1, 2, 3, 4, 5, 6]);

        // n-1 comparisons, no swaps, then the terminal event
        assert_eq!(events.len(), 6);
        assert_eq!(
            actives(&events),
            vec![vec![0, 1], vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5]]
        );
        assert!(events[..5].iter().all(|e| e.snapshot == vec![1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_swap_emits_second_event() {
        let events = trace(Algorithm::Bubble, &[2, 1]);

        assert_eq!(actives(&events), vec![vec![0, 1], vec![0, 1]]);
        assert_eq!(events[0].snapshot, vec![2, 1]);
        assert_eq!(events[1].snapshot, vec![1, 2]);
    }
}
