//! Counting sort over the observed value range.
//!
//! One bucket per value in `min..=max`; sessions cap values at
//! [`MAX_VALUE`](crate::dataset::MAX_VALUE).

use crate::session::{Interrupted, RunContext};

pub fn sort(data: &mut [u32], ctx: &mut RunContext<'_>) -> Result<(), Interrupted> {
    let (Some(&min), Some(&max)) = (data.iter().min(), data.iter().max()) else {
        return Ok(());
    };

    let mut counts = vec![0usize; (max - min) as usize + 1];
    for idx in 0..data.len() {
        counts[(data[idx] - min) as usize] += 1;
        ctx.step(data, &[idx])?;
    }

    let mut index = 0;
    for (bucket, &count) in counts.iter().enumerate() {
        for _ in 0..count {
            data[index] = min + bucket as u32;
            ctx.step(data, &[index])?;
            index += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::algorithms::testing::{actives, trace};
    use crate::algorithms::Algorithm;

    #[test]
    fn test_count_and_write_events() {
        let input = [5, 3, 5, 1, 3];
        let events = trace(Algorithm::Counting, &input);

        // 5 count increments, 5 writes, terminal
        assert_eq!(events.len(), 11);
        assert_eq!(
            actives(&events),
            vec![
                vec![0],
                vec![1],
                vec![2],
                vec![3],
                vec![4],
                vec![0],
                vec![1],
                vec![2],
                vec![3],
                vec![4],
            ]
        );
        // counting phase leaves the data untouched
        assert!(events[..5].iter().all(|e| e.snapshot == input));
        assert_eq!(events[10].snapshot, vec![1, 3, 3, 5, 5]);
    }
}
