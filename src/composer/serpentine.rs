//! Serpentine (boustrophedon) team order.
//!
//! Alternates between the front and the back of the team list:
//! `0, n-1, 1, n-2, ...` until the two cursors meet. Filling damage
//! seats in this order keeps early teams from being systematically
//! filled ahead of late ones.

/// Team indices in serpentine order.
pub fn serpentine_order(team_count: usize) -> impl Iterator<Item = usize> {
    let mut head = 0;
    let mut tail = team_count;
    let mut from_front = true;

    std::iter::from_fn(move || {
        if head >= tail {
            return None;
        }
        let next = if from_front {
            head += 1;
            head - 1
        } else {
            tail -= 1;
            tail
        };
        from_front = !from_front;
        Some(next)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_even() {
        let order: Vec<usize> = serpentine_order(4).collect();
        assert_eq!(order, vec![0, 3, 1, 2]);
    }

    #[test]
    fn test_order_odd() {
        let order: Vec<usize> = serpentine_order(5).collect();
        assert_eq!(order, vec![0, 4, 1, 3, 2]);
    }

    #[test]
    fn test_order_small() {
        assert_eq!(serpentine_order(0).count(), 0);
        assert_eq!(serpentine_order(1).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_order_is_permutation() {
        for n in 0..20 {
            let mut order: Vec<usize> = serpentine_order(n).collect();
            order.sort_unstable();
            assert_eq!(order, (0..n).collect::<Vec<_>>());
        }
    }
}
