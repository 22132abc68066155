//! Fixed-size top-N selection.

/// One slot of the [`top_generic`] result set. Slots start empty with a
/// zero score; only strictly greater scores displace them.
#[derive(Clone, Debug)]
pub struct Scored<T> {
    pub score: f64,
    pub item: Option<T>,
}

/// Keep the `top` highest-scoring entries of `list` using a linear
/// replace-the-minimum strategy: an incoming element displaces the current
/// minimum slot only if its score is strictly greater, so equal scores
/// never evict an earlier entry (first seen wins). The result preserves
/// internal slot order, not rank order, and may contain empty slots when
/// fewer than `top` entries scored above zero.
pub fn top_generic<T, F>(list: &[T], top: usize, score: F) -> Vec<Scored<T>>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    let mut queue: Vec<Scored<T>> = (0..top)
        .map(|_| Scored {
            score: 0.0,
            item: None,
        })
        .collect();
    if top == 0 {
        return queue;
    }

    let mut min = 0.0f64;
    let mut min_idx = 0usize;
    for item in list {
        let s = score(item);
        if s > min {
            queue[min_idx] = Scored {
                score: s,
                item: Some(item.clone()),
            };
            min = f64::MAX;
            for (pos, slot) in queue.iter().enumerate() {
                if slot.score < min {
                    min = slot.score;
                    min_idx = pos;
                }
            }
        }
    }

    queue
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_n_largest_scores() {
        let list = [3.0f64, 9.0, 1.0, 7.0, 5.0, 8.0];
        let result = top_generic(&list, 3, |&v| v);
        assert_eq!(result.len(), 3);

        let mut scores: Vec<f64> = result.iter().map(|s| s.score).collect();
        scores.sort_by(|a, b| a.partial_cmp(b).expect("finite scores"));
        assert_eq!(scores, vec![7.0, 8.0, 9.0]);
        assert!(result.iter().all(|s| s.item.is_some()));
    }

    #[test]
    fn ties_keep_first_seen() {
        #[derive(Clone, Debug, PartialEq)]
        struct Tagged(u32, f64);

        let list = [Tagged(0, 5.0), Tagged(1, 5.0), Tagged(2, 5.0)];
        let result = top_generic(&list, 2, |t| t.1);

        let kept: Vec<u32> = result
            .iter()
            .filter_map(|s| s.item.as_ref().map(|t| t.0))
            .collect();
        // The third 5.0 is not strictly greater than the current minimum,
        // so the first two survive.
        assert_eq!(kept, vec![0, 1]);
    }

    #[test]
    fn short_input_leaves_empty_slots() {
        let list = [4.0f64];
        let result = top_generic(&list, 3, |&v| v);
        assert_eq!(result.len(), 3);
        assert_eq!(result.iter().filter(|s| s.item.is_some()).count(), 1);
    }

    #[test]
    fn zero_capacity_is_empty() {
        let list = [1.0f64, 2.0];
        assert!(top_generic(&list, 0, |&v| v).is_empty());
    }
}
