//! Longest strictly increasing subsequence by patience sorting.

/// Returns the indices (ascending) of a longest strictly increasing subsequence of
/// `values`.
///
/// Each value is placed on the first pile whose top is greater than or equal to it,
/// or starts a new pile. The subsequence is rebuilt by walking the piles backward and
/// taking, from each pile, the earliest occurrence of the largest value strictly below
/// the one taken from the pile after it. Every value of a pile that is smaller than a later pile's pick was
/// placed before that pick, so the result is ordered by index as well as by value.
///
/// For example:
///
/// [0,1,2] => [0,1,2]
/// [3,4,1,2] => [0,1]
/// [0,1,4,2,3,5,6] => [0,1,3,4,5,6]
pub fn longest_increasing_subsequence<T: Ord>(values: &[T]) -> Vec<usize> {
    // Pile entries are indices into `values`; pile tops increase left to right.
    let mut piles: Vec<Vec<usize>> = Vec::new();
    for (idx, value) in values.iter().enumerate() {
        let target =
            piles.partition_point(|pile| pile.last().is_some_and(|&top| values[top] < *value));
        match piles.get_mut(target) {
            Some(pile) => pile.push(idx),
            None => piles.push(vec![idx]),
        }
    }

    let mut result = Vec::with_capacity(piles.len());
    let mut bound: Option<&T> = None;
    for pile in piles.iter().rev() {
        let chosen = pile
            .iter()
            .copied()
            .filter(|&idx| bound.is_none_or(|b| values[idx] < *b))
            // first of equal maxima; later ones may follow the next pile's pick
            .max_by(|&a, &b| values[a].cmp(&values[b]).then(b.cmp(&a)));
        let Some(idx) = chosen else {
            unreachable!("patience pile holds no value below the next pile's pick");
        };
        result.push(idx);
        bound = Some(&values[idx]);
    }
    result.reverse();
    result
}
