use crate::error::TreeError;

/// Counts the structurally distinct BSTs that can hold the keys `1..=num_keys`.
///
/// Any key can be the root, leaving the smaller keys to form the left subtree and the larger
/// keys the right one, so the count for `n` keys is the sum over every root `r` of
/// `count(r - 1) * count(n - r)`. These are the Catalan numbers. Evaluating that recurrence
/// directly recomputes the same counts exponentially often, so the counts for `0..=num_keys`
/// are filled in bottom up instead, taking `O(num_keys²)` time.
///
/// # Errors
///
/// - [`TreeError::NegativeKeyCount`] if `num_keys < 0`.
/// - [`TreeError::CountOverflow`] if the count doesn't fit in a `u64` (from 37 keys on).
///
/// # Examples
///
/// ```
/// use binary_trees::{count_trees, TreeError};
///
/// assert_eq!(count_trees(0), Ok(1));
/// assert_eq!(count_trees(3), Ok(5));
/// assert_eq!(count_trees(-1), Err(TreeError::NegativeKeyCount(-1)));
/// ```
pub fn count_trees(num_keys: i32) -> Result<u64, TreeError> {
    let n = usize::try_from(num_keys).map_err(|_| TreeError::NegativeKeyCount(num_keys))?;
    tracing::debug!(num_keys, "counting distinct trees");

    // `counts[k]` is the number of trees holding `k` keys. Zero or one key make one tree each.
    // The table grows as it goes since huge `num_keys` overflow long before they'd fill it.
    let mut counts: Vec<u64> = vec![1, 1];
    for keys in 2..=n {
        let mut total = 0u64;
        for root in 1..=keys {
            total = counts[root - 1]
                .checked_mul(counts[keys - root])
                .and_then(|trees| total.checked_add(trees))
                .ok_or(TreeError::CountOverflow(num_keys))?;
        }
        counts.push(total);
    }

    Ok(counts[n])
}
