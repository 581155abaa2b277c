//! Stable merge sort with a fallible comparator
//!
//! `slice::sort_by` takes an infallible comparator, but ours can fail (cache
//! append errors, stdin closing mid-prompt) and every comparison is a
//! potential human judgment. Merge sort keeps the comparison count low and
//! lets an error unwind cleanly; already-recorded answers are on disk, so
//! nothing is lost.

use std::cmp::Ordering;

/// Sort `items` in place, stably, propagating the first comparator error.
/// Ties keep their original relative order.
pub fn try_sort_by<T, E, F>(items: &mut [T], cmp: &mut F) -> Result<(), E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    if items.len() <= 1 {
        return Ok(());
    }

    let mid = items.len() / 2;
    let mut left: Vec<T> = items[..mid].to_vec();
    let mut right: Vec<T> = items[mid..].to_vec();
    try_sort_by(&mut left, cmp)?;
    try_sort_by(&mut right, cmp)?;

    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        let take_right = i < left.len()
            && j < right.len()
            && cmp(&right[j], &left[i])? == Ordering::Less;
        if take_right || i == left.len() {
            slot.clone_from(&right[j]);
            j += 1;
        } else {
            slot.clone_from(&left[i]);
            i += 1;
        }
    }
    Ok(())
}
