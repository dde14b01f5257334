// Statistical operations over trip columns
// Author: Gabriel Demetrios Lafis

use std::collections::HashMap;
use std::hash::Hash;

/// Count occurrences of each distinct value.
///
/// Returns `(value, count)` pairs ordered by descending count; values with
/// equal counts keep the order in which they were first seen.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match slots.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value, or `None` for an empty input.
///
/// When several values share the highest count, the one encountered first
/// wins, so the result does not depend on hash iteration order.
pub fn compute_mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next().map(|(value, _)| value)
}

/// Sum of values
pub fn compute_sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Mean of values, `None` when there are none
pub fn compute_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(compute_sum(values) / values.len() as f64)
}

pub fn compute_min<T: Ord + Copy>(values: &[T]) -> Option<T> {
    values.iter().copied().min()
}

pub fn compute_max<T: Ord + Copy>(values: &[T]) -> Option<T> {
    values.iter().copied().max()
}
