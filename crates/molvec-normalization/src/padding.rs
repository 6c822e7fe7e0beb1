//! Padding of variable-length sequences to a uniform length.

/// Length of the longest sequence, or 0 for an empty set.
pub fn max_len<T>(vectors: &[Vec<T>]) -> usize {
    vectors.iter().map(Vec::len).max().unwrap_or(0)
}

/// Pad every sequence to the length `L` of the longest one.
///
/// Sequences shorter than `L` get `end_char` appended once (when given)
/// followed by `pad_char` until they reach `L`. Sequences already at `L` are
/// left untouched, so padding a padded set again is a no-op.
///
/// ```
/// use molvec_normalization::pad_vectors;
///
/// let padded = pad_vectors(&[vec![1, 2], vec![1]], None, 0);
/// assert_eq!(padded, vec![vec![1, 2], vec![1, 0]]);
/// ```
pub fn pad_vectors<T: Clone>(vectors: &[Vec<T>], end_char: Option<T>, pad_char: T) -> Vec<Vec<T>> {
    let target = max_len(vectors);
    vectors
        .iter()
        .map(|vector| {
            let mut padded = Vec::with_capacity(target);
            padded.extend_from_slice(vector);
            if padded.len() < target {
                if let Some(end) = &end_char {
                    padded.push(end.clone());
                }
                padded.resize(target, pad_char.clone());
            }
            padded
        })
        .collect()
}
