//! # Utilities
//!
//! Small collection helpers shared by the profile and builder code.

/// Collapses clusters of "equal" elements, keeping the first element of each
/// cluster.
///
/// The first remaining element is kept and every element the comparator
/// matches against it is dropped, then the process repeats on what is left.
/// Clusters are therefore anchored on their first member, not chained.
///
/// # Example
///
/// ```rust
/// use loft_mesh::utils::remove_doubles;
///
/// let values: Vec<f64> = vec![0.0, 0.0005, 0.0012, 0.5];
/// let kept = remove_doubles(values, |a, b| (a - b).abs() <= 0.001);
/// assert_eq!(kept, vec![0.0, 0.0012, 0.5]);
/// ```
pub fn remove_doubles<T, F>(items: Vec<T>, mut same: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut remaining = items;
    let mut kept = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let anchor = remaining.remove(0);
        remaining.retain(|item| !same(&anchor, item));
        kept.push(anchor);
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_doubles_keeps_first_of_cluster() {
        let kept = remove_doubles(vec![1i32, 2, 3, 10, 11, 20], |a, b| (a - b).abs() <= 1);
        assert_eq!(kept, vec![1, 3, 10, 20]);
    }

    #[test]
    fn test_remove_doubles_empty() {
        let kept = remove_doubles(Vec::<f64>::new(), |a, b| a == b);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_remove_doubles_non_adjacent() {
        let kept = remove_doubles(vec!["a", "b", "a", "c", "b"], |a, b| a == b);
        assert_eq!(kept, vec!["a", "b", "c"]);
    }
}
