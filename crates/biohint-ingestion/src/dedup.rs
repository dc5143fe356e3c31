//! Order-preserving deduplication.
//!
//! Keeps the first item for every key and drops later ones, leaving the
//! survivors in their original order. Used per passage to collapse repeated
//! annotations of the same entity.

use std::collections::HashSet;
use std::convert::Infallible;
use std::hash::Hash;

/// Keep the first item per key, in input order.
pub fn unique_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    match try_unique_by(items, |item| Ok::<_, Infallible>(key(item))) {
        Ok(unique) => unique,
        Err(never) => match never {},
    }
}

/// Like [`unique_by`], but the key function may fail; the first failure
/// aborts the pass.
pub fn try_unique_by<T, K, E, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Result<Vec<T>, E>
where
    K: Eq + Hash,
    F: FnMut(&T) -> Result<K, E>,
{
    let mut seen: HashSet<K> = HashSet::new();
    let mut unique = Vec::new();

    for item in items {
        if seen.insert(key(&item)?) {
            unique.push(item);
        }
    }

    Ok(unique)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_occurrence_in_order() {
        let items = vec![("Gene", "1017", 'a'), ("Chemical", "15377", 'b'),
                         ("Gene", "1017", 'c'), ("Gene", "7157", 'd')];
        let unique = unique_by(items, |(kind, id, _)| (*kind, *id));
        let tags: Vec<char> = unique.iter().map(|(_, _, tag)| *tag).collect();
        assert_eq!(tags, vec!['a', 'b', 'd']);
    }

    #[test]
    fn test_empty_input() {
        let unique = unique_by(Vec::<u32>::new(), |n| *n);
        assert!(unique.is_empty());
    }

    #[test]
    fn test_try_unique_by_stops_at_first_error() {
        let mut calls = 0;
        let result = try_unique_by(vec![1, 2, -1, 3], |n| {
            calls += 1;
            if *n < 0 { Err(format!("negative: {n}")) } else { Ok(*n) }
        });
        assert_eq!(result, Err("negative: -1".to_string()));
        assert_eq!(calls, 3);
    }
}
