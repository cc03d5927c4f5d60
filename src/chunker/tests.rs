use super::*;
use crate::error::BatchError;
use std::cell::Cell;
use std::rc::Rc;

fn collect(source: Vec<i32>, size: usize) -> Vec<Vec<i32>> {
    chunked(source, size).unwrap().collect()
}

#[test]
fn test_pairs_with_remainder() {
    assert_eq!(
        collect(vec![1, 2, 3, 4, 5], 2),
        vec![vec![1, 2], vec![3, 4], vec![5]]
    );
}

#[test]
fn test_even_split() {
    assert_eq!(collect(vec![1, 2, 3, 4], 2), vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn test_empty_source_yields_no_chunks() {
    assert!(collect(vec![], 3).is_empty());
}

#[test]
fn test_size_larger_than_source() {
    assert_eq!(collect(vec![1], 5), vec![vec![1]]);
}

#[test]
fn test_size_one() {
    assert_eq!(collect(vec![1, 2, 3], 1), vec![vec![1], vec![2], vec![3]]);
}

#[test]
fn test_chunk_count_is_ceiling() {
    for n in 0..40usize {
        for size in 1..8usize {
            let source: Vec<usize> = (0..n).collect();
            let count = chunked(source, size).unwrap().count();
            assert_eq!(count, n.div_ceil(size), "n={} size={}", n, size);
        }
    }
}

#[test]
fn test_concatenation_reproduces_source() {
    let source: Vec<u32> = (0..100).collect();
    let chunks: Vec<Vec<u32>> = chunked(source.clone(), 7).unwrap().collect();

    // All chunks except the last are full, the last is never empty.
    for chunk in &chunks[..chunks.len() - 1] {
        assert_eq!(chunk.len(), 7);
    }
    let last = chunks.last().unwrap();
    assert!(!last.is_empty() && last.len() <= 7);

    let rejoined: Vec<u32> = chunks.into_iter().flatten().collect();
    assert_eq!(rejoined, source);
}

#[test]
fn test_zero_size_rejected_before_reading() {
    let reads = Rc::new(Cell::new(0usize));
    let counter = reads.clone();
    let source = (0..10).inspect(move |_| counter.set(counter.get() + 1));

    let result = chunked(source, 0);
    assert!(matches!(result, Err(BatchError::InvalidChunkSize(0))));
    assert_eq!(reads.get(), 0, "no element may be read on invalid size");
}

#[test]
fn test_extension_trait() {
    let chunks: Vec<Vec<i32>> = vec![1, 2, 3].into_iter().chunked(2).unwrap().collect();
    assert_eq!(chunks, vec![vec![1, 2], vec![3]]);
}

/// Source that panics if polled again after reporting exhaustion.
struct OneShot {
    items: std::vec::IntoIter<i32>,
    exhausted: bool,
}

impl Iterator for OneShot {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        assert!(!self.exhausted, "source polled after exhaustion");
        match self.items.next() {
            Some(item) => Some(item),
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}

#[test]
fn test_partial_chunk_stops_polling_source() {
    let source = OneShot {
        items: vec![1, 2, 3].into_iter(),
        exhausted: false,
    };

    let mut chunks = chunked(source, 2).unwrap();
    assert_eq!(chunks.next(), Some(vec![1, 2]));
    assert_eq!(chunks.next(), Some(vec![3])); // exhausts the source mid-chunk
    assert_eq!(chunks.next(), None); // must not touch the source again
    assert_eq!(chunks.next(), None);
}

/// Source whose drop is observable, standing in for a cursor holding a
/// resource that must be released even when iteration is abandoned.
struct Tracked {
    items: std::vec::IntoIter<i32>,
    drops: Rc<Cell<u32>>,
}

impl Iterator for Tracked {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.items.next()
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn test_abandoned_iteration_releases_source_once() {
    let drops = Rc::new(Cell::new(0u32));
    let source = Tracked {
        items: vec![1, 2, 3, 4].into_iter(),
        drops: drops.clone(),
    };

    {
        let mut chunks = chunked(source, 2).unwrap();
        assert_eq!(chunks.next(), Some(vec![1, 2]));
        // Abandon the remaining chunks.
    }

    assert_eq!(drops.get(), 1, "source must be released exactly once");
}

#[test]
fn test_size_hint_over_known_source() {
    let chunks = chunked(0..10, 3).unwrap();
    assert_eq!(chunks.size_hint(), (4, Some(4)));
}
