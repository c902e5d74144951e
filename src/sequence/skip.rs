//! Skip sequence
//!
//! Iterator adapter that suppresses chosen values. A skip can be requested
//! before the value has ever been produced; each request removes exactly one
//! future occurrence.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::error::{AppError, Result};

/// Wraps an iterator and defers elements on request
///
/// The next emittable element is pulled eagerly and held in a one-slot
/// buffer, so [`has_next`](Self::has_next) is answered without touching the
/// underlying iterator.
#[derive(Debug)]
pub struct SkipSequence<I: Iterator> {
    inner: I,
    /// Value -> number of future occurrences to drop
    pending: HashMap<I::Item, usize>,
    staged: Option<I::Item>,
}

impl<I> SkipSequence<I>
where
    I: Iterator,
    I::Item: Eq + Hash,
{
    pub fn new(inner: I) -> Self {
        let mut sequence = Self {
            inner,
            pending: HashMap::new(),
            staged: None,
        };
        sequence.advance();
        sequence
    }

    /// Refill the buffer with the next value that has no pending skips
    fn advance(&mut self) {
        self.staged = None;

        for value in self.inner.by_ref() {
            match self.pending.entry(value) {
                Entry::Vacant(vacant) => {
                    self.staged = Some(vacant.into_key());
                    return;
                }
                Entry::Occupied(mut occupied) => {
                    *occupied.get_mut() -= 1;
                    if *occupied.get() == 0 {
                        occupied.remove();
                    }
                }
            }
        }
    }

    /// Whether a value is buffered
    pub fn has_next(&self) -> bool {
        self.staged.is_some()
    }

    /// The buffered value, without consuming it
    pub fn peek(&self) -> Option<&I::Item> {
        self.staged.as_ref()
    }

    /// Like [`Iterator::next`], but exhaustion is an error
    pub fn try_next(&mut self) -> Result<I::Item> {
        self.next().ok_or(AppError::SequenceExhausted)
    }

    /// Skip the next occurrence of `value`
    ///
    /// If `value` is the buffered element it is dropped immediately;
    /// otherwise the request waits for a future occurrence, which may never
    /// come.
    pub fn skip_value(&mut self, value: I::Item) {
        if self.staged.as_ref() == Some(&value) {
            self.advance();
        } else {
            *self.pending.entry(value).or_insert(0) += 1;
        }
    }

    /// Outstanding skip requests for `value`
    pub fn pending_skips(&self, value: &I::Item) -> usize {
        self.pending.get(value).copied().unwrap_or(0)
    }
}

impl<I> Iterator for SkipSequence<I>
where
    I: Iterator,
    I::Item: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.staged.take()?;
        self.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let staged = usize::from(self.staged.is_some());
        let (_, upper) = self.inner.size_hint();
        (staged, upper.and_then(|upper| upper.checked_add(staged)))
    }
}

impl<I> FusedIterator for SkipSequence<I>
where
    I: Iterator,
    I::Item: Eq + Hash,
{
}

/// Adds [`skippable`](SkipExt::skippable) to iterators with hashable items
pub trait SkipExt: Iterator + Sized
where
    Self::Item: Eq + Hash,
{
    fn skippable(self) -> SkipSequence<Self> {
        SkipSequence::new(self)
    }
}

impl<I> SkipExt for I
where
    I: Iterator,
    I::Item: Eq + Hash,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_without_skips() {
        let values: Vec<_> = [1, 2, 3].into_iter().skippable().collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn skipping_staged_value_drops_it_now() {
        let mut sequence = [1, 2, 1].into_iter().skippable();
        sequence.skip_value(1);

        assert_eq!(sequence.peek(), Some(&2));
        assert_eq!(sequence.pending_skips(&1), 0);
        assert_eq!(sequence.collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn repeated_skips_accumulate() {
        let mut sequence = [0, 4, 4, 4, 5].into_iter().skippable();
        sequence.skip_value(4);
        sequence.skip_value(4);

        assert_eq!(sequence.pending_skips(&4), 2);
        assert_eq!(sequence.collect::<Vec<_>>(), vec![0, 4, 5]);
    }

    #[test]
    fn skip_of_absent_value_is_never_consumed() {
        let mut sequence = [1, 2].into_iter().skippable();
        sequence.skip_value(9);

        assert_eq!(sequence.by_ref().count(), 2);
        assert_eq!(sequence.pending_skips(&9), 1);
    }

    #[test]
    fn try_next_reports_exhaustion() {
        let mut sequence = std::iter::once(3).skippable();

        assert_eq!(sequence.try_next().unwrap(), 3);
        assert!(!sequence.has_next());
        assert!(matches!(
            sequence.try_next(),
            Err(AppError::SequenceExhausted)
        ));
        assert_eq!(sequence.next(), None);
    }

    #[test]
    fn works_on_infinite_sources() {
        let mut sequence = (0u64..).skippable();
        sequence.skip_value(1);
        sequence.skip_value(3);

        let head: Vec<_> = sequence.take(4).collect();
        assert_eq!(head, vec![0, 2, 4, 5]);
    }

    #[test]
    fn skip_value_keeps_owned_binding_usable() {
        let mut sequence = [7, 8, 7, 9].into_iter().skippable();
        sequence.skip_value(8);
        sequence.skip_value(7);

        assert!(sequence.has_next());
        assert_eq!(sequence.next(), Some(7));

        // Positional skipping still comes from `Iterator`.
        let rest: Vec<_> = sequence.skip(1).collect();
        assert!(rest.is_empty());
    }

    #[test]
    fn empty_source_has_nothing_staged() {
        let mut sequence = std::iter::empty::<&str>().skippable();
        sequence.skip_value("a");

        assert!(!sequence.has_next());
        assert_eq!(sequence.size_hint(), (0, Some(0)));
    }
}
