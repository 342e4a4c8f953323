use std::{fmt::Debug, iter::FusedIterator};

use crate::ValueSource;

/// An iterator that yields one prepended value before the underlying
/// iterator.
///
/// This `struct` is created by [`augment::starts_with()`]. See its
/// documentation for more.
///
/// [`augment::starts_with()`]: crate::augment::starts_with
#[derive(Clone)]
pub struct StartsWith<
    I: Iterator,
    F = fn() -> <I as Iterator>::Item,
    H = fn(&[<I as Iterator>::Item]) -> <I as Iterator>::Item,
> {
    iter: I,
    lead: Option<ValueSource<I::Item, F, H>>,
}

impl<I: Iterator, F, H> StartsWith<I, F, H> {
    pub(crate) fn new(iter: I, source: ValueSource<I::Item, F, H>) -> Self {
        Self {
            iter,
            lead: Some(source),
        }
    }
}

impl<I, F, H> Iterator for StartsWith<I, F, H>
where
    I: Iterator,
    F: FnMut() -> I::Item,
    H: FnMut(&[I::Item]) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.lead.take() {
            // Nothing has been seen this early; a history provider gets an
            // empty slice.
            Some(source) => Some(source.resolve(&[])),
            None => self.iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        if self.lead.is_some() {
            (lower.saturating_add(1), upper.and_then(|n| n.checked_add(1)))
        } else {
            (lower, upper)
        }
    }

    fn fold<B, G>(self, init: B, mut f: G) -> B
    where
        G: FnMut(B, Self::Item) -> B,
    {
        let mut accum = init;
        if let Some(source) = self.lead {
            accum = f(accum, source.resolve(&[]));
        }
        self.iter.fold(accum, f)
    }
}

impl<I, F, H> FusedIterator for StartsWith<I, F, H>
where
    I: FusedIterator,
    F: FnMut() -> I::Item,
    H: FnMut(&[I::Item]) -> I::Item,
{
}

impl<I, F, H> Debug for StartsWith<I, F, H>
where
    I: Iterator + Debug,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StartsWith")
            .field("iter", &self.iter)
            .field("lead", &self.lead)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{ValueSource, augment};

    #[test]
    fn prepends_before_the_input() {
        assert!(augment::starts_with([2, 3], ValueSource::literal(1)).eq([1, 2, 3]));
    }

    #[test]
    fn empty_input_still_yields_the_lead() {
        assert!(augment::starts_with(std::iter::empty::<i32>(), ValueSource::literal(1)).eq([1]));
    }

    #[test]
    fn provider_runs_once_on_the_first_pull() {
        let calls = Cell::new(0);
        let mut out = augment::starts_with(
            [10, 20],
            ValueSource::lazy(|| {
                calls.set(calls.get() + 1);
                0
            }),
        );

        assert_eq!(calls.get(), 0);
        assert_eq!(out.next(), Some(0));
        assert_eq!(calls.get(), 1);
        assert!(out.eq([10, 20]));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn size_hint_counts_the_pending_lead() {
        let mut out = augment::starts_with([1, 2], ValueSource::literal(0));
        assert_eq!(out.size_hint(), (3, Some(3)));
        out.next();
        assert_eq!(out.size_hint(), (2, Some(2)));
    }

    #[test]
    fn fold_visits_the_lead_first() {
        let concatenated = augment::starts_with([2, 3], ValueSource::literal(1))
            .fold(0, |accum, num| accum * 10 + num);
        assert_eq!(concatenated, 123);
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::{ValueSource, augment};

    proptest! {
        #[test]
        fn lead_then_exact_tail(nums in propvec(any::<i32>(), ..6), lead in any::<i32>()) {
            lead_then_exact_tail_impl(nums, lead)?;
        }

        #[test]
        fn stripping_the_lead_recovers_the_input(nums in propvec(0..100_i32, ..6)) {
            stripping_the_lead_recovers_the_input_impl(nums)?;
        }
    }

    fn lead_then_exact_tail_impl(nums: Vec<i32>, lead: i32) -> TestCaseResult {
        let out: Vec<_> =
            augment::starts_with(nums.iter().copied(), ValueSource::literal(lead)).collect();

        prop_assert_eq!(out.len(), nums.len() + 1);
        prop_assert_eq!(out[0], lead);
        prop_assert_eq!(&out[1..], &nums[..]);
        Ok(())
    }

    fn stripping_the_lead_recovers_the_input_impl(nums: Vec<i32>) -> TestCaseResult {
        // -1 never occurs in the input, so it can only be the inserted lead.
        let out: Vec<_> =
            augment::starts_with(nums.iter().copied(), ValueSource::literal(-1)).collect();

        prop_assert_eq!(out[0], -1);
        prop_assert_eq!(&out[1..], &nums[..]);
        Ok(())
    }
}
