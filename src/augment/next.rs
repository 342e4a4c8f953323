use std::{fmt::Debug, iter::FusedIterator, mem};

use crate::ValueSource;

/// An iterator that inserts one value right after the first match.
///
/// This `struct` is created by [`augment::next()`]. See its documentation for
/// more.
///
/// [`augment::next()`]: crate::augment::next
#[derive(Clone)]
pub struct Next<
    I: Iterator,
    P,
    F = fn() -> <I as Iterator>::Item,
    H = fn(&[<I as Iterator>::Item]) -> <I as Iterator>::Item,
> {
    iter: I,
    pred: P,
    state: State<I::Item, F, H>,
}

#[derive(Clone)]
enum State<T, F, H> {
    // Output not pulled yet; the source has not run.
    Idle(ValueSource<T, F, H>),
    // Scanning for the first match, insertion value in hand.
    Armed(T),
    // The match was just emitted; the insertion value goes out next.
    Due(T),
    // Insertion done, or the input ended first; plain passthrough.
    Spent,
}

impl<I: Iterator, P, F, H> Next<I, P, F, H> {
    pub(crate) fn new(iter: I, source: ValueSource<I::Item, F, H>, pred: P) -> Self {
        Self {
            iter,
            pred,
            state: State::Idle(source),
        }
    }
}

impl<I, P, F, H> Next<I, P, F, H>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    // Pulls one element while the insertion is still armed. The caller has
    // already reset the state to `Spent`.
    fn scan(&mut self, value: I::Item) -> Option<I::Item> {
        let Some(item) = self.iter.next() else {
            // Nothing matched; the resolved value is dropped unseen.
            return None;
        };

        self.state = if (self.pred)(&item) {
            State::Due(value)
        } else {
            State::Armed(value)
        };

        Some(item)
    }
}

impl<I, P, F, H> Iterator for Next<I, P, F, H>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
    F: FnMut() -> I::Item,
    H: FnMut(&[I::Item]) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match mem::replace(&mut self.state, State::Spent) {
            // The value resolves on the first pull, before any input is seen.
            State::Idle(source) => {
                let value = source.resolve(&[]);
                self.scan(value)
            }
            State::Armed(value) => self.scan(value),
            State::Due(value) => Some(value),
            State::Spent => self.iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        match self.state {
            State::Idle(_) | State::Armed(_) => (lower, upper.and_then(|n| n.checked_add(1))),
            State::Due(_) => (lower.saturating_add(1), upper.and_then(|n| n.checked_add(1))),
            State::Spent => (lower, upper),
        }
    }
}

impl<I, P, F, H> FusedIterator for Next<I, P, F, H>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
    F: FnMut() -> I::Item,
    H: FnMut(&[I::Item]) -> I::Item,
{
}

impl<I, P, F, H> Debug for Next<I, P, F, H>
where
    I: Iterator + Debug,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pending = match &self.state {
            State::Armed(value) | State::Due(value) => Some(value),
            State::Idle(_) | State::Spent => None,
        };

        f.debug_struct("Next")
            .field("iter", &self.iter)
            .field("pending", &pending)
            .finish()
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
        fn one_insertion_exactly_after_the_first_match(nums in propvec(0..100_i32, ..8)) {
            one_insertion_exactly_after_the_first_match_impl(nums)?;
        }
    }

    fn one_insertion_exactly_after_the_first_match_impl(nums: Vec<i32>) -> TestCaseResult {
        let out: Vec<_> =
            augment::next(nums.iter().copied(), ValueSource::literal(-1), |&x| x == 7).collect();

        match nums.iter().position(|&x| x == 7) {
            None => prop_assert_eq!(&out[..], &nums[..]),
            Some(at) => {
                prop_assert_eq!(out.len(), nums.len() + 1);
                prop_assert_eq!(&out[..=at], &nums[..=at]);
                prop_assert_eq!(out[at + 1], -1);
                prop_assert_eq!(&out[at + 2..], &nums[at + 1..]);
            }
        }
        Ok(())
    }
}
