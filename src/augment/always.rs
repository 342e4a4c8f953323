use std::{fmt::Debug, iter::FusedIterator, mem};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use crate::ValueSource;

/// An iterator that replaces every element with one frozen value once the
/// accumulated history satisfies a predicate.
///
/// This `struct` is created by [`augment::always()`]. See its documentation
/// for more.
///
/// [`augment::always()`]: crate::augment::always
#[derive(Clone)]
pub struct Always<
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
    // Still passing elements through, recording each one.
    Accumulating {
        source: ValueSource<T, F, H>,
        seen: Vec<T>,
    },
    // The predicate fired; every element from here on is `frozen`.
    Triggered {
        frozen: T,
    },
}

impl<I: Iterator, P, F, H> Always<I, P, F, H> {
    pub(crate) fn new(iter: I, source: ValueSource<I::Item, F, H>, pred: P) -> Self {
        Self {
            iter,
            pred,
            state: State::Accumulating {
                source,
                seen: Vec::new(),
            },
        }
    }
}

impl<I, P, F, H> Iterator for Always<I, P, F, H>
where
    I: Iterator,
    I::Item: Clone,
    P: FnMut(&[I::Item]) -> bool,
    F: FnMut() -> I::Item,
    H: FnMut(&[I::Item]) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;

        match &mut self.state {
            State::Accumulating { seen, .. } => {
                // The predicate judges the history before this element.
                if !(self.pred)(seen) {
                    seen.push(item.clone());
                    return Some(item);
                }

                // `item` stands in as the frozen value until the real one
                // resolves below.
                let state = mem::replace(&mut self.state, State::Triggered { frozen: item });
                let State::Accumulating { source, seen } = state else {
                    unreachable!("the state is somehow incorrect");
                };

                let frozen = source.resolve(&seen);
                self.state = State::Triggered {
                    frozen: frozen.clone(),
                };
                Some(frozen)
            }
            State::Triggered { frozen } => Some(frozen.clone()),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, P, F, H> ExactSizeIterator for Always<I, P, F, H>
where
    I: ExactSizeIterator,
    I::Item: Clone,
    P: FnMut(&[I::Item]) -> bool,
    F: FnMut() -> I::Item,
    H: FnMut(&[I::Item]) -> I::Item,
{
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<I, P, F, H> FusedIterator for Always<I, P, F, H>
where
    I: FusedIterator,
    I::Item: Clone,
    P: FnMut(&[I::Item]) -> bool,
    F: FnMut() -> I::Item,
    H: FnMut(&[I::Item]) -> I::Item,
{
}

impl<I, P, F, H> Debug for Always<I, P, F, H>
where
    I: Iterator + Debug,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut f = f.debug_struct("Always");
        f.field("iter", &self.iter);

        match &self.state {
            State::Accumulating { seen, .. } => f.field("seen", &seen.as_slice()),
            State::Triggered { frozen } => f.field("frozen", frozen),
        };

        f.finish()
    }
}
