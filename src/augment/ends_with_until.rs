use std::{fmt::Debug, iter::FusedIterator, mem};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::{self, Vec};
#[cfg(feature = "std")]
use std::vec;

use crate::ValueSource;

/// An iterator that appends one value at the end, unless a match cuts the
/// whole output over to a precomputed value.
///
/// This `struct` is created by [`augment::ends_with_until()`]. See its
/// documentation for more.
///
/// [`augment::ends_with_until()`]: crate::augment::ends_with_until
#[derive(Clone)]
pub struct EndsWithUntil<
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
    // Output not pulled yet; the source has not run and no input was touched.
    Idle(ValueSource<T, F, H>),
    // The scan ended without a match; replaying the buffered prefix.
    Draining { buf: vec::IntoIter<T>, last: T },
    Finished,
}

impl<I: Iterator, P, F, H> EndsWithUntil<I, P, F, H> {
    pub(crate) fn new(iter: I, source: ValueSource<I::Item, F, H>, pred: P) -> Self {
        Self {
            iter,
            pred,
            state: State::Idle(source),
        }
    }
}

impl<I, P, F, H> Iterator for EndsWithUntil<I, P, F, H>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
    F: FnMut() -> I::Item,
    H: FnMut(&[I::Item]) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.state {
                State::Idle(_) => {
                    let State::Idle(source) = mem::replace(&mut self.state, State::Finished)
                    else {
                        unreachable!("the state is somehow incorrect");
                    };

                    // The halt value exists before any input is consumed.
                    let (halt, rerun) = source.resolve_eager(&[]);

                    let mut buf = Vec::new();
                    loop {
                        match self.iter.next() {
                            // Halt: the buffered prefix and the rest of the
                            // input are discarded. The eager value is the
                            // entire remaining output.
                            Some(item) if (self.pred)(&item) => return Some(halt),
                            Some(item) => buf.push(item),
                            None => break,
                        }
                    }

                    // No match: the rerun at exhaustion decides the appended
                    // value.
                    let last = match rerun {
                        None => halt,
                        Some(source) => {
                            drop(halt);
                            source.resolve(&[])
                        }
                    };
                    self.state = State::Draining {
                        buf: buf.into_iter(),
                        last,
                    };
                }
                State::Draining { buf, .. } => {
                    if let Some(item) = buf.next() {
                        return Some(item);
                    }

                    let State::Draining { last, .. } =
                        mem::replace(&mut self.state, State::Finished)
                    else {
                        unreachable!("the state is somehow incorrect");
                    };

                    return Some(last);
                }
                State::Finished => return None,
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            // Either the full input plus an appended value, or a lone halt
            // value.
            State::Idle(_) => (1, self.iter.size_hint().1.and_then(|n| n.checked_add(1))),
            State::Draining { buf, .. } => {
                (buf.len().saturating_add(1), buf.len().checked_add(1))
            }
            State::Finished => (0, Some(0)),
        }
    }
}

impl<I, P, F, H> FusedIterator for EndsWithUntil<I, P, F, H>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
    F: FnMut() -> I::Item,
    H: FnMut(&[I::Item]) -> I::Item,
{
}

impl<I, P, F, H> Debug for EndsWithUntil<I, P, F, H>
where
    I: Iterator + Debug,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("EndsWithUntil");
        debug.field("iter", &self.iter);
        if let State::Draining { buf, last } = &self.state {
            debug.field("buffered", &buf.as_slice()).field("last", last);
        }
        debug.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    #[cfg(all(feature = "alloc", not(feature = "std")))]
    use alloc::vec::Vec;

    use crate::{ValueSource, augment};

    #[test]
    fn halt_discards_everything_but_the_precomputed_value() {
        assert!(augment::ends_with_until([1, 2, 3], ValueSource::literal(4), |&x| x == 2).eq([4]));
    }

    #[test]
    fn no_match_appends_like_a_plain_ends_with() {
        assert!(
            augment::ends_with_until([1, 2, 3], ValueSource::literal(4), |&x| x == 9)
                .eq([1, 2, 3, 4])
        );
    }

    #[test]
    fn empty_input_appends() {
        assert!(
            augment::ends_with_until(std::iter::empty::<i32>(), ValueSource::literal(4), |&x| {
                x == 2
            })
            .eq([4])
        );
    }

    #[test]
    fn never_pulls_past_the_first_match() {
        let pulls = Cell::new(0);
        let seq = (1..).inspect(|_| pulls.set(pulls.get() + 1));

        let mut out = augment::ends_with_until(seq, ValueSource::literal(0), |&x| x == 2);
        assert_eq!(out.next(), Some(0));
        assert_eq!(pulls.get(), 2);
        assert_eq!(out.next(), None);
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn halt_emits_the_eagerly_computed_value() {
        let calls = Cell::new(0);
        let out: Vec<_> = augment::ends_with_until(
            [1, 2, 3],
            ValueSource::lazy(|| {
                calls.set(calls.get() + 1);
                calls.get() * 10
            }),
            |&x| x == 2,
        )
        .collect();

        // Only the eager run happened, and its value is the whole output.
        assert_eq!(out, [10]);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn no_match_appends_the_second_run() {
        let calls = Cell::new(0);
        let out: Vec<_> = augment::ends_with_until(
            [1, 3],
            ValueSource::lazy(|| {
                calls.set(calls.get() + 1);
                calls.get() * 10
            }),
            |&x| x == 9,
        )
        .collect();

        assert_eq!(out, [1, 3, 20]);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn size_hint_is_exact_while_draining() {
        let mut out = augment::ends_with_until([1, 2, 3], ValueSource::literal(9), |&x| x == 7);
        assert_eq!(out.size_hint(), (1, Some(4)));
        assert_eq!(out.next(), Some(1));
        assert_eq!(out.size_hint(), (3, Some(3)));
    }
}
