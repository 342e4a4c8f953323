use std::{fmt::Debug, iter::FusedIterator, mem};

use crate::ValueSource;

/// An iterator that appends one value after the underlying iterator ends.
///
/// This `struct` is created by [`augment::ends_with()`]. See its
/// documentation for more.
///
/// [`augment::ends_with()`]: crate::augment::ends_with
#[derive(Clone)]
pub struct EndsWith<
    I: Iterator,
    F = fn() -> <I as Iterator>::Item,
    H = fn(&[<I as Iterator>::Item]) -> <I as Iterator>::Item,
> {
    iter: I,
    state: State<I::Item, F, H>,
}

#[derive(Clone)]
enum State<T, F, H> {
    // Output not pulled yet; the source has not run.
    Idle(ValueSource<T, F, H>),
    // Streaming the input; the appended value is produced at exhaustion.
    Streaming(Tail<T, F, H>),
    Finished,
}

#[derive(Clone)]
enum Tail<T, F, H> {
    // A literal's eager resolution is also its last: append it as is.
    Value(T),
    // A provider runs again at exhaustion, and that value is appended.
    Rerun(ValueSource<T, F, H>),
}

impl<I: Iterator, F, H> EndsWith<I, F, H> {
    pub(crate) fn new(iter: I, source: ValueSource<I::Item, F, H>) -> Self {
        Self {
            iter,
            state: State::Idle(source),
        }
    }
}

impl<I, F, H> Iterator for EndsWith<I, F, H>
where
    I: Iterator,
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

                    // The eager run happens on the first pull; the appended
                    // value comes from the rerun at exhaustion.
                    let (eager, rerun) = source.resolve_eager(&[]);
                    self.state = State::Streaming(match rerun {
                        None => Tail::Value(eager),
                        Some(source) => {
                            drop(eager);
                            Tail::Rerun(source)
                        }
                    });
                }
                State::Streaming(_) => {
                    if let Some(item) = self.iter.next() {
                        return Some(item);
                    }

                    let State::Streaming(tail) = mem::replace(&mut self.state, State::Finished)
                    else {
                        unreachable!("the state is somehow incorrect");
                    };

                    return Some(match tail {
                        Tail::Value(value) => value,
                        Tail::Rerun(source) => source.resolve(&[]),
                    });
                }
                State::Finished => return None,
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if let State::Finished = self.state {
            return (0, Some(0));
        }

        let (lower, upper) = self.iter.size_hint();
        (lower.saturating_add(1), upper.and_then(|n| n.checked_add(1)))
    }
}

// Once the appended value is out, the underlying iterator is never touched
// again, fused or not.
impl<I, F, H> FusedIterator for EndsWith<I, F, H>
where
    I: Iterator,
    F: FnMut() -> I::Item,
    H: FnMut(&[I::Item]) -> I::Item,
{
}

impl<I, F, H> Debug for EndsWith<I, F, H>
where
    I: Iterator + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndsWith")
            .field("iter", &self.iter)
            .field("finished", &matches!(self.state, State::Finished))
            .finish()
    }
}
