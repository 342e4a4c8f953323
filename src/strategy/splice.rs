use std::fmt::Debug;

use proptest::collection::vec as propvec;
use proptest::prelude::*;
use proptest::sample::Index;
use proptest::strategy::BoxedStrategy;

use crate::SeqStrategy;

/// Where a spliced value may land relative to its match.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Placement {
    /// Right after the match.
    Immediate,
    /// Anywhere from right after the match to the end of the sequence.
    Anywhere,
}

/// Splices one freshly drawn value after each of `matches`.
///
/// `matches` must be strictly increasing positions into `sample`. The
/// mapper sees the matched element from the original sample and the drawn
/// value, and produces what actually gets inserted.
pub(crate) fn splice<T, V, M>(
    sample: Vec<T>,
    matches: Vec<usize>,
    placement: Placement,
    values: V,
    mapper: M,
) -> SeqStrategy<T>
where
    T: Clone + Debug + 'static,
    V: Strategy<Value = T> + 'static,
    M: Fn(&T, T) -> T + 'static,
{
    if matches.is_empty() {
        return Just(sample).boxed();
    }

    let slots: BoxedStrategy<Option<Vec<Index>>> = match placement {
        Placement::Immediate => Just(None).boxed(),
        Placement::Anywhere => propvec(any::<Index>(), matches.len()).prop_map(Some).boxed(),
    };

    (propvec(values, matches.len()), slots)
        .prop_map(move |(news, slots)| {
            let mut out = Vec::with_capacity(sample.len() + news.len());
            out.extend(sample.iter().cloned());

            for (nth, (&at_match, new)) in matches.iter().zip(news).enumerate() {
                // The first insertion offsets later positions by one, each
                // one after by one more.
                let lo = at_match + 1 + nth;
                let hi = out.len();
                let at = match &slots {
                    None => lo,
                    Some(slots) => lo + slots[nth].index(hi - lo + 1),
                };

                out.insert(at, mapper(&sample[at_match], new));
            }

            out
        })
        .boxed()
}
