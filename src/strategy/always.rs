use std::fmt::{self, Debug};

use proptest::prelude::*;

use crate::{Matcher, Quantifier, Shape, Shaped};

/// How long the frozen run after the trigger may be.
const MAX_FROZEN_RUN: usize = 8;

/// A [`Shape`] whose sequences freeze into one value after the first match.
///
/// This `struct` is created by [`strategy::always()`]. See its
/// documentation for more.
///
/// [`strategy::always()`]: crate::strategy::always
#[derive(Clone)]
pub struct Always<
    V: Strategy,
    M = fn(&<V as Strategy>::Value, <V as Strategy>::Value) -> <V as Strategy>::Value,
> {
    values: V,
    mapper: M,
}

impl<V: Strategy, M> Always<V, M> {
    pub(crate) fn new(values: V, mapper: M) -> Self {
        Self { values, mapper }
    }

    /// Replaces how the frozen value is derived: `mapper` sees the trigger
    /// element and the drawn value, and produces the repeated one.
    pub fn with_mapper<M2>(self, mapper: M2) -> Always<V, M2>
    where
        M2: Fn(&V::Value, V::Value) -> V::Value,
    {
        Always {
            values: self.values,
            mapper,
        }
    }
}

impl<V, M> Shape<V::Value> for Always<V, M>
where
    V: Strategy + Clone + 'static,
    V::Value: Clone + 'static,
    M: Fn(&V::Value, V::Value) -> V::Value + Clone + 'static,
{
    fn quantifier(&self) -> Quantifier {
        Quantifier::ForAll
    }

    fn apply(&self, sample: Vec<V::Value>, matcher: &Matcher<V::Value>) -> Shaped<V::Value> {
        let Some(at) = sample.iter().position(|element| matcher.test(element)) else {
            return Shaped::fixed(sample);
        };

        let trigger = sample[at].clone();
        let mut prefix = sample;
        prefix.truncate(at + 1);

        let mapper = self.mapper.clone();
        // One drawn value, mapped once, then repeated for the whole run.
        let suffix = (self.values.clone(), 1..=MAX_FROZEN_RUN)
            .prop_map(move |(new, run)| vec![mapper(&trigger, new); run]);

        Shaped::split(Just(prefix), suffix)
    }
}

impl<V: Strategy + Debug, M> Debug for Always<V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Always")
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}
