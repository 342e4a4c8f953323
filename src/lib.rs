//! Splices values into sequences, on both sides of a property-based test.
//!
//! The [`augment`] module adapts an iterator you *observe* so that extra
//! values appear at the right spots. The `strategy` module *generates*
//! sequences (as [proptest](https://docs.rs/proptest) strategies) in which
//! those values are already at the right spots. One temporal vocabulary
//! names both sides: a value can appear `next` after a match, `eventually`
//! after it, `always` from it onward, or at the sequence's edges with
//! `starts_with` and `ends_with`.
//!
//! # Motivation
//!
//! Suppose events stream in, and right after the first `2` we must splice
//! in a marker `0`. What would be our approach?
//!
//! - Approach 1: collect, find, patch
//!
//! ```
//! let events = [1, 2, 3];
//! let mut patched = events.to_vec();
//! if let Some(at) = patched.iter().position(|&x| x == 2) {
//!     patched.insert(at + 1, 0);
//! }
//!
//! assert_eq!(patched, [1, 2, 0, 3]);
//! ```
//!
//! **Cons:** Eager and allocating. It quietly assumes the whole stream fits
//! in memory, which an IO-backed or endless stream does not.
//!
//! - Approach 2: a hand-rolled loop
//!
//! ```
//! let events = [1, 2, 3];
//! let mut out = Vec::new();
//! let mut pending = true;
//! for event in events {
//!     let was_match = event == 2;
//!     out.push(event);
//!     if pending && was_match {
//!         out.push(0);
//!         pending = false;
//!     }
//! }
//!
//! assert_eq!(out, [1, 2, 0, 3]);
//! ```
//!
//! **Cons:** The insertion rule is buried in flag bookkeeping, and every
//! variation (value at the end instead? a frozen tail?) means rewriting the
//! loop.
//!
//! This crate's way:
//!
//! ```
//! use temporal_splice::{ValueSource, augment};
//!
//! let events = [1, 2, 3];
//! let out = augment::next(events, ValueSource::literal(0), |&x| x == 2);
//!
//! assert!(out.eq([1, 2, 0, 3]));
//! ```
//!
//! Lazy, single-pass, and the rule has a name. The value need not be a
//! literal either: a [`ValueSource`] can compute it on demand, or from
//! everything emitted so far.
//!
//! In a property-based test the same vocabulary runs the other way around.
//! The sequence is not observed but generated, and the question becomes:
//! how do we draw sequences where every `2` is already followed by a `0`?
//!
//! ```
//! # #[cfg(feature = "proptest")] {
//! use proptest::collection::vec as propvec;
//! use proptest::prelude::*;
//! use proptest::strategy::ValueTree;
//! use proptest::test_runner::TestRunner;
//! use temporal_splice::{for_all, leads_to, strategy};
//!
//! let seqs = for_all(
//!     propvec(0..10, ..8),
//!     leads_to(2, strategy::next(Just(0))),
//! );
//!
//! let mut runner = TestRunner::deterministic();
//! for _ in 0..32 {
//!     let seq = seqs.new_tree(&mut runner).unwrap().current();
//!     for (i, &event) in seq.iter().enumerate() {
//!         if event == 2 {
//!             assert_eq!(seq.get(i + 1), Some(&0));
//!         }
//!     }
//! }
//! # }
//! ```
//!
//! Note the asymmetry: the adaptor patches the first match only, while the
//! generator answers every match. That is deliberate; see the `strategy`
//! module documentation.
//!
//! # Todos:
//!
//! - Generator-side counterpart of `ends_with_until` (an `until`-style
//!   cut).
//! - `fold` overrides for the remaining adaptors; only `StartsWith` has
//!   one.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

pub mod augment;
#[cfg(feature = "proptest")]
mod logic;
mod source;
#[cfg(feature = "proptest")]
#[cfg_attr(docsrs, doc(cfg(feature = "proptest")))]
pub mod strategy;

#[cfg(feature = "proptest")]
#[cfg_attr(docsrs, doc(cfg(feature = "proptest")))]
pub use logic::*;
pub use source::*;

#[inline(always)]
fn assert_iterator<I: Iterator<Item = T>, T>(iter: I) -> I {
    iter
}

#[cfg(feature = "proptest")]
#[inline(always)]
fn assert_shape<S: Shape<T>, T>(shape: S) -> S {
    shape
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{ValueSource, augment};

    #[cfg(all(feature = "alloc", not(feature = "std")))]
    use alloc::vec::Vec;

    #[test]
    fn operators_compose_in_one_pass() {
        let out = augment::starts_with(
            augment::next([1, 2, 3], ValueSource::literal(0), |&x| x == 2),
            ValueSource::literal(9),
        );

        assert!(out.eq([9, 1, 2, 0, 3]));
    }

    #[test]
    fn nothing_is_pulled_before_the_output_is() {
        let pulled = Cell::new(0);
        let mut out = augment::next(
            (0..5).inspect(|_| pulled.set(pulled.get() + 1)),
            ValueSource::literal(9),
            |&x| x == 3,
        );

        assert_eq!(pulled.get(), 0);
        out.next();
        assert_eq!(pulled.get(), 1);
    }

    // The provider parameters must stay nameable by default alone.
    #[test]
    fn adaptor_types_default_their_provider_parameters() {
        let lead: augment::StartsWith<std::array::IntoIter<i32, 3>> =
            augment::starts_with([1, 2, 3], ValueSource::literal(0));
        assert!(lead.eq([0, 1, 2, 3]));

        let tail: augment::EndsWith<std::array::IntoIter<i32, 3>> =
            augment::ends_with([1, 2, 3], ValueSource::literal(4));
        assert!(tail.eq([1, 2, 3, 4]));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn stripping_inserted_edges_recovers_the_input() {
        let nums = [1, 2, 3];
        let mut out: Vec<_> = augment::ends_with(
            augment::starts_with(nums, ValueSource::literal(-1)),
            ValueSource::literal(-2),
        )
        .collect();

        assert_eq!(out.pop(), Some(-2));
        assert_eq!(out.remove(0), -1);
        assert_eq!(out, nums);
    }
}
