//! The temporal glue between matchers and shapes.
//!
//! A [`Matcher`] names the elements of interest, a [`Shape`] answers them,
//! and [`leads_to()`] ties the two into a [`Property`]. [`for_all()`] and
//! [`every()`] then instantiate the property over a base sequence strategy.
//! The shapes themselves live in the `strategy` module.

mod leads_to;
mod matcher;
mod quantifier;
mod shape;

pub use leads_to::*;
pub use matcher::*;
pub use quantifier::*;
pub use shape::*;
