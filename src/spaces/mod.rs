//! Action spaces
mod index;

pub use index::IndexSpace;

use rand::distributions::Distribution;
use std::fmt::{Debug, Display};

/// A mathematical space
pub trait Space: Display + Debug + Distribution<<Self as Space>::Element> {
    type Element;

    /// Check if the space contains a particular value
    fn contains(&self, value: &Self::Element) -> bool;
}
