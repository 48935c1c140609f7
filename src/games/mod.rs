//! Built-in game variants.

pub mod marienbad;
pub mod simple;

use crate::core::Variant;
use crate::rules::Ruleset;

pub use marienbad::Marienbad;
pub use simple::SimpleNim;

/// The ruleset implementing a variant.
#[must_use]
pub fn ruleset_for(variant: Variant) -> Box<dyn Ruleset> {
    match variant {
        Variant::SimpleNim => Box::new(SimpleNim),
        Variant::Marienbad => Box::new(Marienbad),
    }
}
