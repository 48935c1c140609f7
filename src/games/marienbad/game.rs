//! Marienbad rules.

use crate::core::Variant;
use crate::rules::Ruleset;
use crate::strategy::{NimSumStrategy, Strategy};

/// Piles 1, 3, 5, 7, any amount from one pile per turn, taking the last
/// match loses.
#[derive(Clone, Copy, Debug, Default)]
pub struct Marienbad;

impl Ruleset for Marienbad {
    fn variant(&self) -> Variant {
        Variant::Marienbad
    }

    fn strategy(&self) -> Box<dyn Strategy> {
        Box::new(NimSumStrategy)
    }
}
