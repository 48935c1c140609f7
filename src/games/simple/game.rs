//! Simple Nim rules.

use crate::core::{Variant, SIMPLE_NIM_TURN_LIMIT};
use crate::rules::Ruleset;
use crate::strategy::{ComplementStrategy, Strategy};

/// One pile of 21 matches, 1 to 4 per turn, taking the last match loses.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleNim;

impl Ruleset for SimpleNim {
    fn variant(&self) -> Variant {
        Variant::SimpleNim
    }

    fn strategy(&self) -> Box<dyn Strategy> {
        Box::new(ComplementStrategy::new(SIMPLE_NIM_TURN_LIMIT))
    }
}
