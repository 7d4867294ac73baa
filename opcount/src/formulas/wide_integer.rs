//! 256-bit unsigned integer primitives.

use super::Params;
use crate::{CostTable, Tier, cost};

pub(super) fn define(table: &mut CostTable, params: &Params) {
    let ovh = params.overhead();
    let w = params.words();

    // Extended binary GCD: one round per bit of both operands.
    let rounds = 2 * params.bits();

    table
        .define(Tier::WideInteger, "uiCopy", ovh + w * 2)
        .define(Tier::WideInteger, "uiReplace", ovh + w * 4)
        .define(Tier::WideInteger, "uiSwap", ovh + w * 7)
        .define(Tier::WideInteger, "uiEquals", ovh + 3 + w * 2)
        .define(Tier::WideInteger, "uiLessThan", ovh + 2 + w * 6)
        .define(Tier::WideInteger, "uiAdd", ovh + 3 + w * 9)
        .define(Tier::WideInteger, "uiSubtract", ovh + 3 + w * 9)
        .define(Tier::WideInteger, "uiShiftLeft1", ovh + 2 + w * 4)
        .define(Tier::WideInteger, "uiShiftRight1", ovh + 6 + w * 8)
        .define(
            Tier::WideInteger,
            "uiReciprocal",
            ovh + 4 * cost("uiCopy")
                + cost("uiReplace")
                + rounds
                    * (11
                        + 2 * cost("uiSwap")
                        + 2 * cost("uiShiftRight1")
                        + 2 * cost("uiAdd")
                        + 2 * cost("uiSubtract")),
        );
}
