//! Signing and verification.

use super::{FormulaSet, Params};
use crate::{CostTable, Tier, cost};

pub(super) fn define(table: &mut CostTable, params: &Params, set: FormulaSet) {
    let ovh = params.overhead();

    // Double-and-add modulo the group order, one round per scalar bit.
    let rounds = params.bits();

    table
        .define(
            Tier::Signature,
            "edMulModOrder",
            ovh + 1
                + 2 * cost("uiCopy")
                + rounds
                    * (8 + cost("uiAdd")
                        + 2 * cost("uiSubtract")
                        + cost("uiShiftLeft1")
                        + 2 * cost("uiLessThan")),
        )
        .define(
            Tier::Signature,
            "edSign",
            ovh + 4
                + 7 * cost("uiCopy")
                + cost("uiReplace")
                + cost("uiAdd")
                + 3 * cost("uiSubtract")
                + 3 * cost("uiEquals")
                + 4 * cost("uiLessThan")
                + cost("uiReciprocal")
                + cost("cpCopy")
                + cost("cpMultiply")
                + cost("cpNormalize")
                + 2 * cost("edMulModOrder"),
        );

    if set.verifies() {
        // Public key validation (including n * Q == 0) costs a third point
        // multiplication on top of u1 * G + u2 * Q.
        table.define(
            Tier::Signature,
            "edVerify",
            ovh + 10
                + 5 * cost("uiCopy")
                + 3 * cost("uiEquals")
                + 3 * cost("uiLessThan")
                + cost("uiSubtract")
                + cost("uiReciprocal")
                + cost("fiEquals")
                + 3 * cost("cpCopy")
                + 2 * cost("cpIsZero")
                + cost("cpIsOnCurve")
                + 3 * cost("cpMultiply")
                + cost("cpAdd")
                + cost("cpNormalize")
                + 2 * cost("edMulModOrder"),
        );
    }
}
