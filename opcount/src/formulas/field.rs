//! Field element primitives.
//!
//! A field element is a wide integer kept reduced modulo the field prime, so
//! most operations are one call into the wide-integer layer plus a
//! conditional reduction.

use super::{FormulaSet, Params};
use crate::{CostTable, Tier, cost};

pub(super) fn define(table: &mut CostTable, params: &Params, set: FormulaSet) {
    let ovh = params.overhead();
    let w = params.words();

    table
        .define(Tier::FieldElement, "fiCopy", ovh + cost("uiCopy"))
        .define(Tier::FieldElement, "fiReplace", ovh + cost("uiReplace"));

    if set == FormulaSet::Inlined {
        table.define(Tier::FieldElement, "fiSwap", ovh + cost("uiSwap"));
    }

    table
        .define(Tier::FieldElement, "fiEquals", ovh + cost("uiEquals"))
        .define(Tier::FieldElement, "fiLessThan", ovh + cost("uiLessThan"))
        .define(
            Tier::FieldElement,
            "fiAdd",
            ovh + 3 + cost("fiLessThan") + cost("uiAdd") + cost("uiSubtract"),
        )
        .define(
            Tier::FieldElement,
            "fiSubtract",
            ovh + 1 + cost("uiSubtract") + cost("uiAdd"),
        );

    if set != FormulaSet::Inlined {
        table.define(
            Tier::FieldElement,
            "fiNegate",
            ovh + 4 + w * 9 + cost("fiEquals"),
        );
    }

    // Multiplication is an 8x8 word schoolbook product followed by two
    // folding passes with the special form of the prime.
    let product = 754 + (1 + 24 * 28) + (1 + 16 * 26) + (1 + 9 * 8) + 10 + 3;

    table
        .define(
            Tier::FieldElement,
            "fiMultiply2",
            ovh + 3 + cost("uiShiftLeft1") + cost("uiSubtract"),
        )
        .define(
            Tier::FieldElement,
            "fiMultiply",
            ovh + product + cost("uiLessThan") + cost("uiSubtract"),
        )
        .define(Tier::FieldElement, "fiSquare", ovh + cost("fiMultiply"));

    match set {
        FormulaSet::Inlined => {
            let rounds = 2 * params.bits();
            table.define(
                Tier::FieldElement,
                "fiReciprocal",
                ovh + 4 * cost("fiCopy")
                    + cost("fiReplace")
                    + rounds
                        * (11
                            + 2 * cost("fiSwap")
                            + 2 * cost("uiShiftRight1")
                            + 2 * cost("uiAdd")
                            + 2 * cost("uiSubtract")),
            );
        }
        FormulaSet::Delegated | FormulaSet::Verifying => {
            table.define(
                Tier::FieldElement,
                "fiReciprocal",
                ovh + cost("uiReciprocal"),
            );
        }
    }
}
