//! Curve point primitives over projective (X : Y : Z) coordinates.

use super::{FormulaSet, Params};
use crate::{CostTable, Tier, cost};

pub(super) fn define(table: &mut CostTable, params: &Params, set: FormulaSet) {
    let ovh = params.overhead();

    table
        .define(Tier::CurvePoint, "cpCopy", ovh + 3 * cost("fiCopy"))
        .define(Tier::CurvePoint, "cpReplace", ovh + 3 * cost("fiReplace"))
        .define(Tier::CurvePoint, "cpIsZero", ovh + 2 + 3 * cost("fiEquals"))
        .define(Tier::CurvePoint, "cpEquals", ovh + 1 + 3 * cost("fiEquals"))
        .define(
            Tier::CurvePoint,
            "cpTwice",
            ovh + 1
                + 10 * cost("fiCopy")
                + cost("fiEquals")
                + cost("fiAdd")
                + 3 * cost("fiSubtract")
                + 4 * cost("fiSquare")
                + 5 * cost("fiMultiply2")
                + 7 * cost("fiMultiply")
                + cost("cpIsZero")
                + cost("cpReplace"),
        )
        .define(
            Tier::CurvePoint,
            "cpAdd",
            ovh + 10
                + 10 * cost("fiCopy")
                + 3 * cost("fiReplace")
                + 2 * cost("fiEquals")
                + cost("fiAdd")
                + 5 * cost("fiSubtract")
                + 2 * cost("fiSquare")
                + 13 * cost("fiMultiply")
                + cost("cpCopy")
                + 3 * cost("cpReplace")
                + 2 * cost("cpIsZero")
                + cost("cpTwice"),
        )
        // 4-bit fixed window: a 16-entry table built with 13 additions, then
        // 64 windows of four doublings, a constant-time table scan and one
        // addition. The first window skips its doublings.
        .define(
            Tier::CurvePoint,
            "cpMultiply",
            ovh + 18 * cost("cpCopy")
                + cost("cpTwice")
                + 13 * (cost("cpCopy") + cost("cpAdd"))
                + 64 * (36
                    + cost("cpCopy")
                    + 16 * cost("cpReplace")
                    + 4 * cost("cpTwice")
                    + cost("cpAdd"))
                - 4 * cost("cpTwice"),
        )
        .define(
            Tier::CurvePoint,
            "cpNormalize",
            ovh + 1
                + cost("fiCopy")
                + 2 * cost("fiReplace")
                + 3 * cost("fiEquals")
                + 2 * cost("fiMultiply")
                + cost("fiReciprocal")
                + cost("cpCopy")
                + cost("cpReplace"),
        );

    if set.verifies() {
        // y^2 == (x^2 + a) * x + b, and not the point at infinity.
        table.define(
            Tier::CurvePoint,
            "cpIsOnCurve",
            ovh + 2
                + 2 * cost("fiCopy")
                + cost("fiEquals")
                + 2 * cost("fiAdd")
                + cost("fiMultiply")
                + 2 * cost("fiSquare")
                + cost("cpIsZero"),
        );
    }
}
