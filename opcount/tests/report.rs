//! Rendered report tests.

use opcount::{CostTable, Error, FormulaSet, Params, Section, Tier, cost, render};

const DELEGATED_REPORT: &str = concat!(
    "         17  uiCopy\n",
    "         33  uiReplace\n",
    "         57  uiSwap\n",
    "         20  uiEquals\n",
    "         51  uiLessThan\n",
    "         76  uiAdd\n",
    "         76  uiSubtract\n",
    "         35  uiShiftLeft1\n",
    "         71  uiShiftRight1\n",
    "    292 454  uiReciprocal\n",
    "\n",
    "         18  fiCopy\n",
    "         34  fiReplace\n",
    "         21  fiEquals\n",
    "         52  fiLessThan\n",
    "        208  fiAdd\n",
    "        154  fiSubtract\n",
    "         98  fiNegate\n",
    "        115  fiMultiply2\n",
    "      2 058  fiMultiply\n",
    "      2 059  fiSquare\n",
    "    292 455  fiReciprocal\n",
    "\n",
    "         55  cpCopy\n",
    "        103  cpReplace\n",
    "         66  cpIsZero\n",
    "         65  cpEquals\n",
    "     24 259  cpTwice\n",
    "     56 940  cpAdd\n",
    " 10 634 909  cpMultiply\n",
    "    296 880  cpNormalize\n",
    "\n",
    "     95 524  edMulModOrder\n",
    " 11 416 071  edSign\n",
    "\n",
);

fn report(set: FormulaSet) -> String {
    let table = set.table(&Params::default());
    let costs = table.evaluate().unwrap();
    render(&table.layout(), &costs).unwrap()
}

#[test]
fn delegated_report() {
    assert_eq!(report(FormulaSet::Delegated), DELEGATED_REPORT);
}

#[test]
fn wide_integer_section() {
    let report = report(FormulaSet::default());
    let lines: Vec<_> = report.lines().collect();

    assert_eq!(lines[0], "         17  uiCopy");
    assert_eq!(lines[1], "         33  uiReplace");
    assert_eq!(lines[2], "         57  uiSwap");
    assert_eq!(lines[3], "         20  uiEquals");
    assert_eq!(lines[4], "         51  uiLessThan");
    assert_eq!(lines[9], "    292 454  uiReciprocal");
    assert_eq!(lines[10], "");
    assert_eq!(lines[11], "         18  fiCopy");
}

#[test]
fn one_line_per_cost_and_tier() {
    for set in FormulaSet::ALL {
        let table = set.table(&Params::default());
        let layout = table.layout();
        let names: usize = layout.iter().map(|section| section.names.len()).sum();

        let report = report(set);
        assert_eq!(report.lines().count(), layout.len() + names);
        assert_eq!(report.lines().filter(|line| line.is_empty()).count(), layout.len());
        assert!(report.ends_with("\n\n"));
    }
}

#[test]
fn lines_follow_layout_order() {
    let table = FormulaSet::Verifying.table(&Params::default());
    let report = report(FormulaSet::Verifying);
    let listed: Vec<_> = report
        .lines()
        .filter_map(|line| line.rsplit("  ").next())
        .filter(|name| !name.is_empty())
        .collect();
    let expected: Vec<_> = table
        .layout()
        .into_iter()
        .flat_map(|section| section.names)
        .collect();

    assert_eq!(listed, expected);
    assert_eq!(listed.last(), Some(&"edVerify"));
}

#[test]
fn values_wider_than_column() {
    let mut table = CostTable::new();
    table
        .define(Tier::WideInteger, "uiCopy", 17)
        .define(Tier::Signature, "edBatch", 1_000_000_000 * cost("uiCopy"));
    let costs = table.evaluate().unwrap();

    assert_eq!(
        render(&table.layout(), &costs).unwrap(),
        "         17  uiCopy\n\n17 000 000 000  edBatch\n\n"
    );
}

#[test]
fn custom_layout_subset() {
    let costs = FormulaSet::default().evaluate(&Params::default()).unwrap();
    let sections = [Section {
        tier: Tier::Signature,
        names: vec!["edSign", "edMulModOrder"],
    }];

    assert_eq!(
        render(&sections, &costs).unwrap(),
        " 11 416 071  edSign\n     95 524  edMulModOrder\n\n"
    );
}

#[test]
fn unknown_name_in_layout() {
    let costs = FormulaSet::Delegated.evaluate(&Params::default()).unwrap();
    let sections = [Section {
        tier: Tier::Signature,
        names: vec!["edSign", "edVerify"],
    }];

    assert_eq!(render(&sections, &costs), Err(Error::MissingCost("edVerify")));
}
