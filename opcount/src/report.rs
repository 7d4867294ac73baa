//! Plain text report of computed costs.
//!
//! Each section lists one tier, one line per cost:
//!
//! ```text
//!     292 454  uiReciprocal
//! ```
//!
//! and ends with a blank line.

use core::fmt::Write;

use crate::{Costs, Error, Name, Result, Tier};

/// Minimum width of the right-aligned value column.
pub const VALUE_WIDTH: usize = 11;

/// Names listed together in the report, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Tier the names belong to.
    pub tier: Tier,

    /// Cost names, in display order.
    pub names: Vec<Name>,
}

/// Formats `value` with a space between each group of three digits,
/// counting from the least significant digit.
///
/// ```
/// assert_eq!(opcount::group_thousands(42), "42");
/// assert_eq!(opcount::group_thousands(1234567), "1 234 567");
/// ```
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    grouped
}

/// Renders `sections` with values taken from `costs`.
///
/// Every listed name is looked up before any text is produced, so a missing
/// cost yields [`Error::MissingCost`] and no partial report.
pub fn render(sections: &[Section], costs: &Costs) -> Result<String> {
    let lines = sections
        .iter()
        .map(|section| {
            section
                .names
                .iter()
                .map(|&name| {
                    costs
                        .get(name)
                        .map(|value| (name, value))
                        .ok_or(Error::MissingCost(name))
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    let mut out = String::new();
    for section in lines {
        for (name, value) in section {
            // Writing into a `String` cannot fail.
            let _ = writeln!(
                out,
                "{:>width$}  {}",
                group_thousands(value),
                name,
                width = VALUE_WIDTH
            );
        }
        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{Section, group_thousands, render};
    use crate::{CostTable, Error, Tier, cost};
    use proptest::prelude::*;

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(42), "42");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1 000");
        assert_eq!(group_thousands(1234), "1 234");
        assert_eq!(group_thousands(56940), "56 940");
        assert_eq!(group_thousands(292454), "292 454");
        assert_eq!(group_thousands(1234567), "1 234 567");
        assert_eq!(group_thousands(u64::MAX), "18 446 744 073 709 551 615");
    }

    #[test]
    fn renders_sections() {
        let mut table = CostTable::new();
        table
            .define(Tier::WideInteger, "uiCopy", 17)
            .define(Tier::CurvePoint, "cpMultiply", 10 * cost("uiCopy") + 10634739);
        let costs = table.evaluate().unwrap();

        assert_eq!(
            render(&table.layout(), &costs).unwrap(),
            "         17  uiCopy\n\n 10 634 909  cpMultiply\n\n"
        );
    }

    #[test]
    fn missing_cost_renders_nothing() {
        let mut table = CostTable::new();
        table.define(Tier::WideInteger, "uiCopy", 17);
        let costs = table.evaluate().unwrap();

        let sections = [
            Section {
                tier: Tier::WideInteger,
                names: vec!["uiCopy"],
            },
            Section {
                tier: Tier::Signature,
                names: vec!["edVerify"],
            },
        ];
        assert_eq!(
            render(&sections, &costs),
            Err(Error::MissingCost("edVerify"))
        );
    }

    #[test]
    fn empty_sections() {
        let costs = CostTable::new().evaluate().unwrap();
        assert_eq!(render(&[], &costs).unwrap(), "");
    }

    proptest! {
        #[test]
        fn grouping_keeps_digits(value in any::<u64>()) {
            prop_assert_eq!(group_thousands(value).replace(' ', ""), value.to_string());
        }

        #[test]
        fn grouping_shape(value in any::<u64>()) {
            let grouped = group_thousands(value);
            let groups: Vec<_> = grouped.split(' ').collect();

            prop_assert!((1..=3).contains(&groups[0].len()));
            prop_assert!(!groups[0].starts_with('0') || value == 0);
            for group in &groups[1..] {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
