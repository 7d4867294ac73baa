#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

pub mod formulas;
pub mod report;

mod error;
mod expr;
mod table;

pub use crate::{
    error::{Error, Result},
    expr::{Expr, cost},
    formulas::{FormulaSet, Params},
    report::{Section, group_thousands, render},
    table::{CostTable, Costs, Definition, NamedCost},
};

use core::fmt;

/// Identifier of a cost, e.g. `"uiCopy"`.
pub type Name = &'static str;

/// Abstraction level of a cost.
///
/// Each tier is built from the ones before it: field elements are stored as
/// wide integers, curve points as three field elements, and signatures use
/// all three.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// 256-bit unsigned integer primitives (`ui*`).
    WideInteger,

    /// Prime field element primitives (`fi*`).
    FieldElement,

    /// Projective curve point primitives (`cp*`).
    CurvePoint,

    /// Top-level ECDSA operations (`ed*`).
    Signature,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Tier; 4] = [
        Tier::WideInteger,
        Tier::FieldElement,
        Tier::CurvePoint,
        Tier::Signature,
    ];
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::WideInteger => "wide-integer",
            Tier::FieldElement => "field-element",
            Tier::CurvePoint => "curve-point",
            Tier::Signature => "signature",
        })
    }
}
