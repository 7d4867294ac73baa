//! Cost expressions.
//!
//! Every formula in the model is a literal-weighted sum of other costs plus a
//! constant, so expressions are kept in that normal form: loops such as
//! `512 * (11 + 2 * cost("uiSwap"))` are expanded as they are built.

use core::ops::{Add, Mul, Neg, Sub};

use crate::{Error, Name, Result};

/// Linear combination of named costs plus an integer constant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expr {
    constant: i64,
    terms: Vec<(Name, i64)>,
}

/// Reference to the cost called `name`.
pub fn cost(name: Name) -> Expr {
    Expr {
        constant: 0,
        terms: vec![(name, 1)],
    }
}

impl Expr {
    /// Expression with no references.
    pub const fn literal(value: i64) -> Self {
        Self {
            constant: value,
            terms: Vec::new(),
        }
    }

    /// Constant part of the expression.
    pub fn constant(&self) -> i64 {
        self.constant
    }

    /// Weight of `name` in the expression, zero if it is not referenced.
    pub fn coefficient(&self, name: Name) -> i64 {
        self.terms
            .iter()
            .find(|(term, _)| *term == name)
            .map_or(0, |&(_, coefficient)| coefficient)
    }

    /// Names this expression depends on, in the order they were first used.
    pub fn references(&self) -> impl Iterator<Item = Name> + '_ {
        self.terms.iter().map(|&(name, _)| name)
    }

    /// Evaluates the expression for the cost called `name`, resolving
    /// references through `lookup`.
    pub fn eval<F>(&self, name: Name, lookup: F) -> Result<u64>
    where
        F: Fn(Name) -> Option<u64>,
    {
        let overflow = || Error::Overflow(name);
        let mut total = self.constant;

        for &(reference, coefficient) in &self.terms {
            let value = lookup(reference).ok_or(Error::UndefinedReference { name, reference })?;
            let value = i64::try_from(value).map_err(|_| overflow())?;
            let term = value.checked_mul(coefficient).ok_or_else(overflow)?;
            total = total.checked_add(term).ok_or_else(overflow)?;
        }

        u64::try_from(total).map_err(|_| Error::NegativeCost(name))
    }

    fn add_term(&mut self, name: Name, coefficient: i64) {
        match self.terms.iter().position(|&(term, _)| term == name) {
            Some(i) => {
                self.terms[i].1 += coefficient;
                if self.terms[i].1 == 0 {
                    self.terms.remove(i);
                }
            }
            None if coefficient != 0 => self.terms.push((name, coefficient)),
            None => (),
        }
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::literal(value)
    }
}

impl Add<Expr> for Expr {
    type Output = Expr;

    fn add(mut self, rhs: Expr) -> Expr {
        self.constant += rhs.constant;
        for (name, coefficient) in rhs.terms {
            self.add_term(name, coefficient);
        }
        self
    }
}

impl Add<i64> for Expr {
    type Output = Expr;

    fn add(mut self, rhs: i64) -> Expr {
        self.constant += rhs;
        self
    }
}

impl Add<Expr> for i64 {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        rhs + self
    }
}

impl Sub<Expr> for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        self + -rhs
    }
}

impl Sub<i64> for Expr {
    type Output = Expr;

    fn sub(self, rhs: i64) -> Expr {
        self + -rhs
    }
}

impl Sub<Expr> for i64 {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        -rhs + self
    }
}

impl Mul<i64> for Expr {
    type Output = Expr;

    fn mul(mut self, rhs: i64) -> Expr {
        if rhs == 0 {
            return Expr::default();
        }
        self.constant *= rhs;
        for (_, coefficient) in &mut self.terms {
            *coefficient *= rhs;
        }
        self
    }
}

impl Mul<Expr> for i64 {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        rhs * self
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        self * -1
    }
}
