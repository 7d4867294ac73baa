//! Cost table and its evaluation.

use core::ops::Index;
use std::collections::HashMap;

use crate::{Error, Expr, Name, Result, Section, Tier};

/// Formula for one named cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Definition {
    /// Tier the cost belongs to.
    pub tier: Tier,

    /// Unique name of the cost.
    pub name: Name,

    /// Formula over constants and other costs.
    pub expr: Expr,
}

/// Ordered set of cost definitions.
///
/// Definitions may appear in any order: [`CostTable::evaluate`] follows the
/// references between them. The order only decides how costs are listed
/// within their tier.
#[derive(Clone, Debug, Default)]
pub struct CostTable {
    definitions: Vec<Definition>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

impl CostTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the definition of `name`.
    pub fn define(&mut self, tier: Tier, name: Name, expr: impl Into<Expr>) -> &mut Self {
        self.definitions.push(Definition {
            tier,
            name,
            expr: expr.into(),
        });
        self
    }

    /// Definitions in the order they were added.
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the table has no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Report sections listing every defined cost: one per non-empty tier,
    /// lowest tier first, names in definition order.
    pub fn layout(&self) -> Vec<Section> {
        Tier::ALL
            .into_iter()
            .map(|tier| Section {
                tier,
                names: self
                    .definitions
                    .iter()
                    .filter(|definition| definition.tier == tier)
                    .map(|definition| definition.name)
                    .collect(),
            })
            .filter(|section| !section.names.is_empty())
            .collect()
    }

    /// Evaluates every definition exactly once, each after the costs it
    /// references.
    ///
    /// The table is checked as a whole before any formula is evaluated:
    /// duplicate names, unknown references, references to a higher tier and
    /// cycles are all rejected.
    pub fn evaluate(&self) -> Result<Costs> {
        let index = self.index()?;
        self.check_references(&index)?;

        let mut marks = vec![Mark::Unvisited; self.definitions.len()];
        let mut order = Vec::with_capacity(self.definitions.len());
        for i in 0..self.definitions.len() {
            self.visit(i, &index, &mut marks, &mut order)?;
        }

        let mut values: Vec<Option<u64>> = vec![None; self.definitions.len()];
        for i in order {
            let definition = &self.definitions[i];
            let value = definition.expr.eval(definition.name, |reference| {
                index.get(reference).and_then(|&j| values[j])
            })?;
            tracing::debug!(
                tier = %definition.tier,
                name = definition.name,
                value,
                "evaluated cost"
            );
            values[i] = Some(value);
        }

        let entries = self
            .definitions
            .iter()
            .zip(values)
            .map(|(definition, value)| {
                value
                    .map(|value| NamedCost {
                        tier: definition.tier,
                        name: definition.name,
                        value,
                    })
                    .ok_or(Error::DependencyCycle(definition.name))
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(costs = entries.len(), "evaluated cost table");
        Ok(Costs { entries, index })
    }

    fn index(&self) -> Result<HashMap<Name, usize>> {
        let mut index = HashMap::with_capacity(self.definitions.len());
        for (i, definition) in self.definitions.iter().enumerate() {
            if index.insert(definition.name, i).is_some() {
                return Err(Error::DuplicateCost(definition.name));
            }
        }
        Ok(index)
    }

    fn check_references(&self, index: &HashMap<Name, usize>) -> Result<()> {
        for definition in &self.definitions {
            for reference in definition.expr.references() {
                let &j = index.get(reference).ok_or(Error::UndefinedReference {
                    name: definition.name,
                    reference,
                })?;
                if self.definitions[j].tier > definition.tier {
                    return Err(Error::TierInversion {
                        name: definition.name,
                        tier: definition.tier,
                        reference,
                    });
                }
            }
        }
        Ok(())
    }

    /// Depth-first post-order walk; `order` receives each index after all of
    /// its dependencies.
    fn visit(
        &self,
        i: usize,
        index: &HashMap<Name, usize>,
        marks: &mut [Mark],
        order: &mut Vec<usize>,
    ) -> Result<()> {
        match marks[i] {
            Mark::Done => return Ok(()),
            Mark::InProgress => return Err(Error::DependencyCycle(self.definitions[i].name)),
            Mark::Unvisited => (),
        }

        marks[i] = Mark::InProgress;
        for reference in self.definitions[i].expr.references() {
            self.visit(index[reference], index, marks, order)?;
        }
        marks[i] = Mark::Done;
        order.push(i);
        Ok(())
    }
}

/// A computed cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamedCost {
    /// Tier the cost belongs to.
    pub tier: Tier,

    /// Name of the cost.
    pub name: Name,

    /// Estimated number of 32-bit arithmetic operations.
    pub value: u64,
}

/// Values of every cost in an evaluated [`CostTable`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Costs {
    entries: Vec<NamedCost>,
    index: HashMap<Name, usize>,
}

impl Costs {
    /// Value of the cost called `name`.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.index.get(name).map(|&i| self.entries[i].value)
    }

    /// Computed costs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedCost> {
        self.entries.iter()
    }

    /// Number of computed costs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no cost was computed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<&str> for Costs {
    type Output = u64;

    /// # Panics
    ///
    /// If no cost called `name` exists.
    fn index(&self, name: &str) -> &u64 {
        &self.entries[self.index[name]].value
    }
}
