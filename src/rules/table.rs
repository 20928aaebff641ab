use crate::error::{AntError, Result};
use crate::rules::{AntColour, CellColour, Rule, RuleKey};
use std::collections::HashMap;
use std::fmt;

/// Something noteworthy but not fatal found while building a table
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleDiagnostic {
    /// A later rule replaced an earlier one with the same key
    Duplicate { replaced: Rule, by: Rule },
}

impl fmt::Display for RuleDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleDiagnostic::Duplicate { replaced, by } => {
                write!(f, "duplicate rules for {}: {} replaced by {}", by.key(), replaced, by)
            }
        }
    }
}

/// Transition rules of one ant, keyed by `(ant colour, cell colour)`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: HashMap<RuleKey, Rule>,
}

impl RuleTable {
    /// Build a table; on key collisions the last rule wins and a diagnostic
    /// is returned for each replaced rule.
    pub fn from_rules<I>(rules: I) -> (Self, Vec<RuleDiagnostic>)
    where
        I: IntoIterator<Item = Rule>,
    {
        let mut table = HashMap::new();
        let mut diagnostics = Vec::new();

        for rule in rules {
            if let Some(replaced) = table.insert(rule.key(), rule) {
                diagnostics.push(RuleDiagnostic::Duplicate { replaced, by: rule });
            }
        }

        (Self { rules: table }, diagnostics)
    }

    /// Build a table, failing on the first duplicate key.
    pub fn strict<I>(rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = Rule>,
    {
        let mut table = HashMap::new();
        for rule in rules {
            if table.insert(rule.key(), rule).is_some() {
                return Err(AntError::DuplicateRule(rule.key()));
            }
        }
        Ok(Self { rules: table })
    }

    #[inline]
    pub fn get(&self, ant_colour: AntColour, cell_colour: CellColour) -> Option<&Rule> {
        self.rules.get(&RuleKey {
            ant_colour,
            cell_colour,
        })
    }

    /// Like [`get`](Self::get) but a missing rule is an `UnhandledRule` error.
    #[inline]
    pub fn lookup(&self, ant_colour: AntColour, cell_colour: CellColour) -> Result<&Rule> {
        self.get(ant_colour, cell_colour)
            .ok_or(AntError::UnhandledRule {
                ant_colour,
                cell_colour,
            })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }
}
