use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize};
use stratus::dataset::AttrValue;

/// One conjunct of a rule antecedent
///
/// A condition requires exact equality between the named attribute and the
/// stored value. An antecedent never names the same attribute twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub attribute: String,
    pub value: AttrValue,
}

/// The class assignment a rule makes when its antecedent holds
///
/// The attribute is the class column name of the training table; class
/// labels are always strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consequent {
    pub attribute: String,
    pub value: String,
}

/// A conjunctive IF/THEN classification rule
///
/// The antecedent is an ordered AND-conjunction of conditions; an empty
/// antecedent holds for every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub antecedent: Vec<Condition>,
    pub consequent: Consequent,
}

/// An ordered list of rules
///
/// Order is significant: prediction scans rules front to back and the
/// serialized document preserves the induction order, grouped by the order
/// classes were processed. Wraps transparently around its rule vector so
/// the JSON document is a plain array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    pub(crate) rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleSet { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        RuleSet::new(rules)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IF ")?;
        if self.antecedent.is_empty() {
            write!(f, "true")?;
        } else {
            for (i, condition) in self.antecedent.iter().enumerate() {
                if i > 0 {
                    write!(f, " AND ")?;
                }
                write!(f, "{}={}", condition.attribute, condition.value)?;
            }
        }
        write!(
            f,
            " THEN {}={}",
            self.consequent.attribute, self.consequent.value
        )
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_conditions_with_and() {
        let rule = Rule {
            antecedent: vec![
                Condition {
                    attribute: "cloud_cover_cat".to_string(),
                    value: AttrValue::Int(0),
                },
                Condition {
                    attribute: "sunshine_cat".to_string(),
                    value: AttrValue::Int(3),
                },
            ],
            consequent: Consequent {
                attribute: "Clima".to_string(),
                value: "soleado".to_string(),
            },
        };

        assert_eq!(
            rule.to_string(),
            "IF cloud_cover_cat=0 AND sunshine_cat=3 THEN Clima=soleado"
        );
    }

    #[test]
    fn display_of_empty_antecedent() {
        let rule = Rule {
            antecedent: vec![],
            consequent: Consequent {
                attribute: "Clima".to_string(),
                value: "nublado".to_string(),
            },
        };

        assert_eq!(rule.to_string(), "IF true THEN Clima=nublado");
    }

    #[test]
    fn rule_set_displays_one_line_per_rule() {
        let rule = Rule {
            antecedent: vec![Condition {
                attribute: "humidity_cat".to_string(),
                value: AttrValue::Int(2),
            }],
            consequent: Consequent {
                attribute: "Clima".to_string(),
                value: "lluvioso".to_string(),
            },
        };
        let rules = RuleSet::new(vec![rule.clone(), rule]);

        let rendered = rules.to_string();
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered
            .lines()
            .all(|line| line == "IF humidity_cat=2 THEN Clima=lluvioso"));
    }
}
