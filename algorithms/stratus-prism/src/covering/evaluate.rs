//! Rule set evaluation
//!
//! Two prediction semantics are supported on purpose. Accuracy scoring uses
//! first-match-wins over the stored rule order, which is how the induced
//! list is validated against its training table. The downstream fuzzy
//! inference stage instead collects the consequents of *all* matching rules
//! and takes the majority, so that aggregation is exposed as the separately
//! named [`vote`](RuleSet::vote) operation. Neither operation mutates the
//! rule set; both are safe to call repeatedly and concurrently.
use std::collections::HashMap;
use std::fmt::Write;

use stratus::dataset::{AttrValue, RowTable};
use stratus::metrics::ConfusionMatrix;
use stratus::traits::Records;

use super::rules::{Rule, RuleSet};

impl Rule {
    /// Returns true if the antecedent holds for the given table row
    ///
    /// A condition naming an attribute the table does not declare never
    /// holds. An empty antecedent covers every row.
    pub fn covers(&self, table: &RowTable, row: usize) -> bool {
        self.antecedent.iter().all(|condition| {
            match table.feature_index(&condition.attribute) {
                Some(feature) => table.value(row, feature) == &condition.value,
                None => false,
            }
        })
    }

    /// Returns true if the antecedent holds for a standalone assignment
    ///
    /// This is the entry point used by consumers that map their own
    /// categorized inputs onto the rule vocabulary, such as the fuzzy
    /// inference stage.
    pub fn covers_assignment(&self, assignment: &HashMap<String, AttrValue>) -> bool {
        self.antecedent
            .iter()
            .all(|condition| assignment.get(&condition.attribute) == Some(&condition.value))
    }
}

impl RuleSet {
    /// First-match prediction for each row of the table
    ///
    /// Rules are scanned in stored order; the consequent of the first rule
    /// whose antecedent holds is the prediction. Rows no rule matches yield
    /// `None`.
    pub fn predict(&self, table: &RowTable) -> Vec<Option<String>> {
        (0..table.nsamples())
            .map(|row| {
                self.iter()
                    .find(|rule| rule.covers(table, row))
                    .map(|rule| rule.consequent.value.clone())
            })
            .collect()
    }

    /// First-match prediction for a standalone assignment
    pub fn predict_assignment(&self, assignment: &HashMap<String, AttrValue>) -> Option<String> {
        self.iter()
            .find(|rule| rule.covers_assignment(assignment))
            .map(|rule| rule.consequent.value.clone())
    }

    /// Majority-vote prediction for each row of the table
    ///
    /// Aggregates the consequents of every matching rule, not just the
    /// first. Ties resolve to the consequent whose first matching rule
    /// appears earliest in the stored order.
    pub fn vote(&self, table: &RowTable) -> Vec<Option<String>> {
        (0..table.nsamples())
            .map(|row| {
                majority(
                    self.iter()
                        .filter(|rule| rule.covers(table, row))
                        .map(|rule| rule.consequent.value.as_str()),
                )
            })
            .collect()
    }

    /// Majority-vote prediction for a standalone assignment
    pub fn vote_assignment(&self, assignment: &HashMap<String, AttrValue>) -> Option<String> {
        majority(
            self.iter()
                .filter(|rule| rule.covers_assignment(assignment))
                .map(|rule| rule.consequent.value.as_str()),
        )
    }

    /// First-match accuracy of the rule set against a labeled table
    ///
    /// Rows without a prediction count as incorrect. Returns `None` for an
    /// empty table, where accuracy is undefined.
    pub fn accuracy(&self, table: &RowTable) -> Option<f64> {
        if table.nsamples() == 0 {
            return None;
        }
        let predicted = self.predict(table);
        let cm = ConfusionMatrix::new(&predicted, table.labels());
        Some(cm.accuracy())
    }

    /// Human-readable report: one line per rule and the final accuracy
    /// formatted to two decimal places (`n/a` for an empty table)
    pub fn report(&self, table: &RowTable) -> String {
        let mut out = String::new();
        for rule in self {
            writeln!(out, "{}", rule).unwrap();
        }
        match self.accuracy(table) {
            Some(accuracy) => writeln!(out, "accuracy {:.2}", accuracy).unwrap(),
            None => writeln!(out, "accuracy n/a").unwrap(),
        }
        out
    }
}

/// Majority label of an ordered stream of votes
///
/// Counts in first-seen order and replaces the leader only on a strictly
/// higher count, so the earliest label wins ties. Returns `None` for an
/// empty stream.
fn majority<'a>(votes: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for vote in votes {
        match counts.iter().position(|(label, _)| *label == vote) {
            Some(idx) => counts[idx].1 += 1,
            None => counts.push((vote, 1)),
        }
    }

    let mut winner: Option<(&str, usize)> = None;
    for &(label, count) in &counts {
        let better = match winner {
            Some((_, best)) => count > best,
            None => true,
        };
        if better {
            winner = Some((label, count));
        }
    }
    winner.map(|(label, _)| label.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::covering::rules::{Condition, Consequent};

    fn rule(conditions: &[(&str, i64)], class: &str) -> Rule {
        Rule {
            antecedent: conditions
                .iter()
                .map(|(attribute, value)| Condition {
                    attribute: attribute.to_string(),
                    value: AttrValue::Int(*value),
                })
                .collect(),
            consequent: Consequent {
                attribute: "Clima".to_string(),
                value: class.to_string(),
            },
        }
    }

    fn assignment(values: &[(&str, i64)]) -> HashMap<String, AttrValue> {
        values
            .iter()
            .map(|(name, value)| (name.to_string(), AttrValue::Int(*value)))
            .collect()
    }

    #[test]
    fn first_match_and_vote_diverge() {
        let rules = RuleSet::new(vec![
            rule(&[("cloud", 0)], "X"),
            rule(&[("wind", 0)], "Y"),
            rule(&[("humidity", 0)], "Y"),
        ]);
        let row = assignment(&[("cloud", 0), ("wind", 0), ("humidity", 0)]);

        assert_eq!(rules.predict_assignment(&row), Some("X".to_string()));
        assert_eq!(rules.vote_assignment(&row), Some("Y".to_string()));
    }

    #[test]
    fn vote_ties_resolve_to_the_earliest_rule() {
        let rules = RuleSet::new(vec![
            rule(&[("cloud", 0)], "X"),
            rule(&[("wind", 0)], "Y"),
        ]);
        let row = assignment(&[("cloud", 0), ("wind", 0)]);

        assert_eq!(rules.vote_assignment(&row), Some("X".to_string()));
    }

    #[test]
    fn unmatched_rows_have_no_prediction() {
        let rules = RuleSet::new(vec![rule(&[("cloud", 0)], "X")]);
        let row = assignment(&[("cloud", 1)]);

        assert_eq!(rules.predict_assignment(&row), None);
        assert_eq!(rules.vote_assignment(&row), None);
    }

    #[test]
    fn conditions_on_undeclared_attributes_never_hold() {
        let table = RowTable::new(
            vec!["cloud".to_string()],
            "Clima".to_string(),
            vec![vec![AttrValue::Int(0)]],
            vec!["X".to_string()],
        )
        .unwrap();
        let rules = RuleSet::new(vec![rule(&[("pressure", 0)], "X")]);

        assert_eq!(rules.predict(&table), vec![None]);
    }

    #[test]
    fn empty_antecedent_covers_everything() {
        let rules = RuleSet::new(vec![rule(&[], "X")]);
        let row = assignment(&[]);

        assert_eq!(rules.predict_assignment(&row), Some("X".to_string()));
    }

    #[test]
    fn report_ends_with_two_decimal_accuracy() {
        let table = RowTable::new(
            vec!["cloud".to_string()],
            "Clima".to_string(),
            vec![vec![AttrValue::Int(0)], vec![AttrValue::Int(1)]],
            vec!["X".to_string(), "Y".to_string()],
        )
        .unwrap();
        let rules = RuleSet::new(vec![rule(&[("cloud", 0)], "X")]);

        let report = rules.report(&table);
        let lines: Vec<_> = report.lines().collect();

        assert_eq!(lines, vec!["IF cloud=0 THEN Clima=X", "accuracy 0.50"]);
    }

    #[test]
    fn report_on_an_empty_table() {
        let table = RowTable::new(
            vec!["cloud".to_string()],
            "Clima".to_string(),
            vec![],
            vec![],
        )
        .unwrap();
        let rules = RuleSet::default();

        assert_eq!(rules.report(&table), "accuracy n/a\n");
    }
}
