//! The rule document
//!
//! Rule sets cross the process boundary as a UTF-8 JSON array, one object
//! per rule:
//!
//! ```json
//! [
//!     {
//!         "antecedent": [ { "attribute": "cloud_cover_cat", "value": 0 } ],
//!         "consequent": { "attribute": "Clima", "value": "soleado" }
//!     }
//! ]
//! ```
//!
//! Integer category codes serialize as JSON integers and class labels as
//! JSON strings; decoding restores the discriminated value type exactly, so
//! a decoded rule set produces the same matches as the one that was
//! written. This is a strict round-trip contract: the downstream fuzzy
//! inference stage depends on it bit-exactly.
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use stratus::dataset::{AttrValue, RowTable};

use super::rules::{Rule, RuleSet};
use crate::error::{PrismError, Result};

impl RuleSet {
    /// Encodes the rule set as a JSON document
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(PrismError::from)
    }

    /// Decodes a rule set from a JSON document
    ///
    /// Schema violations are fatal; use [`validate`](RuleSet::validate) or
    /// [`retain_known`](RuleSet::retain_known) afterwards to check the
    /// decoded vocabulary against a table.
    pub fn from_json(json: &str) -> Result<RuleSet> {
        serde_json::from_str(json).map_err(PrismError::from)
    }

    /// Writes the JSON document to a file
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Reads a JSON document from a file
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<RuleSet> {
        let file = File::open(path)?;
        serde_json::from_reader(BufReader::new(file)).map_err(PrismError::from)
    }

    /// Checks every rule against the vocabulary of a table
    ///
    /// Fails on the first rule referencing an attribute the table does not
    /// declare, a value outside the attribute's observed domain, a
    /// consequent attribute other than the table's class column or a class
    /// label the table never carries. This is the strict loader path.
    pub fn validate(&self, table: &RowTable) -> Result<()> {
        for rule in self {
            check_rule(rule, table)?;
        }
        Ok(())
    }

    /// Drops rules referencing vocabulary unknown to the table
    ///
    /// The lenient counterpart of [`validate`](RuleSet::validate) used by
    /// consumers that tolerate vocabulary drift: offending rules are
    /// skipped instead of failing the whole document. Returns the retained
    /// rules and the number of rules dropped.
    pub fn retain_known(self, table: &RowTable) -> (RuleSet, usize) {
        let total = self.rules.len();
        let kept: Vec<Rule> = self
            .rules
            .into_iter()
            .filter(|rule| check_rule(rule, table).is_ok())
            .collect();
        let dropped = total - kept.len();
        (RuleSet::new(kept), dropped)
    }
}

fn check_rule(rule: &Rule, table: &RowTable) -> Result<()> {
    for condition in &rule.antecedent {
        let feature = table
            .feature_index(&condition.attribute)
            .ok_or_else(|| PrismError::UnknownAttribute(condition.attribute.clone()))?;
        if !table.domain(feature).contains(&condition.value) {
            return Err(PrismError::UnknownValue {
                attribute: condition.attribute.clone(),
                value: condition.value.clone(),
            });
        }
    }
    if rule.consequent.attribute != table.class_name() {
        return Err(PrismError::UnknownAttribute(rule.consequent.attribute.clone()));
    }
    if !table.classes().contains(&rule.consequent.value) {
        return Err(PrismError::UnknownValue {
            attribute: rule.consequent.attribute.clone(),
            value: AttrValue::Str(rule.consequent.value.clone()),
        });
    }
    Ok(())
}
