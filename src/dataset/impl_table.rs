use std::collections::HashSet;

use super::{AttrValue, RowTable};
use crate::error::{Error, Result};
use crate::traits::Records;

impl RowTable {
    /// Creates a table from records and their class labels
    ///
    /// The declared feature order is the order of `feature_names`; every
    /// record must carry exactly one value per feature. Value domains and
    /// the class list are collected in first-seen order over the rows.
    ///
    /// Fails when the feature list is empty or contains duplicates, when
    /// the class column collides with a feature or is unnamed, when the
    /// label count does not match the record count, when a record has the
    /// wrong width or when a row carries an empty class label.
    pub fn new(
        feature_names: Vec<String>,
        class_name: String,
        records: Vec<Vec<AttrValue>>,
        labels: Vec<String>,
    ) -> Result<RowTable> {
        if feature_names.is_empty() {
            return Err(Error::Parameters(
                "at least one feature column is required".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for name in &feature_names {
            if !seen.insert(name) {
                return Err(Error::Parameters(format!("duplicate feature {:?}", name)));
            }
        }
        if class_name.is_empty() {
            return Err(Error::ClassColumn("class column is unnamed".to_string()));
        }
        if feature_names.contains(&class_name) {
            return Err(Error::ClassColumn(format!(
                "class column {:?} collides with a feature",
                class_name
            )));
        }
        if records.len() != labels.len() {
            return Err(Error::ClassColumn(format!(
                "expected {} class labels, found {}",
                records.len(),
                labels.len()
            )));
        }
        for (row, record) in records.iter().enumerate() {
            if record.len() != feature_names.len() {
                return Err(Error::RowShape {
                    row,
                    expected: feature_names.len(),
                    found: record.len(),
                });
            }
        }
        for (row, label) in labels.iter().enumerate() {
            if label.is_empty() {
                return Err(Error::MissingLabel(row));
            }
        }

        let mut domains = vec![Vec::new(); feature_names.len()];
        for record in &records {
            for (feature, value) in record.iter().enumerate() {
                if !domains[feature].contains(value) {
                    domains[feature].push(value.clone());
                }
            }
        }
        let mut classes = Vec::new();
        for label in &labels {
            if !classes.contains(label) {
                classes.push(label.clone());
            }
        }

        Ok(RowTable {
            records,
            labels,
            feature_names,
            class_name,
            domains,
            classes,
        })
    }

    /// Returns the declared feature names in order
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Returns the name of the class column
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the distinct class labels in first-seen order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns the class label of every row
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the class label of one row
    pub fn label(&self, row: usize) -> &str {
        &self.labels[row]
    }

    /// Returns the values of one row in declared feature order
    pub fn row(&self, row: usize) -> &[AttrValue] {
        &self.records[row]
    }

    /// Returns the value of one row for one feature
    pub fn value(&self, row: usize, feature: usize) -> &AttrValue {
        &self.records[row][feature]
    }

    /// Returns the distinct values of a feature in first-seen order
    ///
    /// The domain is collected over the full table at construction time, so
    /// candidate enumeration during induction does not depend on which rows
    /// are still uncovered.
    pub fn domain(&self, feature: usize) -> &[AttrValue] {
        &self.domains[feature]
    }

    /// Resolves a feature name to its column index
    pub fn feature_index(&self, name: &str) -> Option<usize> {
        self.feature_names.iter().position(|f| f == name)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Projects the table onto a subset of its features
    ///
    /// This is the interface offered to an upstream feature selector: the
    /// selector names the attributes the induction engine may see and the
    /// rest of the table is hidden. The subset must be non-empty and every
    /// name must resolve; domains and classes are recollected on the
    /// projected table.
    pub fn with_feature_subset(&self, names: &[&str]) -> Result<RowTable> {
        let mut indices = Vec::with_capacity(names.len());
        for name in names {
            match self.feature_index(name) {
                Some(idx) => indices.push(idx),
                None => return Err(Error::UnknownFeature(name.to_string())),
            }
        }
        let records = self
            .records
            .iter()
            .map(|record| indices.iter().map(|&idx| record[idx].clone()).collect())
            .collect();
        RowTable::new(
            names.iter().map(|n| n.to_string()).collect(),
            self.class_name.clone(),
            records,
            self.labels.clone(),
        )
    }
}

impl Records for RowTable {
    fn nsamples(&self) -> usize {
        self.records.len()
    }

    fn nfeatures(&self) -> usize {
        self.feature_names.len()
    }
}
