//! PRISM covering induction
//!
use stratus::dataset::{AttrValue, RowTable};
use stratus::traits::{Fit, Predict, Records};

use super::hyperparams::PrismValidParams;
use super::rules::{Condition, Consequent, Rule, RuleSet};
use crate::error::{PrismError, Result};

/// RowMask tracks observations
///
/// One covering pass narrows the rows under consideration twice: the
/// per-class working set shrinks as rules are emitted, and the rule builder
/// narrows its own copy of the working set while conditions are appended.
/// Both are tracked as a boolean mask over row indices, hiding all
/// observations that are no longer applicable, so duplicate rows stay
/// distinguishable and no row data is ever copied.
#[derive(Clone)]
struct RowMask {
    mask: Vec<bool>,
    nsamples: usize,
}

impl RowMask {
    /// Generates a RowMask without hidden observations
    fn all(nsamples: usize) -> Self {
        RowMask {
            mask: vec![true; nsamples],
            nsamples,
        }
    }

    /// Returns true if the observation at `idx` is still visible
    fn visible(&self, idx: usize) -> bool {
        self.mask[idx]
    }

    /// Hides the observation at the specified index
    ///
    /// ### Panics
    ///
    /// If `idx` is out of bounds
    fn hide(&mut self, idx: usize) {
        if self.mask[idx] {
            self.mask[idx] = false;
            self.nsamples -= 1;
        }
    }
}

/// A fitted PRISM rule list for classification.
///
/// ### Structure
///
/// The model is an ordered list of conjunctive IF/THEN rules. Rules appear
/// grouped by target class in the order classes were first seen in the
/// training table, and within one class in the order the covering loop
/// emitted them.
///
/// ### Algorithm
///
/// For every class, starting from the full table as the working set:
///
/// * Grow one rule greedily: among all `(attribute, value)` pairs whose
///   attribute is not yet part of the rule, append the condition that
///   maximizes the purity of the narrowed working subset, until the rule is
///   pure (or the purity threshold is reached) or no candidate is left;
/// * Remove the rows of the target class covered by the finished rule from
///   the working set and emit the rule;
/// * Repeat while the working set still contains rows of the target class.
///
/// Candidate values enumerate from the domains observed over the **full**
/// training table in first-seen order, and ties in purity resolve to the
/// first candidate in enumeration order, so induction is deterministic for
/// a given table.
///
/// ### Predictions
///
/// To predict the label of a sample the rule list is scanned front to back
/// and the consequent of the first rule whose antecedent holds is returned;
/// rows no rule matches yield no prediction. The separately named
/// [`vote`](RuleSet::vote) operation instead aggregates all matching rules
/// by majority, which is how the downstream fuzzy inference stage consumes
/// a rule document.
///
/// ### Example
///
/// ```rust
/// use stratus::prelude::*;
/// use stratus_prism::Prism;
///
/// // Load the dataset
/// let table = stratus_datasets::weather();
/// // Fit the rule list
/// let model = Prism::params().fit(&table).unwrap();
/// // Get accuracy on the training set
/// let accuracy = model.rules().accuracy(&table).unwrap();
///
/// assert!(accuracy > 0.9);
/// ```
///
#[derive(Debug, Clone, PartialEq)]
pub struct Prism {
    rules: RuleSet,
}

impl Prism {
    /// Returns the induced rule set
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Consumes the model and returns the induced rule set
    pub fn into_rules(self) -> RuleSet {
        self.rules
    }
}

impl Fit<RowTable, PrismError> for PrismValidParams {
    type Object = Prism;

    /// Induces a rule set covering every class of the training table.
    ///
    /// An empty table yields an empty rule set. Classes are processed in
    /// first-seen order; each class's covering loop owns its working set,
    /// so the per-class rule lists are independent and concatenate in class
    /// order.
    fn fit(&self, table: &RowTable) -> Result<Prism> {
        let mut rules = Vec::new();
        for class in table.classes() {
            cover_class(table, class, self, &mut rules)?;
        }

        Ok(Prism {
            rules: RuleSet::new(rules),
        })
    }
}

impl Predict<&RowTable, Vec<Option<String>>> for Prism {
    /// First-match prediction for each row of the table
    fn predict(&self, table: &RowTable) -> Vec<Option<String>> {
        self.rules.predict(table)
    }
}

/// Runs the covering loop for one target class, appending emitted rules
///
/// The working set starts as the full table and shrinks by exactly the
/// covered target-class rows after each emission; covered rows of other
/// classes stay visible for the remainder of the loop. Progress is a
/// checked invariant: a rule that removes no target row aborts the loop
/// with [`PrismError::InductionStalled`] instead of spinning.
fn cover_class(
    table: &RowTable,
    class: &str,
    params: &PrismValidParams,
    out: &mut Vec<Rule>,
) -> Result<()> {
    let mut working = RowMask::all(table.nsamples());
    let mut remaining = (0..table.nsamples())
        .filter(|&idx| table.label(idx) == class)
        .count();

    while remaining > 0 {
        let (rule, covered) = grow_rule(table, &working, class, params);

        let mut removed = 0;
        for idx in 0..table.nsamples() {
            if covered.visible(idx) && table.label(idx) == class {
                working.hide(idx);
                removed += 1;
            }
        }
        if removed == 0 {
            return Err(PrismError::InductionStalled(class.to_string()));
        }
        remaining -= removed;
        out.push(rule);
    }

    Ok(())
}

/// Greedily grows one rule over the current working set
///
/// Returns the finished rule together with the subset of the working set
/// its antecedent covers. Growth stops when the rule reaches the purity
/// threshold, when the covered subset contains no row of another class, or
/// when no candidate condition is left.
fn grow_rule(
    table: &RowTable,
    working: &RowMask,
    class: &str,
    params: &PrismValidParams,
) -> (Rule, RowMask) {
    let mut subset = working.clone();
    let mut used = vec![false; table.nfeatures()];
    let mut antecedent = Vec::new();

    loop {
        if let Some(cap) = params.max_conditions() {
            if antecedent.len() >= cap {
                break;
            }
        }

        let (feature, value, purity) = match best_condition(table, &subset, class, &used) {
            Some(best) => best,
            None => break,
        };

        used[feature] = true;
        antecedent.push(Condition {
            attribute: table.feature_names()[feature].clone(),
            value: value.clone(),
        });
        for idx in 0..table.nsamples() {
            if subset.visible(idx) && table.value(idx, feature) != &value {
                subset.hide(idx);
            }
        }

        if purity >= params.min_purity() {
            break;
        }
        let impure = (0..table.nsamples())
            .any(|idx| subset.visible(idx) && table.label(idx) != class);
        if !impure {
            break;
        }
    }

    let rule = Rule {
        antecedent,
        consequent: Consequent {
            attribute: table.class_name().to_string(),
            value: class.to_string(),
        },
    };
    (rule, subset)
}

/// Single-step search for the condition that maximizes purity
///
/// Candidates enumerate features in declared order and values in the
/// first-seen order of the full training domain; pairs whose filtered
/// subset is empty are skipped. The maximum is taken under strict `>`
/// starting from zero, so the first candidate in enumeration order wins
/// ties and a candidate covering no target row is never selected.
fn best_condition(
    table: &RowTable,
    subset: &RowMask,
    class: &str,
    used: &[bool],
) -> Option<(usize, AttrValue, f64)> {
    let mut best = None;
    let mut best_purity = 0.0;

    for feature in 0..table.nfeatures() {
        if used[feature] {
            continue;
        }
        for value in table.domain(feature) {
            let mut covered = 0usize;
            let mut hits = 0usize;
            for idx in 0..table.nsamples() {
                if !subset.visible(idx) || table.value(idx, feature) != value {
                    continue;
                }
                covered += 1;
                if table.label(idx) == class {
                    hits += 1;
                }
            }
            if covered == 0 {
                continue;
            }

            let purity = hits as f64 / covered as f64;
            if purity > best_purity {
                best_purity = purity;
                best = Some((feature, value.clone(), purity));
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use stratus::prelude::*;

    fn table(features: &[&str], rows: &[(&[i64], &str)]) -> RowTable {
        RowTable::new(
            features.iter().map(|f| f.to_string()).collect(),
            "Clima".to_string(),
            rows.iter()
                .map(|(values, _)| values.iter().map(|&v| AttrValue::Int(v)).collect())
                .collect(),
            rows.iter().map(|(_, label)| label.to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn best_condition_maximizes_purity() {
        let table = table(
            &["cloud", "wind"],
            &[
                (&[0, 1], "A"),
                (&[0, 0], "A"),
                (&[1, 0], "B"),
                (&[1, 1], "B"),
            ],
        );
        let subset = RowMask::all(4);

        let (feature, value, purity) =
            best_condition(&table, &subset, "A", &[false, false]).unwrap();

        assert_eq!(feature, 0);
        assert_eq!(value, AttrValue::Int(0));
        assert_abs_diff_eq!(purity, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn best_condition_skips_used_features_and_empty_subsets() {
        let table = table(&["cloud", "wind"], &[(&[0, 1], "A"), (&[1, 1], "B")]);
        let mut subset = RowMask::all(2);
        subset.hide(1);

        // cloud is part of the rule already, so only wind candidates remain
        let (feature, value, _) = best_condition(&table, &subset, "A", &[true, false]).unwrap();

        assert_eq!(feature, 1);
        assert_eq!(value, AttrValue::Int(1));
    }

    #[test]
    fn best_condition_prefers_first_candidate_on_ties() {
        // cloud=0 and wind=0 both isolate class A perfectly; the declared
        // feature order decides
        let table = table(&["cloud", "wind"], &[(&[0, 0], "A"), (&[1, 1], "B")]);
        let subset = RowMask::all(2);

        let (feature, value, _) = best_condition(&table, &subset, "A", &[false, false]).unwrap();

        assert_eq!(feature, 0);
        assert_eq!(value, AttrValue::Int(0));
    }

    #[test]
    fn best_condition_never_selects_zero_purity() {
        let table = table(&["cloud"], &[(&[0], "A"), (&[1], "B")]);
        let mut subset = RowMask::all(2);
        subset.hide(0);

        // the only visible row is labeled B, every candidate has purity 0
        assert!(best_condition(&table, &subset, "A", &[false]).is_none());
    }

    #[test]
    fn self_consistent_two_class_example() {
        let table = table(&["cloud"], &[(&[0], "A"), (&[0], "A"), (&[1], "B")]);

        let model = Prism::params().fit(&table).unwrap();
        let rules = model.rules();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules.rules()[0].to_string(), "IF cloud=0 THEN Clima=A");
        assert_eq!(rules.rules()[1].to_string(), "IF cloud=1 THEN Clima=B");
        assert_abs_diff_eq!(rules.accuracy(&table).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_table_yields_empty_rule_set() {
        let table = RowTable::new(
            vec!["cloud".to_string()],
            "Clima".to_string(),
            vec![],
            vec![],
        )
        .unwrap();

        let model = Prism::params().fit(&table).unwrap();

        assert!(model.rules().is_empty());
        assert_eq!(model.rules().accuracy(&table), None);
    }

    #[test]
    fn conflicting_duplicates_terminate_with_impure_rules() {
        // identical records with different labels cannot be separated; the
        // covering loop must still terminate by emitting the impure rule
        // and removing the covered target rows
        let table = table(&["cloud"], &[(&[0], "A"), (&[0], "B"), (&[0], "B")]);

        let model = Prism::params().fit(&table).unwrap();
        let rules = model.rules();

        // one rule per class, both with the only available condition
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.rules()[0].to_string(), "IF cloud=0 THEN Clima=A");
        assert_eq!(rules.rules()[1].to_string(), "IF cloud=0 THEN Clima=B");

        // first-match sends every row to class A
        let predicted = rules.predict(&table);
        assert_eq!(predicted, vec![Some("A".to_string()); 3]);
        assert_abs_diff_eq!(
            rules.accuracy(&table).unwrap(),
            1.0 / 3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn covered_rows_of_other_classes_stay_in_the_working_set() {
        // the rule for class A covers the conflicting B row, but only the A
        // rows are removed; class B still gets its own rule afterwards
        let table = table(
            &["cloud", "wind"],
            &[(&[0, 0], "A"), (&[0, 0], "B"), (&[1, 1], "B")],
        );

        let model = Prism::params().fit(&table).unwrap();
        let classes: Vec<_> = model
            .rules()
            .iter()
            .map(|rule| rule.consequent.value.as_str())
            .collect();

        assert!(classes.contains(&"A"));
        assert_eq!(classes.iter().filter(|&&c| c == "B").count(), 2);
    }

    #[test]
    fn rule_emission_is_bounded_by_class_rows() {
        let table = table(
            &["cloud", "wind"],
            &[
                (&[0, 0], "A"),
                (&[0, 1], "A"),
                (&[1, 0], "A"),
                (&[1, 1], "B"),
                (&[2, 0], "B"),
                (&[2, 1], "C"),
            ],
        );

        let model = Prism::params().fit(&table).unwrap();

        for class in table.classes() {
            let class_rows = table.labels().iter().filter(|&l| l == class).count();
            let class_rules = model
                .rules()
                .iter()
                .filter(|rule| &rule.consequent.value == class)
                .count();
            assert!(class_rules >= 1);
            assert!(class_rules <= class_rows);
        }
    }

    #[test]
    fn coverage_soundness() {
        // every emitted rule covers at least one row of its target class on
        // the full table
        let table = table(
            &["cloud", "humidity", "wind"],
            &[
                (&[0, 2, 1], "soleado"),
                (&[0, 1, 0], "soleado"),
                (&[1, 2, 1], "nublado"),
                (&[2, 2, 0], "nublado"),
                (&[2, 3, 1], "lluvioso"),
                (&[1, 3, 0], "lluvioso"),
                (&[0, 3, 1], "lluvioso"),
            ],
        );

        let model = Prism::params().fit(&table).unwrap();

        assert!(!model.rules().is_empty());
        for rule in model.rules() {
            let covers_target = (0..table.nsamples()).any(|idx| {
                rule.covers(&table, idx) && table.label(idx) == rule.consequent.value
            });
            assert!(covers_target, "rule {} covers no target row", rule);
        }
    }

    #[test]
    fn max_conditions_caps_antecedent_length() {
        let table = table(
            &["cloud", "humidity", "wind"],
            &[
                (&[0, 0, 0], "A"),
                (&[0, 0, 1], "B"),
                (&[0, 1, 0], "B"),
                (&[1, 0, 0], "B"),
            ],
        );

        let model = Prism::params()
            .max_conditions(Some(1))
            .fit(&table)
            .unwrap();

        for rule in model.rules() {
            assert!(rule.antecedent.len() <= 1);
        }
    }

    #[test]
    fn min_purity_stops_growth_early() {
        // cloud=0 reaches 2/3 purity for A and no candidate does better;
        // with the threshold lowered the rule stops at one condition
        // instead of refining further
        let table = table(
            &["cloud", "wind"],
            &[
                (&[0, 0], "A"),
                (&[0, 0], "A"),
                (&[0, 0], "B"),
                (&[1, 0], "B"),
            ],
        );

        let model = Prism::params().min_purity(0.5).fit(&table).unwrap();
        let first = &model.rules().rules()[0];

        assert_eq!(first.to_string(), "IF cloud=0 THEN Clima=A");

        // the default threshold keeps refining the same rule
        let strict = Prism::params().fit(&table).unwrap();
        assert_eq!(
            strict.rules().rules()[0].to_string(),
            "IF cloud=0 AND wind=0 THEN Clima=A"
        );
    }

    #[test]
    fn antecedents_never_repeat_an_attribute() {
        let table = table(
            &["cloud", "humidity"],
            &[
                (&[0, 0], "A"),
                (&[0, 1], "B"),
                (&[1, 0], "B"),
                (&[1, 1], "A"),
            ],
        );

        let model = Prism::params().fit(&table).unwrap();

        for rule in model.rules() {
            let mut names: Vec<_> = rule
                .antecedent
                .iter()
                .map(|c| c.attribute.as_str())
                .collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), rule.antecedent.len());
        }
    }
}
