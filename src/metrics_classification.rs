//! Common metrics for performance evaluation of classifiers
//!
//! Scoring is essential for classification tasks. This module implements a
//! confusion matrix over optional predictions: a classifier that abstains
//! on a row reports `None`, which is never a correct answer but still
//! counts towards the total when accuracy is computed.
use std::collections::HashMap;
use std::hash::Hash;

use ndarray::{Array2, Axis};

/// Confusion matrix for multi-label evaluation
///
/// Rows correspond to the true labels and columns to the predicted labels;
/// diagonal entries are correct predictions. Abstained predictions are
/// tracked separately since they belong to no predicted class.
#[derive(Debug, Clone)]
pub struct ConfusionMatrix<L> {
    matrix: Array2<usize>,
    members: Vec<L>,
    unmatched: usize,
}

impl<L: Eq + Hash + Clone> ConfusionMatrix<L> {
    /// Builds the matrix from predictions and ground truth
    ///
    /// Class membership is collected in first-seen order, ground truth
    /// first, so two evaluations over the same data produce identically
    /// ordered matrices.
    ///
    /// # Panics
    ///
    /// If the number of predictions does not match the number of targets
    pub fn new(predicted: &[Option<L>], actual: &[L]) -> Self {
        assert_eq!(
            predicted.len(),
            actual.len(),
            "The number of predictions must match the number of targets."
        );

        let mut members = Vec::new();
        for label in actual.iter().chain(predicted.iter().flatten()) {
            if !members.contains(label) {
                members.push(label.clone());
            }
        }
        let index: HashMap<&L, usize> = members.iter().enumerate().map(|(i, l)| (l, i)).collect();

        let mut matrix = Array2::zeros((members.len(), members.len()));
        let mut unmatched = 0;
        for (prediction, truth) in predicted.iter().zip(actual.iter()) {
            match prediction {
                Some(label) => matrix[(index[truth], index[label])] += 1,
                None => unmatched += 1,
            }
        }

        ConfusionMatrix {
            matrix,
            members,
            unmatched,
        }
    }

    /// Classes tracked by the matrix in first-seen order
    pub fn members(&self) -> &[L] {
        &self.members
    }

    /// Number of predictions that abstained
    pub fn unmatched(&self) -> usize {
        self.unmatched
    }

    /// Total number of scored observations, abstentions included
    pub fn observations(&self) -> usize {
        self.matrix.sum() + self.unmatched
    }

    /// Return mean accuracy
    ///
    /// Abstentions count as incorrect. Returns `NaN` for an empty set of
    /// observations; callers that need a guarded value should check
    /// `observations()` first.
    pub fn accuracy(&self) -> f64 {
        let correct: usize = self.matrix.diag().sum();
        correct as f64 / self.observations() as f64
    }

    /// Calculate precision for every class
    pub fn precision(&self) -> Vec<f64> {
        let sum = self.matrix.sum_axis(Axis(0));
        self.matrix
            .diag()
            .iter()
            .zip(sum.iter())
            .map(|(a, b)| *a as f64 / *b as f64)
            .collect()
    }

    /// Calculate recall for every class
    pub fn recall(&self) -> Vec<f64> {
        let sum = self.matrix.sum_axis(Axis(1));
        self.matrix
            .diag()
            .iter()
            .zip(sum.iter())
            .map(|(a, b)| *a as f64 / *b as f64)
            .collect()
    }
}
