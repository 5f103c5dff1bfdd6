//! Rank correlation between model predictions and gold scores
//!
//! ## Spearman's rho
//!
//! Both sequences are ranked independently (tied values share the average of
//! the ranks they span), then the Pearson correlation of the two rank vectors
//! is taken. The result measures how monotonic the relationship is, which is
//! what a similarity benchmark cares about: a model only has to order the
//! pairs like the annotators did, not reproduce their scale.

use crate::datasets::Language;
use crate::embedders::SimilarityBackend;
use crate::error::{EvalError, EvalResult};
use crate::pairs::GoldPair;

/// Correlate backend predictions with the gold scores of `pairs`
///
/// The backend is called exactly once per pair, in order. If every prediction
/// is exactly zero (typically: every word was out of vocabulary) the result is
/// `0.0` and no ranking is done.
pub fn evaluate<B>(backend: &B, pairs: &[GoldPair], language: Language) -> EvalResult<f64>
where
    B: SimilarityBackend + ?Sized,
{
    let mut gold = Vec::with_capacity(pairs.len());
    let mut predicted = Vec::with_capacity(pairs.len());

    for pair in pairs {
        let score = backend
            .similarity(&pair.word1, &pair.word2, language)
            .map_err(EvalError::Similarity)?;

        if !score.is_finite() {
            return Err(EvalError::domain(format!(
                "non-finite similarity {} for ({}, {})",
                score, pair.word1, pair.word2
            )));
        }

        gold.push(pair.gold_score);
        predicted.push(score);
    }

    if predicted.iter().all(|&x| x == 0.0) {
        return Ok(0.0);
    }

    if predicted.windows(2).all(|w| w[0] == w[1]) {
        tracing::warn!(
            "All {} predictions equal {}; rank correlation is reported as 0",
            predicted.len(),
            predicted[0]
        );
    }

    spearman_correlation(&gold, &predicted)
}

/// Spearman rank correlation coefficient
///
/// Fails when the inputs differ in length or are empty. A side with no
/// variance (every value tied) yields `0.0`.
pub fn spearman_correlation(x: &[f64], y: &[f64]) -> EvalResult<f64> {
    if x.len() != y.len() {
        return Err(EvalError::domain(format!(
            "length mismatch: {} gold scores vs {} predictions",
            x.len(),
            y.len()
        )));
    }
    if x.is_empty() {
        return Err(EvalError::domain("cannot correlate empty sequences"));
    }

    let rank_x = rank_average_ties(x);
    let rank_y = rank_average_ties(y);

    Ok(pearson_correlation(&rank_x, &rank_y))
}

/// Assign 1-based ranks, averaging over ties
///
/// `[10.0, 20.0, 20.0, 5.0]` → `[2.0, 3.5, 3.5, 1.0]`
pub fn rank_average_ties(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        // Extend over the run of equal values
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }

        // Positions start..end hold ranks start+1..=end
        let avg_rank = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = avg_rank;
        }
        start = end;
    }

    ranks
}

/// Calculate Pearson correlation coefficient (0.0 if either side is constant)
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;

    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }

    // One sqrt over the product: identical rank vectors give exactly 1.0
    (cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0)
}
