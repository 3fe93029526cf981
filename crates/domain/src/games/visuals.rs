//! Cosmetic previews drawn next to scenario cards.
//!
//! Each game turns its scenario numbers (and the numeric value of the
//! highlighted choice, if any) into a handful of labelled bars.

use serde::{Deserialize, Serialize};

use crate::content::{PenaltyKind, ScenarioParams};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Height relative to the tallest bar, 0..=100
    pub height_pct: f64,
}

/// Scale raw values so the largest bar is 100% tall.
fn bars(values: Vec<(String, f64)>) -> Vec<Bar> {
    let max = values
        .iter()
        .map(|(_, v)| v.abs())
        .fold(0.0_f64, f64::max);
    values
        .into_iter()
        .map(|(label, value)| Bar {
            label,
            value,
            height_pct: if max > 0.0 {
                (value.abs() / max * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            },
        })
        .collect()
}

/// Shrink one coefficient under the given penalty strength.
pub fn shrink(coefficient: f64, lambda: f64, penalty: PenaltyKind) -> f64 {
    let lambda = lambda.max(0.0);
    match penalty {
        PenaltyKind::Ridge => coefficient / (1.0 + lambda),
        PenaltyKind::Lasso => coefficient.signum() * (coefficient.abs() - lambda).max(0.0),
    }
}

/// Rows on each side of a split for a train fraction in `0..=1`.
pub fn split_rows(data_size: u64, train_fraction: f64) -> (u64, u64) {
    let fraction = train_fraction.clamp(0.0, 1.0);
    let train = (data_size as f64 * fraction).round() as u64;
    (train, data_size - train.min(data_size))
}

/// Posterior mean when the prior counts as `strength` pseudo-observations.
pub fn posterior_mean(prior_mean: f64, sample_mean: f64, observations: u32, strength: f64) -> f64 {
    let n = f64::from(observations);
    let k = strength.max(0.0);
    if n + k == 0.0 {
        return prior_mean;
    }
    (n * sample_mean + k * prior_mean) / (n + k)
}

/// Bars for a scenario, optionally previewing a choice's numeric value.
pub fn preview(params: &ScenarioParams, choice_value: Option<f64>) -> Vec<Bar> {
    match params {
        ScenarioParams::BiasVariance {
            train_error,
            test_error,
        } => bars(vec![
            ("Train error".to_string(), *train_error),
            ("Test error".to_string(), *test_error),
        ]),
        ScenarioParams::Regularization {
            penalty,
            coefficients,
        } => {
            let lambda = choice_value.unwrap_or(0.0);
            let max = coefficients.iter().map(|c| c.abs()).fold(0.0_f64, f64::max);
            coefficients
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let value = shrink(*c, lambda, *penalty);
                    Bar {
                        label: format!("β{}", i + 1),
                        value,
                        // Relative to the unshrunk maximum so shrinkage is visible
                        height_pct: if max > 0.0 {
                            value.abs() / max * 100.0
                        } else {
                            0.0
                        },
                    }
                })
                .collect()
        }
        ScenarioParams::TrainTestSplit { data_size } => {
            let (train, test) = split_rows(*data_size, choice_value.unwrap_or(0.8));
            bars(vec![
                ("Train rows".to_string(), train as f64),
                ("Test rows".to_string(), test as f64),
            ])
        }
        ScenarioParams::CrossValidation {
            data_size,
            fit_seconds,
        } => {
            let k = choice_value.unwrap_or(5.0).max(2.0);
            let fold = (*data_size as f64 / k).floor();
            bars(vec![
                ("Rows per fold".to_string(), fold),
                ("Training rows per fit".to_string(), *data_size as f64 - fold),
                ("Total fit seconds".to_string(), k * fit_seconds),
            ])
        }
        ScenarioParams::BayesianPrior {
            prior_mean,
            sample_mean,
            observations,
        } => {
            let strength = choice_value.unwrap_or(0.0);
            bars(vec![
                ("Prior mean".to_string(), *prior_mean),
                ("Data mean".to_string(), *sample_mean),
                (
                    "Posterior mean".to_string(),
                    posterior_mean(*prior_mean, *sample_mean, *observations, strength),
                ),
            ])
        }
        ScenarioParams::DataLeakage { .. } | ScenarioParams::PipelineOrder { .. } => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ridge_shrinks_proportionally() {
        assert_eq!(shrink(4.0, 1.0, PenaltyKind::Ridge), 2.0);
        assert_eq!(shrink(-4.0, 3.0, PenaltyKind::Ridge), -1.0);
    }

    #[test]
    fn lasso_zeroes_small_coefficients() {
        assert_eq!(shrink(0.5, 1.0, PenaltyKind::Lasso), 0.0);
        assert_eq!(shrink(-3.0, 1.0, PenaltyKind::Lasso), -2.0);
    }

    #[test]
    fn split_rows_covers_every_row() {
        assert_eq!(split_rows(1_000_000, 0.95), (950_000, 50_000));
        assert_eq!(split_rows(100, 0.8), (80, 20));
        assert_eq!(split_rows(10, 1.5), (10, 0));
    }

    #[test]
    fn posterior_moves_toward_prior_with_strength() {
        let weak = posterior_mean(0.0, 10.0, 10, 0.0);
        let strong = posterior_mean(0.0, 10.0, 10, 10.0);
        assert_eq!(weak, 10.0);
        assert_eq!(strong, 5.0);
    }

    #[test]
    fn bias_variance_bars_scale_to_tallest() {
        let bars = preview(
            &ScenarioParams::BiasVariance {
                train_error: 2.0,
                test_error: 25.0,
            },
            None,
        );
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].height_pct, 100.0);
        assert!((bars[0].height_pct - 8.0).abs() < 1e-9);
    }

    #[test]
    fn leakage_has_no_bars() {
        let params = ScenarioParams::DataLeakage { steps: vec![] };
        assert!(preview(&params, None).is_empty());
    }
}
