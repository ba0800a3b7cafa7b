//! Deterministic cost/benefit scoring.
//!
//! # Responsibility
//! - Map raw `(cost, severity, frequency)` to benefit, cost and net scores.
//!
//! # Invariants
//! - Pure: no I/O, no state, same inputs always give the same scores.
//! - `cost_score >= 1` for every input, including zero, negative and
//!   non-finite costs.
//! - `log10(cost)` is rounded to nearest with ties to even
//!   (`f64::round_ties_even`), so `cost = 10^2.5` scores 3, not 4.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Derived scores for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    /// `severity + frequency`, unclamped.
    pub benefit_score: i64,
    /// Log-compressed cost penalty, never below 1.
    pub cost_score: i64,
    /// `benefit_score - cost_score`.
    pub net_score: i64,
}

impl Display for Scores {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "benefit={} cost={} net={}",
            self.benefit_score, self.cost_score, self.net_score
        )
    }
}

/// Scores one item.
///
/// Weights widen to `i64` before summing, so the benefit never overflows.
/// The net score saturates only for an infinite cost.
pub fn score(cost: f64, severity: i32, frequency: i32) -> Scores {
    let benefit_score = i64::from(severity) + i64::from(frequency);
    let cost_score = cost_score(cost);
    Scores {
        benefit_score,
        cost_score,
        net_score: benefit_score.saturating_sub(cost_score),
    }
}

/// Compresses a raw cost onto a small integer scale: `max(1, round(log10(cost)) + 1)`.
///
/// Costs of zero or below (and `NaN`) score 1. Each tenfold increase in
/// cost adds one point, so `$1 -> 1`, `$10 -> 2`, `$1000 -> 4`. An exact
/// half-step in `log10(cost)` rounds to the even neighbour.
pub fn cost_score(cost: f64) -> i64 {
    if cost.is_nan() || cost <= 0.0 {
        return 1;
    }

    let scaled = cost.log10().round_ties_even() + 1.0;
    if scaled < 1.0 {
        1
    } else {
        // `as` saturates, so `+inf` maps to `i64::MAX`.
        scaled as i64
    }
}

#[cfg(test)]
mod tests {
    use super::{cost_score, score, Scores};

    #[test]
    fn leaky_faucet_example_scores() {
        assert_eq!(
            score(50.0, 3, 5),
            Scores {
                benefit_score: 8,
                cost_score: 3,
                net_score: 5,
            }
        );
    }

    #[test]
    fn free_item_gets_minimum_cost_score() {
        assert_eq!(
            score(0.0, 2, 2),
            Scores {
                benefit_score: 4,
                cost_score: 1,
                net_score: 3,
            }
        );
    }

    #[test]
    fn expensive_item_can_go_negative() {
        assert_eq!(
            score(1000.0, 1, 1),
            Scores {
                benefit_score: 2,
                cost_score: 4,
                net_score: -2,
            }
        );
    }

    #[test]
    fn non_positive_costs_score_one() {
        for cost in [0.0, -0.0, -1.0, -1e9, f64::NEG_INFINITY, f64::NAN] {
            assert_eq!(cost_score(cost), 1, "cost={cost}");
        }
    }

    #[test]
    fn fractional_costs_are_floored_at_one() {
        for cost in [0.5, 0.1, 0.01, 1e-12, f64::MIN_POSITIVE] {
            assert_eq!(cost_score(cost), 1, "cost={cost}");
        }
    }

    #[test]
    fn each_order_of_magnitude_adds_one_point() {
        assert_eq!(cost_score(1.0), 1);
        assert_eq!(cost_score(10.0), 2);
        assert_eq!(cost_score(100.0), 3);
        assert_eq!(cost_score(1000.0), 4);
        assert_eq!(cost_score(1_000_000.0), 7);
    }

    #[test]
    fn log_is_rounded_to_nearest_integer() {
        // log10(3) ~ 0.477, log10(4) ~ 0.602
        assert_eq!(cost_score(3.0), 1);
        assert_eq!(cost_score(4.0), 2);
        assert_eq!(cost_score(300.0), 3);
        assert_eq!(cost_score(400.0), 4);
    }

    #[test]
    fn half_step_logs_round_to_even() {
        // Both costs have a log10 of exactly 0.5 and 2.5.
        assert_eq!(3.1622776601683795_f64.log10(), 0.5);
        assert_eq!(316.22776601683796_f64.log10(), 2.5);

        assert_eq!(cost_score(3.1622776601683795), 1);
        assert_eq!(cost_score(316.22776601683796), 3);
        assert_eq!(score(316.22776601683796, 3, 5).net_score, 5);
    }

    #[test]
    fn huge_costs_do_not_overflow() {
        assert_eq!(cost_score(f64::MAX), 309);
        assert_eq!(cost_score(f64::INFINITY), i64::MAX);

        let scores = score(f64::INFINITY, i32::MIN, i32::MIN);
        assert_eq!(scores.net_score, i64::MIN);
    }

    #[test]
    fn benefit_is_unclamped_sum_of_weights() {
        assert_eq!(score(1.0, -3, 1).benefit_score, -2);
        assert_eq!(
            score(1.0, i32::MAX, i32::MAX).benefit_score,
            2 * i64::from(i32::MAX)
        );
    }

    #[test]
    fn net_is_benefit_minus_cost_for_sampled_inputs() {
        let costs = [-5.0, 0.0, 0.3, 1.0, 7.5, 49.0, 51.0, 999.0, 12_345.678];
        for &cost in &costs {
            for severity in -2..=5 {
                for frequency in -2..=5 {
                    let scores = score(cost, severity, frequency);
                    assert!(scores.cost_score >= 1);
                    assert_eq!(
                        scores.net_score,
                        i64::from(severity + frequency) - scores.cost_score
                    );
                }
            }
        }
    }
}
