//! Algebraic properties of the calculator over generated inputs.

use proptest::prelude::*;
use roi_core::{
    calculator::{benefit, compute, roi_percent, total_cost},
    inputs::{BenefitInputs, CostInputs, ScenarioMultipliers},
};

fn money() -> impl Strategy<Value = f64> {
    0.0..1_000_000.0f64
}

fn costs() -> impl Strategy<Value = CostInputs> {
    (money(), money(), money(), money(), money()).prop_map(|(s, i, t, m, o)| CostInputs {
        software_cost: s,
        implementation_cost: i,
        training_cost: t,
        maintenance_cost: m,
        other_costs: o,
    })
}

fn benefits() -> impl Strategy<Value = BenefitInputs> {
    (0.0..40.0f64, 0u64..100_000, 0.0..500.0f64, money(), money()).prop_map(
        |(h, n, rate, err, uplift)| BenefitInputs {
            time_saved_hours: h,
            tasks_automated: n,
            hourly_cost: rate,
            error_reduction: err,
            revenue_uplift: uplift,
        },
    )
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Summation order does not change the total beyond rounding.
    #[test]
    fn total_cost_is_order_independent(c in costs()) {
        let reversed = c.other_costs
            + c.maintenance_cost
            + c.training_cost
            + c.implementation_cost
            + c.software_cost;
        prop_assert!(close(total_cost(&c), reversed));
    }

    #[test]
    fn benefit_is_linear_in_multiplier(b in benefits(), m in 0.5..2.0f64, k in 0.1..4.0f64) {
        prop_assert!(close(benefit(&b, m * k), benefit(&b, m) * k));
    }

    #[test]
    fn roi_increases_with_benefit(
        a in money(),
        delta in 0.0..1_000_000.0f64,
        cost in 1.0..1_000_000.0f64
    ) {
        let low = roi_percent(a, cost).unwrap();
        let high = roi_percent(a + delta, cost).unwrap();
        prop_assert!(high >= low);
    }

    /// With in-range multipliers, best >= base >= worst.
    #[test]
    fn scenarios_are_ordered(
        c in costs(),
        b in benefits(),
        best in 1.0..=2.0f64,
        worst in 0.5..=1.0f64
    ) {
        prop_assume!(total_cost(&c) > 0.0);
        prop_assume!(benefit(&b, 1.0) > 0.0);

        let r = compute(&c, &b, &ScenarioMultipliers::new(best, worst)).unwrap();
        prop_assert!(r.benefit_best() >= r.benefit_base());
        prop_assert!(r.benefit_base() >= r.benefit_worst());
        prop_assert!(r.roi_best() >= r.roi_base());
        prop_assert!(r.roi_base() >= r.roi_worst());
        prop_assert!(r.payback_period_years().is_finite());
    }

    #[test]
    fn compute_is_deterministic(c in costs(), b in benefits()) {
        prop_assume!(total_cost(&c) > 0.0);
        prop_assume!(benefit(&b, 1.0) > 0.0);

        let m = ScenarioMultipliers::default();
        prop_assert_eq!(compute(&c, &b, &m).unwrap(), compute(&c, &b, &m).unwrap());
    }
}
