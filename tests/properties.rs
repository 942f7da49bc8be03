//! 수치 계산의 순서/단조성 성질 검사.
use approx::relative_eq;
use proptest::prelude::*;
use pump_hydraulics_toolbox::hydraulics::{
    flow::solve_flow,
    friction::friction_factor,
    head_loss::linear_loss,
    npsh::npsh_available,
    power::power_chain,
    water_hammer::wave_celerity,
};
use pump_hydraulics_toolbox::pump::{PumpCurve, PumpCurvePoint};

proptest! {
    #[test]
    fn laminar_factor_is_64_over_re(re in 1.0_f64..1999.0, rr in 0.0_f64..0.05) {
        let sol = friction_factor(re, rr);
        prop_assert_eq!(sol.factor, 64.0 / re);
        prop_assert_eq!(sol.iterations, 0);
    }

    #[test]
    fn power_increases_along_chain(
        hyd in 0.01_f64..5000.0,
        eta_m in 0.05_f64..0.999,
        eta_e in 0.05_f64..0.999,
    ) {
        let p = power_chain(hyd, eta_m, eta_e);
        prop_assert!(p.hydraulic_kw < p.mechanical_kw);
        prop_assert!(p.mechanical_kw < p.electrical_kw);
    }

    #[test]
    fn npsh_available_is_never_negative(
        p_up in 0.0_f64..500_000.0,
        p_vap in 0.0_f64..900_000.0,
        rho in 500.0_f64..1500.0,
        static_head in -30.0_f64..30.0,
        losses in 0.0_f64..100.0,
    ) {
        prop_assert!(npsh_available(p_up, p_vap, rho, static_head, losses) >= 0.0);
    }

    #[test]
    fn larger_diameter_lowers_velocity_reynolds_and_loss(
        d in 0.03_f64..0.4,
        k in 1.05_f64..2.0,
    ) {
        let small = solve_flow(0.01, d, 4.5e-5, 1.004e-6);
        let large = solve_flow(0.01, d * k, 4.5e-5, 1.004e-6);
        prop_assert!(large.velocity_m_s < small.velocity_m_s);
        prop_assert!(large.reynolds < small.reynolds);
        let loss_small = linear_loss(small.friction.factor, 100.0, d, small.velocity_m_s);
        let loss_large = linear_loss(large.friction.factor, 100.0, d * k, large.velocity_m_s);
        prop_assert!(loss_large < loss_small);
    }

    #[test]
    fn celerity_grows_with_wall_thickness(e in 0.001_f64..0.02, k in 1.1_f64..3.0) {
        let thin = wave_celerity(2.15e9, 998.2, 0.1, 200e9, e);
        let thick = wave_celerity(2.15e9, 998.2, 0.1, 200e9, e * k);
        prop_assert!(thin < thick);
    }

    #[test]
    fn scaling_there_and_back_restores_curve(
        target in 20.0_f64..60.0,
        q in 0.0_f64..200.0,
        h in 0.0_f64..150.0,
    ) {
        let curve = PumpCurve {
            frequency_hz: 50.0,
            points: vec![PumpCurvePoint {
                flow_m3_per_h: q,
                head_m: h,
                power_kw: Some(10.0),
                efficiency_pct: Some(70.0),
            }],
        };
        let back = curve.scale_to_frequency(target).scale_to_frequency(50.0);
        let p = back.points[0];
        prop_assert!(relative_eq!(p.flow_m3_per_h, q, epsilon = 1e-9, max_relative = 1e-9));
        prop_assert!(relative_eq!(p.head_m, h, epsilon = 1e-9, max_relative = 1e-9));
        prop_assert_eq!(p.efficiency_pct, Some(70.0));
    }
}
