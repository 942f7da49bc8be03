//! 전체 계산 흐름 통합 테스트 (기본 설치 조건 기준).
use approx::assert_relative_eq;
use pump_hydraulics_toolbox::{
    calculation::calculate,
    error::CalcError,
    hydraulics::{FlowRegime, SuctionSingularPolicy, SurgeRisk},
    params::{Parameters, Placement, SingularLossInstance},
    system_curve::system_curve,
};

#[test]
fn reference_installation() {
    let params = Parameters::default();
    let res = calculate(&params, SuctionSingularPolicy::HalfOfTotal).expect("calc");

    assert_relative_eq!(res.flow_m3_s, 0.01, epsilon = 1e-12);
    assert_relative_eq!(res.fluid.density_kg_m3, 998.2, epsilon = 1e-9);
    assert_relative_eq!(res.flow.velocity_m_s, 1.2732, epsilon = 1e-3);
    assert_eq!(res.flow.regime, FlowRegime::Turbulent);
    assert!(res.losses.linear_total_m > 1.0 && res.losses.linear_total_m < 2.0);
    assert_relative_eq!(
        res.manometric_head_m(),
        5.0 + res.losses.total_m,
        epsilon = 1e-12
    );
    assert!(res.power.hydraulic_kw < res.power.mechanical_kw);
    assert!(res.power.mechanical_kw < res.power.electrical_kw);
    assert!(res.npsh.available_m > 11.0 && res.npsh.available_m < 12.5);
    assert_relative_eq!(res.water_hammer.celerity_m_s, 1331.0, epsilon = 5.0);
    assert_eq!(res.water_hammer.risk(), SurgeRisk::High);
}

#[test]
fn repeated_runs_are_identical() {
    let params = Parameters::default();
    let a = calculate(&params, SuctionSingularPolicy::HalfOfTotal).expect("calc");
    let b = calculate(&params, SuctionSingularPolicy::HalfOfTotal).expect("calc");
    assert_eq!(a, b);
}

#[test]
fn specific_energy_follows_electrical_power() {
    let res = calculate(&Parameters::default(), SuctionSingularPolicy::default()).expect("calc");
    assert_relative_eq!(
        res.specific_energy_wh_m3,
        res.power.electrical_kw / 36.0 * 1000.0,
        epsilon = 1e-9
    );

    let mut still = Parameters::default();
    still.operating.flow_m3_per_h = 0.0;
    let res = calculate(&still, SuctionSingularPolicy::default()).expect("calc");
    assert_eq!(res.specific_energy_wh_m3, 0.0);
    assert_eq!(res.flow.friction.factor, 0.0);
    assert_eq!(res.power.hydraulic_kw, 0.0);
}

#[test]
fn unknown_references_are_errors() {
    let mut params = Parameters::default();
    params.pipe.material = "unobtanium".into();
    assert_eq!(
        calculate(&params, SuctionSingularPolicy::default()),
        Err(CalcError::UnknownMaterial("unobtanium".into()))
    );

    let mut params = Parameters::default();
    params.operating.fluid = "mercury".into();
    assert_eq!(
        calculate(&params, SuctionSingularPolicy::default()),
        Err(CalcError::UnknownFluid("mercury".into()))
    );

    let mut params = Parameters::default();
    params.singular_losses.push(SingularLossInstance {
        fitting: "flux_capacitor".into(),
        quantity: 1,
        placement: Placement::Discharge,
    });
    assert_eq!(
        calculate(&params, SuctionSingularPolicy::default()),
        Err(CalcError::UnknownFitting("flux_capacitor".into()))
    );
}

#[test]
fn suction_policy_changes_only_suction_side() {
    let mut params = Parameters::default();
    params.singular_losses = vec![
        SingularLossInstance {
            fitting: "strainer".into(),
            quantity: 1,
            placement: Placement::Suction,
        },
        SingularLossInstance {
            fitting: "check_valve".into(),
            quantity: 1,
            placement: Placement::Discharge,
        },
        SingularLossInstance {
            fitting: "Gate valve fully open".into(),
            quantity: 2,
            placement: Placement::Discharge,
        },
    ];
    let half = calculate(&params, SuctionSingularPolicy::HalfOfTotal).expect("calc");
    let tagged = calculate(&params, SuctionSingularPolicy::TaggedSuction).expect("calc");

    assert_eq!(half.losses.total_m, tagged.losses.total_m);
    assert_eq!(half.power, tagged.power);
    assert_eq!(tagged.losses.suction_policy, SuctionSingularPolicy::TaggedSuction);

    // 흡입측은 strainer(K=2.0)만, half는 전체 K=4.9의 절반
    let vh = half.losses.singular_total_m / 4.9;
    assert_relative_eq!(half.losses.singular_suction_m, 2.45 * vh, epsilon = 1e-9);
    assert_relative_eq!(tagged.losses.singular_suction_m, 2.0 * vh, epsilon = 1e-9);
    assert!(tagged.npsh.available_m > half.npsh.available_m);
}

#[test]
fn larger_diameter_lowers_losses() {
    let mut small = Parameters::default();
    small.pipe.diameter_m = 0.08;
    let mut large = Parameters::default();
    large.pipe.diameter_m = 0.15;

    let s = calculate(&small, SuctionSingularPolicy::default()).expect("calc");
    let l = calculate(&large, SuctionSingularPolicy::default()).expect("calc");
    assert!(l.flow.velocity_m_s < s.flow.velocity_m_s);
    assert!(l.flow.reynolds < s.flow.reynolds);
    assert!(l.losses.total_m < s.losses.total_m);
}

#[test]
fn system_curve_spans_twice_nominal_flow() {
    let res = calculate(&Parameters::default(), SuctionSingularPolicy::default()).expect("calc");
    let curve = system_curve(&res, 50);

    assert_eq!(curve.points.len(), 50);
    let first = curve.points[0];
    let last = curve.points[49];
    assert_relative_eq!(first.flow_m3_per_h, 0.1, epsilon = 1e-12);
    assert_relative_eq!(last.flow_m3_per_h, 72.0, epsilon = 1e-9);
    assert!(first.head_m > 5.0 && first.head_m < 5.01);
    // 2배 유량에서 직관 손실은 4배
    assert_relative_eq!(
        last.head_m - 5.0,
        4.0 * res.losses.linear_total_m,
        max_relative = 1e-9
    );
    assert!(curve.points.windows(2).all(|w| w[1].head_m > w[0].head_m));
    assert_eq!(curve.operating_point.flow_m3_per_h, 36.0);
    assert_eq!(curve.operating_point.head_m, res.manometric_head_m());
}
