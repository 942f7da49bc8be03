use serde::Serialize;

use super::friction::{friction_factor, FrictionSolution};

/// 층류 상한 레이놀즈수 (마찰계수 분기 및 층류 표시 기준)
pub const LAMINAR_LIMIT: f64 = 2000.0;
/// 난류 표시 하한 레이놀즈수
pub const TURBULENT_LIMIT: f64 = 4000.0;

/// 유동 영역 표시.
///
/// 2000 ≤ Re ≤ 4000 구간은 `Transition`으로 표시되지만 마찰계수는
/// Colebrook-White 반복해로 계산된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlowRegime {
    Laminar,
    Transition,
    Turbulent,
}

impl FlowRegime {
    pub fn from_reynolds(reynolds: f64) -> Self {
        if reynolds > TURBULENT_LIMIT {
            FlowRegime::Turbulent
        } else if reynolds < LAMINAR_LIMIT {
            FlowRegime::Laminar
        } else {
            FlowRegime::Transition
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlowRegime::Laminar => "Laminar",
            FlowRegime::Transition => "Transition",
            FlowRegime::Turbulent => "Turbulent",
        }
    }
}

/// 유속/마찰 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowCharacteristics {
    /// 단면적 [m²]
    pub section_m2: f64,
    /// 평균 유속 [m/s]
    pub velocity_m_s: f64,
    pub reynolds: f64,
    /// 상대 조도 ε/D
    pub relative_roughness: f64,
    pub friction: FrictionSolution,
    pub regime: FlowRegime,
}

/// 단면적 A = πD²/4
pub fn section_area(diameter_m: f64) -> f64 {
    std::f64::consts::PI * diameter_m * diameter_m / 4.0
}

/// 평균 유속. 단면적이 0이면 0을 반환한다.
pub fn velocity(flow_m3_s: f64, section_m2: f64) -> f64 {
    if section_m2 == 0.0 {
        return 0.0;
    }
    flow_m3_s / section_m2
}

/// 레이놀즈수. 동점도가 0이면 0을 반환한다.
pub fn reynolds_number(velocity_m_s: f64, diameter_m: f64, kinematic_viscosity_m2_s: f64) -> f64 {
    if kinematic_viscosity_m2_s == 0.0 {
        return 0.0;
    }
    velocity_m_s * diameter_m / kinematic_viscosity_m2_s
}

/// 상대 조도. 직경이 0이면 0을 반환한다.
pub fn relative_roughness(roughness_m: f64, diameter_m: f64) -> f64 {
    if diameter_m == 0.0 {
        return 0.0;
    }
    roughness_m / diameter_m
}

/// 단면, 유속, Re, 상대조도, 마찰계수를 한 번에 계산한다.
pub fn solve_flow(
    flow_m3_s: f64,
    diameter_m: f64,
    roughness_m: f64,
    kinematic_viscosity_m2_s: f64,
) -> FlowCharacteristics {
    let section_m2 = section_area(diameter_m);
    let velocity_m_s = velocity(flow_m3_s, section_m2);
    let reynolds = reynolds_number(velocity_m_s, diameter_m, kinematic_viscosity_m2_s);
    let relative_roughness = relative_roughness(roughness_m, diameter_m);
    let friction = friction_factor(reynolds, relative_roughness);

    FlowCharacteristics {
        section_m2,
        velocity_m_s,
        reynolds,
        relative_roughness,
        friction,
        regime: FlowRegime::from_reynolds(reynolds),
    }
}
