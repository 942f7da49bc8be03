//! 입력 스냅샷에서 결과 레코드까지 전체 계산 순서를 묶는다.
//!
//! 물성 보정 → 유속/마찰 → 수두손실 → NPSH·동력·수격 순으로 진행한다.
//! 입력은 읽기만 하고 매 호출마다 새 결과를 만든다.

use tracing::debug;

use crate::error::CalcError;
use crate::fluid::{correct_properties, FluidProperties};
use crate::hydraulics::flow::{solve_flow, FlowCharacteristics};
use crate::hydraulics::head_loss::{self, HeadLossBreakdown, SuctionSingularPolicy};
use crate::hydraulics::npsh::{self, NpshResult};
use crate::hydraulics::power::{hydraulic_power_kw, power_chain, PowerResult};
use crate::hydraulics::water_hammer::{self, WaterHammerInput, WaterHammerResult};
use crate::params::{Geometry, Parameters};
use crate::reference::{find_fluid, find_material};
use crate::units::flow::m3h_to_m3s;

/// 한 번의 계산 결과 전체.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub flow_m3_per_h: f64,
    pub flow_m3_s: f64,
    pub diameter_m: f64,
    /// 재질 절대 조도 [m]
    pub roughness_m: f64,
    pub fluid: FluidProperties,
    pub flow: FlowCharacteristics,
    pub losses: HeadLossBreakdown,
    pub npsh: NpshResult,
    pub power: PowerResult,
    pub water_hammer: WaterHammerResult,
    /// 비에너지 [Wh/m³] (유량 0이면 0)
    pub specific_energy_wh_m3: f64,
    pub geometry: Geometry,
}

impl ResultRecord {
    pub fn manometric_head_m(&self) -> f64 {
        self.losses.manometric_head_m
    }
}

/// 파라미터 스냅샷으로 전체 계산을 수행한다.
///
/// 참조 테이블에 없는 재질/유체/국부손실 키만 오류로 반환한다.
pub fn calculate(
    params: &Parameters,
    suction_policy: SuctionSingularPolicy,
) -> Result<ResultRecord, CalcError> {
    let pipe = &params.pipe;
    let op = &params.operating;
    let geometry = &params.geometry;

    let material = find_material(&pipe.material)
        .ok_or_else(|| CalcError::UnknownMaterial(pipe.material.clone()))?;
    let fluid_data =
        find_fluid(&op.fluid).ok_or_else(|| CalcError::UnknownFluid(op.fluid.clone()))?;

    let flow_m3_s = m3h_to_m3s(op.flow_m3_per_h);
    let fluid = correct_properties(fluid_data, op.temperature_c);
    debug!(
        density = fluid.density_kg_m3,
        viscosity = fluid.kinematic_viscosity_m2_s,
        vapor_pressure = fluid.vapor_pressure_pa,
        "fluid properties corrected"
    );

    let flow = solve_flow(
        flow_m3_s,
        pipe.diameter_m,
        material.roughness_m,
        fluid.kinematic_viscosity_m2_s,
    );
    debug!(
        velocity = flow.velocity_m_s,
        reynolds = flow.reynolds,
        friction_factor = flow.friction.factor,
        iterations = flow.friction.iterations,
        regime = flow.regime.label(),
        "flow solved"
    );

    let details = head_loss::singular_loss_details(&params.singular_losses, flow.velocity_m_s)?;
    let losses = head_loss::accumulate(
        flow.friction.factor,
        pipe.diameter_m,
        flow.velocity_m_s,
        geometry,
        details,
        suction_policy,
    );
    debug!(
        total = losses.total_m,
        suction = losses.suction_total_m,
        hmt = losses.manometric_head_m,
        "head losses accumulated"
    );

    let npsh = npsh::evaluate(
        op.upstream_pressure_pa,
        fluid.vapor_pressure_pa,
        fluid.density_kg_m3,
        geometry.suction_static_head_m,
        losses.suction_total_m,
        op.npsh_required_m,
    );

    let hydraulic_kw = hydraulic_power_kw(fluid.density_kg_m3, flow_m3_s, losses.manometric_head_m);
    let power = power_chain(
        hydraulic_kw,
        op.mechanical_efficiency,
        op.electrical_efficiency,
    );

    let water_hammer = water_hammer::estimate(WaterHammerInput {
        bulk_modulus_pa: fluid.bulk_modulus_pa,
        density_kg_m3: fluid.density_kg_m3,
        diameter_m: pipe.diameter_m,
        wall_thickness_m: pipe.wall_thickness_m,
        young_modulus_pa: pipe.young_modulus_pa,
        discharge_length_m: geometry.discharge_length_m,
        section_m2: flow.section_m2,
        velocity_m_s: flow.velocity_m_s,
    });
    debug!(
        npsh_available = npsh.available_m,
        electrical_kw = power.electrical_kw,
        surge_pa = water_hammer.surge_pa,
        "derived quantities computed"
    );

    let specific_energy_wh_m3 = if op.flow_m3_per_h > 0.0 {
        power.electrical_kw / op.flow_m3_per_h * 1000.0
    } else {
        0.0
    };

    Ok(ResultRecord {
        flow_m3_per_h: op.flow_m3_per_h,
        flow_m3_s,
        diameter_m: pipe.diameter_m,
        roughness_m: material.roughness_m,
        fluid,
        flow,
        losses,
        npsh,
        power,
        water_hammer,
        specific_energy_wh_m3,
        geometry: geometry.clone(),
    })
}
