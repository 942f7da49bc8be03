//! 운전 온도에 맞춘 유체 물성 보정.

use crate::reference::{FluidData, VaporPressureModel};

/// 밀도 하한 [kg/m³]
pub const MIN_DENSITY: f64 = 500.0;
/// 동점도 하한 [m²/s]
pub const MIN_KINEMATIC_VISCOSITY: f64 = 0.1e-6;

const REFERENCE_TEMP_C: f64 = 20.0;

/// 보정된 유체 물성.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    /// 밀도 [kg/m³]
    pub density_kg_m3: f64,
    /// 동점도 [m²/s]
    pub kinematic_viscosity_m2_s: f64,
    /// 증기압 [Pa abs]
    pub vapor_pressure_pa: f64,
    /// 체적 탄성계수 [Pa]
    pub bulk_modulus_pa: f64,
}

/// 20°C 기준 물성을 운전 온도로 보정한다.
///
/// 극단적인 온도 외삽에서도 밀도와 점도는 하한값 아래로 내려가지 않는다.
pub fn correct_properties(fluid: &FluidData, temperature_c: f64) -> FluidProperties {
    let delta_t = temperature_c - REFERENCE_TEMP_C;

    let density = fluid.density_20c * (1.0 - fluid.temperature_coefficient * delta_t);
    let viscosity = fluid.kinematic_viscosity_20c * (-0.02 * delta_t).exp();
    let vapor_pressure = match fluid.vapor_pressure_model {
        VaporPressureModel::WaterAntoine => water_vapor_pressure_pa(temperature_c),
        VaporPressureModel::Exponential => fluid.vapor_pressure_20c_pa * (0.05 * delta_t).exp(),
    };

    FluidProperties {
        density_kg_m3: density.max(MIN_DENSITY),
        kinematic_viscosity_m2_s: viscosity.max(MIN_KINEMATIC_VISCOSITY),
        vapor_pressure_pa: vapor_pressure,
        bulk_modulus_pa: fluid.bulk_modulus_pa,
    }
}

/// 물의 포화증기압 [Pa abs].
fn water_vapor_pressure_pa(t_c: f64) -> f64 {
    610.94 * ((17.625 * t_c) / (t_c + 243.04)).exp()
}
