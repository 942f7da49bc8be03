/// 유체별 20°C 기준 물성 테이블.

/// 온도에 따른 증기압 보정 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaporPressureModel {
    /// 물 전용 Magnus/Antoine 형 폐형식 `610.94·exp(17.625·T/(T+243.04))`
    WaterAntoine,
    /// 20°C 값에 `exp(0.05·ΔT)`를 곱하는 지수 근사
    Exponential,
}

#[derive(Debug)]
pub struct FluidData {
    pub code: &'static str,
    pub name: &'static str,
    /// 밀도 [kg/m³] @20°C
    pub density_20c: f64,
    /// 동점도 [m²/s] @20°C
    pub kinematic_viscosity_20c: f64,
    /// 증기압 [Pa] @20°C
    pub vapor_pressure_20c_pa: f64,
    /// 밀도 선형 온도계수 [1/K]
    pub temperature_coefficient: f64,
    /// 체적 탄성계수 K [Pa]
    pub bulk_modulus_pa: f64,
    pub vapor_pressure_model: VaporPressureModel,
}

pub fn fluids() -> &'static [FluidData] {
    FLUIDS
}

pub fn find_fluid(key: &str) -> Option<&'static FluidData> {
    FLUIDS
        .iter()
        .find(|f| super::matches_key(f.code, f.name, key))
}

const FLUIDS: &[FluidData] = &[
    FluidData {
        code: "water",
        name: "Water",
        density_20c: 998.2,
        kinematic_viscosity_20c: 1.004e-6,
        vapor_pressure_20c_pa: 2337.0,
        temperature_coefficient: 0.0002,
        bulk_modulus_pa: 2.15e9,
        vapor_pressure_model: VaporPressureModel::WaterAntoine,
    },
    FluidData {
        code: "glycol_water_30",
        name: "Glycol water 30%",
        density_20c: 1050.0,
        kinematic_viscosity_20c: 2.5e-6,
        vapor_pressure_20c_pa: 2337.0,
        temperature_coefficient: 0.0003,
        bulk_modulus_pa: 2.5e9,
        vapor_pressure_model: VaporPressureModel::Exponential,
    },
    FluidData {
        code: "light_fuel_oil",
        name: "Light fuel oil",
        density_20c: 850.0,
        kinematic_viscosity_20c: 3.0e-6,
        vapor_pressure_20c_pa: 500.0,
        temperature_coefficient: 0.0007,
        bulk_modulus_pa: 1.5e9,
        vapor_pressure_model: VaporPressureModel::Exponential,
    },
    FluidData {
        code: "hydraulic_oil",
        name: "Hydraulic oil",
        density_20c: 870.0,
        kinematic_viscosity_20c: 46.0e-6,
        vapor_pressure_20c_pa: 100.0,
        temperature_coefficient: 0.0006,
        bulk_modulus_pa: 1.8e9,
        vapor_pressure_model: VaporPressureModel::Exponential,
    },
    FluidData {
        code: "ammonia",
        name: "Ammonia",
        density_20c: 610.0,
        kinematic_viscosity_20c: 0.36e-6,
        vapor_pressure_20c_pa: 857000.0,
        temperature_coefficient: 0.0025,
        bulk_modulus_pa: 1.2e9,
        vapor_pressure_model: VaporPressureModel::Exponential,
    },
];
