use super::G;

/// 동력 계산 결과 [kW].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerResult {
    pub hydraulic_kw: f64,
    /// 축동력 = 수동력 / 기계효율
    pub mechanical_kw: f64,
    /// 전기 입력 = 축동력 / 전기효율
    pub electrical_kw: f64,
}

/// 수동력 ρ·g·Q·H [kW]
pub fn hydraulic_power_kw(density_kg_m3: f64, flow_m3_s: f64, head_m: f64) -> f64 {
    density_kg_m3 * G * flow_m3_s * head_m / 1000.0
}

/// 수동력에서 축동력, 전기 입력을 구한다.
///
/// 효율은 (0, 1] 범위로 입력 단계에서 검증되어 있어야 한다. 0이면 무한대가 된다.
pub fn power_chain(hydraulic_kw: f64, mechanical_efficiency: f64, electrical_efficiency: f64) -> PowerResult {
    let mechanical_kw = hydraulic_kw / mechanical_efficiency;
    let electrical_kw = mechanical_kw / electrical_efficiency;
    PowerResult {
        hydraulic_kw,
        mechanical_kw,
        electrical_kw,
    }
}
