use serde::Serialize;

use super::G;

/// 여유가 충분하다고 보는 NPSH 마진 하한 [m]
pub const SUFFICIENT_MARGIN_M: f64 = 0.5;

/// NPSH 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NpshStatus {
    Sufficient,
    Marginal,
    Insufficient,
}

impl NpshStatus {
    pub fn from_margin(margin_m: f64) -> Self {
        if margin_m >= SUFFICIENT_MARGIN_M {
            NpshStatus::Sufficient
        } else if margin_m >= 0.0 {
            NpshStatus::Marginal
        } else {
            NpshStatus::Insufficient
        }
    }
}

/// NPSH 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NpshResult {
    /// 사용 가능 NPSH [m], 0 이상
    pub available_m: f64,
    pub required_m: f64,
    /// NPSHa - NPSHr [m]
    pub margin_m: f64,
}

impl NpshResult {
    pub fn status(&self) -> NpshStatus {
        NpshStatus::from_margin(self.margin_m)
    }
}

/// 사용 가능 NPSH를 계산한다. 음수가 되면 0으로 자른다.
pub fn npsh_available(
    upstream_pressure_pa: f64,
    vapor_pressure_pa: f64,
    density_kg_m3: f64,
    static_suction_head_m: f64,
    suction_losses_m: f64,
) -> f64 {
    let pressure_head = (upstream_pressure_pa - vapor_pressure_pa) / (density_kg_m3 * G);
    (pressure_head + static_suction_head_m - suction_losses_m).max(0.0)
}

/// NPSHa와 요구 NPSH를 비교한다.
pub fn evaluate(
    upstream_pressure_pa: f64,
    vapor_pressure_pa: f64,
    density_kg_m3: f64,
    static_suction_head_m: f64,
    suction_losses_m: f64,
    required_m: f64,
) -> NpshResult {
    let available_m = npsh_available(
        upstream_pressure_pa,
        vapor_pressure_pa,
        density_kg_m3,
        static_suction_head_m,
        suction_losses_m,
    );
    NpshResult {
        available_m,
        required_m,
        margin_m: available_m - required_m,
    }
}
