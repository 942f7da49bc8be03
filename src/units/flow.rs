use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 m³/s 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    CubicMeterPerHour,
    CubicMeterPerSecond,
    LiterPerSecond,
    LiterPerMinute,
}

impl FlowUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            FlowUnit::CubicMeterPerHour => "m³/h",
            FlowUnit::CubicMeterPerSecond => "m³/s",
            FlowUnit::LiterPerSecond => "L/s",
            FlowUnit::LiterPerMinute => "L/min",
        }
    }
}

fn to_m3_per_s(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerHour => value / 3600.0,
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::LiterPerSecond => value / 1000.0,
        FlowUnit::LiterPerMinute => value / 60_000.0,
    }
}

fn from_m3_per_s(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerHour => value * 3600.0,
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::LiterPerSecond => value * 1000.0,
        FlowUnit::LiterPerMinute => value * 60_000.0,
    }
}

/// 유량을 다른 단위로 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    let m3s = to_m3_per_s(value, from);
    from_m3_per_s(m3s, to)
}

/// m³/h 를 m³/s 로 변환한다.
pub fn m3h_to_m3s(value_m3_per_h: f64) -> f64 {
    convert_flow(
        value_m3_per_h,
        FlowUnit::CubicMeterPerHour,
        FlowUnit::CubicMeterPerSecond,
    )
}
