use tracing::debug;

use super::columns::{resolve_columns, RoleRules};
use super::table::PumpCurveTable;
use super::CurveError;

/// 가져온 성능곡선의 기준 주파수 [Hz]
pub const REFERENCE_FREQUENCY_HZ: f64 = 50.0;

/// 성능곡선 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PumpCurvePoint {
    /// 유량 [m³/h]
    pub flow_m3_per_h: f64,
    /// 양정 [m]
    pub head_m: f64,
    /// 축동력 [kW]
    pub power_kw: Option<f64>,
    /// 효율 [%]
    pub efficiency_pct: Option<f64>,
}

/// 특정 구동 주파수에서의 펌프 성능곡선.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpCurve {
    pub frequency_hz: f64,
    pub points: Vec<PumpCurvePoint>,
}

impl PumpCurve {
    /// 50 Hz 기준 빈 곡선.
    pub fn empty() -> Self {
        Self {
            frequency_hz: REFERENCE_FREQUENCY_HZ,
            points: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 50 Hz 표에서 곡선을 만든다.
    ///
    /// 행이 없으면 빈 곡선을 돌려준다. 행이 있는데 유량/양정 열을 찾지 못하면
    /// `CurveError::ColumnsNotFound`를 반환한다.
    pub fn from_table(table: &PumpCurveTable, rules: &[RoleRules]) -> Result<Self, CurveError> {
        if table.rows.is_empty() {
            return Ok(Self::empty());
        }
        let map = resolve_columns(&table.headers, rules)?;
        debug!(?map, "pump curve columns resolved");
        let points = table
            .rows
            .iter()
            .map(|row| {
                let cell = |i: usize| row.get(i).copied().unwrap_or(f64::NAN);
                PumpCurvePoint {
                    flow_m3_per_h: cell(map.flow),
                    head_m: cell(map.head),
                    power_kw: map.power.map(cell),
                    efficiency_pct: map.efficiency.map(cell),
                }
            })
            .collect();
        Ok(Self {
            frequency_hz: REFERENCE_FREQUENCY_HZ,
            points,
        })
    }

    /// 유량 오름차순으로 정렬한 사본.
    pub fn sorted_by_flow(&self) -> Self {
        let mut points = self.points.clone();
        points.sort_by(|a, b| a.flow_m3_per_h.total_cmp(&b.flow_m3_per_h));
        Self {
            frequency_hz: self.frequency_hz,
            points,
        }
    }

    /// 원심펌프 상사법칙으로 다른 주파수의 곡선을 만든다.
    ///
    /// r = f/f₀ 일 때 유량 × r, 양정 × r², 동력 × r³, 효율은 그대로.
    pub fn scale_to_frequency(&self, target_hz: f64) -> Self {
        let r = target_hz / self.frequency_hz;
        let points = self
            .points
            .iter()
            .map(|p| PumpCurvePoint {
                flow_m3_per_h: p.flow_m3_per_h * r,
                head_m: p.head_m * r * r,
                power_kw: p.power_kw.map(|pw| pw * r.powi(3)),
                efficiency_pct: p.efficiency_pct,
            })
            .collect();
        Self {
            frequency_hz: target_hz,
            points,
        }
    }

    /// 곡선을 표 형태로 변환한다. 동력/효율이 전혀 없으면 해당 열은 생략한다.
    pub fn to_table(&self) -> PumpCurveTable {
        let has_power = self.points.iter().any(|p| p.power_kw.is_some());
        let has_eff = self.points.iter().any(|p| p.efficiency_pct.is_some());

        let mut headers = vec!["Flow (m3/h)".to_string(), "Head (m)".to_string()];
        if has_power {
            headers.push("Power (kW)".into());
        }
        if has_eff {
            headers.push("Efficiency (%)".into());
        }
        let rows = self
            .points
            .iter()
            .map(|p| {
                let mut row = vec![p.flow_m3_per_h, p.head_m];
                if has_power {
                    row.push(p.power_kw.unwrap_or(f64::NAN));
                }
                if has_eff {
                    row.push(p.efficiency_pct.unwrap_or(f64::NAN));
                }
                row
            })
            .collect();
        PumpCurveTable { headers, rows }
    }
}

/// 여러 주파수에 대한 곡선 묶음 (차트 표시용).
pub fn curve_family(curve: &PumpCurve, frequencies_hz: &[f64]) -> Vec<PumpCurve> {
    frequencies_hz
        .iter()
        .map(|&f| curve.scale_to_frequency(f).sorted_by_flow())
        .collect()
}
