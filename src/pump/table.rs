use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::info;

use super::columns::{resolve_columns, RoleRules};
use super::curve::REFERENCE_FREQUENCY_HZ;
use super::CurveError;

/// 헤더와 숫자 행으로 이루어진 원시 펌프 곡선 표.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpCurveTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl PumpCurveTable {
    /// CSV를 읽는다. 첫 줄은 헤더이며 셀은 숫자 또는 빈칸(NaN)이어야 한다.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self, CurveError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for (row_idx, record) in csv_reader.records().enumerate() {
            let record = record?;
            let row = record
                .iter()
                .zip(&headers)
                .map(|(cell, column)| {
                    if cell.is_empty() {
                        return Ok(f64::NAN);
                    }
                    cell.parse::<f64>().map_err(|_| CurveError::InvalidNumber {
                        row: row_idx + 1,
                        column: column.clone(),
                        value: cell.to_string(),
                    })
                })
                .collect::<Result<Vec<f64>, _>>()?;
            rows.push(row);
        }
        Ok(Self { headers, rows })
    }

    pub fn from_path(path: &Path, delimiter: u8) -> Result<Self, CurveError> {
        let file = File::open(path)?;
        let table = Self::from_reader(file, delimiter)?;
        info!(path = %path.display(), rows = table.rows.len(), "pump curve imported");
        Ok(table)
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), CurveError> {
        let mut w = csv::Writer::from_writer(writer);
        w.write_record(&self.headers)?;
        for row in &self.rows {
            w.write_record(row.iter().map(|v| format_cell(*v)))?;
        }
        w.flush()?;
        Ok(())
    }

    /// 헤더는 그대로 두고 유량/양정/동력 열에 상사법칙을 적용한 새 표를 만든다.
    pub fn scaled(&self, target_hz: f64, rules: &[RoleRules]) -> Result<Self, CurveError> {
        if self.rows.is_empty() {
            return Ok(self.clone());
        }
        let map = resolve_columns(&self.headers, rules)?;
        let r = target_hz / REFERENCE_FREQUENCY_HZ;
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut out = row.clone();
                let mut scale = |i: usize, factor: f64| {
                    if let Some(v) = out.get_mut(i) {
                        *v *= factor;
                    }
                };
                scale(map.flow, r);
                scale(map.head, r * r);
                if let Some(i) = map.power {
                    scale(i, r.powi(3));
                }
                out
            })
            .collect();
        Ok(Self {
            headers: self.headers.clone(),
            rows,
        })
    }
}

fn format_cell(v: f64) -> String {
    if v.is_nan() {
        String::new()
    } else {
        format!("{v}")
    }
}

/// 펌프 곡선 가져오기용 CSV 템플릿 (고정 예시 값).
pub fn template_table() -> PumpCurveTable {
    const FLOW: [f64; 8] = [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0];
    const HEAD: [f64; 8] = [35.0, 34.0, 32.0, 29.0, 25.0, 20.0, 14.0, 7.0];
    const POWER: [f64; 8] = [5.2, 6.1, 7.0, 7.5, 7.8, 7.5, 6.8, 5.5];
    const EFFICIENCY: [f64; 8] = [0.0, 45.0, 62.0, 68.0, 70.0, 65.0, 55.0, 40.0];

    PumpCurveTable {
        headers: vec![
            "Flow (m3/h)".into(),
            "Head (m)".into(),
            "Power (kW)".into(),
            "Efficiency (%)".into(),
        ],
        rows: (0..FLOW.len())
            .map(|i| vec![FLOW[i], HEAD[i], POWER[i], EFFICIENCY[i]])
            .collect(),
    }
}
