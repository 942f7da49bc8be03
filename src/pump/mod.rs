//! 펌프 성능곡선(50 Hz 기준) 가져오기, 열 식별, 상사법칙 주파수 환산.

pub mod columns;
pub mod curve;
pub mod table;

use thiserror::Error;

pub use columns::{resolve_columns, ColumnMap, ColumnRole, MatchRule, RoleRules, DEFAULT_RULES};
pub use curve::{curve_family, PumpCurve, PumpCurvePoint, REFERENCE_FREQUENCY_HZ};
pub use table::{template_table, PumpCurveTable};

/// 펌프 곡선 가져오기/환산 오류.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("필수 열을 찾을 수 없습니다: {}", format_roles(.missing))]
    ColumnsNotFound { missing: Vec<ColumnRole> },
    #[error("{row}행 '{column}' 값이 숫자가 아닙니다: '{value}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
    #[error("CSV 오류: {0}")]
    Csv(#[from] csv::Error),
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
}

fn format_roles(roles: &[ColumnRole]) -> String {
    roles
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
