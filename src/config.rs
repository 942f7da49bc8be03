use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::hydraulics::SuctionSingularPolicy;
use crate::units::{FlowUnit, LengthUnit, PressureUnit};

/// 보고서에 표시할 단위 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayUnits {
    pub flow: FlowUnit,
    pub pressure: PressureUnit,
    pub length: LengthUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            flow: FlowUnit::CubicMeterPerHour,
            pressure: PressureUnit::KiloPascal,
            length: LengthUnit::Millimeter,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/en/fr/ko)
    pub language: String,
    /// RUST_LOG가 없을 때 쓰는 로그 레벨
    pub log_level: String,
    pub display: DisplayUnits,
    pub suction_singular_policy: SuctionSingularPolicy,
    /// 펌프 곡선을 그릴 구동 주파수 목록 [Hz]
    pub curve_frequencies_hz: Vec<f64>,
    /// 시스템 곡선 샘플 수
    pub system_curve_points: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            log_level: "warn".into(),
            display: DisplayUnits::default(),
            suction_singular_policy: SuctionSingularPolicy::HalfOfTotal,
            curve_frequencies_hz: vec![50.0, 45.0, 40.0, 35.0, 30.0, 25.0],
            system_curve_points: 50,
        }
    }
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
}

/// 기본 설정 파일 이름
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 설정 파일을 로드하거나 없으면 기본 설정을 쓴다. 파일을 새로 만들지는 않는다.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        Ok(Config::default())
    }
}
