//! 계산 엔진에 넘기는 입력 파라미터 묶음과 입력 경계 검증.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::reference::{find_fitting, find_fluid, find_material};

/// 배관 제원.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeConfig {
    /// 내경 [m]
    pub diameter_m: f64,
    /// 재질 코드 또는 이름 (참조 테이블 키)
    pub material: String,
    /// 관 두께 [m]
    pub wall_thickness_m: f64,
    /// 관재 영률 [Pa]
    pub young_modulus_pa: f64,
}

/// 운전 조건.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingPoint {
    /// 체적 유량 [m³/h]
    pub flow_m3_per_h: f64,
    /// 유체 코드 또는 이름 (참조 테이블 키)
    pub fluid: String,
    /// 유체 온도 [°C]
    pub temperature_c: f64,
    /// 흡입측 상류 절대압 [Pa]
    pub upstream_pressure_pa: f64,
    /// 요구 NPSH (제조사 값) [m]
    pub npsh_required_m: f64,
    /// 기계효율 (0, 1]
    pub mechanical_efficiency: f64,
    /// 전기효율 (0, 1]
    pub electrical_efficiency: f64,
}

/// 배관 길이와 정수두.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// 전체 배관 길이 [m]
    pub total_length_m: f64,
    /// 흡입 배관 길이 [m]
    pub suction_length_m: f64,
    /// 토출 배관 길이 [m] (수격 왕복시간 계산용)
    pub discharge_length_m: f64,
    /// 상승 정수두 [m]
    pub static_rise_m: f64,
    /// 하강 정수두 [m]
    pub static_drop_m: f64,
    /// 흡입 정수두 [m] (+ 가압, - 흡상)
    pub suction_static_head_m: f64,
}

/// 국부손실 항목 위치.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Suction,
    Discharge,
}

/// 배관에 설치된 국부손실 항목.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingularLossInstance {
    /// 국부손실 종류 코드 또는 이름
    pub fitting: String,
    /// 수량 (1 이상)
    pub quantity: u32,
    pub placement: Placement,
}

/// 한 번의 계산에 쓰이는 전체 입력 스냅샷.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub pipe: PipeConfig,
    pub operating: OperatingPoint,
    pub geometry: Geometry,
    #[serde(default)]
    pub singular_losses: Vec<SingularLossInstance>,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            pipe: PipeConfig {
                diameter_m: 0.1,
                material: "steel".into(),
                wall_thickness_m: 0.005,
                young_modulus_pa: 200e9,
            },
            operating: OperatingPoint {
                flow_m3_per_h: 36.0,
                fluid: "water".into(),
                temperature_c: 20.0,
                upstream_pressure_pa: 101_325.0,
                npsh_required_m: 2.0,
                mechanical_efficiency: 0.95,
                electrical_efficiency: 0.92,
            },
            geometry: Geometry {
                total_length_m: 100.0,
                suction_length_m: 5.0,
                discharge_length_m: 95.0,
                static_rise_m: 10.0,
                static_drop_m: 5.0,
                suction_static_head_m: 2.0,
            },
            singular_losses: Vec::new(),
        }
    }
}

/// 파라미터 파일 로드/검증 오류.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("파라미터 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("파라미터 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("잘못된 입력: {0}")]
    Invalid(String),
}

impl Parameters {
    /// TOML 파일에서 파라미터를 읽고 검증한다.
    pub fn load(path: &Path) -> Result<Self, ParamsError> {
        let content = fs::read_to_string(path)?;
        let params: Parameters = toml::from_str(&content)?;
        params.validate()?;
        info!(path = %path.display(), "parameters loaded");
        Ok(params)
    }

    /// 파라미터를 TOML 파일로 쓴다.
    pub fn save(&self, path: &Path) -> Result<(), ParamsError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 입력 경계에서 지켜야 하는 제약을 확인한다.
    ///
    /// 엔진은 효율이 0인 경우 등을 다시 막지 않으므로 여기서 걸러야 한다.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let invalid = |msg: String| Err(ParamsError::Invalid(msg));

        if !(self.pipe.diameter_m > 0.0) {
            return invalid(format!("내경은 0보다 커야 합니다: {}", self.pipe.diameter_m));
        }
        if !(self.pipe.wall_thickness_m > 0.0) {
            return invalid(format!(
                "관 두께는 0보다 커야 합니다: {}",
                self.pipe.wall_thickness_m
            ));
        }
        if !(self.pipe.young_modulus_pa > 0.0) {
            return invalid(format!(
                "영률은 0보다 커야 합니다: {}",
                self.pipe.young_modulus_pa
            ));
        }
        for (label, eta) in [
            ("기계효율", self.operating.mechanical_efficiency),
            ("전기효율", self.operating.electrical_efficiency),
        ] {
            if !(eta > 0.0 && eta <= 1.0) {
                return invalid(format!("{label}은 (0, 1] 범위여야 합니다: {eta}"));
            }
        }
        if self.operating.flow_m3_per_h < 0.0 {
            return invalid(format!(
                "유량은 음수일 수 없습니다: {}",
                self.operating.flow_m3_per_h
            ));
        }
        let g = &self.geometry;
        if g.total_length_m < 0.0 || g.suction_length_m < 0.0 || g.discharge_length_m < 0.0 {
            return invalid("배관 길이는 음수일 수 없습니다.".into());
        }
        if g.suction_length_m > g.total_length_m {
            return invalid(format!(
                "흡입 길이({})가 전체 길이({})보다 깁니다.",
                g.suction_length_m, g.total_length_m
            ));
        }
        if find_material(&self.pipe.material).is_none() {
            return invalid(format!("알 수 없는 배관 재질: {}", self.pipe.material));
        }
        if find_fluid(&self.operating.fluid).is_none() {
            return invalid(format!("알 수 없는 유체: {}", self.operating.fluid));
        }
        for inst in &self.singular_losses {
            if inst.quantity < 1 {
                return invalid(format!("{} 수량은 1 이상이어야 합니다.", inst.fitting));
            }
            if find_fitting(&inst.fitting).is_none() {
                return invalid(format!("알 수 없는 국부손실 종류: {}", inst.fitting));
            }
        }
        Ok(())
    }
}
