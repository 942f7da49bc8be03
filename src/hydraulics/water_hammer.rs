use serde::Serialize;

use super::G;

/// 고위험 서지 하한 [Pa]
pub const HIGH_RISK_PA: f64 = 500_000.0;
/// 중위험 서지 하한 [Pa]
pub const MODERATE_RISK_PA: f64 = 200_000.0;

/// 수격 위험도.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SurgeRisk {
    Low,
    Moderate,
    High,
}

impl SurgeRisk {
    pub fn from_surge(surge_pa: f64) -> Self {
        if surge_pa > HIGH_RISK_PA {
            SurgeRisk::High
        } else if surge_pa > MODERATE_RISK_PA {
            SurgeRisk::Moderate
        } else {
            SurgeRisk::Low
        }
    }
}

/// 수격 추정 입력.
#[derive(Debug, Clone, Copy)]
pub struct WaterHammerInput {
    /// 유체 체적 탄성계수 K [Pa]
    pub bulk_modulus_pa: f64,
    /// 보정된 밀도 [kg/m³]
    pub density_kg_m3: f64,
    pub diameter_m: f64,
    pub wall_thickness_m: f64,
    /// 관재 영률 E [Pa]
    pub young_modulus_pa: f64,
    /// 토출 배관 길이 [m]
    pub discharge_length_m: f64,
    pub section_m2: f64,
    pub velocity_m_s: f64,
}

/// 수격 추정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterHammerResult {
    /// 압력파 전파속도 a [m/s]
    pub celerity_m_s: f64,
    /// 왕복 시간 2L/a [s]
    pub travel_time_s: f64,
    /// Bergeron 직선 기울기 a/(gA) [s/m²]
    pub bergeron_slope: f64,
    /// 급폐쇄 시 최대 서지 ρ·a·v [Pa]
    pub surge_pa: f64,
    /// 저수조측 부압 수두 [m]
    pub depression_head_m: f64,
}

impl WaterHammerResult {
    pub fn risk(&self) -> SurgeRisk {
        SurgeRisk::from_surge(self.surge_pa)
    }
}

/// Allievi 식 파속. 관벽 탄성을 고려한다.
pub fn wave_celerity(
    bulk_modulus_pa: f64,
    density_kg_m3: f64,
    diameter_m: f64,
    young_modulus_pa: f64,
    wall_thickness_m: f64,
) -> f64 {
    let rigid = (bulk_modulus_pa / density_kg_m3).sqrt();
    let flexibility = 1.0 + bulk_modulus_pa * diameter_m / (young_modulus_pa * wall_thickness_m);
    rigid / flexibility.sqrt()
}

/// 유속이 순간적으로 0이 되는 경우의 Joukowsky 서지를 추정한다.
pub fn estimate(input: WaterHammerInput) -> WaterHammerResult {
    let a = wave_celerity(
        input.bulk_modulus_pa,
        input.density_kg_m3,
        input.diameter_m,
        input.young_modulus_pa,
        input.wall_thickness_m,
    );
    let surge_pa = input.density_kg_m3 * a * input.velocity_m_s;
    WaterHammerResult {
        celerity_m_s: a,
        travel_time_s: 2.0 * input.discharge_length_m / a,
        bergeron_slope: a / (G * input.section_m2),
        surge_pa,
        depression_head_m: surge_pa / (input.density_kg_m3 * G),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_thresholds() {
        assert_eq!(SurgeRisk::from_surge(150_000.0), SurgeRisk::Low);
        assert_eq!(SurgeRisk::from_surge(200_000.0), SurgeRisk::Low);
        assert_eq!(SurgeRisk::from_surge(350_000.0), SurgeRisk::Moderate);
        assert_eq!(SurgeRisk::from_surge(500_000.0), SurgeRisk::Moderate);
        assert_eq!(SurgeRisk::from_surge(500_001.0), SurgeRisk::High);
    }

    #[test]
    fn steel_water_celerity_is_near_1200() {
        let a = wave_celerity(2.15e9, 998.2, 0.1, 200e9, 0.005);
        assert!(a > 1200.0 && a < 1400.0, "a={a}");
    }
}
