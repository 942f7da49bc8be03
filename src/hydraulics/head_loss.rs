use serde::{Deserialize, Serialize};

use super::velocity_head;
use crate::error::CalcError;
use crate::params::{Geometry, Placement, SingularLossInstance};
use crate::reference::find_fitting;

/// 흡입측 국부손실 산정 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuctionSingularPolicy {
    /// 전체 국부손실의 50%를 흡입측으로 본다 (기존 계산서 방식).
    #[default]
    HalfOfTotal,
    /// 흡입측으로 지정된 항목만 합산한다.
    TaggedSuction,
}

/// 국부손실 항목별 상세.
#[derive(Debug, Clone, PartialEq)]
pub struct SingularLossDetail {
    pub name: String,
    pub quantity: u32,
    pub placement: Placement,
    /// 수량을 곱한 유효 손실계수 K·n
    pub coefficient: f64,
    /// 손실수두 [m]
    pub loss_m: f64,
}

/// 수두손실 합산 결과 [m].
#[derive(Debug, Clone, PartialEq)]
pub struct HeadLossBreakdown {
    pub linear_total_m: f64,
    pub linear_suction_m: f64,
    pub singular_total_m: f64,
    pub singular_suction_m: f64,
    /// 전체 손실 = 직관 + 국부
    pub total_m: f64,
    /// 흡입측 손실 = 흡입 직관 + 흡입 국부 추정
    pub suction_total_m: f64,
    /// 전양정(HMT) = 상승고 - 하강고 + 전체 손실
    pub manometric_head_m: f64,
    pub suction_policy: SuctionSingularPolicy,
    pub singular_details: Vec<SingularLossDetail>,
}

/// Darcy-Weisbach 직관 손실 f·(L/D)·v²/2g. 직경이 0이면 0.
pub fn linear_loss(friction_factor: f64, length_m: f64, diameter_m: f64, velocity_m_s: f64) -> f64 {
    if diameter_m == 0.0 {
        return 0.0;
    }
    friction_factor * (length_m / diameter_m) * velocity_head(velocity_m_s)
}

/// 국부손실 항목을 참조 테이블에서 찾아 손실수두를 계산한다.
pub fn singular_loss_details(
    instances: &[SingularLossInstance],
    velocity_m_s: f64,
) -> Result<Vec<SingularLossDetail>, CalcError> {
    let vh = velocity_head(velocity_m_s);
    instances
        .iter()
        .map(|inst| {
            let fitting = find_fitting(&inst.fitting)
                .ok_or_else(|| CalcError::UnknownFitting(inst.fitting.clone()))?;
            let coefficient = fitting.k * f64::from(inst.quantity);
            Ok(SingularLossDetail {
                name: fitting.name.to_string(),
                quantity: inst.quantity,
                placement: inst.placement,
                coefficient,
                loss_m: coefficient * vh,
            })
        })
        .collect()
}

/// 직관/국부 손실을 합산하고 전양정을 구한다.
pub fn accumulate(
    friction_factor: f64,
    diameter_m: f64,
    velocity_m_s: f64,
    geometry: &Geometry,
    singular_details: Vec<SingularLossDetail>,
    suction_policy: SuctionSingularPolicy,
) -> HeadLossBreakdown {
    let linear_total_m = linear_loss(friction_factor, geometry.total_length_m, diameter_m, velocity_m_s);
    let linear_suction_m =
        linear_loss(friction_factor, geometry.suction_length_m, diameter_m, velocity_m_s);

    let singular_total_m: f64 = singular_details.iter().map(|d| d.loss_m).sum();
    let singular_suction_m = match suction_policy {
        SuctionSingularPolicy::HalfOfTotal => singular_total_m * 0.5,
        SuctionSingularPolicy::TaggedSuction => singular_details
            .iter()
            .filter(|d| d.placement == Placement::Suction)
            .map(|d| d.loss_m)
            .sum(),
    };

    let total_m = linear_total_m + singular_total_m;
    let suction_total_m = linear_suction_m + singular_suction_m;
    let manometric_head_m = geometry.static_rise_m - geometry.static_drop_m + total_m;

    HeadLossBreakdown {
        linear_total_m,
        linear_suction_m,
        singular_total_m,
        singular_suction_m,
        total_m,
        suction_total_m,
        manometric_head_m,
        suction_policy,
        singular_details,
    }
}
