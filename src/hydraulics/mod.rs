//! 단일 펌프 배관의 정상상태 수력 계산 모듈 모음.
//! 유속/마찰, 수두손실, NPSH, 동력, 수격 추정으로 구성한다.

pub mod flow;
pub mod friction;
pub mod head_loss;
pub mod npsh;
pub mod power;
pub mod water_hammer;

pub use flow::{FlowCharacteristics, FlowRegime};
pub use friction::FrictionSolution;
pub use head_loss::{HeadLossBreakdown, SingularLossDetail, SuctionSingularPolicy};
pub use npsh::{NpshResult, NpshStatus};
pub use power::PowerResult;
pub use water_hammer::{SurgeRisk, WaterHammerResult};

/// 중력가속도 [m/s²]
pub const G: f64 = 9.81;

/// 속도수두 v²/2g [m]
pub fn velocity_head(velocity_m_s: f64) -> f64 {
    velocity_m_s * velocity_m_s / (2.0 * G)
}
