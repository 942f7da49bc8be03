use thiserror::Error;

/// 계산 엔진이 구조적으로 잘못된 입력을 만났을 때의 오류.
///
/// 수치 연산 자체는 0 또는 하한값으로 처리하고 오류를 내지 않는다.
/// 참조 데이터에 없는 키만 오류로 올려 보낸다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("알 수 없는 배관 재질: {0}")]
    UnknownMaterial(String),
    #[error("알 수 없는 유체: {0}")]
    UnknownFluid(String),
    #[error("알 수 없는 국부손실 종류: {0}")]
    UnknownFitting(String),
}
