//! 배관 재질 조도, 유체 기준 물성, 국부손실 계수 등 고정 참조 데이터.
//! 값은 20°C 기준의 대표값이며 설계 검증용 자료로 쓰기 전에 확인해야 한다.

pub mod fittings;
pub mod fluids;
pub mod materials;

pub use fittings::{find_fitting, fittings, FittingData};
pub use fluids::{find_fluid, fluids, FluidData, VaporPressureModel};
pub use materials::{find_material, materials, MaterialData};

/// 코드 또는 표시 이름이 대소문자 구분 없이 일치하는지 확인한다.
pub(crate) fn matches_key(code: &str, name: &str, key: &str) -> bool {
    let key = key.trim();
    code.eq_ignore_ascii_case(key) || name.to_lowercase() == key.to_lowercase()
}
