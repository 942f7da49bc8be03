/// 국부(특이) 손실 계수 라이브러리.

#[derive(Debug)]
pub struct FittingData {
    pub code: &'static str,
    pub name: &'static str,
    /// 무차원 손실계수 K
    pub k: f64,
}

pub fn fittings() -> &'static [FittingData] {
    FITTINGS
}

pub fn find_fitting(key: &str) -> Option<&'static FittingData> {
    FITTINGS
        .iter()
        .find(|f| super::matches_key(f.code, f.name, key))
}

const fn fd(code: &'static str, name: &'static str, k: f64) -> FittingData {
    FittingData { code, name, k }
}

const FITTINGS: &[FittingData] = &[
    fd("gate_valve_open", "Gate valve fully open", 0.2),
    fd("valve_half_open", "Valve half open", 4.0),
    fd("check_valve", "Check valve", 2.5),
    fd("non_return_valve", "Non-return valve", 10.0),
    fd("elbow_90_standard", "Standard 90° elbow", 0.3),
    fd("elbow_90_long_radius", "Long-radius 90° elbow", 0.2),
    fd("elbow_45", "45° elbow", 0.2),
    fd("tee_straight", "Straight tee", 0.9),
    fd("tee_branch", "Branch tee", 1.8),
    fd("sudden_contraction", "Sudden contraction", 0.5),
    fd("sudden_expansion", "Sudden expansion", 1.0),
    fd("tank_inlet", "Tank inlet", 0.5),
    fd("tank_outlet", "Tank outlet", 1.0),
    fd("strainer", "Strainer", 2.0),
    fd("stopcock", "Stopcock", 0.2),
];
