/// 배관 재질별 절대 조도 테이블.

#[derive(Debug)]
pub struct MaterialData {
    pub code: &'static str,
    pub name: &'static str,
    /// 절대 조도 ε [m]
    pub roughness_m: f64,
}

pub fn materials() -> &'static [MaterialData] {
    MATERIALS
}

pub fn find_material(key: &str) -> Option<&'static MaterialData> {
    MATERIALS
        .iter()
        .find(|m| super::matches_key(m.code, m.name, key))
}

const MATERIALS: &[MaterialData] = &[
    MaterialData {
        code: "steel",
        name: "Steel",
        roughness_m: 0.000045,
    },
    MaterialData {
        code: "pvc",
        name: "PVC",
        roughness_m: 0.0000015,
    },
    MaterialData {
        code: "hdpe",
        name: "HDPE",
        roughness_m: 0.000007,
    },
    MaterialData {
        code: "cast_iron",
        name: "Cast iron",
        roughness_m: 0.00026,
    },
    MaterialData {
        code: "concrete",
        name: "Concrete",
        roughness_m: 0.0003,
    },
    MaterialData {
        code: "copper",
        name: "Copper",
        roughness_m: 0.0000015,
    },
    MaterialData {
        code: "galvanized_steel",
        name: "Galvanized steel",
        roughness_m: 0.00015,
    },
];
