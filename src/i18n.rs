use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_SECTION: &str = "report.section";
    pub const REPORT_PARAMETER: &str = "report.parameter";
    pub const REPORT_VALUE: &str = "report.value";
    pub const REPORT_UNIT: &str = "report.unit";

    pub const SECTION_BASE_DATA: &str = "section.base_data";
    pub const SECTION_FLUID: &str = "section.fluid";
    pub const SECTION_FLOW: &str = "section.flow";
    pub const SECTION_LOSSES: &str = "section.losses";
    pub const SECTION_POWER: &str = "section.power";
    pub const SECTION_NPSH: &str = "section.npsh";
    pub const SECTION_WATER_HAMMER: &str = "section.water_hammer";
    pub const SECTION_SINGULAR: &str = "section.singular";

    pub const ROW_DIAMETER: &str = "row.diameter";
    pub const ROW_MATERIAL: &str = "row.material";
    pub const ROW_ROUGHNESS: &str = "row.roughness";
    pub const ROW_WALL_THICKNESS: &str = "row.wall_thickness";
    pub const ROW_FLOW: &str = "row.flow";
    pub const ROW_FLOW_SI: &str = "row.flow_si";
    pub const ROW_FLUID: &str = "row.fluid";
    pub const ROW_TEMPERATURE: &str = "row.temperature";
    pub const ROW_UPSTREAM_PRESSURE: &str = "row.upstream_pressure";
    pub const ROW_TOTAL_LENGTH: &str = "row.total_length";
    pub const ROW_SUCTION_LENGTH: &str = "row.suction_length";
    pub const ROW_DISCHARGE_LENGTH: &str = "row.discharge_length";
    pub const ROW_STATIC_RISE: &str = "row.static_rise";
    pub const ROW_STATIC_DROP: &str = "row.static_drop";
    pub const ROW_SUCTION_STATIC_HEAD: &str = "row.suction_static_head";
    pub const ROW_DENSITY: &str = "row.density";
    pub const ROW_VISCOSITY: &str = "row.viscosity";
    pub const ROW_VAPOR_PRESSURE: &str = "row.vapor_pressure";
    pub const ROW_BULK_MODULUS: &str = "row.bulk_modulus";
    pub const ROW_SECTION: &str = "row.section";
    pub const ROW_VELOCITY: &str = "row.velocity";
    pub const ROW_REYNOLDS: &str = "row.reynolds";
    pub const ROW_RELATIVE_ROUGHNESS: &str = "row.relative_roughness";
    pub const ROW_FRICTION_FACTOR: &str = "row.friction_factor";
    pub const ROW_CONVERGED: &str = "row.converged";
    pub const ROW_REGIME: &str = "row.regime";
    pub const ROW_LINEAR_LOSSES: &str = "row.linear_losses";
    pub const ROW_SINGULAR_LOSSES: &str = "row.singular_losses";
    pub const ROW_SUCTION_LOSSES: &str = "row.suction_losses";
    pub const ROW_TOTAL_LOSSES: &str = "row.total_losses";
    pub const ROW_MANOMETRIC_HEAD: &str = "row.manometric_head";
    pub const ROW_SUCTION_POLICY: &str = "row.suction_policy";
    pub const ROW_HYDRAULIC_POWER: &str = "row.hydraulic_power";
    pub const ROW_MECHANICAL_POWER: &str = "row.mechanical_power";
    pub const ROW_ELECTRICAL_POWER: &str = "row.electrical_power";
    pub const ROW_MECHANICAL_EFFICIENCY: &str = "row.mechanical_efficiency";
    pub const ROW_ELECTRICAL_EFFICIENCY: &str = "row.electrical_efficiency";
    pub const ROW_SPECIFIC_ENERGY: &str = "row.specific_energy";
    pub const ROW_NPSH_REQUIRED: &str = "row.npsh_required";
    pub const ROW_NPSH_AVAILABLE: &str = "row.npsh_available";
    pub const ROW_NPSH_MARGIN: &str = "row.npsh_margin";
    pub const ROW_NPSH_STATUS: &str = "row.npsh_status";
    pub const ROW_CELERITY: &str = "row.celerity";
    pub const ROW_TRAVEL_TIME: &str = "row.travel_time";
    pub const ROW_BERGERON_SLOPE: &str = "row.bergeron_slope";
    pub const ROW_SURGE: &str = "row.surge";
    pub const ROW_DEPRESSION: &str = "row.depression";
    pub const ROW_RISK: &str = "row.risk";

    pub const COLUMN_NAME: &str = "column.name";
    pub const COLUMN_QUANTITY: &str = "column.quantity";
    pub const COLUMN_PLACEMENT: &str = "column.placement";
    pub const COLUMN_COEFFICIENT: &str = "column.coefficient";
    pub const COLUMN_LOSS: &str = "column.loss";

    pub const STATUS_SUFFICIENT: &str = "status.sufficient";
    pub const STATUS_MARGINAL: &str = "status.marginal";
    pub const STATUS_INSUFFICIENT: &str = "status.insufficient";
    pub const RISK_LOW: &str = "risk.low";
    pub const RISK_MODERATE: &str = "risk.moderate";
    pub const RISK_HIGH: &str = "risk.high";
    pub const REGIME_LAMINAR: &str = "regime.laminar";
    pub const REGIME_TRANSITION: &str = "regime.transition";
    pub const REGIME_TURBULENT: &str = "regime.turbulent";
    pub const POLICY_HALF_OF_TOTAL: &str = "policy.half_of_total";
    pub const POLICY_TAGGED_SUCTION: &str = "policy.tagged_suction";
    pub const PLACEMENT_SUCTION: &str = "placement.suction";
    pub const PLACEMENT_DISCHARGE: &str = "placement.discharge";
    pub const ANSWER_YES: &str = "answer.yes";
    pub const ANSWER_NO: &str = "answer.no";

    pub const CLI_TEMPLATE_WRITTEN: &str = "cli.template_written";
    pub const CLI_EXPORT_WRITTEN: &str = "cli.export_written";
    pub const CLI_PARAMS_WRITTEN: &str = "cli.params_written";
    pub const CLI_EMPTY_CURVE: &str = "cli.empty_curve";
    pub const CLI_SYSTEM_CURVE: &str = "cli.system_curve";
    pub const CLI_OPERATING_POINT: &str = "cli.operating_point";
    pub const CLI_CURVE_AT: &str = "cli.curve_at";
    pub const CLI_MATERIALS: &str = "cli.materials";
    pub const CLI_FLUIDS: &str = "cli.fluids";
    pub const CLI_FITTINGS: &str = "cli.fittings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Fr,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("fr") {
            Language::Fr
        } else if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Ko => "ko",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    pack: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Translator {
    /// 언어 코드(en/fr/ko)에 따라 내장 언어팩으로 번역기를 생성한다.
    /// 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self::new_with_pack(lang_code, None)
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let lang = Language::from_code(lang_code);
        let mut pack = built_in_pack(lang);
        if let Some(overrides) = pack_dir.and_then(|dir| load_overrides(dir, lang)) {
            pack.extend(overrides);
        }
        Self {
            pack,
            fallback: built_in_pack(Language::En),
        }
    }

    /// 번역을 가져온다. 선택 언어 → 영어 → 키 자체 순으로 찾는다.
    pub fn t(&self, key: &str) -> String {
        self.pack
            .get(key)
            .or_else(|| self.fallback.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("fr") => Some("fr".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    normalize_lang(&lang)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: 섹션별 key = "value".
fn load_overrides(dir: &Path, lang: Language) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{}.toml", lang.as_code()));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: Language) -> HashMap<String, String> {
    let src = match lang {
        Language::En => include_str!("../locales/en.toml"),
        Language::Fr => include_str!("../locales/fr.toml"),
        Language::Ko => include_str!("../locales/ko.toml"),
    };
    parse_toml_to_map(src).unwrap_or_default()
}
