use std::fmt::Write as _;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::calculation::{calculate, ResultRecord};
use crate::config::{Config, ConfigError};
use crate::error::CalcError;
use crate::i18n::{keys, Translator};
use crate::params::{Parameters, ParamsError};
use crate::pump::{curve_family, template_table, CurveError, PumpCurve, PumpCurveTable, DEFAULT_RULES};
use crate::reference::{fittings, fluids, materials};
use crate::report::{build_report, render_text, write_results_csv, write_singular_csv};
use crate::system_curve::system_curve;

/// 결과 CSV 파일 이름
pub const RESULTS_FILE: &str = "results.csv";
/// 국부손실 상세 CSV 파일 이름
pub const SINGULAR_FILE: &str = "singular_losses.csv";

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("파라미터 오류: {0}")]
    Params(#[from] ParamsError),
    #[error("계산 오류: {0}")]
    Calc(#[from] CalcError),
    #[error("펌프 곡선 오류: {0}")]
    Curve(#[from] CurveError),
    #[error("CSV 출력 오류: {0}")]
    Csv(#[from] csv::Error),
}

/// 보고서 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
}

/// 명령 실행에 필요한 설정과 번역기.
pub struct AppContext {
    pub config: Config,
    pub tr: Translator,
}

impl AppContext {
    pub fn new(config: Config, tr: Translator) -> Self {
        Self { config, tr }
    }

    /// 파라미터 파일을 읽는다. 경로가 없으면 기본 설치 조건을 쓴다.
    fn load_params(&self, path: Option<&Path>) -> Result<Parameters, AppError> {
        match path {
            Some(p) => Ok(Parameters::load(p)?),
            None => {
                info!("no parameter file given, using defaults");
                Ok(Parameters::default())
            }
        }
    }

    fn run(&self, params: &Parameters) -> Result<ResultRecord, AppError> {
        Ok(calculate(params, self.config.suction_singular_policy)?)
    }
}

/// 계산 후 보고서를 텍스트 또는 CSV 문자열로 돌려준다.
pub fn cmd_calc(
    ctx: &AppContext,
    params_path: Option<&Path>,
    format: OutputFormat,
) -> Result<String, AppError> {
    let params = ctx.load_params(params_path)?;
    let result = ctx.run(&params)?;
    let report = build_report(&params, &result, &ctx.tr, &ctx.config.display);
    match format {
        OutputFormat::Text => Ok(render_text(&report)),
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            write_results_csv(&report, &ctx.tr, &mut buf)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
    }
}

/// 결과와 국부손실 상세를 `out_dir`에 CSV로 내보낸다.
pub fn cmd_export(
    ctx: &AppContext,
    params_path: Option<&Path>,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, AppError> {
    let params = ctx.load_params(params_path)?;
    let result = ctx.run(&params)?;
    let report = build_report(&params, &result, &ctx.tr, &ctx.config.display);

    fs::create_dir_all(out_dir)?;
    let results_path = out_dir.join(RESULTS_FILE);
    write_results_csv(&report, &ctx.tr, File::create(&results_path)?)?;
    let singular_path = out_dir.join(SINGULAR_FILE);
    write_singular_csv(&report, &ctx.tr, File::create(&singular_path)?)?;

    info!(dir = %out_dir.display(), "report exported");
    Ok(vec![results_path, singular_path])
}

/// 50 Hz 펌프 곡선 템플릿을 쓴다.
pub fn cmd_template(path: &Path) -> Result<(), AppError> {
    template_table().write_csv(File::create(path)?)?;
    info!(path = %path.display(), "pump curve template written");
    Ok(())
}

/// 펌프 곡선을 읽어 주파수별로 환산한 표를 문자열로 돌려준다.
///
/// `frequencies`가 비어 있으면 설정의 주파수 목록을 쓴다.
pub fn cmd_curve(
    ctx: &AppContext,
    curve_path: &Path,
    frequencies: &[f64],
    delimiter: u8,
) -> Result<String, AppError> {
    let table = PumpCurveTable::from_path(curve_path, delimiter)?;
    let curve = PumpCurve::from_table(&table, DEFAULT_RULES).map_err(|err| {
        warn!(path = %curve_path.display(), %err, "pump curve columns not resolved");
        err
    })?;
    if curve.is_empty() {
        return Ok(format!("{}\n", ctx.tr.t(keys::CLI_EMPTY_CURVE)));
    }

    let freqs = if frequencies.is_empty() {
        ctx.config.curve_frequencies_hz.as_slice()
    } else {
        frequencies
    };

    let mut out = String::new();
    for scaled in curve_family(&curve, freqs) {
        let _ = writeln!(
            out,
            "# {} {:.1} Hz",
            ctx.tr.t(keys::CLI_CURVE_AT),
            scaled.frequency_hz
        );
        let mut buf = Vec::new();
        scaled.to_table().write_csv(&mut buf)?;
        out.push_str(&String::from_utf8_lossy(&buf));
    }
    Ok(out)
}

/// 시스템 곡선 (유량, 요구 양정) 목록을 문자열로 돌려준다.
pub fn cmd_system_curve(ctx: &AppContext, params_path: Option<&Path>) -> Result<String, AppError> {
    let params = ctx.load_params(params_path)?;
    let result = ctx.run(&params)?;
    let curve = system_curve(&result, ctx.config.system_curve_points);

    let mut out = String::new();
    let _ = writeln!(out, "# {}", ctx.tr.t(keys::CLI_SYSTEM_CURVE));
    let _ = writeln!(out, "flow_m3_per_h,head_m");
    for p in &curve.points {
        let _ = writeln!(out, "{:.3},{:.3}", p.flow_m3_per_h, p.head_m);
    }
    let op = curve.operating_point;
    let _ = writeln!(
        out,
        "# {}: {:.3} m³/h, {:.3} m",
        ctx.tr.t(keys::CLI_OPERATING_POINT),
        op.flow_m3_per_h,
        op.head_m
    );
    Ok(out)
}

/// 내장 참조 데이터 목록.
pub fn cmd_references(tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}]", tr.t(keys::CLI_MATERIALS));
    for m in materials() {
        let _ = writeln!(out, "  {:<18} {:<20} ε = {:.2e} m", m.code, m.name, m.roughness_m);
    }
    let _ = writeln!(out, "\n[{}]", tr.t(keys::CLI_FLUIDS));
    for f in fluids() {
        let _ = writeln!(
            out,
            "  {:<18} {:<20} ρ = {:.1} kg/m³, ν = {:.2e} m²/s",
            f.code, f.name, f.density_20c, f.kinematic_viscosity_20c
        );
    }
    let _ = writeln!(out, "\n[{}]", tr.t(keys::CLI_FITTINGS));
    for k in fittings() {
        let _ = writeln!(out, "  {:<28} {:<32} K = {:.2}", k.code, k.name, k.k);
    }
    out
}

/// 기본 파라미터 파일을 쓴다.
pub fn cmd_init_params(path: &Path) -> Result<(), AppError> {
    Parameters::default().save(path)?;
    info!(path = %path.display(), "default parameters written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> AppContext {
        AppContext::new(Config::default(), Translator::new("en"))
    }

    #[test]
    fn calc_csv_starts_with_header() {
        let out = cmd_calc(&ctx(), None, OutputFormat::Csv).expect("calc");
        let first = out.lines().next().unwrap_or_default();
        assert_eq!(first, "Section,Parameter,Value,Unit");
    }

    #[test]
    fn system_curve_lists_configured_points() {
        let out = cmd_system_curve(&ctx(), None).expect("system curve");
        let data_rows = out
            .lines()
            .filter(|l| !l.starts_with('#') && !l.starts_with("flow"))
            .count();
        assert_eq!(data_rows, 50);
    }
}
