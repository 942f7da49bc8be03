//! 계산 결과를 표시 단위와 언어에 맞춘 보고서 표로 정리하고 텍스트/CSV로 내보낸다.

use std::fmt::Write as _;
use std::io::Write;

use crate::calculation::ResultRecord;
use crate::config::DisplayUnits;
use crate::hydraulics::{FlowRegime, NpshStatus, SuctionSingularPolicy, SurgeRisk};
use crate::i18n::{keys, Translator};
use crate::params::{Parameters, Placement};
use crate::units::{
    convert_flow, convert_length, from_pascal, FlowUnit, LengthUnit, PressureUnit,
};

/// 보고서 한 줄 (항목, 값, 단위).
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub parameter: String,
    pub value: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub title: String,
    pub rows: Vec<ReportRow>,
}

/// 국부손실 상세 표의 한 줄.
#[derive(Debug, Clone, PartialEq)]
pub struct SingularRow {
    pub name: String,
    pub quantity: u32,
    pub placement: String,
    pub coefficient: f64,
    pub loss_m: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub sections: Vec<ReportSection>,
    pub singular_title: String,
    pub singular_rows: Vec<SingularRow>,
}

struct SectionBuilder<'a> {
    tr: &'a Translator,
    section: ReportSection,
}

impl<'a> SectionBuilder<'a> {
    fn new(tr: &'a Translator, title_key: &str) -> Self {
        Self {
            tr,
            section: ReportSection {
                title: tr.t(title_key),
                rows: Vec::new(),
            },
        }
    }

    fn row(mut self, key: &str, value: impl Into<String>, unit: &str) -> Self {
        self.section.rows.push(ReportRow {
            parameter: self.tr.t(key),
            value: value.into(),
            unit: unit.to_string(),
        });
        self
    }

    fn num(self, key: &str, value: f64, decimals: usize, unit: &str) -> Self {
        self.row(key, format!("{value:.decimals$}"), unit)
    }

    /// 표시 단위에 따라 자릿수가 크게 바뀌는 치수용 (유효숫자 `digits`개).
    fn sig(self, key: &str, value: f64, digits: usize, unit: &str) -> Self {
        self.row(key, format_significant(value, digits), unit)
    }

    fn build(self) -> ReportSection {
        self.section
    }
}

fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let mantissa = digits.saturating_sub(1);
    // 반올림 후 지수를 써야 9.9995 같은 값에서 자릿수가 어긋나지 않는다
    let exp_form = format!("{value:.mantissa$e}");
    let exponent: i32 = exp_form
        .rsplit_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0);
    let decimals = (mantissa as i32 - exponent).max(0) as usize;
    format!("{value:.decimals$}")
}

fn regime_key(regime: FlowRegime) -> &'static str {
    match regime {
        FlowRegime::Laminar => keys::REGIME_LAMINAR,
        FlowRegime::Transition => keys::REGIME_TRANSITION,
        FlowRegime::Turbulent => keys::REGIME_TURBULENT,
    }
}

fn status_key(status: NpshStatus) -> &'static str {
    match status {
        NpshStatus::Sufficient => keys::STATUS_SUFFICIENT,
        NpshStatus::Marginal => keys::STATUS_MARGINAL,
        NpshStatus::Insufficient => keys::STATUS_INSUFFICIENT,
    }
}

fn risk_key(risk: SurgeRisk) -> &'static str {
    match risk {
        SurgeRisk::Low => keys::RISK_LOW,
        SurgeRisk::Moderate => keys::RISK_MODERATE,
        SurgeRisk::High => keys::RISK_HIGH,
    }
}

fn policy_key(policy: SuctionSingularPolicy) -> &'static str {
    match policy {
        SuctionSingularPolicy::HalfOfTotal => keys::POLICY_HALF_OF_TOTAL,
        SuctionSingularPolicy::TaggedSuction => keys::POLICY_TAGGED_SUCTION,
    }
}

pub(crate) fn placement_key(placement: Placement) -> &'static str {
    match placement {
        Placement::Suction => keys::PLACEMENT_SUCTION,
        Placement::Discharge => keys::PLACEMENT_DISCHARGE,
    }
}

/// 입력 파라미터와 계산 결과로 보고서를 만든다.
///
/// 섹션 순서: 기본 자료, 유체, 유동, 손실, 동력, NPSH, 수격.
pub fn build_report(
    params: &Parameters,
    result: &ResultRecord,
    tr: &Translator,
    units: &DisplayUnits,
) -> Report {
    let len = |m: f64| convert_length(m, LengthUnit::Meter, units.length);
    let press = |pa: f64| from_pascal(pa, units.pressure);
    let len_u = units.length.symbol();
    let press_u = units.pressure.symbol();
    let flow_u = units.flow.symbol();
    let g = &result.geometry;
    let op = &params.operating;

    let base = SectionBuilder::new(tr, keys::SECTION_BASE_DATA)
        .sig(keys::ROW_DIAMETER, len(result.diameter_m), 4, len_u)
        .row(keys::ROW_MATERIAL, params.pipe.material.clone(), "")
        .row(keys::ROW_ROUGHNESS, format!("{:.3e}", len(result.roughness_m)), len_u)
        .sig(keys::ROW_WALL_THICKNESS, len(params.pipe.wall_thickness_m), 4, len_u)
        .num(
            keys::ROW_FLOW,
            convert_flow(result.flow_m3_per_h, FlowUnit::CubicMeterPerHour, units.flow),
            3,
            flow_u,
        )
        .num(keys::ROW_FLOW_SI, result.flow_m3_s, 5, FlowUnit::CubicMeterPerSecond.symbol())
        .num(keys::ROW_TOTAL_LENGTH, g.total_length_m, 2, "m")
        .num(keys::ROW_SUCTION_LENGTH, g.suction_length_m, 2, "m")
        .num(keys::ROW_DISCHARGE_LENGTH, g.discharge_length_m, 2, "m")
        .num(keys::ROW_STATIC_RISE, g.static_rise_m, 2, "m")
        .num(keys::ROW_STATIC_DROP, g.static_drop_m, 2, "m")
        .num(keys::ROW_SUCTION_STATIC_HEAD, g.suction_static_head_m, 2, "m")
        .build();

    let fluid = SectionBuilder::new(tr, keys::SECTION_FLUID)
        .row(keys::ROW_FLUID, op.fluid.clone(), "")
        .num(keys::ROW_TEMPERATURE, op.temperature_c, 1, "°C")
        .num(keys::ROW_UPSTREAM_PRESSURE, press(op.upstream_pressure_pa), 3, press_u)
        .num(keys::ROW_DENSITY, result.fluid.density_kg_m3, 1, "kg/m³")
        .row(
            keys::ROW_VISCOSITY,
            format!("{:.3e}", result.fluid.kinematic_viscosity_m2_s),
            "m²/s",
        )
        .num(keys::ROW_VAPOR_PRESSURE, press(result.fluid.vapor_pressure_pa), 3, press_u)
        .num(
            keys::ROW_BULK_MODULUS,
            from_pascal(result.fluid.bulk_modulus_pa, PressureUnit::MegaPascal),
            0,
            PressureUnit::MegaPascal.symbol(),
        )
        .build();

    let f = &result.flow;
    let converged = if f.friction.converged {
        keys::ANSWER_YES
    } else {
        keys::ANSWER_NO
    };
    let flow = SectionBuilder::new(tr, keys::SECTION_FLOW)
        .row(keys::ROW_SECTION, format!("{:.5}", f.section_m2), "m²")
        .num(keys::ROW_VELOCITY, f.velocity_m_s, 3, "m/s")
        .num(keys::ROW_REYNOLDS, f.reynolds, 0, "")
        .row(keys::ROW_RELATIVE_ROUGHNESS, format!("{:.3e}", f.relative_roughness), "")
        .num(keys::ROW_FRICTION_FACTOR, f.friction.factor, 5, "")
        .row(keys::ROW_CONVERGED, tr.t(converged), "")
        .row(keys::ROW_REGIME, tr.t(regime_key(f.regime)), "")
        .build();

    let l = &result.losses;
    let losses = SectionBuilder::new(tr, keys::SECTION_LOSSES)
        .num(keys::ROW_LINEAR_LOSSES, l.linear_total_m, 3, "m")
        .num(keys::ROW_SINGULAR_LOSSES, l.singular_total_m, 3, "m")
        .num(keys::ROW_SUCTION_LOSSES, l.suction_total_m, 3, "m")
        .num(keys::ROW_TOTAL_LOSSES, l.total_m, 3, "m")
        .num(keys::ROW_MANOMETRIC_HEAD, l.manometric_head_m, 3, "m")
        .row(keys::ROW_SUCTION_POLICY, tr.t(policy_key(l.suction_policy)), "")
        .build();

    let p = &result.power;
    let power = SectionBuilder::new(tr, keys::SECTION_POWER)
        .num(keys::ROW_HYDRAULIC_POWER, p.hydraulic_kw, 3, "kW")
        .num(keys::ROW_MECHANICAL_EFFICIENCY, op.mechanical_efficiency * 100.0, 1, "%")
        .num(keys::ROW_MECHANICAL_POWER, p.mechanical_kw, 3, "kW")
        .num(keys::ROW_ELECTRICAL_EFFICIENCY, op.electrical_efficiency * 100.0, 1, "%")
        .num(keys::ROW_ELECTRICAL_POWER, p.electrical_kw, 3, "kW")
        .num(keys::ROW_SPECIFIC_ENERGY, result.specific_energy_wh_m3, 1, "Wh/m³")
        .build();

    let n = &result.npsh;
    let npsh = SectionBuilder::new(tr, keys::SECTION_NPSH)
        .num(keys::ROW_NPSH_REQUIRED, n.required_m, 2, "m")
        .num(keys::ROW_NPSH_AVAILABLE, n.available_m, 2, "m")
        .num(keys::ROW_NPSH_MARGIN, n.margin_m, 2, "m")
        .row(keys::ROW_NPSH_STATUS, tr.t(status_key(n.status())), "")
        .build();

    let w = &result.water_hammer;
    let water_hammer = SectionBuilder::new(tr, keys::SECTION_WATER_HAMMER)
        .num(keys::ROW_CELERITY, w.celerity_m_s, 0, "m/s")
        .num(keys::ROW_TRAVEL_TIME, w.travel_time_s, 3, "s")
        .num(keys::ROW_BERGERON_SLOPE, w.bergeron_slope, 1, "s/m²")
        .num(keys::ROW_SURGE, press(w.surge_pa), 1, press_u)
        .num(keys::ROW_DEPRESSION, w.depression_head_m, 2, "m")
        .row(keys::ROW_RISK, tr.t(risk_key(w.risk())), "")
        .build();

    let singular_rows = l
        .singular_details
        .iter()
        .map(|d| SingularRow {
            name: d.name.clone(),
            quantity: d.quantity,
            placement: tr.t(placement_key(d.placement)),
            coefficient: d.coefficient,
            loss_m: d.loss_m,
        })
        .collect();

    Report {
        title: tr.t(keys::REPORT_TITLE),
        sections: vec![base, fluid, flow, losses, power, npsh, water_hammer],
        singular_title: tr.t(keys::SECTION_SINGULAR),
        singular_rows,
    }
}

/// 터미널 출력용 텍스트 보고서.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", report.title);
    for section in &report.sections {
        let _ = writeln!(out, "\n[{}]", section.title);
        let width = section
            .rows
            .iter()
            .map(|r| r.parameter.chars().count())
            .max()
            .unwrap_or(0);
        for row in &section.rows {
            let pad = width - row.parameter.chars().count();
            let _ = writeln!(
                out,
                "  {}{} : {} {}",
                row.parameter,
                " ".repeat(pad),
                row.value,
                row.unit
            );
        }
    }
    if !report.singular_rows.is_empty() {
        let _ = writeln!(out, "\n[{}]", report.singular_title);
        for r in &report.singular_rows {
            let _ = writeln!(
                out,
                "  {} x{} ({}) K={:.3} -> {:.4} m",
                r.name, r.quantity, r.placement, r.coefficient, r.loss_m
            );
        }
    }
    out
}

/// 결과 표를 `section,parameter,value,unit` CSV로 쓴다.
pub fn write_results_csv<W: Write>(
    report: &Report,
    tr: &Translator,
    writer: W,
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        tr.t(keys::REPORT_SECTION).as_str(),
        tr.t(keys::REPORT_PARAMETER).as_str(),
        tr.t(keys::REPORT_VALUE).as_str(),
        tr.t(keys::REPORT_UNIT).as_str(),
    ])?;
    for section in &report.sections {
        for row in &section.rows {
            wtr.write_record([
                section.title.as_str(),
                row.parameter.as_str(),
                row.value.as_str(),
                row.unit.as_str(),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// 국부손실 상세를 CSV로 쓴다.
pub fn write_singular_csv<W: Write>(
    report: &Report,
    tr: &Translator,
    writer: W,
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        tr.t(keys::COLUMN_NAME),
        tr.t(keys::COLUMN_QUANTITY),
        tr.t(keys::COLUMN_PLACEMENT),
        tr.t(keys::COLUMN_COEFFICIENT),
        tr.t(keys::COLUMN_LOSS),
    ])?;
    for r in &report.singular_rows {
        wtr.write_record([
            r.name.clone(),
            r.quantity.to_string(),
            r.placement.clone(),
            format!("{:.4}", r.coefficient),
            format!("{:.5}", r.loss_m),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
