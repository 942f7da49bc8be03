//! 파라미터 파일, 설정, 보고서 출력 테스트.
use pump_hydraulics_toolbox::{
    calculation::calculate,
    config::{self, Config, DisplayUnits},
    hydraulics::{friction::MAX_ITERATIONS, SuctionSingularPolicy},
    i18n::Translator,
    params::{Parameters, ParamsError, Placement, SingularLossInstance},
    report::{build_report, render_text, write_results_csv, write_singular_csv},
    units::{LengthUnit, PressureUnit},
};

fn invalid(params: &Parameters) -> bool {
    matches!(params.validate(), Err(ParamsError::Invalid(_)))
}

#[test]
fn default_parameters_are_valid() {
    assert!(Parameters::default().validate().is_ok());
}

#[test]
fn boundary_validation_rejects_bad_inputs() {
    let mut p = Parameters::default();
    p.pipe.diameter_m = 0.0;
    assert!(invalid(&p));

    let mut p = Parameters::default();
    p.operating.mechanical_efficiency = 0.0;
    assert!(invalid(&p));

    let mut p = Parameters::default();
    p.operating.electrical_efficiency = 1.2;
    assert!(invalid(&p));

    let mut p = Parameters::default();
    p.geometry.suction_length_m = 150.0;
    assert!(invalid(&p));

    let mut p = Parameters::default();
    p.pipe.wall_thickness_m = -0.001;
    assert!(invalid(&p));

    let mut p = Parameters::default();
    p.singular_losses.push(SingularLossInstance {
        fitting: "strainer".into(),
        quantity: 0,
        placement: Placement::Suction,
    });
    assert!(invalid(&p));

    let mut p = Parameters::default();
    p.pipe.material = "balsa".into();
    assert!(invalid(&p));
}

#[test]
fn parameters_round_trip_through_toml_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("params.toml");

    let mut params = Parameters::default();
    params.singular_losses.push(SingularLossInstance {
        fitting: "check_valve".into(),
        quantity: 1,
        placement: Placement::Discharge,
    });
    params.save(&path).expect("save");
    let loaded = Parameters::load(&path).expect("load");
    assert_eq!(loaded, params);
}

#[test]
fn parameters_file_without_fittings_parses() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("params.toml");
    std::fs::write(
        &path,
        r#"
[pipe]
diameter_m = 0.15
material = "PVC"
wall_thickness_m = 0.007
young_modulus_pa = 3.0e9

[operating]
flow_m3_per_h = 60.0
fluid = "water"
temperature_c = 15.0
upstream_pressure_pa = 101325.0
npsh_required_m = 3.0
mechanical_efficiency = 0.8
electrical_efficiency = 0.9

[geometry]
total_length_m = 250.0
suction_length_m = 10.0
discharge_length_m = 240.0
static_rise_m = 20.0
static_drop_m = 0.0
suction_static_head_m = -1.5
"#,
    )
    .expect("write");
    let params = Parameters::load(&path).expect("load");
    assert!(params.singular_losses.is_empty());
    assert!(calculate(&params, SuctionSingularPolicy::default()).is_ok());
}

#[test]
fn missing_config_file_gives_defaults_without_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_default(Some(path.as_path())).expect("defaults");
    assert_eq!(cfg.system_curve_points, 50);
    assert_eq!(cfg.curve_frequencies_hz, vec![50.0, 45.0, 40.0, 35.0, 30.0, 25.0]);
    assert!(!path.exists());
}

#[test]
fn report_sections_follow_fixed_order() {
    let params = Parameters::default();
    let res = calculate(&params, SuctionSingularPolicy::default()).expect("calc");
    let tr = Translator::new("en");
    let report = build_report(&params, &res, &tr, &DisplayUnits::default());

    let titles: Vec<&str> = report.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Base data",
            "Fluid properties",
            "Flow characteristics",
            "Head losses",
            "Power",
            "NPSH",
            "Water hammer",
        ]
    );
    let text = render_text(&report);
    assert!(text.starts_with("=== Pumping calculation note ==="));
}

#[test]
fn report_uses_display_units() {
    let params = Parameters::default();
    let res = calculate(&params, SuctionSingularPolicy::default()).expect("calc");
    let tr = Translator::new("en");
    let units = DisplayUnits {
        pressure: PressureUnit::Bar,
        length: LengthUnit::Meter,
        ..DisplayUnits::default()
    };
    let report = build_report(&params, &res, &tr, &units);

    let diameter = &report.sections[0].rows[0];
    assert_eq!(diameter.value, "0.1000");
    assert_eq!(diameter.unit, "m");
    let roughness = &report.sections[0].rows[2];
    assert_eq!(roughness.value, "4.500e-5");
    assert_eq!(roughness.unit, "m");
    let wall = &report.sections[0].rows[3];
    assert_eq!(wall.value, "0.005000");
    assert_eq!(wall.unit, "m");
    let upstream = &report.sections[1].rows[2];
    assert_eq!(upstream.value, "1.013");
    assert_eq!(upstream.unit, PressureUnit::Bar.symbol());
}

#[test]
fn french_report_translates_classifications() {
    let params = Parameters::default();
    let res = calculate(&params, SuctionSingularPolicy::default()).expect("calc");
    let tr = Translator::new("fr");
    let report = build_report(&params, &res, &tr, &Config::default().display);
    assert_eq!(report.sections[0].title, "Données de base");

    let status = &report.sections[5].rows[3];
    assert_eq!(status.parameter, "Statut");
    assert_eq!(status.value, "SUFFISANT");
    let risk = &report.sections[6].rows[5];
    assert_eq!(risk.parameter, "Niveau de risque");
    assert_eq!(risk.value, "ÉLEVÉ");
}

#[test]
fn length_rows_keep_significant_digits_in_every_unit() {
    let params = Parameters::default();
    let res = calculate(&params, SuctionSingularPolicy::default()).expect("calc");
    let tr = Translator::new("en");

    let report = build_report(&params, &res, &tr, &DisplayUnits::default());
    assert_eq!(report.sections[0].rows[0].value, "100.0");
    assert_eq!(report.sections[0].rows[2].value, "4.500e-2");
    assert_eq!(report.sections[0].rows[3].value, "5.000");

    let feet = DisplayUnits {
        length: LengthUnit::Foot,
        ..DisplayUnits::default()
    };
    let report = build_report(&params, &res, &tr, &feet);
    let roughness = &report.sections[0].rows[2].value;
    assert_eq!(roughness, "1.476e-4");
    assert_eq!(report.sections[0].rows[3].value, "0.01640");
}

#[test]
fn unconverged_friction_is_flagged_in_report() {
    let mut params = Parameters::default();
    params.pipe.diameter_m = f64::NAN;
    assert!(params.validate().is_err());

    let res = calculate(&params, SuctionSingularPolicy::default()).expect("calc");
    assert!(!res.flow.friction.converged);
    assert_eq!(res.flow.friction.iterations, MAX_ITERATIONS);

    let tr = Translator::new("en");
    let report = build_report(&params, &res, &tr, &DisplayUnits::default());
    let row = &report.sections[2].rows[5];
    assert_eq!(row.parameter, "Friction solve converged");
    assert_eq!(row.value, "no");
}

#[test]
fn csv_exports_have_expected_shape() {
    let mut params = Parameters::default();
    params.singular_losses.push(SingularLossInstance {
        fitting: "elbow_90_standard".into(),
        quantity: 4,
        placement: Placement::Discharge,
    });
    let res = calculate(&params, SuctionSingularPolicy::default()).expect("calc");
    let tr = Translator::new("en");
    let report = build_report(&params, &res, &tr, &DisplayUnits::default());

    let mut results = Vec::new();
    write_results_csv(&report, &tr, &mut results).expect("results csv");
    let rows: usize = report.sections.iter().map(|s| s.rows.len()).sum();
    let text = String::from_utf8(results).expect("utf8");
    assert_eq!(text.lines().count(), rows + 1);

    let mut singular = Vec::new();
    write_singular_csv(&report, &tr, &mut singular).expect("singular csv");
    let text = String::from_utf8(singular).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("Standard 90° elbow,4,discharge,1.2000,"));
}
