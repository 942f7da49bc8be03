//! 펌프 곡선 가져오기/열 식별/상사법칙 환산 테스트.
use approx::assert_relative_eq;
use pump_hydraulics_toolbox::pump::{
    curve_family, resolve_columns, template_table, ColumnRole, CurveError, PumpCurve,
    PumpCurveTable, DEFAULT_RULES,
};

fn read(csv: &str) -> PumpCurveTable {
    PumpCurveTable::from_reader(csv.as_bytes(), b',').expect("csv")
}

#[test]
fn reference_frequency_reproduces_input() {
    let curve = PumpCurve::from_table(&template_table(), DEFAULT_RULES).expect("template");
    let same = curve.scale_to_frequency(50.0);
    assert_eq!(same.points, curve.points);
    assert_eq!(same.frequency_hz, 50.0);
}

#[test]
fn affinity_laws_at_40_hz() {
    let curve = PumpCurve::from_table(&template_table(), DEFAULT_RULES).expect("template");
    let scaled = curve.scale_to_frequency(40.0);
    let p = scaled.points[3];
    // 원래 점: Q=30, H=29, P=7.5, η=68
    assert_relative_eq!(p.flow_m3_per_h, 24.0, epsilon = 1e-9);
    assert_relative_eq!(p.head_m, 29.0 * 0.64, epsilon = 1e-9);
    assert_relative_eq!(p.power_kw.unwrap_or_default(), 7.5 * 0.512, epsilon = 1e-9);
    assert_eq!(p.efficiency_pct, Some(68.0));
}

#[test]
fn french_headers_are_recognised() {
    let table = read("Débit (m3/h),HMT (m),Puissance (kW),Rendement (%)\n");
    let map = resolve_columns(&table.headers, DEFAULT_RULES).expect("columns");
    assert_eq!((map.flow, map.head), (0, 1));
    assert_eq!(map.power, Some(2));
    assert_eq!(map.efficiency, Some(3));
}

#[test]
fn short_headers_use_tokens() {
    let headers = ["Eta (%)", "Q (m3/h)", "H (m)"];
    let map = resolve_columns(&headers, DEFAULT_RULES).expect("columns");
    assert_eq!(map.flow, 1);
    assert_eq!(map.head, 2);
    assert_eq!(map.power, None);
    assert_eq!(map.efficiency, Some(0));
}

#[test]
fn first_matching_header_wins() {
    let headers = ["Flow (m3/h)", "Head (m)", "Flow (l/s)"];
    let map = resolve_columns(&headers, DEFAULT_RULES).expect("columns");
    assert_eq!(map.flow, 0);
}

#[test]
fn missing_head_column_is_reported() {
    let table = read("Flow (m3/h),Temperature (C)\n10,20\n");
    match PumpCurve::from_table(&table, DEFAULT_RULES) {
        Err(CurveError::ColumnsNotFound { missing }) => {
            assert_eq!(missing, vec![ColumnRole::Head]);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn empty_table_gives_empty_curve() {
    let table = read("Foo,Bar\n");
    let curve = PumpCurve::from_table(&table, DEFAULT_RULES).expect("empty ok");
    assert!(curve.is_empty());
    let scaled = table.scaled(40.0, DEFAULT_RULES).expect("empty ok");
    assert_eq!(scaled, table);
}

#[test]
fn non_numeric_cell_is_an_error() {
    let err = PumpCurveTable::from_reader("Q,H\n10,abc\n".as_bytes(), b',').unwrap_err();
    match err {
        CurveError::InvalidNumber { row, column, value } => {
            assert_eq!(row, 1);
            assert_eq!(column, "H");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn semicolon_delimiter_and_blank_cells() {
    let table = PumpCurveTable::from_reader("Q;H;P\n10;30;\n20;28;6.5\n".as_bytes(), b';')
        .expect("csv");
    let curve = PumpCurve::from_table(&table, DEFAULT_RULES).expect("curve");
    assert_eq!(curve.points.len(), 2);
    assert!(curve.points[0].power_kw.is_some_and(f64::is_nan));
    assert_eq!(curve.points[1].power_kw, Some(6.5));
}

#[test]
fn template_round_trips_through_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("template.csv");
    template_table()
        .write_csv(std::fs::File::create(&path).expect("create"))
        .expect("write");
    let back = PumpCurveTable::from_path(&path, b',').expect("read");
    assert_eq!(back, template_table());
    assert_eq!(back.headers[0], "Flow (m3/h)");
}

#[test]
fn scaled_table_keeps_headers_and_scales_columns() {
    let table = template_table();
    let scaled = table.scaled(25.0, DEFAULT_RULES).expect("scaled");
    assert_eq!(scaled.headers, table.headers);
    assert_relative_eq!(scaled.rows[7][0], 35.0, epsilon = 1e-9);
    assert_relative_eq!(scaled.rows[7][1], 1.75, epsilon = 1e-9);
    assert_relative_eq!(scaled.rows[7][2], 5.5 * 0.125, epsilon = 1e-9);
    assert_eq!(scaled.rows[7][3], 40.0);
}

#[test]
fn family_is_sorted_and_ordered_by_frequency() {
    let table = read("Q,H\n40,25\n0,35\n20,32\n");
    let curve = PumpCurve::from_table(&table, DEFAULT_RULES).expect("curve");
    let family = curve_family(&curve, &[50.0, 30.0]);
    assert_eq!(family.len(), 2);
    assert_eq!(family[1].frequency_hz, 30.0);
    let flows: Vec<f64> = family[0].points.iter().map(|p| p.flow_m3_per_h).collect();
    assert_eq!(flows, vec![0.0, 20.0, 40.0]);
}
