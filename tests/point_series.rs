use geoviz::geo::{self, CategoryColors, ColorScale, MarkerColor, PointConfig};
use geoviz::{Cell, GeovizError, Table};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn two_cities() -> Table {
    Table::from_rows(
        ["lon", "lat", "cat", "note"],
        vec![
            vec![Cell::Number(-73.9), Cell::Number(40.7), "A".into(), "x".into()],
            vec![Cell::Number(-87.6), Cell::Number(41.8), "B".into(), "y".into()],
        ],
    )
}

fn scale_value(c: &MarkerColor) -> f64 {
    match c {
        MarkerColor::Scale(v) => *v,
        other => panic!("expected a scale color, got {:?}", other),
    }
}

#[test]
fn sample_rows_produce_category_text_and_colors() {
    init_logs();
    let s = geo::build_point_series(&two_cities(), "cat", "lon", "lat", "note", &PointConfig::default())
        .unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s.points[0].text, "A:x");
    assert_eq!(s.points[1].text, "B:y");
    assert_eq!((s.points[0].lon, s.points[0].lat), (-73.9, 40.7));
    assert_eq!((s.points[1].lon, s.points[1].lat), (-87.6, 41.8));
    assert_ne!(scale_value(&s.points[0].color), scale_value(&s.points[1].color));
}

#[test]
fn one_record_per_row_and_colors_consistent_per_category() {
    let cats = ["red", "blue", "red", "green", "blue", "red"];
    let rows = cats
        .iter()
        .enumerate()
        .map(|(i, c)| {
            vec![
                Cell::Number(i as f64),
                Cell::Number(-(i as f64)),
                (*c).into(),
                format!("n{}", i).into(),
            ]
        })
        .collect();
    let table = Table::from_rows(["lon", "lat", "cat", "note"], rows);
    let s = geo::build_point_series(&table, "cat", "lon", "lat", "note", &PointConfig::default())
        .unwrap();
    assert_eq!(s.len(), cats.len());

    for a in &s.points {
        for b in &s.points {
            let same_cat = a.text.split(':').next() == b.text.split(':').next();
            if same_cat {
                assert_eq!(a.color, b.color);
            }
        }
    }
}

#[test]
fn every_record_carries_its_category_color() {
    let cats = ["north", "south", "south", "east", "north"];
    let rows = cats
        .iter()
        .enumerate()
        .map(|(i, c)| {
            vec![
                Cell::Number(i as f64),
                Cell::Number(10.0 + i as f64),
                (*c).into(),
                format!("n{}", i).into(),
            ]
        })
        .collect();
    let table = Table::from_rows(["lon", "lat", "cat", "note"], rows);
    let seed = 17;
    let colors = CategoryColors::assign(&table, "cat", seed).unwrap();
    let s = geo::build_point_series(
        &table,
        "cat",
        "lon",
        "lat",
        "note",
        &PointConfig::by_category(seed, ColorScale::default()),
    )
    .unwrap();

    assert_eq!(s.len(), cats.len());
    for (i, cat) in cats.iter().enumerate() {
        let expected = colors.get(&Cell::from(*cat)).unwrap();
        assert_eq!(s.points[i].color, MarkerColor::Scale(expected), "row {}", i);
        assert_eq!(s.points[i].text, format!("{}:n{}", cat, i));
    }
}

#[test]
fn hover_text_uses_caller_text_column() {
    let table = Table::from_rows(
        ["lon", "lat", "cat", "val_col_name", "label"],
        vec![vec![
            Cell::Number(1.0),
            Cell::Number(2.0),
            "A".into(),
            "wrong".into(),
            "right".into(),
        ]],
    );
    let s = geo::build_point_series(&table, "cat", "lon", "lat", "label", &PointConfig::fixed("red"))
        .unwrap();
    assert_eq!(s.points[0].text, "A:right");
    assert_eq!(s.points[0].color, MarkerColor::Css("red".into()));
}

#[test]
fn same_seed_gives_same_series() {
    let cfg = PointConfig::by_category(99, ColorScale::heatmap());
    let a = geo::build_point_series(&two_cities(), "cat", "lon", "lat", "note", &cfg).unwrap();
    let b = geo::build_point_series(&two_cities(), "cat", "lon", "lat", "note", &cfg).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.color_scale, Some(ColorScale::heatmap()));
}

#[test]
fn missing_lon_column_fails_without_partial_series() {
    let table = two_cities().select(&["lat", "cat", "note"]).unwrap();
    let res = geo::build_point_series(&table, "cat", "lon", "lat", "note", &PointConfig::default());
    match res {
        Err(GeovizError::ColumnNotFound { column }) => assert_eq!(column, "lon"),
        other => panic!("expected ColumnNotFound, got {:?}", other),
    }
}

#[test]
fn non_numeric_coordinate_fails_whole_build() {
    let table = Table::from_rows(
        ["lon", "lat", "cat", "note"],
        vec![
            vec![Cell::Number(1.0), Cell::Number(2.0), "A".into(), "x".into()],
            vec!["west".into(), Cell::Number(2.0), "A".into(), "y".into()],
        ],
    );
    let res = geo::build_point_series(&table, "cat", "lon", "lat", "note", &PointConfig::default());
    assert!(matches!(res, Err(GeovizError::InvalidNumber { row: 1, .. })));
}

#[test]
fn numeric_categories_format_plainly_in_text() {
    let table = Table::from_rows(
        ["lon", "lat", "zone", "note"],
        vec![vec![Cell::Number(1.0), Cell::Number(2.0), Cell::Number(7.0), "x".into()]],
    );
    let s = geo::build_point_series(&table, "zone", "lon", "lat", "note", &PointConfig::default())
        .unwrap();
    assert_eq!(s.points[0].text, "7:x");
}
