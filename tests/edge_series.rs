use geoviz::geo::{self, LineStyle};
use geoviz::{Cell, GeovizError, Table};

fn paths() -> Table {
    Table::from_rows(
        ["slon", "slat", "elon", "elat"],
        vec![
            vec![Cell::Number(-73.9), Cell::Number(40.7), Cell::Number(-87.6), Cell::Number(41.8)],
            vec![Cell::Number(-87.6), Cell::Number(41.8), Cell::Number(-118.2), Cell::Number(34.1)],
            vec!["-118.2".into(), "34.1".into(), "-73.9".into(), "40.7".into()],
        ],
    )
}

#[test]
fn one_segment_per_row_in_positional_order() {
    let style = LineStyle {
        width: 2.0,
        color: "green".into(),
    };
    let e = geo::build_edge_series(&paths(), "slon", "slat", "elon", "elat", &style).unwrap();
    assert_eq!(e.len(), 3);
    assert_eq!(e.line, style);
    assert_eq!(
        (e.edges[1].start_lon, e.edges[1].start_lat, e.edges[1].end_lon, e.edges[1].end_lat),
        (-87.6, 41.8, -118.2, 34.1)
    );
    assert_eq!(e.edges[2].end_lat, 40.7);
}

#[test]
fn empty_paths_give_empty_series() {
    let t = Table::new(["slon", "slat", "elon", "elat"]);
    let e = geo::build_edge_series(&t, "slon", "slat", "elon", "elat", &LineStyle::default()).unwrap();
    assert!(e.is_empty());
}

#[test]
fn short_row_is_an_index_error() {
    let mut t = paths();
    t.push_row(vec![Cell::Number(1.0), Cell::Number(2.0)]);
    let res = geo::build_edge_series(&t, "slon", "slat", "elon", "elat", &LineStyle::default());
    match res {
        Err(GeovizError::MissingCell { column, row }) => {
            assert_eq!(column, "elon");
            assert_eq!(row, 3);
        }
        other => panic!("expected MissingCell, got {:?}", other),
    }
}

#[test]
fn missing_column_is_reported() {
    let res = geo::build_edge_series(&paths(), "slon", "slat", "elon", "nope", &LineStyle::default());
    assert!(matches!(res, Err(GeovizError::ColumnNotFound { .. })));
}
