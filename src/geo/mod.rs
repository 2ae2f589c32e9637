//! Chart document building: turn table rows into map series and a layout.
//!
//! - Point series: one marker per row, colored per category or with a fixed color
//! - Edge series: one line segment per row of a paths table
//! - Layout: map scope, colors, projection, axis ranges and gridlines
//!
//! Nothing here performs I/O; see [`crate::render`] for handing documents to a backend.

pub mod layout;
pub mod palette;
pub mod types;

pub use layout::{AxisSpec, GeoOptions, LayoutSpec, Projection, Rotation};
pub use palette::{CategoryColors, ColorStrategy};
pub use types::{
    ColorScale, LineStyle, LocationMode, MapScope, MarkerStyle, NamedColorScale,
    ProjectionType, TraceMode, TraceType,
};

use crate::error::Result;
use crate::models::Table;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Settings shared by every point series, whatever the coloring.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointConfig {
    pub location_mode: LocationMode,
    pub marker: MarkerStyle,
    pub coloring: ColorStrategy,
}

impl PointConfig {
    /// Every marker in one CSS color.
    pub fn fixed(color: impl Into<String>) -> Self {
        Self {
            coloring: ColorStrategy::Fixed(color.into()),
            ..Self::default()
        }
    }

    /// One color per category value, reproducible for a given `seed`.
    pub fn by_category(seed: u64, scale: ColorScale) -> Self {
        Self {
            coloring: ColorStrategy::ByCategory { seed, scale },
            ..Self::default()
        }
    }

    pub fn marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = marker;
        self
    }

    pub fn location_mode(mut self, mode: LocationMode) -> Self {
        self.location_mode = mode;
        self
    }
}

/// Marker color: a value on the series color scale, or a literal CSS color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkerColor {
    Scale(f64),
    Css(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub lon: f64,
    pub lat: f64,
    pub text: String,
    pub color: MarkerColor,
}

/// One group of map markers sharing a style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSeries {
    pub location_mode: LocationMode,
    pub marker: MarkerStyle,
    pub color_scale: Option<ColorScale>,
    /// Set when every marker shares one CSS color.
    pub fixed_color: Option<String>,
    pub points: Vec<PointRecord>,
}

impl PointSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn to_trace(&self) -> Value {
        let lon: Vec<f64> = self.points.iter().map(|p| p.lon).collect();
        let lat: Vec<f64> = self.points.iter().map(|p| p.lat).collect();
        let text: Vec<&str> = self.points.iter().map(|p| p.text.as_str()).collect();

        let mut marker = json!({
            "size": self.marker.size,
            "opacity": self.marker.opacity,
        });
        // A single literal color is sent once; scale values go out per point.
        marker["color"] = match &self.fixed_color {
            Some(c) => json!(c),
            None => json!(self.points.iter().map(|p| &p.color).collect::<Vec<_>>()),
        };
        if let Some(scale) = &self.color_scale {
            marker["colorscale"] = json!(scale);
        }

        json!({
            "type": TraceType::ScatterGeo,
            "locationmode": self.location_mode,
            "lon": lon,
            "lat": lat,
            "hoverinfo": "text",
            "text": text,
            "mode": TraceMode::Markers,
            "marker": marker,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub start_lon: f64,
    pub start_lat: f64,
    pub end_lon: f64,
    pub end_lat: f64,
}

/// One group of line segments sharing a style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSeries {
    pub line: LineStyle,
    pub edges: Vec<EdgeRecord>,
}

impl EdgeSeries {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// One trace per segment.
    fn to_traces(&self, location_mode: LocationMode) -> Vec<Value> {
        self.edges
            .iter()
            .map(|e| {
                json!({
                    "type": TraceType::ScatterGeo,
                    "locationmode": location_mode,
                    "lon": [e.start_lon, e.end_lon],
                    "lat": [e.start_lat, e.end_lat],
                    "mode": TraceMode::Lines,
                    "line": {
                        "width": self.line.width,
                        "color": self.line.color,
                    },
                })
            })
            .collect()
    }
}

/// Series plus layout, ready for a rendering backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    pub points: Option<PointSeries>,
    pub edges: Option<EdgeSeries>,
    pub layout: LayoutSpec,
}

impl ChartDocument {
    /// True when the document carries at least one edge.
    pub fn has_edges(&self) -> bool {
        self.edges.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// Backend traces in drawing order: edges first (underneath), then points.
    pub fn traces(&self, include_edges: bool) -> Vec<Value> {
        let mut out = Vec::new();
        if include_edges {
            if let Some(edges) = &self.edges {
                let mode = self
                    .points
                    .as_ref()
                    .map(|p| p.location_mode)
                    .unwrap_or_default();
                out.extend(edges.to_traces(mode));
            }
        }
        if let Some(points) = &self.points {
            out.push(points.to_trace());
        }
        out
    }

    /// Figure object `{"data": [...], "layout": {...}}`.
    pub fn to_figure(&self, include_edges: bool) -> Value {
        json!({
            "data": self.traces(include_edges),
            "layout": self.layout,
        })
    }
}

/// Build one marker per row of `table`.
///
/// All four columns must exist. With [`ColorStrategy::ByCategory`] each distinct
/// `value_col` value gets one color, joined back onto the rows; hover text is
/// `"{value}:{text}"`. Nothing is returned unless every row converts.
pub fn build_point_series(
    table: &Table,
    value_col: &str,
    lon_col: &str,
    lat_col: &str,
    text_col: &str,
    config: &PointConfig,
) -> Result<PointSeries> {
    table.require_columns(&[value_col, lon_col, lat_col, text_col])?;

    let (rows, color_scale) = match &config.coloring {
        ColorStrategy::ByCategory { seed, scale } => {
            let colors = CategoryColors::assign(table, value_col, *seed)?;
            log::debug!(
                "assigned colors to {} categories of '{}'",
                colors.len(),
                value_col
            );
            (table.join(&colors.to_table(value_col), value_col)?, Some(scale.clone()))
        }
        ColorStrategy::Fixed(_) => (table.clone(), None),
    };

    // The joined color sits right after the input columns, whatever they are named.
    let color_idx = table.headers().len();
    let points = (0..rows.len())
        .map(|r| -> Result<PointRecord> {
            let color = match &config.coloring {
                ColorStrategy::ByCategory { .. } => {
                    MarkerColor::Scale(rows.number_at(r, color_idx)?)
                }
                ColorStrategy::Fixed(c) => MarkerColor::Css(c.clone()),
            };
            Ok(PointRecord {
                lon: rows.number(r, lon_col)?,
                lat: rows.number(r, lat_col)?,
                text: format!("{}:{}", rows.cell(r, value_col)?, rows.cell(r, text_col)?),
                color,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!("built point series with {} points", points.len());
    Ok(PointSeries {
        location_mode: config.location_mode,
        marker: config.marker,
        color_scale,
        fixed_color: match &config.coloring {
            ColorStrategy::Fixed(c) => Some(c.clone()),
            ColorStrategy::ByCategory { .. } => None,
        },
        points,
    })
}

/// Build one segment per row of `paths`, by row position.
pub fn build_edge_series(
    paths: &Table,
    start_lon: &str,
    start_lat: &str,
    end_lon: &str,
    end_lat: &str,
    style: &LineStyle,
) -> Result<EdgeSeries> {
    paths.require_columns(&[start_lon, start_lat, end_lon, end_lat])?;

    let edges = (0..paths.len())
        .map(|i| -> Result<EdgeRecord> {
            Ok(EdgeRecord {
                start_lon: paths.number(i, start_lon)?,
                start_lat: paths.number(i, start_lat)?,
                end_lon: paths.number(i, end_lon)?,
                end_lat: paths.number(i, end_lat)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!("built edge series with {} segments", edges.len());
    Ok(EdgeSeries {
        line: style.clone(),
        edges,
    })
}

/// Layout with the given title and map options, taken as-is.
pub fn set_layout(title: &str, geo: GeoOptions) -> LayoutSpec {
    LayoutSpec::new(title, geo)
}

/// Combine optional point and edge series with a layout into one document.
pub fn assemble(
    points: Option<PointSeries>,
    edges: Option<EdgeSeries>,
    layout: LayoutSpec,
) -> ChartDocument {
    ChartDocument {
        points,
        edges,
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;

    fn sample() -> Table {
        Table::from_rows(
            ["lon", "lat", "cat", "note"],
            vec![
                vec![Cell::Number(-73.9), Cell::Number(40.7), "A".into(), "x".into()],
                vec![Cell::Number(-87.6), Cell::Number(41.8), "B".into(), "y".into()],
                vec![Cell::Number(-71.1), Cell::Number(42.4), "A".into(), "z".into()],
            ],
        )
    }

    #[test]
    fn fixed_color_sends_single_marker_color() {
        let s = build_point_series(&sample(), "cat", "lon", "lat", "note", &PointConfig::fixed("red"))
            .unwrap();
        assert!(s.color_scale.is_none());
        let trace = s.to_trace();
        assert_eq!(trace["marker"]["color"], "red");
        assert!(trace["marker"].get("colorscale").is_none());
    }

    #[test]
    fn fixed_color_survives_empty_table() {
        let empty = Table::new(["lon", "lat", "cat", "note"]);
        let s = build_point_series(&empty, "cat", "lon", "lat", "note", &PointConfig::fixed("red"))
            .unwrap();
        assert!(s.is_empty());
        assert_eq!(s.to_trace()["marker"]["color"], "red");
    }

    #[test]
    fn input_column_named_like_color_column_is_ignored() {
        let mut table = Table::from_rows(
            ["lon", "lat", "cat", "note", palette::COLOR_COLUMN],
            vec![vec![
                Cell::Number(1.0),
                Cell::Number(2.0),
                "A".into(),
                "x".into(),
                "oops".into(),
            ]],
        );
        table.push_row(vec![
            Cell::Number(3.0),
            Cell::Number(4.0),
            "B".into(),
            "y".into(),
            "oops".into(),
        ]);
        let s = build_point_series(&table, "cat", "lon", "lat", "note", &PointConfig::default())
            .unwrap();
        let colors = CategoryColors::assign(&table, "cat", 0).unwrap();
        assert_eq!(
            s.points[1].color,
            MarkerColor::Scale(colors.get(&Cell::from("B")).unwrap())
        );
    }

    #[test]
    fn category_trace_has_per_point_colors_and_scale() {
        let s = build_point_series(&sample(), "cat", "lon", "lat", "note", &PointConfig::default())
            .unwrap();
        let trace = s.to_trace();
        assert_eq!(trace["type"], "scattergeo");
        assert_eq!(trace["mode"], "markers");
        assert_eq!(trace["locationmode"], "ISO-3");
        assert_eq!(trace["marker"]["color"].as_array().unwrap().len(), 3);
        assert_eq!(trace["marker"]["colorscale"], "Viridis");
        assert_eq!(trace["marker"]["color"][0], trace["marker"]["color"][2]);
    }

    #[test]
    fn edge_traces_use_point_location_mode() {
        let paths = Table::from_rows(
            ["a", "b", "c", "d"],
            vec![vec![
                Cell::Number(1.0),
                Cell::Number(2.0),
                Cell::Number(3.0),
                Cell::Number(4.0),
            ]],
        );
        let edges = build_edge_series(&paths, "a", "b", "c", "d", &LineStyle::default()).unwrap();
        let points = build_point_series(
            &sample(),
            "cat",
            "lon",
            "lat",
            "note",
            &PointConfig::default().location_mode(LocationMode::UsaStates),
        )
        .unwrap();
        let doc = assemble(Some(points), Some(edges), set_layout("t", GeoOptions::default()));
        let traces = doc.traces(true);
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["mode"], "lines");
        assert_eq!(traces[0]["locationmode"], "USA-states");
        assert_eq!(traces[0]["lon"], json!([1.0, 3.0]));
        assert_eq!(traces[0]["lat"], json!([2.0, 4.0]));
        assert_eq!(traces[0]["line"]["color"], "blue");
        assert_eq!(traces[1]["mode"], "markers");
    }
}
