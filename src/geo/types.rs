//! Closed value sets and small style records used by the map builders.

use serde::{Deserialize, Serialize};

/// Portion of the globe shown by the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MapScope {
    #[serde(rename = "world")]
    World,
    #[serde(rename = "usa")]
    Usa,
    #[serde(rename = "europe")]
    Europe,
    #[serde(rename = "asia")]
    Asia,
    #[serde(rename = "africa")]
    Africa,
    #[default]
    #[serde(rename = "north america")]
    NorthAmerica,
    #[serde(rename = "south america")]
    SouthAmerica,
}

/// How location names are matched to regions on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LocationMode {
    #[default]
    #[serde(rename = "ISO-3")]
    Iso3,
    #[serde(rename = "USA-states")]
    UsaStates,
    #[serde(rename = "country names")]
    CountryNames,
}

/// Trace kind understood by the backend. Only geographic scatter is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TraceType {
    #[default]
    #[serde(rename = "scattergeo")]
    ScatterGeo,
}

/// Drawing mode of a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceMode {
    Markers,
    Lines,
}

/// Map projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectionType {
    #[default]
    #[serde(rename = "conic conformal")]
    ConicConformal,
    #[serde(rename = "mercator")]
    Mercator,
    #[serde(rename = "orthographic")]
    Orthographic,
    #[serde(rename = "natural earth")]
    NaturalEarth,
    #[serde(rename = "equirectangular")]
    Equirectangular,
    #[serde(rename = "albers usa")]
    AlbersUsa,
}

/// Built-in color scales known to the backend by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NamedColorScale {
    #[default]
    Viridis,
    Cividis,
    Blues,
    Greens,
    Greys,
    Reds,
    YlOrRd,
    YlGnBu,
    RdBu,
    Bluered,
    Jet,
    Hot,
    Electric,
    Earth,
    Rainbow,
    Portland,
    Picnic,
    Blackbody,
}

/// Color scale for numeric marker colors: a backend name or explicit stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorScale {
    Named(NamedColorScale),
    /// `(position in 0..=1, css color)` pairs.
    Stops(Vec<(f64, String)>),
}

impl Default for ColorScale {
    fn default() -> Self {
        ColorScale::Named(NamedColorScale::Viridis)
    }
}

impl ColorScale {
    /// Dark-to-light blue ramp.
    pub fn blues() -> Self {
        Self::from_stops(&[
            (0.0, "rgb(5, 10, 172)"),
            (0.35, "rgb(40, 60, 190)"),
            (0.5, "rgb(70, 100, 245)"),
            (0.6, "rgb(90, 120, 245)"),
            (0.7, "rgb(106, 137, 247)"),
            (1.0, "rgb(220, 220, 220)"),
        ])
    }

    /// Purple through blue, green and yellow to red.
    pub fn heatmap() -> Self {
        Self::from_stops(&[
            (0.0, "rgb(150,0,90)"),
            (0.125, "rgb(0, 0, 200)"),
            (0.25, "rgb(0, 25, 255)"),
            (0.375, "rgb(0, 152, 255)"),
            (0.5, "rgb(44, 255, 150)"),
            (0.625, "rgb(151, 255, 0)"),
            (0.75, "rgb(255, 234, 0)"),
            (0.875, "rgb(255, 111, 0)"),
            (1.0, "rgb(255, 0, 0)"),
        ])
    }

    pub fn from_stops(stops: &[(f64, &str)]) -> Self {
        ColorScale::Stops(stops.iter().map(|(p, c)| (*p, c.to_string())).collect())
    }
}

/// Marker appearance shared by every point of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub size: f64,
    pub opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            size: 10.0,
            opacity: 0.8,
        }
    }
}

/// Line appearance shared by every segment of an edge series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub width: f64,
    pub color: String,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: "blue".into(),
        }
    }
}
