//! Map canvas configuration.
//!
//! Values are taken as given: colors are not parsed and ranges are not checked.
//! Backends may still refuse a layout they cannot draw.

use super::types::{MapScope, ProjectionType};
use serde::{Deserialize, Serialize};

/// Longitude or latitude axis of the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    #[serde(rename = "showgrid")]
    pub show_grid: bool,
    #[serde(rename = "gridwidth")]
    pub grid_width: f64,
    pub range: [f64; 2],
    /// Grid tick interval in degrees.
    pub dtick: f64,
}

impl AxisSpec {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            show_grid: true,
            grid_width: 0.5,
            range: [min, max],
            dtick: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: ProjectionType,
    pub rotation: Rotation,
}

/// Geographic part of the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoOptions {
    pub scope: MapScope,
    #[serde(rename = "showland")]
    pub show_land: bool,
    #[serde(rename = "landcolor")]
    pub land_color: String,
    #[serde(rename = "subunitcolor")]
    pub subunit_color: String,
    #[serde(rename = "countrycolor")]
    pub country_color: String,
    #[serde(rename = "showlakes")]
    pub show_lakes: bool,
    #[serde(rename = "lakecolor")]
    pub lake_color: String,
    #[serde(rename = "showsubunits")]
    pub show_subunits: bool,
    #[serde(rename = "showcountries")]
    pub show_countries: bool,
    pub resolution: u32,
    pub projection: Projection,
    #[serde(rename = "lonaxis")]
    pub lon_axis: AxisSpec,
    #[serde(rename = "lataxis")]
    pub lat_axis: AxisSpec,
}

impl Default for GeoOptions {
    /// North America, conic conformal projection centered on 100°W.
    fn default() -> Self {
        Self {
            scope: MapScope::NorthAmerica,
            show_land: true,
            land_color: "rgb(212, 212, 212)".into(),
            subunit_color: "rgb(255, 255, 255)".into(),
            country_color: "rgb(255, 255, 255)".into(),
            show_lakes: true,
            lake_color: "rgb(255, 255, 255)".into(),
            show_subunits: true,
            show_countries: true,
            resolution: 50,
            projection: Projection {
                kind: ProjectionType::ConicConformal,
                rotation: Rotation { lon: -100.0 },
            },
            lon_axis: AxisSpec::new(-140.0, -55.0),
            lat_axis: AxisSpec::new(20.0, 60.0),
        }
    }
}

impl GeoOptions {
    pub fn scope(mut self, scope: MapScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn land_color(mut self, color: impl Into<String>) -> Self {
        self.land_color = color.into();
        self
    }

    pub fn subunit_color(mut self, color: impl Into<String>) -> Self {
        self.subunit_color = color.into();
        self
    }

    pub fn country_color(mut self, color: impl Into<String>) -> Self {
        self.country_color = color.into();
        self
    }

    pub fn lake_color(mut self, color: impl Into<String>) -> Self {
        self.lake_color = color.into();
        self
    }

    pub fn show_land(mut self, on: bool) -> Self {
        self.show_land = on;
        self
    }

    pub fn show_lakes(mut self, on: bool) -> Self {
        self.show_lakes = on;
        self
    }

    pub fn show_subunits(mut self, on: bool) -> Self {
        self.show_subunits = on;
        self
    }

    pub fn show_countries(mut self, on: bool) -> Self {
        self.show_countries = on;
        self
    }

    /// Coastline detail, `50` (1:50m) or `110` (1:110m).
    pub fn resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn projection(mut self, kind: ProjectionType) -> Self {
        self.projection.kind = kind;
        self
    }

    pub fn rotation(mut self, lon: f64) -> Self {
        self.projection.rotation.lon = lon;
        self
    }

    pub fn lon_range(mut self, min: f64, max: f64) -> Self {
        self.lon_axis.range = [min, max];
        self
    }

    pub fn lat_range(mut self, min: f64, max: f64) -> Self {
        self.lat_axis.range = [min, max];
        self
    }

    /// Tick interval for both axes.
    pub fn grid_tick_interval(mut self, dtick: f64) -> Self {
        self.lon_axis.dtick = dtick;
        self.lat_axis.dtick = dtick;
        self
    }

    pub fn grid_width(mut self, width: f64) -> Self {
        self.lon_axis.grid_width = width;
        self.lat_axis.grid_width = width;
        self
    }

    pub fn show_grid(mut self, on: bool) -> Self {
        self.lon_axis.show_grid = on;
        self.lat_axis.show_grid = on;
        self
    }
}

/// Complete layout of one chart document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub title: String,
    pub geo: GeoOptions,
}

impl LayoutSpec {
    pub fn new(title: impl Into<String>, geo: GeoOptions) -> Self {
        Self {
            title: title.into(),
            geo,
        }
    }
}
