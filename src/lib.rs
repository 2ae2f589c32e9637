//! geoviz
//!
//! Shape tabular data into geographic scatter-map chart documents and hand them to a
//! rendering backend (plotly.js HTML by default).
//!
//! ### Features
//! - Load tables from CSV or JSON, join and select columns by name
//! - One reproducible color per category value (seeded)
//! - Point series (markers) and edge series (connection lines)
//! - Map layout: scope, land/lake colors, projection, axis ranges and gridlines
//! - Interactive HTML fragments or standalone HTML files
//!
//! ### Example
//! ```no_run
//! use geoviz::geo::{self, GeoOptions, LineStyle, MapScope, PointConfig};
//! use geoviz::render::{ChartRenderer, RenderConfig};
//!
//! let cities = geoviz::storage::load_csv("cities.csv")?;
//! let routes = geoviz::storage::load_csv("routes.csv")?;
//!
//! let points = geo::build_point_series(&cities, "airline", "lon", "lat", "name", &PointConfig::default())?;
//! let edges = geo::build_edge_series(&routes, "lon1", "lat1", "lon2", "lat2", &LineStyle::default())?;
//! let layout = geo::set_layout("Routes", GeoOptions::default().scope(MapScope::Usa));
//! let doc = geo::assemble(Some(points), Some(edges), layout);
//!
//! let renderer = ChartRenderer::new(RenderConfig::interactive(true));
//! let handle = renderer.render_interactive(&doc, true)?;
//! println!("{}", handle.html);
//! renderer.render_to_file(&doc, "routes.html")?;
//! # Ok::<(), geoviz::GeovizError>(())
//! ```

pub mod error;
pub mod geo;
pub mod models;
pub mod render;
pub mod storage;

pub use error::{GeovizError, Result};
pub use geo::{ChartDocument, EdgeSeries, PointConfig, PointSeries};
pub use models::{Cell, Table};
pub use render::{ChartRenderer, RenderConfig, RenderHandle};
