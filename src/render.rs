//! Hand chart documents to a rendering backend.
//!
//! [`ChartRenderer`] checks what the document and configuration allow, then delegates to
//! a [`RenderBackend`]. The bundled [`HtmlBackend`] produces plotly.js HTML: an
//! embeddable fragment for interactive display, or a standalone page on disk.
//!
//! Interactive display must be switched on through [`RenderConfig::interactive`]; there
//! is no process-wide toggle.
//!
//! ```no_run
//! use geoviz::geo::{self, GeoOptions, PointConfig};
//! use geoviz::render::{ChartRenderer, RenderConfig};
//!
//! let table = geoviz::storage::load_csv("stations.csv")?;
//! let points = geo::build_point_series(&table, "network", "lon", "lat", "name", &PointConfig::default())?;
//! let doc = geo::assemble(Some(points), None, geo::set_layout("Stations", GeoOptions::default()));
//! ChartRenderer::new(RenderConfig::default()).render_to_file(&doc, "stations.html")?;
//! # Ok::<(), geoviz::GeovizError>(())
//! ```

use crate::error::{GeovizError, Result};
use crate::geo::ChartDocument;
use ahash::RandomState;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const DEFAULT_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const DEFAULT_LOCAL_SRC: &str = "plotly.min.js";

/// Interactive display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMode {
    /// Load plotly.js from the CDN (`true`) or from [`RenderConfig::local_src`].
    #[serde(default = "default_connected")]
    pub connected: bool,
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self { connected: true }
    }
}

/// Renderer configuration. Every field has a serde default, so `{}` is a valid
/// file-export-only config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// `None` disables [`ChartRenderer::render_interactive`].
    #[serde(default)]
    pub interactive: Option<DisplayMode>,
    #[serde(default = "default_cdn_url")]
    pub cdn_url: String,
    /// Script path used when not connected.
    #[serde(default = "default_local_src")]
    pub local_src: String,
    /// Exported files reference `local_src` instead of the CDN.
    #[serde(default)]
    pub offline_files: bool,
}

fn default_connected() -> bool {
    true
}
fn default_cdn_url() -> String {
    DEFAULT_CDN_URL.into()
}
fn default_local_src() -> String {
    DEFAULT_LOCAL_SRC.into()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            interactive: None,
            cdn_url: default_cdn_url(),
            local_src: default_local_src(),
            offline_files: false,
        }
    }
}

impl RenderConfig {
    /// Config with interactive display enabled.
    pub fn interactive(connected: bool) -> Self {
        Self {
            interactive: Some(DisplayMode { connected }),
            ..Self::default()
        }
    }

    fn script_src(&self, connected: bool) -> &str {
        if connected {
            &self.cdn_url
        } else {
            &self.local_src
        }
    }
}

/// Result of an interactive render: an HTML fragment to embed in a host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderHandle {
    pub div_id: String,
    pub html: String,
}

/// Something that can show or persist a figure `{"data": [...], "layout": {...}}`.
pub trait RenderBackend {
    fn display(&self, figure: &Value, mode: DisplayMode, config: &RenderConfig)
    -> Result<RenderHandle>;

    fn write(&self, figure: &Value, path: &Path, config: &RenderConfig) -> Result<()>;
}

/// plotly.js HTML output.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn display(
        &self,
        figure: &Value,
        mode: DisplayMode,
        config: &RenderConfig,
    ) -> Result<RenderHandle> {
        check_figure(figure)?;
        let div_id = div_id_for(figure);
        let fragment = plot_fragment(&div_id, figure)?;
        let markup = html! {
            script src=(config.script_src(mode.connected)) {}
            (fragment)
        };
        Ok(RenderHandle {
            div_id,
            html: markup.into_string(),
        })
    }

    fn write(&self, figure: &Value, path: &Path, config: &RenderConfig) -> Result<()> {
        check_figure(figure)?;
        let title = figure
            .pointer("/layout/title")
            .and_then(Value::as_str)
            .unwrap_or("");
        let fragment = plot_fragment(&div_id_for(figure), figure)?;
        let page = html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (title) }
                    script src=(config.script_src(!config.offline_files)) {}
                }
                body { (fragment) }
            }
        };
        let write_err =
            |e: std::io::Error| GeovizError::RenderBackend(format!("{}: {}", path.display(), e));
        let mut f = File::create(path).map_err(write_err)?;
        f.write_all(page.into_string().as_bytes()).map_err(write_err)?;
        Ok(())
    }
}

/// Reject figures plotly.js cannot draw: missing parts, or axis ranges that did not
/// survive serialization as numbers (NaN and infinities become `null`).
fn check_figure(figure: &Value) -> Result<()> {
    if !figure.get("data").is_some_and(Value::is_array) {
        return Err(GeovizError::RenderBackend("figure has no data array".into()));
    }
    if !figure.get("layout").is_some_and(Value::is_object) {
        return Err(GeovizError::RenderBackend("figure has no layout".into()));
    }
    for axis in ["lonaxis", "lataxis"] {
        if let Some(range) = figure.pointer(&format!("/layout/geo/{axis}/range")) {
            let ok = range
                .as_array()
                .is_some_and(|r| r.len() == 2 && r.iter().all(Value::is_number));
            if !ok {
                return Err(GeovizError::RenderBackend(format!(
                    "layout.geo.{axis}.range must be two finite numbers, got {range}"
                )));
            }
        }
    }
    Ok(())
}

fn plot_fragment(div_id: &str, figure: &Value) -> Result<Markup> {
    let call = format!(
        "Plotly.newPlot(\"{}\", {}, {}, {{\"responsive\": true}});",
        div_id,
        script_json(&figure["data"])?,
        script_json(&figure["layout"])?
    );
    Ok(html! {
        div id=(div_id) style="height:100%; width:100%;" {}
        script type="text/javascript" { (PreEscaped(call)) }
    })
}

/// JSON that is safe inside a `<script>` element.
fn script_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

// Stable for a given figure, so re-rendering the same document yields the same markup.
fn div_id_for(figure: &Value) -> String {
    let state = RandomState::with_seeds(0, 0, 0, 0);
    format!("geoviz-{:016x}", state.hash_one(figure.to_string()))
}

/// Checks documents against the configuration and forwards them to the backend.
#[derive(Debug, Clone)]
pub struct ChartRenderer<B = HtmlBackend> {
    config: RenderConfig,
    backend: B,
}

impl ChartRenderer<HtmlBackend> {
    pub fn new(config: RenderConfig) -> Self {
        Self::with_backend(config, HtmlBackend)
    }
}

impl<B: RenderBackend> ChartRenderer<B> {
    pub fn with_backend(config: RenderConfig, backend: B) -> Self {
        Self { config, backend }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Show the document. With `include_edges` the edge series is drawn under the
    /// points; both series must be present and the edges non-empty. Otherwise edges
    /// are ignored.
    pub fn render_interactive(
        &self,
        document: &ChartDocument,
        include_edges: bool,
    ) -> Result<RenderHandle> {
        let Some(mode) = self.config.interactive else {
            return Err(GeovizError::UnsupportedMode(
                "interactive display is not enabled in the render config".into(),
            ));
        };
        if include_edges && !document.has_edges() {
            return Err(GeovizError::MissingSeries(
                "no path data configured; build an edge series first".into(),
            ));
        }
        if include_edges && document.points.is_none() {
            return Err(GeovizError::MissingSeries(
                "edges are drawn alongside points; the document has no point series".into(),
            ));
        }
        let figure = document.to_figure(include_edges);
        log::debug!(
            "interactive render: {} traces, connected={}",
            figure["data"].as_array().map_or(0, Vec::len),
            mode.connected
        );
        self.backend.display(&figure, mode, &self.config)
    }

    /// Write the document's points and layout to `path`. Edges are never exported.
    pub fn render_to_file<P: AsRef<Path>>(&self, document: &ChartDocument, path: P) -> Result<()> {
        let path = path.as_ref();
        let figure = document.to_figure(false);
        self.backend.write(&figure, path, &self.config)?;
        log::debug!("wrote chart to {}", path.display());
        Ok(())
    }
}
