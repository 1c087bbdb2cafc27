//! FlowiusManage console bootstrap.
//!
//! Loads configuration and the seed collection, wires a console session and
//! runs one render pass against a tracing-backed surface so the session
//! state is visible in the logs.

use std::rc::Rc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flowius_gis::map::{MapCursor, MapSurface, MarkerSpec, PolylineSpec, PolylineStyle};
use flowius_gis::services::notify::TracingNotifier;
use flowius_gis::ui::StatusBarView;
use flowius_gis::{seed, AppConfig, Console};

/// Surface that logs every primitive instead of drawing it
#[derive(Debug, Default)]
struct TraceSurface {
    markers: usize,
    polylines: usize,
}

impl MapSurface for TraceSurface {
    fn set_cursor(&mut self, cursor: MapCursor) {
        tracing::debug!(?cursor, "cursor");
    }

    fn clear(&mut self) {
        self.markers = 0;
        self.polylines = 0;
    }

    fn draw_marker(&mut self, spec: MarkerSpec) {
        self.markers += 1;
        tracing::debug!(
            asset = %spec.asset_id,
            lat = spec.position.lat,
            lng = spec.position.lng,
            color = spec.style.color,
            "marker"
        );
    }

    fn draw_polyline(&mut self, spec: PolylineSpec) {
        self.polylines += 1;
        tracing::debug!(
            id = %spec.id,
            points = spec.path.len(),
            weight = spec.style.weight,
            "polyline"
        );
    }

    fn restyle_polyline(&mut self, id: &str, style: PolylineStyle) {
        tracing::debug!(id, weight = style.weight, "restyle");
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("flowius_gis={}", config.logging.level).into());

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting FlowiusManage v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        lat = config.map.lat,
        lng = config.map.lng,
        zoom = config.map.zoom,
        "map viewport"
    );

    // Load the seed collection and wire the session
    let assets = seed::load(&config.seed.path)?;
    let console = Console::new(config, assets, Rc::new(TracingNotifier))?;

    // One full render pass over the filtered view
    let mut surface = TraceSurface::default();
    console.renderer.render(&console.store, &mut surface);

    let status = StatusBarView::build(&console.store);
    tracing::info!(
        total = status.total,
        active = status.active,
        faulty = status.faulty,
        under_maintenance = status.under_maintenance,
        shown = status.shown,
        markers = surface.markers,
        polylines = surface.polylines,
        "console ready"
    );

    Ok(())
}
