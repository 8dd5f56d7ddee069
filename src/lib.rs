//! # LabelKit
//!
//! Interactive layout designer for printed product labels: place data fields
//! and free text on a fixed-size canvas, move and resize them by direct
//! manipulation, align them, and preview the label with sample or live data.
//!
//! ## Architecture
//!
//! LabelKit is organized as a workspace with multiple crates:
//!
//! 1. **labelkit-core** - Field catalog, field-value context, element ids, errors
//! 2. **labelkit-designer** - Layout model, history, gestures, alignment, preview, stores
//! 3. **labelkit-settings** - Designer configuration (JSON/TOML)
//! 4. **labelkit** - This facade: re-exports, logging setup, config-driven wiring

pub use labelkit_designer as designer;

pub use labelkit_core::{
    ElementId, ElementType, Error, FieldValues, IdGenerator, Placeholder, Result, StoreError,
};

pub use labelkit_designer::{
    render_layout, render_layout_svg, snap_to_grid, Alignment, AverageCharWidth, DesignerSession,
    EditorMode, Element, ElementPatch, GestureScope, History, InMemoryLayoutStore,
    InteractionState, JsonLayoutStore, Layout, LayoutStore, Modifiers, Point, PreviewEngine, Rect,
    RenderContext, RenderedText, ResizeHandle, SelectionManager, StoreResult, TextAlign,
    TextMeasure,
};

pub use labelkit_settings::{
    CanvasSettings, Config, ConfigError, DesignerSettings, SettingsError, StorageSettings,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support (default level `info`)
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::Pretty)
}

/// Initialize logging to stdout in the given format
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .pretty();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .json();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
        }
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// Load the user's configuration from the default location, or defaults if
/// there is no config file yet
pub fn load_config() -> anyhow::Result<Config> {
    let path = Config::default_path()?;
    let config = Config::load_or_default(&path)?;
    tracing::info!("Using configuration from {}", path.display());
    Ok(config)
}

/// Open the layout directory named by `config`, creating layouts on its
/// configured canvas size
pub fn open_store(config: &Config) -> anyhow::Result<JsonLayoutStore> {
    config.validate()?;
    let dir = config.storage.resolved_layouts_dir()?;
    let store = JsonLayoutStore::open(&dir)?
        .with_canvas_size(config.canvas.width, config.canvas.height);
    Ok(store)
}

/// Open layout `id` from `store` for editing with the designer settings of
/// `config`
pub fn open_session<S: LayoutStore + ?Sized>(
    store: &S,
    id: &str,
    config: &Config,
) -> Result<DesignerSession> {
    Ok(DesignerSession::open_with_config(store, id, config)?)
}
