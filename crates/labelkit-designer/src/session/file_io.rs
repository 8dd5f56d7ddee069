//! Loading from and saving to a layout store.

use super::DesignerSession;
use crate::store::{LayoutStore, StoreResult};
use labelkit_settings::Config;
use tracing::{info, warn};

impl DesignerSession {
    /// Opens the layout `id` from `store`.
    pub fn open<S: LayoutStore + ?Sized>(store: &S, id: &str) -> StoreResult<Self> {
        Self::open_with_config(store, id, &Config::default())
    }

    /// Opens the layout `id` from `store` with the designer settings of `config`.
    pub fn open_with_config<S: LayoutStore + ?Sized>(
        store: &S,
        id: &str,
        config: &Config,
    ) -> StoreResult<Self> {
        let layout = store.load(id).inspect_err(|e| {
            warn!("Failed to load layout {}: {}", id, e);
        })?;
        Ok(Self::with_config(layout, config))
    }

    /// Replaces the open layout with `id` from `store`. On failure the
    /// session is left untouched.
    pub fn reload_from<S: LayoutStore + ?Sized>(&mut self, store: &S, id: &str) -> StoreResult<()> {
        let layout = store.load(id).inspect_err(|e| {
            warn!("Failed to load layout {}: {}", id, e);
        })?;
        self.load_layout(layout);
        Ok(())
    }

    /// Saves the live layout to `store`.
    ///
    /// An in-progress gesture is saved at its current geometry and keeps
    /// running.
    pub fn save_to<S: LayoutStore + ?Sized>(&mut self, store: &mut S) -> StoreResult<()> {
        store.save(&self.layout).inspect_err(|e| {
            warn!("Failed to save layout {}: {}", self.layout.id, e);
        })?;
        self.is_modified = false;
        info!(
            "Saved layout '{}' ({}) with {} elements",
            self.layout.name,
            self.layout.id,
            self.layout.element_count()
        );
        Ok(())
    }
}
