//! Layout persistence.
//!
//! [`LayoutStore`] is the contract the designer uses to load and save
//! layouts. Stores keep at most one layout flagged as the default.

use crate::layout::{Layout, STANDARD_CANVAS_HEIGHT, STANDARD_CANVAS_WIDTH};
use labelkit_core::StoreError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Layout persistence backend.
pub trait LayoutStore {
    /// Loads the layout with the given id.
    fn load(&self, id: &str) -> StoreResult<Layout>;

    /// Inserts or replaces a layout. Saving a default layout clears the flag
    /// on every other layout.
    fn save(&mut self, layout: &Layout) -> StoreResult<()>;

    /// Creates and stores an empty layout with a fresh uuid v4 id.
    fn create(&mut self, name: &str) -> StoreResult<Layout>;

    /// All stored layouts.
    fn list(&self) -> StoreResult<Vec<Layout>>;

    /// Makes `id` the only default layout.
    fn set_default(&mut self, id: &str) -> StoreResult<()>;

    fn delete(&mut self, id: &str) -> StoreResult<()>;

    /// The layout flagged as default, if any.
    fn default_layout(&self) -> StoreResult<Option<Layout>> {
        Ok(self.list()?.into_iter().find(|l| l.is_default))
    }
}

fn new_layout_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Store that keeps layouts in memory, in creation order.
#[derive(Debug, Clone)]
pub struct InMemoryLayoutStore {
    layouts: Vec<Layout>,
    canvas: (i32, i32),
}

impl InMemoryLayoutStore {
    pub fn new() -> Self {
        Self {
            layouts: Vec::new(),
            canvas: (STANDARD_CANVAS_WIDTH, STANDARD_CANVAS_HEIGHT),
        }
    }

    /// Canvas size given to layouts made by [`LayoutStore::create`].
    pub fn with_canvas_size(mut self, width: i32, height: i32) -> Self {
        self.canvas = (width, height);
        self
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.layouts.iter().position(|l| l.id == id)
    }
}

impl Default for InMemoryLayoutStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutStore for InMemoryLayoutStore {
    fn load(&self, id: &str) -> StoreResult<Layout> {
        self.position(id)
            .map(|i| self.layouts[i].clone())
            .ok_or_else(|| StoreError::not_found(id))
    }

    fn save(&mut self, layout: &Layout) -> StoreResult<()> {
        if layout.is_default {
            for other in self.layouts.iter_mut() {
                other.is_default = false;
            }
        }
        match self.position(&layout.id) {
            Some(i) => self.layouts[i] = layout.clone(),
            None => self.layouts.push(layout.clone()),
        }
        debug!("Saved layout {} in memory", layout.id);
        Ok(())
    }

    fn create(&mut self, name: &str) -> StoreResult<Layout> {
        let (width, height) = self.canvas;
        let layout = Layout::with_size(new_layout_id(), name, width, height);
        self.layouts.push(layout.clone());
        Ok(layout)
    }

    fn list(&self) -> StoreResult<Vec<Layout>> {
        Ok(self.layouts.clone())
    }

    fn set_default(&mut self, id: &str) -> StoreResult<()> {
        if self.position(id).is_none() {
            return Err(StoreError::not_found(id));
        }
        for layout in self.layouts.iter_mut() {
            layout.is_default = layout.id == id;
        }
        Ok(())
    }

    fn delete(&mut self, id: &str) -> StoreResult<()> {
        let index = self.position(id).ok_or_else(|| StoreError::not_found(id))?;
        self.layouts.remove(index);
        Ok(())
    }
}

/// Store that keeps one pretty-printed JSON file per layout in a directory.
#[derive(Debug, Clone)]
pub struct JsonLayoutStore {
    dir: PathBuf,
    canvas: (i32, i32),
}

impl JsonLayoutStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        info!("Opened layout store at {}", dir.display());
        Ok(Self {
            dir,
            canvas: (STANDARD_CANVAS_WIDTH, STANDARD_CANVAS_HEIGHT),
        })
    }

    /// Canvas size given to layouts made by [`LayoutStore::create`].
    pub fn with_canvas_size(mut self, width: i32, height: i32) -> Self {
        self.canvas = (width, height);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> StoreResult<PathBuf> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::backend(format!("invalid layout id: {id:?}")));
        }
        Ok(self.dir.join(format!("{id}.json")))
    }

    fn read(path: &Path) -> StoreResult<Layout> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, layout: &Layout) -> StoreResult<()> {
        let path = self.path_for(&layout.id)?;
        let json = serde_json::to_string_pretty(layout)?;
        Self::write_json(layout, &path, json)
    }

    fn write_json(layout: &Layout, path: &Path, json: String) -> StoreResult<()> {
        fs::write(path, json)?;
        debug!("Wrote layout {} to {}", layout.id, path.display());
        Ok(())
    }
}

impl LayoutStore for JsonLayoutStore {
    fn load(&self, id: &str) -> StoreResult<Layout> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Err(StoreError::not_found(id));
        }
        Self::read(&path)
    }

    fn save(&mut self, layout: &Layout) -> StoreResult<()> {
        // Validate and serialize before clearing other defaults.
        let path = self.path_for(&layout.id)?;
        let json = serde_json::to_string_pretty(layout)?;
        if layout.is_default {
            for mut other in self.list()? {
                if other.is_default && other.id != layout.id {
                    other.is_default = false;
                    self.write(&other)?;
                }
            }
        }
        Self::write_json(layout, &path, json)
    }

    fn create(&mut self, name: &str) -> StoreResult<Layout> {
        let (width, height) = self.canvas;
        let layout = Layout::with_size(new_layout_id(), name, width, height);
        self.write(&layout)?;
        info!("Created layout {} ({})", layout.name, layout.id);
        Ok(layout)
    }

    fn list(&self) -> StoreResult<Vec<Layout>> {
        let mut layouts = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match Self::read(&path) {
                Ok(layout) => layouts.push(layout),
                Err(e) => warn!("Skipping unreadable layout file {}: {}", path.display(), e),
            }
        }
        layouts.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(layouts)
    }

    fn set_default(&mut self, id: &str) -> StoreResult<()> {
        let mut target = self.load(id)?;
        for mut other in self.list()? {
            if other.is_default && other.id != id {
                other.is_default = false;
                self.write(&other)?;
            }
        }
        if !target.is_default {
            target.is_default = true;
            self.write(&target)?;
        }
        Ok(())
    }

    fn delete(&mut self, id: &str) -> StoreResult<()> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Err(StoreError::not_found(id));
        }
        fs::remove_file(&path)?;
        info!("Deleted layout {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use labelkit_core::ElementType;

    #[test]
    fn test_in_memory_round_trip() {
        let mut store = InMemoryLayoutStore::new();
        let mut layout = store.create("Retail").unwrap();
        assert_eq!((layout.width, layout.height), (400, 600));
        assert!(uuid::Uuid::parse_str(&layout.id).is_ok());

        layout.elements.push(Element::new(1, ElementType::LotCode));
        store.save(&layout).unwrap();
        assert_eq!(store.load(&layout.id).unwrap(), layout);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_in_memory_single_default() {
        let mut store = InMemoryLayoutStore::new();
        let a = store.create("A").unwrap();
        let b = store.create("B").unwrap();

        store.set_default(&a.id).unwrap();
        store.set_default(&b.id).unwrap();
        let defaults: Vec<_> = store.list().unwrap().into_iter().filter(|l| l.is_default).collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].id, b.id);

        let mut a = store.load(&a.id).unwrap();
        a.is_default = true;
        store.save(&a).unwrap();
        assert_eq!(store.default_layout().unwrap().unwrap().id, a.id);
        assert!(!store.load(&b.id).unwrap().is_default);
    }

    #[test]
    fn test_create_uses_configured_canvas() {
        let mut store = InMemoryLayoutStore::new().with_canvas_size(300, 200);
        let layout = store.create("Small").unwrap();
        assert_eq!((layout.width, layout.height), (300, 200));
    }

    #[test]
    fn test_in_memory_missing() {
        let mut store = InMemoryLayoutStore::new();
        assert!(matches!(store.load("nope"), Err(StoreError::NotFound { .. })));
        assert!(matches!(store.delete("nope"), Err(StoreError::NotFound { .. })));
        assert!(matches!(store.set_default("nope"), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_json_rejects_path_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonLayoutStore::open(dir.path()).unwrap();
        assert!(matches!(store.load("../etc/passwd"), Err(StoreError::Backend { .. })));
        assert!(matches!(store.load(""), Err(StoreError::Backend { .. })));
    }

    #[test]
    fn test_json_failed_default_save_keeps_existing_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonLayoutStore::open(dir.path()).unwrap();
        let a = store.create("A").unwrap();
        store.set_default(&a.id).unwrap();

        let mut bad = Layout::new("bad id/..", "Bad");
        bad.is_default = true;
        assert!(matches!(store.save(&bad), Err(StoreError::Backend { .. })));

        assert_eq!(store.default_layout().unwrap().unwrap().id, a.id);
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
