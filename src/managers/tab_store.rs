use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use uuid::Uuid;

use crate::services::address_resolver::derive_title;
use crate::services::geometry;
use crate::types::tab::{MetadataPatch, Position, Tab, TabMetadata, BLANK_URL};
use crate::types::workspace::WorkspaceBounds;

/// Slots new tabs cycle through, keyed by `tab_count % 5`.
pub const PRESET_POSITIONS: [(f64, f64); 5] = [
    (200.0, 200.0),
    (400.0, 250.0),
    (300.0, 350.0),
    (500.0, 300.0),
    (150.0, 400.0),
];

/// Upper bound (exclusive) of the placement jitter on each axis.
pub const JITTER_RANGE: f64 = 50.0;

/// Source of the cosmetic offset added to a new tab's preset slot.
pub trait JitterSource: Send {
    /// Returns an `(dx, dy)` pair, each in `[0, JITTER_RANGE)`.
    fn next_offset(&mut self) -> (f64, f64);
}

/// Random jitter backed by a seedable RNG.
pub struct RandomJitter {
    rng: StdRng,
}

impl RandomJitter {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl JitterSource for RandomJitter {
    fn next_offset(&mut self) -> (f64, f64) {
        (
            self.rng.gen_range(0.0..JITTER_RANGE),
            self.rng.gen_range(0.0..JITTER_RANGE),
        )
    }
}

/// Places every tab exactly on its preset slot.
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn next_offset(&mut self) -> (f64, f64) {
        (0.0, 0.0)
    }
}

/// Trait defining the tab store interface.
///
/// Operations that take an id return `false` and change nothing when the id
/// is unknown.
pub trait TabStoreTrait {
    fn create_tab(&mut self, url: Option<&str>) -> Tab;
    fn close_tab(&mut self, tab_id: &str) -> bool;
    fn switch_tab(&mut self, tab_id: &str) -> bool;
    fn move_tab(&mut self, tab_id: &str, x: f64, y: f64) -> bool;
    fn update_metadata(&mut self, tab_id: &str, patch: MetadataPatch) -> bool;
    fn navigate_tab(&mut self, tab_id: &str, url: &str) -> bool;
    fn set_title(&mut self, tab_id: &str, title: &str) -> bool;
    fn next_tab(&mut self) -> bool;
    fn previous_tab(&mut self) -> bool;
    fn switch_to_index(&mut self, index: usize) -> bool;
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    fn list(&self) -> &[Tab];
    fn active(&self) -> Option<&Tab>;
    fn active_id(&self) -> Option<&str>;
    fn tab_count(&self) -> usize;
    fn workspace(&self) -> &WorkspaceBounds;
    fn set_workspace(&mut self, bounds: WorkspaceBounds);
}

/// In-memory store of the workspace's tabs.
pub struct TabStore {
    tabs: Vec<Tab>,
    active_tab_id: Option<String>,
    workspace: WorkspaceBounds,
    jitter: Box<dyn JitterSource>,
}

impl TabStore {
    pub fn new() -> Self {
        Self::with_jitter(WorkspaceBounds::default(), Box::new(RandomJitter::from_entropy()))
    }

    pub fn with_jitter(workspace: WorkspaceBounds, jitter: Box<dyn JitterSource>) -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
            workspace,
            jitter,
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn find_tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn find_tab_mut(&mut self, tab_id: &str) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == tab_id)
    }

    fn active_index(&self) -> Option<usize> {
        self.active_tab_id
            .as_deref()
            .and_then(|id| self.find_tab_index(id))
    }

    fn next_position(&mut self) -> Position {
        let (base_x, base_y) = PRESET_POSITIONS[self.tabs.len() % PRESET_POSITIONS.len()];
        let (dx, dy) = self.jitter.next_offset();
        Position::new(base_x + dx, base_y + dy)
    }

    /// Inserts a tab built elsewhere (e.g. with a fixed id or timestamp) and
    /// makes it active. Returns `false` if the id is already taken.
    pub fn insert_tab(&mut self, tab: Tab) -> bool {
        if self.find_tab_index(&tab.id).is_some() {
            return false;
        }
        self.active_tab_id = Some(tab.id.clone());
        self.tabs.push(tab);
        true
    }
}

impl Default for TabStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TabStoreTrait for TabStore {
    /// Create a new tab at the next preset slot and make it active.
    fn create_tab(&mut self, url: Option<&str>) -> Tab {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(BLANK_URL)
            .to_string();
        let tab = Tab {
            id: Uuid::new_v4().to_string(),
            title: derive_title(&url),
            url,
            created_at: Self::now(),
            position: self.next_position(),
            metadata: TabMetadata::new(),
        };
        debug!(tab_id = %tab.id, url = %tab.url, "created tab");
        self.active_tab_id = Some(tab.id.clone());
        self.tabs.push(tab.clone());
        tab
    }

    /// Close a tab. If it was active, the last remaining tab becomes active.
    fn close_tab(&mut self, tab_id: &str) -> bool {
        let Some(idx) = self.find_tab_index(tab_id) else {
            return false;
        };
        self.tabs.remove(idx);
        if self.active_tab_id.as_deref() == Some(tab_id) {
            self.active_tab_id = self.tabs.last().map(|t| t.id.clone());
        }
        debug!(tab_id, remaining = self.tabs.len(), "closed tab");
        true
    }

    fn switch_tab(&mut self, tab_id: &str) -> bool {
        if self.find_tab_index(tab_id).is_none() {
            return false;
        }
        self.active_tab_id = Some(tab_id.to_string());
        true
    }

    /// Move a tab, clamped to the current workspace bounds.
    fn move_tab(&mut self, tab_id: &str, x: f64, y: f64) -> bool {
        let position = geometry::clamp_to_bounds(x, y, &self.workspace);
        match self.find_tab_mut(tab_id) {
            Some(tab) => {
                tab.position = position;
                true
            }
            None => false,
        }
    }

    fn update_metadata(&mut self, tab_id: &str, patch: MetadataPatch) -> bool {
        match self.find_tab_mut(tab_id) {
            Some(tab) => {
                tab.metadata.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Point a tab at a new URL; the title falls back to the derived placeholder.
    fn navigate_tab(&mut self, tab_id: &str, url: &str) -> bool {
        match self.find_tab_mut(tab_id) {
            Some(tab) => {
                tab.url = url.to_string();
                tab.title = derive_title(url);
                true
            }
            None => false,
        }
    }

    fn set_title(&mut self, tab_id: &str, title: &str) -> bool {
        match self.find_tab_mut(tab_id) {
            Some(tab) => {
                tab.title = title.to_string();
                true
            }
            None => false,
        }
    }

    /// Activate the tab after the active one, wrapping around.
    fn next_tab(&mut self) -> bool {
        let Some(idx) = self.active_index() else {
            return false;
        };
        let next = (idx + 1) % self.tabs.len();
        self.active_tab_id = Some(self.tabs[next].id.clone());
        true
    }

    /// Activate the tab before the active one, wrapping around.
    fn previous_tab(&mut self) -> bool {
        let Some(idx) = self.active_index() else {
            return false;
        };
        let prev = if idx == 0 { self.tabs.len() - 1 } else { idx - 1 };
        self.active_tab_id = Some(self.tabs[prev].id.clone());
        true
    }

    fn switch_to_index(&mut self, index: usize) -> bool {
        match self.tabs.get(index) {
            Some(tab) => {
                self.active_tab_id = Some(tab.id.clone());
                true
            }
            None => false,
        }
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn list(&self) -> &[Tab] {
        &self.tabs
    }

    fn active(&self) -> Option<&Tab> {
        self.active_tab_id.as_deref().and_then(|id| self.get_tab(id))
    }

    fn active_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn workspace(&self) -> &WorkspaceBounds {
        &self.workspace
    }

    /// Replace the workspace bounds. Existing positions are left alone and
    /// get clamped again on their next move.
    fn set_workspace(&mut self, bounds: WorkspaceBounds) {
        self.workspace = bounds;
    }
}
