//! App Core for Tabspace.
//!
//! Central struct owning the tab store, settings, shortcuts and the current
//! view. Backend flows are split into a snapshot step, an async call made
//! without holding the app, and an apply step.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{info, warn};

use crate::managers::shortcut_manager::{ShortcutManager, ShortcutManagerTrait};
use crate::managers::tab_store::{JitterSource, NoJitter, RandomJitter, TabStore, TabStoreTrait};
use crate::services::address_resolver::{resolve_input, ResolvedInput};
use crate::services::backend_client::BackendClient;
use crate::services::classifier::Classifier;
use crate::services::layout;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::view_projector::{self, ProjectionInput};
use crate::types::backend::{RemoteTab, TabAnalysis, TabSummary};
use crate::types::category::Category;
use crate::types::errors::{BackendError, SettingsError};
use crate::types::settings::ShellContext;
use crate::types::shortcut::WorkspaceCommand;
use crate::types::tab::{meta_keys, MetadataPatch, Tab};
use crate::types::view::{FilterBy, LayoutStrategy, Placement, ProjectedView, ViewMode, ViewState};
use crate::types::workspace::WorkspaceBounds;

/// What a shortcut did, for the host to reflect in its UI.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandOutcome {
    pub command: WorkspaceCommand,
    pub applied: bool,
}

/// Central application struct.
pub struct App {
    pub tab_store: TabStore,
    pub settings_engine: SettingsEngine,
    pub shortcut_manager: ShortcutManager,
    pub classifier: Classifier,
    view: ViewState,
    context: ShellContext,
}

impl App {
    /// Creates an App, loading settings from `config_path` (or the platform default).
    pub fn new(config_path: Option<String>) -> Self {
        let mut settings_engine = SettingsEngine::new(config_path);
        let settings = settings_engine.load_or_default().clone();

        let jitter: Box<dyn JitterSource> = if settings.workspace.placement_jitter {
            Box::new(RandomJitter::from_entropy())
        } else {
            Box::new(NoJitter)
        };
        Self::with_parts(settings_engine, jitter)
    }

    /// Creates an App with an explicit jitter source, for deterministic placement.
    pub fn with_parts(settings_engine: SettingsEngine, jitter: Box<dyn JitterSource>) -> Self {
        let settings = settings_engine.get_settings().clone();
        let tab_store = TabStore::with_jitter(settings.workspace.bounds(), jitter);
        let shortcut_manager = ShortcutManager::with_overrides(&settings.shortcuts);
        let view = ViewState {
            search_term: String::new(),
            filter_by: settings.workspace.default_filter,
            view_mode: settings.workspace.default_view_mode,
        };
        Self {
            tab_store,
            settings_engine,
            shortcut_manager,
            classifier: Classifier::default(),
            view,
            context: ShellContext::from_settings(&settings),
        }
    }

    /// Opens the welcome tab on an empty workspace when settings ask for it.
    pub fn startup(&mut self) {
        if self.tab_store.tab_count() == 0 {
            let url = if self.settings_engine.get_settings().general.show_welcome {
                crate::types::tab::WELCOME_URL.to_string()
            } else {
                self.settings_engine.get_settings().general.homepage.clone()
            };
            self.tab_store.create_tab(Some(&url));
        }
        info!(tabs = self.tab_store.tab_count(), "workspace ready");
    }

    pub fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn context(&self) -> &ShellContext {
        &self.context
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.view.search_term = term.to_string();
    }

    pub fn set_filter(&mut self, filter_by: FilterBy) {
        self.view.filter_by = filter_by;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view.view_mode = view_mode;
    }

    /// Projects the workspace at the current time.
    pub fn project(&self) -> ProjectedView {
        self.project_at(Self::now())
    }

    pub fn project_at(&self, now: i64) -> ProjectedView {
        let input = ProjectionInput {
            tabs: self.tab_store.list(),
            active_tab_id: self.tab_store.active_id(),
            view: &self.view,
            now,
        };
        view_projector::project(&input, &self.classifier)
    }

    pub fn category_of(&self, tab: &Tab) -> Category {
        self.classifier.classify(tab)
    }

    /// Computes a layout and applies it through `move_tab`, which clamps.
    pub fn apply_layout(&mut self, strategy: LayoutStrategy) -> Vec<Placement> {
        let placements = layout::compute_layout(
            strategy,
            self.tab_store.list(),
            self.tab_store.workspace(),
            &self.classifier,
        );
        for placement in &placements {
            self.tab_store
                .move_tab(&placement.tab_id, placement.position.x, placement.position.y);
        }
        info!(?strategy, tabs = placements.len(), "applied layout");
        placements
    }

    /// Resizes the workspace. Tabs outside the new bounds stay put until moved.
    pub fn resize_workspace(&mut self, width: f64, height: f64) {
        let mut bounds: WorkspaceBounds = *self.tab_store.workspace();
        bounds.size.width = width;
        bounds.size.height = height;
        self.tab_store.set_workspace(bounds);
    }

    /// Resolves address bar input and opens it in the active tab, or a new
    /// tab when the workspace is empty.
    pub fn submit_address(&mut self, input: &str) -> ResolvedInput {
        let resolved = resolve_input(input, &self.settings_engine.get_settings().general.search_url);
        let active = self.tab_store.active_id().map(str::to_string);
        match active {
            Some(id) => {
                self.tab_store.navigate_tab(&id, resolved.url());
            }
            None => {
                self.tab_store.create_tab(Some(resolved.url()));
            }
        }
        self.context.address_bar_focused = false;
        resolved
    }

    /// Updates a setting and refreshes everything derived from settings.
    pub fn set_setting(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        self.settings_engine.set_value(key, value)?;
        let settings = self.settings_engine.get_settings().clone();
        if key == "workspace" || key.starts_with("workspace.") {
            // Margins and tab size come from settings; the live size survives
            // unless the change is to the size itself.
            let mut bounds = settings.workspace.bounds();
            if !matches!(key, "workspace" | "workspace.width" | "workspace.height") {
                bounds.size = self.tab_store.workspace().size;
            }
            self.tab_store.set_workspace(bounds);
        }
        self.shortcut_manager = ShortcutManager::with_overrides(&settings.shortcuts);
        let transient = self.context.clone();
        self.context = ShellContext {
            voice_listening: transient.voice_listening && settings.assistant.voice_commands_enabled,
            address_bar_focused: transient.address_bar_focused,
            tab_search_focused: transient.tab_search_focused,
            ..ShellContext::from_settings(&settings)
        };
        Ok(())
    }

    /// Dispatches a key chord. Returns `None` if nothing is bound to it.
    pub fn handle_shortcut(&mut self, keys: &str) -> Option<CommandOutcome> {
        let command = self.shortcut_manager.dispatch(keys)?;
        let applied = self.execute(command);
        Some(CommandOutcome { command, applied })
    }

    /// Runs a workspace command. Returns whether it changed anything.
    pub fn execute(&mut self, command: WorkspaceCommand) -> bool {
        match command {
            WorkspaceCommand::NewTab => {
                self.tab_store.create_tab(None);
                true
            }
            WorkspaceCommand::CloseTab => match self.tab_store.active_id().map(str::to_string) {
                Some(id) => self.tab_store.close_tab(&id),
                None => false,
            },
            WorkspaceCommand::NextTab => self.tab_store.next_tab(),
            WorkspaceCommand::PreviousTab => self.tab_store.previous_tab(),
            WorkspaceCommand::SwitchToIndex(index) => self.tab_store.switch_to_index(index),
            WorkspaceCommand::FocusAddressBar => {
                self.context.address_bar_focused = true;
                self.context.tab_search_focused = false;
                true
            }
            WorkspaceCommand::FocusTabSearch => {
                self.context.tab_search_focused = true;
                self.context.address_bar_focused = false;
                true
            }
            WorkspaceCommand::ToggleVoiceCommand => {
                if !self.context.voice_commands_enabled {
                    return false;
                }
                self.context.voice_listening = !self.context.voice_listening;
                true
            }
            WorkspaceCommand::ToggleAssistant => {
                self.context.assistant_visible = !self.context.assistant_visible;
                true
            }
            WorkspaceCommand::TogglePerformanceMonitor => {
                self.context.performance_monitor_visible = !self.context.performance_monitor_visible;
                true
            }
            WorkspaceCommand::CycleViewMode => {
                self.view.view_mode = self.view.view_mode.next();
                true
            }
            WorkspaceCommand::ApplyLayout(strategy) => {
                !self.apply_layout(strategy).is_empty()
            }
        }
    }

    /// Tabs to send for analysis: everything not yet analyzed.
    pub fn pending_analysis(&self) -> Vec<TabSummary> {
        self.tab_store
            .list()
            .iter()
            .filter(|t| !t.metadata.flag(meta_keys::AI_ANALYZED))
            .map(|t| TabSummary {
                tab_id: t.id.clone(),
                url: t.url.clone(),
                title: t.title.clone(),
            })
            .collect()
    }

    /// Applies analysis results. Tabs closed in the meantime are skipped.
    /// Returns how many tabs were updated.
    pub fn apply_analysis(&mut self, analyses: &[TabAnalysis]) -> usize {
        let mut updated = 0;
        for analysis in analyses {
            let mut patch = MetadataPatch::new().set(meta_keys::AI_ANALYZED, true);
            if let Some(category) = analysis.category.as_deref().and_then(Category::from_label) {
                patch = patch.set(meta_keys::CATEGORY, category.label());
            }
            if let Some(summary) = &analysis.summary {
                patch = patch.set(meta_keys::SUMMARY, summary.as_str());
            }
            if self.tab_store.update_metadata(&analysis.tab_id, patch) {
                updated += 1;
            }
        }
        updated
    }

    /// Applies the backend's view of a new tab, or logs the failure and keeps
    /// the local tab untouched.
    pub fn apply_remote_tab(&mut self, tab_id: &str, result: Result<RemoteTab, BackendError>) -> bool {
        match result {
            Ok(remote) => {
                if let Some(title) = remote.title.as_deref().filter(|t| !t.is_empty()) {
                    self.tab_store.set_title(tab_id, title);
                }
                self.tab_store
                    .update_metadata(tab_id, MetadataPatch::new().remove(meta_keys::LOADING))
            }
            Err(e) => {
                warn!(tab_id, error = %e, "remote tab creation failed, keeping local tab");
                self.tab_store
                    .update_metadata(tab_id, MetadataPatch::new().remove(meta_keys::LOADING));
                false
            }
        }
    }
}

/// Creates a tab locally, registers it with the backend, and applies the
/// answer. The local tab survives any backend failure.
///
/// The app lock is never held across the network call.
pub async fn open_tab_with_backend(
    app: &std::sync::Mutex<App>,
    client: &BackendClient,
    url: Option<&str>,
) -> Result<Tab, String> {
    let tab = {
        let mut a = app.lock().map_err(|e| e.to_string())?;
        let tab = a.tab_store.create_tab(url);
        a.tab_store
            .update_metadata(&tab.id, MetadataPatch::new().set(meta_keys::LOADING, true));
        tab
    };

    let result = client.create_tab(&tab.id, &tab.url).await;

    let mut a = app.lock().map_err(|e| e.to_string())?;
    a.apply_remote_tab(&tab.id, result);
    Ok(a.tab_store.get_tab(&tab.id).cloned().unwrap_or(tab))
}

/// Sends every unanalyzed tab to the backend and records the results.
/// Returns the number of tabs updated; a backend failure is logged and
/// reported as zero.
pub async fn analyze_tabs_with_backend(
    app: &std::sync::Mutex<App>,
    client: &BackendClient,
) -> Result<usize, String> {
    let pending = {
        let a = app.lock().map_err(|e| e.to_string())?;
        a.pending_analysis()
    };
    if pending.is_empty() {
        return Ok(0);
    }

    match client.analyze_tabs(pending).await {
        Ok(analyses) => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            Ok(a.apply_analysis(&analyses))
        }
        Err(e) => {
            warn!(error = %e, "tab analysis failed");
            Ok(0)
        }
    }
}
