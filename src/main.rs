//! Tabspace: tab workspace core for an AI browser shell.
//!
//! Console demo: builds a workspace, arranges it, filters it and dispatches
//! a few shortcuts. The UI host talks to the `tabspace-rpc` binary instead.

use tabspace::app::App;
use tabspace::managers::tab_store::{NoJitter, TabStoreTrait};
use tabspace::services::settings_engine::SettingsEngine;
use tabspace::types::tab::{meta_keys, MetadataPatch};
use tabspace::types::view::{FilterBy, LayoutStrategy};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              Tabspace v{} — Demo Mode                ║", env!("CARGO_PKG_VERSION"));
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut app = App::with_parts(SettingsEngine::new(None), Box::new(NoJitter));

    demo_tabs(&mut app);
    demo_layouts(&mut app);
    demo_projection(&mut app);
    demo_shortcuts(&mut app);

    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ Workspace demo finished with {} tabs", app.tab_store.tab_count());
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_tabs(app: &mut App) {
    section("Tab Store");
    for url in [
        "https://github.com/rust-lang/rust",
        "https://www.youtube.com/watch?v=demo",
        "https://en.wikipedia.org/wiki/Bubble",
        "https://www.amazon.com/cart",
        "about:blank",
    ] {
        let tab = app.tab_store.create_tab(Some(url));
        println!(
            "  + {:<24} at ({:>5.1}, {:>5.1})  [{}]",
            tab.title,
            tab.position.x,
            tab.position.y,
            app.category_of(&tab)
        );
    }
    let first = app.tab_store.list()[0].id.clone();
    app.tab_store
        .update_metadata(&first, MetadataPatch::new().set(meta_keys::BOOKMARKED, true));
    println!("  Active: {:?}", app.tab_store.active().map(|t| t.title.as_str()));
    println!();
}

fn demo_layouts(app: &mut App) {
    section("Layout Strategies");
    for strategy in [
        LayoutStrategy::Grid,
        LayoutStrategy::Circle,
        LayoutStrategy::Spiral,
        LayoutStrategy::CategoryClusters,
    ] {
        let placements = app.apply_layout(strategy);
        let first = placements.first().map(|p| p.position);
        println!("  {:?}: {} tabs, first at {:?}", strategy, placements.len(), first);
    }
    println!();
}

fn demo_projection(app: &mut App) {
    section("View Projector");
    app.set_search_term("wiki");
    println!("  search 'wiki' → {} visible", app.project().visible_tabs.len());
    app.set_search_term("");
    app.set_filter(FilterBy::Bookmarked);
    println!("  bookmarked → {} visible", app.project().visible_tabs.len());
    app.set_filter(FilterBy::All);
    for group in app.project().groups {
        println!("  group {:<14} {} tab(s)", group.category.label(), group.tab_ids.len());
    }
    println!();
}

fn demo_shortcuts(app: &mut App) {
    section("Shortcuts");
    for keys in ["Ctrl+T", "Ctrl+1", "Ctrl+Shift+M", "Ctrl+W", "Ctrl+Q"] {
        match app.handle_shortcut(keys) {
            Some(outcome) => println!("  {:<14} → {:?} (applied: {})", keys, outcome.command, outcome.applied),
            None => println!("  {:<14} → unbound", keys),
        }
    }
    println!();
}
