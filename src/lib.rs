//! Collapsible tabbed sidebar for bevy_egui map applications.
//!
//! Renders a side panel docked to the left or right edge of a map viewport:
//! a strip of clickable tab handles (anchored to the top or bottom of the
//! strip) plus one content pane for the selected tab. The embedder owns all
//! state — which tab is selected and whether the panel is collapsed — and
//! learns about user intent through `on_open`/`on_close` callbacks.
//!
//! The interesting part is input isolation. Map cameras read bevy's input
//! layer directly for pan/zoom/drag gestures, so without help a drag that
//! starts on a tab handle would also pan the map underneath the panel.
//! [`SidebarPlugin`] registers systems around a [`SidebarShield`] resource
//! that swallow those gestures while they originate inside the panel region,
//! leaving clicks untouched so the sidebar's own affordances keep working.
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass};
//! use bevy_map_sidebar::{Sidebar, SidebarPlugin, SidebarShield, Tab};
//!
//! #[derive(Resource, Default)]
//! struct PanelState {
//!     selected: Option<String>,
//! }
//!
//! fn sidebar_ui(
//!     mut contexts: EguiContexts,
//!     mut shield: ResMut<SidebarShield>,
//!     mut state: ResMut<PanelState>,
//! ) -> Result {
//!     let tabs = vec![Tab::new("layers", "Layers", "🗺")];
//!     let response = Sidebar::new("map_sidebar", &tabs)
//!         .selected(state.selected.as_deref().unwrap_or(""))
//!         .show(contexts.ctx_mut()?, &mut shield, |ui, _id| {
//!             ui.label("layer list");
//!         })?;
//!     if let Some(id) = response.opened {
//!         state.selected = Some(id);
//!     }
//!     if response.closed {
//!         state.selected = None;
//!     }
//!     Ok(())
//! }
//!
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins(EguiPlugin::default())
//!     .add_plugins(SidebarPlugin)
//!     .init_resource::<PanelState>()
//!     .add_systems(EguiPrimaryContextPass, sidebar_ui)
//!     .run();
//! ```

pub mod constants;
mod error;
mod pane;
mod shield;
mod sidebar;
mod tab;
mod tab_bar;

pub use error::SidebarError;
pub use shield::{InputKind, SidebarShield, ISOLATED_KINDS};
pub use sidebar::{Sidebar, SidebarResponse};
pub use tab::{Anchor, DockSide, Tab, TabIcon};
pub use tab_bar::{HandleAttrs, RenderedHandle};

use bevy::prelude::*;

/// Registers the [`SidebarShield`] resource and the systems that keep
/// panel-originated gestures away from the embedder's map systems.
///
/// The shield systems run in `PreUpdate` after input collection, so any
/// map-gesture system in `Update` (or later) observes the filtered input.
pub struct SidebarPlugin;

impl Plugin for SidebarPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SidebarShield>()
            .add_systems(
                PreUpdate,
                (shield::track_gesture_origin, shield::shield_map_input)
                    .chain()
                    .after(bevy::input::InputSystems)
                    // egui must read its copy of the input first, or swallowed
                    // messages would never reach the sidebar's own widgets
                    .after(bevy_egui::EguiPreUpdateSet::ProcessInput),
            )
            .add_systems(Last, shield::expire_shield);
    }
}
