//! Demo: a pannable, zoomable map with a docked sidebar.
//!
//! Drag with the left or middle mouse button to pan, scroll to zoom. The
//! same gestures performed on the sidebar go nowhere near the camera.

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin, EguiPrimaryContextPass};

use bevy_map_sidebar::{Anchor, DockSide, Sidebar, SidebarPlugin, SidebarShield, Tab, TabIcon};

/// Set up file logging for debug builds
#[cfg(debug_assertions)]
fn setup_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use std::fs::OpenOptions;
    use std::io::Write;
    use tracing_subscriber::prelude::*;

    let logs_dir = std::path::Path::new("logs");
    if std::fs::create_dir_all(logs_dir).is_err() {
        eprintln!("Failed to create logs directory");
        return None;
    }

    let log_file_path = logs_dir.join("map_viewer.log");

    // Append session separator to existing log file
    if let Ok(mut file) = OpenOptions::new().append(true).open(&log_file_path) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let separator = "=".repeat(80);
        let _ = writeln!(
            file,
            "\n\n{}\n=== New Session Started at {} ===\n{}\n",
            separator, timestamp, separator
        );
    }

    let file_appender = tracing_appender::rolling::never(logs_dir, "map_viewer.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,bevy_map_sidebar=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(guard)
}

#[cfg(not(debug_assertions))]
fn setup_logging() -> Option<()> {
    None
}

#[derive(Component)]
struct MapCamera;

#[derive(Component)]
struct CameraZoom {
    scale: f32,
}

const LAYER_NAMES: [&str; 4] = ["Terrain", "Roads", "Labels", "Boundaries"];

#[derive(Resource)]
struct PanelState {
    selected: Option<String>,
    collapsed: bool,
    position: DockSide,
    layer_visible: [bool; 4],
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            selected: Some("layers".to_string()),
            collapsed: false,
            position: DockSide::Left,
            layer_visible: [true; 4],
        }
    }
}

fn spawn_map(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        MapCamera,
        CameraZoom { scale: 1.0 },
        Transform::from_translation(Vec3::new(0.0, 0.0, 1000.0)),
    ));

    // Checkerboard of tiles standing in for map content
    const TILE: f32 = 64.0;
    for row in -8..=8 {
        for col in -8..=8 {
            let color = if (row + col) % 2 == 0 {
                Color::srgb(0.22, 0.35, 0.25)
            } else {
                Color::srgb(0.30, 0.45, 0.32)
            };
            commands.spawn((
                Sprite::from_color(color, Vec2::splat(TILE)),
                Transform::from_xyz(col as f32 * TILE, row as f32 * TILE, 0.0),
            ));
        }
    }
}

fn camera_pan(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut camera_query: Query<(&mut Transform, &CameraZoom), With<MapCamera>>,
) {
    if !mouse_button.pressed(MouseButton::Left) && !mouse_button.pressed(MouseButton::Middle) {
        mouse_motion.clear();
        return;
    }

    let Ok((mut transform, zoom)) = camera_query.single_mut() else {
        return;
    };

    for event in mouse_motion.read() {
        let delta = event.delta * zoom.scale;
        transform.translation.x -= delta.x;
        transform.translation.y += delta.y;
    }
}

fn camera_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    mut camera_query: Query<&mut CameraZoom, With<MapCamera>>,
) {
    let Ok(mut zoom) = camera_query.single_mut() else {
        return;
    };

    for event in scroll_events.read() {
        let scroll_amount = match event.unit {
            MouseScrollUnit::Line => event.y * 0.1,
            MouseScrollUnit::Pixel => event.y * 0.001,
        };

        zoom.scale = (zoom.scale - scroll_amount).clamp(0.1, 10.0);
    }
}

fn apply_camera_zoom(
    mut camera_query: Query<(&CameraZoom, &mut Projection), (With<MapCamera>, Changed<CameraZoom>)>,
) {
    for (zoom, mut projection) in camera_query.iter_mut() {
        if let Projection::Orthographic(ref mut ortho) = *projection {
            ortho.scale = zoom.scale;
        }
    }
}

fn sidebar_ui(
    mut contexts: EguiContexts,
    mut shield: ResMut<SidebarShield>,
    mut state: ResMut<PanelState>,
) -> Result {
    let tabs = vec![
        Tab::new("layers", "Layers", "🗺"),
        Tab::new("legend", "Legend", TabIcon::producer(|ui| {
            ui.colored_label(egui::Color32::from_rgb(120, 190, 130), "▣");
        })),
        Tab::new("export", "Export", "⭳").disabled(true),
        Tab::new("settings", "Settings", "⚙").anchor(Anchor::Bottom),
    ];

    // on_open and on_close both update the selection, so it lives in a cell
    let next_selected = std::cell::RefCell::new(state.selected.clone());
    let mut next_collapsed = state.collapsed;
    let mut next_position = state.position;
    let mut layer_visible = state.layer_visible;

    Sidebar::new("map_sidebar", &tabs)
        .selected(state.selected.as_deref().unwrap_or(""))
        .collapsed(state.collapsed)
        .position(state.position)
        .on_open(|id| {
            // Clicking the active handle toggles its pane shut
            let mut selected = next_selected.borrow_mut();
            *selected = if selected.as_deref() == Some(id) {
                None
            } else {
                Some(id.to_string())
            };
        })
        .on_close(|| *next_selected.borrow_mut() = None)
        .show(contexts.ctx_mut()?, &mut shield, |ui, id| match id {
            "layers" => {
                ui.label("Toggle map layers:");
                for (name, visible) in LAYER_NAMES.iter().zip(layer_visible.iter_mut()) {
                    ui.checkbox(visible, *name);
                }
            }
            "legend" => {
                ui.label("Tile colors mark alternating grid cells.");
            }
            "settings" => {
                ui.checkbox(&mut next_collapsed, "Collapse panel");
                ui.horizontal(|ui| {
                    ui.label("Dock:");
                    ui.selectable_value(&mut next_position, DockSide::Left, "Left");
                    ui.selectable_value(&mut next_position, DockSide::Right, "Right");
                });
            }
            _ => {}
        })?;

    state.selected = next_selected.into_inner();
    state.collapsed = next_collapsed;
    state.position = next_position;
    state.layer_visible = layer_visible;
    Ok(())
}

fn main() {
    // Keep the guard alive for the duration of the program
    let _log_guard = setup_logging();
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Map Sidebar Demo".into(),
                resolution: (1280u32, 720u32).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins(SidebarPlugin)
        .init_resource::<PanelState>()
        .add_systems(Startup, spawn_map)
        .add_systems(Update, (camera_pan, camera_zoom, apply_camera_zoom))
        .add_systems(EguiPrimaryContextPass, sidebar_ui)
        .run();
}
