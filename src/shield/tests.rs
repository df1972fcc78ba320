//! Unit tests for the input shield.

#![cfg(test)]

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::{CursorEntered, CursorLeft, CursorMoved, PrimaryWindow};

use super::{
    expire_shield, shield_map_input, track_gesture_origin, InputKind, SidebarShield,
    ISOLATED_KINDS,
};

fn panel_region() -> Rect {
    // A 40px strip on the left edge of an 800x600 window
    Rect::from_corners(Vec2::ZERO, Vec2::new(40.0, 600.0))
}

const INSIDE: Vec2 = Vec2::new(20.0, 300.0);
const OUTSIDE: Vec2 = Vec2::new(400.0, 300.0);

// Guard lifecycle tests

#[test]
fn test_default_shield_is_detached() {
    let shield = SidebarShield::default();
    assert!(!shield.is_attached());
    assert_eq!(shield.guard_count(), 0);
    assert!(shield.region().is_none());
}

#[test]
fn test_attach_registers_one_guard_per_kind() {
    let mut shield = SidebarShield::default();
    shield.attach(panel_region());
    assert_eq!(shield.guard_count(), ISOLATED_KINDS.len());
}

#[test]
fn test_repeated_attach_never_duplicates_guards() {
    let mut shield = SidebarShield::default();
    shield.attach(panel_region());
    shield.attach(panel_region());
    shield.attach(panel_region());
    assert_eq!(shield.guard_count(), ISOLATED_KINDS.len());
}

#[test]
fn test_detach_removes_exactly_the_registered_set() {
    let mut shield = SidebarShield::default();
    shield.attach(panel_region());
    shield.detach();
    assert_eq!(shield.guard_count(), 0);
    assert!(shield.region().is_none());
}

#[test]
fn test_attach_detach_cycles_balance() {
    let mut shield = SidebarShield::default();
    for _ in 0..3 {
        shield.attach(panel_region());
        assert_eq!(shield.guard_count(), ISOLATED_KINDS.len());
        shield.detach();
        assert_eq!(shield.guard_count(), 0);
    }
}

#[test]
fn test_expire_detaches_only_after_a_frame_without_render() {
    let mut shield = SidebarShield::default();
    shield.attach(panel_region());
    // Rendered this frame: survives one expiry check
    assert!(!shield.expire());
    assert!(shield.is_attached());
    // Not rendered since: detaches
    assert!(shield.expire());
    assert!(!shield.is_attached());
    // Already detached: nothing further to do
    assert!(!shield.expire());
}

// Interception predicate tests

#[test]
fn test_click_is_never_isolated() {
    assert!(!ISOLATED_KINDS.contains(&InputKind::Click));
    let mut shield = SidebarShield::default();
    shield.attach(panel_region());
    assert!(!shield.intercepts(InputKind::Click, INSIDE));
}

#[test]
fn test_intercepts_inside_region_only() {
    let mut shield = SidebarShield::default();
    shield.attach(panel_region());
    for kind in ISOLATED_KINDS {
        assert!(shield.intercepts(*kind, INSIDE));
        assert!(!shield.intercepts(*kind, OUTSIDE));
    }
}

#[test]
fn test_detached_shield_intercepts_nothing() {
    let shield = SidebarShield::default();
    for kind in ISOLATED_KINDS {
        assert!(!shield.intercepts(*kind, INSIDE));
    }
}

// System tests

fn shield_app() -> (App, Entity) {
    let mut app = App::new();
    app.add_message::<MouseMotion>()
        .add_message::<MouseWheel>()
        .add_message::<CursorMoved>()
        .add_message::<CursorEntered>()
        .add_message::<CursorLeft>()
        .add_message::<TouchInput>()
        .init_resource::<ButtonInput<MouseButton>>()
        .init_resource::<SidebarShield>()
        .add_systems(PreUpdate, (track_gesture_origin, shield_map_input).chain())
        .add_systems(Last, expire_shield);

    let window = app
        .world_mut()
        .spawn((Window::default(), PrimaryWindow))
        .id();
    (app, window)
}

fn set_cursor(app: &mut App, window: Entity, position: Vec2) {
    let mut entity = app.world_mut().entity_mut(window);
    let mut win = entity.get_mut::<Window>().unwrap();
    win.set_physical_cursor_position(Some(position.as_dvec2()));
}

fn attach(app: &mut App) {
    app.world_mut()
        .resource_mut::<SidebarShield>()
        .attach(panel_region());
}

#[test]
fn test_motion_swallowed_when_cursor_over_panel() {
    let (mut app, window) = shield_app();
    attach(&mut app);
    set_cursor(&mut app, window, INSIDE);
    app.world_mut()
        .resource_mut::<Messages<MouseMotion>>()
        .write(MouseMotion { delta: Vec2::ONE });

    app.update();

    assert!(app.world().resource::<Messages<MouseMotion>>().is_empty());
}

#[test]
fn test_motion_untouched_away_from_panel() {
    let (mut app, window) = shield_app();
    attach(&mut app);
    set_cursor(&mut app, window, OUTSIDE);
    app.world_mut()
        .resource_mut::<Messages<MouseMotion>>()
        .write(MouseMotion { delta: Vec2::ONE });

    app.update();

    assert!(!app.world().resource::<Messages<MouseMotion>>().is_empty());
}

#[test]
fn test_motion_untouched_when_detached() {
    let (mut app, window) = shield_app();
    set_cursor(&mut app, window, INSIDE);
    app.world_mut()
        .resource_mut::<Messages<MouseMotion>>()
        .write(MouseMotion { delta: Vec2::ONE });

    app.update();

    assert!(!app.world().resource::<Messages<MouseMotion>>().is_empty());
}

#[test]
fn test_wheel_swallowed_over_panel() {
    let (mut app, window) = shield_app();
    attach(&mut app);
    set_cursor(&mut app, window, INSIDE);
    app.world_mut()
        .resource_mut::<Messages<MouseWheel>>()
        .write(MouseWheel {
            unit: MouseScrollUnit::Line,
            x: 0.0,
            y: 1.0,
            window,
        });

    app.update();

    assert!(app.world().resource::<Messages<MouseWheel>>().is_empty());
}

#[test]
fn test_button_state_reset_over_panel() {
    let (mut app, window) = shield_app();
    attach(&mut app);
    set_cursor(&mut app, window, INSIDE);
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Middle);

    app.update();

    let buttons = app.world().resource::<ButtonInput<MouseButton>>();
    assert!(!buttons.pressed(MouseButton::Middle));
    assert!(!buttons.just_pressed(MouseButton::Middle));
}

#[test]
fn test_touches_filtered_by_their_own_position() {
    let (mut app, window) = shield_app();
    attach(&mut app);
    let mut touches = app.world_mut().resource_mut::<Messages<TouchInput>>();
    touches.write(TouchInput {
        phase: TouchPhase::Started,
        position: INSIDE,
        window,
        force: None,
        id: 1,
    });
    touches.write(TouchInput {
        phase: TouchPhase::Moved,
        position: OUTSIDE,
        window,
        force: None,
        id: 2,
    });

    app.update();

    let touches = app.world().resource::<Messages<TouchInput>>();
    assert_eq!(touches.len(), 1);
}

#[test]
fn test_cursor_moves_filtered_by_reported_position() {
    let (mut app, window) = shield_app();
    attach(&mut app);
    let mut moved = app.world_mut().resource_mut::<Messages<CursorMoved>>();
    moved.write(CursorMoved {
        window,
        position: INSIDE,
        delta: Some(Vec2::ONE),
    });
    moved.write(CursorMoved {
        window,
        position: OUTSIDE,
        delta: Some(Vec2::ONE),
    });

    app.update();

    assert_eq!(app.world().resource::<Messages<CursorMoved>>().len(), 1);
}

#[test]
fn test_drag_started_on_map_keeps_panning_across_panel() {
    let (mut app, window) = shield_app();
    attach(&mut app);

    // Frame 1: press starts on the map surface
    set_cursor(&mut app, window, OUTSIDE);
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.update();
    // Keep the shield attached across frames, as a rendering sidebar would
    attach(&mut app);

    // Frame 2: cursor crosses into the panel mid-drag
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .clear();
    set_cursor(&mut app, window, INSIDE);
    app.world_mut()
        .resource_mut::<Messages<MouseMotion>>()
        .write(MouseMotion { delta: Vec2::ONE });
    app.update();

    // The gesture originated on the map, so motion must survive
    assert!(!app.world().resource::<Messages<MouseMotion>>().is_empty());
}

#[test]
fn test_drag_started_on_panel_leaves_pan_gate_closed() {
    let (mut app, window) = shield_app();
    attach(&mut app);

    // Frame 1: press starts on a tab handle; the shield resets button state
    set_cursor(&mut app, window, INSIDE);
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.update();
    attach(&mut app);

    let buttons = app.world().resource::<ButtonInput<MouseButton>>();
    assert!(!buttons.pressed(MouseButton::Left));

    // Frame 2: cursor dragged out over the map. No new press message arrives
    // while the physical button stays held, so a pan system gated on the
    // held button (as map cameras are) keeps seeing it released.
    set_cursor(&mut app, window, OUTSIDE);
    app.world_mut()
        .resource_mut::<Messages<MouseMotion>>()
        .write(MouseMotion { delta: Vec2::ONE });
    app.update();

    let buttons = app.world().resource::<ButtonInput<MouseButton>>();
    assert!(!buttons.pressed(MouseButton::Left));
}

#[derive(Resource, Default)]
struct UiReaderLog {
    cursor_moves: usize,
}

fn read_ui_input(mut log: ResMut<UiReaderLog>, mut moved: MessageReader<CursorMoved>) {
    log.cursor_moves += moved.read().count();
}

#[test]
fn test_ui_input_pass_reads_messages_before_the_shield_drains_them() {
    // The plugin orders the shield after bevy_egui's input-processing set.
    // A reader standing in for that set must observe a cursor message the
    // shield goes on to swallow, or panel widgets would never see input.
    let mut app = App::new();
    app.add_plugins(crate::SidebarPlugin)
        .add_message::<MouseMotion>()
        .add_message::<MouseWheel>()
        .add_message::<CursorMoved>()
        .add_message::<CursorEntered>()
        .add_message::<CursorLeft>()
        .add_message::<TouchInput>()
        .init_resource::<ButtonInput<MouseButton>>()
        .init_resource::<UiReaderLog>()
        .add_systems(
            PreUpdate,
            read_ui_input.in_set(bevy_egui::EguiPreUpdateSet::ProcessInput),
        );
    let window = app
        .world_mut()
        .spawn((Window::default(), PrimaryWindow))
        .id();

    attach(&mut app);
    set_cursor(&mut app, window, INSIDE);
    app.world_mut()
        .resource_mut::<Messages<CursorMoved>>()
        .write(CursorMoved {
            window,
            position: INSIDE,
            delta: Some(Vec2::ONE),
        });

    app.update();

    assert_eq!(app.world().resource::<UiReaderLog>().cursor_moves, 1);
    assert!(app.world().resource::<Messages<CursorMoved>>().is_empty());
}

#[test]
fn test_shield_expires_without_render() {
    let (mut app, _window) = shield_app();
    attach(&mut app);

    // Frame 1: attach happened this frame, shield survives expiry
    app.update();
    assert!(app.world().resource::<SidebarShield>().is_attached());

    // Frame 2: nothing re-attached, shield expires in Last
    app.update();
    assert!(!app.world().resource::<SidebarShield>().is_attached());
    assert_eq!(app.world().resource::<SidebarShield>().guard_count(), 0);
}
