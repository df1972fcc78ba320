//! Systems that swallow guarded input while the sidebar is attached.
//!
//! These run in `PreUpdate` after bevy's input collection, so the embedder's
//! `Update`-schedule map systems never observe input the shield intercepts.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::{CursorEntered, CursorLeft, CursorMoved, PrimaryWindow};

use super::{InputKind, SidebarShield};

fn cursor_position(windows: &Query<&Window, With<PrimaryWindow>>) -> Option<Vec2> {
    let Ok(window) = windows.single() else {
        return None;
    };
    window.cursor_position()
}

fn touch_kind(phase: TouchPhase) -> InputKind {
    match phase {
        TouchPhase::Started => InputKind::TouchStart,
        TouchPhase::Moved => InputKind::TouchMove,
        TouchPhase::Ended | TouchPhase::Canceled => InputKind::TouchEnd,
    }
}

/// Record where the current mouse gesture started.
///
/// A drag that starts on the map and crosses into the panel must keep
/// panning, and a drag that starts on a tab handle must never pan, so
/// interception is attributed to the press origin rather than the live
/// cursor position.
pub(crate) fn track_gesture_origin(
    mut shield: ResMut<SidebarShield>,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if buttons.get_just_pressed().next().is_some() {
        shield.set_gesture_origin(cursor_position(&windows));
    } else if buttons.get_pressed().next().is_none() {
        shield.set_gesture_origin(None);
    }
}

/// Swallow guarded input attributed to the sidebar region.
#[allow(clippy::too_many_arguments)]
pub(crate) fn shield_map_input(
    shield: Res<SidebarShield>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut buttons: ResMut<ButtonInput<MouseButton>>,
    mut motion: ResMut<Messages<MouseMotion>>,
    mut cursor_moved: ResMut<Messages<CursorMoved>>,
    mut wheel: ResMut<Messages<MouseWheel>>,
    mut entered: ResMut<Messages<CursorEntered>>,
    mut left: ResMut<Messages<CursorLeft>>,
    mut touches: ResMut<Messages<TouchInput>>,
) {
    if !shield.is_attached() {
        return;
    }

    // Touches carry their own positions: keep only those outside the panel.
    if shield.is_guarded(InputKind::TouchStart) {
        let kept: Vec<TouchInput> = touches
            .drain()
            .filter(|touch| !shield.intercepts(touch_kind(touch.phase), touch.position))
            .collect();
        for touch in kept {
            touches.write(touch);
        }
    }

    // Absolute cursor moves likewise filter by their own reported position.
    if shield.is_guarded(InputKind::MouseMove) {
        let kept: Vec<CursorMoved> = cursor_moved
            .drain()
            .filter(|moved| !shield.intercepts(InputKind::MouseMove, moved.position))
            .collect();
        for moved in kept {
            cursor_moved.write(moved);
        }
    }

    // Everything else is attributed to the gesture origin while a button is
    // held, and to the live cursor for the hover family.
    let Some(point) = shield.gesture_origin().or_else(|| cursor_position(&windows)) else {
        return;
    };

    if shield.intercepts(InputKind::MouseMove, point)
        || shield.intercepts(InputKind::PointerMove, point)
        || shield.intercepts(InputKind::Drag, point)
    {
        motion.clear();
    }
    if shield.intercepts(InputKind::Wheel, point) {
        wheel.clear();
    }
    if shield.intercepts(InputKind::MouseEnter, point) {
        entered.clear();
    }
    if shield.intercepts(InputKind::MouseLeave, point) {
        left.clear();
    }
    // Button state covers the down/up, double-click, and drag start/end
    // kinds at once; egui receives its copy of the press independently.
    if shield.intercepts(InputKind::MouseDown, point)
        || shield.intercepts(InputKind::MouseUp, point)
        || shield.intercepts(InputKind::PointerDown, point)
        || shield.intercepts(InputKind::PointerUp, point)
        || shield.intercepts(InputKind::DoubleClick, point)
        || shield.intercepts(InputKind::DragStart, point)
        || shield.intercepts(InputKind::DragEnd, point)
    {
        buttons.reset_all();
    }
}

/// Detach the shield on the first frame the sidebar was not rendered, so no
/// guard outlives the panel's presence.
pub(crate) fn expire_shield(mut shield: ResMut<SidebarShield>) {
    if shield.expire() {
        debug!("sidebar absent this frame; input shield expired");
    }
}
