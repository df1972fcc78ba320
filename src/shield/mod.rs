//! Input shield: keeps gestures that originate inside the sidebar from
//! reaching the embedder's map systems.
//!
//! The map collaborator reads bevy's input layer (`ButtonInput<MouseButton>`,
//! `Messages<MouseMotion>`, wheel and touch messages) to drive pan/zoom/drag.
//! Without interception, a drag started on a tab handle would simultaneously
//! pan the map underneath. The shield owns a fixed set of guarded input kinds
//! and swallows matching input before `Update`-schedule systems can observe
//! it. Clicks are deliberately not guarded: sidebar clicks arrive through
//! egui's own input pipeline and drive the open/close intents.
//!
//! ## Key Types
//!
//! - [`InputKind`]: enumeration of input kinds, guarded and not
//! - [`ISOLATED_KINDS`]: the fixed guarded set
//! - [`SidebarShield`]: resource owning the guard set and the panel region
//!
//! ## Systems
//!
//! - [`track_gesture_origin`]: records where a mouse press started
//! - [`shield_map_input`]: swallows guarded input attributed to the panel
//! - [`expire_shield`]: detaches the shield when the sidebar was not rendered

mod systems;
mod tests;

pub(crate) use systems::{expire_shield, shield_map_input, track_gesture_origin};

use bevy::math::{Rect, Vec2};
use bevy::prelude::*;

/// Native input kinds the shield can attribute to the sidebar region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Never isolated: clicks must keep driving the open/close intents.
    Click,
    DoubleClick,
    MouseEnter,
    MouseLeave,
    MouseMove,
    MouseDown,
    MouseUp,
    Wheel,
    PointerDown,
    PointerMove,
    PointerUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    DragStart,
    Drag,
    DragEnd,
}

/// The fixed set of input kinds guarded while the sidebar is attached.
///
/// [`InputKind::Click`] is deliberately absent.
pub const ISOLATED_KINDS: &[InputKind] = &[
    InputKind::DoubleClick,
    InputKind::MouseEnter,
    InputKind::MouseLeave,
    InputKind::MouseMove,
    InputKind::MouseDown,
    InputKind::MouseUp,
    InputKind::Wheel,
    InputKind::PointerDown,
    InputKind::PointerMove,
    InputKind::PointerUp,
    InputKind::TouchStart,
    InputKind::TouchMove,
    InputKind::TouchEnd,
    InputKind::DragStart,
    InputKind::Drag,
    InputKind::DragEnd,
];

/// Resource owning the sidebar's input guards.
///
/// The guard set is the only shared mutable input state the sidebar touches;
/// no other component registers or removes guards. Its lifetime is strictly
/// bound to the panel's presence: [`Sidebar::show`](crate::Sidebar::show)
/// attaches every frame the panel renders, and [`expire_shield`] detaches on
/// the first frame it does not.
#[derive(Resource, Debug, Default)]
pub struct SidebarShield {
    region: Option<Rect>,
    guards: Vec<InputKind>,
    gesture_origin: Option<Vec2>,
    rendered: bool,
}

impl SidebarShield {
    /// Register one guard per isolated kind and remember the panel region.
    ///
    /// Repeated attaches without an intervening detach only refresh the
    /// region; the guard set is never duplicated.
    pub fn attach(&mut self, region: Rect) {
        if self.guards.is_empty() {
            self.guards.extend_from_slice(ISOLATED_KINDS);
            debug!("sidebar shield attached ({} guards)", self.guards.len());
        }
        self.region = Some(region);
        self.rendered = true;
    }

    /// Remove exactly the registered guard set.
    pub fn detach(&mut self) {
        if !self.guards.is_empty() {
            debug!("sidebar shield detached ({} guards)", self.guards.len());
        }
        self.guards.clear();
        self.region = None;
        self.gesture_origin = None;
        self.rendered = false;
    }

    pub fn is_attached(&self) -> bool {
        !self.guards.is_empty()
    }

    pub fn guard_count(&self) -> usize {
        self.guards.len()
    }

    /// The panel's screen region while attached.
    pub fn region(&self) -> Option<Rect> {
        self.region
    }

    /// Whether `kind` is currently guarded, regardless of position.
    pub fn is_guarded(&self, kind: InputKind) -> bool {
        self.guards.contains(&kind)
    }

    /// True iff `kind` is guarded and `point` lies inside the panel region.
    ///
    /// [`InputKind::Click`] is never guarded, so this is always false for it.
    pub fn intercepts(&self, kind: InputKind, point: Vec2) -> bool {
        self.is_guarded(kind) && self.region.is_some_and(|region| region.contains(point))
    }

    pub(crate) fn gesture_origin(&self) -> Option<Vec2> {
        self.gesture_origin
    }

    pub(crate) fn set_gesture_origin(&mut self, origin: Option<Vec2>) {
        self.gesture_origin = origin;
    }

    /// Frame-end bookkeeping: detach when the panel was not rendered since
    /// the last expiry check. Returns true when a detach happened.
    pub(crate) fn expire(&mut self) -> bool {
        if self.rendered {
            self.rendered = false;
            false
        } else if self.is_attached() {
            self.detach();
            true
        } else {
            false
        }
    }
}
