//! Tab-handle strip: anchor partitioning and handle rendering.

use bevy_egui::egui;

use crate::constants::{HANDLE_HEIGHT, STRIP_WIDTH};
use crate::tab::{Anchor, Tab, TabIcon};

/// Display attributes derived for one tab handle. Recomputed every render,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleAttrs {
    pub active: bool,
    pub disabled: bool,
}

/// One rendered handle, reported back to the embedder for this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedHandle {
    pub id: String,
    pub active: bool,
    pub disabled: bool,
    pub rect: egui::Rect,
}

/// Split tabs into top-anchored and bottom-anchored groups, preserving each
/// tab's relative order within its group.
pub(crate) fn partition(tabs: &[Tab]) -> (Vec<&Tab>, Vec<&Tab>) {
    let mut top = Vec::new();
    let mut bottom = Vec::new();
    for tab in tabs {
        match tab.anchor {
            Anchor::Top => top.push(tab),
            Anchor::Bottom => bottom.push(tab),
        }
    }
    (top, bottom)
}

/// Derive a handle's display attributes from the panel's selection.
pub(crate) fn handle_attrs(tab: &Tab, selected: Option<&str>) -> HandleAttrs {
    HandleAttrs {
        active: selected == Some(tab.id.as_str()),
        disabled: tab.disabled,
    }
}

fn show_handle(ui: &mut egui::Ui, tab: &Tab, attrs: HandleAttrs) -> egui::Response {
    let response = match &tab.icon {
        TabIcon::Glyph(glyph) => {
            let button = egui::Button::new(egui::RichText::new(glyph).size(16.0))
                .min_size(egui::vec2(STRIP_WIDTH - 8.0, HANDLE_HEIGHT))
                .selected(attrs.active);
            ui.add_enabled(!attrs.disabled, button)
        }
        TabIcon::Producer(_) => {
            // Producer icons paint themselves; wrap them in a click target.
            let inner = ui
                .add_enabled_ui(!attrs.disabled, |ui| {
                    let painted = ui.vertical_centered(|ui| tab.icon.show(ui));
                    ui.interact(
                        painted.response.rect,
                        ui.id().with(tab.id.as_str()),
                        egui::Sense::click(),
                    )
                })
                .inner;
            if attrs.active {
                inner.highlight()
            } else {
                inner
            }
        }
    };
    response.on_hover_text(&tab.header)
}

/// Render one handle group and report any open request.
fn show_group(
    ui: &mut egui::Ui,
    group: &[&Tab],
    selected: Option<&str>,
    handles: &mut Vec<RenderedHandle>,
    opened: &mut Option<String>,
) {
    for tab in group {
        let attrs = handle_attrs(tab, selected);
        let response = show_handle(ui, tab, attrs);
        // egui has already consumed the click from its input stream by the
        // time `clicked()` reports it, so the map surface never sees it.
        if response.clicked() && !attrs.disabled {
            *opened = Some(tab.id.clone());
        }
        handles.push(RenderedHandle {
            id: tab.id.clone(),
            active: attrs.active,
            disabled: attrs.disabled,
            rect: response.rect,
        });
    }
}

/// Render the full strip: top group first, bottom group pinned to the strip's
/// lower end. Returns the id of a clicked (non-disabled) handle, if any.
pub(crate) fn show_strip(
    ui: &mut egui::Ui,
    top: &[&Tab],
    bottom: &[&Tab],
    selected: Option<&str>,
    handles: &mut Vec<RenderedHandle>,
) -> Option<String> {
    let mut opened = None;
    ui.set_width(STRIP_WIDTH);
    ui.vertical_centered(|ui| {
        show_group(ui, top, selected, handles, &mut opened);
    });
    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
        // bottom_up lays children out from the bottom edge upwards, so the
        // group is walked in reverse to keep its visual order. The reversal
        // is layout-only: reported handles keep the declared tab order.
        let first_bottom = handles.len();
        let reversed: Vec<&Tab> = bottom.iter().rev().copied().collect();
        show_group(ui, &reversed, selected, handles, &mut opened);
        handles[first_bottom..].reverse();
    });
    opened
}
