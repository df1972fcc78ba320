//! Pane composition: deriving per-pane display attributes from panel state.

use bevy_egui::egui;

use crate::tab::{DockSide, Tab};

/// Display attributes injected into one pane for the current render.
///
/// A pane never owns these; they are derived fresh every frame from the
/// panel's state, so the tabs themselves stay immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneAttrs<'a> {
    pub id: &'a str,
    pub header: &'a str,
    pub active: bool,
    pub close_icon: &'a str,
    pub position: DockSide,
}

/// Derive attributes for every pane.
///
/// Pure: borrows the tabs, mutates nothing. `close_icon` falls back to the
/// dock-dependent default glyph when no override is supplied.
pub(crate) fn compose<'a>(
    tabs: &'a [Tab],
    selected: Option<&str>,
    close_icon: Option<&'a str>,
    position: DockSide,
) -> Vec<PaneAttrs<'a>> {
    let close_icon = close_icon.unwrap_or_else(|| position.close_glyph());
    tabs.iter()
        .map(|tab| PaneAttrs {
            id: tab.id.as_str(),
            header: tab.header.as_str(),
            active: selected == Some(tab.id.as_str()),
            close_icon,
            position,
        })
        .collect()
}

/// Result of rendering one pane for the current frame.
pub(crate) struct ShownPane {
    pub closed: bool,
    pub close_rect: egui::Rect,
}

fn close_button(ui: &mut egui::Ui, glyph: &str) -> egui::Response {
    ui.add(egui::Button::new(egui::RichText::new(glyph).size(14.0)).frame(false))
        .on_hover_text("Close")
}

/// Render one pane: header row with close affordance, then the embedder's
/// body content.
///
/// The close affordance sits on the outer edge, so it is mirrored when the
/// sidebar is docked on the right.
pub(crate) fn show_pane(
    ui: &mut egui::Ui,
    attrs: &PaneAttrs<'_>,
    body: &mut dyn FnMut(&mut egui::Ui, &str),
) -> ShownPane {
    let mut closed = false;
    let mut close_rect = egui::Rect::NOTHING;
    ui.horizontal(|ui| match attrs.position {
        DockSide::Left => {
            ui.heading(attrs.header);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let response = close_button(ui, attrs.close_icon);
                closed = response.clicked();
                close_rect = response.rect;
            });
        }
        DockSide::Right => {
            let response = close_button(ui, attrs.close_icon);
            closed = response.clicked();
            close_rect = response.rect;
            ui.heading(attrs.header);
        }
    });
    ui.separator();
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| body(ui, attrs.id));
    ShownPane { closed, close_rect }
}
