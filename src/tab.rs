//! Tab descriptors and the enumerations that anchor and dock them.

use std::fmt;
use std::sync::Arc;

use bevy_egui::egui;
use serde::{Deserialize, Serialize};

use crate::constants::{CLOSE_GLYPH_LEFT, CLOSE_GLYPH_RIGHT};
use crate::error::SidebarError;

/// Which end of the tab-handle strip a tab is grouped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    #[default]
    Top,
    Bottom,
}

impl Anchor {
    /// Parse an anchor from a config string.
    ///
    /// Anything other than `"bottom"` falls back to [`Anchor::Top`]; an
    /// unrecognized anchor is treated as unset rather than rejected.
    pub fn parse(value: &str) -> Self {
        match value {
            "bottom" => Anchor::Bottom,
            _ => Anchor::Top,
        }
    }
}

/// Which side of the map surface the sidebar is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockSide {
    #[default]
    Left,
    Right,
}

impl DockSide {
    /// Parse a dock side from a config string.
    ///
    /// Unlike [`Anchor::parse`] this is strict: a dock side outside the
    /// two-value range is a configuration error.
    pub fn parse(value: &str) -> Result<Self, SidebarError> {
        match value {
            "left" => Ok(DockSide::Left),
            "right" => Ok(DockSide::Right),
            other => Err(SidebarError::UnknownDockSide {
                value: other.to_string(),
            }),
        }
    }

    /// Default close glyph for panes on this dock side.
    pub fn close_glyph(self) -> &'static str {
        match self {
            DockSide::Left => CLOSE_GLYPH_LEFT,
            DockSide::Right => CLOSE_GLYPH_RIGHT,
        }
    }
}

/// How a tab handle paints its icon.
///
/// Either a literal glyph string or a producer invoked at render time.
/// The producer variant is resolved every frame and never cached.
#[derive(Clone)]
pub enum TabIcon {
    /// Literal text drawn on the handle (an emoji or icon-font glyph).
    Glyph(String),
    /// Callback that paints the icon into the handle's `Ui`.
    Producer(Arc<dyn Fn(&mut egui::Ui) + Send + Sync>),
}

impl TabIcon {
    /// Wrap a render-time callback as an icon.
    pub fn producer(paint: impl Fn(&mut egui::Ui) + Send + Sync + 'static) -> Self {
        TabIcon::Producer(Arc::new(paint))
    }

    /// Render the icon into `ui`.
    pub(crate) fn show(&self, ui: &mut egui::Ui) {
        match self {
            TabIcon::Glyph(glyph) => {
                ui.label(egui::RichText::new(glyph).size(16.0));
            }
            TabIcon::Producer(paint) => paint(ui),
        }
    }
}

impl From<&str> for TabIcon {
    fn from(glyph: &str) -> Self {
        TabIcon::Glyph(glyph.to_string())
    }
}

impl From<String> for TabIcon {
    fn from(glyph: String) -> Self {
        TabIcon::Glyph(glyph)
    }
}

impl fmt::Debug for TabIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabIcon::Glyph(glyph) => f.debug_tuple("Glyph").field(glyph).finish(),
            TabIcon::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

/// One tab's identity, icon, and anchoring.
///
/// Inert data owned by the embedding application; the sidebar borrows it for
/// the duration of one render pass and never mutates it.
#[derive(Debug, Clone)]
pub struct Tab {
    /// Unique among sibling tabs; used as lookup key for selection.
    pub id: String,
    /// Header text shown at the top of the tab's pane.
    pub header: String,
    /// Handle icon.
    pub icon: TabIcon,
    /// Which end of the strip the handle is grouped into.
    pub anchor: Anchor,
    /// Disabled handles render inert and never report an open intent.
    pub disabled: bool,
}

impl Tab {
    pub fn new(
        id: impl Into<String>,
        header: impl Into<String>,
        icon: impl Into<TabIcon>,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            icon: icon.into(),
            anchor: Anchor::default(),
            disabled: false,
        }
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}
