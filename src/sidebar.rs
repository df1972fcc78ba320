//! The sidebar controller: outer shell, handle strip, active pane, and the
//! input-shield attachment that ties them to the map surface.

use bevy::math::Rect as BevyRect;
use bevy::prelude::*;
use bevy_egui::egui;

use crate::constants::{PANE_WIDTH, STRIP_WIDTH};
use crate::error::SidebarError;
use crate::pane;
use crate::shield::SidebarShield;
use crate::tab::{DockSide, Tab};
use crate::tab_bar::{self, RenderedHandle};

/// What one render pass of the sidebar produced.
#[derive(Debug, Clone)]
pub struct SidebarResponse {
    /// Screen region the panel occupied this frame.
    pub rect: egui::Rect,
    /// One entry per tab handle, in strip order (top group, then bottom).
    pub handles: Vec<RenderedHandle>,
    /// Id of the handle clicked this frame, if any. The `on_open` callback
    /// has already been invoked with the same id.
    pub opened: Option<String>,
    /// True when the active pane's close affordance was clicked this frame.
    pub closed: bool,
    /// Screen region of the active pane's close affordance, when visible.
    pub close_rect: Option<egui::Rect>,
}

/// Collapsible tabbed sidebar docked to one edge of the map surface.
///
/// The sidebar holds no selection state of its own: the embedder passes in
/// `selected` and `collapsed` every frame and learns about user intent
/// through `on_open`/`on_close`. Re-rendering with a new selection at any
/// time is safe because nothing is kept between frames.
///
/// ```no_run
/// # use bevy_map_sidebar::{Sidebar, SidebarShield, Tab};
/// # fn ui(ctx: &bevy_egui::egui::Context, shield: &mut SidebarShield) {
/// let tabs = vec![Tab::new("layers", "Layers", "🗺")];
/// Sidebar::new("map_sidebar", &tabs)
///     .selected("layers")
///     .on_open(|id| println!("open {id}"))
///     .show(ctx, shield, |ui, _id| {
///         ui.label("layer list goes here");
///     })
///     .unwrap();
/// # }
/// ```
pub struct Sidebar<'a> {
    id: String,
    tabs: &'a [Tab],
    selected: Option<&'a str>,
    collapsed: bool,
    position: DockSide,
    close_icon: Option<&'a str>,
    on_open: Option<Box<dyn FnMut(&str) + 'a>>,
    on_close: Option<Box<dyn FnMut() + 'a>>,
}

impl<'a> Sidebar<'a> {
    pub fn new(id: impl Into<String>, tabs: &'a [Tab]) -> Self {
        Self {
            id: id.into(),
            tabs,
            selected: None,
            collapsed: false,
            position: DockSide::default(),
            close_icon: None,
            on_open: None,
            on_close: None,
        }
    }

    /// Id of the tab whose pane is open. Owned by the embedder.
    pub fn selected(mut self, selected: &'a str) -> Self {
        self.selected = Some(selected);
        self
    }

    /// Collapse the pane area, leaving only the handle strip.
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn position(mut self, position: DockSide) -> Self {
        self.position = position;
        self
    }

    /// Override the dock-dependent default close glyph on every pane.
    pub fn close_icon(mut self, close_icon: &'a str) -> Self {
        self.close_icon = Some(close_icon);
        self
    }

    /// Invoked with a tab's id when its (non-disabled) handle is clicked.
    pub fn on_open(mut self, on_open: impl FnMut(&str) + 'a) -> Self {
        self.on_open = Some(Box::new(on_open));
        self
    }

    /// Invoked with no arguments when any pane's close affordance is
    /// clicked; closing is a panel-level intent, not a per-pane one.
    pub fn on_close(mut self, on_close: impl FnMut() + 'a) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }

    fn validate(&self) -> Result<(), SidebarError> {
        if self.id.is_empty() {
            return Err(SidebarError::MissingId);
        }
        if self.tabs.is_empty() {
            return Err(SidebarError::NoTabs);
        }
        let mut seen: Vec<&str> = Vec::with_capacity(self.tabs.len());
        for tab in self.tabs {
            if tab.id.is_empty() {
                return Err(SidebarError::MissingTabId);
            }
            if tab.header.is_empty() {
                return Err(SidebarError::MissingTabHeader {
                    id: tab.id.clone(),
                });
            }
            if seen.contains(&tab.id.as_str()) {
                return Err(SidebarError::DuplicateTabId {
                    id: tab.id.clone(),
                });
            }
            seen.push(tab.id.as_str());
        }
        Ok(())
    }

    /// Render the sidebar and attach the input shield to its region.
    ///
    /// `pane_body` is invoked once with the active tab's id to fill the pane
    /// content. Configuration misuse is reported before anything renders.
    pub fn show(
        mut self,
        ctx: &egui::Context,
        shield: &mut SidebarShield,
        mut pane_body: impl FnMut(&mut egui::Ui, &str),
    ) -> Result<SidebarResponse, SidebarError> {
        self.validate()?;

        let tabs = self.tabs;
        let selected = self.selected;
        let position = self.position;
        let (top, bottom) = tab_bar::partition(tabs);
        let panes = pane::compose(tabs, selected, self.close_icon, position);
        let pane_open = !self.collapsed && panes.iter().any(|p| p.active);
        let width = STRIP_WIDTH + if pane_open { PANE_WIDTH } else { 0.0 };

        let mut handles = Vec::new();
        let mut opened = None;
        let mut closed = false;
        let mut close_rect = None;

        let panel = match position {
            DockSide::Left => egui::SidePanel::left(egui::Id::new(self.id.as_str())),
            DockSide::Right => egui::SidePanel::right(egui::Id::new(self.id.as_str())),
        };
        let frame = egui::Frame::side_top_panel(&ctx.style())
            .inner_margin(egui::Margin::symmetric(2, 6));
        let inner = panel.resizable(false).exact_width(width).frame(frame).show(ctx, |ui| {
            let full = ui.available_rect_before_wrap();
            // Handle strip hugs the outer edge; the pane fills the rest.
            let (strip_rect, pane_rect) = match position {
                DockSide::Left => {
                    let split = full.min.x + STRIP_WIDTH;
                    (
                        egui::Rect::from_min_max(full.min, egui::pos2(split, full.max.y)),
                        egui::Rect::from_min_max(egui::pos2(split, full.min.y), full.max),
                    )
                }
                DockSide::Right => {
                    let split = full.max.x - STRIP_WIDTH;
                    (
                        egui::Rect::from_min_max(egui::pos2(split, full.min.y), full.max),
                        egui::Rect::from_min_max(full.min, egui::pos2(split, full.max.y)),
                    )
                }
            };

            let mut strip_ui = ui.new_child(
                egui::UiBuilder::new()
                    .max_rect(strip_rect)
                    .layout(egui::Layout::top_down(egui::Align::Center)),
            );
            opened = tab_bar::show_strip(&mut strip_ui, &top, &bottom, selected, &mut handles);

            if pane_open {
                let mut pane_ui = ui.new_child(
                    egui::UiBuilder::new()
                        .max_rect(pane_rect.shrink(6.0))
                        .layout(egui::Layout::top_down(egui::Align::Min)),
                );
                for attrs in &panes {
                    if attrs.active {
                        let shown = pane::show_pane(&mut pane_ui, attrs, &mut pane_body);
                        closed = shown.closed;
                        close_rect = Some(shown.close_rect);
                    }
                }
            }
        });

        // egui consumed these clicks from its input stream during event
        // processing, before `clicked()` could report them, so the intents
        // below always fire on a fully suppressed event.
        if let Some(id) = &opened {
            debug!("sidebar open intent: {id}");
            if let Some(on_open) = self.on_open.as_mut() {
                on_open(id);
            }
        }
        if closed {
            debug!("sidebar close intent");
            if let Some(on_close) = self.on_close.as_mut() {
                on_close();
            }
        }

        let rect = inner.response.rect;
        shield.attach(BevyRect::new(rect.min.x, rect.min.y, rect.max.x, rect.max.y));

        Ok(SidebarResponse {
            rect,
            handles,
            opened,
            closed,
            close_rect,
        })
    }
}
