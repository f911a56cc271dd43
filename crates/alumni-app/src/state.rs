// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use tracing::debug;

use crate::{Alumnus, JobPosting, OverlayKind, ViewKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayPayload {
    Alumnus(Alumnus),
    Job(JobPosting),
}

impl OverlayPayload {
    pub const fn kind(&self) -> OverlayKind {
        match self {
            Self::Alumnus(_) => OverlayKind::Alumnus,
            Self::Job(_) => OverlayKind::Job,
        }
    }
}

/// At most one overlay is open. The payload variant is the discriminant, so
/// a closed overlay has nothing to read and an open one cannot carry a
/// payload of the wrong kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(OverlayPayload),
}

impl OverlayState {
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub const fn kind(&self) -> Option<OverlayKind> {
        match self {
            Self::Closed => None,
            Self::Open(payload) => Some(payload.kind()),
        }
    }

    pub const fn payload(&self) -> Option<&OverlayPayload> {
        match self {
            Self::Closed => None,
            Self::Open(payload) => Some(payload),
        }
    }

    pub const fn alumnus(&self) -> Option<&Alumnus> {
        match self {
            Self::Open(OverlayPayload::Alumnus(alumnus)) => Some(alumnus),
            _ => None,
        }
    }

    pub const fn job(&self) -> Option<&JobPosting> {
        match self {
            Self::Open(OverlayPayload::Job(job)) => Some(job),
            _ => None,
        }
    }

    pub const fn title(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.title(),
            None => "Details",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub view: ViewKind,
    pub overlay: OverlayState,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: ViewKind::Dashboard,
            overlay: OverlayState::Closed,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Navigate(ViewKind),
    NextView,
    PrevView,
    OpenOverlay(OverlayPayload),
    CloseOverlay,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ViewChanged(ViewKind),
    OverlayOpened(OverlayKind),
    OverlayClosed,
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn with_view(view: ViewKind) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    pub const fn view(&self) -> ViewKind {
        self.view
    }

    pub const fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn navigate(&mut self, view: ViewKind) -> Vec<AppEvent> {
        self.dispatch(AppCommand::Navigate(view))
    }

    pub fn open_overlay(&mut self, payload: OverlayPayload) -> Vec<AppEvent> {
        self.dispatch(AppCommand::OpenOverlay(payload))
    }

    pub fn close_overlay(&mut self) -> Vec<AppEvent> {
        self.dispatch(AppCommand::CloseOverlay)
    }

    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        debug!(?command, view = self.view.as_str(), "dispatch");
        match command {
            AppCommand::Navigate(view) => self.set_view(view),
            AppCommand::NextView => self.rotate_view(1),
            AppCommand::PrevView => self.rotate_view(-1),
            AppCommand::OpenOverlay(payload) => {
                let kind = payload.kind();
                debug!(kind = kind.as_str(), "overlay opened");
                self.overlay = OverlayState::Open(payload);
                vec![AppEvent::OverlayOpened(kind)]
            }
            AppCommand::CloseOverlay => {
                if self.overlay.is_open() {
                    self.overlay = OverlayState::Closed;
                    vec![AppEvent::OverlayClosed]
                } else {
                    Vec::new()
                }
            }
            AppCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![AppEvent::StatusUpdated(message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn set_view(&mut self, view: ViewKind) -> Vec<AppEvent> {
        if self.view == view {
            return Vec::new();
        }
        self.view = view;
        vec![AppEvent::ViewChanged(view)]
    }

    fn rotate_view(&mut self, delta: isize) -> Vec<AppEvent> {
        let views = ViewKind::ALL;
        let current = views
            .iter()
            .position(|view| *view == self.view)
            .unwrap_or(0) as isize;
        let len = views.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.set_view(views[next])
    }
}
