use iced::Point;

use crate::config::SiteConfig;
use crate::gui::assets::Assets;
use crate::nav::Section;

/// Application-wide state shared across screens.
#[derive(Debug)]
pub struct AppState {
    pub config: SiteConfig,
    pub assets: Assets,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        let assets = Assets::load(&config);
        Self { config, assets }
    }
}

/// Ephemeral view state of the portfolio page. Owned by the screen and
/// passed down to the view helpers by reference; reset on restart.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub menu_open: bool,
    pub selected_project: Option<u32>,
    pub pointer: Point,
    pub active_section: Section,
    pub scroll_progress: f32,
    pub toast: ToastState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            menu_open: false,
            selected_project: None,
            pointer: Point::ORIGIN,
            active_section: Section::Hero,
            scroll_progress: 0.0,
            toast: ToastState::default(),
        }
    }
}

/// Toast visibility with a generation counter, so the expiry of an earlier
/// toast cannot dismiss a later one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToastState {
    visible: bool,
    seq: u64,
}

impl ToastState {
    /// Show the toast and return the generation its expiry must carry.
    pub fn show(&mut self) -> u64 {
        self.seq += 1;
        self.visible = true;
        self.seq
    }

    /// Hide the toast, but only if `seq` is the latest generation.
    pub fn expire(&mut self, seq: u64) {
        if seq == self.seq {
            self.visible = false;
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}
