//! Section layout and scroll orchestration math.
//!
//! One ordered list of sections drives both the page layout and the
//! active-section detector, so the two can never disagree about where a
//! section starts. All functions here are pure; the GUI feeds them scroll
//! offsets and viewport dimensions.

use std::time::Duration;

/// Height of the fixed header, subtracted from scroll targets.
pub const HEADER_HEIGHT: f32 = 80.0;

/// A section is considered in view while its top offset relative to the
/// viewport falls inside this window. Tuned by hand against the section
/// heights below; a much shorter section could be skipped at some scroll
/// positions.
pub const ACTIVE_WINDOW_TOP: f32 = -300.0;
pub const ACTIVE_WINDOW_BOTTOM: f32 = 400.0;

/// Duration and frame step of the smooth-scroll animation.
pub const SCROLL_ANIMATION: Duration = Duration::from_millis(450);
pub const SCROLL_FRAME: Duration = Duration::from_millis(16);

/// The full-viewport content blocks of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Stable identifier, matching the original anchor names.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "Sobre",
            Section::Projects => "Projetos",
            Section::Contact => "Contato",
        }
    }

    /// Section height as a multiple of the viewport height.
    fn height_factor(self) -> f32 {
        match self {
            Section::Hero => 1.0,
            Section::About => 1.0,
            Section::Projects => 1.6,
            Section::Contact => 0.9,
        }
    }
}

/// Document-relative tops and heights of every section, derived from the
/// current viewport height. The layout uses the same numbers, so this map
/// is authoritative for detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionMap {
    tops: [f32; Section::ALL.len()],
    heights: [f32; Section::ALL.len()],
}

impl SectionMap {
    pub fn for_viewport(viewport_height: f32) -> Self {
        let viewport_height = viewport_height.max(1.0);
        let mut tops = [0.0; Section::ALL.len()];
        let mut heights = [0.0; Section::ALL.len()];
        let mut cursor = 0.0;
        for (i, section) in Section::ALL.iter().enumerate() {
            tops[i] = cursor;
            heights[i] = viewport_height * section.height_factor();
            cursor += heights[i];
        }
        Self { tops, heights }
    }

    pub fn top(&self, section: Section) -> f32 {
        self.tops[Self::index(section)]
    }

    pub fn height(&self, section: Section) -> f32 {
        self.heights[Self::index(section)]
    }

    pub fn total_height(&self) -> f32 {
        let last = Section::ALL.len() - 1;
        self.tops[last] + self.heights[last]
    }

    fn index(section: Section) -> usize {
        Section::ALL
            .iter()
            .position(|s| *s == section)
            .unwrap_or(0)
    }
}

/// Pick the active section for a scroll offset: the first section whose top
/// offset relative to the viewport falls inside the detection window. When
/// none matches, the previous value is retained. Best-effort highlighting
/// only.
pub fn active_section(map: &SectionMap, scroll_y: f32, previous: Section) -> Section {
    for section in Section::ALL {
        let relative = map.top(section) - scroll_y;
        if (ACTIVE_WINDOW_TOP..=ACTIVE_WINDOW_BOTTOM).contains(&relative) {
            return section;
        }
    }
    previous
}

/// Absolute scroll offset that brings `section` under the fixed header.
pub fn scroll_target(map: &SectionMap, section: Section) -> f32 {
    (map.top(section) - HEADER_HEIGHT).max(0.0)
}

/// Scroll progress through the document, in [0, 1].
pub fn scroll_progress(scroll_y: f32, content_height: f32, viewport_height: f32) -> f32 {
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// An in-flight smooth scroll. Advanced by a fixed frame step so the
/// trajectory is deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    elapsed: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Advance by one frame and return the offset to apply.
    pub fn step(&mut self) -> f32 {
        self.elapsed = (self.elapsed + SCROLL_FRAME).min(SCROLL_ANIMATION);
        let t = self.elapsed.as_secs_f32() / SCROLL_ANIMATION.as_secs_f32();
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= SCROLL_ANIMATION
    }
}
