//! The dark palette and shared widget styles of the page.

use iced::theme::Palette;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

pub const ACCENT: Color = Color {
    r: 0.8,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

pub const BACKGROUND: Color = Color {
    r: 0.02,
    g: 0.02,
    b: 0.02,
    a: 1.0,
};

pub const SURFACE: Color = Color {
    r: 0.067,
    g: 0.067,
    b: 0.067,
    a: 1.0,
};

pub const TEXT: Color = Color {
    r: 0.95,
    g: 0.95,
    b: 0.95,
    a: 1.0,
};

pub const MUTED: Color = Color {
    r: 0.63,
    g: 0.63,
    b: 0.63,
    a: 1.0,
};

pub fn theme() -> Theme {
    Theme::custom(
        "rpz".to_string(),
        Palette {
            background: BACKGROUND,
            text: TEXT,
            primary: ACCENT,
            ..Theme::Dark.palette()
        },
    )
}

fn faded(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Filled call-to-action pill. Inverts to white on hover.
pub fn accent_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color::WHITE,
        _ => ACCENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::BLACK,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 26.0.into(),
        },
        ..button::Style::default()
    }
}

/// Outlined pill over the dark background.
pub fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(faded(Color::WHITE, 0.08)))
        }
        _ => None,
    };
    button::Style {
        background,
        text_color: TEXT,
        border: Border {
            color: faded(Color::WHITE, 0.3),
            width: 1.0,
            radius: 26.0.into(),
        },
        ..button::Style::default()
    }
}

/// Bare text link in the header and footer. The active entry is lit.
pub fn nav_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let text_color = if active || matches!(status, button::Status::Hovered) {
            ACCENT
        } else {
            TEXT
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            ..button::Style::default()
        }
    }
}

/// Invisible button wrapping a project card.
pub fn card_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: TEXT,
        border: Border::default(),
        ..button::Style::default()
    }
}

/// Translucent panel with a hairline border.
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(Color::WHITE, 0.04))),
        border: Border {
            color: faded(Color::WHITE, 0.1),
            width: 1.0,
            radius: 16.0.into(),
        },
        ..container::Style::default()
    }
}

/// The fixed translucent header bar.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(Color::BLACK, 0.8))),
        ..container::Style::default()
    }
}

/// The collapsed-menu dropdown panel.
pub fn menu_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(Color::BLACK, 0.95))),
        border: Border {
            color: faded(Color::WHITE, 0.1),
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}

/// The modal card surface.
pub fn modal_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: faded(Color::WHITE, 0.1),
            width: 1.0,
            radius: 16.0.into(),
        },
        ..container::Style::default()
    }
}

/// Auto-dismissing confirmation toast.
pub fn toast(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(TEXT),
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: faded(ACCENT, 0.4),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Rounded outline around a single tech label.
pub fn pill(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(MUTED),
        background: Some(Background::Color(faded(Color::WHITE, 0.05))),
        border: Border {
            color: faded(Color::WHITE, 0.1),
            width: 1.0,
            radius: 14.0.into(),
        },
        ..container::Style::default()
    }
}
