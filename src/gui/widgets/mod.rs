mod spotlight;

pub use spotlight::spotlight;

use iced::widget::{center, container, mouse_area, opaque, stack, text};
use iced::{Element, Font};

use crate::gui::theme;

/// Overlay `content` over `base` on a dimmed backdrop. A click on the
/// backdrop emits `on_blur`; the page underneath is blocked while the
/// overlay is up.
pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content.into())))
                .on_press(on_blur)
        )
    ]
    .into()
}

/// The transient confirmation shown after a clipboard copy.
pub fn toast<'a, Message: 'a>(message: &'a str) -> Element<'a, Message> {
    container(text(message).size(14).font(Font::MONOSPACE))
        .padding([10.0, 18.0])
        .style(theme::toast)
        .into()
}

/// One outlined tech label.
pub fn tech_pill<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(12))
        .padding([5.0, 12.0])
        .style(theme::pill)
        .into()
}
