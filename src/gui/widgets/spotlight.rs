//! The pointer spotlight and custom cursor, drawn on a full-window canvas
//! layered over the page. The program handles no events, so everything
//! underneath stays interactive.

use iced::mouse;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Theme};

use crate::gui::theme::ACCENT;

pub fn spotlight<'a, Message: 'a>(pointer: Point) -> Element<'a, Message> {
    Canvas::new(Spotlight { pointer })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[derive(Debug, Clone, Copy)]
struct Spotlight {
    pointer: Point,
}

impl<Message> canvas::Program<Message> for Spotlight {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        // Concentric fading discs stand in for the radial gradient glow.
        for (radius, alpha) in [(300.0, 0.035), (180.0, 0.03), (90.0, 0.03)] {
            let glow = Path::circle(self.pointer, radius);
            frame.fill(&glow, Color { a: alpha, ..ACCENT });
        }

        // Custom cursor: accent dot with a trailing ring.
        frame.fill(&Path::circle(self.pointer, 3.0), ACCENT);
        frame.stroke(
            &Path::circle(self.pointer, 14.0),
            canvas::Stroke::default()
                .with_color(Color { a: 0.6, ..ACCENT })
                .with_width(1.5),
        );

        vec![frame.into_geometry()]
    }
}
