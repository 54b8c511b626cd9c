use std::time::Duration;

use iced::widget::{column, container, text};
use iced::{Alignment::Center, Element, Font, Subscription, Task};

use crate::content::WORDMARK;
use crate::gui::screens::{Screen, ScreenMessage};
use crate::gui::{AppState, theme};

/// How long the gate stays up. Purely cosmetic; there is no failure path.
pub const PRELOADER_DURATION: Duration = Duration::from_millis(2000);

const PULSE: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Default)]
pub struct PreloaderScreen {
    pulses: usize,
}

#[derive(Debug, Clone)]
pub enum PreloaderMessage {
    Pulse,
    Done,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Finished,
}

impl PreloaderScreen {
    /// Start the single-shot gate timer along with the screen.
    pub fn start() -> (Self, Task<ScreenMessage<Self>>) {
        let gate = Task::perform(
            async { tokio::time::sleep(PRELOADER_DURATION).await },
            |_| ScreenMessage::ScreenMessage(PreloaderMessage::Done),
        );
        (Self::default(), gate)
    }
}

impl Screen for PreloaderScreen {
    type Message = PreloaderMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let dots = ".".repeat(self.pulses % 4);
        let content = column![
            text(WORDMARK).size(64).color(theme::ACCENT),
            text(format!("carregando{dots}"))
                .size(14)
                .font(Font::MONOSPACE)
                .color(theme::MUTED),
        ]
        .spacing(16)
        .align_x(Center);

        container(content)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            PreloaderMessage::Pulse => {
                self.pulses += 1;
                Task::none()
            }
            PreloaderMessage::Done => {
                Task::done(ScreenMessage::ParentMessage(ParentMessage::Finished))
            }
        }
    }

    fn subscription(&self) -> Subscription<ScreenMessage<Self>> {
        iced::time::every(PULSE)
            .map(|_| ScreenMessage::ScreenMessage(PreloaderMessage::Pulse))
    }
}
