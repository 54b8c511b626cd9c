pub mod portfolio;
pub mod preloader;

use iced::{Element, Subscription, Task};

use crate::gui::{AppState, Message};

/// A screen either handles a message itself or bubbles one up to whoever
/// owns it.
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

impl<S: Screen> Clone for ScreenMessage<S> {
    fn clone(&self) -> Self {
        match self {
            Self::ScreenMessage(message) => Self::ScreenMessage(message.clone()),
            Self::ParentMessage(message) => Self::ParentMessage(message.clone()),
        }
    }
}

impl<S: Screen> std::fmt::Debug for ScreenMessage<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScreenMessage(message) => f.debug_tuple("ScreenMessage").field(message).finish(),
            Self::ParentMessage(message) => f.debug_tuple("ParentMessage").field(message).finish(),
        }
    }
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone + Send + 'static;
    type ParentMessage: std::fmt::Debug + Clone + Send + 'static;

    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
    /// Recurring event sources this screen needs while mounted. Dropping
    /// the screen drops the subscription, which cancels any pending timer.
    fn subscription(&self) -> Subscription<ScreenMessage<Self>> {
        Subscription::none()
    }
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Preloader(preloader::PreloaderScreen),
    Portfolio(portfolio::PortfolioScreen),
}

impl ScreenData {
    pub fn subscription(&self) -> Subscription<Message> {
        match self {
            ScreenData::Preloader(screen) => {
                Screen::subscription(screen).map(Message::Preloader)
            }
            ScreenData::Portfolio(screen) => {
                Screen::subscription(screen).map(Message::Portfolio)
            }
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::Preloader(screen) => screen.view().map(Message::Preloader),
            ScreenData::Portfolio(screen) => screen.view().map(Message::Portfolio),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (
                this,
                Message::Preloader(ScreenMessage::ParentMessage(preloader::ParentMessage::Finished)),
            ) => {
                // The cosmetic gate has elapsed; swap in the page.
                *this = ScreenData::Portfolio(portfolio::PortfolioScreen::new(state));
                Task::none()
            }
            (ScreenData::Preloader(screen), Message::Preloader(ScreenMessage::ScreenMessage(msg))) => {
                screen
                    .update(msg, state)
                    .map(Message::Preloader)
                    .map(ScreenMessage::ScreenMessage)
            }
            (ScreenData::Portfolio(screen), Message::Portfolio(ScreenMessage::ScreenMessage(msg))) => {
                screen
                    .update(msg, state)
                    .map(Message::Portfolio)
                    .map(ScreenMessage::ScreenMessage)
            }
            (ScreenData::Portfolio(_), Message::Portfolio(ScreenMessage::ParentMessage(never))) => {
                match never {}
            }
            _ => Task::none(),
        }
    }
}
