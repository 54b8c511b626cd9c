use iced::{Element, Size, Subscription, Task, Theme};

use crate::config::SiteConfig;

use super::message::Message;
use super::screens::{Screen, ScreenData, ScreenMessage, preloader::PreloaderScreen};
use super::state::AppState;
use super::theme;

pub struct PortfolioApp {
    state: AppState,
    screen: ScreenData,
}

/// Launch the application. The preloader screen comes up first and hands
/// over to the page once its gate elapses.
pub fn run(config: SiteConfig) -> iced::Result {
    iced::application(
        move || PortfolioApp::new(config.clone()),
        PortfolioApp::update,
        PortfolioApp::view,
    )
    .title(PortfolioApp::title)
    .subscription(PortfolioApp::subscription)
    .theme(PortfolioApp::theme)
    .window_size(Size::new(1280.0, 860.0))
    .run()
}

impl PortfolioApp {
    fn new(config: SiteConfig) -> (Self, Task<Message>) {
        let state = AppState::new(config);
        let (preloader, gate) = PreloaderScreen::start();
        (
            Self {
                state,
                screen: ScreenData::Preloader(preloader),
            },
            gate.map(Message::Preloader),
        )
    }

    fn title(&self) -> String {
        "Rafael Padilha — Portfólio".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(unwrap_screen)
    }

    fn view(&self) -> Element<'_, Message> {
        self.screen.view().map(unwrap_screen)
    }

    fn subscription(&self) -> Subscription<Message> {
        self.screen.subscription()
    }

    fn theme(&self) -> Theme {
        theme::theme()
    }
}

fn unwrap_screen(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}
