use crate::gui::screens::{
    ScreenMessage, portfolio::PortfolioScreen, preloader::PreloaderScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    Preloader(ScreenMessage<PreloaderScreen>),
    Portfolio(ScreenMessage<PortfolioScreen>),
}
