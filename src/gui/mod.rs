mod app;
mod assets;
mod message;
mod state;
pub mod screens;
pub mod theme;
pub mod widgets;

pub use app::{PortfolioApp, run};
pub use assets::Assets;
pub use message::Message;
pub use state::{AppState, ToastState, ViewState};
