//! Outbound links: the WhatsApp deep link, `mailto:` and the fixed social
//! profiles. Link construction is pure; opening goes through the system
//! handler and failures are logged and ignored.

pub const PHONE_NUMBER: &str = "5527995893556";
pub const WHATSAPP_GREETING: &str = "Olá Rafael, vi seu portfólio e gostaria de conversar!";
pub const EMAIL: &str = "padilharafael17@gmail.com";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/rafapz8/";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/rafael-padilha-1594001a2/";

/// WhatsApp deep link with the greeting percent-encoded into the query.
/// Byte-for-byte reproducible given the fixed inputs.
pub fn whatsapp_link() -> String {
    format!(
        "https://wa.me/{}?text={}",
        PHONE_NUMBER,
        urlencoding::encode(WHATSAPP_GREETING)
    )
}

pub fn mailto_link() -> String {
    format!("mailto:{}", EMAIL)
}

/// The outbound destinations reachable from the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalLink {
    WhatsApp,
    Mail,
    Instagram,
    Linkedin,
}

impl ExternalLink {
    pub fn url(self) -> String {
        match self {
            ExternalLink::WhatsApp => whatsapp_link(),
            ExternalLink::Mail => mailto_link(),
            ExternalLink::Instagram => INSTAGRAM_URL.to_string(),
            ExternalLink::Linkedin => LINKEDIN_URL.to_string(),
        }
    }
}

/// Open a URL with the system handler. Failure is not an error condition
/// for the page; it is logged and otherwise ignored.
pub fn open_external(link: ExternalLink) {
    let url = link.url();
    if let Err(e) = open::that(&url) {
        tracing::warn!("failed to open URL '{}': {}", url, e);
    }
}
