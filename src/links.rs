//! Outbound links shown on the contact page and footer.

use once_cell::sync::Lazy;
use serde::Serialize;

pub const STUDIO_PHONE: &str = "919965262733";
pub const INSTAGRAM_URL: &str = "https://instagram.com/___vimal__arts_03";

const WHATSAPP_GREETING: &str =
    "Hello! I'm interested in your pencil art services. Can you please provide more information?";

pub static WHATSAPP_URL: Lazy<String> = Lazy::new(|| whatsapp_link(STUDIO_PHONE, WHATSAPP_GREETING));

/// `wa.me` deep link with the message pre-filled.
pub fn whatsapp_link(phone: &str, text: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(text.as_bytes()).collect();
    format!("https://wa.me/{phone}?text={encoded}")
}

#[derive(Clone, Debug, Serialize)]
pub struct Links {
    pub whatsapp: &'static str,
    pub instagram: &'static str,
}

pub fn links() -> Links {
    Links {
        whatsapp: WHATSAPP_URL.as_str(),
        instagram: INSTAGRAM_URL,
    }
}
