use log::Level;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

// EmailJS public identifiers, safe to ship in the bundle.
pub const EMAILJS_SERVICE_ID: &str = match option_env!("EMAILJS_SERVICE_ID") {
    Some(id) => id,
    None => "service_1efn9a8",
};

pub const EMAILJS_TEMPLATE_ID: &str = match option_env!("EMAILJS_TEMPLATE_ID") {
    Some(id) => id,
    None => "template_cndsoer",
};

pub const EMAILJS_PUBLIC_KEY: &str = match option_env!("EMAILJS_PUBLIC_KEY") {
    Some(key) => key,
    None => "7LzLR7oEY6V_XeL6q",
};

pub const RECIPIENT_NAME: &str = "The Learn Up Team";
pub const RECIPIENT_EMAIL: &str = "thelearnuponline@gmail.com";

pub const CHANNEL_NAME: &str = "The Learn Up";
pub const CHANNEL_URL: &str = "https://www.youtube.com/@theLearnUp";

pub const SPONSOR_ASSETS: &str = "/sponsorship/images/sponsors";

/// How long the partnership confirmation stays up before the modal closes itself.
pub const PARTNERSHIP_AUTO_CLOSE_MS: u64 = 3_000;

pub fn sponsor_asset(file: &str) -> String {
    format!("{}/{}", SPONSOR_ASSETS, file)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
