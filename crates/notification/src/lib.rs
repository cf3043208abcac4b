mod config;
mod mailer;
pub mod resend;
mod service;
pub mod smtp;

pub use config::*;
pub use mailer::*;
pub use service::*;
