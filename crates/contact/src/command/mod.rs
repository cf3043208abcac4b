use goldensmile_notification::EmailService;

mod submit_form;

pub use submit_form::ContactSubmission;

/// Contact form submission handler.
///
/// Stateless: every call validates its own input and makes at most one
/// provider call.
#[derive(Clone)]
pub struct Command {
    pub email: EmailService,
    /// Fixed sender identity
    pub from: String,
    /// Operator address receiving notifications
    pub to: String,
}

impl Command {
    pub fn new(email: EmailService, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            email,
            from: from.into(),
            to: to.into(),
        }
    }
}
