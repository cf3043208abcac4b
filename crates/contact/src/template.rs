use askama::Template;
use goldensmile_notification::OutboundEmail;

use crate::{ContactSubmission, service_label};

pub const SITE_NAME: &str = "Golden Smile Creation";
pub const PHONE_NOT_PROVIDED: &str = "Not provided";

#[derive(Template)]
#[template(path = "contact-notification.html")]
struct ContactNotificationHtml<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    service: &'a str,
    message_lines: &'a [&'a str],
    site_name: &'a str,
}

#[derive(Template)]
#[template(path = "contact-notification.txt")]
struct ContactNotificationText<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    service: &'a str,
    message: &'a str,
    site_name: &'a str,
}

/// Operator-facing rendering of one submission
#[derive(Debug, Clone, PartialEq)]
pub struct ContactNotification<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub service: String,
    pub message: &'a str,
}

impl<'a> ContactNotification<'a> {
    pub fn new(input: &'a ContactSubmission) -> Self {
        let phone = input
            .phone
            .as_deref()
            .filter(|phone| !phone.trim().is_empty())
            .unwrap_or(PHONE_NOT_PROVIDED);

        Self {
            name: &input.name,
            email: &input.email,
            phone,
            service: service_label(input.service.as_deref()),
            message: &input.message,
        }
    }

    pub fn subject(&self) -> String {
        format!("New Contact Form Submission from {}", self.name)
    }

    pub fn html(&self) -> Result<String, askama::Error> {
        let message_lines = self
            .message
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .collect::<Vec<_>>();

        ContactNotificationHtml {
            name: self.name,
            email: self.email,
            phone: self.phone,
            service: &self.service,
            message_lines: &message_lines,
            site_name: SITE_NAME,
        }
        .render()
    }

    pub fn text(&self) -> Result<String, askama::Error> {
        ContactNotificationText {
            name: self.name,
            email: self.email,
            phone: self.phone,
            service: &self.service,
            message: self.message,
            site_name: SITE_NAME,
        }
        .render()
    }

    /// Address the notification to the operator with replies going to the submitter
    pub fn compose(&self, from: &str, to: &str) -> crate::Result<OutboundEmail> {
        Ok(OutboundEmail {
            from: from.to_owned(),
            to: to.to_owned(),
            reply_to: self.email.to_owned(),
            subject: self.subject(),
            html: self.html()?,
            text: self.text()?,
        })
    }
}
