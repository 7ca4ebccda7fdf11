use serde_json::{Map, Value};

use super::{EMAIL, EMAILS, base64, table};
use crate::client::SendPulseClient;
use crate::domain::{
    Params, SendPulseResponse, SmtpEmailFilter, ValidationError, non_empty, path_segment,
};

impl SendPulseClient {
    /// Send a transactional email through SMTP.
    ///
    /// `email` is the message object the API documents (`html`, `text`, `subject`,
    /// `from`, `to`, ...). Its `html` string is base64-encoded, then the whole object
    /// travels as JSON text in the `email` form field.
    pub async fn smtp_send_mail(&self, email: &Map<String, Value>) -> SendPulseResponse {
        self.dispatch(|| {
            if email.is_empty() {
                return Err(ValidationError::Empty { field: "email data" });
            }

            let mut email = email.clone();
            if let Some(Value::String(html)) = email.get_mut("html") {
                *html = base64(html);
            }
            let serialized = Value::Object(email).to_string();
            Ok(table::SMTP_SEND_MAIL.request(&[], Params::new().with("email", serialized)))
        })
        .await
    }

    pub async fn smtp_list_emails(&self, filter: &SmtpEmailFilter) -> SendPulseResponse {
        let params = Params::new()
            .with("limit", filter.limit)
            .with("offset", filter.offset)
            .with_opt("from", filter.from.as_deref())
            .with_opt("to", filter.to.as_deref())
            .with_opt("sender", filter.sender.as_deref())
            .with_opt("recipient", filter.recipient.as_deref());
        self.execute(table::SMTP_LIST_EMAILS.request(&[], params))
            .await
    }

    pub async fn smtp_get_email_info_by_id(&self, id: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let id = path_segment("email id", id)?;
            Ok(table::SMTP_GET_EMAIL_INFO.request(&[&id], Params::new()))
        })
        .await
    }

    /// `emails` is the JSON-serialized list the API expects.
    pub async fn smtp_unsubscribe_emails(&self, emails: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let emails = non_empty(EMAILS, emails)?;
            let params = Params::new().with("emails", emails);
            Ok(table::SMTP_UNSUBSCRIBE_EMAILS.request(&[], params))
        })
        .await
    }

    /// `emails` is the JSON-serialized list the API expects.
    pub async fn smtp_remove_from_unsubscribe(&self, emails: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let emails = non_empty(EMAILS, emails)?;
            let params = Params::new().with("emails", emails);
            Ok(table::SMTP_REMOVE_FROM_UNSUBSCRIBE.request(&[], params))
        })
        .await
    }

    pub async fn smtp_list_ip(&self) -> SendPulseResponse {
        self.execute(table::SMTP_LIST_IP.request(&[], Params::new()))
            .await
    }

    pub async fn smtp_list_allowed_domains(&self) -> SendPulseResponse {
        self.execute(table::SMTP_LIST_ALLOWED_DOMAINS.request(&[], Params::new()))
            .await
    }

    /// Register a sending domain by one of its addresses.
    pub async fn smtp_add_domain(&self, email: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let email = non_empty(EMAIL, email)?;
            Ok(table::SMTP_ADD_DOMAIN.request(&[], Params::new().with("email", email)))
        })
        .await
    }

    /// Send the confirmation mail for a newly added domain.
    pub async fn smtp_verify_domain(&self, email: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let email = path_segment(EMAIL, email)?;
            Ok(table::SMTP_VERIFY_DOMAIN.request(&[&email], Params::new()))
        })
        .await
    }
}
