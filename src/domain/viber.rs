//! Viber campaign payload sent as JSON to `POST viber`.
//!
//! These types are serialize-only; the API never echoes them back.

use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};

use crate::domain::validation::{ValidationError, non_empty, positive};

/// Literal sent instead of a timestamp for immediate delivery.
const SEND_NOW: &str = "now";

const SEND_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize)]
pub struct ViberCampaign {
    #[serde(rename = "task_name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub recipients: Vec<String>,
    pub address_book: u64,
    pub message: String,
    /// Seconds the message stays deliverable.
    pub message_live_time: u32,
    pub sender_id: u64,
    #[serde(serialize_with = "serialize_send_date")]
    pub send_date: DateTime<Local>,
    pub message_type: ViberMessageType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<ViberCampaignAdditional>,
}

impl Default for ViberCampaign {
    fn default() -> Self {
        Self {
            name: None,
            recipients: Vec::new(),
            address_book: 0,
            message: String::new(),
            message_live_time: 60,
            sender_id: 0,
            send_date: Local::now(),
            message_type: ViberMessageType::default(),
            additional: None,
        }
    }
}

impl ViberCampaign {
    /// Check that the campaign has recipients, a message and a sender.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.address_book == 0 && self.recipients.is_empty() {
            return Err(ValidationError::MissingRecipients);
        }
        non_empty("message", &self.message)?;
        positive("sender id", self.sender_id)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
/// Viber message category, sent as its numeric API code.
pub enum ViberMessageType {
    Transactional,
    #[default]
    Marketing,
}

impl ViberMessageType {
    pub fn code(self) -> u8 {
        match self {
            Self::Transactional => 2,
            Self::Marketing => 3,
        }
    }
}

impl Serialize for ViberMessageType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ViberCampaignAdditional {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<ViberCampaignButton>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ViberCampaignImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resend_sms: Option<ViberCampaignResendSms>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViberCampaignButton {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViberCampaignImage {
    pub link: String,
}

#[derive(Debug, Clone, Serialize)]
/// SMS fallback for recipients Viber could not reach.
pub struct ViberCampaignResendSms {
    pub status: bool,
    #[serde(rename = "sms_text")]
    pub text: String,
    #[serde(rename = "sms_sender_name")]
    pub sender_name: String,
}

/// Render a send date relative to `now`: anything not in the future is sent as `"now"`.
pub(crate) fn render_send_date(value: &DateTime<Local>, now: &DateTime<Local>) -> String {
    if value <= now {
        SEND_NOW.to_owned()
    } else {
        value.format(SEND_DATE_FORMAT).to_string()
    }
}

fn serialize_send_date<S: Serializer>(
    value: &DateTime<Local>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&render_send_date(value, &Local::now()))
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    use super::*;

    fn campaign() -> ViberCampaign {
        ViberCampaign {
            recipients: vec!["380931112233".to_owned()],
            message: "hello".to_owned(),
            sender_id: 7,
            ..Default::default()
        }
    }

    #[test]
    fn send_date_in_the_past_or_present_is_now() {
        let now = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(render_send_date(&now, &now), "now");
        assert_eq!(render_send_date(&(now - Duration::seconds(1)), &now), "now");
    }

    #[test]
    fn send_date_in_the_future_uses_local_format() {
        let now = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let later = Local.with_ymd_and_hms(2024, 5, 2, 8, 30, 5).unwrap();
        assert_eq!(render_send_date(&later, &now), "2024-05-02 08:30:05");
    }

    #[test]
    fn serializes_with_api_field_names_and_omits_absent_parts() {
        let mut value = serde_json::to_value(campaign()).unwrap();
        assert_eq!(value["send_date"], json!("now"));
        assert_eq!(value["message_type"], json!(3));
        assert_eq!(value["message_live_time"], json!(60));

        let object = value.as_object_mut().unwrap();
        assert!(!object.contains_key("task_name"));
        assert!(!object.contains_key("additional"));
    }

    #[test]
    fn serializes_nested_additional_block() {
        let campaign = ViberCampaign {
            name: Some("spring".to_owned()),
            message_type: ViberMessageType::Transactional,
            additional: Some(ViberCampaignAdditional {
                button: Some(ViberCampaignButton {
                    text: "Open".to_owned(),
                    link: "https://example.com".to_owned(),
                }),
                image: None,
                resend_sms: Some(ViberCampaignResendSms {
                    status: true,
                    text: "fallback".to_owned(),
                    sender_name: "Shop".to_owned(),
                }),
            }),
            ..campaign()
        };

        let value = serde_json::to_value(campaign).unwrap();
        assert_eq!(value["task_name"], json!("spring"));
        assert_eq!(value["message_type"], json!(2));
        assert_eq!(
            value["additional"],
            json!({
                "button": {"text": "Open", "link": "https://example.com"},
                "resend_sms": {"status": true, "sms_text": "fallback", "sms_sender_name": "Shop"}
            })
        );
    }

    #[test]
    fn validate_requires_recipients_message_and_sender() {
        assert!(campaign().validate().is_ok());

        let by_book = ViberCampaign {
            recipients: Vec::new(),
            address_book: 12,
            ..campaign()
        };
        assert!(by_book.validate().is_ok());

        let nobody = ViberCampaign {
            recipients: Vec::new(),
            address_book: 0,
            ..campaign()
        };
        assert_eq!(nobody.validate(), Err(ValidationError::MissingRecipients));

        let silent = ViberCampaign {
            message: String::new(),
            ..campaign()
        };
        assert_eq!(
            silent.validate(),
            Err(ValidationError::Empty { field: "message" })
        );

        let anonymous = ViberCampaign {
            sender_id: 0,
            ..campaign()
        };
        assert_eq!(
            anonymous.validate(),
            Err(ValidationError::NotPositive { field: "sender id" })
        );
    }
}
