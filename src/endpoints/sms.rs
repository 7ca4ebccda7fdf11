use super::{BOOK_ID, CAMPAIGN_ID, PHONES, table};
use crate::client::SendPulseClient;
use crate::domain::{
    Params, SendPulseResponse, SmsCostRecipients, SmsSendOptions, ValidationError, non_empty,
    path_segment, positive,
};

const BODY: &str = "body";

impl SendPulseClient {
    /// Add phones to an address book. `phones` is the JSON-serialized list.
    pub async fn add_phones(&self, book_id: u64, phones: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let params = book_phones(book_id, phones)?;
            Ok(table::SMS_NUMBERS.request(&[], params))
        })
        .await
    }

    pub async fn remove_phones(&self, book_id: u64, phones: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let params = book_phones(book_id, phones)?;
            Ok(table::SMS_REMOVE_NUMBERS.request(&[], params))
        })
        .await
    }

    /// Update variables of phones already in a book.
    pub async fn update_phones(
        &self,
        book_id: u64,
        phones: &str,
        variables: &str,
    ) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(BOOK_ID, book_id)?;
            let phones = non_empty(PHONES, phones)?;
            let params = Params::new()
                .with("phones", phones)
                .with("variables", variables)
                .with("addressBookId", id);
            Ok(table::SMS_UPDATE_NUMBERS.request(&[], params))
        })
        .await
    }

    pub async fn get_phone_info(&self, book_id: u64, phone: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(BOOK_ID, book_id)?;
            let phone = path_segment("phone", phone)?;
            Ok(table::SMS_NUMBER_INFO.request(&[&id, &phone], Params::new()))
        })
        .await
    }

    pub async fn add_phones_to_blacklist(
        &self,
        phones: &str,
        description: Option<&str>,
    ) -> SendPulseResponse {
        self.dispatch(|| {
            let phones = non_empty(PHONES, phones)?;
            let params = Params::new()
                .with("phones", phones)
                .with_opt("description", description);
            Ok(table::SMS_ADD_TO_BLACKLIST.request(&[], params))
        })
        .await
    }

    pub async fn remove_phones_from_blacklist(&self, phones: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let phones = non_empty(PHONES, phones)?;
            let params = Params::new().with("phones", phones);
            Ok(table::SMS_REMOVE_FROM_BLACKLIST.request(&[], params))
        })
        .await
    }

    pub async fn get_blacklist_phones(&self) -> SendPulseResponse {
        self.execute(table::SMS_GET_BLACKLIST.request(&[], Params::new()))
            .await
    }

    pub async fn get_phones_info_in_blacklist(&self, phones: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let phones = non_empty(PHONES, phones)?;
            let params = Params::new().with("phones", phones);
            Ok(table::SMS_BLACKLIST_BY_NUMBERS.request(&[], params))
        })
        .await
    }

    /// Send an SMS campaign to every phone of an address book.
    pub async fn send_sms_campaign(
        &self,
        book_id: u64,
        body: &str,
        options: &SmsSendOptions,
    ) -> SendPulseResponse {
        self.dispatch(|| {
            let body = non_empty(BODY, body)?;
            let id = positive(BOOK_ID, book_id)?;
            let params = Params::new().with("addressBookId", id);
            Ok(table::SMS_SEND_CAMPAIGN.request(&[], with_send_options(params, body, options)))
        })
        .await
    }

    /// Send an SMS campaign to an explicit phone list (JSON-serialized).
    pub async fn send_sms_campaign_by_phones(
        &self,
        phones: &str,
        body: &str,
        options: &SmsSendOptions,
    ) -> SendPulseResponse {
        self.dispatch(|| {
            let body = non_empty(BODY, body)?;
            let phones = non_empty(PHONES, phones)?;
            let params = Params::new().with("phones", phones);
            Ok(table::SMS_SEND_TO_PHONES.request(&[], with_send_options(params, body, options)))
        })
        .await
    }

    /// Campaigns created between two dates (`YYYY-MM-DD HH:MM:SS`).
    pub async fn get_sms_campaigns_list(
        &self,
        date_from: &str,
        date_to: &str,
    ) -> SendPulseResponse {
        let params = Params::new()
            .with("dateFrom", date_from)
            .with("dateTo", date_to);
        self.execute(table::SMS_CAMPAIGNS_LIST.request(&[], params))
            .await
    }

    pub async fn get_sms_campaign_info(&self, id: u64) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(CAMPAIGN_ID, id)?;
            Ok(table::SMS_CAMPAIGN_INFO.request(&[&id], Params::new()))
        })
        .await
    }

    pub async fn cancel_sms_campaign(&self, id: u64) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(CAMPAIGN_ID, id)?;
            Ok(table::SMS_CANCEL_CAMPAIGN.request(&[&id], Params::new()))
        })
        .await
    }

    /// Estimate the cost of an SMS campaign for a book or a phone list.
    pub async fn get_sms_campaign_cost(
        &self,
        body: &str,
        sender: &str,
        recipients: &SmsCostRecipients,
    ) -> SendPulseResponse {
        self.dispatch(|| {
            let body = non_empty(BODY, body)?;
            let params = Params::new().with("body", body).with("sender", sender);
            let params = match recipients {
                SmsCostRecipients::Phones(phones) if !phones.trim().is_empty() => {
                    params.with("phones", phones.as_str())
                }
                SmsCostRecipients::AddressBook(id) if *id > 0 => params.with("addressBookId", *id),
                _ => return Err(ValidationError::MissingRecipients),
            };
            Ok(table::SMS_CAMPAIGN_COST.request(&[], params))
        })
        .await
    }

    pub async fn delete_sms_campaign(&self, id: u64) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(CAMPAIGN_ID, id)?;
            Ok(table::SMS_DELETE_CAMPAIGN.request(&[], Params::new().with("id", id)))
        })
        .await
    }

    /// Add phones together with their variables. `phones` is the JSON-serialized
    /// map of phone to variables.
    pub async fn add_phones_to_address_book(
        &self,
        book_id: u64,
        phones: &str,
    ) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(BOOK_ID, book_id)?;
            let phones = non_empty(PHONES, phones)?;
            let params = Params::new()
                .with("phones", phones)
                .with("addressBookId", id);
            Ok(table::SMS_ADD_NUMBERS_WITH_VARIABLES.request(&[], params))
        })
        .await
    }
}

fn book_phones(book_id: u64, phones: &str) -> Result<Params, ValidationError> {
    let id = positive(BOOK_ID, book_id)?;
    let phones = non_empty(PHONES, phones)?;
    Ok(Params::new()
        .with("phones", phones)
        .with("addressBookId", id))
}

fn with_send_options(params: Params, body: &str, options: &SmsSendOptions) -> Params {
    let transliterate = if options.transliterate { "1" } else { "0" };
    params
        .with("body", body)
        .with_opt("sender", options.sender.as_deref().filter(|it| !it.is_empty()))
        .with("transliterate", transliterate)
        .with_opt("date", options.date.as_deref().filter(|it| !it.is_empty()))
}
