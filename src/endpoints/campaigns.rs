use super::{BOOK_ID, CAMPAIGN_ID, base64, table};
use crate::client::SendPulseClient;
use crate::domain::{NewCampaign, Params, SendPulseResponse, non_empty, positive};

impl SendPulseClient {
    pub async fn list_campaigns(&self, limit: u32, offset: u32) -> SendPulseResponse {
        let params = Params::new()
            .with_nonzero("limit", limit)
            .with_nonzero("offset", offset);
        self.execute(table::LIST_CAMPAIGNS.request(&[], params))
            .await
    }

    pub async fn get_campaign_info(&self, id: u64) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(CAMPAIGN_ID, id)?;
            Ok(table::GET_CAMPAIGN_INFO.request(&[&id], Params::new()))
        })
        .await
    }

    pub async fn campaign_stat_by_countries(&self, id: u64) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(CAMPAIGN_ID, id)?;
            Ok(table::CAMPAIGN_STAT_BY_COUNTRIES.request(&[&id], Params::new()))
        })
        .await
    }

    pub async fn campaign_stat_by_referrals(&self, id: u64) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(CAMPAIGN_ID, id)?;
            Ok(table::CAMPAIGN_STAT_BY_REFERRALS.request(&[&id], Params::new()))
        })
        .await
    }

    /// Create an email campaign for an address book.
    ///
    /// The HTML body is base64-encoded before sending.
    pub async fn create_campaign(&self, campaign: &NewCampaign) -> SendPulseResponse {
        self.dispatch(|| {
            let sender_name = non_empty("sender name", &campaign.sender_name)?;
            let sender_email = non_empty("sender email", &campaign.sender_email)?;
            let subject = non_empty("subject", &campaign.subject)?;
            let body = non_empty("body", &campaign.body)?;
            let book_id = positive(BOOK_ID, campaign.book_id)?;

            let params = Params::new()
                .with_opt("attachments", non_blank(&campaign.attachments))
                .with_opt("send_date", non_blank(&campaign.send_date))
                .with("sender_name", sender_name)
                .with("sender_email", sender_email)
                .with("subject", subject)
                .with("body", base64(body))
                .with("list_id", book_id)
                .with_opt("name", non_blank(&campaign.name));
            Ok(table::CREATE_CAMPAIGN.request(&[], params))
        })
        .await
    }

    pub async fn cancel_campaign(&self, id: u64) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(CAMPAIGN_ID, id)?;
            Ok(table::CANCEL_CAMPAIGN.request(&[&id], Params::new()))
        })
        .await
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|it| !it.is_empty())
}
