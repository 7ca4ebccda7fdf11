use super::{ID, table};
use crate::client::SendPulseClient;
use crate::domain::{Params, SendPulseResponse, ViberCampaign, positive};

impl SendPulseClient {
    /// Create a Viber campaign.
    ///
    /// The campaign is checked locally first: it needs an address book or at least
    /// one recipient, a message and a sender id. It is then sent as a JSON body.
    pub async fn send_viber_campaign(&self, campaign: &ViberCampaign) -> SendPulseResponse {
        if let Err(err) = campaign.validate() {
            tracing::debug!(error = %err, "viber campaign rejected before sending");
            return err.into();
        }

        let body = match serde_json::to_value(campaign) {
            Ok(body) => body,
            Err(err) => {
                return SendPulseResponse::local_error(format!(
                    "cannot serialize viber campaign: {err}"
                ));
            }
        };
        self.execute(table::VIBER_SEND_CAMPAIGN.json_request(&[], body))
            .await
    }

    pub async fn get_viber_senders(&self) -> SendPulseResponse {
        self.execute(table::VIBER_SENDERS.request(&[], Params::new()))
            .await
    }

    /// List Viber tasks. Both counts are always sent; the API default is `100`/`0`.
    pub async fn get_viber_tasks_list(&self, limit: u32, offset: u32) -> SendPulseResponse {
        let params = Params::new()
            .with("limit", limit)
            .with("offset", offset);
        self.execute(table::VIBER_TASKS.request(&[], params))
            .await
    }

    pub async fn get_viber_campaign_stat(&self, id: u64) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(ID, id)?;
            Ok(table::VIBER_TASK.request(&[&id], Params::new()))
        })
        .await
    }

    pub async fn get_viber_sender(&self, id: u64) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive("sender id", id)?;
            Ok(table::VIBER_SENDER.request(&[&id], Params::new()))
        })
        .await
    }

    pub async fn get_viber_task_recipients(&self, id: u64) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(ID, id)?;
            Ok(table::VIBER_TASK_RECIPIENTS.request(&[&id], Params::new()))
        })
        .await
    }
}
