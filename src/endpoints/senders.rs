use super::{EMAIL, table};
use crate::client::SendPulseClient;
use crate::domain::{Params, SendPulseResponse, non_empty, path_segment};

impl SendPulseClient {
    pub async fn list_senders(&self) -> SendPulseResponse {
        self.execute(table::LIST_SENDERS.request(&[], Params::new()))
            .await
    }

    pub async fn add_sender(&self, name: &str, email: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let name = non_empty("sender name", name)?;
            let email = non_empty(EMAIL, email)?;
            let params = Params::new().with("name", name).with("email", email);
            Ok(table::ADD_SENDER.request(&[], params))
        })
        .await
    }

    pub async fn remove_sender(&self, email: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let email = non_empty(EMAIL, email)?;
            Ok(table::REMOVE_SENDER.request(&[], Params::new().with("email", email)))
        })
        .await
    }

    /// Activate a sender with the code mailed to it.
    pub async fn activate_sender(&self, email: &str, code: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let email = path_segment(EMAIL, email)?;
            let code = non_empty("activation code", code)?;
            Ok(table::ACTIVATE_SENDER.request(&[&email], Params::new().with("code", code)))
        })
        .await
    }

    /// Ask the API to mail an activation code to the sender address.
    pub async fn get_sender_activation_mail(&self, email: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let email = path_segment(EMAIL, email)?;
            Ok(table::GET_SENDER_ACTIVATION_MAIL.request(&[&email], Params::new()))
        })
        .await
    }
}
