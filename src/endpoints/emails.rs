use super::{EMAIL, EMAILS, base64, table};
use crate::client::SendPulseClient;
use crate::domain::{Params, SendPulseResponse, non_empty, path_segment};

impl SendPulseClient {
    /// Information about an address across all books.
    pub async fn get_email_global_info(&self, email: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let email = path_segment(EMAIL, email)?;
            Ok(table::GET_EMAIL_GLOBAL_INFO.request(&[&email], Params::new()))
        })
        .await
    }

    pub async fn remove_email_from_all_books(&self, email: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let email = path_segment(EMAIL, email)?;
            Ok(table::REMOVE_EMAIL_FROM_ALL_BOOKS.request(&[&email], Params::new()))
        })
        .await
    }

    pub async fn email_stat_by_campaigns(&self, email: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let email = path_segment(EMAIL, email)?;
            Ok(table::EMAIL_STAT_BY_CAMPAIGNS.request(&[&email], Params::new()))
        })
        .await
    }

    pub async fn get_blacklist(&self) -> SendPulseResponse {
        self.execute(table::GET_BLACKLIST.request(&[], Params::new()))
            .await
    }

    /// Blacklist addresses. `emails` is sent base64-encoded.
    pub async fn add_to_blacklist(&self, emails: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let emails = non_empty(EMAILS, emails)?;
            Ok(table::ADD_TO_BLACKLIST.request(&[], Params::new().with("emails", base64(emails))))
        })
        .await
    }

    /// Remove addresses from the blacklist. `emails` is sent base64-encoded.
    pub async fn remove_from_blacklist(&self, emails: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let emails = non_empty(EMAILS, emails)?;
            let params = Params::new().with("emails", base64(emails));
            Ok(table::REMOVE_FROM_BLACKLIST.request(&[], params))
        })
        .await
    }

    /// Account balance, optionally converted into `currency` (e.g. `"usd"` becomes `USD`).
    pub async fn get_balance(&self, currency: Option<&str>) -> SendPulseResponse {
        let currency = currency
            .map(str::trim)
            .filter(|it| !it.is_empty())
            .map(str::to_uppercase);
        self.dispatch(|| match &currency {
            Some(currency) => {
                let currency = path_segment("currency", currency)?;
                Ok(table::GET_BALANCE_IN.request(&[&currency], Params::new()))
            }
            None => Ok(table::GET_BALANCE.request(&[], Params::new())),
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{FakeTransport, make_client};
    use crate::domain::HttpMethod;

    #[tokio::test]
    async fn blacklist_changes_send_base64_emails() {
        let transport = FakeTransport::new();
        let client = make_client(transport.clone());

        client.add_to_blacklist("a@b.io").await;
        client.remove_from_blacklist("a@b.io").await;

        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].body.as_deref(), Some("emails=YUBiLmlv"));
        assert_eq!(requests[1].method, HttpMethod::Delete);
        assert_eq!(requests[1].url, "https://example.invalid/blacklist");
    }

    #[tokio::test]
    async fn get_balance_uppercases_currency() {
        let transport = FakeTransport::new();
        let client = make_client(transport.clone());

        client.get_balance(Some("usd")).await;
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/balance/USD"
        );

        client.get_balance(None).await;
        assert_eq!(transport.last_request().url, "https://example.invalid/balance");

        client.get_balance(Some("  ")).await;
        assert_eq!(transport.last_request().url, "https://example.invalid/balance");
    }

    #[tokio::test]
    async fn email_lookups_validate_address() {
        let transport = FakeTransport::new();
        let client = make_client(transport.clone());

        assert!(client.get_email_global_info("").await.is_error);
        assert!(transport.requests().is_empty());

        client.email_stat_by_campaigns("x@y.io").await;
        client.remove_email_from_all_books("x@y.io").await;
        let requests = transport.requests();
        assert_eq!(
            requests[0].url,
            "https://example.invalid/emails/x%40y.io/campaigns"
        );
        assert_eq!(requests[1].method, HttpMethod::Delete);
    }

    #[tokio::test]
    async fn email_in_path_cannot_escape_to_another_route() {
        let transport = FakeTransport::new();
        let client = make_client(transport.clone());

        client.remove_email_from_all_books("../balance").await;
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.url, "https://example.invalid/emails/..%2Fbalance");

        assert!(client.remove_email_from_all_books("..").await.is_error);
        assert!(client.get_email_global_info(".").await.is_error);
        assert!(client.get_balance(Some("..")).await.is_error);
        assert_eq!(transport.requests().len(), 1);
    }
}
