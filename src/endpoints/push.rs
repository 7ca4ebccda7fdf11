use serde_json::{Map, Value};

use super::{ID, table};
use crate::client::SendPulseClient;
use crate::domain::{Params, SendPulseResponse, ValidationError, positive};

const WEBSITE_ID: &str = "website id";
const REQUIRED_TASK_KEYS: [&str; 3] = ["title", "website_id", "body"];

impl SendPulseClient {
    pub async fn push_list_campaigns(&self, limit: u32, offset: u32) -> SendPulseResponse {
        let params = Params::new()
            .with_nonzero("limit", limit)
            .with_nonzero("offset", offset);
        self.execute(table::PUSH_LIST_CAMPAIGNS.request(&[], params))
            .await
    }

    pub async fn push_campaign_info(&self, id: u64) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive("push campaign id", id)?;
            Ok(table::PUSH_CAMPAIGN_INFO.request(&[&id], Params::new()))
        })
        .await
    }

    pub async fn push_count_websites(&self) -> SendPulseResponse {
        self.execute(table::PUSH_COUNT_WEBSITES.request(&[], Params::new()))
            .await
    }

    pub async fn push_list_websites(&self, limit: u32, offset: u32) -> SendPulseResponse {
        let params = Params::new()
            .with_nonzero("limit", limit)
            .with_nonzero("offset", offset);
        self.execute(table::PUSH_LIST_WEBSITES.request(&[], params))
            .await
    }

    pub async fn push_list_website_variables(&self, id: u64) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(WEBSITE_ID, id)?;
            Ok(table::PUSH_LIST_WEBSITE_VARIABLES.request(&[&id], Params::new()))
        })
        .await
    }

    pub async fn push_list_website_subscriptions(
        &self,
        id: u64,
        limit: u32,
        offset: u32,
    ) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(WEBSITE_ID, id)?;
            let params = Params::new()
                .with_nonzero("limit", limit)
                .with_nonzero("offset", offset);
            Ok(table::PUSH_LIST_WEBSITE_SUBSCRIPTIONS.request(&[&id], params))
        })
        .await
    }

    pub async fn push_count_website_subscriptions(&self, id: u64) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(WEBSITE_ID, id)?;
            Ok(table::PUSH_COUNT_WEBSITE_SUBSCRIPTIONS.request(&[&id], Params::new()))
        })
        .await
    }

    /// Activate (`state = 1`) or deactivate (`state = 0`) a push subscription.
    pub async fn push_set_subscription_state(&self, id: u64, state: u32) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(ID, id)?;
            let params = Params::new().with("id", id).with("state", state);
            Ok(table::PUSH_SET_SUBSCRIPTION_STATE.request(&[], params))
        })
        .await
    }

    /// Create a push notification task.
    ///
    /// `task` must carry `title`, `website_id` and `body`. `ttl` defaults to `0`
    /// when absent. Entries of `additional` are appended after the task fields,
    /// overriding task keys of the same name.
    pub async fn create_push_task(
        &self,
        task: &Map<String, Value>,
        additional: Option<&Map<String, Value>>,
    ) -> SendPulseResponse {
        self.dispatch(|| {
            let mut data = task.clone();
            data.entry("ttl").or_insert(Value::from(0));
            if let Some(key) = REQUIRED_TASK_KEYS
                .into_iter()
                .find(|key| !data.contains_key(*key))
            {
                return Err(ValidationError::MissingKey { key });
            }

            if let Some(additional) = additional {
                data.extend(additional.clone());
            }
            Ok(table::CREATE_PUSH_TASK.request(&[], Params::from_json_map(data)))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use url::form_urlencoded;

    use crate::client::tests::{FakeTransport, make_client};
    use crate::domain::HttpMethod;

    fn task() -> serde_json::Map<String, serde_json::Value> {
        json!({"title": "Hello", "website_id": 53, "body": "New arrivals"})
            .as_object()
            .cloned()
            .unwrap()
    }

    #[tokio::test]
    async fn create_push_task_defaults_ttl() {
        let transport = FakeTransport::new();
        let client = make_client(transport.clone());

        client.create_push_task(&task(), None).await;

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://example.invalid/push/tasks");
        assert_eq!(
            request.body.as_deref(),
            Some("title=Hello&website_id=53&body=New+arrivals&ttl=0")
        );
    }

    #[tokio::test]
    async fn create_push_task_merges_additional_params() {
        let transport = FakeTransport::new();
        let client = make_client(transport.clone());

        let mut with_ttl = task();
        with_ttl.insert("ttl".to_owned(), json!(3600));
        let additional = json!({"link": "https://shop.io", "filter_browsers": "Chrome"});
        client
            .create_push_task(&with_ttl, additional.as_object())
            .await;

        let body = transport.last_request().body.unwrap();
        let fields = form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect::<Vec<_>>();
        assert!(fields.contains(&("ttl".to_owned(), "3600".to_owned())));
        assert!(fields.contains(&("link".to_owned(), "https://shop.io".to_owned())));
        assert!(fields.contains(&("filter_browsers".to_owned(), "Chrome".to_owned())));
    }

    #[tokio::test]
    async fn create_push_task_requires_mandatory_keys() {
        let transport = FakeTransport::new();
        let client = make_client(transport.clone());

        let mut incomplete = task();
        incomplete.remove("website_id");
        let response = client.create_push_task(&incomplete, None).await;

        assert!(response.is_error);
        assert_eq!(
            response.sdk_error_message.as_deref(),
            Some("missing required key: website_id")
        );
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn website_subscriptions_use_nested_paths() {
        let transport = FakeTransport::new();
        let client = make_client(transport.clone());

        client.push_list_website_subscriptions(8, 10, 0).await;
        client.push_count_website_subscriptions(8).await;
        assert!(client.push_count_website_subscriptions(0).await.is_error);

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(
            requests[0].url,
            "https://example.invalid/push/websites/8/subscriptions?limit=10"
        );
        assert_eq!(
            requests[1].url,
            "https://example.invalid/push/websites/8/subscriptions/total"
        );
    }

    #[tokio::test]
    async fn set_subscription_state_posts_id_and_state() {
        let transport = FakeTransport::new();
        let client = make_client(transport.clone());

        client.push_set_subscription_state(41, 0).await;
        assert_eq!(
            transport.last_request().body.as_deref(),
            Some("id=41&state=0")
        );
    }
}
