use sendpulse::{SendPulseClient, SendPulseConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let client = SendPulseClient::from_config(SendPulseConfig::from_env()?)?;
    if !client.authenticate().await {
        return Err("could not obtain an access token, check SENDPULSE_CLIENT_ID/SECRET".into());
    }

    let response = client.list_address_books(10, 0).await;
    if response.is_error {
        eprintln!(
            "status: {}, error: {:?}, data: {:?}",
            response.http_status_code, response.sdk_error_message, response.data
        );
        return Ok(());
    }

    let books = response.into_data().unwrap_or_default();
    for book in books.as_array().into_iter().flatten() {
        println!("{}\t{}", book["id"], book["name"]);
    }

    Ok(())
}
