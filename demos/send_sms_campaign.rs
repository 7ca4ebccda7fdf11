use std::io;

use sendpulse::{SendPulseClient, SendPulseConfig, SmsSendOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let phone = std::env::var("SENDPULSE_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SENDPULSE_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("SENDPULSE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the sendpulse demo.".to_owned());
    let sender = std::env::var("SENDPULSE_SMS_SENDER").ok();

    let client = SendPulseClient::from_config(SendPulseConfig::from_env()?)?;
    let phones = serde_json::to_string(&[phone])?;
    let options = SmsSendOptions {
        sender,
        ..Default::default()
    };

    let response = client
        .send_sms_campaign_by_phones(&phones, &message, &options)
        .await;
    println!(
        "status: {}, error: {}, data: {:?}, message: {:?}",
        response.http_status_code, response.is_error, response.data, response.sdk_error_message
    );

    Ok(())
}
