use std::io;

use sendpulse::{
    SendPulseClient, SendPulseConfig, ViberCampaign, ViberCampaignAdditional,
    ViberCampaignButton, ViberMessageType,
};

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let sender_id = required("SENDPULSE_VIBER_SENDER_ID")?.parse::<u64>()?;
    let phone = required("SENDPULSE_PHONE")?;

    let client = SendPulseClient::from_config(SendPulseConfig::from_env()?)?;
    let campaign = ViberCampaign {
        name: Some("demo".to_owned()),
        recipients: vec![phone],
        message: "Hello from the sendpulse demo.".to_owned(),
        sender_id,
        message_type: ViberMessageType::Transactional,
        additional: Some(ViberCampaignAdditional {
            button: Some(ViberCampaignButton {
                text: "Open".to_owned(),
                link: "https://sendpulse.com".to_owned(),
            }),
            ..Default::default()
        }),
        ..Default::default()
    };

    let response = client.send_viber_campaign(&campaign).await;
    println!(
        "status: {}, error: {}, data: {:?}, message: {:?}",
        response.http_status_code, response.is_error, response.data, response.sdk_error_message
    );

    Ok(())
}
