//! Async client for the SendPulse REST API.
//!
//! The crate is split in three layers: a domain layer of strong types and
//! validation, a transport layer for wire-format details (form and JSON bodies,
//! response normalization), and a client layer that owns the bearer token and
//! resends a request once after refreshing it on `401`.
//!
//! Every API method returns a [`SendPulseResponse`]; local validation failures,
//! network failures and non-`200` answers are all reported through it.
//!
//! ```rust,no_run
//! use sendpulse::{Credentials, SendPulseClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sendpulse::SendPulseError> {
//!     let client = SendPulseClient::new(Credentials::new("client-id", "client-secret")?);
//!     let books = client.list_address_books(10, 0).await;
//!     if books.is_success() {
//!         println!("{:?}", books.data);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod endpoints;
mod transport;

pub use client::{
    DEFAULT_BASE_URL, SendPulseClient, SendPulseClientBuilder, SendPulseConfig, SendPulseError,
};
pub use domain::{
    ClientId, ClientSecret, Credentials, NewCampaign, SendPulseResponse, SmsCostRecipients,
    SmsSendOptions, SmtpEmailFilter, ValidationError, ViberCampaign, ViberCampaignAdditional,
    ViberCampaignButton, ViberCampaignImage, ViberCampaignResendSms, ViberMessageType,
};
