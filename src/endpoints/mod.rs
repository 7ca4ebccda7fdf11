//! One `SendPulseClient` method per remote endpoint, grouped by API area.
//!
//! Each method validates its arguments, fills the parameters for its entry in
//! [`table`] and hands the descriptor to the retry coordinator.

mod address_books;
mod campaigns;
mod emails;
mod push;
mod senders;
mod sms;
mod smtp;
pub(crate) mod table;
mod viber;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

const BOOK_ID: &str = "book id";
const CAMPAIGN_ID: &str = "campaign id";
const EMAIL: &str = "email";
const EMAILS: &str = "emails";
const PHONES: &str = "phones";
const ID: &str = "id";

/// Standard base64 of the UTF-8 text.
fn base64(text: &str) -> String {
    BASE64.encode(text)
}
