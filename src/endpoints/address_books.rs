use super::{BOOK_ID, EMAIL, EMAILS, table};
use crate::client::SendPulseClient;
use crate::domain::{Params, SendPulseResponse, non_empty, path_segment, positive};

impl SendPulseClient {
    /// List address books. Zero `limit`/`offset` are left to the server default.
    pub async fn list_address_books(&self, limit: u32, offset: u32) -> SendPulseResponse {
        let params = Params::new()
            .with_nonzero("limit", limit)
            .with_nonzero("offset", offset);
        self.execute(table::LIST_ADDRESS_BOOKS.request(&[], params))
            .await
    }

    pub async fn get_book_info(&self, id: u64) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(BOOK_ID, id)?;
            Ok(table::GET_BOOK_INFO.request(&[&id], Params::new()))
        })
        .await
    }

    pub async fn get_emails_from_book(&self, id: u64) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(BOOK_ID, id)?;
            Ok(table::GET_EMAILS_FROM_BOOK.request(&[&id], Params::new()))
        })
        .await
    }

    pub async fn remove_address_book(&self, id: u64) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(BOOK_ID, id)?;
            Ok(table::REMOVE_ADDRESS_BOOK.request(&[&id], Params::new()))
        })
        .await
    }

    /// Rename an address book.
    pub async fn edit_address_book(&self, id: u64, new_name: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(BOOK_ID, id)?;
            let name = non_empty("book name", new_name)?;
            Ok(table::EDIT_ADDRESS_BOOK.request(&[&id], Params::new().with("name", name)))
        })
        .await
    }

    pub async fn create_address_book(&self, name: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let name = non_empty("book name", name)?;
            Ok(table::CREATE_ADDRESS_BOOK.request(&[], Params::new().with("bookName", name)))
        })
        .await
    }

    /// Add emails to a book. `emails` is the JSON-serialized list the API expects.
    pub async fn add_emails(&self, book_id: u64, emails: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(BOOK_ID, book_id)?;
            let emails = non_empty(EMAILS, emails)?;
            Ok(table::ADD_EMAILS.request(&[&id], Params::new().with("emails", emails)))
        })
        .await
    }

    /// Remove emails from a book. `emails` is the JSON-serialized list the API expects.
    pub async fn remove_emails(&self, book_id: u64, emails: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(BOOK_ID, book_id)?;
            let emails = non_empty(EMAILS, emails)?;
            Ok(table::REMOVE_EMAILS.request(&[&id], Params::new().with("emails", emails)))
        })
        .await
    }

    pub async fn get_email_info(&self, book_id: u64, email: &str) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(BOOK_ID, book_id)?;
            let email = path_segment(EMAIL, email)?;
            Ok(table::GET_EMAIL_INFO.request(&[&id, &email], Params::new()))
        })
        .await
    }

    /// Estimate the cost of a campaign sent to the whole book.
    pub async fn campaign_cost(&self, book_id: u64) -> SendPulseResponse {
        self.dispatch(|| {
            let id = positive(BOOK_ID, book_id)?;
            Ok(table::CAMPAIGN_COST.request(&[&id], Params::new()))
        })
        .await
    }
}
