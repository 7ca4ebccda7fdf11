//! Every remote endpoint as data: verb, path template, body encoding and auth.
//!
//! `{}` in a path is replaced, in order, by the segments passed to
//! [`Endpoint::request`]. Each segment is percent-encoded, so `/`, `?` and `#`
//! inside a value cannot change the route.

use std::fmt::Display;

use serde_json::Value;

use urlencoding::encode;

use crate::domain::{Encoding, HttpMethod, Params, Payload, RequestDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Endpoint {
    pub(crate) method: HttpMethod,
    pub(crate) path: &'static str,
    pub(crate) encoding: Encoding,
    pub(crate) use_auth: bool,
}

impl Endpoint {
    const fn form(method: HttpMethod, path: &'static str) -> Self {
        Self {
            method,
            path,
            encoding: Encoding::Form,
            use_auth: true,
        }
    }

    const fn json(method: HttpMethod, path: &'static str) -> Self {
        Self {
            method,
            path,
            encoding: Encoding::Json,
            use_auth: true,
        }
    }

    const fn without_auth(self) -> Self {
        Self {
            use_auth: false,
            ..self
        }
    }

    /// Build a descriptor carrying form params.
    pub(crate) fn request(&self, segments: &[&dyn Display], params: Params) -> RequestDescriptor {
        debug_assert_eq!(self.encoding, Encoding::Form, "{} is JSON-encoded", self.path);
        self.descriptor(segments, Payload::Form(params))
    }

    /// Build a descriptor carrying a structured JSON body.
    pub(crate) fn json_request(&self, segments: &[&dyn Display], body: Value) -> RequestDescriptor {
        debug_assert_eq!(self.encoding, Encoding::Json, "{} is form-encoded", self.path);
        self.descriptor(segments, Payload::Json(body))
    }

    fn descriptor(&self, segments: &[&dyn Display], payload: Payload) -> RequestDescriptor {
        RequestDescriptor {
            method: self.method,
            path: self.resolve_path(segments),
            payload,
            use_auth: self.use_auth,
        }
    }

    fn resolve_path(&self, segments: &[&dyn Display]) -> String {
        debug_assert_eq!(
            self.placeholders(),
            segments.len(),
            "segment count mismatch for {}",
            self.path
        );

        let mut parts = self.path.split("{}");
        let mut path = parts.next().unwrap_or_default().to_owned();
        for (segment, rest) in segments.iter().zip(parts) {
            path.push_str(&encode(&segment.to_string()));
            path.push_str(rest);
        }
        path
    }

    pub(crate) fn placeholders(&self) -> usize {
        self.path.matches("{}").count()
    }
}

use HttpMethod::{Delete, Get, Post, Put};

pub(crate) const ACCESS_TOKEN: Endpoint = Endpoint::form(Post, "oauth/access_token").without_auth();

pub(crate) const LIST_ADDRESS_BOOKS: Endpoint = Endpoint::form(Get, "addressbooks");
pub(crate) const GET_BOOK_INFO: Endpoint = Endpoint::form(Get, "addressbooks/{}");
pub(crate) const GET_EMAILS_FROM_BOOK: Endpoint = Endpoint::form(Get, "addressbooks/{}/emails");
pub(crate) const REMOVE_ADDRESS_BOOK: Endpoint = Endpoint::form(Delete, "addressbooks/{}");
pub(crate) const EDIT_ADDRESS_BOOK: Endpoint = Endpoint::form(Put, "addressbooks/{}");
pub(crate) const CREATE_ADDRESS_BOOK: Endpoint = Endpoint::form(Post, "addressbooks");
pub(crate) const ADD_EMAILS: Endpoint = Endpoint::form(Post, "addressbooks/{}/emails");
pub(crate) const REMOVE_EMAILS: Endpoint = Endpoint::form(Delete, "addressbooks/{}/emails");
pub(crate) const GET_EMAIL_INFO: Endpoint = Endpoint::form(Get, "addressbooks/{}/emails/{}");
pub(crate) const CAMPAIGN_COST: Endpoint = Endpoint::form(Get, "addressbooks/{}/cost");

pub(crate) const LIST_CAMPAIGNS: Endpoint = Endpoint::form(Get, "campaigns");
pub(crate) const GET_CAMPAIGN_INFO: Endpoint = Endpoint::form(Get, "campaigns/{}");
pub(crate) const CAMPAIGN_STAT_BY_COUNTRIES: Endpoint =
    Endpoint::form(Get, "campaigns/{}/countries");
pub(crate) const CAMPAIGN_STAT_BY_REFERRALS: Endpoint =
    Endpoint::form(Get, "campaigns/{}/referrals");
pub(crate) const CREATE_CAMPAIGN: Endpoint = Endpoint::form(Post, "campaigns");
pub(crate) const CANCEL_CAMPAIGN: Endpoint = Endpoint::form(Delete, "campaigns/{}");

pub(crate) const LIST_SENDERS: Endpoint = Endpoint::form(Get, "senders");
pub(crate) const ADD_SENDER: Endpoint = Endpoint::form(Post, "senders");
pub(crate) const REMOVE_SENDER: Endpoint = Endpoint::form(Delete, "senders");
pub(crate) const ACTIVATE_SENDER: Endpoint = Endpoint::form(Post, "senders/{}/code");
pub(crate) const GET_SENDER_ACTIVATION_MAIL: Endpoint = Endpoint::form(Get, "senders/{}/code");

pub(crate) const GET_EMAIL_GLOBAL_INFO: Endpoint = Endpoint::form(Get, "emails/{}");
pub(crate) const REMOVE_EMAIL_FROM_ALL_BOOKS: Endpoint = Endpoint::form(Delete, "emails/{}");
pub(crate) const EMAIL_STAT_BY_CAMPAIGNS: Endpoint = Endpoint::form(Get, "emails/{}/campaigns");
pub(crate) const GET_BLACKLIST: Endpoint = Endpoint::form(Get, "blacklist");
pub(crate) const ADD_TO_BLACKLIST: Endpoint = Endpoint::form(Post, "blacklist");
pub(crate) const REMOVE_FROM_BLACKLIST: Endpoint = Endpoint::form(Delete, "blacklist");
pub(crate) const GET_BALANCE: Endpoint = Endpoint::form(Get, "balance");
pub(crate) const GET_BALANCE_IN: Endpoint = Endpoint::form(Get, "balance/{}");

pub(crate) const SMTP_SEND_MAIL: Endpoint = Endpoint::form(Post, "smtp/emails");
pub(crate) const SMTP_LIST_EMAILS: Endpoint = Endpoint::form(Get, "smtp/emails");
pub(crate) const SMTP_GET_EMAIL_INFO: Endpoint = Endpoint::form(Get, "smtp/emails/{}");
pub(crate) const SMTP_UNSUBSCRIBE_EMAILS: Endpoint = Endpoint::form(Post, "smtp/unsubscribe");
pub(crate) const SMTP_REMOVE_FROM_UNSUBSCRIBE: Endpoint =
    Endpoint::form(Delete, "smtp/unsubscribe");
pub(crate) const SMTP_LIST_IP: Endpoint = Endpoint::form(Get, "smtp/ips");
pub(crate) const SMTP_LIST_ALLOWED_DOMAINS: Endpoint = Endpoint::form(Get, "smtp/domains");
pub(crate) const SMTP_ADD_DOMAIN: Endpoint = Endpoint::form(Post, "smtp/domains");
pub(crate) const SMTP_VERIFY_DOMAIN: Endpoint = Endpoint::form(Get, "smtp/domains/{}");

pub(crate) const PUSH_LIST_CAMPAIGNS: Endpoint = Endpoint::form(Get, "push/tasks");
pub(crate) const PUSH_CAMPAIGN_INFO: Endpoint = Endpoint::form(Get, "push/tasks/{}");
pub(crate) const PUSH_COUNT_WEBSITES: Endpoint = Endpoint::form(Get, "push/websites/total");
pub(crate) const PUSH_LIST_WEBSITES: Endpoint = Endpoint::form(Get, "push/websites");
pub(crate) const PUSH_LIST_WEBSITE_VARIABLES: Endpoint =
    Endpoint::form(Get, "push/websites/{}/variables");
pub(crate) const PUSH_LIST_WEBSITE_SUBSCRIPTIONS: Endpoint =
    Endpoint::form(Get, "push/websites/{}/subscriptions");
pub(crate) const PUSH_COUNT_WEBSITE_SUBSCRIPTIONS: Endpoint =
    Endpoint::form(Get, "push/websites/{}/subscriptions/total");
pub(crate) const PUSH_SET_SUBSCRIPTION_STATE: Endpoint =
    Endpoint::form(Post, "push/subscriptions/state");
pub(crate) const CREATE_PUSH_TASK: Endpoint = Endpoint::form(Post, "push/tasks");

pub(crate) const SMS_NUMBERS: Endpoint = Endpoint::form(Post, "sms/numbers");
pub(crate) const SMS_REMOVE_NUMBERS: Endpoint = Endpoint::form(Delete, "sms/numbers");
pub(crate) const SMS_UPDATE_NUMBERS: Endpoint = Endpoint::form(Put, "sms/numbers");
pub(crate) const SMS_NUMBER_INFO: Endpoint = Endpoint::form(Get, "sms/numbers/info/{}/{}");
pub(crate) const SMS_ADD_NUMBERS_WITH_VARIABLES: Endpoint =
    Endpoint::form(Post, "sms/numbers/variables");
pub(crate) const SMS_ADD_TO_BLACKLIST: Endpoint = Endpoint::form(Post, "sms/black_list");
pub(crate) const SMS_REMOVE_FROM_BLACKLIST: Endpoint = Endpoint::form(Delete, "sms/black_list");
pub(crate) const SMS_GET_BLACKLIST: Endpoint = Endpoint::form(Get, "sms/black_list");
pub(crate) const SMS_BLACKLIST_BY_NUMBERS: Endpoint =
    Endpoint::form(Get, "sms/black_list/by_numbers");
pub(crate) const SMS_SEND_CAMPAIGN: Endpoint = Endpoint::form(Post, "sms/campaigns");
pub(crate) const SMS_SEND_TO_PHONES: Endpoint = Endpoint::form(Post, "sms/send");
pub(crate) const SMS_CAMPAIGNS_LIST: Endpoint = Endpoint::form(Get, "sms/campaigns/list");
pub(crate) const SMS_CAMPAIGN_INFO: Endpoint = Endpoint::form(Get, "sms/campaigns/info/{}");
pub(crate) const SMS_CANCEL_CAMPAIGN: Endpoint = Endpoint::form(Get, "sms/campaigns/cancel/{}");
pub(crate) const SMS_CAMPAIGN_COST: Endpoint = Endpoint::form(Get, "sms/campaigns/cost");
pub(crate) const SMS_DELETE_CAMPAIGN: Endpoint = Endpoint::form(Delete, "sms/campaigns");

pub(crate) const VIBER_SEND_CAMPAIGN: Endpoint = Endpoint::json(Post, "viber");
pub(crate) const VIBER_SENDERS: Endpoint = Endpoint::form(Get, "viber/senders");
pub(crate) const VIBER_SENDER: Endpoint = Endpoint::form(Get, "viber/senders/{}");
pub(crate) const VIBER_TASKS: Endpoint = Endpoint::form(Get, "viber/task");
pub(crate) const VIBER_TASK: Endpoint = Endpoint::form(Get, "viber/task/{}");
pub(crate) const VIBER_TASK_RECIPIENTS: Endpoint = Endpoint::form(Get, "viber/task/{}/recipients");

#[cfg(test)]
pub(crate) const ALL: &[Endpoint] = &[
    ACCESS_TOKEN,
    LIST_ADDRESS_BOOKS,
    GET_BOOK_INFO,
    GET_EMAILS_FROM_BOOK,
    REMOVE_ADDRESS_BOOK,
    EDIT_ADDRESS_BOOK,
    CREATE_ADDRESS_BOOK,
    ADD_EMAILS,
    REMOVE_EMAILS,
    GET_EMAIL_INFO,
    CAMPAIGN_COST,
    LIST_CAMPAIGNS,
    GET_CAMPAIGN_INFO,
    CAMPAIGN_STAT_BY_COUNTRIES,
    CAMPAIGN_STAT_BY_REFERRALS,
    CREATE_CAMPAIGN,
    CANCEL_CAMPAIGN,
    LIST_SENDERS,
    ADD_SENDER,
    REMOVE_SENDER,
    ACTIVATE_SENDER,
    GET_SENDER_ACTIVATION_MAIL,
    GET_EMAIL_GLOBAL_INFO,
    REMOVE_EMAIL_FROM_ALL_BOOKS,
    EMAIL_STAT_BY_CAMPAIGNS,
    GET_BLACKLIST,
    ADD_TO_BLACKLIST,
    REMOVE_FROM_BLACKLIST,
    GET_BALANCE,
    GET_BALANCE_IN,
    SMTP_SEND_MAIL,
    SMTP_LIST_EMAILS,
    SMTP_GET_EMAIL_INFO,
    SMTP_UNSUBSCRIBE_EMAILS,
    SMTP_REMOVE_FROM_UNSUBSCRIBE,
    SMTP_LIST_IP,
    SMTP_LIST_ALLOWED_DOMAINS,
    SMTP_ADD_DOMAIN,
    SMTP_VERIFY_DOMAIN,
    PUSH_LIST_CAMPAIGNS,
    PUSH_CAMPAIGN_INFO,
    PUSH_COUNT_WEBSITES,
    PUSH_LIST_WEBSITES,
    PUSH_LIST_WEBSITE_VARIABLES,
    PUSH_LIST_WEBSITE_SUBSCRIPTIONS,
    PUSH_COUNT_WEBSITE_SUBSCRIPTIONS,
    PUSH_SET_SUBSCRIPTION_STATE,
    CREATE_PUSH_TASK,
    SMS_NUMBERS,
    SMS_REMOVE_NUMBERS,
    SMS_UPDATE_NUMBERS,
    SMS_NUMBER_INFO,
    SMS_ADD_NUMBERS_WITH_VARIABLES,
    SMS_ADD_TO_BLACKLIST,
    SMS_REMOVE_FROM_BLACKLIST,
    SMS_GET_BLACKLIST,
    SMS_BLACKLIST_BY_NUMBERS,
    SMS_SEND_CAMPAIGN,
    SMS_SEND_TO_PHONES,
    SMS_CAMPAIGNS_LIST,
    SMS_CAMPAIGN_INFO,
    SMS_CANCEL_CAMPAIGN,
    SMS_CAMPAIGN_COST,
    SMS_DELETE_CAMPAIGN,
    VIBER_SEND_CAMPAIGN,
    VIBER_SENDERS,
    VIBER_SENDER,
    VIBER_TASKS,
    VIBER_TASK,
    VIBER_TASK_RECIPIENTS,
];
