//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;
mod viber;

pub use request::{NewCampaign, SmsCostRecipients, SmsSendOptions, SmtpEmailFilter};
pub(crate) use request::{Encoding, HttpMethod, ParamValue, Params, Payload, RequestDescriptor};
pub use response::SendPulseResponse;
pub use validation::ValidationError;
pub(crate) use validation::{non_empty, path_segment, positive};
pub use value::{ClientId, ClientSecret, Credentials};
pub use viber::{
    ViberCampaign, ViberCampaignAdditional, ViberCampaignButton, ViberCampaignImage,
    ViberCampaignResendSms, ViberMessageType,
};
