//! The Airship operations this client supports, one typed struct per endpoint.
//!
//! See <https://docs.airship.com/api/ua/> for the upstream reference.

mod channels;
mod custom_events;
mod email_channels;
mod named_users;
mod timestamps;

pub use channels::{ChannelUninstall, SUPPORTED_DEVICE_TYPES};
pub use custom_events::CustomEventCreate;
pub use email_channels::{
    EmailChannelCreate, EmailChannelLookup, EmailChannelUninstall, EmailChannelUpdate,
};
pub use named_users::{
    DEFAULT_TAG_GROUP, NamedUserAssociateEmail, NamedUserAttributesUpdate, NamedUserList,
    NamedUserLookup, NamedUserTagsUpdate, NamedUserUninstall,
};
pub use timestamps::parse_timestamp;
