use crate::error::ApiError;
use crate::operation::Operation;
use crate::operations::timestamps::attribute_timestamp;
use crate::pagination::ListOperation;
use crate::transport::HttpMethod;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};

const NAMED_USERS_ENDPOINT: &str = "named_users";
const ASSOCIATE_ENDPOINT: &str = "named_users/associate";
const TAGS_ENDPOINT: &str = "named_users/tags";
const UNINSTALL_ENDPOINT: &str = "named_users/uninstall";
const NAMED_USERS_FIELD: &str = "named_users";
const LOOKUP_ID_PARAM: &str = "id";
const SET_ACTION: &str = "set";

/// Tag group used by [`NamedUserTagsUpdate`] unless overridden.
pub const DEFAULT_TAG_GROUP: &str = "ioki";

/// `POST named_users/associate`, linking an email channel to a named user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedUserAssociateEmail {
    pub named_user_id: String,
    pub email: String,
}

impl NamedUserAssociateEmail {
    pub fn new(named_user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            named_user_id: named_user_id.into(),
            email: email.into(),
        }
    }
}

impl Operation for NamedUserAssociateEmail {
    fn endpoint(&self) -> String {
        ASSOCIATE_ENDPOINT.to_string()
    }

    fn body(&self) -> Result<Value, ApiError> {
        Ok(json!({
            "named_user_id": self.named_user_id,
            "email_address": self.email,
        }))
    }
}

/// `POST named_users/<id>/attributes` with one `set` action per attribute.
///
/// Attributes are sent in insertion order. A null value is sent as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedUserAttributesUpdate {
    /// Embedded verbatim in the path; must not contain `/`, `?` or `#`.
    pub named_user_id: String,
    pub attributes: Vec<(String, Value)>,
    pub updated_at: DateTime<Utc>,
}

impl NamedUserAttributesUpdate {
    pub fn new(named_user_id: impl Into<String>, updated_at: DateTime<Utc>) -> Self {
        Self {
            named_user_id: named_user_id.into(),
            attributes: Vec::new(),
            updated_at,
        }
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }
}

impl Operation for NamedUserAttributesUpdate {
    fn endpoint(&self) -> String {
        format!("{NAMED_USERS_ENDPOINT}/{}/attributes", self.named_user_id)
    }

    fn body(&self) -> Result<Value, ApiError> {
        let timestamp = attribute_timestamp(&self.updated_at);

        let attributes: Vec<Value> = self
            .attributes
            .iter()
            .map(|(key, value)| {
                json!({
                    "action": SET_ACTION,
                    "key": key,
                    "value": value,
                    "timestamp": timestamp,
                })
            })
            .collect();

        Ok(json!({ "attributes": attributes }))
    }
}

/// `POST named_users/tags`, adding and removing tags within one tag group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedUserTagsUpdate {
    pub named_user_id: String,
    pub add_tags: Vec<String>,
    pub remove_tags: Vec<String>,
    pub tag_group: String,
}

impl NamedUserTagsUpdate {
    pub fn new(named_user_id: impl Into<String>) -> Self {
        Self {
            named_user_id: named_user_id.into(),
            add_tags: Vec::new(),
            remove_tags: Vec::new(),
            tag_group: DEFAULT_TAG_GROUP.to_string(),
        }
    }

    pub fn add(mut self, tag: impl Into<String>) -> Self {
        self.add_tags.push(tag.into());
        self
    }

    pub fn remove(mut self, tag: impl Into<String>) -> Self {
        self.remove_tags.push(tag.into());
        self
    }

    pub fn in_tag_group(mut self, tag_group: impl Into<String>) -> Self {
        self.tag_group = tag_group.into();
        self
    }
}

impl Operation for NamedUserTagsUpdate {
    fn endpoint(&self) -> String {
        TAGS_ENDPOINT.to_string()
    }

    fn body(&self) -> Result<Value, ApiError> {
        let mut payload = Map::new();
        payload.insert(
            "audience".to_string(),
            json!({ "named_user_id": [self.named_user_id] }),
        );

        // add/remove are omitted entirely when there is nothing to send
        if !self.add_tags.is_empty() {
            payload.insert("add".to_string(), json!({ self.tag_group.clone(): self.add_tags }));
        }
        if !self.remove_tags.is_empty() {
            payload.insert(
                "remove".to_string(),
                json!({ self.tag_group.clone(): self.remove_tags }),
            );
        }

        Ok(Value::Object(payload))
    }
}

/// `POST named_users/uninstall`. Airship only accepts master-secret (Basic) auth here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedUserUninstall {
    pub named_user_id: String,
}

impl NamedUserUninstall {
    pub fn new(named_user_id: impl Into<String>) -> Self {
        Self {
            named_user_id: named_user_id.into(),
        }
    }
}

impl Operation for NamedUserUninstall {
    fn endpoint(&self) -> String {
        UNINSTALL_ENDPOINT.to_string()
    }

    fn body(&self) -> Result<Value, ApiError> {
        Ok(json!({ "named_user_id": [self.named_user_id] }))
    }
}

/// `GET named_users?id=<named_user_id>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedUserLookup {
    pub named_user_id: String,
}

impl NamedUserLookup {
    pub fn new(named_user_id: impl Into<String>) -> Self {
        Self {
            named_user_id: named_user_id.into(),
        }
    }
}

impl Operation for NamedUserLookup {
    fn endpoint(&self) -> String {
        NAMED_USERS_ENDPOINT.to_string()
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn query(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(LOOKUP_ID_PARAM.to_string(), self.named_user_id.clone())])
    }
}

/// `GET named_users`, one page of the named user listing.
///
/// Use [`crate::AirshipClient::named_users`] to walk every page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamedUserList {
    /// Extra query parameters, e.g. a `start` cursor taken from a `next_page` URL.
    pub query: BTreeMap<String, String>,
}

impl NamedUserList {
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }
}

impl Operation for NamedUserList {
    fn endpoint(&self) -> String {
        NAMED_USERS_ENDPOINT.to_string()
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn query(&self) -> BTreeMap<String, String> {
        self.query.clone()
    }
}

impl ListOperation for NamedUserList {
    fn items_field(&self) -> &'static str {
        NAMED_USERS_FIELD
    }
}
