use crate::Role;
use crate::document::fields::*;

/// Attributes every user document must carry, whatever its role.
const COMMON_REQUIRED: &[&str] = &[
    ID,
    USER_ID,
    CATEGORY,
    EMAIL,
    FIRST_NAME,
    LAST_NAME,
    PASSWORD,
    PERMISSIONS,
    SCHEMA_VERSION,
    IS_ACTIVE,
    IS_ONLINE,
    CREATED_AT,
    UPDATED_AT,
];

const CONTACT_FIELDS: &[&str] = &[
    "address",
    "city",
    "state",
    "country",
    "countryCode",
    "zipCode",
    PHONE,
    "primaryPhone",
    "secondaryPhone",
];

const CUSTOMER_ONLY_FIELDS: &[&str] = &[
    "cardNumber",
    "cvv",
    "expiryDate",
    "message",
    "sellerMessage",
];

/// Required/optional attribute layout for one role.
#[derive(Debug, Clone)]
pub struct AttributeSet {
    pub role: Role,
    pub required: Vec<&'static str>,
    pub optional: Vec<&'static str>,
}

impl AttributeSet {
    pub fn for_role(role: Role) -> Self {
        let mut required = COMMON_REQUIRED.to_vec();
        if role.requires_username() {
            required.push(USERNAME);
        }

        let mut optional = vec![LAST_ACTIVE_AT, LAST_LOGIN_AT];
        match role {
            Role::Customer => {
                optional.push(USERNAME);
                optional.extend_from_slice(CONTACT_FIELDS);
                optional.extend_from_slice(CUSTOMER_ONLY_FIELDS);
            }
            Role::Franchise | Role::Webmaster => optional.extend_from_slice(CONTACT_FIELDS),
            Role::Test => {}
        }

        Self {
            role,
            required,
            optional,
        }
    }

    pub fn allows(&self, key: &str) -> bool {
        self.required.iter().chain(&self.optional).any(|k| *k == key)
    }
}
