use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::error::{UserError, UserResult};
use crate::password::{MAX_PASSWORD_BYTES, hash_password};

/// User entity - the document stored in the `users` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store on insert (stored as _id in MongoDB)
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// bcrypt hash; never part of any API response
    #[serde(rename = "password")]
    pub password_hash: String,
}

/// User as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// 24-character hex ObjectId
    #[schema(example = "65f1c0ffee0ddba11ad5eed5")]
    pub id: String,
    #[schema(example = "Some")]
    pub first_name: String,
    #[schema(example = "Foo")]
    pub last_name: String,
    #[schema(example = "some@foo.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

/// Payload for creating a user
///
/// Absent and `null` fields deserialize as empty strings so they fail
/// validation with a field error instead of failing JSON extraction.
#[derive(Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateUserParams {
    #[validate(length(min = 2, max = 100))]
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "Some")]
    pub first_name: String,
    #[validate(length(min = 2, max = 100))]
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "Foo")]
    pub last_name: String,
    #[validate(email)]
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "some@foo.com")]
    pub email: String,
    #[validate(length(min = 7, max = 72), custom(function = "password_fits_bcrypt"))]
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "01234567", format = Password)]
    pub password: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// bcrypt only reads the first 72 bytes; multi-byte passwords can pass the
/// character count and still exceed it
fn password_fits_bcrypt(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        let mut err = ValidationError::new("bcrypt_limit");
        err.message = Some(format!("must be at most {MAX_PASSWORD_BYTES} bytes").into());
        err.add_param("max_bytes".into(), &MAX_PASSWORD_BYTES);
        return Err(err);
    }
    Ok(())
}

impl std::fmt::Debug for CreateUserParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserParams")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Payload for a partial update; only present fields are written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserParams {
    #[validate(length(min = 2, max = 100))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[validate(length(min = 2, max = 100))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl UpdateUserParams {
    /// True when no field would be written
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }

    /// Overlay the present fields onto `user`
    pub fn apply_to(&self, user: &mut User) {
        if let Some(ref first_name) = self.first_name {
            user.first_name = first_name.clone();
        }
        if let Some(ref last_name) = self.last_name {
            user.last_name = last_name.clone();
        }
    }
}

/// Selects the documents an update applies to. An empty filter matches all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub id: Option<ObjectId>,
    pub email: Option<String>,
}

impl UserFilter {
    pub fn by_id(id: ObjectId) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        let id_matches = self.id.is_none_or(|id| user.id == Some(id));
        let email_matches = self
            .email
            .as_deref()
            .is_none_or(|email| user.email == email);
        id_matches && email_matches
    }
}

impl User {
    /// Build a persistable user from validated creation params.
    ///
    /// Names and email are copied verbatim; the password is replaced by its
    /// bcrypt hash. The id stays unset until the store inserts the user.
    pub fn from_params(params: CreateUserParams) -> UserResult<Self> {
        let password_hash = hash_password(&params.password)?;

        Ok(Self {
            id: None,
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            password_hash,
        })
    }
}

/// Decode a path identifier into an ObjectId
pub fn parse_object_id(id: &str) -> UserResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| UserError::InvalidId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::verify_password;

    fn valid_params() -> CreateUserParams {
        CreateUserParams {
            first_name: "Some".to_string(),
            last_name: "Foo".to_string(),
            email: "some@foo.com".to_string(),
            password: "01234567".to_string(),
        }
    }

    #[test]
    fn test_valid_create_params() {
        assert!(valid_params().validate().is_ok());
    }

    #[test]
    fn test_create_params_reports_each_bad_field() {
        let params = CreateUserParams {
            first_name: "S".to_string(),
            last_name: "F".repeat(101),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };

        let errors = params.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("last_name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_missing_fields_fail_validation() {
        let params: CreateUserParams = serde_json::from_str(r#"{"first_name":"Some"}"#).unwrap();

        let errors = params.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(!fields.contains_key("first_name"));
        assert!(fields.contains_key("last_name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_null_fields_fail_validation() {
        let params: CreateUserParams = serde_json::from_str(
            r#"{"first_name":null,"last_name":"Foo","email":"some@foo.com","password":"01234567"}"#,
        )
        .unwrap();

        assert_eq!(params.first_name, "");
        let errors = params.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_multibyte_password_over_bcrypt_limit() {
        let params = CreateUserParams {
            password: "é".repeat(40),
            ..valid_params()
        };
        assert_eq!(params.password.chars().count(), 40);

        let errors = params.validate().unwrap_err();
        let password_errors = errors.field_errors()["password"];
        assert!(password_errors.iter().any(|e| e.code == "bcrypt_limit"));

        let fits = CreateUserParams {
            password: "é".repeat(36),
            ..valid_params()
        };
        assert!(fits.validate().is_ok());
    }

    #[test]
    fn test_update_params_only_check_present_fields() {
        assert!(UpdateUserParams::default().validate().is_ok());

        let params = UpdateUserParams {
            first_name: Some("X".to_string()),
            last_name: None,
        };
        let errors = params.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
        assert!(!errors.field_errors().contains_key("last_name"));
    }

    #[test]
    fn test_from_params_hashes_password() {
        let user = User::from_params(valid_params()).unwrap();

        assert_eq!(user.id, None);
        assert_eq!(user.first_name, "Some");
        assert_eq!(user.last_name, "Foo");
        assert_eq!(user.email, "some@foo.com");
        assert_ne!(user.password_hash, "01234567");
        assert!(verify_password("01234567", &user.password_hash).unwrap());
    }

    #[test]
    fn test_response_never_contains_password() {
        let user = User {
            id: Some(ObjectId::new()),
            first_name: "Some".to_string(),
            last_name: "Foo".to_string(),
            email: "some@foo.com".to_string(),
            password_hash: "$2b$12$hash".to_string(),
        };
        let id = user.id.unwrap().to_hex();

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json["id"], id.as_str());
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_create_params_debug_redacts_password() {
        let debug = format!("{:?}", valid_params());
        assert!(!debug.contains("01234567"));
    }

    #[test]
    fn test_apply_update_is_sparse() {
        let mut user = User::from_params(valid_params()).unwrap();
        let update = UpdateUserParams {
            first_name: Some("Other".to_string()),
            last_name: None,
        };

        update.apply_to(&mut user);
        assert_eq!(user.first_name, "Other");
        assert_eq!(user.last_name, "Foo");
        assert_eq!(user.email, "some@foo.com");
    }

    #[test]
    fn test_filter_matching() {
        let mut user = User::from_params(valid_params()).unwrap();
        let id = ObjectId::new();
        user.id = Some(id);

        assert!(UserFilter::default().matches(&user));
        assert!(UserFilter::by_id(id).matches(&user));
        assert!(!UserFilter::by_id(ObjectId::new()).matches(&user));
        let mismatched_email = UserFilter {
            id: Some(id),
            email: Some("other@foo.com".to_string()),
        };
        assert!(!mismatched_email.matches(&user));
    }

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(UserError::InvalidId(ref raw)) if raw == "not-an-id"
        ));
    }
}
