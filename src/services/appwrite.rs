//! Appwrite REST adapter for [`AccountService`].
//!
//! Thin HTTP wrapper over three endpoints: list user documents, create a
//! user document, and issue an email OTP token. Those calls sit behind
//! [`UserDirectory`]; the sign-up and sign-in flows are written against that
//! trait. Pure URL/query/parse helpers are split out for testability.

use std::fmt::Write as _;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::account::{AccountError, AccountId, AccountService};
use crate::config::Config;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const AVATAR_PLACEHOLDER_URL: &str =
    "https://img.freepik.com/free-psd/3d-illustration-person-with-sunglasses_23-2149436188.jpg";

const PROJECT_HEADER: &str = "X-Appwrite-Project";
const KEY_HEADER: &str = "X-Appwrite-Key";
const UNIQUE_ID_RANDOM_LEN: usize = 7;

// =============================================================================
// CLIENT
// =============================================================================

pub struct AppwriteClient {
    http: reqwest::Client,
    endpoint: String,
    project_id: String,
    api_key: String,
    database_id: String,
    users_collection_id: String,
    avatar_url: String,
}

impl AppwriteClient {
    /// Build a client from the loaded backend config.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: &Config) -> Result<Self, AccountError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AccountError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: config.endpoint_url.clone(),
            project_id: config.project_id.clone(),
            api_key: config.secret_key().to_owned(),
            database_id: config.database_id.clone(),
            users_collection_id: config.users_collection_id.clone(),
            avatar_url: AVATAR_PLACEHOLDER_URL.to_owned(),
        })
    }

    /// Override the avatar stored on newly created user documents.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = avatar_url.into();
        self
    }

    fn users_url(&self) -> String {
        documents_url(&self.endpoint, &self.database_id, &self.users_collection_id)
    }
}

// =============================================================================
// USER DIRECTORY
// =============================================================================

/// The three backend calls the account flows are built from.
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    /// Look up the user document whose `email` attribute matches.
    ///
    /// # Errors
    ///
    /// Returns an [`AccountError`] if the request fails or the list is malformed.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<UserDocument>, AccountError>;

    /// Issue an email OTP token. Returns the backend user id the token is for.
    ///
    /// # Errors
    ///
    /// Returns an [`AccountError`] if the request fails or the token is malformed.
    async fn send_email_otp(&self, email: &str) -> Result<AccountId, AccountError>;

    /// Store a new user document linked to `account_id`.
    ///
    /// # Errors
    ///
    /// Returns an [`AccountError`] if the request fails.
    async fn create_user_document(&self, full_name: &str, email: &str, account_id: &AccountId) -> Result<(), AccountError>;
}

#[async_trait::async_trait]
impl UserDirectory for AppwriteClient {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<UserDocument>, AccountError> {
        let response = self
            .http
            .get(self.users_url())
            .header(PROJECT_HEADER, &self.project_id)
            .header(KEY_HEADER, &self.api_key)
            .query(&[("queries[]", equal_query("email", email))])
            .send()
            .await
            .map_err(|e| AccountError::Request(e.to_string()))?;

        let text = read_success_body(response).await?;
        parse_first_document(&text)
    }

    async fn send_email_otp(&self, email: &str) -> Result<AccountId, AccountError> {
        let body = EmailTokenRequest { user_id: unique_id(), email };
        let response = self
            .http
            .post(format!("{}/account/tokens/email", self.endpoint))
            .header(PROJECT_HEADER, &self.project_id)
            .header(KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AccountError::Request(e.to_string()))?;

        let text = read_success_body(response).await?;
        parse_token_user_id(&text)
    }

    async fn create_user_document(&self, full_name: &str, email: &str, account_id: &AccountId) -> Result<(), AccountError> {
        let body = CreateDocumentRequest {
            document_id: unique_id(),
            data: NewUser { full_name, email, avatar: &self.avatar_url, account_id: account_id.as_str() },
        };
        let response = self
            .http
            .post(self.users_url())
            .header(PROJECT_HEADER, &self.project_id)
            .header(KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AccountError::Request(e.to_string()))?;

        read_success_body(response).await?;
        Ok(())
    }
}

// =============================================================================
// ACCOUNT FLOWS
// =============================================================================

/// Send the login OTP and create the user document if the email is new.
/// The account id is the user id the OTP token was issued for.
async fn create_account_with<D>(directory: &D, full_name: &str, email: &str) -> Result<AccountId, AccountError>
where
    D: UserDirectory + ?Sized,
{
    let existing = directory.get_user_by_email(email).await?;
    let account_id = directory.send_email_otp(email).await?;

    if existing.is_none() {
        directory.create_user_document(full_name, email, &account_id).await?;
        tracing::info!(account_id = %account_id, "user document created");
    }

    Ok(account_id)
}

/// Send the login OTP to a known user and return the stored account id.
async fn sign_in_with<D>(directory: &D, email: &str) -> Result<AccountId, AccountError>
where
    D: UserDirectory + ?Sized,
{
    let Some(user) = directory.get_user_by_email(email).await? else {
        return Err(AccountError::UserNotFound);
    };
    directory.send_email_otp(email).await?;
    Ok(AccountId::new(user.account_id))
}

#[async_trait::async_trait]
impl AccountService for AppwriteClient {
    async fn create_account(&self, full_name: &str, email: &str) -> Result<AccountId, AccountError> {
        create_account_with(self, full_name, email).await
    }

    async fn sign_in_user(&self, email: &str) -> Result<AccountId, AccountError> {
        sign_in_with(self, email).await
    }
}

async fn read_success_body(response: reqwest::Response) -> Result<String, AccountError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| AccountError::Request(e.to_string()))?;

    if !(200..300).contains(&status) {
        return Err(AccountError::Response { status, body: text });
    }
    Ok(text)
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmailTokenRequest<'a> {
    user_id: String,
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateDocumentRequest<'a> {
    document_id: String,
    data: NewUser<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewUser<'a> {
    full_name: &'a str,
    email: &'a str,
    avatar: &'a str,
    account_id: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    user_id: String,
}

#[derive(Deserialize)]
struct DocumentList {
    documents: Vec<UserDocument>,
}

/// A document from the users collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "$id")]
    pub id: String,
    pub account_id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
}

// =============================================================================
// PURE HELPERS
// =============================================================================

/// `{endpoint}/databases/{db}/collections/{collection}/documents`
#[must_use]
pub fn documents_url(endpoint: &str, database_id: &str, collection_id: &str) -> String {
    format!("{endpoint}/databases/{database_id}/collections/{collection_id}/documents")
}

/// Serialized `equal(attribute, [value])` query.
#[must_use]
pub fn equal_query(attribute: &str, value: &str) -> String {
    serde_json::json!({
        "method": "equal",
        "attribute": attribute,
        "values": [value],
    })
    .to_string()
}

/// Client-generated unique id: hex seconds, hex microseconds, random hex tail.
#[must_use]
pub fn unique_id() -> String {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    let mut id = format!("{:08x}{:05x}", now.as_secs(), now.subsec_micros());
    let mut rng = rand::rng();
    for _ in 0..UNIQUE_ID_RANDOM_LEN {
        let nibble: u8 = rng.random_range(0..16);
        let _ = write!(id, "{nibble:x}");
    }
    id
}

/// Extract `userId` from an email token response.
///
/// # Errors
///
/// Returns [`AccountError::Parse`] if the body is not a token.
pub fn parse_token_user_id(text: &str) -> Result<AccountId, AccountError> {
    let token: TokenResponse = serde_json::from_str(text).map_err(|e| AccountError::Parse(e.to_string()))?;
    Ok(AccountId::new(token.user_id))
}

/// Extract the first document of a document list response, if any.
///
/// # Errors
///
/// Returns [`AccountError::Parse`] if the body is not a document list.
pub fn parse_first_document(text: &str) -> Result<Option<UserDocument>, AccountError> {
    let list: DocumentList = serde_json::from_str(text).map_err(|e| AccountError::Parse(e.to_string()))?;
    Ok(list.documents.into_iter().next())
}

#[cfg(test)]
#[path = "appwrite_test.rs"]
mod tests;
