use crate::upload::{ApplicationSubmitter, ApplyReceipt, ProfilePicture, ResumeFile};
use crate::{CliClientResult, ClientError};

use jb_core::{Application, Job, JobDraft, ProfileUpdate, Registration, User};

use async_trait::async_trait;
use log::debug;
use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// HTTP client for the job board REST API
pub struct Client {
    pub base_url: String,
    pub session_cookie: Option<String>,
    client: ReqwestClient,
}

/// Result of a successful sign-in.
pub struct LoginOutcome {
    pub user: User,
    /// `name=value` pairs from `Set-Cookie`, ready to send back as `Cookie`
    pub session_cookie: Option<String>,
}

impl std::fmt::Debug for LoginOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginOutcome")
            .field("user", &self.user)
            .field(
                "session_cookie",
                &self.session_cookie.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://127.0.0.1:5000/api")
    /// * `session_cookie` - Cookie captured at sign-in, replayed on every request
    pub fn new(base_url: &str, session_cookie: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session_cookie: session_cookie.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request carrying the session cookie, if any
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref cookie) = self.session_cookie {
            req = req.header(COOKIE, cookie);
        }

        req
    }

    /// Send a request, turning non-2xx answers into `ClientError::Api`
    async fn send(&self, req: RequestBuilder) -> CliClientResult<Response> {
        let response = req.send().await?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url().path());

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ClientError::api_error(
            status.as_u16(),
            error_message(&body, status),
        ))
    }

    /// Execute request and parse the JSON body
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> CliClientResult<T> {
        let response = self.send(req).await?;
        let text = response.text().await?;
        let body = if text.trim().is_empty() { "null" } else { text.as_str() };

        Ok(serde_json::from_str(body)?)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Create an account
    pub async fn register(&self, registration: &Registration) -> CliClientResult<Value> {
        let req = self
            .request(Method::POST, "/auth/register")
            .json(registration);
        self.execute(req).await
    }

    /// Sign in and capture the session cookie
    pub async fn login(&self, email: &str, password: &str) -> CliClientResult<LoginOutcome> {
        let req = self
            .request(Method::POST, "/auth/login")
            .json(&json!({ "email": email, "password": password }));
        let response = self.send(req).await?;

        let cookies: Vec<String> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(|value| value.split(';').next())
            .map(|pair| pair.trim().to_string())
            .filter(|pair| pair.contains('='))
            .collect();
        let session_cookie = (!cookies.is_empty()).then(|| cookies.join("; "));

        let body: Value = serde_json::from_str(&response.text().await?)?;
        let user: User = match body.get("user").cloned() {
            Some(user) => serde_json::from_value(user)?,
            None => serde_json::from_value(body)?,
        };

        Ok(LoginOutcome {
            user,
            session_cookie,
        })
    }

    /// End the server-side session
    pub async fn logout(&self) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/auth/logout").json(&json!({}));
        self.execute(req).await
    }

    // =========================================================================
    // Job Operations
    // =========================================================================

    /// List every posted job
    pub async fn list_jobs(&self) -> CliClientResult<Vec<Job>> {
        let req = self.request(Method::GET, "/jobs");
        self.execute(req).await
    }

    /// Get a job by ID
    pub async fn get_job(&self, id: &str) -> CliClientResult<Job> {
        let req = self.request(Method::GET, &format!("/jobs/{}", id));
        self.execute(req).await
    }

    /// Jobs posted by the signed-in employer
    pub async fn my_jobs(&self) -> CliClientResult<Vec<Job>> {
        let req = self.request(Method::GET, "/jobs/my-job");
        self.execute(req).await
    }

    /// Post a new job
    pub async fn create_job(&self, draft: &JobDraft) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/jobs").json(draft);
        self.execute(req).await
    }

    /// Replace a job's editable fields
    pub async fn update_job(&self, id: &str, draft: &JobDraft) -> CliClientResult<Value> {
        let req = self
            .request(Method::PUT, &format!("/jobs/{}", id))
            .json(draft);
        self.execute(req).await
    }

    /// Delete a job
    pub async fn delete_job(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/jobs/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // Application Operations
    // =========================================================================

    /// Applications submitted by the signed-in job seeker
    pub async fn my_applications(&self) -> CliClientResult<Vec<Application>> {
        let req = self.request(Method::GET, "/applications/my-applications");
        self.execute(req).await
    }

    /// Approve an application to one of your jobs
    pub async fn approve_application(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::PUT, &format!("/applications/{}/approve", id));
        self.execute(req).await
    }

    /// Reject an application to one of your jobs
    pub async fn reject_application(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::PUT, &format!("/applications/{}/reject", id));
        self.execute(req).await
    }

    /// Withdraw an application
    pub async fn delete_application(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/applications/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Public profile of any user
    pub async fn get_user(&self, id: &str) -> CliClientResult<User> {
        let req = self.request(Method::GET, &format!("/users/{}", id));
        self.execute(req).await
    }

    /// Edit the signed-in user's profile, returning the stored result
    pub async fn update_profile(&self, update: &ProfileUpdate) -> CliClientResult<User> {
        let req = self
            .request(Method::PUT, "/users/update-profile")
            .json(update);
        let envelope: UserEnvelope = self.execute(req).await?;
        Ok(envelope.user)
    }

    /// Replace the signed-in user's profile picture
    pub async fn update_profile_picture(&self, picture: &ProfilePicture) -> CliClientResult<Value> {
        let part = Part::bytes(picture.bytes.clone())
            .file_name(picture.name.clone())
            .mime_str(picture.kind.mime())?;
        let form = Form::new().part("file", part);

        let req = self
            .request(Method::PUT, "/users/profile-picture")
            .multipart(form);
        self.execute(req).await
    }

    /// Where a user's profile picture is served from
    pub fn profile_picture_url(&self, user_id: &str) -> String {
        format!("{}/users-picture/{}", self.base_url, user_id)
    }
}

#[async_trait]
impl ApplicationSubmitter for Client {
    async fn submit_application(
        &self,
        job_id: &str,
        file: &ResumeFile,
    ) -> CliClientResult<ApplyReceipt> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(file.kind.mime())?;
        let form = Form::new().part("file", part);

        let req = self
            .request(Method::POST, &format!("/applications/{}/apply", job_id))
            .multipart(form);
        let response = self.send(req).await?;
        let status = response.status().as_u16();

        let text = response.text().await?;
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|body| body.get("message").and_then(Value::as_str).map(String::from))
            .unwrap_or_default();

        Ok(ApplyReceipt { status, message })
    }
}

/// Pull the server's explanation out of an error body.
///
/// Looks at `error` (string), `error.message`, then `message`. Falls back to
/// the HTTP reason phrase.
pub(crate) fn error_message(body: &str, status: StatusCode) -> String {
    let from_body = serde_json::from_str::<Value>(body).ok().and_then(|body| {
        let from_error = match body.get("error") {
            Some(Value::String(message)) => Some(message.clone()),
            Some(error) => error
                .get("message")
                .and_then(Value::as_str)
                .map(String::from),
            None => None,
        };
        from_error.or_else(|| {
            body.get("message")
                .and_then(Value::as_str)
                .map(String::from)
        })
    });

    from_body.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    })
}
