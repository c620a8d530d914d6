//! Production HTTP client for the Rundbok backend.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;

use rundbok_model::{
    BookDraft, BookListing, Course, ListingId, ProgrammeSummary, ProgrammeWithCourses,
    SearchCriteria,
};

use crate::error::{ApiError, Result};
use crate::NetworkService;

/// User agent string for backend requests.
const USER_AGENT_VALUE: &str = concat!("rundbok-desktop/", env!("CARGO_PKG_VERSION"));

/// Backend client over reqwest.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given base URL (e.g. `https://api.rundbok.se`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "fetching");

        let response = self.http.get(&url).query(query).send().await?;
        handle_response(response).await
    }

    /// Sends a draft as JSON, or as a multipart form when a cover photo is
    /// attached.
    async fn send_draft(
        &self,
        request: reqwest::RequestBuilder,
        draft: &BookDraft,
    ) -> Result<BookListing> {
        let response = match &draft.cover_photo {
            Some(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|e| ApiError::Network(format!("failed to read cover photo: {e}")))?;
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "cover".to_string());
                let book = serde_json::to_string(draft)
                    .map_err(|e| ApiError::Decode(format!("failed to encode draft: {e}")))?;

                let form = reqwest::multipart::Form::new()
                    .text("book", book)
                    .part(
                        "cover_photo",
                        reqwest::multipart::Part::bytes(bytes).file_name(file_name),
                    );
                request.multipart(form).send().await?
            }
            None => request.json(draft).send().await?,
        };

        handle_response(response).await
    }
}

#[async_trait]
impl NetworkService for ApiClient {
    async fn fetch_programmes(&self) -> Result<Vec<ProgrammeSummary>> {
        self.get_json("/programmes", &[]).await
    }

    async fn fetch_available_programmes(&self) -> Result<Vec<ProgrammeWithCourses>> {
        self.get_json("/programmes/available", &[]).await
    }

    async fn fetch_courses(&self, query: &str) -> Result<Vec<Course>> {
        self.get_json("/courses", &[("query", query.to_string())])
            .await
    }

    async fn fetch_books(&self, criteria: &SearchCriteria) -> Result<Vec<BookListing>> {
        self.get_json("/books", &criteria_params(criteria)).await
    }

    async fn add_new_book(&self, auth_token: &str, draft: &BookDraft) -> Result<BookListing> {
        let request = self.http.post(self.url("/books")).bearer_auth(auth_token);
        self.send_draft(request, draft).await
    }

    async fn edit_book(
        &self,
        auth_token: &str,
        draft: &BookDraft,
        listing: ListingId,
    ) -> Result<BookListing> {
        let request = self
            .http
            .put(self.url(&format!("/books/{listing}")))
            .bearer_auth(auth_token);
        self.send_draft(request, draft).await
    }
}

/// Query parameters for the listings endpoint.
fn criteria_params(criteria: &SearchCriteria) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(id) = criteria.programme_id {
        params.push(("programme_id", id.to_string()));
    }
    if let Some(id) = criteria.course_id {
        params.push(("course_id", id.to_string()));
    }
    if let Some(text) = &criteria.query_text {
        params.push(("query", text.clone()));
    }
    params
}

/// Checks the HTTP status and decodes the JSON body.
async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response.json().await?)
}
