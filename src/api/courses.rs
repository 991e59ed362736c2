use reqwest::Client;

use super::{
    decode,
    ensure_success,
    normalize_base_url,
};
use crate::core::{
    models::CoursePayload,
    ApiError,
    Course,
};

/// Typed client for the course service.
#[derive(Clone)]
pub struct CourseApi {
    client: Client,
    base_url: String,
}

impl CourseApi {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self { client, base_url: normalize_base_url(base_url) }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list(&self) -> Result<Vec<Course>, ApiError> {
        decode(self.client.get(format!("{}/courses/", self.base_url)).send().await).await
    }

    pub async fn create(&self, payload: &CoursePayload) -> Result<Course, ApiError> {
        decode(self.client.post(format!("{}/courses/", self.base_url)).json(payload).send().await)
            .await
    }

    pub async fn update(&self, id: &str, payload: &CoursePayload) -> Result<Course, ApiError> {
        decode(
            self.client.put(format!("{}/courses/{id}", self.base_url)).json(payload).send().await,
        )
        .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        ensure_success(self.client.delete(format!("{}/courses/{id}", self.base_url)).send().await)
            .await
    }

    pub async fn health(&self) -> bool {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map(|response| response.status().is_success())
            .unwrap_or(false)
    }
}
