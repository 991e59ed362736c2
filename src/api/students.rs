use reqwest::Client;

use super::{
    decode,
    ensure_success,
    normalize_base_url,
};
use crate::core::{
    models::StudentPayload,
    ApiError,
    Student,
};

/// Typed client for the student service. Each method maps 1:1 to one
/// request against the conventional resource routes.
#[derive(Clone)]
pub struct StudentApi {
    client: Client,
    base_url: String,
}

impl StudentApi {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self { client, base_url: normalize_base_url(base_url) }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list(&self) -> Result<Vec<Student>, ApiError> {
        decode(self.client.get(format!("{}/students/", self.base_url)).send().await).await
    }

    pub async fn get(&self, id: &str) -> Result<Student, ApiError> {
        decode(self.client.get(format!("{}/students/{id}", self.base_url)).send().await).await
    }

    pub async fn create(&self, payload: &StudentPayload) -> Result<Student, ApiError> {
        decode(self.client.post(format!("{}/students/", self.base_url)).json(payload).send().await)
            .await
    }

    pub async fn update(&self, id: &str, payload: &StudentPayload) -> Result<Student, ApiError> {
        decode(
            self.client
                .put(format!("{}/students/{id}", self.base_url))
                .json(payload)
                .send()
                .await,
        )
        .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        ensure_success(self.client.delete(format!("{}/students/{id}", self.base_url)).send().await)
            .await
    }

    /// Register a student for a course. Empty JSON body; the service answers
    /// with the updated student record.
    pub async fn register(&self, student_id: &str, course_id: &str) -> Result<Student, ApiError> {
        decode(
            self.client
                .post(format!("{}/students/{student_id}/register/{course_id}", self.base_url))
                .json(&serde_json::json!({}))
                .send()
                .await,
        )
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
