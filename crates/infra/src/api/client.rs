//! Task API endpoint catalogue
//!
//! One method per remote operation. Each sends through the
//! [`AuthenticatedHttpClient`] and checks the single success status the
//! endpoint documents.

use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tasks_domain::{
    ChangeEmailRequest, ChangePasswordRequest, CreateListRequest, CreateTaskRequest,
    CredentialPair, ForgotPasswordRequest, InviteRequest, ListMember, LoginRequest,
    MoveTaskRequest, Profile, RegisterRequest, ResetPasswordRequest, Task, TaskList,
    UpdateListRequest, UpdateProfileRequest, UpdateTaskRequest, VerifyEmailRequest,
};
use tracing::{debug, instrument};

use super::errors::ApiError;
use crate::http::{expect_json, expect_status, AuthenticatedHttpClient, MultipartPart, OutboundRequest};

/// Multipart field carrying an uploaded profile photo
const PHOTO_FIELD: &str = "file";

/// Typed client for the task API
#[derive(Clone)]
pub struct TasksApi {
    http: Arc<AuthenticatedHttpClient>,
}

impl TasksApi {
    pub fn new(http: Arc<AuthenticatedHttpClient>) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &AuthenticatedHttpClient {
        &self.http
    }

    async fn call_json<T: DeserializeOwned>(
        &self,
        request: OutboundRequest,
        expected: StatusCode,
    ) -> Result<T, ApiError> {
        let response = self.http.send(&request).await?;
        expect_json(response, expected).await
    }

    async fn call_status(
        &self,
        request: OutboundRequest,
        expected: StatusCode,
    ) -> Result<(), ApiError> {
        let response = self.http.send(&request).await?;
        expect_status(response, expected).await
    }

    // ------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        self.call_json(OutboundRequest::get("/profile"), StatusCode::OK).await
    }

    #[instrument(skip(self, request))]
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<Profile, ApiError> {
        self.call_json(OutboundRequest::put("/profile").json(request)?, StatusCode::OK).await
    }

    /// Upload a new profile photo as the multipart field `file`.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload_profile_photo(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<Profile, ApiError> {
        let part = MultipartPart::file(PHOTO_FIELD, file_name, mime_type, bytes);
        let request = OutboundRequest::post("/profile/photo").multipart(vec![part]);
        self.call_json(request, StatusCode::OK).await
    }

    // ------------------------------------------------------------------
    // Authentication
    // ------------------------------------------------------------------

    /// Create an account.
    ///
    /// Returns `true` when the server answers `201 Created` and `false` for
    /// any other success status.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<bool, ApiError> {
        let response = self.http.send(&OutboundRequest::post("/auth/register").json(request)?).await?;
        match expect_status(response, StatusCode::CREATED).await {
            Ok(()) => Ok(true),
            Err(ApiError::UnexpectedStatus { actual, .. }) => {
                debug!(status = %actual, "registration answered without 201");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<CredentialPair, ApiError> {
        self.call_json(OutboundRequest::post("/auth/login").json(request)?, StatusCode::OK).await
    }

    /// Exchange a refresh credential on the bare client. Nothing is stored.
    pub async fn refresh(&self, refresh_token: &str) -> Result<CredentialPair, ApiError> {
        self.http.refresh(refresh_token).await
    }

    #[instrument(skip(self, request))]
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.call_status(OutboundRequest::post("/auth/password/change").json(request)?, StatusCode::OK)
            .await
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<(), ApiError> {
        self.call_status(
            OutboundRequest::post("/auth/password/forgot").json(request)?,
            StatusCode::ACCEPTED,
        )
        .await
    }

    #[instrument(skip(self, request))]
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.call_status(OutboundRequest::post("/auth/password/reset").json(request)?, StatusCode::OK)
            .await
    }

    #[instrument(skip(self, request))]
    pub async fn change_email(&self, request: &ChangeEmailRequest) -> Result<(), ApiError> {
        self.call_status(
            OutboundRequest::post("/auth/email/change").json(request)?,
            StatusCode::ACCEPTED,
        )
        .await
    }

    #[instrument(skip(self, request))]
    pub async fn verify_email(&self, request: &VerifyEmailRequest) -> Result<(), ApiError> {
        self.call_status(OutboundRequest::post("/auth/email/verify").json(request)?, StatusCode::OK)
            .await
    }

    // ------------------------------------------------------------------
    // Lists
    // ------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn get_lists(&self) -> Result<Vec<TaskList>, ApiError> {
        self.call_json(OutboundRequest::get("/lists"), StatusCode::OK).await
    }

    #[instrument(skip(self))]
    pub async fn get_list(&self, list_id: &str) -> Result<TaskList, ApiError> {
        self.call_json(OutboundRequest::get(list_path(list_id)), StatusCode::OK).await
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_list(&self, request: &CreateListRequest) -> Result<TaskList, ApiError> {
        self.call_json(OutboundRequest::post("/lists").json(request)?, StatusCode::CREATED).await
    }

    #[instrument(skip(self, request))]
    pub async fn update_list(
        &self,
        list_id: &str,
        request: &UpdateListRequest,
    ) -> Result<TaskList, ApiError> {
        self.call_json(OutboundRequest::put(list_path(list_id)).json(request)?, StatusCode::OK).await
    }

    #[instrument(skip(self))]
    pub async fn delete_list(&self, list_id: &str) -> Result<(), ApiError> {
        self.call_status(OutboundRequest::delete(list_path(list_id)), StatusCode::NO_CONTENT).await
    }

    // ------------------------------------------------------------------
    // Membership
    // ------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn get_members(&self, list_id: &str) -> Result<Vec<ListMember>, ApiError> {
        let path = format!("{}/members", list_path(list_id));
        self.call_json(OutboundRequest::get(path), StatusCode::OK).await
    }

    #[instrument(skip(self, request))]
    pub async fn invite_member(&self, list_id: &str, request: &InviteRequest) -> Result<(), ApiError> {
        let path = format!("{}/invite", list_path(list_id));
        self.call_status(OutboundRequest::post(path).json(request)?, StatusCode::ACCEPTED).await
    }

    #[instrument(skip(self, token))]
    pub async fn accept_invite(&self, token: &str) -> Result<TaskList, ApiError> {
        let path = format!("/lists/invites/{}/accept", segment(token));
        self.call_json(OutboundRequest::post(path), StatusCode::OK).await
    }

    #[instrument(skip(self))]
    pub async fn remove_member(&self, list_id: &str, user_id: &str) -> Result<(), ApiError> {
        let path = format!("{}/members/{}", list_path(list_id), segment(user_id));
        self.call_status(OutboundRequest::delete(path), StatusCode::NO_CONTENT).await
    }

    // ------------------------------------------------------------------
    // Tasks
    // ------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn get_tasks(&self, list_id: &str) -> Result<Vec<Task>, ApiError> {
        self.call_json(OutboundRequest::get(tasks_path(list_id)), StatusCode::OK).await
    }

    #[instrument(skip(self, request))]
    pub async fn create_task(
        &self,
        list_id: &str,
        request: &CreateTaskRequest,
    ) -> Result<Task, ApiError> {
        self.call_json(OutboundRequest::post(tasks_path(list_id)).json(request)?, StatusCode::CREATED)
            .await
    }

    #[instrument(skip(self, request))]
    pub async fn update_task(
        &self,
        list_id: &str,
        task_id: &str,
        request: &UpdateTaskRequest,
    ) -> Result<Task, ApiError> {
        let request = OutboundRequest::put(task_path(list_id, task_id)).json(request)?;
        self.call_json(request, StatusCode::OK).await
    }

    #[instrument(skip(self))]
    pub async fn delete_task(&self, list_id: &str, task_id: &str) -> Result<(), ApiError> {
        self.call_status(OutboundRequest::delete(task_path(list_id, task_id)), StatusCode::NO_CONTENT)
            .await
    }

    #[instrument(skip(self, request), fields(ordinal = request.ordinal))]
    pub async fn move_task(
        &self,
        list_id: &str,
        task_id: &str,
        request: &MoveTaskRequest,
    ) -> Result<Task, ApiError> {
        let path = format!("{}/move", task_path(list_id, task_id));
        self.call_json(OutboundRequest::post(path).json(request)?, StatusCode::OK).await
    }

    /// Delete every completed task in a list.
    #[instrument(skip(self))]
    pub async fn clear_completed(&self, list_id: &str) -> Result<(), ApiError> {
        let path = format!("{}/clear-completed", tasks_path(list_id));
        self.call_status(OutboundRequest::post(path), StatusCode::OK).await
    }
}

fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn list_path(list_id: &str) -> String {
    format!("/lists/{}", segment(list_id))
}

fn tasks_path(list_id: &str) -> String {
    format!("{}/tasks", list_path(list_id))
}

fn task_path(list_id: &str, task_id: &str) -> String {
    format!("{}/{}", tasks_path(list_id), segment(task_id))
}
