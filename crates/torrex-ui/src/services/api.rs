//! HTTP client helpers (REST).

use crate::services::response::{ApiError, decode_body, decode_detail, decode_empty};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use torrex_api_models::{
    AdminStats, AuthResponse, BanUserRequest, CommentRequest, DeleteCommentRequest,
    DeleteTorrentRequest, DownloadResponse, LoginRequest, PeriodStats, PeriodStatsRequest,
    RegisterRequest, SearchRequest, TorrentRecord, UploadRequest, UploadResponse, UserRecord,
    UserSearchRequest, UserStatus, endpoints,
};
use web_sys::RequestCredentials;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn read(response: Response) -> Result<(u16, String), ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok((status, body))
    }

    async fn get(&self, path: &str) -> Result<(u16, String), ApiError> {
        let response = Request::get(&self.url(path))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::read(response).await
    }

    async fn post<B: Serialize>(&self, path: &str, body: Option<&B>) -> Result<(u16, String), ApiError> {
        let request = Request::post(&self.url(path)).credentials(RequestCredentials::Include);
        let request = match body {
            Some(body) => request
                .json(body)
                .map_err(|err| ApiError::Decode(err.to_string()))?,
            None => request.header("Content-Type", "application/json"),
        };
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::read(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let (status, body) = self.get(path).await?;
        decode_body(status, &body)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let (status, body) = self.post(path, Some(body)).await?;
        decode_body(status, &body)
    }

    async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let (status, body) = self.post(path, Some(body)).await?;
        decode_empty(status, &body)
    }

    pub(crate) async fn user_status(&self) -> Result<UserStatus, ApiError> {
        self.get_json(endpoints::USER_STATUS).await
    }

    pub(crate) async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(endpoints::LOGIN, request).await
    }

    pub(crate) async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<AuthResponse, ApiError> {
        self.post_json(endpoints::REGISTER, request).await
    }

    pub(crate) async fn logout(&self) -> Result<(), ApiError> {
        let (status, body) = self.post::<()>(endpoints::LOGOUT, None).await?;
        decode_empty(status, &body)
    }

    pub(crate) async fn search(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<TorrentRecord>, ApiError> {
        self.post_json(endpoints::SEARCH, request).await
    }

    pub(crate) async fn upload(&self, request: &UploadRequest) -> Result<UploadResponse, ApiError> {
        self.post_json(endpoints::UPLOAD, request).await
    }

    pub(crate) async fn torrent_detail(&self, id: &str) -> Result<TorrentRecord, ApiError> {
        let (status, body) = self.get(&endpoints::torrent_detail(id)).await?;
        decode_detail(status, &body)
    }

    pub(crate) async fn download(&self, id: &str) -> Result<DownloadResponse, ApiError> {
        self.get_json(&endpoints::torrent_download(id)).await
    }

    pub(crate) async fn add_comment(&self, request: &CommentRequest) -> Result<(), ApiError> {
        self.post_unit(endpoints::COMMENT, request).await
    }

    pub(crate) async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.get_json(endpoints::ADMIN_STATS).await
    }

    pub(crate) async fn period_stats(
        &self,
        request: &PeriodStatsRequest,
    ) -> Result<PeriodStats, ApiError> {
        self.post_json(endpoints::ADMIN_PERIOD_STATS, request).await
    }

    pub(crate) async fn search_users(
        &self,
        request: &UserSearchRequest,
    ) -> Result<Vec<UserRecord>, ApiError> {
        self.post_json(endpoints::ADMIN_SEARCH_USERS, request).await
    }

    pub(crate) async fn ban_user(&self, user_id: &str) -> Result<(), ApiError> {
        let body = BanUserRequest {
            user_id: user_id.to_string(),
        };
        self.post_unit(endpoints::ADMIN_BAN_USER, &body).await
    }

    pub(crate) async fn delete_torrent(&self, torrent_id: &str) -> Result<(), ApiError> {
        let body = DeleteTorrentRequest {
            torrent_id: torrent_id.to_string(),
        };
        self.post_unit(endpoints::ADMIN_DELETE_TORRENT, &body).await
    }

    pub(crate) async fn delete_comment(&self, comment_id: &str) -> Result<(), ApiError> {
        let body = DeleteCommentRequest {
            comment_id: comment_id.to_string(),
        };
        self.post_unit(endpoints::ADMIN_DELETE_COMMENT, &body).await
    }
}
