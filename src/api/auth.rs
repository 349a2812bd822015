//! Auth Endpoints

use reqwest::Method;
use serde::Serialize;

use super::{ApiClient, Result};
use crate::models::TokenResponse;

#[derive(Serialize)]
struct LoginForm<'a> {
    username: &'a str,
    password: &'a str,
    grant_type: &'a str,
}

impl ApiClient {
    /// OAuth2 password grant; returns the access token
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let form = LoginForm { username, password, grant_type: "password" };
        let builder = self.request(Method::POST, "/auth/login").form(&form);
        let token: TokenResponse = self.send_json(builder, "POST /auth/login").await?;
        Ok(token.access_token)
    }
}
