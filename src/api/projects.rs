//! Project Endpoints

use reqwest::Method;

use super::{ApiClient, Result};
use crate::models::Project;

impl ApiClient {
    pub async fn projects(&self) -> Result<Vec<Project>> {
        let builder = self.request(Method::GET, "/projects/");
        self.send_json(builder, "GET /projects/").await
    }
}
