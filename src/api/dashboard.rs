//! Dashboard Endpoints

use reqwest::Method;

use super::{ApiClient, DashboardFilter, Result};
use crate::models::{AgentPerformance, DashboardStats};

impl ApiClient {
    pub async fn dashboard_stats(&self, filter: &DashboardFilter) -> Result<DashboardStats> {
        let builder = self.request(Method::GET, "/dashboard/stats").query(&filter.stats_query());
        self.send_json(builder, "GET /dashboard/stats").await
    }

    pub async fn agent_performance(&self, filter: &DashboardFilter) -> Result<Vec<AgentPerformance>> {
        let builder = self
            .request(Method::GET, "/dashboard/agent-performance")
            .query(&filter.agent_query());
        self.send_json(builder, "GET /dashboard/agent-performance").await
    }

    /// CSV bytes generated by the server
    pub async fn export_agent_performance(&self, filter: &DashboardFilter) -> Result<Vec<u8>> {
        let builder = self
            .request(Method::GET, "/dashboard/agent-performance/export")
            .query(&filter.agent_query());
        self.send_bytes(builder, "GET /dashboard/agent-performance/export").await
    }
}
