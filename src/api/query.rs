//! Query Builders
//!
//! Turn view filter state into query pairs. Unset and blank values are left
//! out so the API applies no filter for them.

use chrono::NaiveDate;

use crate::models::CallStatus;

/// Query parameters as (name, value) pairs, ready for `RequestBuilder::query`
pub type QueryPairs = Vec<(&'static str, String)>;

/// `YYYY-MM-DD` from a date input → start of that day, UTC
pub fn start_of_day(date: &str) -> Option<String> {
    parse_date(date).map(|d| format!("{}T00:00:00Z", d.format("%Y-%m-%d")))
}

/// `YYYY-MM-DD` from a date input → last second of that day, UTC
pub fn end_of_day(date: &str) -> Option<String> {
    parse_date(date).map(|d| format!("{}T23:59:59Z", d.format("%Y-%m-%d")))
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

fn push_text(pairs: &mut QueryPairs, name: &'static str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        pairs.push((name, value.to_string()));
    }
}

fn push_dates(pairs: &mut QueryPairs, from: &str, to: &str) {
    if let Some(start) = start_of_day(from) {
        pairs.push(("start_date", start));
    }
    if let Some(end) = end_of_day(to) {
        pairs.push(("end_date", end));
    }
}

// ========================
// Call list / export
// ========================

/// Call list filters, as edited in the Calls view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallFilter {
    pub project_id: Option<u32>,
    pub status: Option<CallStatus>,
    /// Raw `<input type=date>` values
    pub from: String,
    pub to: String,
    pub agent: String,
    /// Free-text search (filename, customer)
    pub q: String,
}

impl CallFilter {
    /// Pairs for `GET /calls/`
    pub fn list_query(&self, limit: u32) -> QueryPairs {
        let mut pairs = self.export_query();
        pairs.push(("limit", limit.to_string()));
        pairs
    }

    /// Pairs for `GET /calls/export` (no row limit)
    pub fn export_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(id) = self.project_id {
            pairs.push(("project_id", id.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        push_dates(&mut pairs, &self.from, &self.to);
        push_text(&mut pairs, "agent", &self.agent);
        push_text(&mut pairs, "q", &self.q);
        pairs
    }
}

// ========================
// Dashboard
// ========================

/// Dashboard filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardFilter {
    pub project_id: Option<u32>,
    pub from: String,
    pub to: String,
    pub agent: String,
}

impl DashboardFilter {
    /// Pairs for `GET /dashboard/stats` (the stats endpoint has no agent filter)
    pub fn stats_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(id) = self.project_id {
            pairs.push(("project_id", id.to_string()));
        }
        push_dates(&mut pairs, &self.from, &self.to);
        pairs
    }

    /// Pairs for agent performance and its CSV export
    pub fn agent_query(&self) -> QueryPairs {
        let mut pairs = self.stats_query();
        push_text(&mut pairs, "agent", &self.agent);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(pairs: &QueryPairs) -> Vec<&str> {
        pairs.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_day_bounds() {
        assert_eq!(start_of_day("2024-05-01").as_deref(), Some("2024-05-01T00:00:00Z"));
        assert_eq!(end_of_day("2024-05-31").as_deref(), Some("2024-05-31T23:59:59Z"));
        assert_eq!(start_of_day(""), None);
        assert_eq!(end_of_day("2024-02-30"), None);
        assert_eq!(start_of_day("05/01/2024"), None);
    }

    #[test]
    fn test_empty_call_filter_only_sends_limit() {
        let pairs = CallFilter::default().list_query(100);
        assert_eq!(pairs, vec![("limit", "100".to_string())]);
    }

    #[test]
    fn test_full_call_filter() {
        let filter = CallFilter {
            project_id: Some(3),
            status: Some(CallStatus::Completed),
            from: "2024-05-01".into(),
            to: "2024-05-07".into(),
            agent: " Dana ".into(),
            q: "refund".into(),
        };
        let pairs = filter.list_query(100);
        assert_eq!(
            pairs,
            vec![
                ("project_id", "3".to_string()),
                ("status", "completed".to_string()),
                ("start_date", "2024-05-01T00:00:00Z".to_string()),
                ("end_date", "2024-05-07T23:59:59Z".to_string()),
                ("agent", "Dana".to_string()),
                ("q", "refund".to_string()),
                ("limit", "100".to_string()),
            ]
        );
        assert!(!names(&filter.export_query()).contains(&"limit"));
    }

    #[test]
    fn test_blank_text_filters_are_omitted() {
        let filter = CallFilter { project_id: Some(1), agent: "   ".into(), q: String::new(), ..Default::default() };
        assert_eq!(names(&filter.export_query()), vec!["project_id"]);
    }

    #[test]
    fn test_dashboard_stats_ignore_agent() {
        let filter = DashboardFilter {
            project_id: Some(2),
            from: String::new(),
            to: "2024-06-30".into(),
            agent: "Dana".into(),
        };
        assert_eq!(names(&filter.stats_query()), vec!["project_id", "end_date"]);
        assert_eq!(names(&filter.agent_query()), vec!["project_id", "end_date", "agent"]);
    }

    #[test]
    fn test_dashboard_without_project() {
        assert!(DashboardFilter::default().agent_query().is_empty());
    }
}
