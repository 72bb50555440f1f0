//! Backend endpoints consumed by the dashboard.

/// History window requested on every poll (7 days).
pub const HISTORY_HOURS: u32 = 168;

/// A GET endpoint of the Zc backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Current,
    History { hours: u32 },
    Summary,
    Recommendations { team_context: Option<&'a str> },
    Health,
}

impl Endpoint<'_> {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Current => "/api/zc/current",
            Endpoint::History { .. } => "/api/zc/history",
            Endpoint::Summary => "/api/stats/summary",
            Endpoint::Recommendations { .. } => "/api/recommendations",
            Endpoint::Health => "/api/health",
        }
    }

    /// Query parameters, unencoded.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::History { hours } => vec![("hours", hours.to_string())],
            Endpoint::Recommendations {
                team_context: Some(context),
            } => vec![("team_context", context.to_string())],
            _ => Vec::new(),
        }
    }

    /// Base plus path, without a query string. An empty base means same origin.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }

    /// Full URL with the query string percent-encoded by `encode`.
    pub fn url_with_query(&self, base: &str, encode: impl Fn(&str) -> String) -> String {
        let query = self
            .query()
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        if query.is_empty() {
            self.url(base)
        } else {
            format!("{}?{}", self.url(base), query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_url() {
        let endpoint = Endpoint::History {
            hours: HISTORY_HOURS,
        };
        assert_eq!(
            endpoint.url_with_query("", |v| v.to_string()),
            "/api/zc/history?hours=168"
        );
    }

    #[test]
    fn test_base_trailing_slash() {
        assert_eq!(
            Endpoint::Summary.url("http://localhost:8000/"),
            "http://localhost:8000/api/stats/summary"
        );
    }

    #[test]
    fn test_recommendations_without_context_has_no_query() {
        let endpoint = Endpoint::Recommendations { team_context: None };
        assert_eq!(
            endpoint.url_with_query("", |v| v.replace(' ', "%20")),
            "/api/recommendations"
        );

        let endpoint = Endpoint::Recommendations {
            team_context: Some("remote team"),
        };
        assert_eq!(
            endpoint.url_with_query("", |v| v.replace(' ', "%20")),
            "/api/recommendations?team_context=remote%20team"
        );
    }
}
