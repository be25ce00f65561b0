use serde::{Deserialize, Serialize};

/// Platform-wide counters from `GET /stats/admin`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AdminStats {
    #[serde(rename = "totalUsers", default)]
    pub total_users: i64,
    #[serde(rename = "totalIssues", default)]
    pub total_issues: i64,
    #[serde(rename = "resolvedIssues", default)]
    pub resolved_issues: i64,
    #[serde(rename = "totalPayments", default)]
    pub total_payments: f64,
}

/// Counters over the caller's own issues from `GET /stats/citizen`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CitizenStats {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub pending: i64,
    #[serde(rename = "inProgress", default)]
    pub in_progress: i64,
    #[serde(default)]
    pub resolved: i64,
}

/// Counters over issues assigned to the caller from `GET /stats/staff`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StaffStats {
    #[serde(default)]
    pub assigned: i64,
    #[serde(default)]
    pub resolved: i64,
}

impl StaffStats {
    pub fn outstanding(&self) -> i64 {
        (self.assigned - self.resolved).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_stats_use_camel_case_wire_names() {
        let stats: AdminStats = serde_json::from_str(
            r#"{"totalUsers": 12, "totalIssues": 40, "resolvedIssues": 9, "totalPayments": 3}"#,
        )
        .unwrap();
        assert_eq!(stats.total_users, 12);
        assert_eq!(stats.resolved_issues, 9);
        assert_eq!(stats.total_payments, 3.0);
    }

    #[test]
    fn citizen_stats_missing_fields_are_zero() {
        let stats: CitizenStats = serde_json::from_str(r#"{"total": 5, "inProgress": 2}"#).unwrap();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.in_progress, 2);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.resolved, 0);
    }

    #[test]
    fn staff_outstanding_never_negative() {
        let stats = StaffStats { assigned: 3, resolved: 1 };
        assert_eq!(stats.outstanding(), 2);
        let odd = StaffStats { assigned: 1, resolved: 4 };
        assert_eq!(odd.outstanding(), 0);
    }
}
