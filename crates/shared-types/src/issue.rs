use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::PersonRef;

/// Page size of the public issue browser.
pub const ISSUES_PER_PAGE: u32 = 6;
/// Upper bound used by dashboard tables that show everything at once.
pub const DASHBOARD_LIST_LIMIT: u32 = 100;
/// Number of recently resolved issues featured on the home page.
pub const FEATURED_LIMIT: u32 = 6;

/// Lifecycle state of an issue. Transitions are enforced by the remote API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    InProgress,
    Resolved,
    Closed,
    Rejected,
    #[default]
    #[serde(other)]
    Pending,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 5] = [
        IssueStatus::Pending,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
        IssueStatus::Closed,
        IssueStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Pending => "pending",
            IssueStatus::InProgress => "in-progress",
            IssueStatus::Resolved => "resolved",
            IssueStatus::Closed => "closed",
            IssueStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::Pending => "Pending",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
            IssueStatus::Closed => "Closed",
            IssueStatus::Rejected => "Rejected",
        }
    }

    /// Unknown values default to Pending.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "in-progress" | "in_progress" => IssueStatus::InProgress,
            "resolved" => IssueStatus::Resolved,
            "closed" => IssueStatus::Closed,
            "rejected" => IssueStatus::Rejected,
            _ => IssueStatus::Pending,
        }
    }

    /// Statuses a staff member may move an assigned issue into.
    pub fn staff_options() -> [IssueStatus; 3] {
        [
            IssueStatus::InProgress,
            IssueStatus::Resolved,
            IssueStatus::Closed,
        ]
    }

    pub fn is_open(&self) -> bool {
        matches!(self, IssueStatus::Pending | IssueStatus::InProgress)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    #[serde(other)]
    Normal,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Normal => "Normal",
            Priority::High => "High",
        }
    }
}

/// Issue category as offered on the report form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
pub enum Category {
    Roads,
    Water,
    Electricity,
    Garbage,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Roads,
        Category::Water,
        Category::Electricity,
        Category::Garbage,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Roads => "Roads",
            Category::Water => "Water",
            Category::Electricity => "Electricity",
            Category::Garbage => "Garbage",
            Category::Other => "Other",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .unwrap_or(Category::Other)
    }
}

/// One step in an issue's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEntry {
    pub status: IssueStatus,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "updatedBy", default)]
    pub updated_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

/// A citizen-submitted report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub status: IssueStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(rename = "upvoteCount", default)]
    pub upvote_count: i64,
    #[serde(rename = "upvotedBy", default, skip_serializing_if = "Vec::is_empty")]
    pub upvoted_by: Vec<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: PersonRef,
    #[serde(rename = "assignedTo", default)]
    pub assigned_to: Option<PersonRef>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

impl Issue {
    pub fn is_authored_by(&self, email: &str) -> bool {
        !email.is_empty() && self.author.email.eq_ignore_ascii_case(email)
    }

    /// Only the author may edit or delete, and only while the issue is pending.
    pub fn can_edit_by(&self, email: &str) -> bool {
        self.is_authored_by(email) && self.status == IssueStatus::Pending
    }

    /// High-priority issues cannot be boosted again.
    pub fn can_boost(&self) -> bool {
        self.priority != Priority::High
    }

    pub fn has_upvoted(&self, email: &str) -> bool {
        self.upvoted_by.iter().any(|e| e.eq_ignore_ascii_case(email))
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }

    pub fn timeline_newest_first(&self) -> Vec<TimelineEntry> {
        self.timeline.iter().rev().cloned().collect()
    }
}

/// Filters for `GET /issues`. Empty fields are left out of the query string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct IssueQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub status: Option<IssueStatus>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl IssueQuery {
    /// The query behind the public issue browser.
    pub fn browse(
        search: &str,
        category: Option<Category>,
        status: Option<IssueStatus>,
        page: u32,
    ) -> Self {
        Self {
            search: Some(search.trim().to_string()).filter(|s| !s.is_empty()),
            category,
            status,
            page: Some(page.max(1)),
            limit: Some(ISSUES_PER_PAGE),
            ..Default::default()
        }
    }

    /// Everything a user reported, for their dashboard table.
    pub fn authored_by(email: &str) -> Self {
        Self {
            author: Some(email.to_string()),
            limit: Some(DASHBOARD_LIST_LIMIT),
            ..Default::default()
        }
    }

    /// Everything assigned to a staff member.
    pub fn assigned_to(email: &str) -> Self {
        Self {
            assigned_to: Some(email.to_string()),
            limit: Some(DASHBOARD_LIST_LIMIT),
            ..Default::default()
        }
    }

    /// Every issue, for the admin table.
    pub fn everything() -> Self {
        Self {
            limit: Some(DASHBOARD_LIST_LIMIT),
            ..Default::default()
        }
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = self.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                pairs.push(("search", search.to_string()));
            }
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(author) = self.author.as_deref().filter(|a| !a.is_empty()) {
            pairs.push(("author", author.to_string()));
        }
        if let Some(assigned) = self.assigned_to.as_deref().filter(|a| !a.is_empty()) {
            pairs.push(("assignedTo", assigned.to_string()));
        }
        pairs
    }
}

/// One page of issues from `GET /issues`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct IssuePage {
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub total: i64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}
