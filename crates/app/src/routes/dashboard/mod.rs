mod add_issue;
mod admin_home;
mod admin_issues;
mod admin_payments;
mod assigned_issues;
mod citizen_home;
mod edit_issue;
mod index;
mod manage_staff;
mod manage_users;
mod my_issues;
mod profile;
mod staff_home;

pub use add_issue::AddIssue;
pub use admin_home::AdminHome;
pub use admin_issues::AdminIssues;
pub use admin_payments::AdminPayments;
pub use assigned_issues::AssignedIssues;
pub use citizen_home::CitizenHome;
pub use edit_issue::EditIssue;
pub use index::DashboardIndex;
pub use manage_staff::ManageStaff;
pub use manage_users::ManageUsers;
pub use my_issues::MyIssues;
pub use profile::Profile;
pub use staff_home::StaffHome;
