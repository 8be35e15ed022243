/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - full access to every back-office resource
pub const ROLE_ADMIN: &str = "admin";

/// Manager role - manages reports, donations and summaries
pub const ROLE_MANAGER: &str = "manager";

/// Staff role - files field reports
pub const ROLE_STAFF: &str = "staff";

/// Roles allowed to work with day-to-day field reports
pub const REPORT_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_MANAGER, ROLE_STAFF];

/// Roles allowed to handle money-bearing records
pub const FINANCE_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_MANAGER];
