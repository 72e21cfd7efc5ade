//! The fixed seed roster.

use chrono::NaiveDate;
use entities::{ManagedUser, User, UserRole, UserStatus};

/// Builds the roster every deployment starts from.
pub(crate) fn seed_roster() -> Vec<ManagedUser> {
    vec![
        entry("1", "admin@demo.com", "Admin User", UserRole::Admin, UserStatus::Active, (2024, 1, 1), Some((2024, 12, 25))),
        entry("2", "manager@demo.com", "Sarah Johnson", UserRole::Manager, UserStatus::Active, (2024, 1, 15), Some((2024, 12, 24))),
        entry("3", "user@demo.com", "Michael Chen", UserRole::User, UserStatus::Active, (2024, 2, 1), Some((2024, 12, 23))),
        entry("4", "emily.davis@demo.com", "Emily Davis", UserRole::User, UserStatus::Pending, (2024, 11, 20), None),
        entry("5", "james.wilson@demo.com", "James Wilson", UserRole::Manager, UserStatus::Inactive, (2024, 3, 10), Some((2024, 10, 15))),
        entry("6", "olivia.brown@demo.com", "Olivia Brown", UserRole::User, UserStatus::Active, (2024, 5, 22), Some((2024, 12, 20))),
        entry("7", "daniel.garcia@demo.com", "Daniel Garcia", UserRole::User, UserStatus::Active, (2024, 6, 15), Some((2024, 12, 22))),
        entry("8", "sophia.martinez@demo.com", "Sophia Martinez", UserRole::Manager, UserStatus::Active, (2024, 4, 8), Some((2024, 12, 24))),
    ]
}

fn entry(
    id: &str,
    email: &str,
    name: &str,
    role: UserRole,
    status: UserStatus,
    created: (i32, u32, u32),
    last_login: Option<(i32, u32, u32)>,
) -> ManagedUser {
    ManagedUser {
        user: User {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role,
            avatar: None,
            created_at: date(created),
        },
        status,
        last_login: last_login.map(date),
    }
}

fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
