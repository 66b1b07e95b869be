use chrono::NaiveDateTime;

/// One row of the `visits` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Visit {
    pub user_ip: String,          // Masked address
    pub timestamp: NaiveDateTime, // UTC, assigned by the server
}

impl Visit {
    pub fn new(user_ip: String) -> Self {
        Self {
            user_ip,
            timestamp: chrono::Utc::now().naive_utc(),
        }
    }
}
