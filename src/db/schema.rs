//! Relational schema kept as data so stores and tests share one definition.

pub struct Column {
    pub name: &'static str,
    pub definition: &'static str,
}

pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl TableSchema {
    pub fn create_if_absent_sql(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(|c| format!("{} {}", c.name, c.definition))
            .collect::<Vec<_>>()
            .join(", ");

        format!("CREATE TABLE IF NOT EXISTS {} ( {} )", self.name, columns)
    }
}

pub const VISITS: TableSchema = TableSchema {
    name: "visits",
    columns: &[
        Column {
            name: "visit_id",
            definition: "SERIAL PRIMARY KEY",
        },
        Column {
            name: "user_ip",
            definition: "VARCHAR(46) NOT NULL",
        },
        Column {
            name: "timestamp",
            definition: "DATETIME NOT NULL",
        },
    ],
};

/// Widest masked address the `user_ip` column accepts.
pub const USER_IP_MAX_LEN: usize = 46;

pub const INSERT_VISIT_SQL: &str = "INSERT INTO visits (user_ip, timestamp) VALUES (?, ?)";

pub const RECENT_VISITS_SQL: &str =
    "SELECT user_ip, timestamp FROM visits ORDER BY timestamp DESC, visit_id DESC LIMIT ?";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_table_sql() {
        assert_eq!(
            VISITS.create_if_absent_sql(),
            "CREATE TABLE IF NOT EXISTS visits ( visit_id SERIAL PRIMARY KEY, \
             user_ip VARCHAR(46) NOT NULL, timestamp DATETIME NOT NULL )"
        );
    }
}
