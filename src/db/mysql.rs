use anyhow::{Context, bail};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{ConnectOptions, MySqlPool};
use url::Url;

const JDBC_PREFIX: &str = "jdbc:";

/// Turn a `mysql://` or `jdbc:mysql://` URL into connect options.
///
/// JDBC URLs carry credentials as `user`/`password` query parameters; those
/// move into the authority and the remaining JDBC driver parameters are
/// dropped. Cloud SQL socket-factory URLs cannot be reached this way and are
/// rejected.
pub fn connect_options(raw: &str) -> anyhow::Result<MySqlConnectOptions> {
    let raw = raw.trim();
    let is_jdbc = raw.starts_with(JDBC_PREFIX);
    let mut url = Url::parse(raw.strip_prefix(JDBC_PREFIX).unwrap_or(raw))
        .context("SQL URL is not a valid URL")?;

    if url.scheme() != "mysql" {
        bail!("unsupported SQL URL scheme '{}'", url.scheme());
    }

    if is_jdbc {
        let params: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        url.set_query(None);

        for (key, value) in params {
            match key.as_str() {
                "user" => url
                    .set_username(&value)
                    .map_err(|_| anyhow::anyhow!("SQL URL has no host"))?,
                "password" => url
                    .set_password(Some(&value))
                    .map_err(|_| anyhow::anyhow!("SQL URL has no host"))?,
                "socketFactory" | "cloudSqlInstance" => {
                    bail!("JDBC parameter '{}' is not supported", key)
                }
                other => log::warn!("Ignoring JDBC parameter '{}'", other),
            }
        }
    }

    MySqlConnectOptions::from_url(&url).context("SQL URL was rejected by the driver")
}

/// Build the relational pool without opening a connection.
///
/// Connections are established on first checkout, so an unreachable server
/// surfaces as a request error instead of a startup failure.
pub fn get_pool(options: MySqlConnectOptions, max_connections: u32) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(options)
}

/// Credential-free description of the target, for logging.
pub fn describe(options: &MySqlConnectOptions) -> String {
    format!(
        "{}@{}:{}/{}",
        options.get_username(),
        options.get_host(),
        options.get_port(),
        options.get_database().unwrap_or("")
    )
}
