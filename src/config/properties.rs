use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use java_properties::PropertiesError;

/// Key holding the relational connection URL.
pub const SQL_URL_KEY: &str = "sqlUrl";

/// Read the connection URL out of a `.properties` document.
pub fn sql_url_from<R: Read>(input: R) -> Result<Option<String>, PropertiesError> {
    let mut props = java_properties::read(input)?;
    Ok(props.remove(SQL_URL_KEY).filter(|url| !url.trim().is_empty()))
}

/// Like [`sql_url_from`], but logs and yields `None` when the file is unusable.
pub fn read_sql_url(path: &Path) -> Option<String> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::error!("no property: cannot open {}: {}", path.display(), e);
            return None;
        }
    };

    match sql_url_from(BufReader::new(file)) {
        Ok(Some(url)) => Some(url),
        Ok(None) => {
            log::error!("no {} property in {}", SQL_URL_KEY, path.display());
            None
        }
        Err(e) => {
            log::error!("no property: cannot parse {}: {}", path.display(), e);
            None
        }
    }
}
