use mongodb::{Client, Database, bson::doc};

/// Connect to MongoDB and select the application database.
pub async fn get_database(uri: &str, name: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    Ok(client.database(name))
}

/// Round-trip a ping to the server.
pub async fn ping(db: &Database) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
