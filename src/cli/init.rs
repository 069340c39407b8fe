use crate::core::AppConfig;
use crate::core::db::{async_db, initialize_db};
use anyhow::Result;

pub async fn run(config: &AppConfig) -> Result<()> {
    println!("Initializing db at {}...", config.db_path);
    let db = async_db(&config.db_path).await?;
    db.call(|conn| Ok(initialize_db(conn)?)).await?;
    println!("Finished initializing db");
    Ok(())
}
