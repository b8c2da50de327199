use goaltracker_storage_sqlite::db::get_db_path;

pub struct Config {
    pub db_path: String,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let db_path = std::env::var("GT_DB_PATH").unwrap_or_else(|_| get_db_path("./db/goals.db"));
        let log_format = std::env::var("GT_LOG_FORMAT").unwrap_or_else(|_| "text".into());
        Self {
            db_path,
            log_format,
        }
    }
}
