use dotenv::dotenv;

use crate::storage::DEFAULT_STORAGE_FILEPATH;

/// Environment variable naming the storage file.
pub const STORAGE_PATH_ENV: &str = "ADDRESSBOOK_FILE_PATH";

/// Makes variables from a `.env` file visible to `std::env`.
pub fn load_env() {
    dotenv().ok();
}

/// Picks the storage path: explicit choice (flag or environment), else the default file.
pub fn resolve_storage_path(choice: Option<String>) -> String {
    choice
        .filter(|path| !path.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_STORAGE_FILEPATH.to_string())
}
