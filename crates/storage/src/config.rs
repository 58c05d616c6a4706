use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend_type: String,
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend_type: "memory".to_string(),
            database_url: "postgresql://localhost/user_stats".to_string(),
            max_connections: 10,
        }
    }
}
