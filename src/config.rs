use std::{env, time::Duration};

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub groups_collection: String,
    pub tests_collection: String,
    pub students_collection: String,
    pub results_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub mongo_max_pool_size: u32,
    pub mongo_min_pool_size: u32,
    /// Connect and server-selection timeout
    pub mongo_timeout: Duration,
    /// Create collection indexes at startup. Needs write access.
    pub ensure_indexes: bool,
    /// Capacity of the dispatcher event queue
    pub dispatcher_queue_depth: usize,
    pub graphql_max_depth: usize,
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.parse().ok())
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "assessment-results-local".to_string()),
            groups_collection: env::var("GROUPS_COLLECTION")
                .unwrap_or_else(|_| "groups".to_string()),
            tests_collection: env::var("TESTS_COLLECTION").unwrap_or_else(|_| "tests".to_string()),
            students_collection: env::var("STUDENTS_COLLECTION")
                .unwrap_or_else(|_| "students".to_string()),
            results_collection: env::var("RESULTS_COLLECTION")
                .unwrap_or_else(|_| "results".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env_parse("WEB_SERVER_PORT").unwrap_or(8080),
            mongo_max_pool_size: env_parse("MONGO_MAX_POOL_SIZE").unwrap_or(10),
            mongo_min_pool_size: env_parse("MONGO_MIN_POOL_SIZE").unwrap_or(2),
            mongo_timeout: Duration::from_secs(env_parse("MONGO_TIMEOUT_SECS").unwrap_or(5)),
            ensure_indexes: env_parse("ENSURE_INDEXES").unwrap_or(false),
            dispatcher_queue_depth: env_parse("DISPATCHER_QUEUE_DEPTH")
                .filter(|d: &usize| *d > 0)
                .unwrap_or(64),
            graphql_max_depth: env_parse("GRAPHQL_MAX_DEPTH")
                .filter(|d: &usize| *d > 0)
                .unwrap_or(8),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "assessment-results-test".to_string(),
            groups_collection: "groups".to_string(),
            tests_collection: "tests".to_string(),
            students_collection: "students".to_string(),
            results_collection: "results".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            mongo_max_pool_size: 4,
            mongo_min_pool_size: 1,
            mongo_timeout: Duration::from_secs(1),
            ensure_indexes: false,
            dispatcher_queue_depth: 8,
            graphql_max_depth: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.mongo_conn_string.is_empty());
        assert!(!config.mongo_db_name.is_empty());
        assert!(config.dispatcher_queue_depth > 0);
        assert!(config.graphql_max_depth > 0);
        assert!(config.mongo_max_pool_size >= config.mongo_min_pool_size);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.mongo_db_name, "assessment-results-test");
        assert_eq!(config.results_collection, "results");
        assert_eq!(config.dispatcher_queue_depth, 8);
        assert!(!config.ensure_indexes);
    }
}
