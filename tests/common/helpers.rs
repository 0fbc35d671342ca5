// Test helper functions

use keylink::core::config::Config;
use keylink::core::services::Services;
use keylink::{ResourceStore, SeedEntry};
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary directory that owns the database and history files
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("keylink.db")
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.path().join("search_history.txt")
    }
}

/// Config pointing at the temp dir, seeded with `seed`
#[allow(dead_code)]
pub fn test_config(env: &TestEnv, seed: Vec<SeedEntry>) -> Config {
    let mut config = Config::default();
    config.storage.db_path = env.db_path();
    config.history.path = env.history_path();
    config.seed = seed;
    config
}

/// Started services (reseeded) over a fresh temp dir
#[allow(dead_code)]
pub fn create_test_services(seed: Vec<SeedEntry>) -> (Services, TestEnv) {
    let env = TestEnv::new();
    let services = Services::start(test_config(&env, seed)).expect("Failed to start services");
    (services, env)
}

/// Store reset to `seed` over a fresh temp dir
#[allow(dead_code)]
pub fn create_test_store(seed: &[SeedEntry]) -> (ResourceStore, TestEnv) {
    let env = TestEnv::new();
    let store = ResourceStore::open(env.db_path()).expect("Failed to open store");
    store.reset(seed).expect("Failed to reset store");
    (store, env)
}
