//! Load shape configuration

use serde::Deserialize;

/// How many records are sent and by how many workers
///
/// Every worker sends the same `count`, so a run sends
/// `workers * count` records.
///
/// # Example
///
/// ```toml
/// [load]
/// workers = 8
/// count = 100000
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Concurrent connections
    /// Default: 1
    pub workers: usize,

    /// Records per worker
    /// Default: 1
    pub count: u64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            workers: 1,
            count: 1,
        }
    }
}

impl LoadConfig {
    /// Records the whole run sends
    pub fn total(&self) -> u64 {
        self.count.saturating_mul(self.workers as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let load = LoadConfig::default();
        assert_eq!(load.workers, 1);
        assert_eq!(load.count, 1);
        assert_eq!(load.total(), 1);
    }

    #[test]
    fn test_total() {
        let load: LoadConfig = toml::from_str("workers = 4\ncount = 10").unwrap();
        assert_eq!(load.total(), 40);
    }
}
