//! Settings read from the environment

/// Runtime settings for the question engine
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// SQLite file used when the caller does not pass one
    pub database_path: String,
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: "metar_practice.sqlite3".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Read `METAR_DB_PATH` and `METAR_LOG`, keeping defaults for unset ones
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        Self {
            database_path: lookup("METAR_DB_PATH")
                .filter(|v| !v.is_empty())
                .unwrap_or(default.database_path),
            log_filter: lookup("METAR_LOG")
                .filter(|v| !v.is_empty())
                .unwrap_or(default.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Config::from_vars(|_| None), Config::default());
    }

    #[test]
    fn each_variable_overrides_its_field() {
        let config = Config::from_vars(|name| match name {
            "METAR_DB_PATH" => Some("/tmp/quiz.sqlite3".to_string()),
            _ => None,
        });
        assert_eq!(config.database_path, "/tmp/quiz.sqlite3");
        assert_eq!(config.log_filter, "info");

        let config = Config::from_vars(|name| match name {
            "METAR_LOG" => Some("metar_quiz_core=debug".to_string()),
            "METAR_DB_PATH" => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.database_path, "metar_practice.sqlite3");
        assert_eq!(config.log_filter, "metar_quiz_core=debug");
    }
}
