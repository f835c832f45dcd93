use std::{str::FromStr, sync::LazyLock};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub verbosity: u8,
    /// How deeply user-defined words may call each other before the call is abandoned.
    pub max_call_depth: usize,
}

impl Config {
    #[inline]
    pub fn should_log(&self, level: u8) -> bool {
        self.verbosity >= level
    }
}

impl Default for Config {
    fn default() -> Self {
        Config { verbosity: 0, max_call_depth: 1024 }
    }
}

fn parse_env_opt<T>(key: &str) -> Option<T>
where
    T: FromStr + 'static, <T as FromStr>::Err: std::fmt::Display
{
    let mut val = std::env::var(key).ok()?;
    if std::any::TypeId::of::<T>() == std::any::TypeId::of::<bool>() {
        val = val.to_lowercase();
        if val == "1" || val == "yes" {
            val = "true".to_string();
        } else if val == "0" || val == "no" {
            val = "false".to_string();
        }
    }
    match val.parse::<T>() {
        Ok(v) => Some(v),
        Err(err) => if val.is_empty() {
            None
        } else {
            panic!("Failed to parse env var {key} with value {val}: {err}");
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> T
where
    T: FromStr + 'static, <T as FromStr>::Err: std::fmt::Display
{
    parse_env_opt(key).unwrap_or(default)
}

fn create_config() -> Config {
    let defaults = Config::default();
    Config {
        verbosity: parse_env("MINFORTH_VERBOSITY", if cfg!(debug_assertions) { 1 } else { defaults.verbosity }),
        max_call_depth: parse_env("MINFORTH_MAX_CALL_DEPTH", defaults.max_call_depth),
    }
}

static CELL: LazyLock<Config> = LazyLock::new(create_config);

/// The process-wide configuration, read from `MINFORTH_*` environment variables on first use.
pub fn get_config() -> &'static Config {
    &CELL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env() {
        std::env::set_var("MINFORTH_TEST_DEPTH", "17");
        std::env::set_var("MINFORTH_TEST_FLAG", "yes");
        std::env::set_var("MINFORTH_TEST_EMPTY", "");
        assert_eq!(parse_env("MINFORTH_TEST_DEPTH", 3usize), 17);
        assert!(parse_env("MINFORTH_TEST_FLAG", false));
        assert_eq!(parse_env("MINFORTH_TEST_EMPTY", 5u8), 5);
        assert_eq!(parse_env("MINFORTH_TEST_UNSET_VARIABLE", 9u8), 9);
    }

    #[test]
    #[should_panic(expected = "MINFORTH_TEST_BAD")]
    fn test_parse_env_invalid() {
        std::env::set_var("MINFORTH_TEST_BAD", "many");
        parse_env("MINFORTH_TEST_BAD", 1u8);
    }

    #[test]
    fn test_should_log() {
        let config = Config { verbosity: 2, ..Config::default() };
        assert!(config.should_log(1));
        assert!(config.should_log(2));
        assert!(!config.should_log(3));
    }
}
