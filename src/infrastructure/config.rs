use std::env;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub profile: String,
    pub seed_demo: bool,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `profile` overrides the `PROFILE` variable (set from `--profile`).
    pub fn from_env(profile: Option<String>) -> Self {
        Self::from_lookup(|key| {
            if key == "PROFILE" && profile.is_some() {
                return profile.clone();
            }
            env::var(key).ok()
        })
    }

    /// Build a configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = lookup("PROFILE").unwrap_or_else(|| "default".to_string());

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            if profile == "default" {
                "sqlite://tower_sections.db?mode=rwc".to_string()
            } else {
                format!("sqlite://tower_sections_{}.db?mode=rwc", profile)
            }
        });

        Self {
            database_url,
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            seed_demo: lookup("SEED_DEMO").is_some_and(|v| v != "false" && v != "0"),
            profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]);
        assert_eq!(config.profile, "default");
        assert_eq!(config.database_url, "sqlite://tower_sections.db?mode=rwc");
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.cors_allowed_origins.is_empty());
        assert!(!config.seed_demo);
    }

    #[test]
    fn profile_picks_its_own_database_file() {
        let config = config_from(&[("PROFILE", "staging")]);
        assert_eq!(
            config.database_url,
            "sqlite://tower_sections_staging.db?mode=rwc"
        );
    }

    #[test]
    fn explicit_values_win() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("PORT", "9100"),
            ("CORS_ALLOWED_ORIGINS", "http://a.example, http://b.example,"),
            ("SEED_DEMO", "1"),
        ]);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.port, 9100);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://a.example", "http://b.example"]
        );
        assert!(config.seed_demo);
    }

    #[test]
    fn unparsable_port_falls_back() {
        let config = config_from(&[("PORT", "eighty"), ("SEED_DEMO", "false")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(!config.seed_demo);
    }
}
