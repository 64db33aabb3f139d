use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("HOST must not be empty".to_string());
    }

    if cfg.database.url.trim().is_empty() {
        errors.push("DATABASE_URL must not be empty".to_string());
    }

    if cfg.database.max_connections == 0 {
        errors.push("DB_MAX_CONNS must be > 0".to_string());
    }

    if cfg.database.min_idle > cfg.database.max_connections {
        errors.push(format!(
            "DB_MIN_IDLE ({}) must be <= DB_MAX_CONNS ({})",
            cfg.database.min_idle, cfg.database.max_connections
        ));
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::config::AppConfig;

    #[test]
    fn default_config_is_valid() {
        validate(&AppConfig::default()).expect("defaults should validate");
    }

    #[test]
    fn reports_every_problem_at_once() {
        let mut cfg = AppConfig::default();
        cfg.general.host = " ".to_string();
        cfg.database.max_connections = 0;

        let err = validate(&cfg).expect_err("config should be rejected");
        let message = err.to_string();
        assert!(message.contains("HOST must not be empty"));
        assert!(message.contains("DB_MAX_CONNS must be > 0"));
        assert!(message.contains("DB_MIN_IDLE (1) must be <= DB_MAX_CONNS (0)"));
    }
}
