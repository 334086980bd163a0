use std::env;
use std::time::Duration;

use crate::outbox::DispatcherSettings;

/// Environment-driven settings. `DATABASE_URL` is the only required
/// variable; everything else has a default.
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub dispatcher: DispatcherSettings,
}

impl Settings {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("PORT must be a valid number");

        let defaults = DispatcherSettings::default();
        let dispatcher = DispatcherSettings {
            poll_interval: Duration::from_secs(env_u64(
                "OUTBOX_POLL_INTERVAL_SECS",
                defaults.poll_interval.as_secs(),
            )),
            batch_size: env_u64("OUTBOX_BATCH_SIZE", defaults.batch_size as u64) as i64,
            publish_timeout: Duration::from_secs(env_u64(
                "OUTBOX_PUBLISH_TIMEOUT_SECS",
                defaults.publish_timeout.as_secs(),
            )),
        };

        Self {
            database_url,
            host,
            port,
            dispatcher,
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be a valid number")),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatcher_defaults() {
        let settings = DispatcherSettings::default();
        assert_eq!(settings.poll_interval, Duration::from_secs(5));
        assert_eq!(settings.batch_size, 50);
        assert_eq!(settings.publish_timeout, Duration::from_secs(10));
    }
}
