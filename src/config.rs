use clap::Parser;

/// Login endpoint on the storefront under test.
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Admin statistics endpoint; only an authenticated admin session gets data back.
pub const ADMIN_STATS_PATH: &str = "/api/admin/stats";

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_EMAIL: &str = "sufiyanw026@gmail.com";
const DEFAULT_PASSWORD: &str = "WasiSufiyan026";

/// Probe configuration.
///
/// Defaults point at a local dev instance and its seeded admin account, so
/// running with no arguments probes the usual setup. Override with flags or
/// environment variables to point somewhere else.
#[derive(Debug, Parser)]
#[command(
    name = "storeprobe",
    about = "Smoke-test the storefront's auth and admin API over one cookie session"
)]
pub struct ProbeConfig {
    /// Base URL of the storefront under test.
    #[arg(long, env = "STOREPROBE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Account email sent to the login endpoint.
    #[arg(long, env = "STOREPROBE_EMAIL", default_value = DEFAULT_EMAIL)]
    pub email: String,

    /// Account password sent to the login endpoint.
    #[arg(long, env = "STOREPROBE_PASSWORD", default_value = DEFAULT_PASSWORD)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_local_dev_server() {
        let config = ProbeConfig::parse_from(["storeprobe"]);
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.email, "sufiyanw026@gmail.com");
        assert_eq!(config.password, "WasiSufiyan026");
    }

    #[test]
    fn flags_override_defaults() {
        let config = ProbeConfig::parse_from([
            "storeprobe",
            "--base-url",
            "http://localhost:8080",
            "--email",
            "probe@example.com",
            "--password",
            "hunter2",
        ]);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.email, "probe@example.com");
        assert_eq!(config.password, "hunter2");
    }
}
