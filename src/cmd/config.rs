use clap::{Args, Subcommand};

use crate::config::AppConfig;
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the effective configuration (secrets masked).
    Show,
}

pub fn run(command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Show => run_show(),
    }
}

fn run_show() -> AppResult<()> {
    let cfg = AppConfig::load()?;
    print!("{}", describe(&cfg));
    Ok(())
}

fn describe(cfg: &AppConfig) -> String {
    let timeout = cfg
        .request_timeout
        .map(|timeout| format!("{}s", timeout.as_secs()))
        .unwrap_or_else(|| "<none>".to_string());

    format!(
        "Helpdesk base URL: {}\nHelpdesk API key: {}\nExcluded tenant: {}\nRequest timeout: {}\n",
        cfg.base_url,
        mask_secret(&cfg.api_key),
        cfg.excluded_tenant,
        timeout
    )
}

fn mask_secret(value: &Option<String>) -> String {
    match value {
        Some(token) if token.chars().count() > 6 => {
            let chars: Vec<char> = token.chars().collect();
            let prefix: String = chars[..3].iter().collect();
            let suffix: String = chars[chars.len() - 3..].iter().collect();
            format!("{prefix}***{suffix}")
        }
        Some(token) if !token.is_empty() => "***".to_string(),
        _ => "<not set>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_secrets() {
        assert_eq!(mask_secret(&Some("abcdef123456".to_string())), "abc***456");
        assert_eq!(mask_secret(&Some("short".to_string())), "***");
        assert_eq!(mask_secret(&None), "<not set>");
    }

    #[test]
    fn describes_config_without_leaking_key() {
        let cfg = AppConfig::from_lookup(|key| match key {
            "ATERA_API_KEY" => Some("abcdef123456".to_string()),
            _ => None,
        })
        .unwrap();

        let out = describe(&cfg);
        assert!(out.contains("Helpdesk API key: abc***456\n"));
        assert!(!out.contains("abcdef123456"));
        assert!(out.contains("Excluded tenant: 36\n"));
        assert!(out.contains("Request timeout: <none>\n"));
    }
}
