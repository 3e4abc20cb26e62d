//
//  cloudflare-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod completion;
mod config;
mod dns;
mod ips;
mod token;
mod user;
mod zone;

pub use api::ApiCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use dns::DnsCommand;
pub use ips::IpsCommand;
pub use token::TokenCommand;
pub use user::UserCommand;
pub use zone::ZoneCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::Cloudflare;
use crate::config::Config;
use crate::exit_codes;
use crate::output::{OutputFormat, OutputWriter};

#[derive(Parser, Debug)]
#[command(
    name = "cf",
    version,
    about = "Work with the Cloudflare API from the command line",
    long_about = "cf is a small command-line front end for the Cloudflare v4 API.\n\n\
                  Credentials come from flags, the CLOUDFLARE_* environment variables \
                  or the config file, in that order.",
    propagate_version = true,
    after_help = "Use 'cf <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// API token
    #[arg(long, global = true, env = "CLOUDFLARE_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Account email, used with --key
    #[arg(long, global = true, env = "CLOUDFLARE_EMAIL")]
    pub email: Option<String>,

    /// Global API key or user service key
    #[arg(long, global = true, env = "CLOUDFLARE_API_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Proxy URL (http, https, socks5, socks5h)
    #[arg(long, global = true, env = "HTTPS_PROXY", hide_env_values = true)]
    pub proxy: Option<String>,
}

impl GlobalOptions {
    /// The configuration with the environment and these flags applied.
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load()?;
        config.apply_env();
        self.apply_to(&mut config);
        Ok(config)
    }

    /// Flags win over the environment and the config file.
    pub fn apply_to(&self, config: &mut Config) {
        let overrides = [
            ("auth.token", &self.token),
            ("auth.email", &self.email),
            ("auth.key", &self.key),
            ("network.proxy", &self.proxy),
        ];
        for (key, value) in overrides {
            if let Some(value) = value {
                config.set(key, value);
            }
        }
    }

    /// A facade built from [`GlobalOptions::config`].
    pub fn cloudflare(&self) -> Result<Cloudflare> {
        let config = self.config()?;
        Ok(Cloudflare::with_options(config.client_options())?)
    }

    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(OutputFormat::from_flag(self.json))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Make an authenticated API request
    Api(ApiCommand),

    /// Work with zones
    #[command(visible_alias = "zones")]
    Zone(ZoneCommand),

    /// Work with DNS records
    Dns(DnsCommand),

    /// Show Cloudflare's edge IP ranges
    Ips(IpsCommand),

    /// Show the authenticated user
    User(UserCommand),

    /// Work with API tokens
    Token(TokenCommand),

    /// Manage configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print the version
    Version,
}

/// Maps an error to the process exit code.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    let error = error.downcast_ref::<crate::Error>();
    if error.is_some_and(crate::Error::is_local) {
        return exit_codes::USAGE;
    }

    match error.and_then(crate::Error::api_error) {
        Some(e) if e.is_unauthorized() || e.is_forbidden() => exit_codes::AUTH_ERROR,
        Some(e) if e.is_not_found() => exit_codes::NOT_FOUND,
        Some(e) if e.is_rate_limited() => exit_codes::RATE_LIMIT,
        _ => exit_codes::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, ApiMessage};
    use clap::CommandFactory;
    use reqwest::StatusCode;

    fn api_error(status: StatusCode) -> anyhow::Error {
        crate::Error::from(ApiError::from_errors(
            status,
            vec![ApiMessage {
                code: 1000,
                message: "failure".to_string(),
                error_chain: Vec::new(),
            }],
        ))
        .into()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code_for(&api_error(StatusCode::FORBIDDEN)), exit_codes::AUTH_ERROR);
        assert_eq!(exit_code_for(&api_error(StatusCode::UNAUTHORIZED)), exit_codes::AUTH_ERROR);
        assert_eq!(exit_code_for(&api_error(StatusCode::NOT_FOUND)), exit_codes::NOT_FOUND);
        assert_eq!(
            exit_code_for(&api_error(StatusCode::TOO_MANY_REQUESTS)),
            exit_codes::RATE_LIMIT
        );
        assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), exit_codes::ERROR);

        let invalid: anyhow::Error = crate::Error::InvalidParameter {
            resource: "zones",
            parameter: "zone_id",
            value: ".".to_string(),
        }
        .into();
        assert_eq!(exit_code_for(&invalid), exit_codes::USAGE);
    }

    #[test]
    fn test_flags_override_config() {
        let global = GlobalOptions {
            token: Some("flag-token".to_string()),
            proxy: Some("http://proxy:8080".to_string()),
            ..Default::default()
        };
        let mut config = Config::default();
        config.set("auth.token", "file-token");
        config.set("auth.email", "user@example.com");

        global.apply_to(&mut config);
        assert_eq!(config.auth.token.as_deref(), Some("flag-token"));
        assert_eq!(config.auth.email.as_deref(), Some("user@example.com"));
        assert_eq!(config.network.proxy.as_deref(), Some("http://proxy:8080"));
    }
}
