//
//  cloudflare-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Reads and writes the dotted keys of the config file
//! (`auth.token`, `network.proxy`, ...). Secrets are masked when listed.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;
use serde_json::{json, Map, Value};

use crate::auth::{mask_secret, read_token_from_stdin, validate_token};
use crate::config::{Config, CONFIG_KEYS, SECRET_KEYS};

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Unset a configuration value
    Unset(UnsetArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value. Secrets are read from stdin when omitted
    pub value: Option<String>,
}

#[derive(Args, Debug)]
pub struct UnsetArgs {
    /// Configuration key
    pub key: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::Unset(args) => self.unset(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        check_key(&args.key)?;
        let config = Config::load()?;
        let value = config.get(&args.key);

        if global.json {
            let result = json!({ "key": args.key, "value": value });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }

        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        check_key(&args.key)?;
        let secret = is_secret(&args.key);

        let value = match &args.value {
            Some(value) => value.clone(),
            None if secret => read_token_from_stdin()?,
            None => bail!("A value is required for '{}'", args.key),
        };

        if secret && !validate_token(&value) {
            bail!("Invalid value for '{}': secrets cannot be empty or contain whitespace", args.key);
        }

        let mut config = Config::load()?;
        if !config.set(&args.key, &value) {
            bail!("Invalid value for '{}': {}", args.key, value);
        }
        config.save()?;

        let shown = if secret { mask_secret(&value) } else { value };
        if global.json {
            let result = json!({ "success": true, "key": args.key, "value": shown });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{} Set {} = {}", style("✓").green(), style(&args.key).cyan(), shown);
        }

        Ok(())
    }

    fn unset(&self, args: &UnsetArgs, global: &GlobalOptions) -> Result<()> {
        check_key(&args.key)?;
        let mut config = Config::load()?;
        config.set(&args.key, "");
        config.save()?;

        if global.json {
            let result = json!({ "success": true, "key": args.key });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{} Unset {}", style("✓").green(), style(&args.key).cyan());
        }

        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let entries = display_entries(&config);

        if global.json {
            let map: Map<String, Value> = entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), json!(value)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&Value::Object(map))?);
            return Ok(());
        }

        println!();
        println!("{}", style("Configuration").bold());
        println!("{}", "-".repeat(50));
        for (key, value) in entries {
            println!("  {}: {}", style(key).cyan(), value.as_deref().unwrap_or("-"));
        }
        println!();

        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let config_path = Config::config_path()?;

        if global.json {
            let result = json!({
                "path": config_path.display().to_string(),
                "exists": config_path.exists(),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", config_path.display());
        }

        Ok(())
    }
}

fn check_key(key: &str) -> Result<()> {
    if !CONFIG_KEYS.contains(&key) {
        bail!(
            "Unknown configuration key '{}'. Valid keys: {}",
            key,
            CONFIG_KEYS.join(", ")
        );
    }
    Ok(())
}

fn is_secret(key: &str) -> bool {
    SECRET_KEYS.contains(&key)
}

/// Every known key with its value, secrets masked.
fn display_entries(config: &Config) -> Vec<(&'static str, Option<String>)> {
    CONFIG_KEYS
        .iter()
        .map(|key| {
            let value = config.get(key);
            let value = if is_secret(key) {
                value.map(|v| mask_secret(&v))
            } else {
                value
            };
            (*key, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_key() {
        assert!(check_key("auth.token").is_ok());
        assert!(check_key("network.proxy").is_ok());
        assert!(check_key("core.editor").is_err());
    }

    #[test]
    fn test_display_entries_masks_secrets() {
        let mut config = Config::default();
        config.set("auth.token", "abcdefgh1234");
        config.set("auth.email", "user@example.com");

        let entries = display_entries(&config);
        let lookup = |name: &str| {
            entries
                .iter()
                .find(|(key, _)| *key == name)
                .and_then(|(_, value)| value.clone())
        };

        assert_eq!(lookup("auth.token").as_deref(), Some("********1234"));
        assert_eq!(lookup("auth.email").as_deref(), Some("user@example.com"));
        assert_eq!(lookup("auth.key"), None);
        assert_eq!(entries.len(), CONFIG_KEYS.len());
    }
}
