//
//  cloudflare-client
//  cli/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! API token commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::output::{write_json, TableBuilder};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct TokenCommand {
    #[command(subcommand)]
    pub command: TokenSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TokenSubcommand {
    /// Check the token in use
    Verify,

    /// List the user's tokens
    #[command(visible_alias = "ls")]
    List,

    /// Roll a token and print the new secret
    Roll(RollArgs),
}

#[derive(Args, Debug)]
pub struct RollArgs {
    /// Token ID
    pub id: String,
}

impl TokenCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let cf = global.cloudflare()?;
        let tokens = cf.user_tokens();

        match &self.command {
            TokenSubcommand::Verify => {
                let verification = tokens.verify().await?;
                global.writer().write(&verification)?;
                if !verification.is_active() {
                    bail!("Token is {}", verification.status);
                }
                Ok(())
            }
            TokenSubcommand::List => {
                let list = tokens.browse(None).await?;
                if global.json {
                    return write_json(&list);
                }
                if list.is_empty() {
                    println!("No results");
                    return Ok(());
                }
                TableBuilder::new()
                    .color(global.writer().color_enabled())
                    .headers(["ID", "Name", "Status", "Expires"])
                    .rows(list.iter().map(token_row))
                    .print();
                Ok(())
            }
            TokenSubcommand::Roll(args) => {
                let value = tokens.roll(&args.id).await?;
                println!("{}", value);
                Ok(())
            }
        }
    }
}

fn token_row(token: &Value) -> Vec<String> {
    ["id", "name", "status", "expires_on"]
        .iter()
        .map(|field| {
            token
                .get(field)
                .and_then(Value::as_str)
                .unwrap_or("-")
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_row() {
        let token = json!({"id": "t1", "name": "deploy", "status": "active"});
        assert_eq!(token_row(&token), vec!["t1", "deploy", "active", "-"]);
    }
}
