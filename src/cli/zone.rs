//
//  cloudflare-client
//  cli/zone.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Zone commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde_json::{json, Map, Value};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct ZoneCommand {
    #[command(subcommand)]
    pub command: ZoneSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ZoneSubcommand {
    /// List zones
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a zone
    View(ViewArgs),

    /// Purge cached content
    Purge(PurgeArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by domain name
    #[arg(long)]
    pub name: Option<String>,

    /// Filter by status (active, pending, ...)
    #[arg(long)]
    pub status: Option<String>,

    #[arg(long, default_value = "1")]
    pub page: u32,

    #[arg(long, default_value = "50")]
    pub per_page: u32,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Zone ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct PurgeArgs {
    /// Zone ID
    pub id: String,

    /// Purge everything
    #[arg(long, conflicts_with = "file")]
    pub everything: bool,

    /// URL to purge (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub file: Vec<String>,
}

impl ListArgs {
    fn params(&self) -> Value {
        let mut params = Map::new();
        if let Some(name) = &self.name {
            params.insert("name".into(), json!(name));
        }
        if let Some(status) = &self.status {
            params.insert("status".into(), json!(status));
        }
        params.insert("page".into(), json!(self.page));
        params.insert("per_page".into(), json!(self.per_page));
        Value::Object(params)
    }
}

impl PurgeArgs {
    fn body(&self) -> Result<Value> {
        if self.everything {
            Ok(json!({"purge_everything": true}))
        } else if !self.file.is_empty() {
            Ok(json!({ "files": self.file }))
        } else {
            bail!("Nothing to purge. Pass --everything or one or more --file URLs")
        }
    }
}

impl ZoneCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ZoneSubcommand::List(args) => self.list(args, global).await,
            ZoneSubcommand::View(args) => self.view(args, global).await,
            ZoneSubcommand::Purge(args) => self.purge(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let cf = global.cloudflare()?;
        let zones = cf.zones().browse(Some(args.params())).await?;
        global.writer().write_list(&zones)
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let cf = global.cloudflare()?;
        let zone = cf.zones().read(&args.id).await?;
        global.writer().write(&zone)
    }

    async fn purge(&self, args: &PurgeArgs, global: &GlobalOptions) -> Result<()> {
        let body = args.body()?;
        let cf = global.cloudflare()?;
        let writer = global.writer();
        if args.everything && !global.json {
            writer.write_warning(&format!("Purging every cached file of zone {}", args.id));
        }
        let result = cf.zones().purge_cache(&args.id, &body).await?;

        if global.json {
            crate::output::write_json(&result)
        } else {
            writer.write_success(&format!("Purge requested for zone {}", result.id));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params() {
        let args = ListArgs {
            name: Some("example.com".to_string()),
            status: None,
            page: 2,
            per_page: 20,
        };
        assert_eq!(
            args.params(),
            json!({"name": "example.com", "page": 2, "per_page": 20})
        );
    }

    #[test]
    fn test_purge_body() {
        let everything = PurgeArgs {
            id: "z".to_string(),
            everything: true,
            file: Vec::new(),
        };
        assert_eq!(everything.body().unwrap(), json!({"purge_everything": true}));

        let files = PurgeArgs {
            id: "z".to_string(),
            everything: false,
            file: vec!["https://example.com/app.css".to_string()],
        };
        assert_eq!(
            files.body().unwrap(),
            json!({"files": ["https://example.com/app.css"]})
        );

        let nothing = PurgeArgs {
            id: "z".to_string(),
            everything: false,
            file: Vec::new(),
        };
        assert!(nothing.body().is_err());
    }
}
