//
//  cloudflare-client
//  cli/dns.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! DNS record commands

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::{json, Map, Value};

use crate::output::write_json;

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct DnsCommand {
    #[command(subcommand)]
    pub command: DnsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DnsSubcommand {
    /// List records of a zone
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a record
    View(RecordArgs),

    /// Print the zone as a BIND file
    Export(ExportArgs),

    /// Delete a record
    #[command(visible_alias = "rm")]
    Delete(RecordArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Zone ID
    pub zone: String,

    /// Filter by record type (A, AAAA, CNAME, ...)
    #[arg(long = "type", short = 't')]
    pub record_type: Option<String>,

    /// Filter by record name
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, default_value = "100")]
    pub per_page: u32,
}

#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Zone ID
    pub zone: String,

    /// Record ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Zone ID
    pub zone: String,
}

impl ListArgs {
    fn params(&self) -> Value {
        let mut params = Map::new();
        if let Some(record_type) = &self.record_type {
            params.insert("type".into(), json!(record_type.to_uppercase()));
        }
        if let Some(name) = &self.name {
            params.insert("name".into(), json!(name));
        }
        params.insert("per_page".into(), json!(self.per_page));
        Value::Object(params)
    }
}

impl DnsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let cf = global.cloudflare()?;
        let records = cf.dns_records();
        let writer = global.writer();

        match &self.command {
            DnsSubcommand::List(args) => {
                let list = records.browse(&args.zone, Some(args.params())).await?;
                writer.write_list(&list)
            }
            DnsSubcommand::View(args) => {
                let record = records.read(&args.zone, &args.id).await?;
                writer.write(&record)
            }
            DnsSubcommand::Export(args) => {
                let zone_file = records.export(&args.zone).await?;
                print!("{}", zone_file);
                Ok(())
            }
            DnsSubcommand::Delete(args) => {
                let deleted = records.del(&args.zone, &args.id).await?;
                if global.json {
                    write_json(&deleted)
                } else {
                    writer.write_success(&format!("Deleted record {}", deleted.id));
                    Ok(())
                }
            }
        }
    }
}
