//
//  cloudflare-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Unicode tables built with `comfy_table`, and the table and detail views of
//! the typed API models.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cloudflare_client::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["ID", "Name", "Status"])
//!     .row(["023e105f", "example.com", "active"])
//!     .print();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use super::{print_field, print_header, TableOutput, TableRow};
use crate::api::resources::{DnsRecord, IpRanges, TokenVerification, UserDetails, Zone};

pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub struct TableBuilder {
    table: Table,
    headers: Vec<String>,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            headers: Vec::new(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let header_cells: Vec<Cell> = self
                .headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect();
            self.table.set_header(header_cells);
        } else {
            self.table.set_header(&self.headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            let row: Vec<String> = row.into_iter().map(|s| s.into()).collect();
            self.table.add_row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors a zone, record or token status.
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    use console::style;
    match status.to_lowercase().as_str() {
        "active" => style(status).green().to_string(),
        "pending" | "initializing" => style(status).yellow().to_string(),
        "moved" | "deleted" | "deactivated" | "disabled" | "expired" => {
            style(status).red().to_string()
        }
        _ => status.to_string(),
    }
}

pub fn format_bool(value: bool, color: bool) -> String {
    if color {
        use console::style;
        if value {
            style("Yes").green().to_string()
        } else {
            style("No").dim().to_string()
        }
    } else if value {
        "Yes".to_string()
    } else {
        "No".to_string()
    }
}

/// Shortens `s` to at most `max_len` characters, ending in `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max_len).collect()
    }
}

fn ttl_label(ttl: Option<u32>) -> String {
    match ttl {
        Some(1) => "Auto".to_string(),
        Some(ttl) => ttl.to_string(),
        None => "-".to_string(),
    }
}

impl TableRow for Zone {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Status", "Paused", "Type"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            format_status(self.status.as_deref().unwrap_or("-"), color),
            format_bool(self.paused, color),
            self.zone_type.clone().unwrap_or_else(|| "-".to_string()),
        ]
    }
}

impl TableOutput for Zone {
    fn print_table(&self, color: bool) {
        print_header(&self.name);
        print_field("ID", &self.id, color);
        print_field(
            "Status",
            &format_status(self.status.as_deref().unwrap_or("-"), color),
            color,
        );
        print_field("Paused", &format_bool(self.paused, color), color);
        if let Some(zone_type) = &self.zone_type {
            print_field("Type", zone_type, color);
        }
        if !self.name_servers.is_empty() {
            print_field("Name servers", &self.name_servers.join(", "), color);
        }
        if let Some(created) = &self.created_on {
            print_field("Created", &created.format("%Y-%m-%d %H:%M UTC").to_string(), color);
        }
        if let Some(activated) = &self.activated_on {
            print_field(
                "Activated",
                &activated.format("%Y-%m-%d %H:%M UTC").to_string(),
                color,
            );
        }
    }
}

impl TableRow for DnsRecord {
    fn headers() -> &'static [&'static str] {
        &["ID", "Type", "Name", "Content", "TTL", "Proxied"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            self.record_type.clone(),
            self.name.clone(),
            truncate(&self.content, 48),
            ttl_label(self.ttl),
            format_bool(self.proxied, color),
        ]
    }
}

impl TableOutput for DnsRecord {
    fn print_table(&self, color: bool) {
        print_header(&format!("{} {}", self.record_type, self.name));
        print_field("ID", &self.id, color);
        print_field("Content", &self.content, color);
        print_field("TTL", &ttl_label(self.ttl), color);
        print_field("Proxied", &format_bool(self.proxied, color), color);
        if let Some(priority) = self.priority {
            print_field("Priority", &priority.to_string(), color);
        }
        if let Some(comment) = &self.comment {
            print_field("Comment", comment, color);
        }
        if let Some(modified) = &self.modified_on {
            print_field(
                "Modified",
                &modified.format("%Y-%m-%d %H:%M UTC").to_string(),
                color,
            );
        }
    }
}

impl TableOutput for IpRanges {
    fn print_table(&self, _color: bool) {
        TableBuilder::new()
            .headers(["Family", "CIDR"])
            .rows(self.ipv4_cidrs.iter().map(|cidr| ["IPv4".to_string(), cidr.clone()]))
            .rows(self.ipv6_cidrs.iter().map(|cidr| ["IPv6".to_string(), cidr.clone()]))
            .print();
    }
}

impl TableOutput for UserDetails {
    fn print_table(&self, color: bool) {
        print_header(self.email.as_deref().unwrap_or(&self.id));
        print_field("ID", &self.id, color);
        if let Some(name) = self.full_name() {
            print_field("Name", &name, color);
        }
        if let Some(username) = &self.username {
            print_field("Username", username, color);
        }
        print_field(
            "Two-factor auth",
            &format_bool(self.two_factor_authentication_enabled, color),
            color,
        );
        if self.suspended {
            print_field("Suspended", &format_bool(true, color), color);
        }
    }
}

impl TableOutput for TokenVerification {
    fn print_table(&self, color: bool) {
        print_field("Token", &self.id, color);
        print_field("Status", &format_status(&self.status, color), color);
        if let Some(expires) = &self.expires_on {
            print_field("Expires", &expires.to_rfc3339(), color);
        }
    }
}
