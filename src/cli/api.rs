//
//  cloudflare-client
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Sends one request through the shared client, with the configured
//! credentials and proxy, and prints the envelope's `result`.
//!
//! ## Examples
//!
//! ```bash
//! # Read a zone
//! cf api zones/023e105f4ecef8ad9ca31a8372d0c353
//!
//! # List A records (fields become the query string for GET)
//! cf api zones/023e105f/dns_records -F type=A -F per_page=100
//!
//! # Create a record (fields become the JSON body otherwise)
//! cf api -X POST zones/023e105f/dns_records \
//!     -F type=A -F name=www -F content=198.51.100.4 -F proxied=true
//!
//! # Download a Worker script as-is
//! cf api zones/023e105f/workers/script --raw
//! ```

use std::fs;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use reqwest::Method;
use serde_json::{Map, Value};

use crate::api::{ApiRequest, RequestOptions};
use crate::output::write_json;

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct ApiCommand {
    /// Path relative to the API base URL, e.g. `zones/<id>/dns_records`
    pub endpoint: String,

    /// HTTP method
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Typed field `key=value` (numbers, booleans, null and JSON are parsed)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// String field `key=value`
    #[arg(long, action = clap::ArgAction::Append)]
    pub raw_field: Vec<String>,

    /// Read the JSON body from a file, or `-` for stdin
    #[arg(long, short = 'i')]
    pub input: Option<String>,

    /// Print the response body as-is instead of decoding the envelope
    #[arg(long)]
    pub raw: bool,

    /// Timeout in seconds for this request
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let cf = global.cloudflare()?;
        let method = parse_method(&self.method)?;
        let params = self.build_params()?;

        let request = ApiRequest::new(method, self.endpoint.trim_start_matches('/'))
            .params(params)
            .options(RequestOptions {
                timeout: self.timeout.map(Duration::from_secs),
                ..Default::default()
            });

        if self.raw {
            let body = cf.client().execute_raw(request).await?;
            println!("{}", body);
        } else {
            let result: Value = cf.client().execute(request).await?;
            write_json(&result)?;
        }

        Ok(())
    }

    fn build_params(&self) -> Result<Option<Value>> {
        if let Some(input) = &self.input {
            let content = if input == "-" {
                let mut buffer = String::new();
                std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)
                    .context("Failed to read body from stdin")?;
                buffer
            } else {
                fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?
            };

            let value: Value = serde_json::from_str(&content).context("Body is not valid JSON")?;
            return Ok(Some(value));
        }

        if self.field.is_empty() && self.raw_field.is_empty() {
            return Ok(None);
        }

        let mut params = Map::new();
        for field in &self.field {
            let (key, value) = split_field(field)?;
            set_nested_value(&mut params, key, parse_value(value));
        }
        for field in &self.raw_field {
            let (key, value) = split_field(field)?;
            set_nested_value(&mut params, key, Value::String(value.to_string()));
        }

        Ok(Some(Value::Object(params)))
    }
}

fn parse_method(method: &str) -> Result<Method> {
    match method.to_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "PATCH" => Ok(Method::PATCH),
        "DELETE" => Ok(Method::DELETE),
        _ => bail!("Unsupported HTTP method: {}", method),
    }
}

fn split_field(field: &str) -> Result<(&str, &str)> {
    match field.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("Invalid field format: {}. Expected key=value", field),
    }
}

fn parse_value(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            if let Ok(n) = raw.parse::<i64>() {
                return Value::Number(n.into());
            }
            if let Some(n) = raw.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
                return Value::Number(n);
            }
            if raw.starts_with('[') || raw.starts_with('{') {
                if let Ok(json) = serde_json::from_str(raw) {
                    return json;
                }
            }
            Value::String(raw.to_string())
        }
    }
}

/// Inserts `value` at a dotted `key`, creating intermediate objects.
fn set_nested_value(obj: &mut Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some((first, rest)) => {
            let entry = obj
                .entry(first.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(nested) = entry {
                set_nested_value(nested, rest, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_method() {
        assert_eq!(parse_method("patch").unwrap(), Method::PATCH);
        assert!(parse_method("TRACE").is_err());
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("true"), json!(true));
        assert_eq!(parse_value("300"), json!(300));
        assert_eq!(parse_value("1.5"), json!(1.5));
        assert_eq!(parse_value("[\"a\"]"), json!(["a"]));
        assert_eq!(parse_value("{broken"), json!("{broken"));
        assert_eq!(parse_value("www"), json!("www"));
    }

    #[test]
    fn test_split_field() {
        assert_eq!(split_field("content=a=b").unwrap(), ("content", "a=b"));
        assert!(split_field("noequals").is_err());
        assert!(split_field("=value").is_err());
    }

    #[test]
    fn test_set_nested_value() {
        let mut params = Map::new();
        set_nested_value(&mut params, "account.id", json!("acc"));
        set_nested_value(&mut params, "account.name", json!("main"));
        set_nested_value(&mut params, "name", json!("example.com"));

        assert_eq!(
            Value::Object(params),
            json!({"account": {"id": "acc", "name": "main"}, "name": "example.com"})
        );
    }

    #[test]
    fn test_build_params_from_fields() {
        let command = ApiCommand {
            endpoint: "zones".to_string(),
            method: "POST".to_string(),
            field: vec!["jump_start=false".to_string()],
            raw_field: vec!["name=123".to_string()],
            input: None,
            raw: false,
            timeout: None,
        };

        assert_eq!(
            command.build_params().unwrap(),
            Some(json!({"jump_start": false, "name": "123"}))
        );
    }
}
