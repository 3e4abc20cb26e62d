//
//  cloudflare-client
//  cli/ips.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Edge IP range command

use anyhow::Result;
use clap::Args;

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct IpsCommand {
    /// Only IPv4 ranges
    #[arg(long, conflicts_with = "ipv6")]
    pub ipv4: bool,

    /// Only IPv6 ranges
    #[arg(long)]
    pub ipv6: bool,
}

impl IpsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let cf = global.cloudflare()?;
        let mut ranges = cf.ips().browse().await?;

        if self.ipv4 {
            ranges.ipv6_cidrs.clear();
        }
        if self.ipv6 {
            ranges.ipv4_cidrs.clear();
        }

        global.writer().write(&ranges)
    }
}
