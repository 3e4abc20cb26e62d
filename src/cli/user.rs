//
//  cloudflare-client
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authenticated user command

use anyhow::Result;
use clap::Args;

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct UserCommand {}

impl UserCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let cf = global.cloudflare()?;
        let user = cf.user().read().await?;
        global.writer().write(&user)
    }
}
