/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::sync::Arc;
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use odin_server::{ServerConfig, spawn_server_task};
use odin_alexa::{create_skill, load_config, load_skill_config, service::build_router};

/// serve the satellite imagery skill over HTTP
#[derive(Parser,Debug)]
#[command(version, about)]
struct CliOpts {
    /// skill config file (looked up in the ODIN config dirs unless a path is given)
    #[arg(long,default_value="alexa_skill.ron")]
    config: String,

    /// server config file (looked up in the ODIN config dirs unless a path is given)
    #[arg(long,default_value="alexa_server.ron")]
    server_config: String,

    /// route name under which the skill endpoint is served
    #[arg(long,default_value="alexa")]
    name: String,
}

#[tokio::main]
async fn main()->Result<()> {
    // note this only succeeds if there is no global subscriber set yet
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .try_init();

    let opts = CliOpts::parse();
    let skill_config = load_skill_config( &opts.config)?;
    let server_config: ServerConfig = load_config( &opts.server_config)?;

    let skill = Arc::new( create_skill( skill_config)?);
    let router = build_router( &opts.name, skill);

    info!("serving skill on {}/{}", server_config.url(), opts.name);
    spawn_server_task( &server_config, router).await??;

    Ok(())
}
