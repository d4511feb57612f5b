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

use std::{fs::File, io::{self, Write}, path::PathBuf, sync::Arc};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use odin_alexa::{
    AlexaSkillConfig, create_skill, get_http_client, load_skill_config,
    event::read_event,
    geocoder::MapboxGeocoder,
    imagery::SatApiCatalog,
    skill::AlexaSkill,
    telemetry::NoTelemetry,
};

/// process a single platform event (JSON) and print the response envelope
#[derive(Parser,Debug)]
#[command(version, about)]
struct CliOpts {
    /// skill config file (looked up in the ODIN config dirs unless a path is given)
    #[arg(long,default_value="alexa_skill.ron")]
    config: String,

    /// do not send progress notifications
    #[arg(long)]
    no_telemetry: bool,

    /// produce formatted output
    #[arg(short,long)]
    pretty: bool,

    /// optional path where to store output
    #[arg(short,long)]
    output: Option<PathBuf>,

    /// event file to process (stdin if not set)
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main()->Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let opts = CliOpts::parse();
    let config = load_skill_config( &opts.config)?;
    let skill = if opts.no_telemetry { create_offline_skill( config)? } else { create_skill( config)? };

    let event = read_event( opts.input.as_deref())?;

    let res = skill.handle_event( &event).await;
    skill.flush().await;

    match res? {
        Some(envelope) => {
            let json = if opts.pretty { serde_json::to_string_pretty( &envelope)? } else { serde_json::to_string( &envelope)? };
            produce_output( &opts.output, json)
        }
        None => {
            eprintln!("no response payload");
            Ok(())
        }
    }
}

fn create_offline_skill (config: AlexaSkillConfig)->Result<AlexaSkill> {
    let client = get_http_client( &config)?;
    let timeout = config.request_timeout;
    let geocoder = Arc::new( MapboxGeocoder::new( client.clone(), &config.geocoder, timeout)?);
    let catalog = Arc::new( SatApiCatalog::new( client, &config.imagery, timeout));

    Ok( AlexaSkill::new( config, geocoder, catalog, Arc::new(NoTelemetry)) )
}

fn produce_output (output: &Option<PathBuf>, s: String)->Result<()> {
    if let Some(path) = output {
        let mut file = File::create(path)?;
        Ok( file.write_all( s.as_bytes())? )
    } else {
        println!("{}", s);
        Ok(())
    }
}
