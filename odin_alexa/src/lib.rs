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

//! backend for a satellite imagery voice skill.
//!
//! Incoming platform events are routed by request type and intent name. `GetImageIntent` requests
//! run through the image pipeline, which geocodes the requested place, searches the imagery catalog
//! for a matching scene and computes the tile server URL that is handed to the end client.
//! Progress is reported to an external dashboard through a telemetry sink.

use std::{sync::Arc, time::Duration};
use chrono::NaiveDate;
use serde::{Deserialize,Serialize};
use reqwest::Client;

use odin_common::{define_load_config, datetime::deserialize_duration, net};

pub mod errors;
pub use errors::*;

pub mod event;
pub mod response;
pub mod attributes;
pub mod slots;
pub mod date;
pub mod filters;
pub mod geocoder;
pub mod imagery;
pub mod tiles;
pub mod telemetry;
pub mod pipeline;
pub mod skill;
pub mod service;

use geocoder::MapboxGeocoder;
use imagery::SatApiCatalog;
use telemetry::HttpTelemetrySink;
use skill::AlexaSkill;

define_load_config!{}

/// top level skill configuration, normally loaded from `alexa_skill.ron`
#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct AlexaSkillConfig {
    /// the only application id we accept requests from
    pub application_id: String,

    /// upper bound for each outbound call (geocode, imagery search, telemetry)
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub request_timeout: Duration,

    pub geocoder: GeocoderConfig,
    pub imagery: ImageryConfig,
    pub tiler: TilerConfig,
    pub telemetry: TelemetryConfig,
}

#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub access_token: String, // can be a ${VAR} environment reference
}

#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct ImageryConfig {
    pub base_url: String,

    // used if there is no (parseable) Date slot
    pub default_date_from: NaiveDate,
    pub default_date_to: NaiveDate,
}

#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct TilerConfig {
    pub base_url: String,
    pub night_date: String, // display date of the (static) night imagery
}

#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct TelemetryConfig {
    pub url: String,
}

fn serialize_duration<S> (dur: &Duration, s: S)->std::result::Result<S::Ok,S::Error> where S: serde::Serializer {
    s.serialize_str( &format!("{}ms", dur.as_millis()))
}

impl AlexaSkillConfig {
    pub fn check (&self)->Result<()> {
        if self.application_id.is_empty() {
            return Err( op_failed!("no application_id configured"))
        }
        if self.imagery.default_date_from > self.imagery.default_date_to {
            return Err( op_failed!("default imagery dates out of order: {} > {}", self.imagery.default_date_from, self.imagery.default_date_to))
        }
        if self.request_timeout.is_zero() {
            return Err( op_failed!("request_timeout has to be positive"))
        }
        Ok(())
    }
}

/// load a skill config through the ODIN config lookup and check it
pub fn load_skill_config (filename: &str)->Result<AlexaSkillConfig> {
    let config: AlexaSkillConfig = load_config( filename)?;
    config.check()?;
    Ok(config)
}

pub fn get_http_client (config: &AlexaSkillConfig)->Result<Client> {
    Ok( net::get_http_client( Some(config.request_timeout))? )
}

/// create a skill that uses the live geocoder, imagery catalog and telemetry endpoints
pub fn create_skill (config: AlexaSkillConfig)->Result<AlexaSkill> {
    let client = get_http_client( &config)?;
    let timeout = config.request_timeout;

    let geocoder = Arc::new( MapboxGeocoder::new( client.clone(), &config.geocoder, timeout)?);
    let catalog = Arc::new( SatApiCatalog::new( client.clone(), &config.imagery, timeout));
    let telemetry = Arc::new( HttpTelemetrySink::new( client, &config.telemetry, timeout));

    Ok( AlexaSkill::new( config, geocoder, catalog, telemetry) )
}
