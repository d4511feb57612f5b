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

//! satellite imagery catalog search

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize,Serialize};
use serde_json::{Map,Value};
use tracing::debug;

use odin_common::{geo::GeoPoint, net::get_json_query};
use crate::{ImageryConfig, errors::Result, filters::{DateRange,Satellite}};

/// we only ever need the best match
pub const DEFAULT_LIMIT: u32 = 1;

#[derive(Debug,Clone,PartialEq)]
pub struct ImageryQuery {
    pub contains: GeoPoint,
    pub limit: u32,
    pub cloud_range: (i32,i32),
    pub date_range: DateRange,
    pub satellite: Satellite,
}

impl ImageryQuery {
    pub fn new (contains: GeoPoint, cloud_range: (i32,i32), date_range: DateRange, satellite: Satellite)->Self {
        ImageryQuery { contains, limit: DEFAULT_LIMIT, cloud_range, date_range, satellite }
    }

    /// URL query parameters in the order the catalog API documents them
    pub fn query_params (&self)->Vec<(&'static str,String)> {
        vec![
            ("contains", self.contains.lon_lat_param()),
            ("limit", self.limit.to_string()),
            ("cloud_from", self.cloud_range.0.to_string()),
            ("cloud_to", self.cloud_range.1.to_string()),
            ("date_from", self.date_range.date_from_param()),
            ("date_to", self.date_range.date_to_param()),
            ("satellite_name", self.satellite.as_str().to_string()),
        ]
    }
}

/// a catalog scene. Fields other than `product_id` and `date` are preserved but not interpreted
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct ImageryResult {
    pub product_id: String,
    pub date: String,

    #[serde(flatten)]
    pub other: Map<String,Value>,
}

impl ImageryResult {
    pub fn new (product_id: impl ToString, date: impl ToString)->Self {
        ImageryResult { product_id: product_id.to_string(), date: date.to_string(), other: Map::new() }
    }
}

#[derive(Deserialize,Debug)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<ImageryResult>,
}

/// abstraction of the imagery catalog so that we can substitute it in tests
#[async_trait]
pub trait ImageryCatalog: Send + Sync {
    /// an empty Vec means there is no matching scene
    async fn search (&self, query: &ImageryQuery)->Result<Vec<ImageryResult>>;
}

/// the sat-api catalog (`<base_url>?contains=..&limit=..&..`)
pub struct SatApiCatalog {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl SatApiCatalog {
    pub fn new (client: Client, config: &ImageryConfig, timeout: Duration)->Self {
        SatApiCatalog { client, base_url: config.base_url.clone(), timeout }
    }
}

#[async_trait]
impl ImageryCatalog for SatApiCatalog {
    async fn search (&self, query: &ImageryQuery)->Result<Vec<ImageryResult>> {
        let params = query.query_params();
        debug!("imagery query: {} {:?}", self.base_url, params);

        let response: SearchResponse = get_json_query( &self.client, &self.base_url, &params, self.timeout).await?;
        debug!("imagery response: {} results", response.results.len());

        Ok( response.results )
    }
}
