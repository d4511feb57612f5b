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

//! forward geocoding of spoken place names

use std::time::Duration;
use async_trait::async_trait;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject};
use reqwest::Client;
use serde::{Deserialize,Serialize};
use serde_json::{Map,Value};
use tracing::debug;
use url::Url;

use odin_common::{geo::GeoPoint, net::get_json_query, strings::{env_expand, has_unexpanded_vars}};
use crate::{GeocoderConfig, errors::{Result, op_failed, geocode_failure}};

pub const PLACE_NAME: &'static str = "place_name";

/// a geocoder result feature. We keep the complete GeoJSON feature since it is passed on
/// to the session attributes
#[derive(Debug,Clone,PartialEq)]
pub struct GeocodeFeature {
    pub feature: Feature,
}

impl GeocodeFeature {
    pub fn new (place_name: &str, pos: GeoPoint)->Self {
        let geometry = Geometry::new( geojson::Value::Point( vec![pos.lon, pos.lat]));
        let mut foreign_members = JsonObject::new();
        foreign_members.insert( PLACE_NAME.to_string(), Value::String( place_name.to_string()));

        GeocodeFeature {
            feature: Feature { bbox: None, geometry: Some(geometry), id: None, properties: None, foreign_members: Some(foreign_members) }
        }
    }

    pub fn place_name (&self)->Option<&str> {
        self.feature.foreign_members.as_ref()
            .and_then( |fm| fm.get( PLACE_NAME))
            .and_then( |v| v.as_str())
    }

    /// the `[lon,lat]` point geometry of the feature
    pub fn position (&self)->Option<GeoPoint> {
        match &self.feature.geometry.as_ref()?.value {
            geojson::Value::Point(coords) => GeoPoint::from_lon_lat_slice( coords.as_slice()),
            _ => None
        }
    }

    /// turn this into the `city` session attribute, which is the feature plus a `name` alias of its place name
    pub fn to_city (&self, fallback_name: &str)->Result<City> {
        let name = self.place_name().unwrap_or( fallback_name).to_string();
        match serde_json::to_value( &self.feature)? {
            Value::Object(mut feature) => {
                feature.remove("name");
                Ok( City { name, feature } )
            }
            other => Err( op_failed( format!("feature not serialized as object: {other}")) )
        }
    }
}

/// the `city` session attribute
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct City {
    pub name: String,

    #[serde(flatten)]
    pub feature: Map<String,Value>,
}

/// abstraction of the forward geocoding service so that we can substitute it in tests
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// return the features matching `query`, best match first. An empty Vec is a valid (no match) result
    async fn geocode_forward (&self, query: &str)->Result<Vec<GeocodeFeature>>;
}

/// Mapbox places API geocoder
pub struct MapboxGeocoder {
    client: Client,
    base_url: String,
    access_token: String,
    timeout: Duration,
}

impl MapboxGeocoder {
    pub fn new (client: Client, config: &GeocoderConfig, timeout: Duration)->Result<Self> {
        let access_token = env_expand( &config.access_token);
        if access_token.is_empty() || has_unexpanded_vars( &access_token) {
            return Err( op_failed( format!("geocoder access token not set: {}", config.access_token)))
        }
        Ok( MapboxGeocoder { client, base_url: config.base_url.clone(), access_token, timeout } )
    }

    /// `<base_url>/<percent encoded query>.json`
    pub fn query_url (&self, query: &str)->Result<Url> {
        let mut url = Url::parse( &self.base_url)?;
        url.path_segments_mut()
            .map_err( |_| op_failed( format!("not a base URL: {}", self.base_url)))?
            .pop_if_empty()
            .push( &format!("{}.json", query));
        Ok(url)
    }
}

#[async_trait]
impl Geocoder for MapboxGeocoder {
    async fn geocode_forward (&self, query: &str)->Result<Vec<GeocodeFeature>> {
        let url = self.query_url( query)?;
        debug!("geocode query: {}", url);

        let params = [("access_token", self.access_token.as_str()), ("limit", "1")];
        let fc: FeatureCollection = get_json_query( &self.client, url.as_str(), &params, self.timeout).await?;
        debug!("geocode response: {} features", fc.features.len());

        Ok( fc.features.into_iter().map( |feature| GeocodeFeature{ feature }).collect() )
    }
}

/// the first feature that has a point geometry, or a `GeocodeFailure`
pub fn first_located_feature (query: &str, features: Vec<GeocodeFeature>)->Result<(GeocodeFeature,GeoPoint)> {
    if features.is_empty() {
        return Err( geocode_failure( format!("no features for {:?}", query)))
    }
    features.into_iter()
        .find_map( |f| f.position().map( |pos| (f,pos)))
        .ok_or_else( || geocode_failure( format!("no feature with point geometry for {:?}", query)))
}
