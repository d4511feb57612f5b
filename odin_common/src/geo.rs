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

use std::fmt;
use serde::{Serialize,Deserialize};

/// a simple WGS84 position in degrees
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq)]
pub struct GeoPoint {
    #[serde(alias="longitude",alias="x")]
    pub lon: f64,
    #[serde(alias="latitude",alias="y")]
    pub lat: f64,
}

impl GeoPoint {
    pub fn from_lon_lat_degrees (lon: f64, lat: f64)->Self {
        GeoPoint { lon, lat }
    }

    /// GeoJSON order `[lon,lat]`. Returns None for less than 2 elements
    pub fn from_lon_lat_slice (coords: &[f64])->Option<Self> {
        if coords.len() >= 2 { Some( GeoPoint{ lon: coords[0], lat: coords[1] }) } else { None }
    }

    pub fn is_valid (&self)->bool {
        self.lon.is_finite() && self.lat.is_finite() && self.lat.abs() <= 90.0 && self.lon.abs() <= 180.0
    }

    /// "lon,lat" as used in URL query parameters
    pub fn lon_lat_param (&self)->String { format!("{},{}", self.lon, self.lat) }

    /// "lat,lon" as used in URL query parameters
    pub fn lat_lon_param (&self)->String { format!("{},{}", self.lat, self.lon) }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}°,{}°)", self.lon, self.lat)
    }
}
