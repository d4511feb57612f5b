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

use serde::{Deserialize,Serialize};
use crate::{geocoder::City, imagery::ImageryResult};

/// the session attributes we accumulate while resolving an image request. They are returned
/// to the platform (which echoes them in the next request of the session) and sent to the
/// progress dashboard. Unset fields are not serialized
#[derive(Serialize,Deserialize,Debug,Clone,Default,PartialEq)]
pub struct SessionAttributes {
    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub city: Option<City>,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub image: Option<ImageryResult>,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub image_source: Option<String>,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub image_date: Option<String>,

    /// spoken description of the cloud and date filters we used (e.g. "with no clouds from June 2017")
    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub image_filter: Option<String>,

    #[serde(rename="tileType", default, skip_serializing_if="odin_common::is_none")]
    pub tile_type: Option<String>,

    #[serde(rename="requestId", default, skip_serializing_if="odin_common::is_none")]
    pub request_id: Option<String>,
}

impl SessionAttributes {
    pub fn city_name (&self)->Option<&str> {
        self.city.as_ref().map( |c| c.name.as_str())
    }
}
