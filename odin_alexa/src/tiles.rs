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

//! tile server URLs for resolved scenes. The URL is not retrieved by us, it is handed to the end client

use odin_common::geo::GeoPoint;
use crate::{TilerConfig, imagery::ImageryResult, slots::ImageSlots};

pub const VIIRS_SOURCE: &'static str = "VIIRS";
pub const LANDSAT_SOURCE: &'static str = "LANDSAT-8";

/// fixed rendering resolution of daytime tiles
pub const RESOLUTION: u32 = 2;

/// the product rendered for daytime imagery.
/// Precedence if several slots are (incorrectly) set: HighResolution > LandWater > Vegetation
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum TileProduct {
    HighResolution,
    LandWater,
    Vegetation,
    Standard,
}

impl TileProduct {
    pub fn from_slots (slots: &ImageSlots)->Self {
        if slots.high_resolution {
            TileProduct::HighResolution
        } else if slots.land_water {
            TileProduct::LandWater
        } else if slots.vegetation {
            TileProduct::Vegetation
        } else {
            TileProduct::Standard
        }
    }

    /// value of the tiler `product` query parameter
    pub fn product_param (&self)->Option<&'static str> {
        match self {
            TileProduct::LandWater => Some("water"),
            TileProduct::Vegetation => Some("ndvi"),
            TileProduct::HighResolution | TileProduct::Standard => None
        }
    }

    /// the spoken label of this product
    pub fn tile_type (&self)->Option<&'static str> {
        match self {
            TileProduct::LandWater => Some("land water analysis"),
            TileProduct::Vegetation => Some("NDVI"),
            TileProduct::HighResolution | TileProduct::Standard => None
        }
    }
}

/// night imagery takes precedence over all daytime products
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum TileSpec {
    Night,
    Day(TileProduct),
}

impl TileSpec {
    pub fn from_slots (slots: &ImageSlots)->Self {
        if slots.night { TileSpec::Night } else { TileSpec::Day( TileProduct::from_slots(slots)) }
    }

    pub fn tile_image (&self, config: &TilerConfig, pos: &GeoPoint, scene: &ImageryResult)->TileImage {
        let base_url = normalized_base_url( &config.base_url);

        match self {
            TileSpec::Night => TileImage {
                url: format!("{}viirs?point={}", base_url, pos.lat_lon_param()),
                source: VIIRS_SOURCE,
                date: config.night_date.clone(),
                tile_type: None,
            },
            TileSpec::Day(product) => {
                let product_fragment = product.product_param().map( |p| format!("&product={}", p)).unwrap_or_default();
                TileImage {
                    url: format!("{}landsat/{}?point={}{}&resolution={}", base_url, scene.product_id, pos.lon_lat_param(), product_fragment, RESOLUTION),
                    source: LANDSAT_SOURCE,
                    date: scene.date.clone(),
                    tile_type: product.tile_type(),
                }
            }
        }
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct TileImage {
    pub url: String,
    pub source: &'static str,
    pub date: String,
    pub tile_type: Option<&'static str>,
}

fn normalized_base_url (base_url: &str)->String {
    if base_url.ends_with('/') { base_url.to_string() } else { format!("{}/", base_url) }
}
