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

//! the slots of `GetImageIntent` requests

use crate::{event::Intent, errors::{OdinAlexaError, Result}};

pub const CITY: &'static str = "City";
pub const CLOUD_PERCENTAGE: &'static str = "CloudPercentage";
pub const NO_CLOUDS: &'static str = "NoClouds";
pub const DATE: &'static str = "Date";
pub const HIGH_RESOLUTION_IMAGERY: &'static str = "HighResolutionImagery";
pub const LAND_WATER_ANALYSIS: &'static str = "LandWaterAnalysis";
pub const VEGETATION_HEALTH: &'static str = "VegetationHealth";
pub const NIGHT: &'static str = "Night";

/// typed view of the image intent slots. Flag slots (`NoClouds`, `Night` etc.) are set if they carry
/// any value
#[derive(Debug,Clone,Default,PartialEq)]
pub struct ImageSlots<'a> {
    pub city: Option<&'a str>,
    pub cloud_percentage: Option<i32>,
    pub no_clouds: bool,
    pub date: Option<&'a str>,
    pub high_resolution: bool,
    pub land_water: bool,
    pub vegetation: bool,
    pub night: bool,
}

impl<'a> ImageSlots<'a> {
    pub fn from_intent (intent: &'a Intent)->Self {
        ImageSlots {
            city: intent.slot_value( CITY),
            cloud_percentage: intent.slot_value( CLOUD_PERCENTAGE).and_then( parse_percentage),
            no_clouds: intent.has_slot_value( NO_CLOUDS),
            date: intent.slot_value( DATE),
            high_resolution: intent.has_slot_value( HIGH_RESOLUTION_IMAGERY),
            land_water: intent.has_slot_value( LAND_WATER_ANALYSIS),
            vegetation: intent.has_slot_value( VEGETATION_HEALTH),
            night: intent.has_slot_value( NIGHT),
        }
    }

    /// the place to look at. Without it there is nothing we can search for
    pub fn required_city (&self)->Result<&'a str> {
        self.city.ok_or_else( || OdinAlexaError::MissingSlot( CITY.to_string()))
    }
}

/// spoken numbers come in as digits but might have a trailing "%" or "percent".
/// Values outside of 0..=100 are treated as unparsed
fn parse_percentage (s: &str)->Option<i32> {
    let s = s.trim_end_matches( "percent").trim_end_matches('%').trim();
    s.parse::<i32>().ok().filter( |p| (0..=100).contains(p))
}
