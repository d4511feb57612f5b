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

//! the search filters we derive from image intent slots. Each filter is an explicit variant type
//! whose constructor encodes the slot precedence

use std::fmt;
use chrono::NaiveDate;

use crate::{date::{parse_date, ParsedDate}, slots::ImageSlots};

/// cloud range used if no cloud percentage was requested
pub const DEFAULT_CLOUD_RANGE: (i32,i32) = (0,10);

/// half width of the cloud range around a requested percentage
pub const CLOUD_MARGIN: i32 = 5;

/// precedence: `CloudPercentage` > `NoClouds` > default
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum CloudFilter {
    Percentage(i32),
    NoClouds,
    Unspecified,
}

impl CloudFilter {
    pub fn from_slots (slots: &ImageSlots)->Self {
        if let Some(percentage) = slots.cloud_percentage {
            CloudFilter::Percentage(percentage)
        } else if slots.no_clouds {
            CloudFilter::NoClouds
        } else {
            CloudFilter::Unspecified
        }
    }

    /// inclusive (cloud_from, cloud_to) percentages
    pub fn cloud_range (&self)->(i32,i32) {
        match self {
            CloudFilter::Percentage(p) => (p.saturating_sub( CLOUD_MARGIN), p.saturating_add( CLOUD_MARGIN)),
            CloudFilter::NoClouds | CloudFilter::Unspecified => DEFAULT_CLOUD_RANGE,
        }
    }

    pub fn annotation (&self)->Option<String> {
        match self {
            CloudFilter::Percentage(p) => Some( format!("with {} percent clouds", p)),
            CloudFilter::NoClouds => Some( "with no clouds".to_string()),
            CloudFilter::Unspecified => None
        }
    }
}

/// inclusive range of acquisition dates
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new (from: NaiveDate, to: NaiveDate)->Option<Self> {
        if from <= to { Some( DateRange{ from, to }) } else { None }
    }

    pub fn date_from_param (&self)->String { self.from.format("%Y-%m-%d").to_string() }
    pub fn date_to_param (&self)->String { self.to.format("%Y-%m-%d").to_string() }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.date_from_param(), self.date_to_param())
    }
}

/// a `Date` slot that can be normalized overrides the configured default range
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum DateFilter {
    Requested(ParsedDate, DateRange),
    Default(DateRange),
}

impl DateFilter {
    pub fn from_slots (slots: &ImageSlots, default_range: DateRange)->Self {
        slots.date
            .and_then( parse_date)
            .and_then( |date| date.date_range().map( |range| DateFilter::Requested( date, range)))
            .unwrap_or( DateFilter::Default( default_range))
    }

    pub fn date_range (&self)->DateRange {
        match self {
            DateFilter::Requested(_,range) => *range,
            DateFilter::Default(range) => *range,
        }
    }

    pub fn annotation (&self)->Option<String> {
        match self {
            DateFilter::Requested(date,_) => Some( format!("from {}", date.description())),
            DateFilter::Default(_) => None
        }
    }
}

/// we only use sentinel for high resolution imagery
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Satellite {
    Landsat,
    Sentinel,
}

impl Satellite {
    pub fn from_slots (slots: &ImageSlots)->Self {
        if slots.high_resolution { Satellite::Sentinel } else { Satellite::Landsat }
    }

    pub fn as_str (&self)->&'static str {
        match self {
            Satellite::Landsat => "landsat",
            Satellite::Sentinel => "sentinel",
        }
    }
}

impl fmt::Display for Satellite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// the joined filter annotations, or None if no filter was explicitly requested
pub fn filter_description (clouds: &CloudFilter, dates: &DateFilter)->Option<String> {
    let parts: Vec<String> = [clouds.annotation(), dates.annotation()].into_iter().flatten().collect();
    if parts.is_empty() { None } else { Some( parts.join(" ")) }
}
