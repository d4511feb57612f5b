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

use std::time::Duration;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize,Deserializer};
use parse_duration::parse;

/// deserialize durations from human readable strings such as "10s" or "1min 30s"
pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

/// last day of given month, or None if year/month are out of range
pub fn last_day_of_month (year: i32, month: u32)->Option<NaiveDate> {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt( ny, nm, 1).and_then( |d| d.pred_opt())
}

/// full english month name for 1-based month numbers
pub fn month_name (month: u32)->Option<&'static str> {
    const NAMES: [&'static str;12] = [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December"
    ];
    if month >= 1 && month <= 12 { Some(NAMES[(month - 1) as usize]) } else { None }
}

/// "June 15 2017" style spoken date
pub fn spoken_date (date: &NaiveDate)->String {
    format!("{} {} {}", month_name( date.month()).unwrap_or_default(), date.day(), date.year())
}
