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
use chrono::NaiveDate;
use serde::Deserialize;
use odin_common::datetime::{deserialize_duration, last_day_of_month, month_name, spoken_date};

#[derive(Deserialize,Debug)]
struct TimeoutConfig {
    #[serde(deserialize_with="deserialize_duration")]
    timeout: Duration
}

#[test]
fn test_duration_de() {
    let config: TimeoutConfig = ron::from_str( r#"TimeoutConfig( timeout: "10s" )"#).unwrap();
    assert_eq!( config.timeout, Duration::from_secs(10));

    let config: TimeoutConfig = ron::from_str( r#"(timeout: "1500ms")"#).unwrap();
    assert_eq!( config.timeout, Duration::from_millis(1500));
}

#[test]
fn test_month_days() {
    assert_eq!( last_day_of_month( 2017, 2), NaiveDate::from_ymd_opt( 2017, 2, 28));
    assert_eq!( last_day_of_month( 2016, 2), NaiveDate::from_ymd_opt( 2016, 2, 29));
    assert_eq!( last_day_of_month( 2017, 12), NaiveDate::from_ymd_opt( 2017, 12, 31));
    assert_eq!( last_day_of_month( 2017, 13), None);

    assert_eq!( month_name(6), Some("June"));
    assert_eq!( month_name(0), None);

    let d = NaiveDate::from_ymd_opt( 2017, 7, 4).unwrap();
    assert_eq!( spoken_date(&d), "July 4 2017");
}
