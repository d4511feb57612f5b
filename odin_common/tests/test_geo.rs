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

use odin_common::geo::GeoPoint;

// run with "cargo test test_geo -- --nocapture"

#[test]
fn test_params() {
    let p = GeoPoint::from_lon_lat_degrees( -122.67, 45.52);
    println!("p = {}", p);

    assert_eq!( p.lon_lat_param(), "-122.67,45.52");
    assert_eq!( p.lat_lon_param(), "45.52,-122.67");
    assert!( p.is_valid());
}

#[test]
fn test_from_slice() {
    assert_eq!( GeoPoint::from_lon_lat_slice( &[-122.0, 37.0, 12.0]), Some(GeoPoint::from_lon_lat_degrees(-122.0, 37.0)));
    assert_eq!( GeoPoint::from_lon_lat_slice( &[-122.0]), None);
}

#[test]
fn test_serde() {
    let p: GeoPoint = serde_json::from_str( r#"{ "longitude": -122.0, "latitude": 37.0 }"#).unwrap();
    assert_eq!( p, GeoPoint::from_lon_lat_degrees(-122.0, 37.0));

    let p: GeoPoint = serde_json::from_str( r#"{ "x": -121.5, "y": 36.0 }"#).unwrap();
    assert_eq!( p.lon, -121.5);

    let s = serde_json::to_string(&p).unwrap();
    println!("serialized GeoPoint: '{}'", s);
    assert_eq!( s, r#"{"lon":-121.5,"lat":36.0}"#);

    assert!( !GeoPoint::from_lon_lat_degrees( 200.0, 0.0).is_valid());
}
