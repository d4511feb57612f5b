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

mod common;

use chrono::NaiveDate;
use odin_common::geo::GeoPoint;
use odin_alexa::{
    OdinAlexaError,
    filters::{CloudFilter, DateFilter, DateRange, Satellite, filter_description},
    imagery::ImageryQuery,
    slots::ImageSlots,
    tiles::{TileProduct, TileSpec},
};
use common::*;

fn default_range ()->DateRange {
    DateRange::new( NaiveDate::from_ymd_opt( 2017,6,1).unwrap(), NaiveDate::from_ymd_opt( 2017,12,31).unwrap()).unwrap()
}

#[test]
fn test_slots () {
    let intent = image_intent( &[
        ("City", " Paris "), ("CloudPercentage", "40 percent"), ("NoClouds", ""), ("Date", "2016"), ("Night", "night")
    ]);
    let slots = ImageSlots::from_intent( &intent);

    assert_eq!( slots.city, Some("Paris"));
    assert_eq!( slots.cloud_percentage, Some(40));
    assert!( !slots.no_clouds); // empty values are unset
    assert_eq!( slots.date, Some("2016"));
    assert!( slots.night);
    assert!( !slots.high_resolution && !slots.land_water && !slots.vegetation);

    let intent = image_intent( &[("CloudPercentage", "a few")]);
    let slots = ImageSlots::from_intent( &intent);
    assert_eq!( slots.cloud_percentage, None);
    assert!( matches!( slots.required_city(), Err(OdinAlexaError::MissingSlot(ref name)) if name == "City"));

    let intent = image_intent( &[("CloudPercentage", "15%")]);
    assert_eq!( ImageSlots::from_intent( &intent).cloud_percentage, Some(15));

    for out_of_range in ["150", "-1", "2147483647", "99999999999"] {
        let intent = image_intent( &[("CloudPercentage", out_of_range)]);
        assert_eq!( ImageSlots::from_intent( &intent).cloud_percentage, None, "{out_of_range} should be ignored");
    }
}

#[test]
fn test_cloud_filter () {
    let slots = ImageSlots { cloud_percentage: Some(50), no_clouds: true, ..Default::default() };
    let filter = CloudFilter::from_slots( &slots);
    assert_eq!( filter, CloudFilter::Percentage(50));
    assert_eq!( filter.cloud_range(), (45,55));

    let slots = ImageSlots { no_clouds: true, ..Default::default() };
    assert_eq!( CloudFilter::from_slots( &slots), CloudFilter::NoClouds);
    assert_eq!( CloudFilter::NoClouds.cloud_range(), (0,10));

    assert_eq!( CloudFilter::from_slots( &ImageSlots::default()), CloudFilter::Unspecified);
    assert_eq!( CloudFilter::Unspecified.cloud_range(), (0,10));
    assert_eq!( CloudFilter::Unspecified.annotation(), None);

    // ranges saturate instead of overflowing
    assert_eq!( CloudFilter::Percentage(i32::MAX).cloud_range(), (i32::MAX - 5, i32::MAX));
    assert_eq!( CloudFilter::Percentage(i32::MIN).cloud_range(), (i32::MIN, i32::MIN + 5));
}

#[test]
fn test_date_filter () {
    let slots = ImageSlots { date: Some("2017-SP"), ..Default::default() };
    let filter = DateFilter::from_slots( &slots, default_range());
    assert_eq!( filter.date_range().date_from_param(), "2017-03-01");
    assert_eq!( filter.date_range().date_to_param(), "2017-05-31");
    assert_eq!( filter.annotation().as_deref(), Some("from spring 2017"));

    let filter = DateFilter::from_slots( &ImageSlots::default(), default_range());
    assert_eq!( filter, DateFilter::Default( default_range()));
    assert_eq!( filter_description( &CloudFilter::Unspecified, &filter), None);
    assert_eq!( filter_description( &CloudFilter::Percentage(20), &filter).as_deref(), Some("with 20 percent clouds"));
}

#[test]
fn test_tile_spec () {
    let slots = ImageSlots { high_resolution: true, land_water: true, vegetation: true, ..Default::default() };
    assert_eq!( TileSpec::from_slots( &slots), TileSpec::Day( TileProduct::HighResolution));
    assert_eq!( Satellite::from_slots( &slots), Satellite::Sentinel);

    let slots = ImageSlots { land_water: true, vegetation: true, ..Default::default() };
    assert_eq!( TileSpec::from_slots( &slots), TileSpec::Day( TileProduct::LandWater));

    let slots = ImageSlots { night: true, high_resolution: true, ..Default::default() };
    assert_eq!( TileSpec::from_slots( &slots), TileSpec::Night);

    assert_eq!( TileSpec::from_slots( &ImageSlots::default()), TileSpec::Day( TileProduct::Standard));
    assert_eq!( Satellite::from_slots( &ImageSlots::default()), Satellite::Landsat);
}

#[test]
fn test_tile_url () {
    let mut config = test_config().tiler;
    config.base_url = "http://tiler.test/image".to_string(); // no trailing slash
    let pos = GeoPoint::from_lon_lat_degrees( 2.35, 48.85);
    let scene = landsat_scene();

    let image = TileSpec::Day( TileProduct::Vegetation).tile_image( &config, &pos, &scene);
    assert_eq!( image.url, "http://tiler.test/image/landsat/LC08_1?point=2.35,48.85&product=ndvi&resolution=2");
    assert_eq!( image.tile_type, Some("NDVI"));
    assert_eq!( image.date, "2017-07-01");

    let image = TileSpec::Night.tile_image( &config, &pos, &scene);
    assert_eq!( image.url, "http://tiler.test/image/viirs?point=48.85,2.35");
    assert_eq!( image.source, "VIIRS");
    assert_eq!( image.tile_type, None);
}

#[test]
fn test_query_params () {
    let query = ImageryQuery::new( GeoPoint::from_lon_lat_degrees( -122.67, 45.52), (25,35), default_range(), Satellite::Landsat);
    let params = query.query_params();
    let params: Vec<(&str,&str)> = params.iter().map( |(k,v)| (*k, v.as_str())).collect();

    assert_eq!( params, vec![
        ("contains", "-122.67,45.52"),
        ("limit", "1"),
        ("cloud_from", "25"),
        ("cloud_to", "35"),
        ("date_from", "2017-06-01"),
        ("date_to", "2017-12-31"),
        ("satellite_name", "landsat"),
    ]);
}
