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

// shared fakes and fixtures for the odin_alexa tests
#![allow(unused)]

use std::{sync::{Arc,Mutex}, time::Duration};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{json, Map, Value};

use odin_common::geo::GeoPoint;
use odin_alexa::{
    AlexaSkillConfig, GeocoderConfig, ImageryConfig, TilerConfig, TelemetryConfig,
    errors::{Result, op_failed},
    event::{IncomingEvent, Intent},
    geocoder::{GeocodeFeature, Geocoder},
    imagery::{ImageryCatalog, ImageryQuery, ImageryResult},
    skill::AlexaSkill,
    telemetry::{TelemetryEvent, TelemetrySink},
};

pub const APP_ID: &'static str = "amzn1.ask.skill.test-0001";
pub const TILER_URL: &'static str = "http://tiler.test/image/";

pub fn test_config ()->AlexaSkillConfig {
    AlexaSkillConfig {
        application_id: APP_ID.to_string(),
        request_timeout: Duration::from_secs(2),
        geocoder: GeocoderConfig { base_url: "http://geocoder.test/places".to_string(), access_token: "pk.test".to_string() },
        imagery: ImageryConfig {
            base_url: "http://catalog.test/satellites/".to_string(),
            default_date_from: NaiveDate::from_ymd_opt( 2017, 6, 1).unwrap(),
            default_date_to: NaiveDate::from_ymd_opt( 2017, 12, 31).unwrap(),
        },
        tiler: TilerConfig { base_url: TILER_URL.to_string(), night_date: "November, 2017".to_string() },
        telemetry: TelemetryConfig { url: "http://dashboard.test/progress".to_string() },
    }
}

//--- geocoder

pub struct FakeGeocoder {
    pub features: Vec<GeocodeFeature>,
    pub fail: bool,
    pub queries: Mutex<Vec<String>>,
}

impl FakeGeocoder {
    pub fn with_features (features: Vec<GeocodeFeature>)->Arc<Self> {
        Arc::new( FakeGeocoder { features, fail: false, queries: Mutex::new(Vec::new()) })
    }

    pub fn failing ()->Arc<Self> {
        Arc::new( FakeGeocoder { features: Vec::new(), fail: true, queries: Mutex::new(Vec::new()) })
    }

    pub fn queries (&self)->Vec<String> { self.queries.lock().unwrap().clone() }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn geocode_forward (&self, query: &str)->Result<Vec<GeocodeFeature>> {
        self.queries.lock().unwrap().push( query.to_string());
        if self.fail { Err( op_failed("geocoder down")) } else { Ok( self.features.clone()) }
    }
}

pub fn portland ()->GeocodeFeature {
    GeocodeFeature::new( "Portland, OR", GeoPoint::from_lon_lat_degrees( -122.67, 45.52))
}

//--- imagery catalog

pub struct FakeCatalog {
    pub results: Vec<ImageryResult>,
    pub fail: bool,
    pub queries: Mutex<Vec<ImageryQuery>>,
}

impl FakeCatalog {
    pub fn with_results (results: Vec<ImageryResult>)->Arc<Self> {
        Arc::new( FakeCatalog { results, fail: false, queries: Mutex::new(Vec::new()) })
    }

    pub fn failing ()->Arc<Self> {
        Arc::new( FakeCatalog { results: Vec::new(), fail: true, queries: Mutex::new(Vec::new()) })
    }

    pub fn queries (&self)->Vec<ImageryQuery> { self.queries.lock().unwrap().clone() }
}

#[async_trait]
impl ImageryCatalog for FakeCatalog {
    async fn search (&self, query: &ImageryQuery)->Result<Vec<ImageryResult>> {
        self.queries.lock().unwrap().push( query.clone());
        if self.fail { Err( op_failed("catalog down")) } else { Ok( self.results.clone()) }
    }
}

pub fn landsat_scene ()->ImageryResult {
    ImageryResult::new( "LC08_1", "2017-07-01")
}

//--- telemetry

pub struct RecordingTelemetry {
    pub events: Mutex<Vec<TelemetryEvent>>,
    pub fail: bool,
    pub delay: Option<Duration>,
}

impl RecordingTelemetry {
    pub fn new ()->Arc<Self> { Arc::new( RecordingTelemetry { events: Mutex::new(Vec::new()), fail: false, delay: None }) }
    pub fn failing ()->Arc<Self> { Arc::new( RecordingTelemetry { events: Mutex::new(Vec::new()), fail: true, delay: None }) }

    /// events are only recorded after `delay`, like a slow dashboard endpoint
    pub fn slow (delay: Duration)->Arc<Self> { Arc::new( RecordingTelemetry { events: Mutex::new(Vec::new()), fail: false, delay: Some(delay) }) }

    pub fn event_types (&self)->Vec<String> {
        self.events.lock().unwrap().iter().map( |e| e.event_type.clone()).collect()
    }

    pub fn last_event (&self, event_type: &str)->Option<TelemetryEvent> {
        self.events.lock().unwrap().iter().rev().find( |e| e.event_type == event_type).cloned()
    }
}

#[async_trait]
impl TelemetrySink for RecordingTelemetry {
    async fn send (&self, event: &TelemetryEvent)->Result<()> {
        if let Some(delay) = self.delay {
            tokio::time::sleep( delay).await;
        }
        self.events.lock().unwrap().push( event.clone());
        if self.fail { Err( op_failed("dashboard down")) } else { Ok(()) }
    }
}

/// give detached telemetry tasks a chance to run
pub async fn settle () {
    for _ in 0..10 { tokio::task::yield_now().await; }
}

//--- events

pub fn slots_json (slots: &[(&str,&str)])->Value {
    let mut map = Map::new();
    for (name,value) in slots {
        map.insert( name.to_string(), json!({ "name": name, "value": value }));
    }
    Value::Object(map)
}

pub fn event_json (app_id: &str, new_session: bool, request: Value)->Value {
    json!({
        "version": "1.0",
        "session": {
            "new": new_session,
            "sessionId": "amzn1.echo-api.session.0001",
            "application": { "applicationId": app_id },
            "attributes": {},
            "user": { "userId": "amzn1.ask.account.0001" }
        },
        "context": { "System": { "device": { "deviceId": "device-0001" } } },
        "request": request
    })
}

pub fn intent_event (app_id: &str, intent_name: &str, slots: &[(&str,&str)])->IncomingEvent {
    let request = json!({
        "type": "IntentRequest",
        "requestId": "amzn1.echo-api.request.0001",
        "timestamp": "2017-11-20T18:00:00Z",
        "locale": "en-US",
        "intent": { "name": intent_name, "slots": slots_json(slots) }
    });
    serde_json::from_value( event_json( app_id, false, request)).unwrap()
}

pub fn typed_event (app_id: &str, request_type: &str, new_session: bool)->IncomingEvent {
    let request = json!({
        "type": request_type,
        "requestId": "amzn1.echo-api.request.0002",
        "timestamp": "2017-11-20T18:00:00Z"
    });
    serde_json::from_value( event_json( app_id, new_session, request)).unwrap()
}

pub fn image_intent (slots: &[(&str,&str)])->Intent {
    serde_json::from_value( json!({ "name": "GetImageIntent", "slots": slots_json(slots) })).unwrap()
}

pub fn portland_skill (telemetry: Arc<RecordingTelemetry>)->AlexaSkill {
    AlexaSkill::new( test_config(), FakeGeocoder::with_features( vec![portland()]), FakeCatalog::with_results( vec![landsat_scene()]), telemetry)
}
