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

//! progress notifications for the external dashboard. Telemetry never fails the caller,
//! errors are only logged

use std::{sync::Arc, time::Duration};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize,Serialize};
use serde_json::{json, Value};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use odin_common::net::post_json;
use crate::{TelemetryConfig, attributes::SessionAttributes, event::Session, errors::{Result, telemetry_failure}};

pub const REQUEST_DATA: &'static str = "request-data";
pub const SESSION_DATA: &'static str = "session-data";

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct TelemetryEvent {
    #[serde(rename="type")]
    pub event_type: String,
    pub payload: Value,
}

impl TelemetryEvent {
    pub fn request_data (request_id: &str, session: &Session)->Result<Self> {
        Ok( TelemetryEvent {
            event_type: REQUEST_DATA.to_string(),
            payload: json!({ "requestId": request_id, "session": serde_json::to_value(session)? })
        })
    }

    pub fn session_data (attrs: &SessionAttributes)->Result<Self> {
        Ok( TelemetryEvent {
            event_type: SESSION_DATA.to_string(),
            payload: serde_json::to_value( attrs)?
        })
    }
}

#[async_trait]
pub trait TelemetrySink: Send + Sync {
    async fn send (&self, event: &TelemetryEvent)->Result<()>;
}

/// POSTs `{type,payload}` to `<url>?type=<type>`
pub struct HttpTelemetrySink {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpTelemetrySink {
    pub fn new (client: Client, config: &TelemetryConfig, timeout: Duration)->Self {
        HttpTelemetrySink { client, url: config.url.clone(), timeout }
    }
}

#[async_trait]
impl TelemetrySink for HttpTelemetrySink {
    async fn send (&self, event: &TelemetryEvent)->Result<()> {
        let query = [("type", event.event_type.as_str())];
        let status = post_json( &self.client, &self.url, &query, event, self.timeout).await
            .map_err( |e| telemetry_failure( format!("{} to {}: {}", event.event_type, self.url, e)))?;
        debug!("telemetry {} response status {}", event.event_type, status);
        Ok(())
    }
}

/// a sink that drops all events (e.g. for offline event processing)
pub struct NoTelemetry;

#[async_trait]
impl TelemetrySink for NoTelemetry {
    async fn send (&self, event: &TelemetryEvent)->Result<()> {
        debug!("dropping telemetry event {}", event.event_type);
        Ok(())
    }
}

/// send and log failures. This never returns an error
pub async fn notify (sink: &dyn TelemetrySink, event: TelemetryEvent) {
    if let Err(e) = sink.send( &event).await {
        warn!("telemetry failed: {}", e);
    }
}

/// fire-and-forget version of `notify` that does not block the caller
pub fn notify_detached (sink: Arc<dyn TelemetrySink>, event: TelemetryEvent)->JoinHandle<()> {
    tokio::spawn( async move {
        notify( sink.as_ref(), event).await
    })
}
