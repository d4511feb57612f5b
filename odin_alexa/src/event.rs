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

//! the inbound platform event model

use std::{collections::HashMap, fs::File, io::{self, Read}, path::Path};
use serde::{Deserialize,Serialize};
use serde_json::{Map,Value};

use crate::errors::{OdinAlexaError,Result};
use crate::op_failed;

pub const LAUNCH_REQUEST: &'static str = "LaunchRequest";
pub const INTENT_REQUEST: &'static str = "IntentRequest";
pub const SESSION_ENDED_REQUEST: &'static str = "SessionEndedRequest";

/// what the platform sends us for each invocation
#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct IncomingEvent {
    pub session: Session,
    pub request: Request,

    #[serde(default)]
    pub context: Value, // we don't use the context other than for logging
}

#[derive(Deserialize,Serialize,Debug,Clone)]
#[serde(rename_all="camelCase")]
pub struct Session {
    pub session_id: String,

    #[serde(default)]
    pub new: bool,

    pub application: Application,

    /// the attributes we returned in the previous response of this session
    #[serde(default)]
    pub attributes: Map<String,Value>,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub user: Option<Value>,
}

#[derive(Deserialize,Serialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct Application {
    pub application_id: String,
}

/// the platform request. We keep the type as a string so that unknown request types are reported
/// as such instead of showing up as deserialization errors. Use `kind()` to get the typed variant
#[derive(Deserialize,Serialize,Debug,Clone)]
#[serde(rename_all="camelCase")]
pub struct Request {
    #[serde(rename="type")]
    pub request_type: String,

    pub request_id: String,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub timestamp: Option<String>,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub intent: Option<Intent>,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub reason: Option<String>, // only for SessionEndedRequests
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub enum RequestKind<'a> {
    Launch,
    Intent(&'a Intent),
    SessionEnded(Option<&'a str>),
}

impl Request {
    pub fn kind (&self)->Result<RequestKind<'_>> {
        match self.request_type.as_str() {
            LAUNCH_REQUEST => Ok( RequestKind::Launch ),
            INTENT_REQUEST => {
                let intent = self.intent.as_ref().ok_or_else( || op_failed!("{} {} without intent", INTENT_REQUEST, self.request_id))?;
                Ok( RequestKind::Intent(intent) )
            }
            SESSION_ENDED_REQUEST => Ok( RequestKind::SessionEnded( self.reason.as_deref()) ),
            other => Err( OdinAlexaError::UnrecognizedRequestType( other.to_string()) )
        }
    }
}

#[derive(Deserialize,Serialize,Debug,Clone,PartialEq)]
pub struct Intent {
    pub name: String,

    #[serde(default)]
    pub slots: HashMap<String,Slot>,
}

impl Intent {
    /// the non-empty value of the named slot. Missing slots and slots without value are the same for us
    pub fn slot_value (&self, slot_name: &str)->Option<&str> {
        self.slots.get( slot_name)
            .and_then( |slot| slot.value.as_deref())
            .map( |v| v.trim())
            .filter( |v| !v.is_empty())
    }

    pub fn has_slot_value (&self, slot_name: &str)->bool {
        self.slot_value( slot_name).is_some()
    }
}

#[derive(Deserialize,Serialize,Debug,Clone,PartialEq)]
pub struct Slot {
    pub name: String,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub value: Option<String>,
}

/// read an event JSON file, or stdin if there is no path
pub fn read_event (path: Option<&Path>)->Result<IncomingEvent> {
    let mut s = String::new();
    match path {
        Some(path) => { File::open(path)?.read_to_string(&mut s)?; }
        None => { io::stdin().read_to_string(&mut s)?; }
    }
    Ok( serde_json::from_str( &s)? )
}
