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

//! request routing and intent dispatch

use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::{
    AlexaSkillConfig,
    attributes::SessionAttributes,
    errors::{OdinAlexaError, Result},
    event::{IncomingEvent, Intent, Request, RequestKind, Session},
    geocoder::Geocoder,
    imagery::ImageryCatalog,
    pipeline::{ImagePipeline, DEFAULT_TITLE, ASK_FOR_LOCATION},
    response::{ResponseEnvelope, SpeechletOptions, build_response, build_speechlet_response},
    telemetry::{TelemetryEvent, TelemetrySink, notify_detached},
};

pub const GET_IMAGE_INTENT: &'static str = "GetImageIntent";
pub const HELP_INTENT: &'static str = "AMAZON.HelpIntent";
pub const STOP_INTENT: &'static str = "AMAZON.StopIntent";
pub const CANCEL_INTENT: &'static str = "AMAZON.CancelIntent";

/// the skill entry point. Collaborators are passed in so that they can be substituted
pub struct AlexaSkill {
    config: Arc<AlexaSkillConfig>,
    pipeline: ImagePipeline,
    telemetry: Arc<dyn TelemetrySink>,

    /// detached telemetry notifications that might not have completed yet
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl AlexaSkill {
    pub fn new (config: AlexaSkillConfig, geocoder: Arc<dyn Geocoder>, catalog: Arc<dyn ImageryCatalog>, telemetry: Arc<dyn TelemetrySink>)->Self {
        let config = Arc::new(config);
        let pipeline = ImagePipeline::new( config.clone(), geocoder, catalog, telemetry.clone());
        AlexaSkill { config, pipeline, telemetry, pending: Mutex::new( Vec::new()) }
    }

    /// wait for all detached telemetry notifications. Short lived processes have to call this before
    /// they exit, otherwise pending notifications are cancelled with the runtime
    pub async fn flush (&self) {
        let pending = std::mem::take( &mut *self.lock_pending());
        for handle in pending {
            if let Err(e) = handle.await {
                warn!("telemetry task failed: {}", e);
            }
        }
    }

    fn track (&self, handle: JoinHandle<()>) {
        let mut pending = self.lock_pending();
        pending.retain( |h| !h.is_finished());
        pending.push( handle);
    }

    fn lock_pending (&self)->MutexGuard<'_,Vec<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else( |poisoned| poisoned.into_inner())
    }

    /// process one platform event. `Ok(None)` means there is no response payload (session ended)
    pub async fn handle_event (&self, event: &IncomingEvent)->Result<Option<ResponseEnvelope>> {
        let session = &event.session;
        let request = &event.request;
        debug!("event {:?}", event);

        self.check_application( session)?;

        match TelemetryEvent::request_data( &request.request_id, session) {
            Ok(te) => self.track( notify_detached( self.telemetry.clone(), te)),
            Err(e) => warn!("failed to create request-data event: {}", e)
        }

        if session.new {
            on_session_started( request, session);
        }

        match request.kind()? {
            RequestKind::Launch => {
                info!("onLaunch requestId={}, sessionId={}", request.request_id, session.session_id);
                Ok( Some( envelope( welcome_response())) )
            }
            RequestKind::Intent(intent) => {
                let response = self.on_intent( request, intent, session).await?;
                Ok( Some( envelope( response)) )
            }
            RequestKind::SessionEnded(reason) => {
                info!("onSessionEnded requestId={}, sessionId={}, reason={:?}", request.request_id, session.session_id, reason);
                Ok(None)
            }
        }
    }

    pub async fn on_intent (&self, request: &Request, intent: &Intent, session: &Session)->Result<(SessionAttributes,SpeechletOptions)> {
        info!("onIntent requestId={}, sessionId={}, intent={}", request.request_id, session.session_id, intent.name);

        match intent.name.as_str() {
            GET_IMAGE_INTENT => Ok( self.pipeline.get_image_response( &request.request_id, intent).await ),
            HELP_INTENT => Ok( welcome_response() ),
            STOP_INTENT | CANCEL_INTENT => Ok( end_session_response() ),
            other => Err( OdinAlexaError::InvalidIntent( other.to_string()) )
        }
    }

    fn check_application (&self, session: &Session)->Result<()> {
        let app_id = &session.application.application_id;
        if *app_id != self.config.application_id {
            warn!("rejecting request from application {}", app_id);
            Err( OdinAlexaError::InvalidApplication( app_id.clone()) )
        } else {
            Ok(())
        }
    }
}

fn on_session_started (request: &Request, session: &Session) {
    info!("onSessionStarted requestId={}, sessionId={}", request.request_id, session.session_id);
}

fn envelope ((attrs, options): (SessionAttributes,SpeechletOptions))->ResponseEnvelope {
    build_response( attrs, build_speechlet_response( &options))
}

pub fn welcome_response ()->(SessionAttributes,SpeechletOptions) {
    let options = SpeechletOptions::new( DEFAULT_TITLE, "Ask me about a location to look at some satellite images!")
        .with_reprompt( ASK_FOR_LOCATION);
    (SessionAttributes::default(), options)
}

pub fn end_session_response ()->(SessionAttributes,SpeechletOptions) {
    let options = SpeechletOptions::new( "Finished with satellites", "Thanks for looking at earth")
        .ending_session();
    (SessionAttributes::default(), options)
}
