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

//! the HTTP endpoint through which the platform invokes the skill

use std::sync::Arc;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::warn;

use crate::{errors::OdinAlexaError, event::IncomingEvent, skill::AlexaSkill};

/// `POST /<name>` takes platform events, `GET /<name>/health` can be used for liveness checks
pub fn build_router (name: &str, skill: Arc<AlexaSkill>)->Router {
    Router::new()
        .route( &format!("/{}", name), post( event_handler))
        .route( &format!("/{}/health", name), get( health_handler))
        .with_state( skill)
}

async fn event_handler (State(skill): State<Arc<AlexaSkill>>, Json(event): Json<IncomingEvent>)->Response {
    match skill.handle_event( &event).await {
        Ok(Some(envelope)) => Json(envelope).into_response(),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            warn!("request {} failed: {}", event.request.request_id, e);
            (error_status( &e), e.to_string()).into_response()
        }
    }
}

async fn health_handler ()->&'static str {
    "ok"
}

pub fn error_status (e: &OdinAlexaError)->StatusCode {
    match e {
        OdinAlexaError::InvalidApplication(_) => StatusCode::FORBIDDEN,
        e if e.is_structural() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR
    }
}
