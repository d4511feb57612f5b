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

//! building the platform response envelope. Everything in here is pure (no I/O)

use serde::{Deserialize,Serialize};
use crate::attributes::SessionAttributes;

pub const PROTOCOL_VERSION: &'static str = "1.0";
pub const CARD_TITLE_PREFIX: &'static str = "SessionSpeechlet - ";

/// the generic, platform independent input to build a speechlet response
#[derive(Debug,Clone,Default,PartialEq)]
pub struct SpeechletOptions {
    pub title: String,
    pub output: String,
    pub reprompt_text: Option<String>,
    pub end_session: bool,
}

impl SpeechletOptions {
    pub fn new (title: impl ToString, output: impl ToString)->Self {
        SpeechletOptions { title: title.to_string(), output: output.to_string(), reprompt_text: None, end_session: false }
    }

    pub fn with_reprompt (mut self, reprompt_text: impl ToString)->Self {
        self.reprompt_text = Some(reprompt_text.to_string());
        self
    }

    pub fn ending_session (mut self)->Self {
        self.end_session = true;
        self
    }
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct OutputSpeech {
    #[serde(rename="type")]
    pub speech_type: String,
    pub text: String,
}

impl OutputSpeech {
    pub fn plain_text (text: impl ToString)->Self {
        OutputSpeech { speech_type: "PlainText".to_string(), text: text.to_string() }
    }
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Card {
    #[serde(rename="type")]
    pub card_type: String,
    pub title: String,
    pub content: String,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct SpeechletResponse {
    pub output_speech: OutputSpeech,
    pub card: Card,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub reprompt: Option<Reprompt>,

    pub should_end_session: bool,
}

/// the JSON object we return to the platform
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub session_attributes: SessionAttributes,
    pub response: SpeechletResponse,
}

pub fn build_speechlet_response (options: &SpeechletOptions)->SpeechletResponse {
    SpeechletResponse {
        output_speech: OutputSpeech::plain_text( &options.output),
        card: Card {
            card_type: "Simple".to_string(),
            title: format!("{}{}", CARD_TITLE_PREFIX, options.title),
            content: format!("{}{}", CARD_TITLE_PREFIX, options.output),
        },
        reprompt: options.reprompt_text.as_ref().map( |text| Reprompt { output_speech: OutputSpeech::plain_text(text) }),
        should_end_session: options.end_session,
    }
}

pub fn build_response (session_attributes: SessionAttributes, speechlet_response: SpeechletResponse)->ResponseEnvelope {
    ResponseEnvelope {
        version: PROTOCOL_VERSION.to_string(),
        session_attributes,
        response: speechlet_response,
    }
}
