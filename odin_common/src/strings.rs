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

use std::{borrow::Cow, env};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref ENV_VAR_RE: Regex = Regex::new( r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap();
}

/// replace all `${NAME}` references in `s` with the value of the respective environment variable.
/// References to undefined variables are left as they are so that the caller can detect them
pub fn env_expand (s: &str)->String {
    expand_with( s, |name| env::var(name).ok())
}

/// variable expansion with an explicit lookup function
pub fn expand_with<F> (s: &str, lookup: F)->String where F: Fn(&str)->Option<String> {
    let expanded: Cow<str> = ENV_VAR_RE.replace_all( s, |caps: &Captures| {
        lookup( &caps[1]).unwrap_or_else( || caps[0].to_string())
    });
    expanded.into_owned()
}

/// answer if `s` still contains unresolved `${NAME}` references
pub fn has_unexpanded_vars (s: &str)->bool {
    ENV_VAR_RE.is_match(s)
}
