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
use odin_common::net::{with_timeout, OdinNetError};

#[tokio::test]
async fn test_timeout() {
    let res: Result<u32,OdinNetError> = with_timeout( Duration::from_millis(20), "http://slow.test", async {
        tokio::time::sleep( Duration::from_secs(5)).await;
        Ok::<u32,OdinNetError>(42)
    }).await;

    match res {
        Err(OdinNetError::TimeoutError(dur,url)) => {
            assert_eq!( dur, Duration::from_millis(20));
            assert_eq!( url, "http://slow.test");
        }
        other => panic!("expected timeout, got {:?}", other)
    }
}

#[tokio::test]
async fn test_in_time() {
    let res = with_timeout( Duration::from_secs(5), "http://fast.test", async { Ok::<u32,OdinNetError>(42) }).await;
    assert!( matches!( res, Ok(42)));
}
