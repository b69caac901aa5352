//! Tellus REST API calls.
//!
//! Single-letter route prefixes map to the server's command routes (see
//! `wiring`). All calls are asynchronous; failures surface as display
//! strings and are the caller's problem — there are no retries.

use gloo_net::http::Request;
use serde_json::Value;

use crate::model::{Tell, TellData, UserData};
use crate::state::session::TellusStatus;
use crate::wiring::{query_route, R_GO, R_MGMT, R_SOURCES, R_TELL, R_TELLS, R_TESTING, R_USER};

/// Current server-recognized identity, or None when nobody is logged in.
pub async fn whoami() -> Result<Option<String>, String> {
    let response = Request::get(&format!("/{}/whoami", R_MGMT))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("whoami failed: {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;
    let username = body.trim().trim_matches('"').to_string();
    Ok((!username.is_empty() && username != "null").then_some(username))
}

/// Server status: persistence mode and version.
pub async fn tellus_status() -> Result<TellusStatus, String> {
    let response = Request::get(&format!("/{}/tellus-status", R_TESTING))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Status check failed: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Query a group of Tells. The response is an alias-keyed object in the
/// server's display order.
pub async fn query_tells(query_string: &str) -> Result<Vec<Tell>, String> {
    let response = Request::get(&query_route(R_TELLS, query_string))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Tell query failed: {}", response.status()));
    }

    let tells: serde_json::Map<String, Value> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(tells_from_response(&tells))
}

/// One Tell per response key, in the server's order.
fn tells_from_response(tells: &serde_json::Map<String, Value>) -> Vec<Tell> {
    tells
        .iter()
        .map(|(alias, value)| Tell::from_value(alias, value))
        .collect()
}

/// Detail for a single Tell.
pub async fn fetch_tell(alias: &str) -> Result<Tell, String> {
    let response = Request::get(&query_route(R_TELL, alias))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Tell fetch failed: {}", response.status()));
    }

    let data: TellData = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    let alias = data.alias.clone().unwrap_or_else(|| alias.to_string());
    Ok(Tell::new(alias, data))
}

#[derive(Debug, serde::Serialize)]
pub struct UpdateTellRequest {
    pub alias: String,
    pub new_alias: String,
    pub description: String,
    pub tags: String,
    pub go_url: String,
}

/// Update (possibly renaming) a Tell. Returns the saved payload, whose alias
/// is the one to navigate to afterwards.
pub async fn update_tell(request: &UpdateTellRequest) -> Result<TellData, String> {
    let response = Request::post(&format!("/{}/update-tell", R_TELL))
        .json(request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Update failed: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn delete_tell(alias: &str) -> Result<(), String> {
    let response = Request::get(&format!("/{}/{}/delete-tell", R_TELL, alias))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Delete failed: {}", response.status()));
    }
    Ok(())
}

#[derive(Debug, serde::Serialize)]
struct ToggleTagRequest {
    alias: String,
    #[serde(rename = "toggle-tag")]
    toggle_tag: String,
}

/// Toggle a tag (e.g. coffee-bot) on the Tell behind an alias.
pub async fn toggle_tag(alias: &str, tag: &str) -> Result<(), String> {
    let response = Request::post(&format!("/{}/toggle-tag", R_TELL))
        .json(&ToggleTagRequest {
            alias: alias.to_string(),
            toggle_tag: tag.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Toggle failed: {}", response.status()));
    }
    Ok(())
}

#[derive(Debug, serde::Serialize)]
pub struct CreateGoLinkRequest {
    pub alias: String,
    pub go_url: String,
    pub tags: String,
}

/// Create a Go link.
pub async fn create_go_link(request: &CreateGoLinkRequest) -> Result<(), String> {
    let response = Request::post(&format!("/{}", R_GO))
        .json(request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Go link creation failed: {}", response.status()));
    }
    Ok(())
}

/// All users, as an alias-keyed object.
pub async fn fetch_users() -> Result<serde_json::Map<String, Value>, String> {
    let response = Request::get(&format!("/{}/", R_USER))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("User query failed: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Detail for a single user.
pub async fn fetch_user(alias: &str) -> Result<UserData, String> {
    let response = Request::get(&query_route(R_USER, alias))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("User fetch failed: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct Source {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub last_run: Option<String>,
    #[serde(default)]
    pub last_run_message: String,
}

/// All sources, keyed by source id.
pub async fn fetch_sources() -> Result<Vec<(String, Source)>, String> {
    let response = Request::get(&format!("/{}", R_SOURCES))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Source query failed: {}", response.status()));
    }

    let sources: serde_json::Map<String, Value> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(sources
        .iter()
        .map(|(id, value)| {
            let source = serde_json::from_value(value.clone()).unwrap_or_default();
            (id.clone(), source)
        })
        .collect())
}

/// Trigger a (re)load of one source. The server answers immediately; the
/// load itself runs in the background.
pub async fn load_source(source_id: &str) -> Result<(), String> {
    let response = Request::get(&format!("/{}/{}/load", R_SOURCES, source_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Source load failed: {}", response.status()));
    }
    Ok(())
}

/// Trigger a (re)load of every source.
pub async fn load_all_sources() -> Result<(), String> {
    let response = Request::get(&format!("/{}/load-all", R_SOURCES))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Source load failed: {}", response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tell_query_response_maps_one_tell_per_key_in_order() {
        let response = json!({
            "zebra": "http://zebra.example.com",
            "apple": {"go_url": "http://apple.example.com", "description": "fruit"},
            "bare": {"description": "no link"}
        });
        let Value::Object(response) = response else {
            unreachable!()
        };

        let tells = tells_from_response(&response);
        assert_eq!(tells.len(), 3);
        // preserve_order keeps the server's key order, not alphabetical
        assert_eq!(tells[0].alias(), "zebra");
        assert_eq!(tells[1].alias(), "apple");
        assert_eq!(tells[2].alias(), "bare");
        assert_eq!(tells[0].go_url(), Some("http://zebra.example.com"));
        assert_eq!(tells[1].go_url(), Some("http://apple.example.com"));
        assert_eq!(tells[2].go_url(), None);
    }
}
