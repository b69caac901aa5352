//! TellusUser wrapper and session user cache
//!
//! A wrapper around the user data coming back from Tellus, plus a cache of
//! already-fetched users so cross-component lookups (full names, coffee
//! pairs) don't refetch. The cache is an explicit object handed around via
//! context, scoped to one app session; last writer for an alias wins and
//! nothing is evicted.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

pub const COFFEE_BOT_TAG: &str = "coffee-bot";

// user-info block keys
const AVATAR_URL: &str = "Avatar URL";
const CONFLUENCE: &str = "Confluence";
const GITHUB: &str = "Github";
const PHONE: &str = "Phone";

/// Raw user payload as served by `/u/<alias>`. The interesting parts live in
/// nested data blocks: `user-info` (contact details) and `socializer`
/// (coffee pairing metadata).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct UserData {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub data: UserDataBlocks,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct UserDataBlocks {
    #[serde(default, rename = "user-info")]
    pub user_info: serde_json::Map<String, Value>,
    #[serde(default)]
    pub socializer: Option<SocializerData>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct SocializerData {
    #[serde(default, rename = "coffee-pair")]
    pub coffee_pair: Option<String>,
    /// Pairing history keyed by run id, in run order.
    #[serde(default, rename = "coffee-history")]
    pub coffee_history: serde_json::Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TellusUser {
    alias: String,
    data: UserData,
}

impl TellusUser {
    pub fn new(alias: impl Into<String>, data: UserData) -> Self {
        Self {
            alias: alias.into(),
            data,
        }
    }

    /// Build a user from one entry of an alias-keyed response. Some endpoints
    /// double-encode the user payload as a JSON string; unwrap that here.
    pub fn from_value(alias: &str, value: &Value) -> Self {
        let data = match value {
            Value::String(encoded) => serde_json::from_str(encoded).unwrap_or_default(),
            other => serde_json::from_value(other.clone()).unwrap_or_default(),
        };
        Self::new(alias, data)
    }

    pub fn username(&self) -> &str {
        &self.alias
    }

    pub fn email(&self) -> Option<&str> {
        self.data.email.as_deref()
    }

    fn user_info(&self, key: &str) -> Option<&str> {
        self.data.data.user_info.get(key).and_then(Value::as_str)
    }

    pub fn phone(&self) -> Option<&str> {
        self.user_info(PHONE)
    }

    pub fn confluence(&self) -> Option<&str> {
        self.user_info(CONFLUENCE)
    }

    pub fn github(&self) -> Option<&str> {
        self.user_info(GITHUB)
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.user_info(AVATAR_URL)
    }

    /// The full name, falling back to the username.
    pub fn full_name(&self) -> &str {
        match self.data.full_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.alias,
        }
    }

    fn socializer(&self) -> Option<&SocializerData> {
        self.data.data.socializer.as_ref()
    }

    /// The alias of this user's current coffee pair, if one is assigned.
    pub fn coffee_pair(&self) -> Option<&str> {
        self.socializer().and_then(|data| data.coffee_pair.as_deref())
    }

    pub fn has_coffee_pair(&self) -> bool {
        self.coffee_pair().is_some()
    }

    /// The last `pairs_back` coffee runs, oldest first.
    pub fn coffee_history(&self, pairs_back: usize) -> Vec<String> {
        let history: Vec<String> = self
            .socializer()
            .map(|data| data.coffee_history.keys().cloned().collect())
            .unwrap_or_default();
        if history.is_empty() {
            return vec!["No coffee history.".to_string()];
        }
        let start = history.len().saturating_sub(pairs_back);
        history[start..].to_vec()
    }

    pub fn is_coffee_bot_on(&self) -> bool {
        self.data.tags.iter().any(|tag| tag == COFFEE_BOT_TAG)
    }
}

/// URL of the User page for a given user alias.
pub fn tellus_user_url(user_alias: &str) -> String {
    format!("/#u.{}", user_alias)
}

/// Cache of fetched users, keyed by alias. Shared within one app session via
/// context; mutation is single-threaded so reads can only ever be stale, not
/// torn.
#[derive(Clone, Default)]
pub struct UserCache {
    users: Rc<RefCell<HashMap<String, Rc<TellusUser>>>>,
}

impl UserCache {
    /// Cache an already-parsed user payload.
    pub fn insert(&self, alias: &str, data: UserData) -> Rc<TellusUser> {
        let user = Rc::new(TellusUser::new(alias, data));
        self.users
            .borrow_mut()
            .insert(alias.to_string(), Rc::clone(&user));
        user
    }

    /// Construct a TellusUser from a raw payload and cache it.
    pub fn construct_and_cache(&self, alias: &str, value: &Value) -> Rc<TellusUser> {
        let user = Rc::new(TellusUser::from_value(alias, value));
        self.users
            .borrow_mut()
            .insert(alias.to_string(), Rc::clone(&user));
        user
    }

    /// Cache every user in an alias-keyed response.
    pub fn cache_all(&self, users_json: &serde_json::Map<String, Value>) {
        for (alias, value) in users_json {
            self.construct_and_cache(alias, value);
        }
    }

    pub fn lookup(&self, alias: &str) -> Option<Rc<TellusUser>> {
        self.users.borrow().get(alias).cloned()
    }

    /// The full name for an alias, or the alias itself when we have no
    /// cached user for it.
    pub fn full_name(&self, alias: &str) -> String {
        self.lookup(alias)
            .map(|user| user.full_name().to_string())
            .unwrap_or_else(|| alias.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(payload: Value) -> TellusUser {
        TellusUser::from_value("dgroothuis", &payload)
    }

    fn socializer_payload() -> Value {
        json!({
            "email": "dgroothuis@example.com",
            "tags": ["coffee-bot", "tellus-aquanaut"],
            "data": {
                "socializer": {
                    "coffee-pair": "mzheng",
                    "coffee-history": {"run-1": "a", "run-2": "b", "run-3": "c"}
                }
            }
        })
    }

    #[test]
    fn user_info_fields_read_through_nested_block() {
        let full = user(json!({
            "fullName": "Dan Groothuis",
            "data": {
                "user-info": {
                    "Phone": "x1234",
                    "Github": "http://github.com/dgroothuis",
                    "Confluence": "http://confluence.example.com/~dgroothuis"
                }
            }
        }));
        assert_eq!(full.phone(), Some("x1234"));
        assert_eq!(full.github(), Some("http://github.com/dgroothuis"));
        assert_eq!(full.avatar_url(), None);
        assert_eq!(full.full_name(), "Dan Groothuis");
    }

    #[test]
    fn full_name_falls_back_to_alias() {
        assert_eq!(user(json!({})).full_name(), "dgroothuis");
        assert_eq!(user(json!({"fullName": ""})).full_name(), "dgroothuis");
    }

    #[test]
    fn missing_data_blocks_read_as_absent_not_errors() {
        let empty = user(json!({}));
        assert_eq!(empty.phone(), None);
        assert_eq!(empty.coffee_pair(), None);
        assert!(!empty.has_coffee_pair());
        assert_eq!(empty.coffee_history(5), vec!["No coffee history."]);
    }

    #[test]
    fn coffee_bot_is_a_tag_membership_test() {
        assert!(user(socializer_payload()).is_coffee_bot_on());
        assert!(!user(json!({"tags": ["tellus-aquanaut"]})).is_coffee_bot_on());
    }

    #[test]
    fn coffee_history_returns_last_n_runs() {
        let socializing = user(socializer_payload());
        assert_eq!(socializing.coffee_pair(), Some("mzheng"));
        assert_eq!(socializing.coffee_history(2), vec!["run-2", "run-3"]);
        assert_eq!(socializing.coffee_history(5), vec!["run-1", "run-2", "run-3"]);
    }

    #[test]
    fn double_encoded_payloads_unwrap() {
        let encoded = json!("{\"fullName\": \"Dan Groothuis\"}");
        assert_eq!(user(encoded).full_name(), "Dan Groothuis");
    }

    #[test]
    fn cache_last_writer_wins() {
        let cache = UserCache::default();
        cache.construct_and_cache("dray", &json!({"fullName": "First"}));
        cache.construct_and_cache("dray", &json!({"fullName": "Second"}));
        assert_eq!(cache.lookup("dray").unwrap().full_name(), "Second");
    }

    #[test]
    fn cache_full_name_falls_back_to_alias() {
        let cache = UserCache::default();
        assert_eq!(cache.full_name("nobody"), "nobody");

        let mut users = serde_json::Map::new();
        users.insert("dray".to_string(), json!({"fullName": "D. Ray"}));
        cache.cache_all(&users);
        assert_eq!(cache.full_name("dray"), "D. Ray");
    }

    #[test]
    fn user_url() {
        assert_eq!(tellus_user_url("dray"), "/#u.dray");
    }
}
