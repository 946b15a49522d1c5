use hyperswitch_masking::{Maskable, PeekInterface, Secret};
use serde::{Deserialize, Serialize};

pub type Headers = std::collections::HashSet<(String, Maskable<String>)>;

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

fn default_request_headers() -> [(String, Maskable<String>); 1] {
    use http::header;

    [(header::ACCEPT.to_string(), "application/json".to_string().into())]
}

#[derive(Debug)]
pub struct Request {
    pub url: String,
    pub headers: Headers,
    pub method: Method,
    pub body: Option<RequestContent>,
}

impl std::fmt::Debug for RequestContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Json(_) => "JsonRequestBody",
        })
    }
}

pub enum RequestContent {
    Json(Box<dyn hyperswitch_masking::ErasedMaskSerialize + Send>),
}

impl RequestContent {
    /// Serialized body with secrets exposed, for the wire only.
    pub fn get_inner_value(&self) -> Secret<String> {
        match self {
            Self::Json(i) => serde_json::to_string(&i).unwrap_or_default().into(),
        }
    }

    /// Serialized body with secrets masked, safe to log.
    pub fn masked_value(&self) -> serde_json::Value {
        match self {
            Self::Json(i) => (**i).masked_serialize().unwrap_or_else(
                |_| serde_json::json!({ "error": "failed to mask serialize request body" }),
            ),
        }
    }
}

impl Request {
    pub fn get_headers_map(&self) -> std::collections::HashMap<String, String> {
        let mut map = std::collections::HashMap::new();
        for (k, v) in &self.headers {
            let val = match v {
                Maskable::Masked(s) => s.peek().to_string(),
                Maskable::Normal(s) => s.to_string(),
            };
            map.insert(k.clone(), val);
        }
        map
    }

    /// Header map with masked values replaced, safe to log.
    pub fn masked_headers(&self) -> serde_json::Value {
        let masked = self
            .headers
            .iter()
            .fold(serde_json::Map::new(), |mut acc, (k, v)| {
                let value = match v {
                    Maskable::Masked(_) => serde_json::Value::String("*** masked ***".to_string()),
                    Maskable::Normal(iv) => serde_json::Value::String(iv.to_owned()),
                };
                acc.insert(k.clone(), value);
                acc
            });
        serde_json::Value::Object(masked)
    }
}

#[derive(Debug)]
pub struct RequestBuilder {
    pub url: String,
    pub headers: Headers,
    pub method: Method,
    pub body: Option<RequestContent>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: Method::Get,
            url: String::with_capacity(1024),
            headers: std::collections::HashSet::new(),
            body: None,
        }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn attach_default_headers(mut self) -> Self {
        self.headers.extend(default_request_headers());
        self
    }

    pub fn header(mut self, header: &str, value: &str) -> Self {
        self.headers.insert((header.into(), value.into()));
        self
    }

    pub fn headers(mut self, headers: Vec<(String, Maskable<String>)>) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn set_optional_body<T: Into<RequestContent>>(mut self, body: Option<T>) -> Self {
        body.map(|body| self.body.replace(body.into()));
        self
    }

    pub fn set_body<T: Into<RequestContent>>(mut self, body: T) -> Self {
        self.body.replace(body.into());
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
