// request/request_item.rs

use crate::headers::HeaderSet;
use crate::request::options::RequestOptions;

/// Request method. The engine speaks GET and POST only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// One fully-specified unit of HTTP work. Built fresh per call and never
/// mutated afterwards; the executor consumes it and produces exactly one
/// `Outcome`.
#[derive(Clone, Debug)]
pub struct RequestItem {
    pub method: Method,
    pub url: String,
    pub headers: HeaderSet,
    /// Present only for POST.
    pub body: Option<String>,
    pub options: RequestOptions,
    /// Free-form label carried into debug logs, not sent on the wire.
    pub tag: Option<String>,
}

impl RequestItem {
    pub fn get(url: impl Into<String>, headers: HeaderSet, options: RequestOptions) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers,
            body: None,
            options,
            tag: None,
        }
    }

    pub fn post(
        url: impl Into<String>,
        headers: HeaderSet,
        body: impl Into<String>,
        options: RequestOptions,
    ) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers,
            body: Some(body.into()),
            options,
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_constructor_has_no_body() {
        let item = RequestItem::get("http://example.com", HeaderSet::new(), RequestOptions::default());
        assert_eq!(item.method, Method::Get);
        assert!(item.body.is_none());
        assert!(item.tag.is_none());
    }

    #[test]
    fn post_constructor_carries_body() {
        let item = RequestItem::post(
            "http://example.com",
            HeaderSet::new(),
            "{}",
            RequestOptions::default(),
        );
        assert_eq!(item.method, Method::Post);
        assert_eq!(item.body.as_deref(), Some("{}"));
    }

    #[test]
    fn tag_is_attached_by_builder() {
        let item = RequestItem::get("http://example.com", HeaderSet::new(), RequestOptions::default())
            .with_tag("probe");
        assert_eq!(item.tag.as_deref(), Some("probe"));
    }
}
