// src/outcome.rs

use std::fmt;

use thiserror::Error;

use crate::headers::HeaderSet;

/// Classification of a failed request. Rendered in snake_case so callers
/// can branch on a stable textual form as well as the enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    InvalidUrl,
    ConnectionError,
    Timeout,
    TooManyRedirects,
    ProtocolError,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::InvalidUrl => "invalid_url",
            FailureKind::ConnectionError => "connection_error",
            FailureKind::Timeout => "timeout",
            FailureKind::TooManyRedirects => "too_many_redirects",
            FailureKind::ProtocolError => "protocol_error",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A terminal request failure: the classification plus a human-readable
/// detail captured where the failure occurred.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind}: {detail}")]
pub struct Failure {
    pub kind: FailureKind,
    pub detail: String,
}

impl Failure {
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

/// A completed response. The body is the raw text as received; no
/// decoding beyond transport-level decompression is applied.
#[derive(Clone, Debug)]
pub struct Response {
    pub status: u16,
    pub headers: HeaderSet,
    pub body: String,
}

/// Terminal result of executing one request. Exactly one variant is
/// populated; the engine never panics a failure through the caller.
#[derive(Clone, Debug)]
pub enum Outcome {
    Success(Response),
    Failure(Failure),
}

impl Outcome {
    pub(crate) fn failure(kind: FailureKind, detail: impl Into<String>) -> Self {
        Outcome::Failure(Failure::new(kind, detail))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn success(&self) -> Option<&Response> {
        match self {
            Outcome::Success(res) => Some(res),
            Outcome::Failure(_) => None,
        }
    }

    pub fn failure_info(&self) -> Option<&Failure> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }
}

impl From<Failure> for Outcome {
    fn from(failure: Failure) -> Self {
        Outcome::Failure(failure)
    }
}
