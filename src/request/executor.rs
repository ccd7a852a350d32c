// request/executor.rs

use std::time::{Duration, SystemTime};

use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::Client;
use url::Url;

use crate::debug::debug_log;
use crate::headers::HeaderSet;
use crate::network::{proxy_from_url, ProxyError};
use crate::outcome::{FailureKind, Outcome, Response};
use crate::request::options::{RequestOptions, DEFAULT_TIMEOUT_MS};
use crate::request::request_item::RequestItem;

/// Execute one request to its terminal outcome.
///
/// Every failure path is classified into an `Outcome` here; this function
/// never panics the caller and never retries. The whole operation,
/// redirect hops and body read included, is bounded by the request's
/// timeout.
pub async fn execute(item: RequestItem) -> Outcome {
    let started = SystemTime::now();
    let outcome = execute_inner(&item).await;
    let elapsed = started.elapsed().unwrap_or(Duration::ZERO);

    debug_log(
        item.method.as_str(),
        item.tag.as_deref().unwrap_or("no-tag"),
        &item.url,
        &outcome,
        started,
        elapsed,
        item.options.proxy.as_deref(),
    );

    outcome
}

async fn execute_inner(item: &RequestItem) -> Outcome {
    // URL preflight happens before any network I/O.
    let url = match parse_target(&item.url) {
        Ok(url) => url,
        Err(outcome) => return outcome,
    };

    let client = match build_client(&item.options) {
        Ok(client) => client,
        Err(e) => {
            return Outcome::failure(
                FailureKind::ConnectionError,
                format!("proxy configuration error: {}", e),
            )
        }
    };

    let deadline = Duration::from_millis(item.options.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS));
    match tokio::time::timeout(deadline, run_chain(&client, item, url)).await {
        Ok(outcome) => outcome,
        Err(_) => Outcome::failure(
            FailureKind::Timeout,
            format!("request timed out after {} ms", deadline.as_millis()),
        ),
    }
}

fn parse_target(raw: &str) -> Result<Url, Outcome> {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url),
        Ok(url) => Err(Outcome::failure(
            FailureKind::InvalidUrl,
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => Err(Outcome::failure(
            FailureKind::InvalidUrl,
            format!("{}: {}", raw, e),
        )),
    }
}

// Requests without a proxy share the global client; a proxy forces a
// one-off client carrying the same base configuration.
fn build_client(options: &RequestOptions) -> Result<Client, ProxyError> {
    let proxy_url = match &options.proxy {
        Some(proxy_url) => proxy_url,
        None => return Ok(crate::GLOBAL_CLIENT.clone()),
    };

    let client = Client::builder()
        .redirect(Policy::none())
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .user_agent(crate::APP_USER_AGENT)
        .proxy(proxy_from_url(proxy_url)?)
        .build()?;
    Ok(client)
}

// One pass over the redirect chain. Each hop re-issues the original
// method, headers and body at the Location target. The remaining-hop
// counter is seeded at max_redirects; a hop that would push it negative
// terminates the chain as too_many_redirects.
async fn run_chain(client: &Client, item: &RequestItem, mut url: Url) -> Outcome {
    let max_redirects = item.options.max_redirects;
    let mut remaining = max_redirects;

    loop {
        let mut builder = client.request(item.method.as_reqwest(), url.clone());
        for (name, value) in item.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(body) = &item.body {
            builder = builder.body(body.clone());
        }

        let res = match builder.send().await {
            Ok(res) => res,
            Err(e) => return classify_transport(&e),
        };

        if res.status().is_redirection() && item.options.follow_redirects {
            if let Some(location) = res.headers().get(LOCATION) {
                let target = match location.to_str() {
                    Ok(target) => target,
                    Err(_) => {
                        return Outcome::failure(
                            FailureKind::ProtocolError,
                            "Location header is not valid UTF-8",
                        )
                    }
                };
                let next = match url.join(target) {
                    Ok(next) => next,
                    Err(e) => {
                        return Outcome::failure(
                            FailureKind::ProtocolError,
                            format!("invalid redirect target '{}': {}", target, e),
                        )
                    }
                };
                if remaining == 0 {
                    return Outcome::failure(
                        FailureKind::TooManyRedirects,
                        format!("redirect limit of {} exceeded", max_redirects),
                    );
                }
                remaining -= 1;
                url = next;
                continue;
            }
            // A 3xx without Location is terminal, return it as-is.
        }

        return read_response(res).await;
    }
}

async fn read_response(res: reqwest::Response) -> Outcome {
    let status = res.status().as_u16();
    let headers = HeaderSet::from_header_map(res.headers());
    match res.text().await {
        Ok(body) => Outcome::Success(Response { status, headers, body }),
        Err(e) => Outcome::failure(
            FailureKind::ProtocolError,
            format!("failed to read response body: {}", e),
        ),
    }
}

// Classification happens right at the transport boundary, while the
// original error is still in hand.
fn classify_transport(e: &reqwest::Error) -> Outcome {
    let kind = if e.is_timeout() {
        FailureKind::Timeout
    } else if e.is_connect() {
        FailureKind::ConnectionError
    } else if e.is_decode() {
        FailureKind::ProtocolError
    } else {
        FailureKind::ConnectionError
    };
    Outcome::failure(kind, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_target_accepts_http_and_https() {
        assert!(parse_target("http://example.com/a").is_ok());
        assert!(parse_target("https://example.com/a?b=c").is_ok());
    }

    #[tokio::test]
    async fn invalid_url_fails_before_any_io() {
        let item = RequestItem::get("not-a-valid-url", HeaderSet::new(), RequestOptions::default());
        let outcome = execute(item).await;
        assert_eq!(
            outcome.failure_info().map(|f| f.kind),
            Some(FailureKind::InvalidUrl)
        );
    }

    #[tokio::test]
    async fn non_http_scheme_is_invalid_url() {
        let item = RequestItem::get("ftp://example.com/file", HeaderSet::new(), RequestOptions::default());
        let outcome = execute(item).await;
        assert_eq!(
            outcome.failure_info().map(|f| f.kind),
            Some(FailureKind::InvalidUrl)
        );
    }

    #[tokio::test]
    async fn unparsable_proxy_is_a_connection_error() {
        let options = RequestOptions::default().proxy("not a proxy");
        let item = RequestItem::get("http://example.com", HeaderSet::new(), options);
        let outcome = execute(item).await;
        let failure = outcome.failure_info().expect("expected failure");
        assert_eq!(failure.kind, FailureKind::ConnectionError);
        assert!(failure.detail.contains("proxy"));
    }
}
