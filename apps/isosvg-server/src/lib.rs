//! HTTP front end: `GET /surface?width=&height=&color=&surface=&format=`
//! answers with an SVG plot (or a JSON frame when `format=json`).

pub mod settings;

use std::io::{self, Cursor};

use thiserror::Error;
use tiny_http::{Header, Response, Server};
use url::form_urlencoded;

use isosvg_core::{ConfigError, RenderConfig, RenderParams, Surface};
use isosvg_renderer::{render_with, SurfaceFrame};

pub use settings::ServerSettings;

const SVG_CONTENT_TYPE: &str = "image/svg+xml";
const JSON_CONTENT_TYPE: &str = "application/json";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid render defaults: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot bind {addr}: {message}")]
    Bind { addr: String, message: String },
}

/// A fully built HTTP reply, independent of the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    fn ok(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type,
            body,
        }
    }

    fn not_found() -> Self {
        Self {
            status: 404,
            content_type: TEXT_CONTENT_TYPE,
            body: b"Not Found".to_vec(),
        }
    }

    fn internal_error() -> Self {
        Self {
            status: 500,
            content_type: TEXT_CONTENT_TYPE,
            body: b"Render failed".to_vec(),
        }
    }

    fn into_response(self) -> Response<Cursor<Vec<u8>>> {
        let response = Response::from_data(self.body).with_status_code(self.status);
        match format!("Content-Type: {}", self.content_type).parse::<Header>() {
            Ok(header) => response.with_header(header),
            Err(()) => response,
        }
    }
}

/// Build the reply for a request URL (path plus optional query string).
pub fn handle(url: &str, settings: &ServerSettings) -> Reply {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    if path != settings.route {
        return Reply::not_found();
    }

    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    let params = RenderParams::from_pairs(pairs.iter().map(|(k, v)| (k, v)));
    let config = RenderConfig::resolve(&params, &settings.defaults);
    let surface = Surface::resolve(params.surface.as_deref());
    let wants_json = pairs
        .iter()
        .find(|(k, _)| k == "format")
        .is_some_and(|(_, v)| v == "json");

    let result = if wants_json {
        SurfaceFrame::collect(&config, surface.height_fn())
            .to_json()
            .map(|json| Reply::ok(JSON_CONTENT_TYPE, json.into_bytes()))
    } else {
        let mut body = Vec::new();
        render_with(&config, surface.height_fn(), &mut body)
            .map(|_| Reply::ok(SVG_CONTENT_TYPE, body))
    };

    result.unwrap_or_else(|err| {
        log::error!("Render of {} failed: {}", surface, err);
        Reply::internal_error()
    })
}

/// Bind the listener and answer requests sequentially until the listener
/// shuts down.
pub fn serve(settings: &ServerSettings) -> Result<(), ServerError> {
    let server = Server::http(settings.bind.as_str()).map_err(|e| ServerError::Bind {
        addr: settings.bind.clone(),
        message: e.to_string(),
    })?;
    log::info!("Serving surfaces on http://{}{}", settings.bind, settings.route);

    for request in server.incoming_requests() {
        let reply = handle(request.url(), settings);
        log::debug!("{} {} -> {}", request.method(), request.url(), reply.status);
        if let Err(e) = request.respond(reply.into_response()) {
            log::warn!("Failed to send response: {}", e);
        }
    }
    Ok(())
}
