use crate::{
    content::{SITE_URL, SOCIAL_IMAGE},
    i18n::{Catalog, I18nError, Locale},
    seo::{render_document, SeoInput},
};
use axum::{
    extract::State,
    handler::Handler,
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::{
    cmp::Ordering,
    fs,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use thiserror::Error;
use tower_http::services::ServeDir;
use url::Url;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_BASE_PATH: &str = "/";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const INDEX_FILE: &str = "index.html";
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to read index template `{}`: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Catalog(#[from] I18nError),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    port: u16,
    dist_dir: PathBuf,
    base_path: String,
    /// Public address of the site, used for canonical and Open Graph URLs.
    site_url: String,
    log_level: LogLevel,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = parse_env_non_empty_string("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let dist_dir = parse_env_non_empty_string("SITE_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let base_path = normalize_base_path(
            &parse_env_non_empty_string("SITE_BASE_PATH")
                .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string()),
        );
        let site_url = parse_env_http_url("SITE_URL")
            .map(String::from)
            .unwrap_or_else(|| SITE_URL.to_string());
        let log_level = parse_env_non_empty_string("LOG_LEVEL")
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            base_path,
            site_url,
            log_level,
        }
    }

    fn index_path(&self) -> PathBuf {
        self.dist_dir.join(INDEX_FILE)
    }
}

#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    index_template: Arc<str>,
    catalogs: Arc<Catalogs>,
}

/// One parsed catalog per supported locale.
#[derive(Debug)]
struct Catalogs {
    en: Catalog,
    fr: Catalog,
}

impl Catalogs {
    fn bundled() -> Result<Self, I18nError> {
        Ok(Self {
            en: Catalog::bundled(Locale::En)?,
            fr: Catalog::bundled(Locale::Fr)?,
        })
    }

    fn get(&self, locale: Locale) -> &Catalog {
        match locale {
            Locale::En => &self.en,
            Locale::Fr => &self.fr,
        }
    }
}

impl AppState {
    pub fn load(config: ServerConfig) -> Result<Self, ServerError> {
        let path = config.index_path();
        let index_template =
            fs::read_to_string(&path).map_err(|source| ServerError::Template { path, source })?;

        Ok(Self {
            config: Arc::new(config),
            index_template: Arc::from(index_template),
            catalogs: Arc::new(Catalogs::bundled()?),
        })
    }
}

pub async fn run() -> Result<(), ServerError> {
    let state = AppState::load(ServerConfig::from_env())?;
    let bind_address = format!("0.0.0.0:{}", state.config.port);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|source| ServerError::Bind {
            address: bind_address.clone(),
            source,
        })?;

    log_event(
        &state.config,
        LogLevel::Info,
        "server_started",
        serde_json::json!({
            "address": bind_address,
            "distDir": state.config.dist_dir.display().to_string(),
            "basePath": state.config.base_path,
            "siteUrl": state.config.site_url,
        }),
    );

    axum::serve(listener, router(state))
        .await
        .map_err(ServerError::Serve)
}

pub fn router(state: AppState) -> Router {
    let base_path = state.config.base_path.clone();
    let static_files = ServeDir::new(&state.config.dist_dir)
        .append_index_html_on_directories(false)
        .not_found_service(not_found.with_state(state.clone()));

    let site = Router::new()
        .route("/", get(get_index))
        .route("/index.html", get(get_index))
        .fallback_service(static_files);

    // A nested "/" only matches the bare prefix; Trunk links to the slash form.
    let app = if base_path == DEFAULT_BASE_PATH {
        site
    } else {
        Router::new()
            .route(&format!("{base_path}/"), get(get_index))
            .nest(&base_path, site)
            .fallback(not_found)
    };

    app.with_state(state)
}

async fn get_index(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    render_index(&state, StatusCode::OK, &uri, &headers)
}

async fn not_found(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    render_index(&state, StatusCode::NOT_FOUND, &uri, &headers)
}

fn render_index(
    state: &AppState,
    status: StatusCode,
    uri: &Uri,
    headers: &HeaderMap,
) -> Response {
    let request_id = resolve_request_id(headers);
    let requested_lang = requested_lang(uri);
    let locale = negotiate_locale(requested_lang.as_deref(), headers);

    let input = SeoInput::from_catalog(
        state.catalogs.get(locale),
        &state.config.site_url,
        SOCIAL_IMAGE,
    );
    let body = render_document(&state.index_template, &input);

    log_event(
        &state.config,
        LogLevel::Debug,
        "index_rendered",
        serde_json::json!({
            "requestId": request_id,
            "path": uri.path(),
            "locale": locale.as_str(),
            "status": status.as_u16(),
        }),
    );

    let mut response_headers = HeaderMap::new();
    response_headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response_headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    response_headers.insert(header::VARY, HeaderValue::from_static("Accept-Language"));
    response_headers.insert(
        header::CONTENT_LANGUAGE,
        HeaderValue::from_static(locale.as_str()),
    );

    response_with_request_id(status, response_headers, body, &request_id)
}

/// First `lang` query value; repeated parameters are ignored.
fn requested_lang(uri: &Uri) -> Option<String> {
    let query = uri.query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == "lang")
        .map(|(_, value)| value.into_owned())
}

/// `?lang=` beats `Accept-Language`; anything unsupported ends up English.
fn negotiate_locale(requested: Option<&str>, headers: &HeaderMap) -> Locale {
    requested
        .and_then(Locale::parse)
        .or_else(|| {
            headers
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|value| value.to_str().ok())
                .and_then(Locale::from_accept_language)
        })
        .unwrap_or_default()
}

/// Leading slash, no trailing slash, `/` for the root.
fn normalize_base_path(raw: &str) -> String {
    let segments: Vec<&str> = raw
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        DEFAULT_BASE_PATH.to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_env_http_url(name: &str) -> Option<Url> {
    parse_http_url(&parse_env_non_empty_string(name)?)
}

fn parse_http_url(value: &str) -> Option<Url> {
    let parsed = Url::parse(value).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn response_with_request_id(
    status: StatusCode,
    mut headers: HeaderMap,
    payload: impl IntoResponse,
    request_id: &str,
) -> Response {
    if let Ok(request_id_header) = HeaderValue::from_str(request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }
    (status, headers, payload).into_response()
}

fn log_event(config: &ServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}
