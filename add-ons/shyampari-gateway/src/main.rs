//! Axum-based chat gateway for the Shyampari Edutech chatbot. Config-driven via GatewayConfig.

mod error;
mod handlers;

use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use shyampari_core::{
    grok_api_key_from_env, ChatService, CompletionProvider, GatewayConfig, KnowledgeError, KnowledgeStore,
    ENV_GROK_API_KEY,
};
use shyampari_skills::{GrokClient, GrokClientConfig};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<GatewayConfig>,
    pub(crate) chat: Arc<ChatService>,
    /// Whether `GROK_API_KEY` was set at startup.
    pub(crate) credential_present: bool,
}

fn listen_addr(config: &GatewayConfig) -> Result<SocketAddr, String> {
    format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| format!("invalid listen address {}:{}: {}", config.host, config.port, e))
}

/// Pre-flight check: config, knowledge file, credential, port.
fn run_verify() -> Result<(), String> {
    let config = GatewayConfig::load().map_err(|e| format!("Config load failed: {}", e))?;
    println!("Config OK ({} on {}:{})", config.app_name, config.host, config.port);

    print!("Checking knowledge base {}... ", config.knowledge_path);
    match KnowledgeStore::try_load(&config.knowledge_path) {
        Ok(_) => println!("OK"),
        Err(KnowledgeError::NotFound(_)) => println!("not found (built-in facts will be used)"),
        Err(e) => println!("unreadable: {} (built-in facts will be used)", e),
    }

    print!("Checking {}... ", ENV_GROK_API_KEY);
    if grok_api_key_from_env().is_some() {
        println!("present (remote model enabled)");
    } else {
        println!("missing (fallback responses only)");
    }

    let addr = listen_addr(&config)?;
    print!("Checking {}... ", addr);
    match std::net::TcpListener::bind(addr) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => return Err(format!("Port {} BLOCKED: {}", config.port, e)),
    }

    println!("\n✅ SUCCESS: Ready to start gateway.");
    Ok(())
}

/// Builds the remote client when a credential is present. Absence is a supported mode, not an error.
fn build_provider(config: &GatewayConfig, api_key: Option<String>) -> Option<Arc<dyn CompletionProvider>> {
    let Some(key) = api_key else {
        tracing::warn!("{} not found, serving fallback responses only", ENV_GROK_API_KEY);
        return None;
    };
    tracing::info!("Grok API key found, initializing...");
    match GrokClient::new(GrokClientConfig::from_settings(&config.grok, key)) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize Grok client, serving fallback responses only");
            None
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[shyampari-gateway] .env not loaded: {} (using system environment)", e);
    }

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("❌ PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match GatewayConfig::load() {
        Ok(c) => Arc::new(c),
        Err(e) => {
            tracing::error!("Config load failed: {}", e);
            std::process::exit(1);
        }
    };

    let knowledge = Arc::new(KnowledgeStore::load_or_default(Path::new(&config.knowledge_path)));
    let api_key = grok_api_key_from_env();
    let credential_present = api_key.is_some();
    let provider = build_provider(&config, api_key);
    let chat = Arc::new(ChatService::new(knowledge, provider));

    let app = build_app(AppState {
        config: Arc::clone(&config),
        chat,
        credential_present,
    });

    let addr = match listen_addr(&config) {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("{} listening on {}", config.app_name, addr);
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// CORS: explicit origin list when configured, otherwise mirror the request origin.
/// Credentials are allowed in both cases, so wildcards are never used.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    if allowed_origins.is_empty() {
        return cors.allow_origin(AllowOrigin::mirror_request());
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o.trim()) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

fn build_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        .route("/", get(handlers::status::root))
        .route("/chat", post(handlers::chat::chat))
        .route("/health", get(handlers::status::health))
        .route("/test-grok", get(handlers::status::test_grok))
        .with_state(state)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use shyampari_core::{fallback, CompletionError, GrokSettings};
    use tower::ServiceExt;

    enum Reply {
        Text(&'static str),
        Fail,
        Panic,
    }

    struct StubProvider(Reply);

    #[async_trait::async_trait]
    impl CompletionProvider for StubProvider {
        fn model(&self) -> &str {
            "grok-beta"
        }

        async fn try_complete(&self, _system: &str, _prompt: &str) -> Result<String, CompletionError> {
            match self.0 {
                Reply::Text(t) => Ok(t.to_string()),
                Reply::Fail => Err(CompletionError::HttpStatus {
                    status: 500,
                    body: "upstream down".to_string(),
                }),
                Reply::Panic => panic!("provider exploded"),
            }
        }
    }

    fn test_config() -> GatewayConfig {
        GatewayConfig {
            app_name: "Shyampari Edutech Chatbot".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8000,
            knowledge_path: "data.json".to_string(),
            cors_allowed_origins: Vec::new(),
            grok: GrokSettings::default(),
        }
    }

    fn test_app(provider: Option<StubProvider>) -> Router {
        let credential_present = provider.is_some();
        let provider = provider.map(|p| Arc::new(p) as Arc<dyn CompletionProvider>);
        build_app(AppState {
            config: Arc::new(test_config()),
            chat: Arc::new(ChatService::new(Arc::new(KnowledgeStore::built_in()), provider)),
            credential_present,
        })
    }

    fn chat_request(message: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::json!({ "message": message }).to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(res: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_chat_greeting_without_credential() {
        let res = test_app(None).oneshot(chat_request("Hi there")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = json_body(res).await;
        assert_eq!(json["using_ai"], false);
        assert_eq!(json["response"], fallback::GREETING_RESPONSE);
        let ts = json["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[tokio::test]
    async fn test_chat_demo_fee_without_credential() {
        let res = test_app(None).oneshot(chat_request("What is the demo fee?")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = json_body(res).await;
        assert_eq!(json["using_ai"], false);
        let text = json["response"].as_str().unwrap();
        assert!(text.contains("₹500"));
        assert!(text.contains("negotiable"));
    }

    #[tokio::test]
    async fn test_chat_empty_message_is_bad_request() {
        for message in ["", "   \n"] {
            let res = test_app(None).oneshot(chat_request(message)).await.unwrap();
            assert_eq!(res.status(), StatusCode::BAD_REQUEST);
            let json = json_body(res).await;
            assert_eq!(json["detail"], "Message cannot be empty");
            assert!(json.get("response").is_none());
        }
    }

    #[tokio::test]
    async fn test_chat_uses_remote_answer() {
        let app = test_app(Some(StubProvider(Reply::Text("Yes, we cover IGCSE chemistry."))));
        let res = app.oneshot(chat_request("Do you cover IGCSE chemistry?")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = json_body(res).await;
        assert_eq!(json["using_ai"], true);
        assert_eq!(json["response"], "Yes, we cover IGCSE chemistry.");
    }

    #[tokio::test]
    async fn test_chat_upstream_failure_matches_fallback_shape() {
        let failing = json_body(
            test_app(Some(StubProvider(Reply::Fail)))
                .oneshot(chat_request("Hi there"))
                .await
                .unwrap(),
        )
        .await;
        let keyless = json_body(test_app(None).oneshot(chat_request("Hi there")).await.unwrap()).await;
        assert_eq!(failing["using_ai"], false);
        assert_eq!(failing["response"], keyless["response"]);
    }

    #[tokio::test]
    async fn test_chat_panic_becomes_generic_500() {
        let app = test_app(Some(StubProvider(Reply::Panic)));
        let res = app.oneshot(chat_request("Hi there")).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(res).await;
        assert_eq!(json["detail"], "Internal server error");
    }

    #[tokio::test]
    async fn test_health_reports_fallback_mode() {
        let res = test_app(None).oneshot(get_request("/health")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = json_body(res).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["grok_available"], false);
        assert_eq!(json["api_key_present"], false);
        assert_eq!(json["knowledge_base_loaded"], true);
        assert_eq!(json["knowledge_base_source"], "built-in");
        assert!(json["grok_model"].is_null());
        assert_eq!(json["version"], "1.0.0");
    }

    #[tokio::test]
    async fn test_health_reports_remote_mode() {
        let res = test_app(Some(StubProvider(Reply::Text("ok"))))
            .oneshot(get_request("/health"))
            .await
            .unwrap();
        let json = json_body(res).await;
        assert_eq!(json["grok_available"], true);
        assert_eq!(json["api_key_present"], true);
        assert_eq!(json["grok_model"], "grok-beta");
    }

    #[tokio::test]
    async fn test_root_lists_endpoints() {
        let res = test_app(None).oneshot(get_request("/")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = json_body(res).await;
        assert_eq!(json["message"], "Shyampari Edutech Chatbot API");
        assert_eq!(json["ai_status"], "fallback");
        assert_eq!(json["endpoints"]["/chat"], "POST - Send chat messages");
        assert!(json["endpoints"]["/health"].is_string());
        assert!(json["endpoints"]["/test-grok"].is_string());
    }

    #[tokio::test]
    async fn test_grok_probe_outcomes() {
        let json = json_body(test_app(None).oneshot(get_request("/test-grok")).await.unwrap()).await;
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "No API key found");

        let json = json_body(
            test_app(Some(StubProvider(Reply::Text("Grok is working!"))))
                .oneshot(get_request("/test-grok"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(json["status"], "success");
        assert_eq!(json["response"], "Grok is working!");
        assert_eq!(json["model"], "grok-beta");

        let json = json_body(
            test_app(Some(StubProvider(Reply::Fail)))
                .oneshot(get_request("/test-grok"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(json["status"], "error");
        assert!(json["error"].as_str().unwrap().contains("500"));
    }

    #[tokio::test]
    async fn test_cors_preflight_mirrors_origin() {
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/chat")
            .header("origin", "http://localhost:3000")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .unwrap();
        let res = test_app(None).oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let headers = res.headers();
        assert_eq!(headers["access-control-allow-origin"], "http://localhost:3000");
        assert_eq!(headers["access-control-allow-credentials"], "true");
    }

    #[test]
    fn test_cors_layer_accepts_explicit_origins() {
        // Invalid header values are skipped rather than panicking.
        let _ = cors_layer(&["https://www.shyampariedutech.com".to_string(), "bad\norigin".to_string()]);
    }

    #[test]
    fn test_listen_addr_rejects_garbage_host() {
        let mut config = test_config();
        assert!(listen_addr(&config).is_ok());
        config.host = "not a host".to_string();
        assert!(listen_addr(&config).is_err());
    }
}
