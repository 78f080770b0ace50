use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Characters escaped inside a single path segment of an upload URL.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "UPLOAD_BASE_URL")]
    pub upload_base_url: Option<String>,
}

impl RuntimeConfig {
    fn is_empty(&self) -> bool {
        self.api_base_url.is_none() && self.upload_base_url.is_none()
    }

    /// Fills unset keys from `fallback`.
    fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            upload_base_url: self.upload_base_url.or(fallback.upload_base_url),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub upload_base_url: String,
}

/// Where an uploaded image lives on the server, relative to the upload base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Settings,
    AboutUs,
    Founder,
    OurStory,
}

impl UploadKind {
    pub fn prefix(self) -> &'static str {
        match self {
            UploadKind::Settings => "settings",
            UploadKind::AboutUs => "about",
            UploadKind::Founder => "founder",
            UploadKind::OurStory => "story",
        }
    }
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

fn read_global(name: &str) -> Option<RuntimeConfig> {
    // Expect optional global object: window.<name> = { API_BASE_URL: "...", UPLOAD_BASE_URL: "..." }
    let w = window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let read_key = |upper: &str, lower: &str| {
        js_sys::Reflect::get(&any, &upper.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&any, &lower.into()).ok())
            .and_then(|v| v.as_string())
    };
    let cfg = RuntimeConfig {
        api_base_url: read_key("API_BASE_URL", "api_base_url"),
        upload_base_url: read_key("UPLOAD_BASE_URL", "upload_base_url"),
    };
    (!cfg.is_empty()).then_some(cfg)
}

fn snapshot_from_globals() -> Option<RuntimeConfig> {
    match (
        read_global("__CONTENT_ADMIN_ENV"),
        read_global("__CONTENT_ADMIN_CONFIG"),
    ) {
        (Some(env), Some(cfg)) => Some(env.or(cfg)),
        (env, cfg) => env.or(cfg),
    }
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn build_time_config() -> RuntimeConfig {
    RuntimeConfig {
        api_base_url: option_env!("CONTENT_ADMIN_API_BASE_URL").map(str::to_string),
        upload_base_url: option_env!("CONTENT_ADMIN_UPLOAD_BASE_URL").map(str::to_string),
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
}

/// `http://host:3000/api` -> `http://host:3000/uploads`.
pub fn default_upload_base(api_base_url: &str) -> String {
    let trimmed = api_base_url.trim_end_matches('/');
    let root = trimmed.strip_suffix("/api").unwrap_or(trimmed);
    format!("{}/uploads", root)
}

pub fn resolve(cfg: RuntimeConfig) -> ResolvedConfig {
    let api_base_url =
        clean(cfg.api_base_url).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let upload_base_url =
        clean(cfg.upload_base_url).unwrap_or_else(|| default_upload_base(&api_base_url));
    ResolvedConfig {
        api_base_url,
        upload_base_url,
    }
}

async fn await_config() -> ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    let mut cfg = snapshot_from_globals().unwrap_or_default();
    if cfg.api_base_url.is_none() {
        if let Some(fetched) = fetch_runtime_config().await {
            cfg = cfg.or(fetched);
        }
    }
    let resolved = resolve(cfg.or(build_time_config()));
    log::info!("API base URL: {}", resolved.api_base_url);
    let _ = RESOLVED.set(resolved.clone());
    RESOLVED.get().cloned().unwrap_or(resolved)
}

pub async fn await_api_base_url() -> String {
    await_config().await.api_base_url
}

/// Upload base known so far; safe to call before `init` finishes.
pub fn upload_base_url() -> String {
    RESOLVED
        .get()
        .map(|cfg| cfg.upload_base_url.clone())
        .unwrap_or_else(|| resolve(build_time_config()).upload_base_url)
}

/// Turns a stored image reference into a displayable URL.
pub fn resolve_upload_url(upload_base: &str, kind: UploadKind, reference: &str) -> String {
    let reference = reference.trim();
    if reference.starts_with("http://")
        || reference.starts_with("https://")
        || reference.starts_with("blob:")
        || reference.starts_with("data:")
    {
        return reference.to_string();
    }
    let file_name = reference.rsplit('/').next().unwrap_or(reference);
    format!(
        "{}/{}/{}",
        upload_base.trim_end_matches('/'),
        kind.prefix(),
        utf8_percent_encode(file_name, SEGMENT)
    )
}

pub fn image_url(kind: UploadKind, reference: &str) -> String {
    resolve_upload_url(&upload_base_url(), kind, reference)
}

pub async fn init() {
    let _ = await_config().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_uses_defaults_when_unset() {
        let resolved = resolve(RuntimeConfig::default());
        assert_eq!(resolved.api_base_url, "http://localhost:3000/api");
        assert_eq!(resolved.upload_base_url, "http://localhost:3000/uploads");
    }

    #[test]
    fn resolve_trims_trailing_slashes_and_honours_upload_override() {
        let resolved = resolve(RuntimeConfig {
            api_base_url: Some(" https://cms.example.com/api/ ".into()),
            upload_base_url: Some("https://cdn.example.com/files/".into()),
        });
        assert_eq!(resolved.api_base_url, "https://cms.example.com/api");
        assert_eq!(resolved.upload_base_url, "https://cdn.example.com/files");
    }

    #[test]
    fn default_upload_base_keeps_non_api_roots() {
        assert_eq!(
            default_upload_base("https://example.com/backend"),
            "https://example.com/backend/uploads"
        );
    }

    #[test]
    fn env_config_takes_precedence_per_key() {
        let env = RuntimeConfig {
            api_base_url: Some("https://a".into()),
            upload_base_url: None,
        };
        let file = RuntimeConfig {
            api_base_url: Some("https://b".into()),
            upload_base_url: Some("https://b/uploads".into()),
        };
        let merged = env.or(file);
        assert_eq!(merged.api_base_url.as_deref(), Some("https://a"));
        assert_eq!(merged.upload_base_url.as_deref(), Some("https://b/uploads"));
    }

    #[test]
    fn runtime_config_reads_upper_case_keys() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"API_BASE_URL": "https://x/api"}"#).expect("config");
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://x/api"));
    }

    #[test]
    fn upload_urls_are_prefixed_per_resource() {
        let base = "https://example.com/uploads";
        assert_eq!(
            resolve_upload_url(base, UploadKind::Settings, "logo.png"),
            "https://example.com/uploads/settings/logo.png"
        );
        assert_eq!(
            resolve_upload_url(base, UploadKind::OurStory, "team photo.jpg"),
            "https://example.com/uploads/story/team%20photo.jpg"
        );
    }

    #[test]
    fn absolute_references_pass_through() {
        let base = "https://example.com/uploads";
        assert_eq!(
            resolve_upload_url(base, UploadKind::AboutUs, "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn nested_references_keep_only_the_file_name() {
        assert_eq!(
            resolve_upload_url("https://h/uploads", UploadKind::Founder, "founder/jane.png"),
            "https://h/uploads/founder/jane.png"
        );
    }
}
