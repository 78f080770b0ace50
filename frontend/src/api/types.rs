use crate::config::UploadKind;
use crate::utils::validation::require;
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

fn flag_from_wire<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(flag)) => Ok(flag),
        Some(Value::Number(n)) => Ok(n.as_i64().map(|v| v != 0).unwrap_or(false)),
        Some(Value::String(s)) => Ok(matches!(s.trim(), "1" | "true" | "TRUE" | "True")),
        Some(other) => Err(serde::de::Error::custom(format!(
            "invalid flag value: {}",
            other
        ))),
    }
}

fn flag_to_wire<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*flag))
}

/// Generic acknowledgement returned by create/update/delete endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}

impl MutationResponse {
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub site_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub caption: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tagline: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub banner1: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub banner2: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub banner3: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl SiteSettings {
    pub fn banners(&self) -> [Option<&str>; 3] {
        [
            self.banner1.as_deref(),
            self.banner2.as_deref(),
            self.banner3.as_deref(),
        ]
    }
}

/// Title/content/image record shared by About Us, Founder and Our Story.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentSection {
    AboutUs,
    Founder,
    OurStory,
}

impl ContentSection {
    pub const ALL: [ContentSection; 3] = [
        ContentSection::AboutUs,
        ContentSection::Founder,
        ContentSection::OurStory,
    ];

    pub fn endpoint(self) -> &'static str {
        match self {
            ContentSection::AboutUs => "/about-us",
            ContentSection::Founder => "/founder",
            ContentSection::OurStory => "/our-story",
        }
    }

    pub fn upload_kind(self) -> UploadKind {
        match self {
            ContentSection::AboutUs => UploadKind::AboutUs,
            ContentSection::Founder => UploadKind::Founder,
            ContentSection::OurStory => UploadKind::OurStory,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentSection::AboutUs => "About Us",
            ContentSection::Founder => "Founder",
            ContentSection::OurStory => "Our Story",
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            ContentSection::AboutUs => "/about-us",
            ContentSection::Founder => "/founder",
            ContentSection::OurStory => "/our-story",
        }
    }
}

/// Platform of a social link. Names the form does not offer are kept
/// verbatim in `Other` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SocialPlatform {
    #[default]
    Facebook,
    Instagram,
    Twitter,
    LinkedIn,
    YouTube,
    TikTok,
    Pinterest,
    WhatsApp,
    Other(String),
}

impl SocialPlatform {
    /// Platforms an operator can pick in the form.
    pub const SELECTABLE: [SocialPlatform; 8] = [
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::Twitter,
        SocialPlatform::LinkedIn,
        SocialPlatform::YouTube,
        SocialPlatform::TikTok,
        SocialPlatform::Pinterest,
        SocialPlatform::WhatsApp,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::LinkedIn => "linkedin",
            SocialPlatform::YouTube => "youtube",
            SocialPlatform::TikTok => "tiktok",
            SocialPlatform::Pinterest => "pinterest",
            SocialPlatform::WhatsApp => "whatsapp",
            SocialPlatform::Other(name) => name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Twitter => "Twitter / X",
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::YouTube => "YouTube",
            SocialPlatform::TikTok => "TikTok",
            SocialPlatform::Pinterest => "Pinterest",
            SocialPlatform::WhatsApp => "WhatsApp",
            SocialPlatform::Other(name) => name,
        }
    }

    pub fn is_selectable(&self) -> bool {
        !matches!(self, SocialPlatform::Other(_))
    }

    /// Case-insensitive lookup; unknown names become `Other`, blank is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let known = Self::SELECTABLE
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(value));
        Some(known.unwrap_or_else(|| SocialPlatform::Other(value.to_string())))
    }
}

impl Serialize for SocialPlatform {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SocialPlatform {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(SocialPlatform::parse(&raw).unwrap_or(SocialPlatform::Other(raw)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: i64,
    pub platform: SocialPlatform,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinkPayload {
    pub platform: SocialPlatform,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfoPayload {
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
    #[serde(
        default,
        deserialize_with = "flag_from_wire",
        serialize_with = "flag_to_wire"
    )]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqPayload {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "flag_from_wire", serialize_with = "flag_to_wire")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivacyPolicy {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivacySubtopic {
    pub id: i64,
    pub policy_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivacySubtopicPayload {
    pub policy_id: i64,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSubtopic {
    pub id: i64,
    pub term_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSubtopicPayload {
    pub term_id: i64,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSubpoint {
    pub id: i64,
    pub subtopic_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub point: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSubpointPayload {
    pub subtopic_id: i64,
    pub point: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaregiverTerm {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subtopics: Vec<CaregiverSubtopic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaregiverSubtopic {
    pub id: i64,
    pub caregiver_term_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaregiverSubtopicPayload {
    pub caregiver_term_id: i64,
    pub title: String,
    pub content: String,
}

/// Title/content body shared by the top-level hierarchical resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitledContentPayload {
    pub title: String,
    pub content: String,
}

impl TitledContentPayload {
    /// Trimmed title and content, both required.
    pub fn from_input(title: &str, content: &str) -> Result<Self, ApiError> {
        require("Title", title)?;
        require("Content", content)?;
        Ok(Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "NOT_FOUND".to_string(),
            details: None,
        }
    }

    /// Builds an error from a non-2xx response body, preferring the server's own wording.
    pub fn http_status(status: u16, body: Option<&Value>) -> Self {
        let server_message = body.and_then(|body| {
            ["error", "message"]
                .iter()
                .filter_map(|key| body.get(*key).and_then(Value::as_str))
                .map(str::trim)
                .find(|msg| !msg.is_empty())
                .map(str::to_string)
        });
        let code = match status {
            400 | 422 => "VALIDATION_ERROR".to_string(),
            404 => "NOT_FOUND".to_string(),
            _ => format!("HTTP_{}", status),
        };
        Self {
            error: server_message
                .unwrap_or_else(|| format!("Request failed with status {}", status)),
            code,
            details: body.and_then(|body| body.get("errors").cloned()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code == "NOT_FOUND"
    }

    /// Flattens `details` into display lines. Accepts a list of strings or a
    /// field-to-messages map.
    pub fn detail_messages(&self) -> Vec<String> {
        match self.details.as_ref() {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Some(Value::Object(fields)) => fields
                .values()
                .flat_map(|messages| match messages {
                    Value::Array(items) => items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect::<Vec<_>>(),
                    Value::String(message) => vec![message.clone()],
                    _ => Vec::new(),
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for ContentSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn site_settings_tolerates_nulls_and_blank_images() {
        let settings: SiteSettings = serde_json::from_value(json!({
            "site_name": "Acme",
            "caption": null,
            "tagline": "t",
            "logo": "logo.png",
            "banner1": null,
            "banner2": "",
        }))
        .expect("settings");
        assert_eq!(settings.site_name, "Acme");
        assert_eq!(settings.caption, "");
        assert_eq!(settings.logo.as_deref(), Some("logo.png"));
        assert_eq!(settings.banners(), [None, None, None]);
        assert!(settings.id.is_none());
    }

    #[test]
    fn faq_flag_accepts_ints_strings_and_bools() {
        let from_int: Faq =
            serde_json::from_value(json!({"id": 1, "question": "Q", "answer": "A", "is_active": 1}))
                .expect("int");
        let from_str: Faq = serde_json::from_value(
            json!({"id": 2, "question": "Q", "answer": "A", "is_active": "0"}),
        )
        .expect("str");
        let from_bool: Faq = serde_json::from_value(
            json!({"id": 3, "question": "Q", "answer": "A", "is_active": true}),
        )
        .expect("bool");
        assert!(from_int.is_active);
        assert!(!from_str.is_active);
        assert!(from_bool.is_active);
    }

    #[test]
    fn faq_payload_serializes_flag_as_integer() {
        let payload = FaqPayload {
            question: "Q1".into(),
            answer: "A1".into(),
            is_active: true,
        };
        let value = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(value, json!({"question": "Q1", "answer": "A1", "is_active": 1}));
    }

    #[test]
    fn social_platform_decodes_any_case_and_keeps_unknown_names() {
        let links: Vec<SocialLink> = serde_json::from_value(json!([
            {"id": 1, "platform": "instagram", "url": "https://instagram.com/acme"},
            {"id": 2, "platform": "Facebook", "url": "https://facebook.com/acme"},
            {"id": 3, "platform": "mastodon", "url": "https://example.social/@acme"}
        ]))
        .expect("links");
        assert_eq!(links[0].platform, SocialPlatform::Instagram);
        assert_eq!(links[1].platform, SocialPlatform::Facebook);
        assert_eq!(links[2].platform, SocialPlatform::Other("mastodon".into()));
        assert_eq!(links[2].platform.label(), "mastodon");
        assert_eq!(
            serde_json::to_value(&links[2]).expect("encode")["platform"],
            json!("mastodon")
        );
        assert_eq!(SocialPlatform::parse("LinkedIn"), Some(SocialPlatform::LinkedIn));
        assert_eq!(SocialPlatform::parse("  "), None);
    }

    #[test]
    fn titled_content_requires_both_fields_and_trims() {
        let err = TitledContentPayload::from_input(" ", "Body").expect_err("title");
        assert_eq!(err.error, "Title is required.");
        let err = TitledContentPayload::from_input("Scope", "\n").expect_err("content");
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.error, "Content is required.");

        let ok = TitledContentPayload::from_input(" Scope ", " Applies to all ").expect("payload");
        assert_eq!(ok.title, "Scope");
        assert_eq!(ok.content, "Applies to all");
    }

    #[test]
    fn caregiver_term_defaults_missing_subtopics() {
        let term: CaregiverTerm =
            serde_json::from_value(json!({"id": 4, "title": "T", "content": "C", "subtopics": null}))
                .expect("term");
        assert!(term.subtopics.is_empty());
    }

    #[test]
    fn api_error_constructors_set_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert!(validation.details.is_none());

        assert_eq!(ApiError::unknown("x").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("x").code, "REQUEST_FAILED");
        assert!(ApiError::not_found("x").is_not_found());
        assert_eq!(ApiError::unknown("boom").to_string(), "boom");
    }

    #[test]
    fn http_status_prefers_server_message() {
        let body = json!({"message": "Title is required", "errors": ["title"]});
        let err = ApiError::http_status(422, Some(&body));
        assert_eq!(err.error, "Title is required");
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.details, Some(json!(["title"])));

        let err = ApiError::http_status(500, None);
        assert_eq!(err.error, "Request failed with status 500");
        assert_eq!(err.code, "HTTP_500");
    }

    #[test]
    fn mutation_message_falls_back_when_blank() {
        let response = MutationResponse {
            message: Some("  ".into()),
            id: Some(3),
        };
        assert_eq!(response.message_or("Saved."), "Saved.");
        let response = MutationResponse {
            message: Some("FAQ created".into()),
            id: None,
        };
        assert_eq!(response.message_or("Saved."), "FAQ created");
    }

    #[test]
    fn validation_details_flatten_lists_and_field_maps() {
        let err = ApiError::http_status(
            422,
            Some(&json!({
                "message": "The given data was invalid.",
                "errors": {"url": ["The url field is required."], "platform": "Unknown platform"}
            })),
        );
        let mut details = err.detail_messages();
        details.sort();
        assert_eq!(
            details,
            vec!["The url field is required.".to_string(), "Unknown platform".to_string()]
        );

        let err = ApiError::http_status(400, Some(&json!({"errors": ["Title is required"]})));
        assert_eq!(err.detail_messages(), vec!["Title is required".to_string()]);
        assert!(ApiError::unknown("x").detail_messages().is_empty());
    }
}
