use leptos::*;

pub const MISSING_IMAGE: &str = "—";

/// Thumbnail of an uploaded image, or `—` when there is none.
#[component]
pub fn ImagePreview(
    #[prop(into)] src: MaybeSignal<Option<String>>,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let class = class.unwrap_or_else(|| "h-24 w-auto rounded border border-border object-contain".into());
    move || match src.get().filter(|url| !url.trim().is_empty()) {
        Some(url) => view! { <img src=url alt=alt.clone() class=class.clone() /> }.into_view(),
        None => view! {
            <span class="inline-block text-fg-muted" title=format!("No {}", alt.to_lowercase())>
                {MISSING_IMAGE}
            </span>
        }
        .into_view(),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_img_when_present() {
        let html = render_to_string(move || {
            view! { <ImagePreview src=Some("http://cdn.test/logo.png".to_string()) alt="Logo" /> }
        });
        assert!(html.contains("<img"));
        assert!(html.contains("http://cdn.test/logo.png"));
    }

    #[test]
    fn renders_placeholder_when_missing_or_blank() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <ImagePreview src={None::<String>} alt="Banner 1" />
                    <ImagePreview src=Some("  ".to_string()) alt="Banner 2" />
                </div>
            }
        });
        assert!(!html.contains("<img"));
        assert_eq!(html.matches(MISSING_IMAGE).count(), 2);
    }
}
