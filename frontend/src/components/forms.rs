use leptos::*;
use web_sys::File;

use crate::components::image::ImagePreview;
use crate::utils::{object_url, revoke_object_url, selected_file};

const LABEL_CLASS: &str = "block text-sm font-medium text-fg-muted mb-1";
const CONTROL_CLASS: &str = "w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus disabled:opacity-50";

fn label_text(label: &str, required: bool) -> String {
    if required {
        format!("{} *", label)
    } else {
        label.to_string()
    }
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] placeholder: String,
    /// `text` unless given, e.g. `email`, `url` or `tel`.
    #[prop(optional, into)]
    input_type: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class=LABEL_CLASS>{label_text(&label, required)}</span>
            <input
                type=input_type.unwrap_or_else(|| "text".into())
                class=CONTROL_CLASS
                placeholder=placeholder
                required=required
                disabled=move || disabled.get()
                value=value.get_untracked()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class=LABEL_CLASS>{label_text(&label, required)}</span>
            <textarea
                class=CONTROL_CLASS
                rows=rows.unwrap_or(5)
                required=required
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            >
                {value.get_untracked()}
            </textarea>
        </label>
    }
}

/// `<select>` over `(value, label)` pairs.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    options: Vec<(String, String)>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class=LABEL_CLASS>{label}</span>
            <select
                class=CONTROL_CLASS
                disabled=move || disabled.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        let selected_value = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == selected_value
                            >
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    checked: RwSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-sm text-fg">
            <input
                type="checkbox"
                class="h-4 w-4 rounded border-form-control-border"
                disabled=move || disabled.get()
                checked=checked.get_untracked()
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}

/// File input for an image. Shows the newly chosen file through an object
/// URL, otherwise the image currently stored on the server.
#[component]
pub fn ImageField(
    #[prop(into)] label: String,
    selected: RwSignal<Option<File>>,
    #[prop(optional, into)] current_url: MaybeSignal<Option<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let preview = create_rw_signal(None::<String>);

    let replace_preview = move |next: Option<String>| {
        if let Some(previous) = preview.get_untracked() {
            revoke_object_url(&previous);
        }
        preview.set(next);
    };

    on_cleanup(move || {
        if let Some(previous) = preview.try_get_untracked().flatten() {
            revoke_object_url(&previous);
        }
    });

    let on_change = move |ev: ev::Event| {
        let file = selected_file(&ev);
        replace_preview(file.as_ref().and_then(object_url));
        selected.set(file);
    };

    let shown = Signal::derive(move || preview.get().or_else(|| current_url.get()));
    let alt = label.clone();

    view! {
        <div class="space-y-2">
            <span class=LABEL_CLASS>{label}</span>
            <ImagePreview src=shown alt=alt />
            <input
                type="file"
                accept="image/*"
                class="block text-sm text-fg-muted"
                disabled=move || disabled.get()
                on:change=on_change
            />
            <Show when=move || selected.get().is_some()>
                <button
                    type="button"
                    class="text-xs text-fg-muted underline"
                    on:click=move |_| {
                        replace_preview(None);
                        selected.set(None);
                    }
                >
                    {"Keep current image"}
                </button>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn text_fields_render_label_and_value() {
        let html = render_to_string(move || {
            let name = create_rw_signal("Acme".to_string());
            let body = create_rw_signal("Hello".to_string());
            view! {
                <div>
                    <TextField label="Site name" value=name required=true />
                    <TextAreaField label="Content" value=body />
                </div>
            }
        });
        assert!(html.contains("Site name *"));
        assert!(html.contains("Content"));
        assert!(html.contains("Hello"));
    }

    #[test]
    fn select_marks_current_option() {
        let html = render_to_string(move || {
            let value = create_rw_signal("instagram".to_string());
            view! {
                <SelectField
                    label="Platform"
                    value=value
                    options=vec![
                        ("facebook".to_string(), "Facebook".to_string()),
                        ("instagram".to_string(), "Instagram".to_string()),
                    ]
                />
            }
        });
        assert!(html.contains("Facebook"));
        assert!(html.contains("Instagram"));
        assert!(html.contains("selected"));
    }

    #[test]
    fn image_field_shows_current_image_or_placeholder() {
        let html = render_to_string(move || {
            let selected = create_rw_signal(None::<File>);
            view! {
                <div>
                    <ImageField
                        label="Logo"
                        selected=selected
                        current_url=Some("http://cdn.test/uploads/settings/logo.png".to_string())
                    />
                    <ImageField label="Banner 1" selected=selected />
                </div>
            }
        });
        assert!(html.contains("http://cdn.test/uploads/settings/logo.png"));
        assert!(html.contains(crate::components::image::MISSING_IMAGE));
        assert!(!html.contains("Keep current image"));
    }
}
