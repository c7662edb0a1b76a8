//! Schema-driven form control
//!
//! Renders one [`FieldSpec`] as the matching input and shows its validation
//! message underneath as helper text.

use dioxus::prelude::*;
use stepform_domain::{CountryCode, FieldKind, FieldSpec, FormValue};

#[derive(Props, Clone, PartialEq)]
pub struct FormFieldProps {
    pub field: FieldSpec,
    pub value: FormValue,
    #[props(default)]
    pub error: Option<String>,
    pub on_change: EventHandler<FormValue>,
}

#[component]
pub fn FormField(props: FormFieldProps) -> Element {
    let field = props.field.clone();
    let on_change = props.on_change;
    let has_error = props.error.is_some();
    let text = props.value.as_text().unwrap_or_default().to_string();
    let label = if field.is_required() && field.kind != FieldKind::Checkbox {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };

    let control = match field.kind {
        FieldKind::Text | FieldKind::Email | FieldKind::Password => {
            let input_type = match field.kind {
                FieldKind::Email => "email",
                FieldKind::Password => "password",
                _ => "text",
            };
            rsx! {
                input {
                    id: field.name,
                    class: "field-input",
                    r#type: input_type,
                    value: "{text}",
                    oninput: move |e| on_change.call(FormValue::Text(e.value())),
                }
            }
        }
        FieldKind::MultiLine => rsx! {
            textarea {
                id: field.name,
                class: "field-input field-textarea",
                rows: "3",
                value: "{text}",
                oninput: move |e| on_change.call(FormValue::Text(e.value())),
            }
        },
        FieldKind::Select => rsx! {
            select {
                id: field.name,
                class: "field-input",
                value: "{text}",
                onchange: move |e| on_change.call(FormValue::Text(e.value())),
                option { value: "", disabled: true, selected: text.is_empty(), "Select a country" }
                for code in CountryCode::all() {
                    option {
                        key: "{code.code()}",
                        value: code.code(),
                        selected: text == code.code(),
                        "{code.flag()} {code.display_name()}"
                    }
                }
            }
        },
        FieldKind::Checkbox => {
            let checked = props.value.as_flag().unwrap_or(false);
            return rsx! {
                div {
                    class: if has_error { "field field-checkbox field-error" } else { "field field-checkbox" },
                    label {
                        input {
                            id: field.name,
                            r#type: "checkbox",
                            checked: checked,
                            onchange: move |e| on_change.call(FormValue::Flag(e.checked())),
                        }
                        span { "{label}" }
                    }
                    if let Some(ref err) = props.error {
                        p { class: "field-helper", "{err}" }
                    }
                }
            };
        }
    };

    rsx! {
        div {
            class: if has_error { "field field-error" } else { "field" },
            label { r#for: field.name, class: "field-label", "{label}" }
            {control}
            if let Some(ref err) = props.error {
                p { class: "field-helper", "{err}" }
            }
        }
    }
}
