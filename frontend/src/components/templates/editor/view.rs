//! View rendering for the template editor component.
//!
//! Layout: a toolbar (save, dirty dot), one tab per language, then the
//! editor column (textarea with the `@` picker under it) next to the
//! variables list, and below them the live preview and the test-send form.
//! Arabic panes are rendered `dir="rtl"`.

use common::model::language::Language;
use common::model::template::MessageTemplate;
use common::model::variable::VariableDescriptor;
use common::templates::{render, unknown_placeholders, PickerKey, PickerState};
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::api::Remote;

use super::helpers::selection_start;
use super::messages::Msg;
use super::state::TemplateEditorComponent;

pub fn view(component: &TemplateEditorComponent, ctx: &Context<TemplateEditorComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="template-editor-root">
            { build_toolbar(component, ctx) }
            { build_tab_bar(component, link) }
            {
                match &component.template {
                    Remote::Loading => html! { <p class="muted">{"Loading template…"}</p> },
                    Remote::Failed(err) => html! {
                        <div class="banner no_links_at_all">
                            <p>{ format!("Could not load the template: {}", err) }</p>
                            <button onclick={link.callback(|_| Msg::Reload)}>{"Retry"}</button>
                        </div>
                    },
                    Remote::Loaded(template) => build_body(component, template, link),
                }
            }
        </div>
    }
}

fn build_toolbar(component: &TemplateEditorComponent, ctx: &Context<TemplateEditorComponent>) -> Html {
    let link = ctx.link();
    let save_label = if component.saving { "Saving…" } else { "Save" };
    html! {
        <div class="icon-toolbar">
            <strong>{ ctx.props().template_type.to_string() }</strong>
            {
                if component.is_dirty() {
                    html! {
                        <span
                            title="Unsaved changes"
                            style="display:inline-block; width:8px; height:8px; margin:0 6px; background:#e53935; border-radius:50%;"
                        />
                    }
                } else {
                    html! {}
                }
            }
            { icon_button("save", save_label, link.callback(|_| Msg::Save), component.saving) }
        </div>
    }
}

fn build_tab_bar(component: &TemplateEditorComponent, link: &Scope<TemplateEditorComponent>) -> Html {
    html! {
        <div class="tab-bar">
            {
                for Language::ALL.iter().map(|&language| {
                    let label = match language {
                        Language::Ar => "العربية",
                        Language::En => "English",
                    };
                    html! {
                        <button
                            class={classes!("tab-btn", (component.language == language).then_some("active"))}
                            onclick={link.callback(move |_| Msg::SetLanguage(language))}
                        >
                            { label }
                        </button>
                    }
                })
            }
        </div>
    }
}

fn build_body(
    component: &TemplateEditorComponent,
    template: &MessageTemplate,
    link: &Scope<TemplateEditorComponent>,
) -> Html {
    let language = component.language;
    let content = template.content(language);

    html! {
        <>
            <div style="display:flex; gap:16px; align-items:flex-start;">
                <div style="flex:2; position:relative;">
                    { build_textarea(component, content, link) }
                    { build_picker(component, link) }
                </div>
                <div style="flex:1;">
                    { build_variables_list(component, link) }
                </div>
            </div>
            { build_preview(content, language) }
            { build_test_send(component, link) }
        </>
    }
}

fn build_textarea(
    component: &TemplateEditorComponent,
    content: &str,
    link: &Scope<TemplateEditorComponent>,
) -> Html {
    let picker = component.picker;
    let candidates = component.candidates().len();

    html! {
        <textarea
            ref={component.textarea_ref.clone()}
            dir={component.language.dir()}
            value={content.to_string()}
            spellcheck="false"
            rows={4}
            style="width:100%; min-height:80px; resize:none; overflow:hidden;"
            placeholder="Type @ to insert a variable"
            oninput={link.callback(|e: InputEvent| {
                let textarea = e.target_unchecked_into::<HtmlTextAreaElement>();
                Msg::Input { text: textarea.value(), cursor: selection_start(&textarea) }
            })}
            onkeydown={link.batch_callback(move |e: KeyboardEvent| {
                if e.ctrl_key() && e.key() == "s" {
                    e.prevent_default();
                    return vec![Msg::Save];
                }
                let transition = picker.on_key(PickerKey::from_key(&e.key()), candidates);
                if transition.consumed {
                    e.prevent_default();
                }
                if transition.consumed || transition.state != picker {
                    vec![Msg::Picker(transition)]
                } else {
                    vec![]
                }
            })}
            onkeyup={link.callback(|e: KeyboardEvent| {
                let textarea = e.target_unchecked_into::<HtmlTextAreaElement>();
                Msg::CursorMoved { cursor: selection_start(&textarea) }
            })}
            onclick={link.callback(|e: MouseEvent| {
                let textarea = e.target_unchecked_into::<HtmlTextAreaElement>();
                Msg::CursorMoved { cursor: selection_start(&textarea) }
            })}
        />
    }
}

fn build_picker(component: &TemplateEditorComponent, link: &Scope<TemplateEditorComponent>) -> Html {
    let PickerState::Open { selected } = component.picker else {
        return html! {};
    };
    let language = component.language;

    html! {
        <ul class="picker" dir={language.dir()}>
            {
                for component.candidates().iter().enumerate().map(|(index, variable)| {
                    html! {
                        <li
                            class={classes!((index == selected).then_some("selected"))}
                            // mousedown keeps the textarea focused and its cursor in place
                            onmousedown={link.callback(move |e: MouseEvent| {
                                e.prevent_default();
                                Msg::InsertVariable(index)
                            })}
                        >
                            { variable_row(variable, language) }
                        </li>
                    }
                })
            }
        </ul>
    }
}

fn build_variables_list(component: &TemplateEditorComponent, link: &Scope<TemplateEditorComponent>) -> Html {
    let language = component.language;
    let body = match &component.variables {
        Remote::Loading => html! { <p class="muted">{"Loading variables…"}</p> },
        Remote::Failed(err) => html! { <p class="muted">{ format!("Variables unavailable: {}", err) }</p> },
        Remote::Loaded(variables) if variables.is_empty() => {
            html! { <p class="muted">{"This template type has no variables."}</p> }
        }
        Remote::Loaded(variables) => html! {
            <ul dir={language.dir()} style="list-style:none; padding:0;">
                {
                    for variables.iter().enumerate().map(|(index, variable)| html! {
                        <li>
                            <button
                                class="icon-btn"
                                onmousedown={link.callback(move |e: MouseEvent| {
                                    e.prevent_default();
                                    Msg::InsertVariable(index)
                                })}
                            >
                                { variable_row(variable, language) }
                            </button>
                        </li>
                    })
                }
            </ul>
        },
    };

    html! {
        <div class="variables-panel">
            <h4>{"Available variables"}</h4>
            { body }
        </div>
    }
}

fn variable_row(variable: &VariableDescriptor, language: Language) -> Html {
    let label = match language {
        Language::Ar => &variable.label,
        Language::En => &variable.label_en,
    };
    html! {
        <>
            <i class="material-icons">{ variable.icon.clone() }</i>
            <span>{ label.clone() }</span>
            <code>{ variable.token() }</code>
            <small class="muted">{ variable.example.clone() }</small>
        </>
    }
}

fn build_preview(content: &str, language: Language) -> Html {
    let unknown = unknown_placeholders(content);
    html! {
        <div class="preview">
            <h4>{"Preview"}</h4>
            <div
                dir={language.dir()}
                style="white-space:pre-wrap; background:#dcf8c6; padding:8px 12px; border-radius:8px; max-width:480px;"
            >
                { render(content, language) }
            </div>
            {
                if unknown.is_empty() {
                    html! {}
                } else {
                    html! {
                        <p class="banner partial">
                            { format!("Unknown variables stay as typed: {}", unknown.join(", ")) }
                        </p>
                    }
                }
            }
        </div>
    }
}

fn build_test_send(component: &TemplateEditorComponent, link: &Scope<TemplateEditorComponent>) -> Html {
    let send_label = if component.sending { "Sending…" } else { "Send test" };
    html! {
        <div class="test-send" style="margin-top:12px;">
            <input
                type="tel"
                placeholder="+966 5X XXX XXXX"
                value={component.destination.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetDestination(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            { icon_button("send", send_label, link.callback(|_| Msg::TestSend), component.sending) }
        </div>
    }
}

/// Renders a toolbar button with a Material icon and a label.
fn icon_button(icon_name: &str, label: &str, on_click: Callback<MouseEvent>, disabled: bool) -> Html {
    html! {
        <button class="icon-btn" onclick={on_click} {disabled}>
            <i class="material-icons">{ icon_name.to_string() }</i>
            <span class="icon-label">{ label.to_string() }</span>
        </button>
    }
}
