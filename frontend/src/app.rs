use common::templates::dictionary::TemplateVariableSets;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::groups::activation::GroupActivationComponent;
use crate::components::templates::editor::{window_dirty_flag, TemplateEditorComponent};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet, YwMaterialTopSheet};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Templates,
    Groups,
}

pub enum Msg {
    Show(Screen),
    SelectTemplate(String),
    SetGroupId(String),
    OpenActivation,
    CloseActivation,
}

pub struct App {
    screen: Screen,
    template_type: AttrValue,
    group_id: String,
    /// Group shown in the activation sheet, fixed while the sheet is open.
    activating: Option<AttrValue>,
    activation_sheet: NodeRef,
    template_select: NodeRef,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let first_type = TemplateVariableSets::builtin()
            .template_types()
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            screen: Screen::Templates,
            template_type: AttrValue::from(first_type),
            group_id: String::new(),
            activating: None,
            activation_sheet: NodeRef::default(),
            template_select: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        if self.leaves_editor(&msg) && window_dirty_flag() && !confirm_discard() {
            self.restore_template_select();
            return false;
        }
        match msg {
            Msg::Show(screen) => {
                self.screen = screen;
                true
            }
            Msg::SelectTemplate(template_type) => {
                self.template_type = AttrValue::from(template_type);
                true
            }
            Msg::SetGroupId(group_id) => {
                self.group_id = group_id;
                true
            }
            Msg::OpenActivation => {
                let group_id = self.group_id.trim();
                if group_id.is_empty() {
                    return false;
                }
                self.activating = Some(AttrValue::from(group_id.to_string()));
                open_top_sheet(self.activation_sheet.clone());
                true
            }
            Msg::CloseActivation => {
                close_top_sheet(self.activation_sheet.clone());
                self.activating = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let nav_button = |screen: Screen, label: &'static str| {
            html! {
                <button
                    class={classes!("tab-btn", (self.screen == screen).then_some("active"))}
                    onclick={link.callback(move |_| Msg::Show(screen))}
                >
                    { label }
                </button>
            }
        };

        html! {
            <div style="max-width:1100px; margin:0 auto; padding:16px;">
                <nav class="tab-bar">
                    { nav_button(Screen::Templates, "WhatsApp templates") }
                    { nav_button(Screen::Groups, "Groups") }
                </nav>
                {
                    match self.screen {
                        Screen::Templates => self.templates_screen(ctx),
                        Screen::Groups => self.groups_screen(ctx),
                    }
                }
                <YwMaterialTopSheet
                    node_ref={self.activation_sheet.clone()}
                    on_backdrop={link.callback(|_| Msg::CloseActivation)}
                >
                    {
                        match &self.activating {
                            Some(group_id) => html! {
                                <GroupActivationComponent
                                    group_id={group_id.clone()}
                                    on_close={link.callback(|_| Msg::CloseActivation)}
                                />
                            },
                            None => html! {},
                        }
                    }
                </YwMaterialTopSheet>
            </div>
        }
    }
}

impl App {
    /// `true` when handling `msg` unmounts the editor or loads another
    /// template into it.
    fn leaves_editor(&self, msg: &Msg) -> bool {
        if self.screen != Screen::Templates {
            return false;
        }
        match msg {
            Msg::Show(screen) => *screen != Screen::Templates,
            Msg::SelectTemplate(template_type) => self.template_type.as_str() != template_type.as_str(),
            _ => false,
        }
    }

    /// Puts the selector back on the template still being edited.
    fn restore_template_select(&self) {
        if let Some(select) = self.template_select.cast::<HtmlSelectElement>() {
            select.set_value(&self.template_type);
        }
    }

    fn templates_screen(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <>
                <select ref={self.template_select.clone()} onchange={link.callback(|e: Event| {
                    Msg::SelectTemplate(e.target_unchecked_into::<HtmlSelectElement>().value())
                })}>
                    {
                        for TemplateVariableSets::builtin().template_types().map(|template_type| html! {
                            <option
                                value={template_type.to_string()}
                                selected={self.template_type.as_str() == template_type}
                            >
                                { template_type.to_string() }
                            </option>
                        })
                    }
                </select>
                <TemplateEditorComponent template_type={self.template_type.clone()} />
            </>
        }
    }

    fn groups_screen(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div style="display:flex; gap:8px; align-items:center;">
                <input
                    placeholder="Group id"
                    value={self.group_id.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetGroupId(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <button
                    disabled={self.group_id.trim().is_empty()}
                    onclick={link.callback(|_| Msg::OpenActivation)}
                >
                    {"Activate group…"}
                </button>
            </div>
        }
    }
}

fn confirm_discard() -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .confirm_with_message("The template has unsaved changes. Discard them?")
                .ok()
        })
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_on(screen: Screen, template_type: &str) -> App {
        App {
            screen,
            template_type: AttrValue::from(template_type.to_string()),
            group_id: String::new(),
            activating: None,
            activation_sheet: NodeRef::default(),
            template_select: NodeRef::default(),
        }
    }

    #[test]
    fn switching_template_or_screen_leaves_the_editor() {
        let app = app_on(Screen::Templates, "welcome");
        assert!(app.leaves_editor(&Msg::SelectTemplate("reminder".to_string())));
        assert!(app.leaves_editor(&Msg::Show(Screen::Groups)));
        assert!(!app.leaves_editor(&Msg::SelectTemplate("welcome".to_string())));
        assert!(!app.leaves_editor(&Msg::Show(Screen::Templates)));
        assert!(!app.leaves_editor(&Msg::OpenActivation));
    }

    #[test]
    fn nothing_to_lose_outside_the_templates_screen() {
        let app = app_on(Screen::Groups, "welcome");
        assert!(!app.leaves_editor(&Msg::Show(Screen::Templates)));
        assert!(!app.leaves_editor(&Msg::SelectTemplate("reminder".to_string())));
    }
}
