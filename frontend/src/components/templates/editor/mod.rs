//! WhatsApp template editor: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and helpers.
//!
//! On first render, and whenever the `template_type` prop changes, the stored
//! bodies and the variable list of the active language are fetched.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::language::Language;
use common::model::template::MessageTemplate;
use common::model::variable::VariableDescriptor;

use crate::api::get_json;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use helpers::window_dirty_flag;
pub use messages::Msg;
pub use props::TemplateEditorProps;
pub use state::TemplateEditorComponent;

impl Component for TemplateEditorComponent {
    type Message = Msg;
    type Properties = TemplateEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        load_template(ctx);
        load_variables(ctx, Language::default());
        TemplateEditorComponent::new()
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().template_type != old_props.template_type {
            ctx.link().send_message(Msg::Reload);
        }
        false
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        helpers::set_window_dirty_flag(false);
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(cursor) = self.pending_cursor.take() {
            if let Some(textarea) = self.textarea_ref.cast::<web_sys::HtmlTextAreaElement>() {
                textarea.set_selection_range(cursor, cursor).ok();
                textarea.focus().ok();
            }
        }
    }
}

fn load_template(ctx: &Context<TemplateEditorComponent>) {
    let link = ctx.link().clone();
    let url = format!("/api/templates/{}", ctx.props().template_type);
    spawn_local(async move {
        let result = get_json::<MessageTemplate>(&url).await;
        link.send_message(Msg::TemplateLoaded(result));
    });
}

fn load_variables(ctx: &Context<TemplateEditorComponent>, language: Language) {
    let link = ctx.link().clone();
    let url = format!(
        "/api/templates/{}/variables?lang={}",
        ctx.props().template_type,
        language.code()
    );
    spawn_local(async move {
        let result = get_json::<Vec<VariableDescriptor>>(&url).await;
        link.send_message(Msg::VariablesLoaded(language, result));
    });
}
