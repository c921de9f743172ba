use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const SHOW_CLASS: &str = "show";

/// Full-screen sheet hosting a modal. Visibility is driven by the `show`
/// class, toggled through [`open_top_sheet`] and [`close_top_sheet`].
pub struct YwMaterialTopSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    /// Fired when the backdrop itself is clicked.
    #[prop_or_default]
    pub on_backdrop: Option<Callback<()>>,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let node_ref = props.node_ref.clone();
        let on_backdrop = props.on_backdrop.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            let on_sheet = match (e.target(), node_ref.get()) {
                (Some(target), Some(sheet)) => {
                    let sheet: &wasm_bindgen::JsValue = sheet.as_ref();
                    let target: &wasm_bindgen::JsValue = target.as_ref();
                    target == sheet
                }
                _ => false,
            };
            if on_sheet {
                if let Some(cb) = &on_backdrop {
                    cb.emit(());
                }
            }
        });

        html! {
            <div class="top-sheet" ref={props.node_ref.clone()} {onclick}>
                { props.children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    spawn_local(async move {
        // Let the sheet's content render before it is shown.
        TimeoutFuture::new(50).await;
        if let Some(sheet) = top_sheet_ref.cast::<web_sys::Element>() {
            sheet.class_list().add_1(SHOW_CLASS).ok();
        }
    });
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    if let Some(sheet) = top_sheet_ref.cast::<web_sys::Element>() {
        sheet.class_list().remove_1(SHOW_CLASS).ok();
    }
}
