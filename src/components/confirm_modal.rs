use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub open: bool,
    /// Se emite UNA vez por decisión: true = el usuario confirmó
    pub on_close: Callback<bool>,
}

/// Modal de confirmación para acciones destructivas
pub struct ConfirmModal;

pub enum Msg {
    Confirm,
    Cancel,
}

impl Component for ConfirmModal {
    type Message = Msg;
    type Properties = ConfirmModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Confirm => ctx.props().on_close.emit(true),
            Msg::Cancel => ctx.props().on_close.emit(false),
        }
        // El padre controla `open`, no hace falta re-renderizar aquí
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().open {
            return html! {};
        }

        html! {
            <div class="modal active">
                // Click fuera del contenido = cancelar
                <div class="modal-overlay" onclick={ctx.link().callback(|_| Msg::Cancel)}></div>
                <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <div class="modal-header">
                        <span class="modal-icon warning">{"⚠️"}</span>
                        <h2>{ &ctx.props().title }</h2>
                    </div>
                    <div class="modal-body">
                        <p>{ &ctx.props().message }</p>
                    </div>
                    <div class="modal-footer">
                        <button class="btn-secondary" onclick={ctx.link().callback(|_| Msg::Cancel)}>
                            {"Cancel"}
                        </button>
                        <button class="btn-danger" onclick={ctx.link().callback(|_| Msg::Confirm)}>
                            { &ctx.props().confirm_text }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
