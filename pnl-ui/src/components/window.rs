use gpui::{
    App, AppContext, ClickEvent, Context, Entity, InteractiveElement, IntoElement, ParentElement,
    Render, Styled, Subscription, Window,
};
use gpui_component::{button::Button, h_flex, v_flex};
use pnl_core::ProfitLossAction;
use tracing::{debug, info};

#[cfg(not(target_os = "linux"))]
use crate::{Quit, quit};
use crate::{
    app::FormSetup,
    components::{ProfitLossForm, make_button, make_outline_button},
};

/// Root view of the main window: the entry form above one button per
/// [`ProfitLossAction`].
pub struct AppWindow {
    form: Entity<ProfitLossForm>,
    _window_close_subscription: Subscription,
}

impl AppWindow {
    pub fn new(
        setup: FormSetup,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let projects = setup.projects.len();
        let form = cx.new(|form_cx| ProfitLossForm::new(setup, window, form_cx));

        let subscription = cx.on_window_closed(|_cx: &mut App| {
            info!("main window closed");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        });

        debug!(projects, "main window built");
        Self {
            form,
            _window_close_subscription: subscription,
        }
    }

    fn action_button(
        &self,
        action: ProfitLossAction,
    ) -> Button {
        let form = self.form.clone();
        let on_click = move |_: &ClickEvent, _: &mut Window, cx: &mut App| {
            debug!(%action, "action button clicked");
            form.update(cx, |form, cx| form.run_action(action, cx));
        };

        let id = format!("action-{action:?}");
        match action {
            ProfitLossAction::ExportPdf => make_outline_button(id, action.label(), on_click),
            ProfitLossAction::SendMessage | ProfitLossAction::Save => {
                make_button(id, action.label(), on_click)
            }
        }
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .size_full()
            .p_5()
            .gap_4()
            .child(self.form.clone())
            .child(
                h_flex()
                    .id("action-row")
                    .p_1()
                    .gap_4()
                    .items_center()
                    .justify_center()
                    .children(ProfitLossAction::ALL.map(|action| self.action_button(action))),
            )
    }
}
