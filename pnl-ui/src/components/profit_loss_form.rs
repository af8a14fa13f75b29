use gpui::{
    App, AppContext, Context, Div, Entity, FontWeight, IntoElement, ParentElement, Render,
    SharedString, Styled, Subscription, TextAlign, Window, div, px,
};
use gpui_component::{
    ActiveTheme, h_flex,
    input::{Input, InputState, MaskPattern},
    select::{Select, SelectState},
    v_flex,
};
use pnl_core::calculations::NetLabel;
use pnl_core::{
    EntryField, EntryForm, ProfitLossAction, ProfitLossReport, Section, SelectionOutcome,
};
use tracing::{debug, info, warn};

use crate::{app::FormSetup, models::StatusMessage};

type ProjectSelect = Entity<SelectState<Vec<SharedString>>>;

/// Decimal places the inputs keep. Stored records with more places are cut
/// to this when loaded into the form.
pub const INPUT_FRACTION_DIGITS: usize = 4;

/// The profit-and-loss entry form: project picker, income and expense
/// inputs, live totals and the net result.
pub struct ProfitLossForm {
    form: EntryForm,
    setup: FormSetup,
    project_select: ProjectSelect,
    inputs: Vec<(EntryField, Entity<InputState>)>,
    status: Option<StatusMessage>,
    _subscriptions: Vec<Subscription>,
}

impl ProfitLossForm {
    pub fn new(
        setup: FormSetup,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let project_names: Vec<SharedString> = setup
            .project_names()
            .into_iter()
            .map(SharedString::from)
            .collect();
        let project_select = cx.new(|cx| SelectState::new(project_names, None, window, cx));

        let form = EntryForm::new();
        let inputs: Vec<_> = EntryField::all()
            .map(|field| {
                let initial = form.entry().get(field).to_string();
                let state = make_input_state_with_decimal_mask(field.label(), initial, window, cx);
                (field, state)
            })
            .collect();

        let mut subscriptions =
            vec![cx.observe_in(&project_select, window, Self::on_project_select_changed)];
        for (field, input) in &inputs {
            let field = *field;
            subscriptions.push(cx.observe(input, move |this, input, cx| {
                this.on_input_changed(field, &input, cx)
            }));
        }

        Self {
            form,
            setup,
            project_select,
            inputs,
            status: None,
            _subscriptions: subscriptions,
        }
    }

    /// Snapshot of the current state for the action collaborators.
    pub fn report(&self) -> ProfitLossReport {
        self.form.report(&self.setup.currency_symbol)
    }

    /// Hands the current report to the configured action handler and shows
    /// the outcome in the status line.
    pub fn run_action(
        &mut self,
        action: ProfitLossAction,
        cx: &mut Context<Self>,
    ) {
        let report = self.report();
        let status = match self.setup.actions.handle(action, &report) {
            Ok(()) => {
                info!(%action, project = ?report.project, "action completed");
                StatusMessage::success(format!("{action}: done"))
            }
            Err(error) => {
                warn!(%action, %error, "action failed");
                StatusMessage::error(error.to_string())
            }
        };
        self.status = Some(status);
        cx.notify();
    }

    fn on_input_changed(
        &mut self,
        field: EntryField,
        input: &Entity<InputState>,
        cx: &mut Context<Self>,
    ) {
        let before = self.form.entry().get(field).clone();
        self.form.set_field(field, input.read(cx).value().as_str());
        if self.form.entry().get(field) != &before {
            cx.notify();
        }
    }

    fn on_project_select_changed(
        &mut self,
        select: ProjectSelect,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let Some(project) = select.read(cx).selected_value().cloned() else {
            return;
        };

        self.status = match self
            .form
            .select_project(&project, self.setup.source.as_ref())
        {
            SelectionOutcome::Unchanged => return,
            SelectionOutcome::Loaded => {
                info!(%project, "project record loaded");
                self.push_entry_to_inputs(window, cx);
                None
            }
            SelectionOutcome::NoRecord => {
                debug!(%project, "project has no stored record");
                Some(StatusMessage::no_record(&project))
            }
        };
        cx.notify();
    }

    /// Writes the record's values back into the text inputs.
    fn push_entry_to_inputs(
        &self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        for (field, input) in &self.inputs {
            let text = self.form.entry().get(*field).to_string();
            input.update(cx, |state, cx| state.set_value(text, window, cx));
        }
    }

    fn section_column(
        &self,
        section: Section,
        total_line: String,
    ) -> Div {
        v_flex()
            .gap_2()
            .flex_1()
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::MEDIUM)
                    .child(section.title()),
            )
            .children(
                self.inputs
                    .iter()
                    .filter(|(field, _)| field.section() == section)
                    .map(|(field, input)| make_input_row(input, format!("{}:", field.label()))),
            )
            .child(
                div()
                    .mt_2()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(total_line),
            )
    }
}

impl Render for ProfitLossForm {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let totals = self.form.totals();
        let currency = &self.setup.currency_symbol;
        let net_color = match totals.net.label() {
            NetLabel::Profit => cx.theme().success,
            NetLabel::Loss => cx.theme().danger,
        };

        v_flex()
            .w_full()
            .gap_4()
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(self.setup.title.clone()),
            )
            .child(make_select_row(
                "Select Project:",
                Select::new(&self.project_select)
                    .placeholder("Choose project")
                    .w_full(),
            ))
            .child(make_separator(cx))
            .child(
                h_flex()
                    .gap_4()
                    .items_start()
                    .child(self.section_column(
                        Section::Income,
                        format!("Total Income: {currency}{}", totals.total_income),
                    ))
                    .child(self.section_column(
                        Section::Expenses,
                        format!("Total Expenses: {currency}{}", totals.total_expenses),
                    )),
            )
            .child(make_separator(cx))
            .child(
                div()
                    .w_full()
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .text_align(TextAlign::Center)
                    .text_color(net_color)
                    .child(format!("Net {}", totals.net.display(currency))),
            )
            .children(self.status.as_ref().map(|status| {
                div()
                    .text_sm()
                    .text_color(status.color(cx))
                    .child(status.text.clone())
            }))
    }
}

fn make_input_state_with_decimal_mask(
    label: impl Into<SharedString>,
    initial: String,
    window: &mut Window,
    cx: &mut Context<ProfitLossForm>,
) -> Entity<InputState> {
    let pattern: MaskPattern = MaskPattern::Number {
        separator: Some(','),
        fraction: Some(INPUT_FRACTION_DIGITS),
    };

    cx.new(|closure_cx| {
        InputState::new(window, closure_cx)
            .mask_pattern(pattern)
            .placeholder(label.into())
            .default_value(initial)
    })
}

fn make_input_row(
    state: &Entity<InputState>,
    input_label: impl Into<SharedString>,
) -> Div {
    make_labeled_row(input_label).child(Input::new(state).flex_grow())
}

/// Creates a labeled row containing a text label and a [`Select`] dropdown,
/// styled consistently with [`make_input_row`].
fn make_select_row(
    label: impl Into<SharedString>,
    select_element: impl IntoElement,
) -> Div {
    make_labeled_row(label).child(select_element)
}

/// Common outer container and label for input and select rows.
fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex()
        .items_center()
        .gap_5()
        .p(px(2.))
        .rounded_md()
        .border_1()
        .child(
            div()
                .min_w(px(130.))
                .text_align(TextAlign::Right)
                .child(label.into()),
        )
}

fn make_separator(cx: &App) -> Div {
    div().w_full().h(px(1.)).bg(cx.theme().border)
}
