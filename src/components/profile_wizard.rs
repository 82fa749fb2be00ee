// ============================================================================
// PROFILE WIZARD - guided eight-step profile setup
// ============================================================================
// Modal over the seller dashboard. Position, completion and drafts live in
// the use_wizard hook; this component only renders them and forwards
// clicks. Forward and chip navigation always persist the step on screen
// first, so the footer is frozen while a save is in flight.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_wizard;
use crate::models::sections::SectionKind;
use crate::stores::WizardStore;

#[derive(Properties, PartialEq)]
pub struct ProfileWizardProps {
    pub on_close: Callback<()>,
    /// Fired once after the final step persists (and the tagline refresh
    /// has been attempted). The dashboard refetches on this.
    pub on_completed: Callback<()>,
}

#[function_component(ProfileWizard)]
pub fn profile_wizard(props: &ProfileWizardProps) -> Html {
    let wizard = use_wizard(props.on_completed.clone());

    {
        let open = wizard.open.clone();
        use_effect_with((), move |_| {
            open.emit(());
            || ()
        });
    }

    let saving = (*wizard.state)
        .wizard
        .as_ref()
        .is_some_and(|store| store.save_status.is_saving());

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let close_click = {
        let on_close = props.on_close.clone();
        // A step save in flight keeps the wizard up; closing and reopening
        // would hand out a fresh store and allow a second save for the step
        Callback::from(move |_: MouseEvent| {
            if !saving {
                on_close.emit(());
            }
        })
    };

    let body = {
        let state = (*wizard.state).clone();
        if state.loading {
            html! {
                <div class="wizard-loading">
                    <p>{"Loading your profile..."}</p>
                </div>
            }
        } else if let Some(message) = state.error {
            let retry = {
                let open = wizard.open.clone();
                Callback::from(move |_: MouseEvent| open.emit(()))
            };
            html! {
                <div class="wizard-error">
                    <p class="form-error">{message}</p>
                    <button class="btn-secondary" onclick={retry}>{"Try again"}</button>
                </div>
            }
        } else if let Some(store) = state.wizard {
            render_steps(&wizard, &store)
        } else {
            html! {}
        }
    };

    html! {
        <div class="modal active wizard-modal">
            <div class="modal-overlay" onclick={close_click.clone()}></div>
            <div class="modal-content" onclick={stop}>
                <div class="modal-header">
                    <h2>{"Set up your profile"}</h2>
                    <button class="btn-close" onclick={close_click} disabled={saving}>{"✕"}</button>
                </div>
                {body}
            </div>
        </div>
    }
}

fn render_steps(wizard: &crate::hooks::UseWizardHandle, store: &WizardStore) -> Html {
    let kind = store.current_kind();
    let saving = store.save_status.is_saving();

    let chips = SectionKind::ALL.iter().map(|section| {
        let index = section.step_index();
        let is_current = index == store.step_index;
        let is_completed = store.completed_steps.contains(&index);
        let reachable = store.can_jump_to(index);

        let class = match (is_current, is_completed, reachable) {
            (true, _, _) => "step-chip current",
            (_, true, _) => "step-chip completed",
            (_, _, true) => "step-chip reachable",
            _ => "step-chip locked",
        };

        let onclick = {
            let jump_to = wizard.jump_to.clone();
            Callback::from(move |_: MouseEvent| jump_to.emit(index))
        };

        html! {
            <button
                type="button"
                class={class}
                onclick={onclick}
                disabled={is_current || !reachable}
                key={index}
                title={section.title()}
            >
                { if is_completed && !is_current { "✓".to_string() } else { (index + 1).to_string() } }
            </button>
        }
    });

    let back = {
        let retreat = wizard.retreat.clone();
        Callback::from(move |_: MouseEvent| retreat.emit(()))
    };
    let next = {
        let advance = wizard.advance.clone();
        Callback::from(move |_: MouseEvent| advance.emit(()))
    };

    let next_label = if saving {
        "Saving..."
    } else if store.is_last_step() {
        "Finish"
    } else {
        "Save & continue"
    };

    html! {
        <>
            <div class="wizard-progress">
                <div class="step-chips">{ for chips }</div>
                <span class="progress-label">
                    {format!("{}% complete", store.completion_percent())}
                </span>
            </div>

            <h3 class="wizard-step-title">{kind.title()}</h3>

            <crate::components::section_form::SectionForm
                kind={kind}
                data={store.data.section(kind)}
                disabled={saving}
                on_set_text={wizard.set_text.clone()}
                on_add_item={wizard.add_item.clone()}
                on_remove_item={wizard.remove_item.clone()}
                on_set_entry={wizard.set_entry.clone()}
                on_set_record_field={wizard.set_record_field.clone()}
            />

            {
                if let Some(message) = store.save_status.error_message() {
                    html! { <p class="form-error">{message.to_string()}</p> }
                } else {
                    html! {}
                }
            }

            <div class="wizard-footer">
                <button
                    type="button"
                    class="btn-secondary"
                    onclick={back}
                    disabled={saving || store.step_index == 0}
                >
                    {"Back"}
                </button>
                <button
                    type="button"
                    class="btn-primary"
                    onclick={next}
                    disabled={saving}
                >
                    {next_label}
                </button>
            </div>
        </>
    }
}
