// ============================================================================
// SECTION EDITOR - edit one profile section from the dashboard
// ============================================================================
// Thin modal around SectionForm. The draft and its callbacks come from the
// dashboard's use_section_editor hook; a failed save keeps the modal open
// with everything still in place.
// ============================================================================

use yew::prelude::*;

use crate::components::section_form::SectionForm;
use crate::stores::SectionDraft;

#[derive(Properties, PartialEq)]
pub struct SectionEditorProps {
    pub draft: SectionDraft,
    pub on_close: Callback<()>,
    pub on_save: Callback<()>,
    pub on_set_text: Callback<String>,
    pub on_add_item: Callback<()>,
    pub on_remove_item: Callback<usize>,
    pub on_set_entry: Callback<(usize, String)>,
    pub on_set_record_field: Callback<(usize, &'static str, String)>,
}

#[function_component(SectionEditor)]
pub fn section_editor(props: &SectionEditorProps) -> Html {
    let saving = props.draft.status.is_saving();

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let close_click = {
        let on_close = props.on_close.clone();
        // Overlay, ✕ and Cancel all route through here; none of them may
        // dismiss the modal while the save is pending
        Callback::from(move |_: MouseEvent| {
            if !saving {
                on_close.emit(());
            }
        })
    };
    let save_click = {
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(()))
    };

    html! {
        <div class="modal active section-editor-modal">
            <div class="modal-overlay" onclick={close_click.clone()}></div>
            <div class="modal-content" onclick={stop}>
                <div class="modal-header">
                    <h2>{format!("Edit {}", props.draft.kind.title())}</h2>
                    <button class="btn-close" onclick={close_click.clone()} disabled={saving}>{"✕"}</button>
                </div>

                <SectionForm
                    kind={props.draft.kind}
                    data={props.draft.data.clone()}
                    disabled={saving}
                    on_set_text={props.on_set_text.clone()}
                    on_add_item={props.on_add_item.clone()}
                    on_remove_item={props.on_remove_item.clone()}
                    on_set_entry={props.on_set_entry.clone()}
                    on_set_record_field={props.on_set_record_field.clone()}
                />

                {
                    if let Some(message) = props.draft.status.error_message() {
                        html! { <p class="form-error">{message.to_string()}</p> }
                    } else {
                        html! {}
                    }
                }

                <div class="modal-footer">
                    <button class="btn-secondary" onclick={close_click} disabled={saving}>
                        {"Cancel"}
                    </button>
                    <button class="btn-primary" onclick={save_click} disabled={saving}>
                        {if saving { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
