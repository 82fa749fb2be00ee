// ============================================================================
// SECTION FORM - one form, every section shape
// ============================================================================
// Renders whatever the section registry says the current section looks
// like: a bounded textarea, a list of plain entries, or a list of records
// whose fields come from the kind's field specs. The wizard and the
// standalone editor both mount this with their own callbacks.
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::sections::{FieldInput, FieldSpec, SectionData, SectionKind, SUMMARY_MAX_LEN};

#[derive(Properties, PartialEq)]
pub struct SectionFormProps {
    pub kind: SectionKind,
    pub data: SectionData,
    pub disabled: bool,
    pub on_set_text: Callback<String>,
    pub on_add_item: Callback<()>,
    pub on_remove_item: Callback<usize>,
    pub on_set_entry: Callback<(usize, String)>,
    pub on_set_record_field: Callback<(usize, &'static str, String)>,
}

#[function_component(SectionForm)]
pub fn section_form(props: &SectionFormProps) -> Html {
    let body = match &props.data {
        SectionData::Text(text) => render_text(props, text),
        SectionData::Entries(entries) => render_entries(props, entries),
        _ => render_records(props),
    };

    html! {
        <div class="section-form">
            <p class="section-hint">{props.kind.hint()}</p>
            {body}
        </div>
    }
}

fn render_text(props: &SectionFormProps, text: &str) -> Html {
    let on_input = {
        let on_set_text = props.on_set_text.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_set_text.emit(area.value());
        })
    };
    let used = text.chars().count();
    let counter_class = if used > SUMMARY_MAX_LEN {
        "char-counter over"
    } else {
        "char-counter"
    };

    html! {
        <div class="form-group">
            <textarea
                class="summary-input"
                rows="4"
                maxlength={SUMMARY_MAX_LEN.to_string()}
                placeholder="Describe your consulting profile in one or two sentences"
                value={text.to_string()}
                oninput={on_input}
                disabled={props.disabled}
            />
            <span class={counter_class}>{format!("{}/{}", used, SUMMARY_MAX_LEN)}</span>
        </div>
    }
}

fn render_entries(props: &SectionFormProps, entries: &[String]) -> Html {
    let rows = entries.iter().enumerate().map(|(index, value)| {
        let on_input = {
            let on_set_entry = props.on_set_entry.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_set_entry.emit((index, input.value()));
            })
        };
        let on_remove = {
            let on_remove_item = props.on_remove_item.clone();
            Callback::from(move |_: MouseEvent| on_remove_item.emit(index))
        };

        html! {
            <div class="entry-row" key={index}>
                <input
                    type="text"
                    value={value.clone()}
                    oninput={on_input}
                    disabled={props.disabled}
                />
                <button
                    type="button"
                    class="btn-remove"
                    onclick={on_remove}
                    disabled={props.disabled}
                    title="Remove"
                >
                    {"✕"}
                </button>
            </div>
        }
    });

    html! {
        <div class="entry-list">
            { for rows }
            { render_add_button(props) }
        </div>
    }
}

fn render_records(props: &SectionFormProps) -> Html {
    let specs = props.kind.field_specs();
    let count = props.data.len();

    let cards = (0..count).map(|index| {
        let on_remove = {
            let on_remove_item = props.on_remove_item.clone();
            Callback::from(move |_: MouseEvent| on_remove_item.emit(index))
        };

        html! {
            <div class="record-card" key={index}>
                <div class="record-card-header">
                    <span class="record-index">{format!("#{}", index + 1)}</span>
                    <button
                        type="button"
                        class="btn-remove"
                        onclick={on_remove}
                        disabled={props.disabled}
                        title="Remove"
                    >
                        {"✕"}
                    </button>
                </div>
                <div class="record-fields">
                    { for specs.iter().map(|spec| render_field(props, index, spec)) }
                </div>
            </div>
        }
    });

    html! {
        <div class="record-list">
            { for cards }
            { render_add_button(props) }
        </div>
    }
}

fn render_field(props: &SectionFormProps, index: usize, spec: &FieldSpec) -> Html {
    let value = props.data.record_field(index, spec.id).unwrap_or_default();
    let field_id = spec.id;

    let control = match spec.input {
        FieldInput::Text => {
            let on_input = {
                let on_set = props.on_set_record_field.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_set.emit((index, field_id, input.value()));
                })
            };
            html! {
                <input
                    type="text"
                    value={value.clone()}
                    oninput={on_input}
                    disabled={props.disabled}
                />
            }
        }
        FieldInput::Number => {
            let on_input = {
                let on_set = props.on_set_record_field.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_set.emit((index, field_id, input.value()));
                })
            };
            html! {
                <input
                    type="number"
                    min="0"
                    value={value.clone()}
                    oninput={on_input}
                    disabled={props.disabled}
                />
            }
        }
        FieldInput::Select(options) => {
            let on_change = {
                let on_set = props.on_set_record_field.clone();
                Callback::from(move |e: Event| {
                    if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                        on_set.emit((index, field_id, select.value()));
                    }
                })
            };
            html! {
                <select onchange={on_change} disabled={props.disabled}>
                    <option value="" selected={value.is_empty()}>{"Select..."}</option>
                    {
                        for options.iter().map(|option| html! {
                            <option value={*option} selected={value == *option}>
                                {*option}
                            </option>
                        })
                    }
                </select>
            }
        }
    };

    html! {
        <div class="form-group">
            <label>{spec.label}</label>
            {control}
        </div>
    }
}

fn render_add_button(props: &SectionFormProps) -> Html {
    let on_click = {
        let on_add_item = props.on_add_item.clone();
        Callback::from(move |_: MouseEvent| on_add_item.emit(()))
    };

    html! {
        <button
            type="button"
            class="btn-add-item"
            onclick={on_click}
            disabled={props.disabled}
        >
            {"＋ Add"}
        </button>
    }
}
