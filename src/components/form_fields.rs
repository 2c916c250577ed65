use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    pub id: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub pattern: Option<AttrValue>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub marked_required: bool,
}

fn field_label(id: &AttrValue, label: &AttrValue, marked_required: bool) -> Html {
    html! {
        <label for={id.clone()} class="field-label">
            {label.clone()}
            if marked_required {
                <span class="required-mark">{" *"}</span>
            }
        </label>
    }
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let oninput = {
        let cb = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };

    html! {
        <div class="form-group">
            { field_label(&props.id, &props.label, props.marked_required) }
            <input
                type={props.input_type.clone()}
                id={props.id.clone()}
                name={props.id.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                pattern={props.pattern.clone()}
                title={props.title.clone()}
                required=true
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FormTextAreaProps {
    pub label: AttrValue,
    pub id: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub marked_required: bool,
}

#[function_component(FormTextArea)]
pub fn form_text_area(props: &FormTextAreaProps) -> Html {
    let oninput = {
        let cb = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            cb.emit(area.value());
        })
    };

    html! {
        <div class="form-group">
            { field_label(&props.id, &props.label, props.marked_required) }
            <textarea
                id={props.id.clone()}
                name={props.id.clone()}
                rows="5"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                required=true
                {oninput}
            />
        </div>
    }
}

#[derive(Clone, PartialEq)]
pub struct SelectOption {
    pub value: AttrValue,
    pub label: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct FormSelectProps {
    pub label: AttrValue,
    pub id: AttrValue,
    pub value: AttrValue,
    pub placeholder: AttrValue,
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub onchange: Option<Callback<String>>,
    #[prop_or_default]
    pub marked_required: bool,
}

/// Dropdown with a disabled placeholder entry. Without `onchange` it renders
/// read-only, which is how derived fields are shown.
#[function_component(FormSelect)]
pub fn form_select(props: &FormSelectProps) -> Html {
    let read_only = props.onchange.is_none();
    let onchange = props.onchange.clone().map(|cb| {
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    });

    html! {
        <div class="form-group">
            { field_label(&props.id, &props.label, props.marked_required) }
            <select
                id={props.id.clone()}
                name={props.id.clone()}
                disabled={read_only}
                class={classes!(read_only.then(|| "derived"))}
                {onchange}
            >
                <option value="" disabled=true selected={props.value.is_empty()}>
                    {props.placeholder.clone()}
                </option>
                { for props.options.iter().map(|option| html! {
                    <option
                        value={option.value.clone()}
                        selected={option.value == props.value}
                    >
                        {option.label.clone()}
                    </option>
                }) }
            </select>
        </div>
    }
}
