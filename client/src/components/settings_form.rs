//! Trip settings form hosting the coordinate fields.
//!
//! SYSTEM CONTEXT
//! ==============
//! The longitude/latitude inputs and the `set-position-error` paragraph are
//! bound to signals, and those signals are the sinks handed to
//! `capture_position`. In the hydrated build the capture runs once when the
//! form mounts; the server render just shows the defaults.

use leptos::prelude::*;

use crate::state::settings::{DistanceUnit, SettingsField, SettingsForm, SettingsValidation};

/// Id of the element that shows geolocation failures.
pub const POSITION_ERROR_ID: &str = "set-position-error";

#[component]
pub fn TripSettingsForm() -> impl IntoView {
    let initial = SettingsForm::default();
    let longitude = RwSignal::new(initial.longitude);
    let latitude = RwSignal::new(initial.latitude);
    let distance_unit = RwSignal::new(initial.distance_unit);
    let max_distance = RwSignal::new(initial.max_distance);
    let closeness_bias = RwSignal::new(initial.closeness_bias);
    let minimum_rating = RwSignal::new(initial.minimum_rating);
    let number_to_generate = RwSignal::new(initial.number_to_generate);
    let position_error = RwSignal::new(String::new());

    let validation = Memo::new(move |_| {
        SettingsForm {
            longitude: longitude.get(),
            latitude: latitude.get(),
            distance_unit: distance_unit.get(),
            max_distance: max_distance.get(),
            closeness_bias: closeness_bias.get(),
            minimum_rating: minimum_rating.get(),
            number_to_generate: number_to_generate.get(),
        }
        .validate()
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        use crate::location::{CaptureTargets, browser::BrowserGeolocation, capture_position};

        capture_position(&BrowserGeolocation, CaptureTargets { longitude, latitude, error: position_error });
    });

    let status = move || {
        if validation.with(SettingsValidation::has_error) {
            "Fix the highlighted fields."
        } else {
            "Settings look good."
        }
    };

    view! {
        <form
            class="settings-form"
            id="settings-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| ev.prevent_default()
        >
            <div class="settings-form__groups">
                <fieldset class="settings-form__group">
                    <legend>"Starting Point"</legend>
                    <NumberField field=SettingsField::Longitude value=longitude validation=validation step="any"/>
                    <NumberField field=SettingsField::Latitude value=latitude validation=validation step="any"/>
                    <p id=POSITION_ERROR_ID class="field__error">
                        {move || position_error.get()}
                    </p>
                </fieldset>
                <fieldset class="settings-form__group">
                    <legend>"Distance"</legend>
                    <div class="field">
                        <label for=SettingsField::DistanceUnit.name()>
                            {SettingsField::DistanceUnit.label()}
                        </label>
                        <select
                            id=SettingsField::DistanceUnit.name()
                            name=SettingsField::DistanceUnit.name()
                            class="field__input"
                            on:change=move |ev| distance_unit.set(event_target_value(&ev))
                        >
                            {DistanceUnit::ALL
                                .into_iter()
                                .map(|unit| {
                                    view! {
                                        <option
                                            value=unit.as_str()
                                            selected=move || DistanceUnit::parse(&distance_unit.get()) == unit
                                        >
                                            {unit.as_str()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <NumberField field=SettingsField::MaxDistance value=max_distance validation=validation min="0"/>
                </fieldset>
                <fieldset class="settings-form__group">
                    <legend>"Preferences"</legend>
                    <NumberField
                        field=SettingsField::ClosenessBias
                        value=closeness_bias
                        validation=validation
                        min="0.2"
                        max="5"
                        step="0.1"
                    />
                    <NumberField
                        field=SettingsField::MinimumRating
                        value=minimum_rating
                        validation=validation
                        min="0"
                        max="5"
                        step="0.1"
                    />
                    <NumberField
                        field=SettingsField::NumberToGenerate
                        value=number_to_generate
                        validation=validation
                        min="0"
                        max="15"
                    />
                </fieldset>
            </div>
            <p class="settings-form__status">{status}</p>
        </form>
    }
}

/// Labelled numeric input with its validation message underneath.
#[component]
fn NumberField(
    field: SettingsField,
    value: RwSignal<String>,
    validation: Memo<SettingsValidation>,
    #[prop(optional)] min: Option<&'static str>,
    #[prop(optional)] max: Option<&'static str>,
    #[prop(optional)] step: Option<&'static str>,
) -> impl IntoView {
    let message = move || validation.with(|v| v.message(field));

    view! {
        <div class="field">
            <label for=field.name()>{field.label()}</label>
            <input
                id=field.name()
                name=field.name()
                type="number"
                class="field__input"
                min=min
                max=max
                step=step
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
        {move || message().map(|m| view! { <p class="field__error">{m}</p> })}
    }
}
