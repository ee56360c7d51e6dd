//! Trip type tab bar

use flightsearch::{SearchForm, TripType};
use leptos::prelude::*;

/// "One Way" / "Return" tabs. Switching only swaps the validation schema;
/// values already entered stay put.
#[component]
pub fn TripTabs(form: RwSignal<SearchForm>) -> impl IntoView {
    view! {
        <div class="tab-bar" role="tablist">
            {TripType::ALL
                .into_iter()
                .map(|trip| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class="tab"
                            class:active=move || form.with(|f| f.trip_type() == trip)
                            on:click=move |_| form.update(|f| f.select_trip(trip))
                        >
                            {trip.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
