//! Root flight search component

use super::{PriceRangeField, ResultsList, SelectField, TextField, TicketCard, TripTabs};
use flightsearch::{
    Catalog, Field, FlightRecord, PassengerType, SearchConfig, SearchForm, TripType, search,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use std::time::Duration;

/// Tabbed search form with the ticket card and results beside it.
///
/// State:
/// - `form` - values, touched fields, eager validation
/// - `results` - empty, then the whole dataset after the reveal delay, then
///   each submit's matches
/// - `show_ticket` - flipped on every successful submit
#[component]
pub fn FlightSearch(config: SearchConfig) -> impl IntoView {
    let catalog = Catalog::bundled().unwrap_or_else(|e| {
        tracing::error!("Bundled catalog is unusable: {}", e);
        Catalog::default()
    });
    let departure_options = catalog.departure_dates().to_vec();
    let return_options = catalog.return_dates().to_vec();
    let passenger_options: Vec<String> = PassengerType::ALL
        .iter()
        .map(|p| p.label().to_string())
        .collect();

    let catalog = StoredValue::new(catalog);
    let settings = StoredValue::new(config.clone());
    let form = RwSignal::new(SearchForm::new(&config));
    let results = RwSignal::new(Vec::<FlightRecord>::new());
    let searched = RwSignal::new(false);
    let show_ticket = RwSignal::new(false);

    set_timeout(
        move || {
            // A search that beat the timer keeps its results.
            if !searched.get_untracked() {
                results.set(catalog.with_value(|c| c.flights().to_vec()));
            }
        },
        Duration::from_millis(config.reveal_delay_ms),
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let criteria = match form.try_update(|f| f.submit()) {
            Some(Ok(criteria)) => criteria,
            Some(Err(errors)) => {
                tracing::debug!("Search blocked: {} field error(s)", errors.len());
                return;
            }
            None => return,
        };

        let outcome =
            catalog.with_value(|c| settings.with_value(|s| search(c, &criteria, s)));
        match outcome {
            Ok(outcome) => {
                results.set(outcome.results);
                searched.set(true);
                show_ticket.update(|visible| *visible = !*visible);
            }
            Err(e) => alert(&e.to_string()),
        }
    };

    view! {
        <div class="layout">
            <section class="panel">
                <h1 class="title">"Flight Search"</h1>
                <TripTabs form=form />
                <form class="search-form" on:submit=on_submit>
                    <TextField
                        form=form
                        field=Field::Origin
                        label="From"
                        placeholder="enter origin city"
                    />
                    <TextField
                        form=form
                        field=Field::Destination
                        label="To"
                        placeholder="enter destination city"
                    />
                    <div class="row">
                        <SelectField
                            form=form
                            field=Field::DepartureDate
                            label="Departure Date"
                            options=departure_options
                        />
                        <Show when=move || form.with(|f| f.trip_type() == TripType::Return)>
                            <SelectField
                                form=form
                                field=Field::ReturnDate
                                label="Return Date"
                                options=return_options.clone()
                            />
                        </Show>
                    </div>
                    <SelectField
                        form=form
                        field=Field::Passengers
                        label="Passengers"
                        options=passenger_options
                    />
                    <PriceRangeField form=form />
                    <button
                        type="submit"
                        class="btn-search"
                        disabled=move || !form.with(|f| f.can_submit())
                    >
                        "Search"
                    </button>
                </form>
            </section>
            <section class="side">
                <Show when=move || show_ticket.get()>
                    <TicketCard form=form />
                </Show>
                <ResultsList results=results searched=searched />
            </section>
        </div>
    }
}

/// Blocking browser alert.
fn alert(message: &str) {
    tracing::warn!("{}", message);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
