//! Flight results list

use flightsearch::FlightRecord;
use leptos::prelude::*;

/// Matching flights, or a status line when there are none.
#[component]
pub fn ResultsList(results: RwSignal<Vec<FlightRecord>>, searched: RwSignal<bool>) -> impl IntoView {
    view! {
        <section class="results">
            <h2 class="results-title">"Flights"</h2>
            {move || {
                let flights = results.get();
                if flights.is_empty() {
                    view! { <p class="empty">{empty_message(searched.get())}</p> }.into_any()
                } else {
                    view! {
                        <ul class="flight-list">
                            {flights
                                .into_iter()
                                .map(|flight| view! { <FlightRow flight=flight /> })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn FlightRow(flight: FlightRecord) -> impl IntoView {
    view! {
        <li class="flight-row">
            <span class="airline">{flight.airline.clone()}</span>
            <span class="route">{route(&flight)}</span>
            <span class="dates">{dates(&flight)}</span>
            <span class="price">{format!("${}", flight.price)}</span>
        </li>
    }
}

fn empty_message(searched: bool) -> &'static str {
    if searched {
        "No matching flights found."
    } else {
        "Loading flights..."
    }
}

fn route(flight: &FlightRecord) -> String {
    format!("{} → {}", flight.origin, flight.destination)
}

fn dates(flight: &FlightRecord) -> String {
    if flight.is_one_way() {
        flight.departure_date.clone()
    } else {
        format!("{} / {}", flight.departure_date, flight.return_date)
    }
}
