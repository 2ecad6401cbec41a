use chrono::Local;
use gloo::console::{error, log};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::booking::{Booking, BookingAction, DATE_FORMAT, PHONE_PATTERN};
use crate::config::SchedulerConfig;
use crate::notice::{CalendarIcon, Notice, NoticeDescription};

#[derive(Properties, PartialEq)]
pub struct FormProps {
    #[prop_or_default]
    pub config: SchedulerConfig,
}

#[function_component(ContactCalendarForm)]
pub fn contact_calendar_form(props: &FormProps) -> Html {
    let booking = use_reducer(Booking::default);
    let cfg = &props.config;

    if let Some(message) = booking.confirmation() {
        let notes = booking.appointment().notes().map(str::to_string);
        return html! {
            <Notice class="mt-4">
                <CalendarIcon />
                <NoticeDescription>
                    { message }
                    if let Some(notes) = notes {
                        <div class="notes">{ format!("Notes: {notes}") }</div>
                    }
                </NoticeDescription>
            </Notice>
        };
    }

    // Re-evaluated on every render so the minimum tracks the current day.
    let today = Local::now().date_naive();
    let rules = cfg.rules(today);
    let slots = cfg.hours.slots();
    let appt = booking.appointment().clone();

    let on_phone = {
        let booking = booking.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            booking.dispatch(BookingAction::SetPhone(input.value()));
        })
    };

    let on_date = {
        let booking = booking.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            booking.dispatch(BookingAction::SetDate(input.value()));
        })
    };

    let on_time = {
        let booking = booking.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            booking.dispatch(BookingAction::SetTime(sel.value()));
        })
    };

    let on_notes = {
        let booking = booking.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            booking.dispatch(BookingAction::SetNotes(area.value()));
        })
    };

    let on_submit = {
        let booking = booking.clone();
        let rules = rules.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match rules.check(booking.appointment()) {
                Ok(()) => log!(format!(
                    "consultation requested for {} at {}",
                    booking.appointment().date,
                    booking.appointment().time
                )),
                Err(err) => error!(format!("submission rejected: {err}")),
            }
            booking.dispatch(BookingAction::Submit(rules.clone()));
        })
    };

    html! {
        <div class="card mt-4">
            <h3 class="card-t">{ cfg.title.clone() }</h3>
            <form onsubmit={on_submit} class="stack">
                <div>
                    <label class="label" for="phone">{ "Phone Number" }</label>
                    <input
                        id="phone"
                        type="tel"
                        value={appt.phone.clone()}
                        oninput={on_phone}
                        pattern={PHONE_PATTERN}
                        placeholder="Enter 10-digit number"
                        required={true}
                        class="field"
                    />
                </div>

                <div>
                    <label class="label" for="date">{ "Preferred Date" }</label>
                    <input
                        id="date"
                        type="date"
                        value={appt.date.clone()}
                        oninput={on_date}
                        min={rules.min_date.format(DATE_FORMAT).to_string()}
                        max={rules.max_date.map(|d| d.format(DATE_FORMAT).to_string())}
                        required={true}
                        class="field"
                    />
                </div>

                <div>
                    <label class="label" for="time">{ "Preferred Time" }</label>
                    <select id="time" onchange={on_time} required={true} class="field">
                        <option value="" selected={appt.time.is_empty()}>{ "Select a time" }</option>
                        { for slots.iter().map(|slot| html! {
                            <option key={slot.clone()} value={slot.clone()} selected={*slot == appt.time}>
                                { slot.clone() }
                            </option>
                        })}
                    </select>
                </div>

                if cfg.notes {
                    <div>
                        <label class="label" for="notes">{ "Additional Notes" }</label>
                        <textarea
                            id="notes"
                            value={appt.notes.clone()}
                            oninput={on_notes}
                            placeholder="Optional: anything you'd like to discuss"
                            class="field"
                        />
                    </div>
                }

                <button type="submit" class="btn">{ "Schedule Call" }</button>
            </form>
        </div>
    }
}
