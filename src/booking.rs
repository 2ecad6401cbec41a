use std::rc::Rc;

use chrono::NaiveDate;
use thiserror::Error;
use yew::prelude::*;

use crate::slots::BusinessHours;

/// Format of `<input type="date">` values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const PHONE_DIGITS: usize = 10;
/// Same constraint as [`PHONE_DIGITS`], for the input's `pattern` attribute.
pub const PHONE_PATTERN: &str = "[0-9]{10}";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("phone number is required")]
    MissingPhone,
    #[error("phone number must be exactly 10 digits, got {0:?}")]
    InvalidPhone(String),
    #[error("date is required")]
    MissingDate,
    #[error("date {0:?} is not YYYY-MM-DD")]
    InvalidDate(String),
    #[error("date {date} is before the earliest bookable day {min}")]
    DateBeforeMinimum { date: NaiveDate, min: NaiveDate },
    #[error("date {date} is after the last bookable day {max}")]
    DateAfterMaximum { date: NaiveDate, max: NaiveDate },
    #[error("time slot is required")]
    MissingTime,
    #[error("{0:?} is not an offered time slot")]
    UnknownSlot(String),
}

/// Values captured by the form, kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Appointment {
    pub phone: String,
    pub date: String,
    pub time: String,
    pub notes: String,
}

impl Appointment {
    pub fn notes(&self) -> Option<&str> {
        let notes = self.notes.trim();
        (!notes.is_empty()).then_some(notes)
    }
}

/// The constraints the browser enforces on the form's inputs before it lets
/// the submit event through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    pub min_date: NaiveDate,
    pub max_date: Option<NaiveDate>,
    pub hours: BusinessHours,
}

impl FieldRules {
    /// Reports the first violated constraint, in form order.
    pub fn check(&self, appt: &Appointment) -> Result<(), BookingError> {
        if appt.phone.is_empty() {
            return Err(BookingError::MissingPhone);
        }
        if appt.phone.len() != PHONE_DIGITS || !appt.phone.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BookingError::InvalidPhone(appt.phone.clone()));
        }

        if appt.date.is_empty() {
            return Err(BookingError::MissingDate);
        }
        let date = NaiveDate::parse_from_str(&appt.date, DATE_FORMAT)
            .map_err(|_| BookingError::InvalidDate(appt.date.clone()))?;
        if date < self.min_date {
            return Err(BookingError::DateBeforeMinimum { date, min: self.min_date });
        }
        if let Some(max) = self.max_date {
            if date > max {
                return Err(BookingError::DateAfterMaximum { date, max });
            }
        }

        if appt.time.is_empty() {
            return Err(BookingError::MissingTime);
        }
        if !self.hours.contains(&appt.time) {
            return Err(BookingError::UnknownSlot(appt.time.clone()));
        }
        Ok(())
    }
}

/// Form state. `Submitted` is terminal: every action on it is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Booking {
    Editing(Appointment),
    Submitted(Appointment),
}

impl Default for Booking {
    fn default() -> Self {
        Booking::Editing(Appointment::default())
    }
}

pub enum BookingAction {
    SetPhone(String),
    SetDate(String),
    SetTime(String),
    SetNotes(String),
    Submit(FieldRules),
}

impl Booking {
    pub fn appointment(&self) -> &Appointment {
        match self {
            Booking::Editing(appt) | Booking::Submitted(appt) => appt,
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, Booking::Submitted(_))
    }

    pub fn confirmation(&self) -> Option<String> {
        match self {
            Booking::Submitted(appt) => Some(format!(
                "Thank you! We will contact you at {} on {} at {}.",
                appt.phone, appt.date, appt.time
            )),
            Booking::Editing(_) => None,
        }
    }
}

impl Reducible for Booking {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.is_submitted() {
            return self;
        }

        let mut appt = self.appointment().clone();
        match action {
            BookingAction::SetPhone(v) => appt.phone = v,
            BookingAction::SetDate(v) => appt.date = v,
            BookingAction::SetTime(v) => appt.time = v,
            BookingAction::SetNotes(v) => appt.notes = v,
            BookingAction::Submit(rules) => {
                if rules.check(&appt).is_err() {
                    return self;
                }
                return Rc::new(Booking::Submitted(appt));
            }
        }
        Rc::new(Booking::Editing(appt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    fn rules(today: &str) -> FieldRules {
        FieldRules { min_date: day(today), max_date: None, hours: BusinessHours::default() }
    }

    fn apply(state: Rc<Booking>, actions: Vec<BookingAction>) -> Rc<Booking> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    fn filled(phone: &str, date: &str, time: &str) -> Vec<BookingAction> {
        vec![
            BookingAction::SetPhone(phone.into()),
            BookingAction::SetDate(date.into()),
            BookingAction::SetTime(time.into()),
        ]
    }

    #[test]
    fn starts_editing_with_empty_fields() {
        let state = Booking::default();
        assert!(!state.is_submitted());
        assert_eq!(state.appointment(), &Appointment::default());
        assert_eq!(state.confirmation(), None);
    }

    #[test]
    fn edits_keep_the_form_open() {
        let state = apply(Rc::new(Booking::default()), filled("5551234567", "2025-03-10", "14:30"));
        assert!(!state.is_submitted());
        assert_eq!(state.appointment().phone, "5551234567");
        assert_eq!(state.confirmation(), None);
    }

    #[test]
    fn confirmation_quotes_the_last_values() {
        let mut actions = filled("1111111111", "2025-03-09", "09:00");
        actions.extend(filled("5551234567", "2025-03-10", "14:30"));
        actions.push(BookingAction::Submit(rules("2025-03-01")));

        let state = apply(Rc::new(Booking::default()), actions);
        assert!(state.is_submitted());
        assert_eq!(
            state.confirmation().as_deref(),
            Some("Thank you! We will contact you at 5551234567 on 2025-03-10 at 14:30.")
        );
    }

    #[test]
    fn submitted_is_terminal() {
        let mut actions = filled("5551234567", "2025-03-10", "14:30");
        actions.push(BookingAction::Submit(rules("2025-03-10")));
        let submitted = apply(Rc::new(Booking::default()), actions);

        let after = apply(
            submitted.clone(),
            vec![
                BookingAction::SetPhone("0000000000".into()),
                BookingAction::SetTime("09:00".into()),
                BookingAction::SetNotes("changed my mind".into()),
                BookingAction::Submit(rules("2025-03-01")),
            ],
        );
        assert!(Rc::ptr_eq(&submitted, &after));
        assert_eq!(*after, *submitted);
    }

    #[test]
    fn today_is_bookable() {
        let mut actions = filled("5551234567", "2025-03-10", "09:00");
        actions.push(BookingAction::Submit(rules("2025-03-10")));
        assert!(apply(Rc::new(Booking::default()), actions).is_submitted());
    }

    #[test]
    fn missing_fields_block_submission() {
        let cases = [
            ("", "2025-03-10", "14:30"),
            ("5551234567", "", "14:30"),
            ("5551234567", "2025-03-10", ""),
            ("", "", ""),
        ];
        for (phone, date, time) in cases {
            let mut actions = filled(phone, date, time);
            actions.push(BookingAction::Submit(rules("2025-03-01")));
            let state = apply(Rc::new(Booking::default()), actions);
            assert!(!state.is_submitted(), "{phone:?} {date:?} {time:?}");
            assert_eq!(state.appointment().phone, phone);
        }
    }

    #[test]
    fn check_reports_first_violation() {
        let r = rules("2025-03-10");
        let appt = |phone: &str, date: &str, time: &str| Appointment {
            phone: phone.into(),
            date: date.into(),
            time: time.into(),
            notes: String::new(),
        };

        assert_eq!(r.check(&appt("", "", "")), Err(BookingError::MissingPhone));
        assert_eq!(
            r.check(&appt("555123456", "2025-03-10", "14:30")),
            Err(BookingError::InvalidPhone("555123456".into()))
        );
        assert_eq!(
            r.check(&appt("555-123-45", "2025-03-10", "14:30")),
            Err(BookingError::InvalidPhone("555-123-45".into()))
        );
        assert_eq!(
            r.check(&appt("5551234567", "", "14:30")),
            Err(BookingError::MissingDate)
        );
        assert_eq!(
            r.check(&appt("5551234567", "tomorrow", "14:30")),
            Err(BookingError::InvalidDate("tomorrow".into()))
        );
        assert_eq!(
            r.check(&appt("5551234567", "2025-03-09", "14:30")),
            Err(BookingError::DateBeforeMinimum { date: day("2025-03-09"), min: day("2025-03-10") })
        );
        assert_eq!(
            r.check(&appt("5551234567", "2025-03-10", "")),
            Err(BookingError::MissingTime)
        );
        assert_eq!(
            r.check(&appt("5551234567", "2025-03-10", "18:00")),
            Err(BookingError::UnknownSlot("18:00".into()))
        );
        assert_eq!(r.check(&appt("5551234567", "2025-03-10", "17:30")), Ok(()));
    }

    #[test]
    fn booking_window_caps_the_date() {
        let r = FieldRules { max_date: Some(day("2025-04-09")), ..rules("2025-03-10") };
        let mut appt = Appointment {
            phone: "5551234567".into(),
            date: "2025-04-09".into(),
            time: "10:00".into(),
            notes: String::new(),
        };
        assert_eq!(r.check(&appt), Ok(()));

        appt.date = "2025-04-10".into();
        assert_eq!(
            r.check(&appt),
            Err(BookingError::DateAfterMaximum { date: day("2025-04-10"), max: day("2025-04-09") })
        );
    }

    #[test]
    fn past_date_leaves_state_untouched() {
        let mut actions = filled("5551234567", "2025-03-09", "14:30");
        actions.push(BookingAction::Submit(rules("2025-03-10")));
        let state = apply(Rc::new(Booking::default()), actions);
        assert_eq!(
            *state,
            Booking::Editing(Appointment {
                phone: "5551234567".into(),
                date: "2025-03-09".into(),
                time: "14:30".into(),
                notes: String::new(),
            })
        );
    }

    #[test]
    fn notes_are_optional_and_trimmed() {
        let mut actions = filled("5551234567", "2025-03-10", "14:30");
        actions.push(BookingAction::SetNotes("   ".into()));
        let state = apply(Rc::new(Booking::default()), actions);
        assert_eq!(state.appointment().notes(), None);

        let state = state.reduce(BookingAction::SetNotes("  retirement plan \n".into()));
        assert_eq!(state.appointment().notes(), Some("retirement plan"));

        let state = state.reduce(BookingAction::Submit(rules("2025-03-10")));
        assert!(state.is_submitted());
        assert_eq!(state.appointment().notes(), Some("retirement plan"));
    }
}
