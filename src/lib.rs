//! Consultation call scheduler plug: phone, date and time-slot form with a
//! local confirmation. Nothing leaves the browser.

pub mod booking;
pub mod config;
pub mod form;
pub mod notice;
pub mod slots;
