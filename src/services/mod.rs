pub mod api;
pub mod booking_form;
pub mod booking_list;
pub mod form_state;
pub mod validation;
