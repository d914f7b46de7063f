pub mod chart_kind;
pub mod commands;
pub mod control_event;
pub mod outcome_class;
pub mod pie_label_policy;
pub mod record_error;
pub mod site_selection;
