//! Clause-value parsing for recurrence rule parts.

mod values;

pub use values::{
    month_day_list, month_list, occurrence_list, week_number_list, weekday_list, weekday_num_list,
};
