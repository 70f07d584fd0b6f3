//! Calendar bucketing and relative-time helpers.
//!
//! Nothing here reads the clock; callers pass `now` in.

mod keys;
mod relative;

#[allow(unused_imports)]
pub use keys::{
    week_key,
    month_key,
    quarter_key,
    month_name,
    MONTH_NAMES,
};
pub use relative::{parse_timestamp, relative_time};
