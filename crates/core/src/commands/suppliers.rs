//! Ready-made suppliers for common parameter shapes.

use crate::commands::parameter::ParameterSupplier;
use chrono::{Days, Local, NaiveDate};

pub fn none() -> ParameterSupplier {
    ParameterSupplier::builder().usage("").build()
}

pub fn boolean() -> ParameterSupplier {
    fixed("true|false", ["true", "false", "t", "f"])
}

/// A strict supplier with a constant list of entries.
pub fn fixed<I, S>(usage: &str, entries: I) -> ParameterSupplier
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
    ParameterSupplier::builder()
        .usage(usage)
        .allowed_entries(move |_| entries.clone())
        .build()
}

pub fn from_fn<F>(usage: &str, strict: bool, entries: F) -> ParameterSupplier
where
    F: Fn(&[String]) -> Vec<String> + Send + Sync + 'static,
{
    ParameterSupplier::builder()
        .usage(usage)
        .strict(strict)
        .allowed_entries(entries)
        .build()
}

/// Every half hour of the day, `00:00` through `23:30`.
pub fn half_hour_times(usage: &str) -> ParameterSupplier {
    from_fn(usage, false, |_| {
        (0..48)
            .map(|slot| format!("{:02}:{:02}", slot / 2, (slot % 2) * 30))
            .collect()
    })
}

/// Dates from ten days ago to four weeks ahead, formatted `YY/MM/dd`.
pub fn relative_dates(usage: &str) -> ParameterSupplier {
    from_fn(usage, false, |_| dates_around(Local::now().date_naive()))
}

fn dates_around(today: NaiveDate) -> Vec<String> {
    (-10i64..30)
        .filter_map(|offset| {
            let days = Days::new(offset.unsigned_abs());
            if offset < 0 {
                today.checked_sub_days(days)
            } else {
                today.checked_add_days(days)
            }
        })
        .map(|date| date.format("%y/%m/%d").to_string())
        .collect()
}
