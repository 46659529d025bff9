use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::settings::Settings;

/// Recompute the stored metrics of every record (or of one month) with
/// `settings`. Returns how many records changed.
pub fn recalc_records<S: Store>(store: &mut S, settings: &Settings, month: Option<(i32, u32)>) -> AppResult<usize> {
    let records = match month {
        Some((year, month)) => store.load_records_for_month(year, month)?,
        None => store.load_records()?,
    };

    let mut changed = 0;

    for mut record in records {
        let before = record.metrics();
        record.recompute(settings);

        if record.metrics() != before {
            store.save_record(&record)?;
            changed += 1;
        }
    }

    Ok(changed)
}
