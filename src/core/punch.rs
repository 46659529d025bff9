use crate::core::calculator::timeline::build_timeline;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::daily_record::DailyRecord;
use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use crate::models::settings::Settings;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Punch mutations: every call loads the day, changes its punches,
/// recomputes the metrics and saves the record back in one step.
pub struct PunchLogic;

impl PunchLogic {
    /// The stored record for `date` with metrics recomputed under
    /// `settings`, or an empty record. Nothing is written.
    pub fn load_day<S: Store>(store: &S, date: NaiveDate, settings: &Settings) -> AppResult<DailyRecord> {
        let mut record = store
            .load_record(date)?
            .unwrap_or_else(|| DailyRecord::empty(date));
        record.recompute(settings);
        Ok(record)
    }

    /// Kind of the next punch: OUT after an IN, IN otherwise.
    pub fn next_kind(record: &DailyRecord) -> PunchKind {
        match record.last_punch() {
            Some(p) => p.kind.toggled(),
            None => PunchKind::In,
        }
    }

    /// Map a 1-based position in the day's list to the punch id.
    pub fn resolve_index(record: &DailyRecord, position: usize) -> AppResult<Uuid> {
        position
            .checked_sub(1)
            .and_then(|i| record.punches.get(i))
            .map(|p| p.id)
            .ok_or(AppError::InvalidPunchIndex(position))
    }

    /// Clock in/out at `at`. Toggles on the last punch unless
    /// `end_workday` forces an OUT. The punch is appended as-is.
    pub fn punch_now<S: Store>(
        store: &mut S,
        date: NaiveDate,
        at: DateTime<Utc>,
        settings: &Settings,
        end_workday: bool,
    ) -> AppResult<Punch> {
        let mut record = Self::load_day(store, date, settings)?;

        let kind = if end_workday {
            PunchKind::Out
        } else {
            Self::next_kind(&record)
        };

        let punch = Punch::new(kind, at);
        record.punches.push(punch.clone());

        Self::persist(store, &mut record, settings, "punch", &format!("{} at {}", kind.label(), punch.time_str()))?;
        Ok(punch)
    }

    /// Add a punch at an arbitrary time of the day. The kind follows the
    /// last stored punch; the list is then re-sorted by time.
    pub fn add<S: Store>(
        store: &mut S,
        date: NaiveDate,
        timestamp: DateTime<Utc>,
        settings: &Settings,
    ) -> AppResult<Punch> {
        let mut record = Self::load_day(store, date, settings)?;

        let punch = Punch::new(Self::next_kind(&record), timestamp);
        record.punches.push(punch.clone());
        record.sort_punches();

        Self::persist(
            store,
            &mut record,
            settings,
            "add",
            &format!("{} at {}", punch.kind.label(), punch.time_str()),
        )?;
        Ok(punch)
    }

    /// Move an existing punch to `timestamp`; its kind is kept.
    pub fn edit<S: Store>(
        store: &mut S,
        date: NaiveDate,
        id: Uuid,
        timestamp: DateTime<Utc>,
        settings: &Settings,
    ) -> AppResult<Punch> {
        let mut record = Self::load_day(store, date, settings)?;

        let punch = record
            .punches
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::PunchNotFound(id))?;

        let old_time = punch.time_str();
        punch.timestamp = timestamp;
        let updated = punch.clone();
        record.sort_punches();

        Self::persist(
            store,
            &mut record,
            settings,
            "edit",
            &format!("{} {} → {}", updated.kind.label(), old_time, updated.time_str()),
        )?;
        Ok(updated)
    }

    /// Remove a punch. The (possibly now empty) record is kept.
    pub fn delete<S: Store>(store: &mut S, date: NaiveDate, id: Uuid, settings: &Settings) -> AppResult<Punch> {
        let mut record = store
            .load_record(date)?
            .ok_or_else(|| AppError::NoPunchesForDate(date.to_string()))?;

        let index = record
            .punches
            .iter()
            .position(|p| p.id == id)
            .ok_or(AppError::PunchNotFound(id))?;
        let removed = record.punches.remove(index);

        Self::persist(
            store,
            &mut record,
            settings,
            "del",
            &format!("{} at {}", removed.kind.label(), removed.time_str()),
        )?;
        Ok(removed)
    }

    fn persist<S: Store>(
        store: &mut S,
        record: &mut DailyRecord,
        settings: &Settings,
        operation: &str,
        message: &str,
    ) -> AppResult<()> {
        record.recompute(settings);

        let unmatched = build_timeline(&record.punches).unmatched;
        if unmatched > 0 {
            tracing::warn!(date = %record.date, unmatched, "consecutive punches of the same kind");
        }

        store.save_record(record)?;

        // Audit failures must not undo a saved punch
        if let Err(e) = store.log_operation(operation, &record.date_str(), message) {
            tracing::warn!(error = %e, "failed to write audit log");
        }

        tracing::info!(
            date = %record.date,
            operation,
            total_hours = record.total_hours,
            "record updated"
        );
        Ok(())
    }
}
