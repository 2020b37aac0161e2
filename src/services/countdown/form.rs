//! Turning "Add countdown" form input into countdown records.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::error::{SubmitError, ValidationError};
use super::store::CountdownStore;
use crate::models::countdown::{CountdownRecord, HslColor};
use crate::models::settings::Settings;
use crate::services::image::ImageEncoder;
use crate::utils::date::{start_of_day, with_year_clamped};

/// Raw form fields as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownDraft {
    pub name: String,
    pub date_of_birth: NaiveDate,
    /// Bytes of the uploaded photo, if any
    pub photo: Option<Vec<u8>>,
}

impl CountdownDraft {
    pub fn new(name: impl Into<String>, date_of_birth: NaiveDate, photo: Option<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            date_of_birth,
            photo,
        }
    }
}

/// Validates drafts and appends the resulting records to a store.
#[derive(Debug, Clone)]
pub struct FormController {
    encoder: ImageEncoder,
    hue_step: u16,
    min_birth_date: NaiveDate,
}

impl Default for FormController {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl FormController {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            encoder: ImageEncoder::new((settings.icon_size, settings.icon_size)),
            hue_step: settings.hue_step,
            min_birth_date: settings.min_birth_date,
        }
    }

    pub fn min_birth_date(&self) -> NaiveDate {
        self.min_birth_date
    }

    /// Pull `date` into `[min_birth_date, today]`. When the minimum lies
    /// after `today`, `today` wins.
    pub fn clamp_birth_date(&self, date: NaiveDate, today: NaiveDate) -> NaiveDate {
        date.max(self.min_birth_date).min(today)
    }

    /// Build a record from `draft` and append it to `store`.
    ///
    /// On any error the store is left untouched.
    pub fn submit<'a>(
        &self,
        store: &'a mut CountdownStore,
        draft: &CountdownDraft,
        now: NaiveDateTime,
    ) -> Result<&'a CountdownRecord, SubmitError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName.into());
        }
        let Some(photo) = draft.photo.as_deref() else {
            return Err(ValidationError::MissingPhoto.into());
        };

        let today = now.date();
        if draft.date_of_birth < self.min_birth_date || draft.date_of_birth > today {
            return Err(ValidationError::DateOutOfRange {
                date: draft.date_of_birth,
                min: self.min_birth_date,
                max: today,
            }
            .into());
        }

        let target_instant = next_anniversary(draft.date_of_birth, now);
        let age = age_at(draft.date_of_birth, target_instant);
        let icon_image = self.encoder.encode(photo)?;
        let color_tag = HslColor::for_index(store.len(), self.hue_step);

        log::info!(
            "adding countdown '{}' -> {} (turning {}, {})",
            name,
            target_instant,
            age,
            color_tag.to_css()
        );

        Ok(store.push(CountdownRecord {
            name: name.to_string(),
            date_of_birth: draft.date_of_birth,
            target_instant,
            age,
            icon_image,
            color_tag,
        }))
    }
}

/// Midnight of the first birthday of `date_of_birth` that is not before `now`.
pub fn next_anniversary(date_of_birth: NaiveDate, now: NaiveDateTime) -> NaiveDateTime {
    let this_year = anniversary_in(date_of_birth, now.year());
    if this_year < now {
        anniversary_in(date_of_birth, now.year() + 1)
    } else {
        this_year
    }
}

/// Age reached at `target`: a plain difference of calendar years.
pub fn age_at(date_of_birth: NaiveDate, target: NaiveDateTime) -> i32 {
    target.year() - date_of_birth.year()
}

fn anniversary_in(date_of_birth: NaiveDate, year: i32) -> NaiveDateTime {
    // Only out-of-range years can fail here; keep the birth date itself.
    let date = with_year_clamped(date_of_birth, year).unwrap_or(date_of_birth);
    start_of_day(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::image::DecodeError;
    use image::{DynamicImage, ImageFormat, RgbaImage};
    use std::io::Cursor;
    use test_case::test_case;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        ymd(y, m, d).and_hms_opt(12, 0, 0).unwrap()
    }

    fn photo() -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(RgbaImage::new(8, 8))
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn passed_birthday_rolls_to_next_year() {
        let target = next_anniversary(ymd(2000, 1, 1), noon(2024, 6, 15));
        assert_eq!(target, start_of_day(ymd(2025, 1, 1)));
        assert_eq!(age_at(ymd(2000, 1, 1), target), 25);
    }

    #[test]
    fn upcoming_birthday_stays_this_year() {
        let target = next_anniversary(ymd(2000, 1, 1), noon(2023, 11, 1));
        assert_eq!(target, start_of_day(ymd(2024, 1, 1)));
        assert_eq!(age_at(ymd(2000, 1, 1), target), 24);
    }

    #[test]
    fn birthday_at_exactly_now_is_still_pending() {
        let now = start_of_day(ymd(2024, 3, 10));
        assert_eq!(next_anniversary(ymd(1990, 3, 10), now), now);
    }

    #[test]
    fn birthday_earlier_today_rolls_over() {
        let target = next_anniversary(ymd(1990, 3, 10), noon(2024, 3, 10));
        assert_eq!(target, start_of_day(ymd(2025, 3, 10)));
    }

    #[test]
    fn leap_day_birthday_uses_feb_28() {
        let target = next_anniversary(ymd(2000, 2, 29), noon(2024, 6, 1));
        assert_eq!(target, start_of_day(ymd(2025, 2, 28)));
    }

    #[test]
    fn submit_appends_record() {
        let controller = FormController::default();
        let mut store = CountdownStore::new();
        let draft = CountdownDraft::new("  Ada  ", ymd(2000, 1, 1), Some(photo()));
        let record = controller
            .submit(&mut store, &draft, noon(2024, 6, 15))
            .unwrap();
        assert_eq!(record.name, "Ada");
        assert_eq!(record.age, 25);
        assert!(!record.icon_image.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn missing_name_wins_over_missing_photo() {
        let controller = FormController::default();
        let mut store = CountdownStore::new();
        let draft = CountdownDraft::new("   ", ymd(2000, 1, 1), None);
        let err = controller
            .submit(&mut store, &draft, noon(2024, 6, 15))
            .unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Validation(ValidationError::MissingName)
        ));
        assert!(store.is_empty());
    }

    #[test_case(ymd(2030, 1, 1) ; "after today")]
    #[test_case(ymd(2024, 6, 16) ; "day after today")]
    #[test_case(ymd(1899, 12, 31) ; "before minimum")]
    fn out_of_range_birth_date_is_rejected(date_of_birth: NaiveDate) {
        let controller = FormController::default();
        let mut store = CountdownStore::new();
        let draft = CountdownDraft::new("Ada", date_of_birth, Some(photo()));
        let err = controller
            .submit(&mut store, &draft, noon(2024, 6, 15))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("date of birth {date_of_birth} must be between 1900-01-01 and 2024-06-15")
        );
        assert!(matches!(
            err,
            SubmitError::Validation(ValidationError::DateOutOfRange { .. })
        ));
        assert!(store.is_empty());
    }

    #[test_case(ymd(1900, 1, 1) ; "minimum")]
    #[test_case(ymd(2024, 6, 15) ; "today")]
    fn boundary_birth_dates_are_accepted(date_of_birth: NaiveDate) {
        let controller = FormController::default();
        let mut store = CountdownStore::new();
        let draft = CountdownDraft::new("Ada", date_of_birth, Some(photo()));
        assert!(controller
            .submit(&mut store, &draft, noon(2024, 6, 15))
            .is_ok());
    }

    #[test]
    fn clamp_birth_date_never_panics() {
        let today = ymd(2024, 6, 15);
        let controller = FormController::default();
        assert_eq!(controller.clamp_birth_date(ymd(1800, 5, 5), today), ymd(1900, 1, 1));
        assert_eq!(controller.clamp_birth_date(ymd(2030, 1, 1), today), today);
        assert_eq!(controller.clamp_birth_date(ymd(1985, 7, 4), today), ymd(1985, 7, 4));

        let settings = Settings {
            min_birth_date: ymd(2999, 1, 1),
            ..Settings::default()
        };
        let inverted = FormController::from_settings(&settings);
        assert_eq!(inverted.clamp_birth_date(ymd(2000, 1, 1), today), today);
    }

    #[test]
    fn unreadable_photo_leaves_store_untouched() {
        let controller = FormController::default();
        let mut store = CountdownStore::new();
        let draft = CountdownDraft::new("Ada", ymd(2000, 1, 1), Some(b"nope".to_vec()));
        let err = controller
            .submit(&mut store, &draft, noon(2024, 6, 15))
            .unwrap_err();
        assert!(matches!(err, SubmitError::Decode(DecodeError::Image(_))));
        assert!(store.is_empty());
    }
}
