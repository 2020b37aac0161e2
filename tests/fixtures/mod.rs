// Test fixtures - reusable test data
// Provides consistent dates and photos across all test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns the given date at midnight
    pub fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Returns Jan 1, 2000, the default date of birth in the form
    pub fn millennium_birthday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
    }

    /// Returns Jun 15, 2024 at noon
    pub fn mid_june_2024() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    /// Returns Nov 1, 2023 at 09:30
    pub fn november_2023() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 11, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    /// Returns Feb 29, 1996 (leap day)
    pub fn leap_day_1996() -> NaiveDate {
        NaiveDate::from_ymd_opt(1996, 2, 29).unwrap()
    }
}

/// Sample photos for testing
pub mod photos {
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    /// Encodes a solid-colour image of the given size as PNG bytes
    pub fn solid_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba(color));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    /// A landscape photo larger than the icon box
    pub fn landscape() -> Vec<u8> {
        solid_png(200, 100, [255, 128, 0, 255])
    }

    /// Bytes that no decoder accepts
    pub fn garbage() -> Vec<u8> {
        b"definitely not an image".to_vec()
    }
}
