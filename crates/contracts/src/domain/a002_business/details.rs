//! Auxiliary collections of a business profile: branches, working hours,
//! FAQs and media, plus the wire wrappers they arrive in.

use chrono::{Datelike, Weekday};
use crate::shared::locale::Locale;
use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

// ============================================================================
// Working hours
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_id: i64,
    /// 0 = Sunday .. 6 = Saturday
    pub day: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub open_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub close_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_closed: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl WorkingHours {
    pub fn day_name(&self, locale: Locale) -> &'static str {
        day_name(self.day, locale)
    }

    /// `9:00 AM - 10:30 PM`, in the locale's period markers.
    pub fn display_range(&self, locale: Locale) -> String {
        format!(
            "{} - {}",
            format_time(&self.open_time, locale),
            format_time(&self.close_time, locale)
        )
    }
}

const DAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const DAYS_AR: [&str; 7] = [
    "الأحد",
    "الإثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

pub fn day_name(day: u8, locale: Locale) -> &'static str {
    let idx = (day as usize) % 7;
    match locale {
        Locale::Ar => DAYS_AR[idx],
        Locale::En => DAYS_EN[idx],
    }
}

/// Sunday-based index used by the `day` field.
pub fn day_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// Index of the current day for "today" highlighting.
pub fn today_index<D: Datelike>(date: &D) -> u8 {
    day_index(date.weekday())
}

/// Formats `HH:mm[:ss]` on a 12-hour clock. Unparseable input is returned
/// unchanged.
pub fn format_time(time: &str, locale: Locale) -> String {
    let mut parts = time.split(':');
    let Some(hour) = parts.next().and_then(|h| h.trim().parse::<u32>().ok()) else {
        return time.to_string();
    };
    let minute = parts
        .next()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or("00");

    let period = match (locale, hour >= 12) {
        (Locale::Ar, true) => "م",
        (Locale::Ar, false) => "ص",
        (Locale::En, true) => "PM",
        (Locale::En, false) => "AM",
    };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{} {}", hour12, minute, period)
}

/// Hours ordered Sunday first.
pub fn sort_working_hours(mut hours: Vec<WorkingHours>) -> Vec<WorkingHours> {
    hours.sort_by_key(|h| h.day);
    hours
}

// ============================================================================
// Branches
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_ar: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address_ar: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub contact_number: Option<String>,
}

impl Branch {
    pub fn localized_name(&self, locale: Locale) -> &str {
        locale
            .pick_opt(Some(self.name.as_str()), Some(self.name_ar.as_str()))
            .unwrap_or_default()
    }

    pub fn localized_address(&self, locale: Locale) -> &str {
        locale
            .pick_opt(Some(self.address.as_str()), Some(self.address_ar.as_str()))
            .unwrap_or_default()
    }

    pub fn maps_url(&self) -> Option<String> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(format!(
                "https://www.google.com/maps/search/?api=1&query={},{}",
                lat, lng
            )),
            _ => None,
        }
    }
}

// ============================================================================
// FAQ
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_id: i64,
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question_ar: String,
    pub answer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer_ar: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

fn default_true() -> bool {
    true
}

/// Active FAQs by `display_order` (stable for equal orders).
pub fn active_faqs(faqs: Vec<Faq>) -> Vec<Faq> {
    let mut active: Vec<Faq> = faqs.into_iter().filter(|f| f.is_active).collect();
    active.sort_by_key(|f| f.display_order);
    active
}

// ============================================================================
// Media
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessMedia {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_id: i64,
    #[serde(rename = "type", default)]
    pub media_type: MediaType,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_order: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl BusinessMedia {
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    /// Image shown in the grid: videos use their thumbnail when present.
    pub fn preview_url(&self) -> &str {
        match (self.media_type, self.thumbnail_url.as_deref()) {
            (MediaType::Video, Some(thumb)) if !thumb.is_empty() => thumb,
            _ => &self.url,
        }
    }
}

/// Lightbox navigation, clamped to the ends of the gallery.
pub fn previous_index(current: usize) -> usize {
    current.saturating_sub(1)
}

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1).min(len - 1)
    }
}

// ============================================================================
// Wire responses
// ============================================================================

/// `GET /directories/businesses/{slug}/working-hours`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkingHoursResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub working_hours: Vec<WorkingHours>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_open: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status_text: String,
}

/// `GET /directories/businesses/{slug}/faqs`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub faqs: Vec<Faq>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
}

/// `GET /directories/businesses/{slug}/media`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub media: Vec<BusinessMedia>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AboutWorkingHoursDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub hours: Vec<WorkingHours>,
    #[serde(default)]
    pub is_open: Option<bool>,
    #[serde(default)]
    pub status_text: Option<String>,
}

/// `GET /directories/businesses/{slug}/about`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AboutResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub branches: Vec<Branch>,
    #[serde(default)]
    pub working_hours: Option<AboutWorkingHoursDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub faqs: Vec<Faq>,
}

/// Branches, hours and FAQs of the about tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutData {
    pub branches: Vec<Branch>,
    pub working_hours: Vec<WorkingHours>,
    pub faqs: Vec<Faq>,
    pub is_open: Option<bool>,
    pub status_text: Option<String>,
}

impl From<AboutResponse> for AboutData {
    fn from(dto: AboutResponse) -> Self {
        let hours = dto.working_hours.unwrap_or_default();
        Self {
            branches: dto.branches,
            working_hours: hours.hours,
            faqs: dto.faqs,
            is_open: hours.is_open,
            status_text: hours.status_text,
        }
    }
}

impl AboutData {
    /// Active FAQs by display order and hours by day, so that server and
    /// client render identical lists.
    pub fn normalized(self) -> Self {
        Self {
            working_hours: sort_working_hours(self.working_hours),
            faqs: active_faqs(self.faqs),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn faq(id: i64, order: i32, active: bool) -> Faq {
        Faq {
            id,
            business_id: 1,
            question: format!("q{}", id),
            question_ar: String::new(),
            answer: format!("a{}", id),
            answer_ar: String::new(),
            display_order: order,
            is_active: active,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_active_faqs_filtered_and_sorted() {
        let faqs = vec![faq(1, 3, true), faq(2, 1, false), faq(3, 1, true), faq(4, 3, true)];
        let ids: Vec<i64> = active_faqs(faqs).iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![3, 1, 4]);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("09:00:00", Locale::En), "9:00 AM");
        assert_eq!(format_time("00:15", Locale::En), "12:15 AM");
        assert_eq!(format_time("12:00", Locale::En), "12:00 PM");
        assert_eq!(format_time("22:30:00", Locale::Ar), "10:30 م");
        assert_eq!(format_time("7", Locale::En), "7:00 AM");
        assert_eq!(format_time("closed", Locale::En), "closed");
    }

    #[test]
    fn test_about_response_mapping() {
        let dto: AboutResponse = serde_json::from_value(json!({
            "branches": [{ "id": 1, "name": "Salmiya", "address": "Block 10" }],
            "working_hours": {
                "hours": [
                    { "id": 2, "day": 3, "open_time": "09:00", "close_time": "17:00" },
                    { "id": 1, "day": 0, "open_time": "10:00", "close_time": "18:00" }
                ],
                "is_open": true,
                "status_text": "Open now"
            },
            "faqs": [
                { "id": 5, "question": "Parking?", "answer": "Yes", "display_order": 2 },
                { "id": 6, "question": "Old?", "answer": "No", "display_order": 1, "is_active": false }
            ]
        }))
        .unwrap();

        let about = AboutData::from(dto).normalized();
        assert_eq!(about.branches[0].localized_name(Locale::Ar), "Salmiya");
        assert_eq!(about.working_hours.iter().map(|h| h.day).collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(about.faqs.len(), 1);
        assert_eq!(about.is_open, Some(true));
        assert_eq!(about.status_text.as_deref(), Some("Open now"));
    }

    #[test]
    fn test_about_response_without_hours() {
        let dto: AboutResponse = serde_json::from_value(json!({ "branches": [] })).unwrap();
        let about = AboutData::from(dto);
        assert!(about.working_hours.is_empty());
        assert_eq!(about.is_open, None);
    }

    #[test]
    fn test_about_response_null_collections() {
        let dto: AboutResponse = serde_json::from_value(json!({
            "branches": null,
            "working_hours": {
                "hours": [{ "id": 1, "day": 2, "open_time": "08:00", "close_time": "16:00" }],
                "is_open": false,
                "status_text": null
            },
            "faqs": null
        }))
        .unwrap();

        let about = AboutData::from(dto).normalized();
        assert!(about.branches.is_empty());
        assert!(about.faqs.is_empty());
        assert_eq!(about.working_hours.len(), 1);
        assert_eq!(about.is_open, Some(false));
    }

    #[test]
    fn test_collection_responses_null_lists() {
        let faqs: FaqsResponse =
            serde_json::from_value(json!({ "faqs": null, "total": null })).unwrap();
        assert!(faqs.faqs.is_empty());
        let media: MediaResponse = serde_json::from_value(json!({ "media": null })).unwrap();
        assert!(media.media.is_empty());
        let hours: WorkingHoursResponse = serde_json::from_value(json!({
            "working_hours": null,
            "is_open": true,
            "status_text": null
        }))
        .unwrap();
        assert!(hours.working_hours.is_empty());
        assert_eq!(hours.status_text, "");
    }

    #[test]
    fn test_today_index_is_sunday_based() {
        // 2024-03-17 was a Sunday
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        assert_eq!(today_index(&sunday), 0);
        assert_eq!(day_index(Weekday::Sat), 6);
        assert_eq!(day_name(5, Locale::En), "Friday");
        assert_eq!(day_name(5, Locale::Ar), "الجمعة");
    }

    #[test]
    fn test_media_preview_and_navigation() {
        let video: BusinessMedia = serde_json::from_value(json!({
            "id": 1, "type": "video", "url": "v.mp4", "thumbnail_url": "v.jpg"
        }))
        .unwrap();
        assert!(video.is_video());
        assert_eq!(video.preview_url(), "v.jpg");

        assert_eq!(previous_index(0), 0);
        assert_eq!(next_index(2, 3), 2);
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(0, 0), 0);
    }
}
