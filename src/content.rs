//! Static wedding content: couple, schedule, venue and music.
//!
//! This is the English source data for the page sections. Localized labels
//! live in `i18n::strings`.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use serde::Serialize;

/// Wedding start in venue local time.
pub const WEDDING_DATE: &str = "2026-09-22T16:00:00";

/// Venue UTC offset in seconds (Morocco, UTC+1).
pub const VENUE_UTC_OFFSET_SECS: i32 = 3600;

#[derive(Debug, Clone, Serialize)]
pub struct CoupleInfo {
    pub partner1: &'static str,
    pub partner2: &'static str,
    pub hashtag: &'static str,
    pub story: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventDetails {
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub venue: &'static str,
    pub address: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeddingDetails {
    pub ceremony: EventDetails,
    pub reception: EventDetails,
    pub dress_code: &'static str,
    pub dress_code_description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueLocation {
    pub lat: f64,
    pub lng: f64,
    pub name: &'static str,
    pub address: &'static str,
    pub google_maps_url: &'static str,
}

/// Icon shown next to a timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineIcon {
    Heart,
    Wine,
    Utensils,
    Music,
    Sparkles,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub time: &'static str,
    /// Key prefix under `timeline.events` for the localized title/description
    pub translation_key: &'static str,
    pub icon: TimelineIcon,
}

#[derive(Debug, Clone, Serialize)]
pub struct MusicTrack {
    pub title: &'static str,
    pub artist: &'static str,
    pub url: &'static str,
}

/// Everything the page shell needs besides localized strings.
#[derive(Debug, Clone, Serialize)]
pub struct WeddingContent {
    pub couple: CoupleInfo,
    pub details: WeddingDetails,
    pub venue: VenueLocation,
    pub timeline: &'static [TimelineEvent],
    pub music: MusicTrack,
}

const TIMELINE: &[TimelineEvent] = &[
    TimelineEvent {
        time: "4:00 PM",
        translation_key: "timeline.events.ceremony",
        icon: TimelineIcon::Heart,
    },
    TimelineEvent {
        time: "5:00 PM",
        translation_key: "timeline.events.cocktail",
        icon: TimelineIcon::Wine,
    },
    TimelineEvent {
        time: "6:00 PM",
        translation_key: "timeline.events.dinner",
        icon: TimelineIcon::Utensils,
    },
    TimelineEvent {
        time: "8:00 PM",
        translation_key: "timeline.events.firstDance",
        icon: TimelineIcon::Music,
    },
    TimelineEvent {
        time: "8:30 PM",
        translation_key: "timeline.events.party",
        icon: TimelineIcon::Sparkles,
    },
];

pub const CONTENT: WeddingContent = WeddingContent {
    couple: CoupleInfo {
        partner1: "Anouk",
        partner2: "Nidal",
        hashtag: "#AnoukAndNidal",
        story: "Our love story began in France...",
    },
    details: WeddingDetails {
        ceremony: EventDetails {
            title: "The Ceremony",
            date: "September 22, 2026",
            time: "4:00 PM",
            venue: "Centre Commune Oulad Ghanem",
            address: "Exact location will be sent to your phone later on.",
            description: "Join us in a celebration with friends and family.",
        },
        reception: EventDetails {
            title: "The Reception",
            date: "September 22, 2026",
            time: "6:00 PM",
            venue: "Centre Commune Oulad Ghanem",
            address: "Exact location will be sent to your phone later on.",
            description: "Celebrate with us over dinner, drinks, and dancing under the stars.",
        },
        dress_code: "Formal Attire",
        dress_code_description: "We kindly request formal attire or traditional clothes.",
    },
    venue: VenueLocation {
        lat: 32.8749287144863,
        lng: -8.857845076151674,
        name: "Centre Commune Oulad Ghanem",
        address: "Exact location will be sent to your phone later on.",
        google_maps_url:
            "https://www.google.com/maps/search/?api=1&query=Centre%20Commune%20Oulad%20Ghanem",
    },
    timeline: TIMELINE,
    music: MusicTrack {
        title: "Perfect",
        artist: "Ed Sheeran",
        url: "/assets/music.mp3",
    },
};

/// Parse a wedding date.
///
/// Accepts RFC 3339 (`2026-09-22T16:00:00+01:00`) or a naive local time
/// (`2026-09-22T16:00:00`), which is taken to be in venue time.
pub fn parse_wedding_date(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant);
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").ok()?;
    FixedOffset::east_opt(VENUE_UTC_OFFSET_SECS)?
        .from_local_datetime(&naive)
        .single()
}

/// Default countdown target.
pub fn wedding_target() -> Option<DateTime<FixedOffset>> {
    parse_wedding_date(WEDDING_DATE)
}
