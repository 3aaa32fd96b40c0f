//! # Shows
//!
//! A show is anything the cinema can put on a screen: a standard movie, an
//! animated movie, or a concert film. The three kinds share title,
//! description, release year, and duration; each carries one kind-specific
//! field. Page handlers match on [`ShowKind`] exhaustively, so adding a kind
//! is a compile-checked change.

use std::fmt;
use std::time::Duration;

use uuid::Uuid;

/// Earliest release year the add/edit forms accept.
pub const MIN_RELEASE_YEAR: i64 = 1500;
/// Latest release year the add/edit forms accept.
pub const MAX_RELEASE_YEAR: i64 = 3000;
/// Shortest runtime in minutes.
pub const MIN_DURATION_MINUTES: i64 = 1;
/// Longest runtime in minutes.
pub const MAX_DURATION_MINUTES: i64 = 600;

/// Opaque identity of a show. Survives collection mutation, unlike an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShowId(Uuid);

impl ShowId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// The kind of show plus its kind-specific field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowKind {
    Movie { lead_actor: String },
    AnimatedMovie { studio: String },
    ConcertFilm { artist: String },
}

impl ShowKind {
    pub fn label(&self) -> &'static str {
        match self {
            ShowKind::Movie { .. } => "Standard Movie",
            ShowKind::AnimatedMovie { .. } => "Animated Movie",
            ShowKind::ConcertFilm { .. } => "Concert Film",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Show {
    id: ShowId,
    pub title: String,
    pub description: String,
    pub release_year: i64,
    pub duration: Duration,
    pub kind: ShowKind,
}

impl Show {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        release_year: i64,
        duration: Duration,
        kind: ShowKind,
    ) -> Self {
        Self {
            id: ShowId::new(),
            title: title.into(),
            description: description.into(),
            release_year,
            duration,
            kind,
        }
    }

    pub fn id(&self) -> ShowId {
        self.id
    }

    /// Runtime as `H:MM`.
    pub fn duration_display(&self) -> String {
        let minutes = self.duration.as_secs() / 60;
        format!("{}:{:02}", minutes / 60, minutes % 60)
    }

    /// One-line listing entry: `Title (Year) [H:MM] - Kind`.
    pub fn short_info(&self) -> String {
        format!(
            "{} ({}) [{}] - {}",
            self.title,
            self.release_year,
            self.duration_display(),
            self.kind.label()
        )
    }

    /// Multi-line detail view used by the manage pages.
    pub fn long_info(&self) -> Vec<String> {
        let mut info = vec![
            format!("Title: {}", self),
            format!("Type: {}", self.kind.label()),
            format!("Description: {}", self.description),
        ];
        match &self.kind {
            ShowKind::Movie { lead_actor } => info.push(format!("Lead Actor: {}", lead_actor)),
            ShowKind::AnimatedMovie { studio } => {
                info.push(format!("Animation Studio: {}", studio));
            }
            ShowKind::ConcertFilm { artist } => info.push(format!("Artist: {}", artist)),
        }
        info.push(format!("Duration: {}", self.duration_display()));
        info
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.release_year)
    }
}

// Validation helpers used by the add/edit forms. The entities themselves
// store whatever they are given; the forms reject bad input before it gets
// here.

pub fn title_is_valid(title: &str) -> bool {
    !title.trim().is_empty()
}

pub fn year_in_range(year: i64) -> bool {
    (MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year)
}

pub fn duration_minutes_in_range(minutes: i64) -> bool {
    (MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movie() -> Show {
        Show::new(
            "Iron Man",
            "Billionaire engineer builds a suit of armor.",
            2008,
            Duration::from_secs(126 * 60),
            ShowKind::Movie {
                lead_actor: "Robert Downey Jr.".to_string(),
            },
        )
    }

    #[test]
    fn test_display_is_title_and_year() {
        assert_eq!(sample_movie().to_string(), "Iron Man (2008)");
    }

    #[test]
    fn test_short_info_contains_kind_label() {
        let info = sample_movie().short_info();
        assert_eq!(info, "Iron Man (2008) [2:06] - Standard Movie");
    }

    #[test]
    fn test_long_info_has_variant_line() {
        let show = Show::new(
            "Spirited Away",
            "",
            2001,
            Duration::from_secs(125 * 60),
            ShowKind::AnimatedMovie {
                studio: "Studio Ghibli".to_string(),
            },
        );
        assert!(
            show.long_info()
                .iter()
                .any(|line| line == "Animation Studio: Studio Ghibli")
        );
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(sample_movie().id(), sample_movie().id());
    }

    #[test]
    fn test_title_validation() {
        assert!(title_is_valid("Heat"));
        assert!(!title_is_valid(""));
        assert!(!title_is_valid("   "));
    }

    #[test]
    fn test_year_bounds() {
        assert!(year_in_range(MIN_RELEASE_YEAR));
        assert!(year_in_range(MAX_RELEASE_YEAR));
        assert!(!year_in_range(MIN_RELEASE_YEAR - 1));
        assert!(!year_in_range(MAX_RELEASE_YEAR + 1));
    }

    #[test]
    fn test_duration_bounds() {
        assert!(duration_minutes_in_range(1));
        assert!(duration_minutes_in_range(600));
        assert!(!duration_minutes_in_range(0));
        assert!(!duration_minutes_in_range(601));
    }
}
