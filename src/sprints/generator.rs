//! Initial sprint sequence generation

use chrono::{Duration, NaiveDate};

use super::models::{LifeTrack, Material, Sprint, WEEKS_PER_SPRINT};

/// Sprint length in days: 4 weeks, day 0 to day 27 inclusive
pub const SPRINT_LENGTH_DAYS: i64 = 28;

const DEFAULT_MATERIAL_ID: &str = "default-drive";
const DEFAULT_MATERIAL_LABEL: &str = "Materials";
const DEFAULT_MATERIAL_URL: &str =
    "https://drive.google.com/drive/folders/1eZ6grD-bKoQxP8CS0dN9O92jCbE8DEnn?usp=sharing";

/// Default track assignment, cycled by sprint index
const TRACK_CYCLE: [LifeTrack; 3] = [
    LifeTrack::Growth,
    LifeTrack::Stability,
    LifeTrack::Recovery,
];

/// Generate `count` back-to-back sprints starting at `start_date`.
///
/// Sprints are gapless: each one starts the day after the previous one
/// ends. Pure and deterministic; `count == 0` yields an empty sequence.
pub fn generate(start_date: NaiveDate, count: usize) -> Vec<Sprint> {
    let mut sprints = Vec::with_capacity(count);

    for i in 0..count {
        let start = start_date + Duration::days(SPRINT_LENGTH_DAYS * i as i64);
        let end = start + Duration::days(SPRINT_LENGTH_DAYS - 1);
        let life_track = TRACK_CYCLE[i % TRACK_CYCLE.len()];

        sprints.push(Sprint {
            id: format!("sprint-{}", i + 1),
            title: format!("Sprint {}", i + 1),
            start_date: start,
            end_date: end,
            life_track,
            description: Some(default_description(i + 1, life_track)),
            materials: vec![Material {
                id: DEFAULT_MATERIAL_ID.to_string(),
                label: DEFAULT_MATERIAL_LABEL.to_string(),
                url: DEFAULT_MATERIAL_URL.to_string(),
            }],
            weekly_reviews: vec![false; WEEKS_PER_SPRINT],
        });
    }

    sprints
}

/// Template description keyed by track, interpolating the 1-based index
fn default_description(number: usize, track: LifeTrack) -> String {
    let focus = match track {
        LifeTrack::Growth => "breaking new ground and picking up skills",
        LifeTrack::Stability => "consolidating and refining daily routines",
        LifeTrack::Recovery => "resetting body and mind and restoring energy",
    };
    format!("Deep practice for cycle {}. Focused on {}.", number, focus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_generate_count() {
        let start = date(2026, 1, 17);
        for count in [0, 1, 3, 12] {
            assert_eq!(generate(start, count).len(), count);
        }
    }

    #[test]
    fn test_generate_single_sprint_span() {
        let sprints = generate(date(2026, 1, 17), 1);

        assert_eq!(sprints.len(), 1);
        let sprint = &sprints[0];
        assert_eq!(sprint.id, "sprint-1");
        assert_eq!(sprint.title, "Sprint 1");
        assert_eq!(sprint.start_date, date(2026, 1, 17));
        assert_eq!(sprint.end_date, date(2026, 2, 13));
        assert_eq!(sprint.life_track, LifeTrack::Growth);
    }

    #[test]
    fn test_generate_contiguous_and_28_days() {
        let sprints = generate(date(2026, 1, 17), 12);

        for sprint in &sprints {
            let days = (sprint.end_date - sprint.start_date).num_days() + 1;
            assert_eq!(days, SPRINT_LENGTH_DAYS);
        }
        for pair in sprints.windows(2) {
            assert_eq!(
                pair[1].start_date,
                pair[0].end_date + Duration::days(1),
                "sprint {} should start the day after {} ends",
                pair[1].id,
                pair[0].id
            );
        }
    }

    #[test]
    fn test_generate_track_cycle() {
        let sprints = generate(date(2026, 1, 17), 7);
        let expected = [
            LifeTrack::Growth,
            LifeTrack::Stability,
            LifeTrack::Recovery,
            LifeTrack::Growth,
            LifeTrack::Stability,
            LifeTrack::Recovery,
            LifeTrack::Growth,
        ];
        for (sprint, track) in sprints.iter().zip(expected) {
            assert_eq!(sprint.life_track, track);
        }
    }

    #[test]
    fn test_generate_defaults() {
        let sprints = generate(date(2026, 1, 17), 2);

        for (i, sprint) in sprints.iter().enumerate() {
            assert_eq!(sprint.weekly_reviews, vec![false; WEEKS_PER_SPRINT]);
            assert_eq!(sprint.materials.len(), 1);
            assert_eq!(sprint.materials[0].id, "default-drive");
            assert_eq!(sprint.materials[0].label, "Materials");
            let description = sprint.description.as_deref().unwrap();
            assert!(description.contains(&format!("cycle {}", i + 1)));
        }
    }

    #[test]
    fn test_generate_deterministic() {
        let start = date(2026, 1, 17);
        assert_eq!(generate(start, 5), generate(start, 5));
    }
}
