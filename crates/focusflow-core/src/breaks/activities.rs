//! Catalog of mindful break activities.

use rand::seq::SliceRandom;
use serde::Serialize;

/// A suggested break activity with step-by-step instructions.
#[derive(Debug, Clone, Serialize)]
pub struct BreakActivity {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub steps: &'static [&'static str],
}

pub const ACTIVITIES: [BreakActivity; 3] = [
    BreakActivity {
        id: "stretch",
        title: "Neck & Shoulder Stretch",
        description: "Relieve tension from long sitting periods",
        duration: "2 minutes",
        steps: &[
            "Slowly roll your shoulders backward 5 times",
            "Gently tilt your head to the right for 15 seconds",
            "Tilt your head to the left for 15 seconds",
            "Look up and down slowly 5 times",
            "Roll your head in a gentle circle",
        ],
    },
    BreakActivity {
        id: "hydration",
        title: "Hydration Break",
        description: "Stay hydrated for better focus",
        duration: "1 minute",
        steps: &[
            "Drink a full glass of water slowly",
            "Take 5 deep breaths",
            "Notice how the water makes you feel refreshed",
        ],
    },
    BreakActivity {
        id: "movement",
        title: "Quick Movement",
        description: "Get your blood flowing",
        duration: "3 minutes",
        steps: &[
            "Stand up and march in place for 30 seconds",
            "Do 10 gentle jumping jacks",
            "Stretch your arms above your head",
            "Touch your toes (or as far as comfortable)",
            "Take 3 deep breaths",
        ],
    },
];

/// Look up an activity by id.
pub fn find(id: &str) -> Option<&'static BreakActivity> {
    ACTIVITIES.iter().find(|a| a.id == id)
}

/// Pick a random activity ("surprise me").
pub fn random() -> &'static BreakActivity {
    ACTIVITIES
        .choose(&mut rand::thread_rng())
        .expect("catalog is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_id() {
        assert_eq!(find("stretch").unwrap().title, "Neck & Shoulder Stretch");
        assert!(find("sleep").is_none());
    }

    #[test]
    fn every_activity_has_steps() {
        for activity in &ACTIVITIES {
            assert!(!activity.steps.is_empty(), "{} has no steps", activity.id);
        }
    }

    #[test]
    fn random_comes_from_catalog() {
        let picked = random();
        assert!(ACTIVITIES.iter().any(|a| a.id == picked.id));
    }
}
