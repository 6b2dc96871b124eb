use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An extracurricular offering. The activity name is the catalog key and is
/// not repeated inside the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advertised capacity. Signups are not rejected once it is reached.
    pub max_participants: u32,
    /// Participant emails in signup order, unique per activity
    pub participants: Vec<String>,
}

/// The initial activity catalog, loaded once at startup.
pub fn seed_activities() -> HashMap<String, Activity> {
    let seed: [(&str, &str, &str, u32, &[&str]); 9] = [
        (
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        (
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        (
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        (
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        (
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        (
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        (
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        (
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        (
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ];

    seed.into_iter()
        .map(
            |(name, description, schedule, max_participants, participants)| {
                (
                    name.to_string(),
                    Activity {
                        description: description.to_string(),
                        schedule: schedule.to_string(),
                        max_participants,
                        participants: participants.iter().map(|p| p.to_string()).collect(),
                    },
                )
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog() {
        let activities = seed_activities();
        assert_eq!(activities.len(), 9);

        let chess = activities.get("Chess Club").unwrap();
        assert_eq!(chess.max_participants, 12);
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }

    #[test]
    fn test_activity_serializes_without_name() {
        let activities = seed_activities();
        let json = serde_json::to_value(activities.get("Math Club").unwrap()).unwrap();

        assert!(json.get("name").is_none());
        assert_eq!(json["max_participants"], 10);
        assert_eq!(json["schedule"], "Tuesdays, 3:30 PM - 4:30 PM");
    }
}
