use std::{fs, path::Path};

use serde::Deserialize;

use super::activity::ActivitySeed;
use crate::error::SeedError;

/// On-disk seed layout: `[[activities]]` tables in TOML, or
/// `{"activities": [...]}` in JSON.
#[derive(Debug, Deserialize)]
struct SeedFile {
    activities: Vec<ActivitySeed>,
}

/// Load activity seeds from a TOML or JSON file. The format is chosen by
/// extension; unknown extensions try TOML first, then JSON.
pub fn load_seed_file(path: &Path) -> Result<Vec<ActivitySeed>, SeedError> {
    let contents =
        fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let parsed: SeedFile = match path.extension().and_then(|ext| ext.to_str())
    {
        Some("json") => serde_json::from_str(&contents).map_err(|source| {
            SeedError::Json {
                path: path.to_path_buf(),
                source,
            }
        })?,
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(|source| SeedError::Toml {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => toml::from_str(&contents).or_else(|toml_err| {
            serde_json::from_str(&contents).map_err(|json_err| {
                SeedError::UnknownFormat {
                    path: path.to_path_buf(),
                    toml: toml_err.to_string(),
                    json: json_err.to_string(),
                }
            })
        })?,
    };

    Ok(parsed.activities)
}

/// The nine Mergington High School activities every fresh directory starts
/// with unless a seed file is configured.
pub fn default_seed() -> Vec<ActivitySeed> {
    vec![
        ActivitySeed::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ActivitySeed::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ActivitySeed::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ActivitySeed::new(
            "Basketball Team",
            "Competitive basketball practice and games",
            "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
            15,
        )
        .with_participants(["james@mergington.edu", "lucas@mergington.edu"]),
        ActivitySeed::new(
            "Swimming Club",
            "Swimming lessons and competitive swimming",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            25,
        )
        .with_participants(["ava@mergington.edu", "mia@mergington.edu"]),
        ActivitySeed::new(
            "Art Studio",
            "Explore painting, drawing, and mixed media art",
            "Wednesdays, 3:30 PM - 5:30 PM",
            15,
        )
        .with_participants([
            "isabella@mergington.edu",
            "charlotte@mergington.edu",
        ]),
        ActivitySeed::new(
            "Drama Club",
            "Theater performances, acting, and stage production",
            "Mondays and Thursdays, 4:00 PM - 6:00 PM",
            20,
        )
        .with_participants(["ethan@mergington.edu", "amelia@mergington.edu"]),
        ActivitySeed::new(
            "Debate Team",
            "Develop critical thinking and public speaking skills",
            "Tuesdays, 3:30 PM - 5:00 PM",
            16,
        )
        .with_participants([
            "william@mergington.edu",
            "harper@mergington.edu",
        ]),
        ActivitySeed::new(
            "Science Olympiad",
            "Compete in science and engineering challenges",
            "Fridays, 3:00 PM - 5:00 PM",
            18,
        )
        .with_participants([
            "alexander@mergington.edu",
            "evelyn@mergington.edu",
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_seed_has_nine_unique_activities() {
        let seeds = default_seed();
        assert_eq!(seeds.len(), 9);

        let names: HashSet<_> = seeds.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names.len(), 9);
        assert!(seeds.iter().all(|s| s.max_participants > 0));
        assert!(seeds.iter().all(|s| s.participants.len() == 2));
    }

    #[test]
    fn chess_club_starts_with_two_members() {
        let chess = default_seed()
            .into_iter()
            .find(|s| s.name == "Chess Club")
            .expect("chess club seeded");
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
        assert_eq!(chess.max_participants, 12);
    }
}
