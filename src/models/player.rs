// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Player record returned by the registration endpoint.

use chrono::NaiveDate;
use serde::Deserialize;

/// Subset of the backend player schema shown after registration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Player {
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_ut: Option<String>,
    #[serde(default)]
    pub not_in_india: bool,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub membership: Option<Membership>,
}

/// Membership summary attached to a player, when one exists.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Membership {
    pub membership_number: String,
    #[serde(default)]
    pub is_active: bool,
}

impl Player {
    /// Name to show in the success view, falling back to the id.
    pub fn display_name(&self) -> String {
        let name = self.full_name.trim();
        if name.is_empty() {
            format!("Player #{}", self.id)
        } else {
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_player_and_ignores_unknown_fields() {
        let body = r#"{
            "id": 42,
            "user": 9,
            "full_name": "Nora Quinn",
            "date_of_birth": "1990-01-01",
            "gender": "F",
            "other_gender": null,
            "city": "Bangalore",
            "state_ut": "KA",
            "not_in_india": false,
            "teams": [],
            "occupation": null,
            "sponsored": false,
            "membership": null
        }"#;

        let player: Player = serde_json::from_str(body).unwrap();

        assert_eq!(player.id, 42);
        assert_eq!(player.display_name(), "Nora Quinn");
        assert_eq!(player.date_of_birth, NaiveDate::from_ymd_opt(1990, 1, 1));
        assert_eq!(player.state_ut.as_deref(), Some("KA"));
        assert!(player.membership.is_none());
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let player: Player = serde_json::from_str(r#"{"id": 5}"#).unwrap();
        assert_eq!(player.display_name(), "Player #5");
    }
}
