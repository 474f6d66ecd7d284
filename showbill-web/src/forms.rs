//! Form payloads and validation
//!
//! Explicit payload structs for create/edit submissions. Every field is
//! mapped by hand between the form and the stored record; `validate()`
//! collects all violations so the renderer can show them at once. Nothing
//! is written to storage unless validation passes.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use showbill_common::{genres, time, Error, Result};
use uuid::Uuid;

use crate::db::artists::Artist;
use crate::db::shows::Show;
use crate::db::venues::Venue;

/// Two-letter US state and territory codes accepted by the state field.
static STATE_CODES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
        "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
        "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "PR", "RI", "SC", "SD", "TN", "TX",
        "UT", "VT", "VA", "WA", "WV", "WI", "WY",
    ]
});

fn check_required(violations: &mut Vec<String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        violations.push(format!("{} is required", field));
    }
}

fn check_state(violations: &mut Vec<String>, state: &str) {
    if !STATE_CODES.contains(&state) {
        violations.push(format!("'{}' is not a valid state code", state));
    }
}

fn check_phone(violations: &mut Vec<String>, phone: &str) {
    let ok = phone
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, ' ' | '-' | '+' | '(' | ')' | '.'));
    if !ok {
        violations.push(format!("'{}' is not a valid phone number", phone));
    }
}

fn check_genres(violations: &mut Vec<String>, genre_list: &[String]) {
    if genre_list.iter().all(|g| g.trim().is_empty()) {
        violations.push("At least one genre is required".to_string());
    }
}

/// Venue create/edit submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub website_link: String,
    #[serde(default)]
    pub seeking_talent: bool,
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// Collect every validation violation; empty means the form is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        check_required(&mut violations, "name", &self.name);
        check_required(&mut violations, "city", &self.city);
        check_required(&mut violations, "state", &self.state);
        if !self.state.trim().is_empty() {
            check_state(&mut violations, &self.state);
        }
        check_phone(&mut violations, &self.phone);
        check_genres(&mut violations, &self.genres);
        violations
    }

    /// Build the stored record for `guid` from this form (full overwrite).
    pub fn to_record(&self, guid: Uuid) -> Venue {
        Venue {
            guid,
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            genres: genres::encode(&self.genres),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            website_link: self.website_link.clone(),
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description.clone(),
        }
    }

    /// Populate a form from the stored record (edit-form rendering).
    pub fn from_record(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            genres: genres::decode(&venue.genres),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            website_link: venue.website_link.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        }
    }
}

/// Artist create/edit submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub website_link: String,
    #[serde(default)]
    pub seeking_venue: bool,
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    /// Collect every validation violation; empty means the form is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        check_required(&mut violations, "name", &self.name);
        check_required(&mut violations, "city", &self.city);
        check_required(&mut violations, "state", &self.state);
        if !self.state.trim().is_empty() {
            check_state(&mut violations, &self.state);
        }
        check_phone(&mut violations, &self.phone);
        check_genres(&mut violations, &self.genres);
        violations
    }

    /// Build the stored record for `guid` from this form (full overwrite).
    pub fn to_record(&self, guid: Uuid) -> Artist {
        Artist {
            guid,
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: self.phone.clone(),
            genres: genres::encode(&self.genres),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            website_link: self.website_link.clone(),
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description.clone(),
        }
    }

    /// Populate a form from the stored record (edit-form rendering).
    pub fn from_record(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: genres::decode(&artist.genres),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            website_link: artist.website_link.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        }
    }
}

/// Show create submission. Ids arrive as strings from the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    /// Collect every validation violation; empty means the form is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.artist_guid().is_err() {
            violations.push(format!("'{}' is not a valid artist id", self.artist_id));
        }
        if self.venue_guid().is_err() {
            violations.push(format!("'{}' is not a valid venue id", self.venue_id));
        }
        if self.start().is_err() {
            violations.push(format!("'{}' is not a valid start time", self.start_time));
        }
        violations
    }

    pub fn artist_guid(&self) -> Result<Uuid> {
        Uuid::parse_str(self.artist_id.trim())
            .map_err(|_| Error::InvalidInput(format!("Invalid artist id: {}", self.artist_id)))
    }

    pub fn venue_guid(&self) -> Result<Uuid> {
        Uuid::parse_str(self.venue_id.trim())
            .map_err(|_| Error::InvalidInput(format!("Invalid venue id: {}", self.venue_id)))
    }

    pub fn start(&self) -> Result<DateTime<Utc>> {
        time::parse_timestamp(self.start_time.trim())
    }

    /// Build the stored record from a validated form.
    pub fn to_record(&self, guid: Uuid) -> Result<Show> {
        Ok(Show {
            guid,
            artist_id: self.artist_guid()?,
            venue_id: self.venue_guid()?,
            start_time: self.start()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_venue_form() -> VenueForm {
        VenueForm {
            name: "The Fillmore".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1805 Geary Blvd".to_string(),
            phone: "415-555-0100".to_string(),
            genres: vec!["Jazz".to_string(), "Blues".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn valid_venue_form_passes() {
        assert!(valid_venue_form().validate().is_empty());
    }

    #[test]
    fn all_violations_are_collected() {
        let form = VenueForm {
            name: String::new(),
            city: String::new(),
            state: "California".to_string(),
            phone: "call me".to_string(),
            genres: vec![],
            ..Default::default()
        };
        let violations = form.validate();
        assert!(violations.iter().any(|v| v.contains("name")));
        assert!(violations.iter().any(|v| v.contains("city")));
        assert!(violations.iter().any(|v| v.contains("state code")));
        assert!(violations.iter().any(|v| v.contains("phone")));
        assert!(violations.iter().any(|v| v.contains("genre")));
    }

    #[test]
    fn venue_form_record_round_trip() {
        let form = valid_venue_form();
        let record = form.to_record(Uuid::new_v4());
        assert_eq!(record.genres, "Jazz,Blues");

        let back = VenueForm::from_record(&record);
        assert_eq!(back.name, form.name);
        assert_eq!(back.genres, form.genres);
    }

    #[test]
    fn artist_form_requires_state_code() {
        let form = ArtistForm {
            name: "Guided Tour".to_string(),
            city: "Portland".to_string(),
            state: "Oregon".to_string(),
            genres: vec!["Folk".to_string()],
            ..Default::default()
        };
        let violations = form.validate();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("state code"));
    }

    #[test]
    fn show_form_rejects_malformed_fields() {
        let form = ShowForm {
            artist_id: "not-a-uuid".to_string(),
            venue_id: Uuid::new_v4().to_string(),
            start_time: "next tuesday".to_string(),
        };
        let violations = form.validate();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn show_form_parses_valid_fields() {
        let form = ShowForm {
            artist_id: Uuid::new_v4().to_string(),
            venue_id: Uuid::new_v4().to_string(),
            start_time: "2026-09-01T20:00:00Z".to_string(),
        };
        assert!(form.validate().is_empty());
        let record = form.to_record(Uuid::new_v4()).expect("record");
        assert_eq!(
            time::format_timestamp(record.start_time),
            "2026-09-01T20:00:00Z"
        );
    }
}
