//! Client roster: keyed client records with explicit update operations.
//!
//! The roster is a map from client id to record, and the "active" client is
//! held as an id into that map rather than a copied record. Readers that go
//! through the roster therefore always observe the same snapshot after an
//! update; there is no second copy to drift.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cycle::MenstrualProfile;
use crate::error::CoreError;
use crate::plan::WeeklyDietPlan;

/// Coaching status of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    Pending,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[serde(rename = "Prefer not to say")]
    PreferNotToSay,
}

/// One coached client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub gender: Option<Gender>,
    /// Absent means the cycle feature does not apply; callers hide the
    /// cycle surfaces entirely instead of passing a placeholder profile
    /// to the engine.
    pub menstrual_profile: Option<MenstrualProfile>,
    pub goal: String,
    pub target_calories: u32,
    pub last_check_in: String,
    pub status: ClientStatus,
    pub current_plan: Option<WeeklyDietPlan>,
}

impl Client {
    /// New active client with a generated id and derived initials.
    pub fn new(name: &str, goal: &str, target_calories: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            initials: initials_of(name),
            gender: None,
            menstrual_profile: None,
            goal: goal.to_string(),
            target_calories,
            last_check_in: String::new(),
            status: ClientStatus::Active,
            current_plan: None,
        }
    }
}

fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// The trainer's client list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    clients: BTreeMap<String, Client>,
    selected: Option<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a client, returning its id.
    pub fn insert(&mut self, client: Client) -> String {
        let id = client.id.clone();
        self.clients.insert(id.clone(), client);
        id
    }

    pub fn get(&self, id: &str) -> Option<&Client> {
        self.clients.get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Client> {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.clients.remove(id)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Client> {
        self.clients.values()
    }

    /// Apply a mutation to one client in place.
    pub fn update<F>(&mut self, id: &str, mutate: F) -> Result<(), CoreError>
    where
        F: FnOnce(&mut Client),
    {
        let client = self
            .clients
            .get_mut(id)
            .ok_or_else(|| CoreError::UnknownClient(id.to_string()))?;
        mutate(client);
        Ok(())
    }

    /// Mark a client as the active selection.
    pub fn select(&mut self, id: &str) -> Result<(), CoreError> {
        if !self.clients.contains_key(id) {
            return Err(CoreError::UnknownClient(id.to_string()));
        }
        self.selected = Some(id.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The currently selected client, resolved through the map.
    pub fn selected(&self) -> Option<&Client> {
        self.selected.as_deref().and_then(|id| self.clients.get(id))
    }

    /// Case-insensitive substring search over name and goal.
    pub fn search(&self, query: &str) -> Vec<&Client> {
        let needle = query.to_lowercase();
        self.clients
            .values()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle) || c.goal.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn with_status(&self, status: ClientStatus) -> Vec<&Client> {
        self.clients
            .values()
            .filter(|c| c.status == status)
            .collect()
    }

    /// Log a new period start date ("my period started today/yesterday").
    ///
    /// Only the start date moves; cycle length and period duration carry
    /// over from the existing profile.
    pub fn record_period_start(&mut self, id: &str, date: NaiveDate) -> Result<(), CoreError> {
        let client = self
            .clients
            .get_mut(id)
            .ok_or_else(|| CoreError::UnknownClient(id.to_string()))?;
        let profile = client
            .menstrual_profile
            .as_mut()
            .ok_or_else(|| CoreError::NoMenstrualProfile(id.to_string()))?;
        profile.last_period_start = date;
        Ok(())
    }

    /// Replace a client's logged symptom tags.
    pub fn log_symptoms(&mut self, id: &str, symptoms: Vec<String>) -> Result<(), CoreError> {
        let client = self
            .clients
            .get_mut(id)
            .ok_or_else(|| CoreError::UnknownClient(id.to_string()))?;
        let profile = client
            .menstrual_profile
            .as_mut()
            .ok_or_else(|| CoreError::NoMenstrualProfile(id.to_string()))?;
        profile.symptoms = symptoms;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn roster_with_two() -> (Roster, String, String) {
        let mut roster = Roster::new();
        let mut preet = Client::new("Preet Sandhu", "Fat Loss", 1800);
        preet.gender = Some(Gender::Female);
        preet.menstrual_profile = Some(MenstrualProfile::new(date(2026, 1, 12), 28, 5));
        let preet_id = roster.insert(preet);
        let rajbir_id = roster.insert(Client::new("Rajbir Singh", "Strength", 3000));
        (roster, preet_id, rajbir_id)
    }

    #[test]
    fn test_initials_are_derived_from_name() {
        assert_eq!(Client::new("Preet Sandhu", "Fat Loss", 1800).initials, "PS");
        assert_eq!(Client::new("Rajeev", "General Health", 2200).initials, "R");
    }

    #[test]
    fn test_update_touches_only_the_target() {
        let (mut roster, preet_id, rajbir_id) = roster_with_two();
        roster
            .update(&preet_id, |c| c.target_calories = 1700)
            .unwrap();
        assert_eq!(roster.get(&preet_id).unwrap().target_calories, 1700);
        assert_eq!(roster.get(&rajbir_id).unwrap().target_calories, 3000);
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let (mut roster, _, _) = roster_with_two();
        let err = roster.update("nope", |_| {}).unwrap_err();
        assert!(matches!(err, CoreError::UnknownClient(_)));
    }

    #[test]
    fn test_selection_follows_the_id_not_a_snapshot() {
        let (mut roster, preet_id, _) = roster_with_two();
        roster.select(&preet_id).unwrap();
        roster.update(&preet_id, |c| c.goal = "Recomp".to_string()).unwrap();
        // the selection resolves through the map, so it sees the update
        assert_eq!(roster.selected().unwrap().goal, "Recomp");
    }

    #[test]
    fn test_removing_selected_client_clears_selection() {
        let (mut roster, preet_id, _) = roster_with_two();
        roster.select(&preet_id).unwrap();
        roster.remove(&preet_id);
        assert!(roster.selected().is_none());
    }

    #[test]
    fn test_record_period_start_moves_only_the_date() {
        let (mut roster, preet_id, _) = roster_with_two();
        roster
            .record_period_start(&preet_id, date(2026, 2, 9))
            .unwrap();
        let profile = roster
            .get(&preet_id)
            .unwrap()
            .menstrual_profile
            .as_ref()
            .unwrap();
        assert_eq!(profile.last_period_start, date(2026, 2, 9));
        assert_eq!(profile.cycle_length, 28);
        assert_eq!(profile.period_duration, 5);
    }

    #[test]
    fn test_record_period_start_requires_a_profile() {
        let (mut roster, _, rajbir_id) = roster_with_two();
        let err = roster
            .record_period_start(&rajbir_id, date(2026, 2, 9))
            .unwrap_err();
        assert!(matches!(err, CoreError::NoMenstrualProfile(_)));
    }

    #[test]
    fn test_log_symptoms_replaces_tags() {
        let (mut roster, preet_id, _) = roster_with_two();
        roster
            .log_symptoms(&preet_id, vec!["Cramps".to_string(), "Fatigue".to_string()])
            .unwrap();
        let profile = roster
            .get(&preet_id)
            .unwrap()
            .menstrual_profile
            .as_ref()
            .unwrap();
        assert_eq!(profile.symptoms, vec!["Cramps", "Fatigue"]);
    }

    #[test]
    fn test_search_matches_name_and_goal() {
        let (roster, _, _) = roster_with_two();
        assert_eq!(roster.search("preet").len(), 1);
        assert_eq!(roster.search("strength").len(), 1);
        assert_eq!(roster.search("zzz").len(), 0);
    }

    #[test]
    fn test_with_status_filters() {
        let (mut roster, _, rajbir_id) = roster_with_two();
        roster
            .update(&rajbir_id, |c| c.status = ClientStatus::Paused)
            .unwrap();
        assert_eq!(roster.with_status(ClientStatus::Active).len(), 1);
        assert_eq!(roster.with_status(ClientStatus::Paused).len(), 1);
    }
}
