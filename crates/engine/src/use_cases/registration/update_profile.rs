//! Administrative edits of a hero's identity fields.

use std::sync::Arc;

use classquest_domain::{Grade, Hero, HeroClass, HeroId, HeroName, HeroProfile, Room};

use super::error::RegistrationError;
use crate::repositories::{hero_mut, Roster};

#[derive(Debug, Clone)]
pub struct ProfileInput {
    pub name: String,
    pub hero_class: HeroClass,
    pub grade: u8,
    pub room: u8,
    /// `None` keeps the current avatar.
    pub avatar: Option<String>,
}

pub struct UpdateProfile {
    roster: Arc<Roster>,
}

impl UpdateProfile {
    pub fn new(roster: Arc<Roster>) -> Self {
        Self { roster }
    }

    /// Replace name, class, classroom and avatar. Stats and id never change.
    pub async fn execute(
        &self,
        id: &HeroId,
        input: ProfileInput,
    ) -> Result<Hero, RegistrationError> {
        let name = HeroName::new(input.name)?;
        let grade = Grade::new(input.grade)?;
        let room = Room::new(input.room)?;

        let mut heroes = self.roster.load().await?;
        let hero = hero_mut(&mut heroes, id)
            .ok_or_else(|| RegistrationError::HeroNotFound(id.clone()))?;
        let avatar = input
            .avatar
            .filter(|avatar| !avatar.trim().is_empty())
            .unwrap_or_else(|| hero.avatar().to_string());
        hero.update_profile(HeroProfile {
            name,
            hero_class: input.hero_class,
            grade,
            room,
            avatar,
        });
        let updated = hero.clone();

        self.roster.save(&heroes).await?;
        tracing::info!(hero_id = %id, "Hero profile updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{hero_id, hero_with, roster_with, stored_hero};
    use classquest_domain::HeroStats;

    fn input(name: &str) -> ProfileInput {
        ProfileInput {
            name: name.to_string(),
            hero_class: HeroClass::Healer,
            grade: 2,
            room: 4,
            avatar: None,
        }
    }

    #[tokio::test]
    async fn edits_identity_and_keeps_stats() {
        let stats = HeroStats {
            level: 4,
            hp: 33,
            max_hp: 150,
            xp: 12,
            gold: 999,
        };
        let (roster, stored) = roster_with(vec![hero_with("101", HeroClass::Warrior, stats)]);
        let use_case = UpdateProfile::new(roster);

        let updated = use_case
            .execute(&hero_id("101"), input("Arthur the Kind"))
            .await
            .unwrap();

        assert_eq!(updated.name().as_str(), "Arthur the Kind");
        assert_eq!(updated.hero_class(), HeroClass::Healer);
        assert_eq!(updated.classroom().to_string(), "2/4");
        assert_eq!(updated.stats(), stats);
        assert_eq!(stored_hero(&stored, "101"), updated);
    }

    #[tokio::test]
    async fn unknown_hero_is_not_found() {
        let (roster, _) = roster_with(Vec::new());
        let result = UpdateProfile::new(roster)
            .execute(&hero_id("404"), input("Nobody"))
            .await;
        assert!(matches!(result, Err(RegistrationError::HeroNotFound(_))));
    }

    #[tokio::test]
    async fn invalid_room_is_rejected() {
        let (roster, _) = roster_with(Vec::new());
        let mut bad = input("Roomless");
        bad.room = 0;
        let result = UpdateProfile::new(roster).execute(&hero_id("101"), bad).await;
        assert!(matches!(result, Err(RegistrationError::Validation(_))));
    }
}
