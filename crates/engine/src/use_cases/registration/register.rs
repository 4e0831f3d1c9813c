//! Register hero use case.
//!
//! Adds a new level 1 hero to the roster and records a welcome log entry.

use std::sync::Arc;

use classquest_domain::{
    Grade, Hero, HeroClass, HeroId, HeroName, HeroProfile, LogKind, NewLogEntry, Room,
};

use super::error::RegistrationError;
use crate::infrastructure::storage::seed;
use crate::repositories::{Chronicle, Roster};

const WELCOME_REASON: &str = "Joined the hero guild";

#[derive(Debug, Clone)]
pub struct RegisterHeroInput {
    pub id: String,
    pub name: String,
    pub hero_class: HeroClass,
    pub grade: u8,
    pub room: u8,
    /// Defaults to the next cartoon avatar in rotation.
    pub avatar: Option<String>,
}

pub struct RegisterHero {
    roster: Arc<Roster>,
    chronicle: Arc<Chronicle>,
}

impl RegisterHero {
    pub fn new(roster: Arc<Roster>, chronicle: Arc<Chronicle>) -> Self {
        Self { roster, chronicle }
    }

    /// # Returns
    /// * `Ok(Hero)` - The stored hero with class base stats
    /// * `Err(RegistrationError::DuplicateId)` - The id is taken
    /// * `Err(RegistrationError::Validation)` - Empty id/name, grade or room out of range
    pub async fn execute(&self, input: RegisterHeroInput) -> Result<Hero, RegistrationError> {
        let id = HeroId::new(input.id)?;
        let name = HeroName::new(input.name)?;
        let grade = Grade::new(input.grade)?;
        let room = Room::new(input.room)?;

        let mut heroes = self.roster.load().await?;
        if heroes.iter().any(|hero| hero.id() == &id) {
            tracing::warn!(hero_id = %id, "Registration rejected, id already taken");
            return Err(RegistrationError::DuplicateId(id));
        }

        let avatar = input
            .avatar
            .filter(|avatar| !avatar.trim().is_empty())
            .unwrap_or_else(|| seed::avatar(heroes.len()).to_string());
        let hero = Hero::register(
            id,
            HeroProfile {
                name,
                hero_class: input.hero_class,
                grade,
                room,
                avatar,
            },
        );

        heroes.push(hero.clone());
        self.roster.save(&heroes).await?;
        self.chronicle
            .append(NewLogEntry::for_hero(&hero, LogKind::Xp, 0, WELCOME_REASON))
            .await?;

        tracing::info!(
            hero_id = %hero.id(),
            hero_class = %hero.hero_class(),
            classroom = %hero.classroom(),
            "Hero registered"
        );
        Ok(hero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{broken_roster, chronicle, hero, roster_with};

    fn input(id: &str, name: &str, hero_class: HeroClass) -> RegisterHeroInput {
        RegisterHeroInput {
            id: id.to_string(),
            name: name.to_string(),
            hero_class,
            grade: 3,
            room: 2,
            avatar: None,
        }
    }

    #[tokio::test]
    async fn registers_with_class_base_stats() {
        let (roster, stored) = roster_with(vec![hero("101", HeroClass::Warrior)]);
        let (chronicle, log) = chronicle();
        let use_case = RegisterHero::new(roster, chronicle);

        let registered = use_case
            .execute(input("201", "Gwen Brightshield", HeroClass::Healer))
            .await
            .unwrap();

        assert_eq!(registered.level(), 1);
        assert_eq!(registered.max_hp(), 90);
        assert_eq!(registered.hp(), 90);
        assert_eq!(registered.xp(), 0);
        assert_eq!(registered.gold(), 50);
        assert_eq!(registered.avatar(), seed::AVATARS[1]);
        assert_eq!(stored.lock().unwrap().len(), 2);

        let log = log.lock().unwrap();
        let entry = &log.entries()[0];
        assert_eq!(entry.kind(), LogKind::Xp);
        assert_eq!(entry.amount(), 0);
        assert_eq!(entry.reason(), WELCOME_REASON);
        assert_eq!(entry.student_name(), "Gwen Brightshield");
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected_and_nothing_changes() {
        let (roster, stored) = roster_with(vec![hero("101", HeroClass::Warrior)]);
        let (chronicle, log) = chronicle();
        let use_case = RegisterHero::new(roster, chronicle);

        let result = use_case
            .execute(input(" 101 ", "Impostor", HeroClass::Mage))
            .await;

        assert!(matches!(result, Err(RegistrationError::DuplicateId(_))));
        assert_eq!(stored.lock().unwrap().len(), 1);
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_fields_are_validation_errors() {
        let (roster, _) = roster_with(Vec::new());
        let (chronicle, _) = chronicle();
        let use_case = RegisterHero::new(roster, chronicle);

        let no_name = use_case.execute(input("301", "  ", HeroClass::Mage)).await;
        assert!(matches!(no_name, Err(RegistrationError::Validation(_))));

        let no_id = use_case.execute(input("", "Nameless", HeroClass::Mage)).await;
        assert!(matches!(no_id, Err(RegistrationError::Validation(_))));

        let mut bad_grade = input("302", "Too Old", HeroClass::Mage);
        bad_grade.grade = 7;
        assert!(matches!(
            use_case.execute(bad_grade).await,
            Err(RegistrationError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn explicit_avatar_is_kept() {
        let (roster, _) = roster_with(Vec::new());
        let (chronicle, _) = chronicle();
        let use_case = RegisterHero::new(roster, chronicle);

        let mut with_avatar = input("401", "Pixel", HeroClass::Warrior);
        with_avatar.avatar = Some("https://example.test/pixel.svg".to_string());
        let registered = use_case.execute(with_avatar).await.unwrap();
        assert_eq!(registered.avatar(), "https://example.test/pixel.svg");
    }

    #[tokio::test]
    async fn repo_error_propagates() {
        let (chronicle, _) = chronicle();
        let use_case = RegisterHero::new(broken_roster(), chronicle);
        let result = use_case
            .execute(input("501", "Unlucky", HeroClass::Warrior))
            .await;
        assert!(matches!(result, Err(RegistrationError::Repo(_))));
    }
}
