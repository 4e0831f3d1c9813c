//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    config::AppConfig,
    ports::{
        ActionLogRepo, ClockPort, CollectionStore, QuestCatalogRepo, RandomPort, RepoError,
        RosterRepo, ShopCatalogRepo,
    },
    storage::{JsonFileStore, StoreRepositories},
};
use crate::repositories::{Chronicle, Roster};
use crate::use_cases;

/// Main application state.
///
/// Holds the shared repositories and every use case, wired once at startup.
pub struct App {
    pub config: AppConfig,
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for the shared collections.
pub struct Repositories {
    pub roster: Arc<Roster>,
    pub chronicle: Arc<Chronicle>,
    pub quests: Arc<dyn QuestCatalogRepo>,
    pub shop: Arc<dyn ShopCatalogRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub registration: use_cases::RegistrationUseCases,
    pub progression: use_cases::ProgressionUseCases,
    pub quests: use_cases::QuestUseCases,
    pub check_in: use_cases::CheckInUseCases,
    pub shop: use_cases::ShopUseCases,
    pub queries: Arc<use_cases::RosterQueries>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        repos: StoreRepositories,
        config: AppConfig,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let roster_repo: Arc<dyn RosterRepo> = repos.roster.clone();
        let action_log_repo: Arc<dyn ActionLogRepo> = repos.action_log.clone();
        let quest_repo: Arc<dyn QuestCatalogRepo> = repos.quests.clone();
        let shop_repo: Arc<dyn ShopCatalogRepo> = repos.shop.clone();

        let roster = Arc::new(Roster::new(roster_repo));
        let chronicle = Arc::new(Chronicle::new(
            action_log_repo,
            clock.clone(),
            random.clone(),
        ));

        let registration = use_cases::RegistrationUseCases::new(
            Arc::new(use_cases::registration::RegisterHero::new(
                roster.clone(),
                chronicle.clone(),
            )),
            Arc::new(use_cases::registration::UpdateProfile::new(roster.clone())),
            Arc::new(use_cases::registration::RemoveHero::new(roster.clone())),
        );

        let progression = use_cases::ProgressionUseCases::new(
            Arc::new(use_cases::progression::ApplyAction::new(
                roster.clone(),
                chronicle.clone(),
            )),
            Arc::new(use_cases::progression::MassAward::new(
                roster.clone(),
                chronicle.clone(),
            )),
        );

        let quests = use_cases::QuestUseCases::new(
            Arc::new(use_cases::quest::StartQuest::new(
                roster.clone(),
                quest_repo.clone(),
                clock.clone(),
            )),
            Arc::new(use_cases::quest::ClaimQuest::new(
                roster.clone(),
                quest_repo.clone(),
                chronicle.clone(),
                clock.clone(),
            )),
            Arc::new(use_cases::quest::QuestBoard::new(
                roster.clone(),
                quest_repo.clone(),
                clock.clone(),
            )),
        );

        let check_in = use_cases::CheckInUseCases::new(
            Arc::new(use_cases::check_in::DailyCheckIn::new(
                roster.clone(),
                chronicle.clone(),
                clock.clone(),
                config.calendar,
                config.rewards,
            )),
            Arc::new(use_cases::check_in::MarkAttendance::new(
                roster.clone(),
                chronicle.clone(),
                clock,
                config.calendar,
                config.rewards,
            )),
        );

        let shop = use_cases::ShopUseCases::new(
            Arc::new(use_cases::shop::Purchase::new(
                roster.clone(),
                shop_repo.clone(),
                chronicle.clone(),
            )),
            Arc::new(use_cases::shop::ShopCatalog::new(shop_repo.clone(), random)),
        );

        let queries = Arc::new(use_cases::RosterQueries::new(
            roster.clone(),
            chronicle.clone(),
        ));

        Self {
            config,
            repositories: Repositories {
                roster,
                chronicle,
                quests: quest_repo,
                shop: shop_repo,
            },
            use_cases: UseCases {
                registration,
                progression,
                quests,
                check_in,
                shop,
                queries,
            },
        }
    }

    /// Open the JSON store under `config.data_dir` with the system clock.
    pub async fn open(config: AppConfig) -> Result<Self, RepoError> {
        let store: Arc<dyn CollectionStore> =
            Arc::new(JsonFileStore::open(&config.data_dir).await?);
        tracing::info!(data_dir = %config.data_dir.display(), "Opened classroom data");
        Ok(Self::with_store(store, config))
    }

    fn with_store(store: Arc<dyn CollectionStore>, config: AppConfig) -> Self {
        Self::new(
            StoreRepositories::new(store),
            config,
            Arc::new(SystemClock::new()),
            Arc::new(SystemRandom::new()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, SequentialRandom};
    use crate::infrastructure::storage::InMemoryStore;
    use crate::test_fixtures::now;
    use crate::use_cases::progression::MassAwardTargets;
    use crate::use_cases::registration::RegisterHeroInput;
    use chrono::{DateTime, Duration, Utc};
    use classquest_domain::{
        HeroClass, HeroId, LogKind, QuestClaimOutcome, QuestId, RosterFilter, ShopItemId,
        StatKind,
    };

    fn app_at(store: Arc<dyn CollectionStore>, at: DateTime<Utc>) -> App {
        App::new(
            StoreRepositories::new(store),
            AppConfig::default(),
            Arc::new(FixedClock(at)),
            Arc::new(SequentialRandom::new()),
        )
    }

    fn id(raw: &str) -> HeroId {
        HeroId::new(raw).unwrap()
    }

    #[tokio::test]
    async fn fresh_store_is_seeded() {
        let app = app_at(Arc::new(InMemoryStore::new()), now());

        let heroes = app
            .use_cases
            .queries
            .list(&RosterFilter::all())
            .await
            .unwrap();
        let quests = app.use_cases.quests.board.catalog().await.unwrap();
        let items = app.use_cases.shop.catalog.list().await.unwrap();

        assert_eq!(heroes.len(), 2);
        assert_eq!(quests.len(), 5);
        assert_eq!(items.len(), 4);
    }

    #[tokio::test]
    async fn classroom_day_flows_through_one_store() {
        let store: Arc<dyn CollectionStore> = Arc::new(InMemoryStore::new());
        let morning = app_at(store.clone(), now());

        morning
            .use_cases
            .registration
            .register
            .execute(RegisterHeroInput {
                id: "201".to_string(),
                name: "Gwen Brightleaf".to_string(),
                hero_class: HeroClass::Healer,
                grade: 1,
                room: 1,
                avatar: None,
            })
            .await
            .unwrap();
        morning
            .use_cases
            .progression
            .mass_award
            .execute(
                MassAwardTargets::Filter(RosterFilter::all()),
                StatKind::Gold,
                100,
                "Science fair",
            )
            .await
            .unwrap();
        morning
            .use_cases
            .quests
            .start
            .execute(&id("201"), &QuestId::new("q1").unwrap())
            .await
            .unwrap();

        let afternoon = app_at(store, now() + Duration::hours(3));
        let claim = afternoon
            .use_cases
            .quests
            .claim
            .execute(&id("201"))
            .await
            .unwrap();
        assert!(matches!(claim, QuestClaimOutcome::Claimed { .. }));

        let receipt = afternoon
            .use_cases
            .shop
            .purchase
            .execute(&id("201"), &ShopItemId::new("4").unwrap())
            .await
            .unwrap();
        assert_eq!(receipt.item.price(), 50);

        let history = afternoon
            .use_cases
            .queries
            .history(Some(&id("201")))
            .await
            .unwrap();
        let kinds: Vec<LogKind> = history.iter().map(|entry| entry.kind()).collect();
        assert_eq!(
            kinds,
            vec![LogKind::Item, LogKind::Xp, LogKind::Gold, LogKind::Xp]
        );
    }

    #[tokio::test]
    async fn file_backed_app_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };

        let first = App::open(config.clone()).await.unwrap();
        first
            .use_cases
            .progression
            .apply
            .execute_preset(&id("101"), "complete-work")
            .await
            .unwrap();

        let second = App::open(config).await.unwrap();
        let arthur = second.use_cases.queries.hero(&id("101")).await.unwrap();
        assert_eq!(arthur.xp(), 25);
    }
}
