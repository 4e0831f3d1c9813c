//! ClassQuest - command line entry point.

use anyhow::Context;
use chrono::Duration;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use classquest_domain::{
    xp_to_next_level, AttendanceOutcome, DailyRewardOutcome, Grade, Hero, HeroClass, HeroId,
    QuestClaimOutcome, QuestId, Room, RosterFilter, ShopItemId, StatKind, BEHAVIOR_PRESETS,
};
use classquest_engine::infrastructure::config::AppConfig;
use classquest_engine::use_cases::progression::{ActionResult, MassAwardTargets};
use classquest_engine::use_cases::quest::QuestProgress;
use classquest_engine::use_cases::registration::{ProfileInput, RegisterHeroInput};
use classquest_engine::use_cases::shop::{NewShopItem, ShopItemPatch};
use classquest_engine::App;

#[derive(Parser)]
#[command(name = "classquest")]
#[command(about = "Classroom RPG: heroes, quests, rewards and the shop", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct FilterArgs {
    /// Only heroes in this grade (1-6)
    #[arg(long)]
    grade: Option<u8>,
    /// Only heroes in this room (1-4)
    #[arg(long)]
    room: Option<u8>,
    /// Case-insensitive part of the hero name
    #[arg(long)]
    search: Option<String>,
}

impl FilterArgs {
    fn to_filter(&self) -> anyhow::Result<RosterFilter> {
        let mut filter = RosterFilter::all();
        if let Some(grade) = self.grade {
            filter = filter.with_grade(Grade::new(grade)?);
        }
        if let Some(room) = self.room {
            filter = filter.with_room(Room::new(room)?);
        }
        if let Some(search) = &self.search {
            filter = filter.with_search(search.clone());
        }
        Ok(filter)
    }
}

#[derive(Args)]
struct ProfileArgs {
    #[arg(long)]
    name: String,
    /// warrior, mage or healer
    #[arg(long = "class")]
    hero_class: HeroClass,
    #[arg(long)]
    grade: u8,
    #[arg(long)]
    room: u8,
    /// Avatar image URL
    #[arg(long)]
    avatar: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Register a new hero
    Register {
        /// Student code
        #[arg(long)]
        id: String,
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Edit a hero's name, class or classroom (stats are kept)
    Edit {
        hero: String,
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Remove a hero from the roster
    Remove { hero: String },
    /// List heroes
    Roster {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show one hero in detail
    Show { hero: String },
    /// Add or remove XP, GOLD or HP from one hero
    Award {
        hero: String,
        /// xp, gold or hp
        stat: StatKind,
        #[arg(allow_hyphen_values = true)]
        amount: i32,
        reason: String,
    },
    /// Give XP or GOLD to several heroes at once
    MassAward {
        /// xp or gold
        stat: StatKind,
        #[arg(allow_hyphen_values = true)]
        amount: i32,
        reason: String,
        /// Comma-separated hero ids; omit to use the filter
        #[arg(long, value_delimiter = ',')]
        ids: Vec<String>,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Apply a behavior preset to a hero
    Preset { hero: String, preset: String },
    /// List behavior presets
    Presets,
    /// Mark one hero present today
    Attendance { hero: String },
    /// Mark every matching hero present today
    AttendanceAll {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Claim a hero's daily reward
    Daily { hero: String },
    /// Quest board
    Quest {
        #[command(subcommand)]
        command: QuestCommand,
    },
    /// Reward shop
    Shop {
        #[command(subcommand)]
        command: ShopCommand,
    },
    /// Show the action log, newest first
    Log {
        #[arg(long)]
        hero: Option<String>,
    },
    /// Top heroes by level, then XP
    Leaderboard {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Class summary numbers
    Insights {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(Subcommand)]
enum QuestCommand {
    /// List available quests
    List,
    Start { hero: String, quest: String },
    Claim { hero: String },
    Status { hero: String },
}

#[derive(Subcommand)]
enum ShopCommand {
    List,
    Buy {
        hero: String,
        item: String,
    },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: i32,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        icon: String,
    },
    Edit {
        item: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<i32>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        icon: Option<String>,
    },
    Remove {
        item: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root so `cargo run` works from any crate.
    load_dotenv_from_repo_root();

    // Logs go to stderr so command output stays clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "classquest_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    let app = App::open(config)
        .await
        .context("failed to open classroom data")?;

    run(&app, cli.command).await
}

async fn run(app: &App, command: Command) -> anyhow::Result<()> {
    let uc = &app.use_cases;
    match command {
        Command::Register { id, profile } => {
            let hero = uc
                .registration
                .register
                .execute(RegisterHeroInput {
                    id,
                    name: profile.name,
                    hero_class: profile.hero_class,
                    grade: profile.grade,
                    room: profile.room,
                    avatar: profile.avatar,
                })
                .await?;
            println!("Welcome to the guild!");
            print_hero(&hero);
        }
        Command::Edit { hero, profile } => {
            let hero = uc
                .registration
                .update_profile
                .execute(
                    &hero_id(&hero)?,
                    ProfileInput {
                        name: profile.name,
                        hero_class: profile.hero_class,
                        grade: profile.grade,
                        room: profile.room,
                        avatar: profile.avatar,
                    },
                )
                .await?;
            print_hero(&hero);
        }
        Command::Remove { hero } => {
            let removed = uc.registration.remove.execute(&hero_id(&hero)?).await?;
            println!("Removed {} ({})", removed.name(), removed.id());
        }
        Command::Roster { filter } => {
            let heroes = uc.queries.list(&filter.to_filter()?).await?;
            if heroes.is_empty() {
                println!("No heroes match.");
            }
            for hero in &heroes {
                print_hero_line(hero);
            }
        }
        Command::Show { hero } => {
            let hero = uc.queries.hero(&hero_id(&hero)?).await?;
            print_hero(&hero);
            match uc.quests.board.progress(hero.id()).await? {
                QuestProgress::Idle => println!("  quest: none"),
                progress @ QuestProgress::Running { .. } => print_progress(&progress),
            }
        }
        Command::Award {
            hero,
            stat,
            amount,
            reason,
        } => {
            let result = uc
                .progression
                .apply
                .execute(&hero_id(&hero)?, stat, amount, &reason)
                .await?;
            print_action(&result);
        }
        Command::MassAward {
            stat,
            amount,
            reason,
            ids,
            filter,
        } => {
            let targets = if ids.is_empty() {
                MassAwardTargets::Filter(filter.to_filter()?)
            } else {
                MassAwardTargets::Heroes(
                    ids.iter()
                        .map(|id| hero_id(id))
                        .collect::<anyhow::Result<_>>()?,
                )
            };
            let report = uc
                .progression
                .mass_award
                .execute(targets, stat, amount, &reason)
                .await?;
            println!("Awarded {} hero(es) {amount} {stat}", report.awarded_count());
            for missing in &report.missing {
                println!("  skipped unknown hero {missing}");
            }
        }
        Command::Preset { hero, preset } => {
            let result = uc
                .progression
                .apply
                .execute_preset(&hero_id(&hero)?, &preset)
                .await?;
            print_action(&result);
        }
        Command::Presets => {
            for preset in BEHAVIOR_PRESETS {
                println!(
                    "{:<18} {:>+4} {:<4} {}",
                    preset.key, preset.amount, preset.kind, preset.label
                );
            }
        }
        Command::Attendance { hero } => {
            match uc.check_in.attendance.execute(&hero_id(&hero)?).await? {
                AttendanceOutcome::Marked { date, xp, .. } => {
                    println!("Marked present for {date} (+{xp} XP)");
                }
                AttendanceOutcome::AlreadyMarked { date } => {
                    println!("Already marked present for {date}");
                }
            }
        }
        Command::AttendanceAll { filter } => {
            let report = uc
                .check_in
                .attendance
                .execute_all(&filter.to_filter()?)
                .await?;
            println!(
                "{}: marked {} present, {} already checked in",
                report.date,
                report.marked.len(),
                report.already_present.len()
            );
        }
        Command::Daily { hero } => {
            let result = uc.check_in.daily.execute(&hero_id(&hero)?).await?;
            match result.outcome {
                DailyRewardOutcome::Claimed { xp, gold, change } => {
                    println!("Daily reward: +{xp} XP, +{gold} gold");
                    if change.leveled_up() {
                        println!("LEVEL UP! Now level {}", change.after.level);
                    }
                }
                DailyRewardOutcome::AlreadyClaimed => {
                    println!("Already claimed today.");
                }
            }
            println!("Next reset at {}", result.next_reset);
        }
        Command::Quest { command } => run_quest(app, command).await?,
        Command::Shop { command } => run_shop(app, command).await?,
        Command::Log { hero } => {
            let hero = hero.as_deref().map(hero_id).transpose()?;
            for entry in uc.queries.history(hero.as_ref()).await? {
                println!(
                    "{} {:<10} {:<12} {:>+6} {}",
                    entry.timestamp().format("%Y-%m-%d %H:%M"),
                    entry.kind(),
                    entry.student_name(),
                    entry.amount(),
                    entry.reason()
                );
            }
        }
        Command::Leaderboard { filter } => {
            for (rank, hero) in uc
                .queries
                .leaderboard(&filter.to_filter()?)
                .await?
                .iter()
                .enumerate()
            {
                println!(
                    "{}. {} - level {} ({} XP)",
                    rank + 1,
                    hero.name(),
                    hero.level(),
                    hero.xp()
                );
            }
        }
        Command::Insights { filter } => {
            let insights = uc.queries.insights(&filter.to_filter()?).await?;
            println!("Heroes:        {}", insights.hero_count);
            println!("Average level: {:.1}", insights.average_level);
            println!("Total gold:    {}", insights.total_gold);
            println!("Fainted:       {}", insights.fainted_count);
            if let Some(top) = insights.top_hero {
                println!("Top hero:      {top}");
            }
        }
    }
    Ok(())
}

async fn run_quest(app: &App, command: QuestCommand) -> anyhow::Result<()> {
    let quests = &app.use_cases.quests;
    match command {
        QuestCommand::List => {
            for quest in quests.board.catalog().await? {
                println!(
                    "{:<4} {:<20} {:>3} min  +{} XP +{} gold",
                    quest.id.as_str(),
                    quest.title,
                    quest.duration_minutes,
                    quest.reward_xp,
                    quest.reward_gold
                );
            }
        }
        QuestCommand::Start { hero, quest } => {
            let (quest, active) = quests
                .start
                .execute(&hero_id(&hero)?, &QuestId::new(quest)?)
                .await?;
            println!("Started \"{}\", done at {}", quest.title, active.end_time());
        }
        QuestCommand::Claim { hero } => match quests.claim.execute(&hero_id(&hero)?).await? {
            QuestClaimOutcome::Claimed {
                xp, gold, change, ..
            } => {
                println!("Quest complete! +{xp} XP, +{} gold", change.gold_delta());
                if gold != change.gold_delta() {
                    println!("  (class bonus on {gold} gold)");
                }
                if change.leveled_up() {
                    println!("LEVEL UP! Now level {}", change.after.level);
                }
            }
            QuestClaimOutcome::NotStarted => println!("No quest to claim."),
            QuestClaimOutcome::NotFinished { remaining } => {
                println!("Not finished yet, {} left.", format_duration(remaining));
            }
        },
        QuestCommand::Status { hero } => {
            let progress = quests.board.progress(&hero_id(&hero)?).await?;
            match progress {
                QuestProgress::Idle => println!("No active quest."),
                QuestProgress::Running { .. } => print_progress(&progress),
            }
        }
    }
    Ok(())
}

async fn run_shop(app: &App, command: ShopCommand) -> anyhow::Result<()> {
    let shop = &app.use_cases.shop;
    match command {
        ShopCommand::List => {
            for item in shop.catalog.list().await? {
                println!(
                    "{:<38} {:<22} {:>4} gold  {}",
                    item.id().as_str(),
                    item.name().as_str(),
                    item.price(),
                    item.description()
                );
            }
        }
        ShopCommand::Buy { hero, item } => {
            let receipt = shop
                .purchase
                .execute(&hero_id(&hero)?, &ShopItemId::new(item)?)
                .await?;
            println!(
                "{} bought {} and has {} gold left",
                receipt.hero.name(),
                receipt.item.name(),
                receipt.hero.gold()
            );
        }
        ShopCommand::Add {
            name,
            price,
            description,
            icon,
        } => {
            let item = shop
                .catalog
                .create(NewShopItem {
                    name,
                    price,
                    description,
                    icon,
                })
                .await?;
            println!("Added {} ({})", item.name(), item.id());
        }
        ShopCommand::Edit {
            item,
            name,
            price,
            description,
            icon,
        } => {
            let item = shop
                .catalog
                .update(
                    &ShopItemId::new(item)?,
                    ShopItemPatch {
                        name,
                        price,
                        description,
                        icon,
                    },
                )
                .await?;
            println!("Updated {} ({} gold)", item.name(), item.price());
        }
        ShopCommand::Remove { item } => {
            let removed = shop.catalog.delete(&ShopItemId::new(item)?).await?;
            println!("Removed {}", removed.name());
        }
    }
    Ok(())
}

fn hero_id(raw: &str) -> anyhow::Result<HeroId> {
    Ok(HeroId::new(raw)?)
}

fn print_hero_line(hero: &Hero) {
    println!(
        "{:<8} {:<22} {:<8} {:>4}  Lv {:>2}  HP {:>3}/{:<3}  XP {:>2}  Gold {}",
        hero.id().as_str(),
        hero.name().as_str(),
        hero.hero_class(),
        hero.classroom().to_string(),
        hero.level(),
        hero.hp(),
        hero.max_hp(),
        hero.xp(),
        hero.gold()
    );
}

fn print_hero(hero: &Hero) {
    println!(
        "{} ({}), {} in class {}",
        hero.name(),
        hero.id(),
        hero.hero_class(),
        hero.classroom()
    );
    println!("  {}", hero.hero_class().passive_summary());
    println!(
        "  level {}  hp {}/{}  xp {} ({} to next)  gold {}",
        hero.level(),
        hero.hp(),
        hero.max_hp(),
        hero.xp(),
        xp_to_next_level(hero),
        hero.gold()
    );
    if hero.is_fainted() {
        println!("  FAINTED");
    }
}

fn print_action(result: &ActionResult) {
    let change = &result.change;
    println!(
        "{}: hp {} -> {}, xp {} -> {}, gold {} -> {}",
        result.hero.name(),
        change.before.hp,
        change.after.hp,
        change.before.xp,
        change.after.xp,
        change.before.gold,
        change.after.gold
    );
    if change.leveled_up() {
        println!("LEVEL UP! Now level {}", change.after.level);
    }
    if change.fainted() {
        println!("{} has fainted!", result.hero.name());
    }
}

fn print_progress(progress: &QuestProgress) {
    if let QuestProgress::Running {
        quest,
        progress_percent,
        ends_at,
        ..
    } = progress
    {
        let remaining = progress.remaining();
        if remaining > Duration::zero() {
            println!(
                "  quest: {} {progress_percent}% ({} left, ends {ends_at})",
                quest.title,
                format_duration(remaining)
            );
        } else {
            println!("  quest: {} complete, ready to claim", quest.title);
        }
    }
}

fn format_duration(duration: Duration) -> String {
    let minutes = duration.num_minutes();
    let seconds = duration.num_seconds() % 60;
    if minutes >= 60 {
        format!("{}h {:02}m", minutes / 60, minutes % 60)
    } else {
        format!("{minutes}m {seconds:02}s")
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
