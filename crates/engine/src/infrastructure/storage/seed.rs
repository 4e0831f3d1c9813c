//! Default collection contents written on first load.

use classquest_domain::{
    DomainError, Grade, Hero, HeroClass, HeroId, HeroName, HeroProfile, ItemName, Quest, QuestId,
    Room, ShopItem, ShopItemId,
};

/// Cartoon avatars offered at registration.
pub const AVATARS: [&str; 12] = [
    "https://api.dicebear.com/7.x/avataaars/svg?seed=Felix&backgroundColor=b6e3f4",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=Aiden&backgroundColor=ffdfbf",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=Luna&backgroundColor=d1d4f9",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=Zoe&backgroundColor=ffd5dc",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=Leo&backgroundColor=c0aede",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=Max&backgroundColor=ffeb3b",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=Milo&backgroundColor=8bc34a",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=Jasper&backgroundColor=00bcd4",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=Willow&backgroundColor=f48fb1",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=Oliver&backgroundColor=ffccbc",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=Sasha&backgroundColor=e1bee7",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=Finn&backgroundColor=bbdefb",
];

/// Avatar for `index`, wrapping around the list.
pub fn avatar(index: usize) -> &'static str {
    AVATARS[index % AVATARS.len()]
}

pub fn default_roster() -> Result<Vec<Hero>, DomainError> {
    let hero = |id: &str,
                name: &str,
                hero_class: HeroClass,
                avatar_index: usize|
     -> Result<Hero, DomainError> {
        Ok(Hero::register(
            HeroId::new(id)?,
            HeroProfile {
                name: HeroName::new(name)?,
                hero_class,
                grade: Grade::new(1)?,
                room: Room::new(1)?,
                avatar: avatar(avatar_index).to_string(),
            },
        ))
    };

    Ok(vec![
        hero("101", "Arthur Ironpen", HeroClass::Warrior, 0)?,
        hero("102", "Merlin the Sage", HeroClass::Mage, 7)?,
    ])
}

pub fn default_quests() -> Result<Vec<Quest>, DomainError> {
    let quest = |id: &str,
                 title: &str,
                 reward_xp: i32,
                 reward_gold: i32,
                 duration_minutes: u32,
                 description: &str,
                 icon: &str|
     -> Result<Quest, DomainError> {
        Ok(Quest {
            id: QuestId::new(id)?,
            title: title.to_string(),
            reward_xp,
            reward_gold,
            description: description.to_string(),
            duration_minutes,
            icon: icon.to_string(),
        })
    };

    Ok(vec![
        quest(
            "q1",
            "Steady Focus",
            25,
            10,
            10,
            "Meditate or focus on classwork without distraction",
            "fa-brain",
        )?,
        quest(
            "q2",
            "Silent Reader",
            40,
            15,
            20,
            "Read quietly in the reading corner",
            "fa-book-open",
        )?,
        quest(
            "q3",
            "Art Helper",
            30,
            10,
            15,
            "Help set up the board or decorate the classroom",
            "fa-palette",
        )?,
        quest(
            "q4",
            "Diligent Scholar",
            60,
            25,
            40,
            "Finish a group project or assigned task",
            "fa-scroll",
        )?,
        quest(
            "q5",
            "Explorer",
            20,
            5,
            5,
            "Explore and note what you find outside the classroom (during break)",
            "fa-compass",
        )?,
    ])
}

pub fn default_shop() -> Result<Vec<ShopItem>, DomainError> {
    let item = |id: &str,
                name: &str,
                price: i32,
                description: &str,
                icon: &str|
     -> Result<ShopItem, DomainError> {
        let item = ShopItem::new(ShopItemId::new(id)?, ItemName::new(name)?, price)?;
        Ok(item.with_description(description).with_icon(icon))
    };

    Ok(vec![
        item(
            "1",
            "Homework Skip Pass",
            150,
            "Skip one homework assignment",
            "fa-file-circle-xmark",
        )?,
        item(
            "2",
            "Seat Swap Pass",
            100,
            "Sit at any desk you like for one day",
            "fa-chair",
        )?,
        item(
            "3",
            "Class DJ",
            80,
            "Pick the music during independent work",
            "fa-music",
        )?,
        item(
            "4",
            "Health Potion",
            50,
            "Restore 50 HP right away",
            "fa-flask",
        )?,
    ])
}
