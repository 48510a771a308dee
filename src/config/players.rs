use crate::domain::models::{Player, SkillLevel};

/// Get the player roster served as reference data
pub fn get_players() -> Vec<Player> {
    vec![
        player("p1", "Alex Johnson", SkillLevel::Advanced, 4.5, "https://picsum.photos/100/100?random=1"),
        player("p2", "Sam Smith", SkillLevel::Intermediate, 3.2, "https://picsum.photos/100/100?random=2"),
        player("p3", "Jordan Lee", SkillLevel::Pro, 4.9, "https://picsum.photos/100/100?random=3"),
    ]
}

fn player(id: &str, name: &str, skill_level: SkillLevel, rating: f64, avatar: &str) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        skill_level,
        rating,
        avatar: avatar.to_string(),
    }
}
