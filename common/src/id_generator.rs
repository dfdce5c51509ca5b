use crate::games::SessionRng;

const ADJECTIVES: &[&str] = &[
    "Swift", "Brave", "Clever", "Mighty", "Silent", "Golden", "Wild", "Noble",
    "Fierce", "Gentle", "Quick", "Wise", "Bold", "Proud", "Cunning", "Sly",
];

const BOARDS: &[&str] = &[
    "Grid", "Square", "Cross", "Corner", "Center", "Diagonal", "Row", "Column",
];

pub fn generate_session_id(rng: &mut SessionRng) -> String {
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let board = BOARDS[rng.random_range(0..BOARDS.len())];
    let suffix: u16 = rng.random();
    format!("{}-{}-{:04x}", adjective, board, suffix)
}

/// Picks the automated participant's display name. Falls back to a fixed name
/// when the configured list is empty.
pub fn generate_bot_name(rng: &mut SessionRng, names: &[String]) -> String {
    rng.choose(names)
        .cloned()
        .unwrap_or_else(|| "Bot".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_name_comes_from_list() {
        let names = vec!["ThinkBot".to_string(), "TacBot".to_string()];
        let mut rng = SessionRng::new(7);

        for _ in 0..20 {
            let name = generate_bot_name(&mut rng, &names);
            assert!(names.contains(&name));
        }
    }

    #[test]
    fn test_bot_name_is_seed_deterministic() {
        let names: Vec<String> = (0..10).map(|i| format!("Bot{}", i)).collect();

        let first = generate_bot_name(&mut SessionRng::new(42), &names);
        let second = generate_bot_name(&mut SessionRng::new(42), &names);

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_bot_name_list_falls_back() {
        let mut rng = SessionRng::new(1);

        assert_eq!(generate_bot_name(&mut rng, &[]), "Bot");
    }

    #[test]
    fn test_session_id_has_three_parts() {
        let mut rng = SessionRng::new(3);
        let id = generate_session_id(&mut rng);

        assert_eq!(id.split('-').count(), 3);
    }
}
