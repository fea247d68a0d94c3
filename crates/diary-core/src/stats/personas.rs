use diary_models::Persona;

/// Below this many entries nothing else is judged.
const MIN_ENTRIES_FOR_PERSONAS: usize = 5;

pub const CASUAL_VIEWER: (&str, &str) = ("The Casual Viewer", "Just dipping your toes in the cinematic waters.");
pub const GENEROUS_SPIRIT: (&str, &str) = ("The Generous Spirit", "5 stars for everyone! You love movies and they love you.");
pub const HARSH_CRITIC: (&str, &str) = ("The Harsh Critic", "Hard to please? Or maybe you just have impeccable taste.");
pub const COMFORT_SEEKER: (&str, &str) = ("The Comfort Seeker", "Why risk a bad movie when you can watch a masterpiece again?");
pub const EXPLORER: (&str, &str) = ("The Explorer", "Always seeking something new. No looking back.");
pub const TIME_TRAVELER: (&str, &str) = ("The Time Traveler", "From the classics to the modern era, you see it all.");
pub const SCRIBE: (&str, &str) = ("The Scribe", "You don't just watch; you document. Pen mighty!");
pub const BALANCED_CINEPHILE: (&str, &str) = ("The Balanced Cinephile", "A perfectly balanced diet of cinema.");

fn persona((title, description): (&str, &str)) -> Persona {
    Persona::new(title, description)
}

/// Multi-label persona classifier. Never empty; output follows rule order.
pub fn personas(
    total: usize,
    average_rating: f64,
    rewatch_pct: f64,
    distinct_decades: usize,
    review_pct: f64,
) -> Vec<Persona> {
    if total < MIN_ENTRIES_FOR_PERSONAS {
        return vec![persona(CASUAL_VIEWER)];
    }

    let mut found = Vec::new();

    if average_rating > 4.0 {
        found.push(persona(GENEROUS_SPIRIT));
    } else if average_rating < 2.8 {
        found.push(persona(HARSH_CRITIC));
    }

    if rewatch_pct > 30.0 {
        found.push(persona(COMFORT_SEEKER));
    } else if rewatch_pct < 5.0 {
        found.push(persona(EXPLORER));
    }

    if distinct_decades > 6 {
        found.push(persona(TIME_TRAVELER));
    }

    if review_pct > 50.0 {
        found.push(persona(SCRIBE));
    }

    if found.is_empty() {
        found.push(persona(BALANCED_CINEPHILE));
    }

    found
}
