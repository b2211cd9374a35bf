use crate::models::question::Level;

/// Difficulty for the next adaptive item. Strong answers jump to hard, weak
/// ones drop to easy, everything else keeps the current level.
pub fn next_level(last_score: i32, last_level: Level) -> Level {
    if last_score > 80 && last_level != Level::Hard {
        Level::Hard
    } else if last_score < 50 && last_level != Level::Easy {
        Level::Easy
    } else {
        last_level
    }
}
