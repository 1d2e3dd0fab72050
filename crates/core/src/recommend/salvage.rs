use crate::domain::idea::HobbyIdea;
use rand::Rng;

const MAX_SALVAGED: usize = 10;

const ICONS: [&str; 10] = ["💡", "🚀", "💰", "🎯", "✨", "🔥", "💎", "🌟", "🎨", "📱"];

/// Best-effort conversion of prose model output into idea records, used
/// only when JSON decoding fails on the ideas endpoint. One record per
/// non-empty line, at most ten; placeholder titles carry a 1-based index.
/// The rng is injected so callers can seed it.
pub fn salvage_ideas<R: Rng>(content: &str, hobby: &str, rng: &mut R) -> Vec<HobbyIdea> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_SALVAGED)
        .enumerate()
        .map(|(i, line)| HobbyIdea {
            method: format!("{hobby} Opportunity {}", i + 1),
            description: strip_enumeration(line).to_string(),
            tools: "Various platforms".to_string(),
            earnings: "$50-$500/month".to_string(),
            icon: ICONS[rng.gen_range(0..ICONS.len())].to_string(),
            source: None,
        })
        .collect()
}

/// Drops a leading list marker like "3. " or "10 ".
fn strip_enumeration(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return line;
    }
    rest.strip_prefix('.').unwrap_or(rest).trim_start()
}
