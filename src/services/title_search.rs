use crate::models::{SearchFilters, Show};

/// Query words shorter than this are only matched as part of the whole query
const MIN_WORD_LEN: usize = 3;

/// Searches shows by title, description and genre
///
/// A blank query returns every show in catalog order. Otherwise shows with
/// no match are dropped and the rest are ordered by relevance, then by
/// popularity.
pub fn search_shows(query: &str, shows: &[Show]) -> Vec<Show> {
    if query.trim().is_empty() {
        return shows.to_vec();
    }

    let query = query.to_lowercase();
    let words: Vec<&str> = query
        .split(' ')
        .filter(|w| w.chars().count() >= MIN_WORD_LEN)
        .collect();

    let mut matches: Vec<(u32, &Show)> = shows
        .iter()
        .map(|show| (relevance(show, &query, &words), show))
        .filter(|(score, _)| *score > 0)
        .collect();

    matches.sort_by(|(a_score, a), (b_score, b)| {
        b_score
            .cmp(a_score)
            .then_with(|| b.popularity.total_cmp(&a.popularity))
    });

    tracing::debug!(query = %query, matches = matches.len(), "Searched shows");

    matches.into_iter().map(|(_, show)| show.clone()).collect()
}

fn relevance(show: &Show, query: &str, words: &[&str]) -> u32 {
    let title = show.title.to_lowercase();
    let description = show.description.to_lowercase();
    let mut score = 0;

    if title == query {
        score += 100;
    } else if title.starts_with(query) {
        score += 80;
    } else if title.contains(query) {
        score += 60;
    }

    for word in words {
        for title_word in title.split(' ') {
            if title_word == *word {
                score += 40;
            } else if title_word.starts_with(word) {
                score += 30;
            } else if title_word.contains(word) {
                score += 20;
            }
        }
    }

    if description.contains(query) {
        score += 15;
    }
    score += 10 * words.iter().filter(|w| description.contains(*w)).count() as u32;

    for genre in show.genres.iter().map(|g| g.to_lowercase()) {
        if genre.contains(query) {
            score += 25;
        }
        score += 15 * words.iter().filter(|w| genre.contains(*w)).count() as u32;
    }

    score
}

/// Keeps shows matching every supplied filter, in catalog order
pub fn filter_shows(shows: &[Show], filters: &SearchFilters) -> Vec<Show> {
    shows
        .iter()
        .filter(|show| {
            filters
                .genre
                .as_ref()
                .map_or(true, |genre| show.genres.iter().any(|g| g.eq_ignore_ascii_case(genre)))
        })
        .filter(|show| filters.year.map_or(true, |year| show.year == year))
        .filter(|show| filters.content_type.map_or(true, |t| show.content_type == t))
        .filter(|show| filters.service.as_ref().map_or(true, |id| show.is_on(id)))
        .cloned()
        .collect()
}

/// Shows available on a specific service, in catalog order
pub fn shows_by_service(service_id: &str, shows: &[Show]) -> Vec<Show> {
    shows
        .iter()
        .filter(|show| show.is_on(service_id))
        .cloned()
        .collect()
}
