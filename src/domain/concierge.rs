//! Acknowledgement sent to a citizen right after submitting an idea.

use std::collections::HashSet;

use crate::domain::idea::ProjectIdea;

/// Title words must be longer than this to count as shared.
const MIN_SHARED_WORD_LEN: usize = 3;

/// Counts other ideas whose title shares a significant word with `idea`.
///
/// Words are split on spaces and compared case-insensitively.
pub fn count_similar_ideas(idea: &ProjectIdea, others: &[ProjectIdea]) -> usize {
    let new_words: Vec<String> = title_words(&idea.title)
        .filter(|w| w.chars().count() > MIN_SHARED_WORD_LEN)
        .collect();

    others
        .iter()
        .filter(|other| other.id != idea.id)
        .filter(|other| {
            let words: HashSet<String> = title_words(&other.title).collect();
            new_words.iter().any(|w| words.contains(w))
        })
        .count()
}

fn title_words(title: &str) -> impl Iterator<Item = String> + '_ {
    title.split(' ').filter(|w| !w.is_empty()).map(str::to_lowercase)
}

/// Message used when no collaborator reply is available.
pub fn fallback_acknowledgement(idea: &ProjectIdea) -> String {
    format!(
        "Thank you for your submission about \"{}\". We have successfully received it. \
         Your participation is valuable to us. Please check the public dashboard for updates \
         on community priorities.",
        idea.title
    )
}

/// Instructions for phrasing a personal acknowledgement.
pub fn acknowledgement_prompt(idea: &ProjectIdea, similar: usize) -> String {
    format!(
        "You are a helpful and encouraging AI assistant for the Homa Bay County government.\n\
         A citizen has just submitted a new project idea. Write a warm, personal and informative \
         acknowledgment message.\n\n\
         New submission:\n\
         - Title: \"{title}\"\n\
         - Description: \"{description}\"\n\
         - Location: \"{location}\"\n\n\
         There are already {similar} other submissions that seem related to this one.\n\n\
         Thank the citizen and mention the title of their idea. Mention the number of similar \
         ideas found. Reassure them that their voice matters for identifying community needs and \
         encourage them to view the public dashboard. Keep the tone positive and reply with a \
         single paragraph.",
        title = idea.title,
        description = idea.description,
        location = idea.location,
    )
}
