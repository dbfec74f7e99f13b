use std::fmt;

/// Independently persisted collections, one storage key each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    ProjectIdeas,
    OfficialProjects,
    VotedIdeas,
    BudgetSubmissions,
    ChatHistory,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::ProjectIdeas,
        Collection::OfficialProjects,
        Collection::VotedIdeas,
        Collection::BudgetSubmissions,
        Collection::ChatHistory,
    ];

    /// Storage key.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::ProjectIdeas => "projectIdeas",
            Collection::OfficialProjects => "officialProjects",
            Collection::VotedIdeas => "votedIdeas",
            Collection::BudgetSubmissions => "budgetSubmissions",
            Collection::ChatHistory => "chatHistory",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
