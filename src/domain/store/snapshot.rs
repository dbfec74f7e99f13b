//! Copy-on-write portal state.
//!
//! Every collection sits behind an `Arc`. Operations never touch the
//! receiver; they return a new snapshot in which only the collections that
//! actually changed are new allocations. Observers detect change with
//! [`Arc::ptr_eq`] via [`PortalSnapshot::changed_since`].

use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::assistant::ChatMessage;
use crate::domain::budget::{validate_allocation, BudgetAllocation};
use crate::domain::foundation::{
    DomainError, ErrorCode, IdeaId, PostId, ProjectId, ValidationError,
};
use crate::domain::idea::{Comment, IdeaStatus, NewIdea, ProjectIdea};
use crate::domain::project::{
    ForumPost, NewForumPost, NewProject, NewReport, OfficialProject, ProgressReport,
};

use super::Collection;

/// Result of a vote attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Counted { votes: u32 },
    /// The idea is already in the voted set.
    ///
    /// The set is keyed by idea id only, not by citizen, so it is as strong
    /// as whatever storage holds it. Clearing that storage allows voting
    /// again.
    AlreadyVoted,
    UnknownIdea,
}

#[derive(Debug, Clone, Default)]
pub struct PortalSnapshot {
    /// Newest first.
    pub ideas: Arc<Vec<ProjectIdea>>,
    pub projects: Arc<Vec<OfficialProject>>,
    pub voted: Arc<BTreeSet<IdeaId>>,
    pub budget_submissions: Arc<Vec<BudgetAllocation>>,
    pub chat_history: Arc<Vec<ChatMessage>>,
}

impl PortalSnapshot {
    pub fn idea(&self, id: &IdeaId) -> Option<&ProjectIdea> {
        self.ideas.iter().find(|i| &i.id == id)
    }

    pub fn project(&self, id: &ProjectId) -> Option<&OfficialProject> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn has_voted(&self, id: &IdeaId) -> bool {
        self.voted.contains(id)
    }

    /// Collections whose allocation differs from `previous`.
    pub fn changed_since(&self, previous: &PortalSnapshot) -> Vec<Collection> {
        let mut changed = Vec::new();
        if !Arc::ptr_eq(&self.ideas, &previous.ideas) {
            changed.push(Collection::ProjectIdeas);
        }
        if !Arc::ptr_eq(&self.projects, &previous.projects) {
            changed.push(Collection::OfficialProjects);
        }
        if !Arc::ptr_eq(&self.voted, &previous.voted) {
            changed.push(Collection::VotedIdeas);
        }
        if !Arc::ptr_eq(&self.budget_submissions, &previous.budget_submissions) {
            changed.push(Collection::BudgetSubmissions);
        }
        if !Arc::ptr_eq(&self.chat_history, &previous.chat_history) {
            changed.push(Collection::ChatHistory);
        }
        changed
    }

    // ---- ideas ----

    /// Prepends a new idea.
    pub fn add_idea(&self, input: NewIdea) -> Result<(Self, ProjectIdea), ValidationError> {
        let idea = input.into_idea()?;
        let mut ideas = Vec::with_capacity(self.ideas.len() + 1);
        ideas.push(idea.clone());
        ideas.extend(self.ideas.iter().cloned());
        Ok((
            Self {
                ideas: Arc::new(ideas),
                ..self.clone()
            },
            idea,
        ))
    }

    /// Adds one vote unless the idea was already voted on.
    pub fn vote_idea(&self, id: &IdeaId) -> (Self, VoteOutcome) {
        if self.voted.contains(id) {
            return (self.clone(), VoteOutcome::AlreadyVoted);
        }
        let Some(index) = self.idea_index(id) else {
            return (self.clone(), VoteOutcome::UnknownIdea);
        };

        let updated = self.ideas[index].with_vote();
        let votes = updated.votes;
        let mut voted = (*self.voted).clone();
        voted.insert(id.clone());

        (
            Self {
                ideas: Arc::new(self.replace_idea(index, updated)),
                voted: Arc::new(voted),
                ..self.clone()
            },
            VoteOutcome::Counted { votes },
        )
    }

    pub fn add_comment(
        &self,
        id: &IdeaId,
        author: &str,
        text: &str,
    ) -> Result<(Self, Comment), DomainError> {
        let index = self.require_idea(id)?;
        let comment = Comment::new(author, text)?;
        let updated = self.ideas[index].with_comment(comment.clone());
        Ok((
            Self {
                ideas: Arc::new(self.replace_idea(index, updated)),
                ..self.clone()
            },
            comment,
        ))
    }

    /// Overwrites the status. Any transition is accepted.
    pub fn update_idea_status(&self, id: &IdeaId, status: IdeaStatus) -> Result<Self, DomainError> {
        let index = self.require_idea(id)?;
        let updated = self.ideas[index].with_status(status);
        Ok(Self {
            ideas: Arc::new(self.replace_idea(index, updated)),
            ..self.clone()
        })
    }

    /// Appends a project seeded from the idea and marks the idea Converted.
    ///
    /// The idea stays in the collection. Both collections change in the
    /// returned snapshot.
    pub fn convert_idea_to_project(
        &self,
        id: &IdeaId,
        today: NaiveDate,
    ) -> Result<(Self, OfficialProject), DomainError> {
        let index = self.require_idea(id)?;
        let idea = &self.ideas[index];
        let project = OfficialProject::from_idea(idea, today);
        let converted = idea.with_status(IdeaStatus::Converted);

        let mut projects = (*self.projects).clone();
        projects.push(project.clone());

        Ok((
            Self {
                ideas: Arc::new(self.replace_idea(index, converted)),
                projects: Arc::new(projects),
                ..self.clone()
            },
            project,
        ))
    }

    // ---- projects ----

    pub fn add_official_project(
        &self,
        input: NewProject,
    ) -> Result<(Self, OfficialProject), DomainError> {
        let project = input.into_project()?;
        let mut projects = (*self.projects).clone();
        projects.push(project.clone());
        Ok((
            Self {
                projects: Arc::new(projects),
                ..self.clone()
            },
            project,
        ))
    }

    /// Prepends a report to the project.
    pub fn add_progress_report(
        &self,
        project_id: &ProjectId,
        input: NewReport,
    ) -> Result<(Self, ProgressReport), DomainError> {
        let index = self.require_project(project_id)?;
        let report = input.into_report()?;
        let updated = self.projects[index].with_report(report.clone());
        Ok((self.with_project_at(index, updated), report))
    }

    /// Prepends a forum post to the project.
    pub fn add_forum_post(
        &self,
        project_id: &ProjectId,
        input: NewForumPost,
    ) -> Result<(Self, ForumPost), DomainError> {
        let index = self.require_project(project_id)?;
        let post = input.into_post()?;
        let updated = self.projects[index].with_forum_post(post.clone());
        Ok((self.with_project_at(index, updated), post))
    }

    /// Appends a reply to a forum post.
    pub fn add_forum_reply(
        &self,
        project_id: &ProjectId,
        post_id: &PostId,
        author: &str,
        text: &str,
    ) -> Result<(Self, Comment), DomainError> {
        let index = self.require_project(project_id)?;
        let reply = Comment::new(author, text)?;
        let updated = self.projects[index]
            .with_forum_reply(post_id, reply.clone())
            .ok_or_else(|| DomainError::not_found(ErrorCode::ForumPostNotFound, post_id))?;
        Ok((self.with_project_at(index, updated), reply))
    }

    /// Replaces the project with the same id. Last writer wins.
    pub fn update_official_project(&self, project: OfficialProject) -> Result<Self, DomainError> {
        let index = self.require_project(&project.id)?;
        Ok(self.with_project_at(index, project))
    }

    // ---- budget & chat ----

    /// Appends the allocation verbatim if it fits the total budget.
    pub fn submit_allocation(&self, allocation: BudgetAllocation) -> Result<Self, ValidationError> {
        validate_allocation(&allocation)?;
        let mut submissions = (*self.budget_submissions).clone();
        submissions.push(allocation);
        Ok(Self {
            budget_submissions: Arc::new(submissions),
            ..self.clone()
        })
    }

    pub fn with_chat_history(&self, history: Vec<ChatMessage>) -> Self {
        Self {
            chat_history: Arc::new(history),
            ..self.clone()
        }
    }

    // ---- helpers ----

    fn idea_index(&self, id: &IdeaId) -> Option<usize> {
        self.ideas.iter().position(|i| &i.id == id)
    }

    fn require_idea(&self, id: &IdeaId) -> Result<usize, DomainError> {
        self.idea_index(id)
            .ok_or_else(|| DomainError::not_found(ErrorCode::IdeaNotFound, id))
    }

    fn require_project(&self, id: &ProjectId) -> Result<usize, DomainError> {
        self.projects
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| DomainError::not_found(ErrorCode::ProjectNotFound, id))
    }

    fn replace_idea(&self, index: usize, idea: ProjectIdea) -> Vec<ProjectIdea> {
        let mut ideas = (*self.ideas).clone();
        ideas[index] = idea;
        ideas
    }

    fn with_project_at(&self, index: usize, project: OfficialProject) -> Self {
        let mut projects = (*self.projects).clone();
        projects[index] = project;
        Self {
            projects: Arc::new(projects),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::budget::TOTAL_BUDGET;
    use crate::domain::project::{ProjectStatus, ReportEvidence, Timeline, VerificationStatus};
    use crate::domain::seed;
    use proptest::prelude::*;

    fn seeded() -> PortalSnapshot {
        PortalSnapshot {
            ideas: Arc::new(seed::project_ideas()),
            projects: Arc::new(seed::official_projects()),
            ..PortalSnapshot::default()
        }
    }

    fn idea_id(s: &str) -> IdeaId {
        IdeaId::new(s).unwrap()
    }

    fn project_id(s: &str) -> ProjectId {
        ProjectId::new(s).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    #[test]
    fn add_idea_prepends_and_leaves_original_untouched() {
        let before = seeded();
        let (after, idea) = before
            .add_idea(NewIdea::new("Jetty", "Boat jetty", "Mbita"))
            .unwrap();

        assert_eq!(after.ideas[0].id, idea.id);
        assert_eq!(after.ideas.len(), before.ideas.len() + 1);
        assert_eq!(after.changed_since(&before), vec![Collection::ProjectIdeas]);
    }

    #[test]
    fn invalid_idea_is_not_applied() {
        let before = seeded();
        assert!(before.add_idea(NewIdea::new("", "x", "y")).is_err());
        assert_eq!(before.ideas.len(), 12);
    }

    #[test]
    fn voting_twice_counts_once() {
        let id = idea_id("idea-1");
        let (once, first) = seeded().vote_idea(&id);
        let (twice, second) = once.vote_idea(&id);

        assert_eq!(first, VoteOutcome::Counted { votes: 1 });
        assert_eq!(second, VoteOutcome::AlreadyVoted);
        assert_eq!(twice.idea(&id).unwrap().votes, 1);
        assert!(twice.changed_since(&once).is_empty());
    }

    #[test]
    fn voting_unknown_idea_is_a_silent_no_op() {
        let before = seeded();
        let (after, outcome) = before.vote_idea(&idea_id("idea-missing"));
        assert_eq!(outcome, VoteOutcome::UnknownIdea);
        assert!(after.changed_since(&before).is_empty());
        assert!(after.voted.is_empty());
    }

    #[test]
    fn comment_appends_to_idea() {
        let id = idea_id("idea-2");
        let (after, comment) = seeded().add_comment(&id, "Resident", "Agreed").unwrap();
        assert_eq!(after.idea(&id).unwrap().comments, vec![comment]);
    }

    #[test]
    fn comment_on_unknown_idea_is_not_found() {
        let err = seeded()
            .add_comment(&idea_id("idea-x"), "Resident", "Hi")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::IdeaNotFound);
    }

    #[test]
    fn status_accepts_any_transition() {
        let id = idea_id("idea-3");
        let snapshot = seeded()
            .update_idea_status(&id, IdeaStatus::Rejected)
            .unwrap()
            .update_idea_status(&id, IdeaStatus::Approved)
            .unwrap()
            .update_idea_status(&id, IdeaStatus::Approved)
            .unwrap();
        assert_eq!(snapshot.idea(&id).unwrap().status, IdeaStatus::Approved);
    }

    #[test]
    fn conversion_touches_both_collections() {
        let before = seeded();
        let id = idea_id("idea-6");
        let (after, project) = before.convert_idea_to_project(&id, today()).unwrap();

        assert_eq!(project.status, ProjectStatus::NotStarted);
        assert_eq!(project.budget, 0);
        assert_eq!(after.idea(&id).unwrap().status, IdeaStatus::Converted);
        assert_eq!(after.ideas.len(), before.ideas.len());
        assert_eq!(after.projects.last().unwrap().id, project.id);
        assert_eq!(
            after.changed_since(&before),
            vec![Collection::ProjectIdeas, Collection::OfficialProjects]
        );
    }

    #[test]
    fn reports_are_prepended_with_pending_media() {
        let pid = project_id("proj-1");
        let (after, report) = seeded()
            .add_progress_report(
                &pid,
                NewReport {
                    author: "Citizen".to_string(),
                    status: ProjectStatus::Stalled,
                    observation: "No workers this week".to_string(),
                    media_url: Some("https://img.example/2.jpg".to_string()),
                },
            )
            .unwrap();

        let project = after.project(&pid).unwrap();
        assert_eq!(project.reports[0].id, report.id);
        assert_eq!(project.reports.len(), 3);
        assert!(matches!(
            report.evidence,
            ReportEvidence::WithMedia {
                verification: VerificationStatus::Pending,
                ..
            }
        ));
    }

    #[test]
    fn forum_post_then_reply() {
        let pid = project_id("proj-2");
        let (with_post, post) = seeded()
            .add_forum_post(
                &pid,
                NewForumPost {
                    author: "Trader".to_string(),
                    title: "Start date?".to_string(),
                    body: "When does work begin?".to_string(),
                },
            )
            .unwrap();
        let (with_reply, reply) = with_post
            .add_forum_reply(&pid, &post.id, "County", "Next month")
            .unwrap();

        let forum = &with_reply.project(&pid).unwrap().forum;
        assert_eq!(forum[0].id, post.id);
        assert_eq!(forum[0].replies, vec![reply]);
    }

    #[test]
    fn reply_to_unknown_post_is_not_found() {
        let err = seeded()
            .add_forum_reply(
                &project_id("proj-1"),
                &PostId::new("post-missing").unwrap(),
                "A",
                "B",
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ForumPostNotFound);
    }

    #[test]
    fn update_replaces_whole_project() {
        let pid = project_id("proj-2");
        let before = seeded();
        let mut edited = before.project(&pid).unwrap().clone();
        edited.budget = 1;
        edited.status = ProjectStatus::InProgress;

        let after = before.update_official_project(edited.clone()).unwrap();
        assert_eq!(after.project(&pid), Some(&edited));
    }

    #[test]
    fn admin_project_is_appended() {
        let (after, project) = seeded()
            .add_official_project(NewProject {
                name: "Jetty".to_string(),
                description: "Landing jetty".to_string(),
                budget: 10,
                sub_county: "Suba North".to_string(),
                ward: "Mbita".to_string(),
                category: "Economic Empowerment".to_string(),
                timeline: Timeline {
                    start: today(),
                    end: Some(today()),
                },
                status: ProjectStatus::NotStarted,
            })
            .unwrap();
        assert_eq!(after.projects.len(), 4);
        assert_eq!(project.location, "Mbita, Suba North");
    }

    #[test]
    fn over_budget_allocation_is_not_stored() {
        let before = seeded();
        let result = before.submit_allocation(
            BudgetAllocation::new().with("Water", TOTAL_BUDGET + 1),
        );
        assert!(result.is_err());
        assert!(before.budget_submissions.is_empty());
    }

    proptest! {
        #[test]
        fn repeated_votes_count_once(index in 0usize..12, repeats in 1usize..6) {
            let snapshot = seeded();
            let id = snapshot.ideas[index].id.clone();
            let mut current = snapshot.clone();
            for _ in 0..repeats {
                current = current.vote_idea(&id).0;
            }
            prop_assert_eq!(current.idea(&id).unwrap().votes, snapshot.idea(&id).unwrap().votes + 1);
        }

        #[test]
        fn allocation_over_cap_never_grows_submissions(extra in 1i64..1_000_000) {
            let before = seeded();
            let allocation = BudgetAllocation::new()
                .with("Water", TOTAL_BUDGET)
                .with("Roads", extra);
            prop_assert!(before.submit_allocation(allocation).is_err());
            prop_assert_eq!(before.budget_submissions.len(), 0);
        }
    }
}
