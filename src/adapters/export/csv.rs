//! CSV export of ideas and projects.
//!
//! Fields containing a comma, double quote, CR or LF are quoted and
//! embedded quotes doubled. Rows are joined with `\n`.

use crate::domain::idea::ProjectIdea;
use crate::domain::project::OfficialProject;

pub const IDEA_HEADERS: [&str; 9] = [
    "ID",
    "Title",
    "Description",
    "Location",
    "SubCounty",
    "Ward",
    "Category",
    "Votes",
    "Status",
];

pub const PROJECT_HEADERS: [&str; 10] = [
    "ID",
    "Name",
    "Description",
    "Location",
    "SubCounty",
    "Ward",
    "Budget",
    "Status",
    "Start Date",
    "End Date",
];

const MISSING: &str = "N/A";

/// Quotes a field when it needs it.
pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn row<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn ideas_to_csv(ideas: &[ProjectIdea]) -> String {
    let mut rows = vec![row(IDEA_HEADERS)];
    rows.extend(ideas.iter().map(|idea| {
        row([
            idea.id.to_string(),
            idea.title.clone(),
            idea.description.clone(),
            idea.location.clone(),
            idea.sub_county.clone(),
            idea.ward.clone(),
            idea.category.clone().unwrap_or_default(),
            idea.votes.to_string(),
            idea.status.to_string(),
        ])
    }));
    rows.join("\n")
}

pub fn projects_to_csv(projects: &[OfficialProject]) -> String {
    let mut rows = vec![row(PROJECT_HEADERS)];
    rows.extend(projects.iter().map(|project| {
        row([
            project.id.to_string(),
            project.name.clone(),
            project.description.clone(),
            project.location.clone(),
            project.sub_county.clone().unwrap_or_else(|| MISSING.to_string()),
            project.ward.clone().unwrap_or_else(|| MISSING.to_string()),
            project.budget.to_string(),
            project.status.to_string(),
            project.timeline.start.format("%Y-%m-%d").to_string(),
            project
                .timeline
                .end
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ])
    }));
    rows.join("\n")
}
