#[cfg(test)]
#[path = "interpreter_test.rs"]
mod tests;

use std::sync::Arc;

use crate::domain::models::Command;
use crate::domain::models::Dispatch;
use crate::domain::models::PortfolioDocument;
use crate::domain::models::RenderJob;
use crate::domain::models::Segment;

pub const PROMPT: &str = "$ ";
pub const DEVOPS_CATEGORY: &str = "Cloud & DevOps";
pub const UNKNOWN_HINT: &str = "Type \"help\" to see available commands.";

type Responder = fn(&PortfolioDocument) -> Vec<Segment>;

/// Column the help descriptions line up on, counted after the two-space indent.
const HELP_NAME_WIDTH: usize = 13;

fn help(_: &PortfolioDocument) -> Vec<Segment> {
    let mut segments = vec![Segment::line("Available commands:")];
    for command in Command::all() {
        segments.push(Segment::Line(format!(
            "  {:<width$}- {}",
            command.to_string(),
            command.description(),
            width = HELP_NAME_WIDTH
        )));
    }

    return segments;
}

fn about(doc: &PortfolioDocument) -> Vec<Segment> {
    return compose(&[&doc.name(), &doc.title()], |v| format!("{} — {}", v[0], v[1]))
        .into_iter()
        .collect();
}

fn summary(doc: &PortfolioDocument) -> Vec<Segment> {
    return doc.summary().map(Segment::Line).into_iter().collect();
}

fn skill_category(doc: &PortfolioDocument, name: &str) -> Vec<Segment> {
    let Some(category) = doc.skill_category(name) else {
        return vec![];
    };

    return vec![
        Segment::blank(),
        Segment::Line(format!("{}:", category.name)),
        Segment::Line(format!("  {}", category.skills.join(", "))),
    ];
}

fn skills(doc: &PortfolioDocument) -> Vec<Segment> {
    return doc
        .skill_categories()
        .iter()
        .flat_map(|category| skill_category(doc, &category.name))
        .collect();
}

fn devops(doc: &PortfolioDocument) -> Vec<Segment> {
    return skill_category(doc, DEVOPS_CATEGORY);
}

/// Formats a line from optional fields. Absent fields read as empty; if every
/// field is absent there is no line.
fn compose(fields: &[&Option<String>], format: impl Fn(&[&str]) -> String) -> Option<Segment> {
    if fields.iter().all(|field| field.is_none()) {
        return None;
    }

    let values = fields
        .iter()
        .map(|field| field.as_deref().unwrap_or_default())
        .collect::<Vec<&str>>();
    return Some(Segment::Line(format(&values)));
}

fn experience(doc: &PortfolioDocument) -> Vec<Segment> {
    let mut segments = vec![];
    for job in doc.experience() {
        segments.push(Segment::blank());
        segments.extend(compose(&[&job.role, &job.company, &job.period], |v| {
            format!("{} — {} ({})", v[0], v[1], v[2])
        }));
        segments.extend(compose(&[&job.location], |v| format!("Location: {}", v[0])));
        for achievement in job.achievements {
            segments.push(Segment::Line(format!("  - {achievement}")));
        }
    }

    return segments;
}

fn education(doc: &PortfolioDocument) -> Vec<Segment> {
    let mut segments = vec![];
    for entry in doc.education() {
        segments.push(Segment::blank());
        segments.extend(compose(&[&entry.degree], |v| v[0].to_string()));
        segments.extend(compose(&[&entry.school, &entry.location], |v| {
            format!("{} — {}", v[0], v[1])
        }));
    }

    return segments;
}

fn contact(doc: &PortfolioDocument) -> Vec<Segment> {
    return doc
        .contact()
        .into_iter()
        .map(|(label, value)| Segment::Line(format!("{label}: {value}")))
        .collect();
}

fn clear(_: &PortfolioDocument) -> Vec<Segment> {
    return vec![Segment::Clear];
}

/// The command table: each command maps to one pure response function.
fn responder(command: Command) -> Responder {
    return match command {
        Command::About => about,
        Command::Summary => summary,
        Command::Skills => skills,
        Command::Devops => devops,
        Command::Experience => experience,
        Command::Education => education,
        Command::Contact => contact,
        Command::Clear => clear,
        Command::Help => help,
    };
}

pub struct Interpreter {
    document: Arc<PortfolioDocument>,
}

impl Interpreter {
    pub fn new(document: PortfolioDocument) -> Interpreter {
        return Interpreter {
            document: Arc::new(document),
        };
    }

    /// The response to a line, without the echoed prompt.
    pub fn respond(&self, input: &str) -> Vec<Segment> {
        return match Dispatch::parse(input) {
            Dispatch::Empty => vec![],
            Dispatch::Known(command) => responder(command)(&self.document),
            Dispatch::Unknown(original) => vec![
                Segment::Line(format!("Unknown command: {original}")),
                Segment::line(UNKNOWN_HINT),
            ],
        };
    }

    /// The full render job for a submission: the echoed prompt line, then the response.
    pub fn submit(&self, input: &str) -> RenderJob {
        let trimmed = input.trim();
        let mut segments = vec![Segment::Line(format!("{PROMPT}{trimmed}"))];
        segments.extend(self.respond(trimmed));

        tracing::debug!(input = trimmed, segments = segments.len(), "command");
        return RenderJob::new(segments);
    }

    pub fn welcome(&self) -> RenderJob {
        let owner = self
            .document
            .name()
            .and_then(|name| name.split_whitespace().next().map(|first| format!("{first}'s")))
            .unwrap_or_else(|| "the".to_string());

        return RenderJob::new(vec![
            Segment::line("System initialized successfully ✅"),
            Segment::Line(format!(
                "Welcome to {owner} console portfolio! Type 'help' to get started."
            )),
            Segment::blank(),
        ]);
    }
}
