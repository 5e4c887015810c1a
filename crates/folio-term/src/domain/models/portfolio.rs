#[cfg(test)]
#[path = "portfolio_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// The portfolio data document, kept exactly as it was fetched.
///
/// Nothing about its shape is enforced on load. Every accessor tolerates
/// missing or mistyped fields and answers with `None` or an empty list, so a
/// sparse document renders as less output rather than an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortfolioDocument {
    root: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Job {
    pub role: Option<String>,
    pub company: Option<String>,
    pub period: Option<String>,
    pub location: Option<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Education {
    pub degree: Option<String>,
    pub school: Option<String>,
    pub location: Option<String>,
}

/// Renders a scalar the way it reads in a document. Containers and null are absent.
fn scalar(value: &Value) -> Option<String> {
    return match value {
        Value::String(s) => Some(s.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    };
}

fn field(object: &Map<String, Value>, key: &str) -> Option<String> {
    return object.get(key).and_then(scalar);
}

fn scalar_list(value: Option<&Value>) -> Vec<String> {
    return value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(scalar).collect())
        .unwrap_or_default();
}

fn records(value: Option<&Value>) -> impl Iterator<Item = &Map<String, Value>> {
    return value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object);
}

impl PortfolioDocument {
    pub fn new(root: Value) -> PortfolioDocument {
        return PortfolioDocument { root };
    }

    pub fn from_json(text: &str) -> serde_json::Result<PortfolioDocument> {
        return serde_json::from_str::<PortfolioDocument>(text);
    }

    fn top(&self, key: &str) -> Option<&Value> {
        return self.root.as_object().and_then(|object| object.get(key));
    }

    pub fn name(&self) -> Option<String> {
        return self.top("name").and_then(scalar);
    }

    pub fn title(&self) -> Option<String> {
        return self.top("title").and_then(scalar);
    }

    pub fn summary(&self) -> Option<String> {
        return self.top("summary").and_then(scalar);
    }

    /// Skill categories in the order the document declares them.
    pub fn skill_categories(&self) -> Vec<SkillCategory> {
        let Some(skills) = self.top("skills").and_then(Value::as_object) else {
            return vec![];
        };

        return skills
            .iter()
            .map(|(name, list)| SkillCategory {
                name: name.to_string(),
                skills: scalar_list(Some(list)),
            })
            .collect();
    }

    /// Looks up one category. A category whose value is not a list is absent.
    pub fn skill_category(&self, name: &str) -> Option<SkillCategory> {
        let list = self
            .top("skills")
            .and_then(Value::as_object)
            .and_then(|skills| skills.get(name))?;

        list.as_array()?;
        return Some(SkillCategory {
            name: name.to_string(),
            skills: scalar_list(Some(list)),
        });
    }

    pub fn experience(&self) -> Vec<Job> {
        return records(self.top("experience"))
            .map(|job| Job {
                role: field(job, "role"),
                company: field(job, "company"),
                period: field(job, "period"),
                location: field(job, "location"),
                achievements: scalar_list(job.get("achievements")),
            })
            .collect();
    }

    pub fn education(&self) -> Vec<Education> {
        return records(self.top("education"))
            .map(|entry| Education {
                degree: field(entry, "degree"),
                school: field(entry, "school"),
                location: field(entry, "location"),
            })
            .collect();
    }

    /// Contact pairs in document key order. Entries without a scalar value are skipped.
    pub fn contact(&self) -> Vec<(String, String)> {
        let Some(contact) = self.top("contact").and_then(Value::as_object) else {
            return vec![];
        };

        return contact
            .iter()
            .filter_map(|(label, value)| Some((label.to_string(), scalar(value)?)))
            .collect();
    }
}
