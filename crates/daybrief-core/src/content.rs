use serde::Deserialize;

use crate::CoreError;

/// The body of one briefing.
///
/// Deployments serve either the structured JSON shape or an opaque markdown
/// blob; both unify here and are replaced wholesale on every accepted fetch,
/// never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentDocument {
    Structured(Vec<Section>),
    Markup(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub stories: Vec<Story>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub headline: String,
    pub body: String,
    pub sources: Vec<SourceLink>,
}

/// An attributed source for a story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink {
    pub name: String,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Deserialization structs — non-essential fields are Option so slightly
// malformed documents still load.
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct LoadedDoc {
    sections: Vec<LoadedSection>,
}

#[derive(Deserialize)]
struct LoadedSection {
    title: Option<String>,
    stories: Option<Vec<LoadedStory>>,
}

#[derive(Deserialize)]
struct LoadedStory {
    headline: Option<String>,
    body: Option<String>,
    sources: Option<Vec<LoadedSource>>,
}

#[derive(Deserialize)]
struct LoadedSource {
    name: Option<String>,
    url: Option<String>,
}

/// Decode the structured briefing shape.
pub fn decode_structured(body: &str) -> Result<ContentDocument, CoreError> {
    let loaded: LoadedDoc =
        serde_json::from_str(body).map_err(|e| CoreError::Decode(e.to_string()))?;

    let sections = loaded
        .sections
        .into_iter()
        .map(|s| Section {
            title: s.title.unwrap_or_default(),
            stories: s
                .stories
                .unwrap_or_default()
                .into_iter()
                .map(|st| Story {
                    headline: st.headline.unwrap_or_default(),
                    body: st.body.unwrap_or_default(),
                    sources: st
                        .sources
                        .unwrap_or_default()
                        .into_iter()
                        .map(|src| SourceLink {
                            name: src.name.unwrap_or_default(),
                            url: src.url.unwrap_or_default(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    Ok(ContentDocument::Structured(sections))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_full_document() {
        let body = r#"{
            "sections": [{
                "title": "World",
                "stories": [{
                    "headline": "Something happened",
                    "body": "Details of the thing.",
                    "sources": [{"name": "Reuters", "url": "https://example.com/a"}]
                }]
            }]
        }"#;
        let ContentDocument::Structured(sections) = decode_structured(body).unwrap() else {
            panic!("expected structured document");
        };
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "World");
        assert_eq!(sections[0].stories[0].sources[0].name, "Reuters");
    }

    #[test]
    fn decode_tolerates_sparse_fields() {
        let body = r#"{"sections": [{"stories": [{"headline": "h"}]}]}"#;
        let ContentDocument::Structured(sections) = decode_structured(body).unwrap() else {
            panic!("expected structured document");
        };
        assert_eq!(sections[0].title, "");
        assert_eq!(sections[0].stories[0].body, "");
        assert!(sections[0].stories[0].sources.is_empty());
    }

    #[test]
    fn decode_rejects_markup_text() {
        assert!(decode_structured("# Daily briefing\n\nplain markdown").is_err());
    }
}
