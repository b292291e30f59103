use promptcraft_boundary::Prompt;

/// Client-side filter over an already fetched prompt list.
///
/// An empty filter matches everything. The text criterion is a
/// case-insensitive substring match on title or body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptFilter {
    pub category: Option<String>,
    pub text: String,
}

impl PromptFilter {
    #[must_use]
    pub fn matches(&self, prompt: &Prompt) -> bool {
        if let Some(category) = &self.category {
            if prompt.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        let term = self.text.trim();
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        prompt.title.to_lowercase().contains(&term) || prompt.text.to_lowercase().contains(&term)
    }
}

#[must_use]
pub fn filter_prompts(prompts: &[Prompt], filter: &PromptFilter) -> Vec<Prompt> {
    prompts
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_prompt(id: &str, title: &str, text: &str, category: Option<&str>) -> Prompt {
        Prompt {
            id: id.into(),
            created_at: 0,
            title: title.into(),
            text: text.into(),
            category: category.map(Into::into),
            author: "a".into(),
            upvotes: 0,
            downvotes: 0,
        }
    }

    #[test]
    fn empty_filter_matches_all() {
        let prompts = [
            new_prompt("1", "One", "first", Some("writing")),
            new_prompt("2", "Two", "second", None),
        ];
        let filter = PromptFilter::default();
        assert_eq!(filter_prompts(&prompts, &filter).len(), 2);
    }

    #[test]
    fn filter_by_category() {
        let prompts = [
            new_prompt("1", "One", "first", Some("writing")),
            new_prompt("2", "Two", "second", Some("coding")),
            new_prompt("3", "Three", "third", None),
        ];
        let filter = PromptFilter {
            category: Some("coding".into()),
            ..Default::default()
        };
        let filtered = filter_prompts(&prompts, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_text() {
        let prompts = [
            new_prompt("1", "Plot Twist", "Write a short story", None),
            new_prompt("2", "Refactor", "improve the PLOT of this function", None),
            new_prompt("3", "Recipe", "a dinner idea", None),
        ];
        let filter = PromptFilter {
            text: "plot".into(),
            ..Default::default()
        };
        let filtered = filter_prompts(&prompts, &filter);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "1");
        assert_eq!(filtered[1].id, "2");
    }

    #[test]
    fn category_and_search_compose() {
        let prompts = [
            new_prompt("1", "Plot Twist", "story", Some("writing")),
            new_prompt("2", "Plot Device", "story", Some("coding")),
        ];
        let filter = PromptFilter {
            category: Some("writing".into()),
            text: "plot".into(),
        };
        let filtered = filter_prompts(&prompts, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn whitespace_only_search_is_ignored() {
        let prompts = [new_prompt("1", "One", "first", None)];
        let filter = PromptFilter {
            text: "   ".into(),
            ..Default::default()
        };
        assert_eq!(filter_prompts(&prompts, &filter).len(), 1);
    }
}
