use promptcraft_boundary::Prompt;

/// Total upvotes an author collected across all of their prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpvoteTotal {
    pub author: String,
    pub total: u64,
}

/// Sums upvotes per author over a fetched prompt list and returns the top
/// `limit` authors, ordered by descending total.
///
/// The sort is stable: authors with equal totals keep the order of their
/// first appearance in the input.
#[must_use]
pub fn upvote_leaders(prompts: &[Prompt], limit: usize) -> Vec<UpvoteTotal> {
    let mut totals: Vec<UpvoteTotal> = Vec::new();
    for prompt in prompts {
        match totals.iter_mut().find(|t| t.author == prompt.author) {
            Some(entry) => entry.total += prompt.upvotes,
            None => totals.push(UpvoteTotal {
                author: prompt.author.clone(),
                total: prompt.upvotes,
            }),
        }
    }
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals.truncate(limit);
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_prompt(author: &str, upvotes: u64) -> Prompt {
        Prompt {
            id: format!("{author}-{upvotes}"),
            created_at: 0,
            title: "title".into(),
            text: "text".into(),
            category: None,
            author: author.into(),
            upvotes,
            downvotes: 0,
        }
    }

    #[test]
    fn sums_upvotes_per_author() {
        let prompts = [new_prompt("a", 5), new_prompt("b", 7), new_prompt("a", 2)];
        let leaders = upvote_leaders(&prompts, 10);
        assert_eq!(leaders.len(), 2);
        // equal totals keep the original fetch order
        assert_eq!(leaders[0].author, "a");
        assert_eq!(leaders[0].total, 7);
        assert_eq!(leaders[1].author, "b");
        assert_eq!(leaders[1].total, 7);
    }

    #[test]
    fn orders_by_descending_total() {
        let prompts = [new_prompt("a", 1), new_prompt("b", 9), new_prompt("c", 4)];
        let leaders = upvote_leaders(&prompts, 10);
        let authors: Vec<_> = leaders.iter().map(|l| l.author.as_str()).collect();
        assert_eq!(authors, ["b", "c", "a"]);
    }

    #[test]
    fn truncates_to_limit() {
        let prompts: Vec<_> = (0..20).map(|i| new_prompt(&format!("u{i}"), i)).collect();
        assert_eq!(upvote_leaders(&prompts, 10).len(), 10);
    }

    #[test]
    fn empty_input_yields_empty_board() {
        assert!(upvote_leaders(&[], 10).is_empty());
    }
}
