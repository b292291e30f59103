use promptcraft_boundary::Category;

/// The fixed category set shipped with the app.
///
/// There is no category CRUD; prompts reference these ids and anything
/// unknown renders as uncategorized.
pub fn predefined_categories() -> Vec<Category> {
    [
        ("writing", "Creative Writing"),
        ("coding", "Coding"),
        ("art", "Art & Design"),
        ("marketing", "Marketing"),
        ("education", "Education"),
        ("productivity", "Productivity"),
        ("fun", "Just for Fun"),
    ]
    .into_iter()
    .map(|(id, name)| Category {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

pub fn category_name(id: Option<&str>) -> String {
    id.and_then(|id| predefined_categories().into_iter().find(|c| c.id == id))
        .map_or_else(|| "Uncategorized".to_string(), |c| c.name)
}
