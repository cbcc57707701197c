/// Records that carry a Thai name and a romanized English name
pub trait LocalizedName {
    fn name_th(&self) -> &str;
    fn name_en(&self) -> &str;
}

impl<T: LocalizedName + ?Sized> LocalizedName for &T {
    fn name_th(&self) -> &str {
        (**self).name_th()
    }

    fn name_en(&self) -> &str {
        (**self).name_en()
    }
}

/// Case-insensitive substring match against either name.
///
/// `needle` must already be lowercase.
pub fn matches_search<T: LocalizedName>(item: &T, needle: &str) -> bool {
    item.name_th().to_lowercase().contains(needle) || item.name_en().to_lowercase().contains(needle)
}

/// Keep only the items whose names contain `search`.
///
/// A missing or empty search term returns `items` untouched.
pub fn filter_by_search<T: LocalizedName>(items: Vec<T>, search: Option<&str>) -> Vec<T> {
    let needle = match search {
        Some(term) if !term.is_empty() => term.to_lowercase(),
        _ => return items,
    };

    items
        .into_iter()
        .filter(|item| matches_search(item, &needle))
        .collect()
}
