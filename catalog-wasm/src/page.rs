/// Страница каталога.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Page {
    #[default]
    Users,
    Posts,
}

impl Page {
    pub(crate) const ALL: [Page; 2] = [Page::Users, Page::Posts];

    pub(crate) fn title(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Posts => "Posts",
        }
    }

    pub(crate) fn add_label(self) -> &'static str {
        match self {
            Self::Users => "Add User",
            Self::Posts => "Add Post",
        }
    }
}

/// Подпись под заголовком страницы.
pub(crate) fn summary(page: Page, total: usize, loading: bool) -> String {
    if loading {
        return "Loading…".to_string();
    }
    match total {
        0 => format!("No {} yet", page.title().to_lowercase()),
        1 => format!("1 {}", page.title().trim_end_matches('s').to_lowercase()),
        n => format!("{n} {}", page.title().to_lowercase()),
    }
}

/// Дописывает новую ошибку к уже показанной, не затирая её.
pub(crate) fn append_error(current: Option<&str>, message: &str) -> String {
    match current {
        Some(current) if !current.is_empty() => format!("{current}; {message}"),
        _ => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_is_users() {
        assert_eq!(Page::default(), Page::Users);
        assert_eq!(Page::ALL[1].add_label(), "Add Post");
    }

    #[test]
    fn summary_reports_loading_first() {
        assert_eq!(summary(Page::Users, 10, true), "Loading…");
    }

    #[test]
    fn summary_counts_records() {
        assert_eq!(summary(Page::Posts, 0, false), "No posts yet");
        assert_eq!(summary(Page::Users, 1, false), "1 user");
        assert_eq!(summary(Page::Posts, 101, false), "101 posts");
    }

    #[test]
    fn append_error_keeps_earlier_message() {
        let first = append_error(None, "users: network error");
        assert_eq!(first, "users: network error");

        let both = append_error(Some(&first), "posts: network error");
        assert_eq!(both, "users: network error; posts: network error");
    }

    #[test]
    fn append_error_ignores_empty_current() {
        assert_eq!(append_error(Some(""), "posts: decode error"), "posts: decode error");
    }
}
