//! Top-level tabs.

/// The three mutually exclusive top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Tab {
    #[default]
    Calendar,
    Posts,
    Guidelines,
}

impl Tab {
    /// Tabs in display order.
    pub const ALL: [Tab; 3] = [Tab::Calendar, Tab::Posts, Tab::Guidelines];

    /// Label shown in the tab bar. The posts tab carries the post count.
    pub fn title(self, post_count: usize) -> String {
        match self {
            Tab::Calendar => "Content Calendar".to_string(),
            Tab::Posts => format!("All Posts ({})", post_count),
            Tab::Guidelines => "Guidelines".to_string(),
        }
    }

    /// Position in the tab bar, 0-based.
    pub fn index(self) -> usize {
        match self {
            Tab::Calendar => 0,
            Tab::Posts => 1,
            Tab::Guidelines => 2,
        }
    }

    /// Tab for a 0-based position, if any.
    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_calendar() {
        assert_eq!(Tab::default(), Tab::Calendar);
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Tab::Calendar.next(), Tab::Posts);
        assert_eq!(Tab::Guidelines.next(), Tab::Calendar);
    }

    #[test]
    fn test_previous_wraps() {
        assert_eq!(Tab::Calendar.previous(), Tab::Guidelines);
        assert_eq!(Tab::Posts.previous(), Tab::Calendar);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Tab::Calendar.title(30), "Content Calendar");
        assert_eq!(Tab::Posts.title(30), "All Posts (30)");
        assert_eq!(Tab::Guidelines.title(30), "Guidelines");
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Tab::from_index(1), Some(Tab::Posts));
        assert_eq!(Tab::from_index(3), None);
    }
}
