//! Main menu choices

/// An action picked from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewSummary,
    UpdateBudget,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub fn all() -> &'static [Self] {
        &[
            Self::AddExpense,
            Self::ViewSummary,
            Self::UpdateBudget,
            Self::Exit,
        ]
    }

    /// The number the user types for this choice
    pub fn key(&self) -> &'static str {
        match self {
            Self::AddExpense => "1",
            Self::ViewSummary => "2",
            Self::UpdateBudget => "3",
            Self::Exit => "4",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::AddExpense => "Add a new expense",
            Self::ViewSummary => "View summary of expenses",
            Self::UpdateBudget => "Update budget",
            Self::Exit => "Exit",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::all().iter().copied().find(|choice| choice.key() == input)
    }
}

/// Render the menu block shown before every choice
pub fn format_menu() -> String {
    let mut output = String::from("\nWhat would you like to do?\n");
    for choice in MenuChoice::all() {
        output.push_str(&format!("{}. {}\n", choice.key(), choice.description()));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddExpense));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_format_menu() {
        let menu = format_menu();
        assert!(menu.starts_with("\nWhat would you like to do?\n1. Add a new expense\n"));
        assert!(menu.ends_with("4. Exit\n"));
    }
}
