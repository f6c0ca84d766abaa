use crate::error::ThemeError;

/// The element whose class list carries the theme, normally `<body>`.
pub trait ClassTarget {
    fn has_class(&self, class: &str) -> Result<bool, ThemeError>;
    fn set_class(&mut self, class: &str, present: bool) -> Result<(), ThemeError>;
}

/// Class list held in memory, for native builds and tests.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryClassList {
    classes: Vec<String>,
}

impl MemoryClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(classes: &str) -> Self {
        let mut list = Self::new();
        for class in classes.split_whitespace() {
            if !list.classes.iter().any(|c| c == class) {
                list.classes.push(class.to_string());
            }
        }
        list
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }
}

impl ClassTarget for MemoryClassList {
    fn has_class(&self, class: &str) -> Result<bool, ThemeError> {
        Ok(self.classes.iter().any(|c| c == class))
    }

    fn set_class(&mut self, class: &str, present: bool) -> Result<(), ThemeError> {
        if class.is_empty() || class.chars().any(char::is_whitespace) {
            return Err(ThemeError::ClassList(format!("invalid class token {:?}", class)));
        }
        let found = self.classes.iter().position(|c| c == class);
        match (found, present) {
            (None, true) => self.classes.push(class.to_string()),
            (Some(idx), false) => {
                self.classes.remove(idx);
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_class_keeps_other_classes() {
        let mut list = MemoryClassList::with_classes("page wide");
        list.set_class("dark", true).unwrap();
        list.set_class("dark", true).unwrap();
        assert_eq!(list.class_name(), "page wide dark");

        list.set_class("dark", false).unwrap();
        assert_eq!(list.class_name(), "page wide");
    }

    #[test]
    fn test_rejects_whitespace_token() {
        let mut list = MemoryClassList::new();
        assert!(matches!(list.set_class("dark mode", true), Err(ThemeError::ClassList(_))));
        assert!(matches!(list.set_class("", true), Err(ThemeError::ClassList(_))));
    }
}
