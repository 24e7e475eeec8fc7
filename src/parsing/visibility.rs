//! Capitalization-based visibility of Go identifiers

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
}

/// Determine Go visibility based on capitalization
pub fn go_visibility(name: &str) -> Visibility {
    if name.starts_with(char::is_uppercase) {
        Visibility::Public
    } else {
        Visibility::Private
    }
}

/// Whether `name` is exported from its package
pub fn is_exported(name: &str) -> bool {
    go_visibility(name) == Visibility::Public
}
