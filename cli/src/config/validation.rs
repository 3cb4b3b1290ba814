use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub message: String,
    /// File or config section the issue was found in
    pub location: Option<String>,
}

/// Problems found while loading configuration and table files.
///
/// Loading keeps going past bad tables; callers decide whether to print or
/// fail on what was collected here.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: String, location: Option<String>) {
        self.push(IssueSeverity::Error, message, location);
    }

    pub fn add_warning(&mut self, message: String, location: Option<String>) {
        self.push(IssueSeverity::Warning, message, location);
    }

    fn push(&mut self, severity: IssueSeverity, message: String, location: Option<String>) {
        self.issues.push(ValidationIssue {
            severity,
            message,
            location,
        });
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.issues.extend(other.issues);
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Warning)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

fn write_section<'a>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    issues: impl Iterator<Item = &'a ValidationIssue>,
) -> fmt::Result {
    let mut issues = issues.peekable();
    if issues.peek().is_none() {
        return Ok(());
    }
    writeln!(f, "{}:", title)?;
    for issue in issues {
        match &issue.location {
            Some(loc) => writeln!(f, "  [{}] {}", loc, issue.message)?,
            None => writeln!(f, "  {}", issue.message)?,
        }
    }
    Ok(())
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section(f, "Errors", self.errors())?;
        write_section(f, "Warnings", self.warnings())
    }
}
