use serde::Serialize;

/// Free-text details from the upload form. Echoed in the report only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudentProfile {
    pub name: Option<String>,
    pub age: Option<String>,
    pub notes: Option<String>,
}
