/// One job posting scraped from a search results page.
///
/// Records are built once per listing row and never modified afterwards,
/// so the fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    id: String,
    title: String,
    location: String,
    salary: String,
}

impl JobRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: location.into(),
            salary: String::new(),
        }
    }

    /// Site-assigned listing identifier; empty when the row carries none
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Reserved. The search results page does not expose salaries.
    #[allow(dead_code)]
    pub fn salary(&self) -> &str {
        &self.salary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_is_always_empty() {
        let job = JobRecord::new("12345", "Python 개발자", "서울 강남구");
        assert_eq!(job.id(), "12345");
        assert_eq!(job.title(), "Python 개발자");
        assert_eq!(job.location(), "서울 강남구");
        assert_eq!(job.salary(), "");
    }
}
