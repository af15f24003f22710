/// Pipeline position of a job application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    #[default]
    Applied,
    OnlineAssessment,
    FirstInterview,
    SecondInterview,
    Hr,
    Offer,
    Rejected,
}

/// Forward pipeline order. `Rejected` sits outside of it.
pub const PIPELINE: [Stage; 6] = [
    Stage::Applied,
    Stage::OnlineAssessment,
    Stage::FirstInterview,
    Stage::SecondInterview,
    Stage::Hr,
    Stage::Offer,
];

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Applied => "Applied",
            Stage::OnlineAssessment => "OA",
            Stage::FirstInterview => "Interview #1",
            Stage::SecondInterview => "Interview #2",
            Stage::Hr => "HR",
            Stage::Offer => "Offer",
            Stage::Rejected => "Rejected",
        }
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        let wanted = s.trim();
        PIPELINE
            .iter()
            .chain(std::iter::once(&Stage::Rejected))
            .find(|stage| stage.label().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| format!("Invalid stage: {}", s))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Offer | Stage::Rejected)
    }

    /// Next pipeline entry; terminal stages stay where they are.
    pub fn next(&self) -> Stage {
        if self.is_terminal() {
            return *self;
        }
        PIPELINE
            .iter()
            .position(|stage| stage == self)
            .and_then(|idx| PIPELINE.get(idx + 1))
            .copied()
            .unwrap_or(*self)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_follows_pipeline() {
        assert_eq!(Stage::Applied.next(), Stage::OnlineAssessment);
        assert_eq!(Stage::OnlineAssessment.next(), Stage::FirstInterview);
        assert_eq!(Stage::FirstInterview.next(), Stage::SecondInterview);
        assert_eq!(Stage::SecondInterview.next(), Stage::Hr);
        assert_eq!(Stage::Hr.next(), Stage::Offer);
    }

    #[test]
    fn test_terminal_stages_do_not_move() {
        assert_eq!(Stage::Offer.next(), Stage::Offer);
        assert_eq!(Stage::Rejected.next(), Stage::Rejected);
        assert!(Stage::Offer.is_terminal());
        assert!(Stage::Rejected.is_terminal());
        assert!(!Stage::Hr.is_terminal());
    }

    #[test]
    fn test_parsing_is_case_insensitive() {
        assert_eq!(Stage::from_string("applied").unwrap(), Stage::Applied);
        assert_eq!(Stage::from_string("oa").unwrap(), Stage::OnlineAssessment);
        assert_eq!(
            Stage::from_string(" interview #2 ").unwrap(),
            Stage::SecondInterview
        );
        assert_eq!(Stage::from_string("REJECTED").unwrap(), Stage::Rejected);
        assert!(Stage::from_string("phone screen").is_err());
    }

    #[test]
    fn test_display_uses_canonical_label() {
        assert_eq!(Stage::FirstInterview.to_string(), "Interview #1");
        assert_eq!(Stage::default().to_string(), "Applied");
    }
}
