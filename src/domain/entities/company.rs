use super::require_text;

#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub official_site: Option<String>,
    pub careers_url: Option<String>,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Company {
    /// Careers URL the crawler should visit, if this company is crawlable.
    pub fn crawl_target(&self) -> Option<&str> {
        if !self.active {
            return None;
        }
        self.careers_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCompany {
    pub name: String,
    pub official_site: Option<String>,
    pub careers_url: Option<String>,
    pub active: bool,
}

impl NewCompany {
    pub fn new(
        name: &str,
        official_site: Option<String>,
        careers_url: Option<String>,
        active: bool,
    ) -> Result<Self, String> {
        Ok(Self {
            name: require_text("name", name)?,
            official_site,
            careers_url,
            active,
        })
    }
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyChanges {
    pub name: Option<String>,
    pub official_site: Option<String>,
    pub careers_url: Option<String>,
    pub active: Option<bool>,
}

impl CompanyChanges {
    pub fn normalized(self) -> Result<Self, String> {
        let name = match self.name {
            Some(name) => Some(require_text("name", &name)?),
            None => None,
        };
        Ok(Self { name, ..self })
    }

    pub fn apply_to(&self, current: &Company, now: &str) -> Company {
        Company {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            official_site: self
                .official_site
                .clone()
                .or_else(|| current.official_site.clone()),
            careers_url: self
                .careers_url
                .clone()
                .or_else(|| current.careers_url.clone()),
            active: self.active.unwrap_or(current.active),
            created_at: current.created_at.clone(),
            updated_at: now.to_string(),
        }
    }
}
