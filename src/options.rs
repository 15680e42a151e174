use crate::{Error, Result};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PaginatorOptions {
    pub per_page: u32,
    /// Rows that may be folded into the last page instead of forming a
    /// short page of their own. Defaults to 0.
    #[serde(default)]
    pub orphans: u32,
    #[serde(default = "default_allow_empty_first_page")]
    pub allow_empty_first_page: bool,
}

fn default_allow_empty_first_page() -> bool {
    true
}

impl PaginatorOptions {
    pub fn with_per_page(per_page: u32) -> Self {
        Self {
            per_page,
            orphans: 0,
            allow_empty_first_page: true,
        }
    }

    pub fn orphans(mut self, orphans: u32) -> Self {
        self.orphans = orphans;
        self
    }

    pub fn allow_empty_first_page(mut self, allow: bool) -> Self {
        self.allow_empty_first_page = allow;
        self
    }

    pub fn validate(&self, max: Option<u32>) -> Result<()> {
        if self.per_page == 0 {
            return Err(Error::InvalidPerPage);
        }
        match max {
            Some(max) if self.per_page > max => Err(Error::PerPageTooLarge {
                per_page: self.per_page,
                max,
            }),
            _ => Ok(()),
        }
    }
}
