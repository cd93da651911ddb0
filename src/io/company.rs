//! Company attribution
//!
//! Maps an article to one tracked company by plain keyword and symbol
//! matching. There is no entity disambiguation: the first tracked company
//! that matches wins.

use super::article::Article;
use serde::{Deserialize, Serialize};

/// A company whose news is tracked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedCompany {
    /// Display name, e.g. "Apple Inc."
    pub name: String,
    /// Sector, e.g. "Technology"
    pub sector: String,
    /// Ticker symbol, if listed
    #[serde(default)]
    pub symbol: Option<String>,
}

impl TrackedCompany {
    /// Create a tracked company
    pub fn new(name: impl Into<String>, sector: impl Into<String>, symbol: Option<&str>) -> Self {
        Self {
            name: name.into(),
            sector: sector.into(),
            symbol: symbol.map(str::to_string),
        }
    }
}

/// Attributes articles to tracked companies
#[derive(Debug, Clone, Default)]
pub struct CompanyMatcher {
    companies: Vec<TrackedCompany>,
}

impl CompanyMatcher {
    /// Create a matcher over companies in priority order
    pub fn new(companies: Vec<TrackedCompany>) -> Self {
        Self { companies }
    }

    /// Tracked companies in priority order
    pub fn companies(&self) -> &[TrackedCompany] {
        &self.companies
    }

    /// Find the company an article is about
    ///
    /// Checked in order:
    /// 1. The search term the article was fetched for equals a company name
    /// 2. Any word of a company name appears in title, description or content
    /// 3. A company's ticker symbol appears there
    ///
    /// Matching is case-insensitive substring matching.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::Utc;
    /// use finsent::io::article::Article;
    /// use finsent::io::company::{CompanyMatcher, TrackedCompany};
    ///
    /// let matcher = CompanyMatcher::new(vec![
    ///     TrackedCompany::new("Microsoft Corporation", "Technology", Some("MSFT")),
    ///     TrackedCompany::new("Tesla", "Automotive", Some("TSLA")),
    /// ]);
    /// let article = Article {
    ///     title: "TSLA deliveries disappoint".to_string(),
    ///     description: None,
    ///     content: None,
    ///     url: "https://news.example.com/tsla".to_string(),
    ///     source: "Wire".to_string(),
    ///     published_at: Utc::now(),
    ///     company_search_term: "sector:automotive".to_string(),
    ///     author: None,
    /// };
    ///
    /// assert_eq!(matcher.attribute(&article).map(|c| c.name.as_str()), Some("Tesla"));
    /// ```
    pub fn attribute(&self, article: &Article) -> Option<&TrackedCompany> {
        if let Some(company) = self
            .companies
            .iter()
            .find(|c| c.name == article.company_search_term)
        {
            return Some(company);
        }

        let haystack = format!(
            "{} {} {}",
            article.title,
            article.description.as_deref().unwrap_or(""),
            article.content.as_deref().unwrap_or("")
        )
        .to_lowercase();

        let by_name = self.companies.iter().find(|c| {
            c.name
                .to_lowercase()
                .split_whitespace()
                .any(|word| haystack.contains(word))
        });
        if by_name.is_some() {
            return by_name;
        }

        let by_symbol = self.companies.iter().find(|c| {
            c.symbol
                .as_deref()
                .filter(|s| !s.is_empty())
                .is_some_and(|s| haystack.contains(&s.to_lowercase()))
        });
        if by_symbol.is_none() {
            log::debug!("No tracked company matched article: {}", article.title);
        }
        by_symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn matcher() -> CompanyMatcher {
        CompanyMatcher::new(vec![
            TrackedCompany::new("Apple Inc.", "Technology", Some("AAPL")),
            TrackedCompany::new("JPMorgan Chase", "Finance", Some("JPM")),
            TrackedCompany::new("Pfizer", "Healthcare", None),
        ])
    }

    fn article(title: &str, search_term: &str) -> Article {
        Article {
            title: title.to_string(),
            description: None,
            content: None,
            url: "https://news.example.com/a".to_string(),
            source: "Wire".to_string(),
            published_at: Utc::now(),
            company_search_term: search_term.to_string(),
            author: None,
        }
    }

    #[test]
    fn test_search_term_wins() {
        let m = matcher();
        let a = article("Pfizer trial results", "JPMorgan Chase");
        assert_eq!(m.attribute(&a).unwrap().name, "JPMorgan Chase");
    }

    #[test]
    fn test_name_word_match() {
        let m = matcher();
        let a = article("Chase expands branch network", "sector:finance");
        assert_eq!(m.attribute(&a).unwrap().name, "JPMorgan Chase");

        let mut a = article("Drug approvals", "sector:healthcare");
        a.content = Some("The FDA cleared a PFIZER vaccine".to_string());
        assert_eq!(m.attribute(&a).unwrap().name, "Pfizer");
    }

    #[test]
    fn test_symbol_match() {
        let m = matcher();
        let a = article("JPM raises dividend", "sector:finance");
        assert_eq!(m.attribute(&a).unwrap().name, "JPMorgan Chase");
    }

    #[test]
    fn test_no_match() {
        let m = matcher();
        let a = article("Oil prices steady", "sector:energy");
        assert!(m.attribute(&a).is_none());
        assert!(CompanyMatcher::default().attribute(&a).is_none());
    }
}
