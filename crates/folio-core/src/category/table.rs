use serde::{Deserialize, Serialize};

use crate::feed::Article;

/// A topic bucket and the keywords that put an article in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    pub slug: String,
    pub keywords: Vec<String>,
    /// Also search the title and description, not only the tags
    #[serde(default)]
    pub match_in_text: bool,
}

impl CategoryConfig {
    pub fn new<I, S>(name: &str, slug: &str, keywords: I, match_in_text: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            slug: slug.to_string(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            match_in_text,
        }
    }

    /// Category used for a slug missing from the table: the slug is the only
    /// keyword and text matching is on.
    pub fn ad_hoc(slug: &str) -> Self {
        let slug = slug.to_lowercase();
        Self::new(&slug, &slug, [slug.clone()], true)
    }

    /// Whether any keyword is a case-insensitive substring of a tag, or of
    /// the title or description when text matching is on
    pub fn matches(&self, article: &Article) -> bool {
        let tags: Vec<String> = article.categories.iter().map(|t| t.to_lowercase()).collect();
        let text = self
            .match_in_text
            .then(|| (article.title.to_lowercase(), article.description.to_lowercase()));

        self.keywords.iter().any(|keyword| {
            let keyword = keyword.to_lowercase();

            if tags.iter().any(|tag| tag.contains(&keyword)) {
                return true;
            }

            match &text {
                Some((title, description)) => {
                    title.contains(&keyword) || description.contains(&keyword)
                }
                None => false,
            }
        })
    }
}

/// Ordered, read-only set of categories handed to the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    categories: Vec<CategoryConfig>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CategoryTable {
    pub fn new(categories: Vec<CategoryConfig>) -> Self {
        Self { categories }
    }

    /// The site's stock categories: web development and AI
    pub fn builtin() -> Self {
        Self::new(vec![
            CategoryConfig::new(
                "Web Development",
                "web",
                [
                    "programming",
                    "software architecture",
                    "frontend",
                    "micro frontends",
                    "backend",
                    "fullstack",
                    "tech",
                    "typescript",
                    "javascript",
                    "react",
                    "react microfrontends",
                    "nextjs",
                    "azure",
                    "nodejs",
                    "express",
                    "mongodb",
                    "postgresql",
                    "supabase",
                    "tailwindcss",
                    "google cloud",
                    "cloud",
                    "web development",
                ],
                true,
            ),
            CategoryConfig::new(
                "AI",
                "ai",
                [
                    "ai",
                    "gemini",
                    "claude",
                    "llm",
                    "agency",
                    "grok",
                    "openai",
                    "machine learning",
                    "artificial intelligence",
                    "chatgpt",
                    "deep learning",
                    "neural network",
                ],
                false,
            ),
        ])
    }

    /// Case-insensitive lookup by slug
    pub fn get(&self, slug: &str) -> Option<&CategoryConfig> {
        let slug = slug.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.slug.to_lowercase() == slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryConfig> {
        self.categories.iter()
    }

    pub fn slugs(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.slug.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn into_categories(self) -> Vec<CategoryConfig> {
        self.categories
    }
}
