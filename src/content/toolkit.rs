//! Discovery toolkit: search queries and outbound links
//!
//! The toolkit only composes URLs; nothing is fetched. Opening a link is
//! left to the host environment.

use anyhow::Result;
use url::Url;

/// Default Twitter/X search query for creators promoting new work
pub const DEFAULT_X_QUERY: &str =
    r#"("my new book" OR "my new newsletter") filter:links min_faves:20"#;

/// Substack discovery leaderboards
pub const SUBSTACK_EXPLORE_URL: &str = "https://substack.com/home/explore";

/// Build the Twitter/X search URL for a query, percent-encoded
pub fn x_search_url(query: &str) -> Result<Url> {
    let mut url = Url::parse("https://twitter.com/search")?;
    url.query_pairs_mut().append_pair("q", query);
    Ok(url)
}

/// A discovery channel with its scouting notes
#[derive(Debug, Clone, Copy)]
pub struct Channel {
    pub name: &'static str,
    pub tips: &'static [&'static str],
}

/// Scouting notes per channel, as shown on the toolkit view
pub fn channels() -> &'static [Channel] {
    &[
        Channel {
            name: "Substack",
            tips: &[
                "Browse \"Top Technology\" or \"Culture\" leaderboards.",
                "Look for mid-sized followings active in \"Notes\".",
                "Subscribe to free tiers to enter funnels.",
            ],
        },
        Channel {
            name: "Goodreads",
            tips: &[
                "Search for newly published books in Sci-Fi, Economics, Tech, History.",
                "Authors on book tours are highly receptive.",
            ],
        },
        Channel {
            name: "LinkedIn",
            tips: &["Watch the #Author, #TechSpeaker and #Innovation hashtags."],
        },
    ]
}
