//! Demo that loads the blog section view from a running proxy and prints it
//! (pass the proxy base URL as the first argument, default localhost:8000).

use portfolio_feed::config::FeedConfig;
use portfolio_feed::consumer::{FeedClient, FeedView};
use portfolio_feed::feed::rss2json::medium_profile_url;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_target(false).init();

    let base = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:8000".to_string());
    let config = FeedConfig::load();
    let client = FeedClient::new(base, medium_profile_url(&config.medium_username));

    println!("Loading articles...");
    match client.load().await {
        FeedView::Loading => unreachable!("load() resolves to a terminal state"),
        FeedView::Error {
            message,
            fallback_url,
        } => {
            println!("Error loading articles: {message}");
            println!("You can visit {fallback_url} directly.");
        }
        FeedView::Empty => println!("No articles found at this time."),
        FeedView::Populated(cards) => {
            for card in cards {
                println!();
                println!("{}", card.title);
                println!("  {}", card.date);
                println!("  {}", card.description);
                if !card.categories.is_empty() {
                    println!("  [{}]", card.categories.join(", "));
                }
                println!("  {}", card.link);
            }
        }
    }
}
