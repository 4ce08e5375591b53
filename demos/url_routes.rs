//! Routes request URLs to handlers by longest matching path prefix.
use log::info;
use sequence_trie::Trie;
use url::Url;

fn segments(url: &Url) -> Vec<String> {
    url.path_segments()
        .map(|segments| {
            segments
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn main() -> Result<(), url::ParseError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let base = Url::parse("https://example.com/")?;
    let mut routes: Trie<Vec<String>, &str> = Trie::new();
    for (path, handler) in [
        ("", "index"),
        ("docs", "docs"),
        ("docs/api", "api reference"),
        ("blog", "blog"),
    ] {
        routes.insert(&segments(&base.join(path)?), handler);
    }

    for request in [
        "https://example.com/docs/api/trie.html",
        "https://example.com/blog/2024/01",
        "https://example.com/contact",
    ] {
        let url = Url::parse(request)?;
        match routes.longest_prefix_entry(&segments(&url)) {
            Some((matched, handler)) => info!("{} -> {} (/{})", request, handler, matched.join("/")),
            None => info!("{} -> no route", request),
        }
    }

    Ok(())
}
