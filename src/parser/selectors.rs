use scraper::Selector;
use std::sync::LazyLock;

fn parse(css: &'static str) -> Selector {
    // Only called with the literals below.
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid static selector `{}`: {}", css, e))
}

pub static TITLE: LazyLock<Selector> = LazyLock::new(|| parse("title"));
pub static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| parse(r#"meta[name="description"]"#));
pub static META_VIEWPORT: LazyLock<Selector> = LazyLock::new(|| parse(r#"meta[name="viewport"]"#));
pub static META_CHARSET: LazyLock<Selector> = LazyLock::new(|| parse("meta[charset]"));
pub static HEADINGS: LazyLock<Selector> = LazyLock::new(|| parse("h1, h2, h3, h4, h5, h6"));
pub static IMAGES: LazyLock<Selector> = LazyLock::new(|| parse("img"));
pub static LINKS: LazyLock<Selector> = LazyLock::new(|| parse("a[href]"));
