use lazy_static::lazy_static;
use minijinja::{HtmlEscape, Value};
use regex::Regex;

lazy_static! {
    static ref WIKI_LINK: Regex = Regex::new(r"\[([A-Za-z0-9]+)\]").unwrap();
}

/// Template filter: HTML-escapes the text and turns `[PageName]` into a link
/// to that page's view route.
pub fn wikilinks(value: String) -> Value {
    let escaped = HtmlEscape(&value).to_string();
    let linked = WIKI_LINK.replace_all(&escaped, r#"<a href="/view/$1">$1</a>"#);
    Value::from_safe_string(linked.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_bracketed_names() {
        let out = wikilinks("see [FrontPage] and [Other]".to_string());
        assert_eq!(
            out.to_string(),
            r#"see <a href="/view/FrontPage">FrontPage</a> and <a href="/view/Other">Other</a>"#
        );
    }

    #[test]
    fn escapes_before_linking() {
        let out = wikilinks("<b>[Page]</b>".to_string());
        assert_eq!(
            out.to_string(),
            r#"&lt;b&gt;<a href="/view/Page">Page</a>&lt;&#x2f;b&gt;"#
        );
    }

    #[test]
    fn ignores_invalid_names() {
        let out = wikilinks("[not a page] [bad!]".to_string());
        assert_eq!(out.to_string(), "[not a page] [bad!]");
    }
}
