use derive_more::derive::Display;

/// A validated page title.
///
/// Only the title extractor and [`Title::parse`] hand these out, so anything
/// holding a `Title` has already passed the `[A-Za-z0-9]+` check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{}", _0)]
pub struct Title(String);

impl Title {
    pub fn parse(raw: &str) -> Option<Self> {
        if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            Some(Self(raw.to_owned()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // <title>.txt
    pub fn filename(&self) -> String {
        format!("{}.txt", self.0)
    }

    pub fn view_path(&self) -> String {
        format!("/view/{}", self.0)
    }

    pub fn edit_path(&self) -> String {
        format!("/edit/{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: Title,
    pub body: Vec<u8>,
}

impl Page {
    pub fn new(title: Title, body: impl Into<Vec<u8>>) -> Self {
        Self {
            title,
            body: body.into(),
        }
    }

    // a page that has not been written yet
    pub fn empty(title: Title) -> Self {
        Self {
            title,
            body: Vec::new(),
        }
    }

    /// Body as text for the templates. Invalid UTF-8 is replaced rather than rejected.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
