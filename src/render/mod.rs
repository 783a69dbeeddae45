use crate::domain::Page;
use anyhow::{Context, Result};
use minijinja::{context, AutoEscape, Environment};
use std::path::Path;

pub mod wikilinks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateName {
    View,
    Edit,
}

impl TemplateName {
    pub const ALL: [TemplateName; 2] = [TemplateName::View, TemplateName::Edit];

    pub fn file_name(self) -> &'static str {
        match self {
            TemplateName::View => "view.html",
            TemplateName::Edit => "edit.html",
        }
    }
}

/// The parsed template set. Built once at startup and only read afterwards.
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Reads and parses `view.html` and `edit.html` from `dir`.
    ///
    /// Any missing or malformed template is an error; the server should not
    /// start without both.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut sources = Vec::with_capacity(TemplateName::ALL.len());
        for name in TemplateName::ALL {
            let path = dir.join(name.file_name());
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read template {}", path.display()))?;
            sources.push((name.file_name(), source));
        }

        let templates = Self::from_sources(sources)
            .with_context(|| format!("Failed to parse templates in {}", dir.display()))?;

        tracing::info!(dir = %dir.display(), "templates loaded");
        Ok(templates)
    }

    pub fn from_sources<I>(sources: I) -> Result<Self, minijinja::Error>
    where
        I: IntoIterator<Item = (&'static str, String)>,
    {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_filter("wikilinks", wikilinks::wikilinks);

        for (name, source) in sources {
            env.add_template_owned(name, source)?;
        }

        // both templates have to be present
        for name in TemplateName::ALL {
            env.get_template(name.file_name())?;
        }

        Ok(Self { env })
    }

    /// Renders the page into a complete HTML document.
    ///
    /// Rendering goes to a string so a failure can still become a clean error
    /// response.
    pub fn render(&self, name: TemplateName, page: &Page) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(name.file_name())?;
        tmpl.render(context! {
            title => page.title.as_str(),
            body => page.body_text(),
        })
    }
}
