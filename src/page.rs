//! Host page that the leaderboard is rendered into

use indoc::formatdoc;
use parking_lot::Mutex;
use std::sync::Arc;

/// Identifier of the element holding the leaderboard rows
pub const TOP10_CONTAINER_ID: &str = "table_top10";

/// Inner content of a single page element addressed by a fixed id.
/// Content is only ever replaced as a whole
pub struct DisplayContainer {
    id: &'static str,
    content: Mutex<String>,
}

impl DisplayContainer {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            content: Mutex::new(String::new()),
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Copy of the current inner content
    pub fn content(&self) -> String {
        self.content.lock().clone()
    }

    /// Replaces the entire inner content with `fragment`
    pub fn replace(&self, fragment: String) {
        *self.content.lock() = fragment;
    }
}

/// The hosting page document. The table header is static markup and
/// only the body rows come from the display container
pub struct HostPage {
    container: Arc<DisplayContainer>,
}

impl HostPage {
    const TITLE: &'static str = "Top 10 Players";

    pub fn new() -> Self {
        Self {
            container: Arc::new(DisplayContainer::new(TOP10_CONTAINER_ID)),
        }
    }

    /// Shared handle to the display container
    pub fn container(&self) -> Arc<DisplayContainer> {
        self.container.clone()
    }

    /// Renders the full HTML document with the current container content
    pub fn render(&self) -> String {
        formatdoc! {r#"
            <!DOCTYPE html>
            <html lang="en">
            <head>
                <meta charset="UTF-8">
                <title>{title}</title>
            </head>
            <body>
                <h1>{title}</h1>
                <table>
                    <thead>
                        <tr><th>Rank</th><th>Name</th><th>Score</th></tr>
                    </thead>
                    <tbody id="{id}">{rows}</tbody>
                </table>
            </body>
            </html>
            "#,
            title = Self::TITLE,
            id = self.container.id(),
            rows = self.container.content(),
        }
    }
}

impl Default for HostPage {
    fn default() -> Self {
        Self::new()
    }
}
