//! Rendering of leaderboard entries into table row markup. Values are
//! written through an askama template which HTML escapes them

use super::models::{PlayerScoreEntry, RenderedRow};
use askama::Template;
use thiserror::Error;

/// Template for the table rows, rows are joined without any separators
/// and no header row is produced
#[derive(Template)]
#[template(
    source = "{% for row in rows %}<tr><td>{{ row.rank }}</td><td>{{ row.name }}</td><td>{{ row.score }}</td></tr>{% endfor %}",
    ext = "html"
)]
struct RowsTemplate<'a> {
    rows: &'a [RenderedRow<'a>],
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to render leaderboard rows: {0}")]
    Template(#[from] askama::Error),
}

/// Renders the provided entries into a single fragment of table rows
/// with ranks assigned from the position of each entry
pub fn render_rows(entries: &[PlayerScoreEntry]) -> Result<String, RenderError> {
    let rows = RenderedRow::from_entries(entries);
    let fragment = RowsTemplate { rows: &rows }.render()?;
    Ok(fragment)
}

#[cfg(test)]
mod test {
    use super::render_rows;
    use crate::leaderboard::models::PlayerScoreEntry;

    fn entries(json: &str) -> Vec<PlayerScoreEntry> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_render_rows() {
        let entries = entries(r#"[{"name":"Alice","score":100},{"name":"Bob","score":80}]"#);
        let fragment = render_rows(&entries).unwrap();
        assert_eq!(
            fragment,
            "<tr><td>1</td><td>Alice</td><td>100</td></tr>\
             <tr><td>2</td><td>Bob</td><td>80</td></tr>"
        );
    }

    #[test]
    fn test_render_empty() {
        let fragment = render_rows(&[]).unwrap();
        assert_eq!(fragment, "");
    }

    /// Every entry produces exactly one row, numbered in input order
    #[test]
    fn test_row_count() {
        for count in [1usize, 3, 10, 25] {
            let entries: Vec<PlayerScoreEntry> = (0..count)
                .map(|index| PlayerScoreEntry {
                    name: format!("player{index}"),
                    score: (1000 - index as u64).into(),
                })
                .collect();

            let fragment = render_rows(&entries).unwrap();
            assert_eq!(fragment.matches("<tr>").count(), count);

            for index in 0..count {
                let row = format!("<tr><td>{}</td><td>player{}</td>", index + 1, index);
                assert!(fragment.contains(&row), "missing row {row}");
            }
        }
    }

    /// Names containing markup are escaped instead of inserted raw
    #[test]
    fn test_render_escapes_name() {
        let entries = entries(r#"[{"name":"<b>x</b> & co","score":5}]"#);
        let fragment = render_rows(&entries).unwrap();
        assert_eq!(
            fragment,
            "<tr><td>1</td><td>&lt;b&gt;x&lt;/b&gt; &amp; co</td><td>5</td></tr>"
        );
    }
}
