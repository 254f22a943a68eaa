use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dates::{german_long_date, german_short_date};
use crate::selection::DailySelection;

/// Both files get the same bytes; index.html is the GitHub Pages entry point
pub const HTML_FILES: [&str; 2] = ["index.html", "tageschronik.html"];

pub const SITE_TITLE: &str = "neuere geschichte";

/// Labels for the paragraphs of an article, by position
const PARAGRAPH_LABELS: [&str; 4] = ["Ereignis", "Folgen", "Was wir gelernt haben", "Vertiefung"];

pub struct PageGenerator;

impl PageGenerator {
    pub fn generate(selection: &DailySelection) -> String {
        let mut html = String::new();

        let date_long = german_long_date(selection.date);
        let date_short = german_short_date(selection.date);

        html.push_str("<!DOCTYPE html>\n<html lang=\"de\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str(&format!(
            "<title>{} &ndash; {}</title>\n",
            SITE_TITLE, date_long
        ));
        html.push_str("<style>\n");
        html.push_str("    body { font-family: Arial, sans-serif; line-height: 1.6; margin: 2rem auto; max-width: 900px; padding: 0 1rem; }\n");
        html.push_str("    header, footer { border-bottom: 1px solid #ccc; padding-bottom: 1rem; margin-bottom: 1.5rem; }\n");
        html.push_str("    footer { border-top: 1px solid #ccc; border-bottom: none; margin-top: 2rem; padding-top: 1.5rem; }\n");
        html.push_str("    h1, h2, h3 { color: #1a1a1a; }\n");
        html.push_str("    section { margin-bottom: 2rem; }\n");
        html.push_str("    .meta { color: #555; font-size: 0.95rem; }\n");
        html.push_str("    .artikel { border-left: 4px solid #1a1a1a; padding-left: 1rem; background: #fafafa; }\n");
        html.push_str("    .artikel p { margin: 0.4rem 0; }\n");
        html.push_str("    .footnotes { font-size: 0.9rem; }\n");
        html.push_str("    .footnotes li { margin-bottom: 0.5rem; }\n");
        html.push_str("</style>\n");
        html.push_str("</head>\n<body>\n");

        html.push_str("<header>\n");
        html.push_str(&format!("<h1>{}</h1>\n", SITE_TITLE));
        html.push_str(&format!("<p class=\"meta\">update: {}</p>\n", date_short));
        html.push_str("</header>\n");

        html.push_str("<main>\n");
        for (index, selected) in selection.articles.iter().enumerate() {
            let article = selected.article;
            let note = index + 1;

            html.push_str(&format!(
                "<section class=\"artikel\" aria-labelledby=\"{}\">\n",
                article.slug
            ));
            html.push_str(&format!(
                "<h2 id=\"{}\">{}: {}</h2>\n",
                article.slug,
                Self::escape_html(selected.category.label()),
                Self::escape_html(article.title)
            ));

            for (position, paragraph) in article.paragraphs.iter().enumerate() {
                html.push_str("<p>");
                if let Some(label) = PARAGRAPH_LABELS.get(position) {
                    html.push_str(&format!("<strong>{}:</strong> ", label));
                }
                if position == 0 {
                    // Footnote marker follows the lead sentence
                    let (lead, rest) = paragraph.split_at(Self::lead_sentence_end(paragraph));
                    html.push_str(&Self::escape_html(lead));
                    html.push_str(&format!(
                        "<sup><a id=\"ref-{0}\" href=\"#fn-{0}\">[{0}]</a></sup>",
                        note
                    ));
                    html.push_str(&Self::escape_html(rest));
                } else {
                    html.push_str(&Self::escape_html(paragraph));
                }
                html.push_str("</p>\n");
            }

            html.push_str("</section>\n");
        }
        html.push_str("</main>\n");

        html.push_str("<footer>\n");
        html.push_str("<section class=\"footnotes\" aria-label=\"Quellen\">\n");
        html.push_str("<h3>Quellen</h3>\n<ol>\n");
        for (index, selected) in selection.articles.iter().enumerate() {
            let source = &selected.article.source;
            let note = index + 1;
            let url = Self::escape_html(source.url);
            let detail = source
                .detail
                .map(|d| format!(" ({})", Self::escape_html(d)))
                .unwrap_or_default();
            html.push_str(&format!(
                "<li id=\"fn-{}\">{}: &quot;{}&quot;{}. <a href=\"{}\">{}</a> <a href=\"#ref-{}\">Zur&uuml;ck</a></li>\n",
                note,
                Self::escape_html(source.label),
                Self::escape_html(source.title),
                detail,
                url,
                url,
                note
            ));
        }
        html.push_str("</ol>\n</section>\n</footer>\n");

        html.push_str("</body>\n</html>\n");
        html
    }

    /// Byte offset just past the first sentence of `text`, or its length.
    ///
    /// A sentence ends at a period followed by a space and a capital letter,
    /// unless the period closes a number ("3. Oktober") or a one-letter
    /// abbreviation ("27 v. Chr.").
    fn lead_sentence_end(text: &str) -> usize {
        for (index, _) in text.match_indices(". ") {
            let next = text[index + 2..].chars().next();
            if !next.is_some_and(char::is_uppercase) {
                continue;
            }
            let word = text[..index]
                .rsplit(|c: char| c.is_whitespace())
                .next()
                .unwrap_or("");
            if word.chars().count() <= 1 || word.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            return index + 1;
        }
        text.len()
    }

    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    /// Write `content` to every page file in `dir`
    pub fn save(content: &str, dir: &Path) -> Result<Vec<PathBuf>> {
        HTML_FILES
            .iter()
            .map(|filename| {
                let filepath = dir.join(filename);
                fs::write(&filepath, content).with_context(|| {
                    format!("Failed to write page file: {}", filepath.display())
                })?;
                Ok(filepath)
            })
            .collect()
    }
}
