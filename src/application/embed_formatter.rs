//! # Embed Formatter
//!
//! Renders an `Embed` into Matrix markdown.
//! Matrix has no embed cards. Inline fields are laid out in rows of up to three, like the
//! card layout they come from; a row becomes one summary line (single-line values) or a
//! table (multi-line values, one column per field).

use crate::domain::types::{Embed, EmbedField};

/// Shown in place of empty field values.
pub const PLACEHOLDER: &str = "-";

const INLINE_PER_ROW: usize = 3;

pub fn or_placeholder(value: &str) -> String {
    if value.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

pub struct EmbedFormatter;

impl EmbedFormatter {
    pub fn format(embed: &Embed) -> String {
        let mut sections: Vec<String> = Vec::new();

        if let Some(author) = &embed.author {
            let title = match &author.url {
                Some(url) if !url.is_empty() => format!("[{}]({})", author.name, url),
                _ => author.name.clone(),
            };
            sections.push(format!(
                "<font data-mx-color=\"#{:06x}\">**{}**</font>",
                embed.color & 0xFF_FF_FF,
                title
            ));
        }

        if let Some(thumbnail) = embed.thumbnail.as_deref().filter(|t| !t.is_empty()) {
            sections.push(format!("[Avatar]({})", thumbnail));
        }

        for group in group_fields(&embed.fields) {
            sections.push(format_group(group));
        }

        if let Some(footer) = &embed.footer {
            sections.push(format!("_{}_", footer));
        }

        sections.join("\n\n")
    }
}

/// Consecutive inline fields share a row (at most `INLINE_PER_ROW`); block fields stand alone.
fn group_fields(fields: &[EmbedField]) -> Vec<&[EmbedField]> {
    let mut groups = Vec::new();
    let mut start = 0;

    for (i, field) in fields.iter().enumerate() {
        let row_full = i + 1 - start == INLINE_PER_ROW;
        let ends_run = !field.inline
            || row_full
            || fields.get(i + 1).is_none_or(|next| !next.inline);
        if ends_run {
            groups.push(&fields[start..=i]);
            start = i + 1;
        }
    }

    groups
}

fn format_group(group: &[EmbedField]) -> String {
    if let [field] = group
        && !field.inline
    {
        return format!("**{}**\n{}", field.name, or_placeholder(&field.value).trim_end());
    }

    let multi_line = group.iter().any(|f| f.value.trim_end().contains('\n'));
    if !multi_line {
        return group
            .iter()
            .map(|f| format!("**{}**: {}", f.name, or_placeholder(&f.value).trim_end()))
            .collect::<Vec<_>>()
            .join(" · ");
    }

    format_table(group)
}

fn format_table(group: &[EmbedField]) -> String {
    let columns: Vec<Vec<String>> = group
        .iter()
        .map(|f| {
            or_placeholder(&f.value)
                .trim_end()
                .lines()
                .map(|l| l.replace('|', "\\|"))
                .collect()
        })
        .collect();
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);

    let header = group
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(" | ");
    let divider = vec!["---"; group.len()].join(" | ");

    let mut table = format!("| {} |\n| {} |", header, divider);
    for row in 0..rows {
        let cells = columns
            .iter()
            .map(|col| col.get(row).map(String::as_str).unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" | ");
        table.push_str(&format!("\n| {} |", cells));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::EmbedAuthor;

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(""), "-");
        assert_eq!(or_placeholder(" \n"), "-");
        assert_eq!(or_placeholder("x"), "x");
    }

    #[test]
    fn test_single_line_inline_fields_share_a_line() {
        let embed = Embed {
            fields: vec![
                EmbedField::inline("Newest", "bob"),
                EmbedField::inline("Oldest", ""),
                EmbedField::inline("Count", "2"),
            ],
            ..Embed::default()
        };
        assert_eq!(
            EmbedFormatter::format(&embed),
            "**Newest**: bob · **Oldest**: - · **Count**: 2"
        );
    }

    #[test]
    fn test_multi_line_inline_fields_become_table() {
        let embed = Embed {
            fields: vec![
                EmbedField::inline("Name", "a|b\nc\n"),
                EmbedField::inline("Status", "on\n"),
            ],
            ..Embed::default()
        };
        assert_eq!(
            EmbedFormatter::format(&embed),
            "| Name | Status |\n| --- | --- |\n| a\\|b | on |\n| c |  |"
        );
    }

    #[test]
    fn test_inline_rows_hold_three_fields() {
        let embed = Embed {
            fields: vec![
                EmbedField::inline("Newest", "bob"),
                EmbedField::inline("Oldest", "amy"),
                EmbedField::inline("Count", "2"),
                EmbedField::inline("Names", "amy\nbob\n"),
                EmbedField::inline("Status", "on\noff\n"),
            ],
            ..Embed::default()
        };
        assert_eq!(
            EmbedFormatter::format(&embed),
            "**Newest**: bob · **Oldest**: amy · **Count**: 2\n\n\
             | Names | Status |\n| --- | --- |\n| amy | on |\n| bob | off |"
        );
    }

    #[test]
    fn test_block_field_splits_runs() {
        let embed = Embed {
            fields: vec![
                EmbedField::inline("A", "1"),
                EmbedField {
                    name: "Notes".to_string(),
                    value: "long text".to_string(),
                    inline: false,
                },
                EmbedField::inline("B", "2"),
            ],
            ..Embed::default()
        };
        assert_eq!(
            EmbedFormatter::format(&embed),
            "**A**: 1\n\n**Notes**\nlong text\n\n**B**: 2"
        );
    }

    #[test]
    fn test_header_and_footer() {
        let embed = Embed {
            author: Some(EmbedAuthor {
                name: "🟢 gabe".to_string(),
                url: Some("https://steamcommunity.com/id/gabe/".to_string()),
            }),
            thumbnail: Some("https://avatars.example/full.jpg".to_string()),
            fields: vec![],
            footer: Some("privacy".to_string()),
            color: 0x66c0f4,
        };
        assert_eq!(
            EmbedFormatter::format(&embed),
            "<font data-mx-color=\"#66c0f4\">**[🟢 gabe](https://steamcommunity.com/id/gabe/)**</font>\n\n\
             [Avatar](https://avatars.example/full.jpg)\n\n\
             _privacy_"
        );
    }

    #[test]
    fn test_author_without_url() {
        let embed = Embed {
            author: Some(EmbedAuthor {
                name: "anon".to_string(),
                url: None,
            }),
            ..Embed::default()
        };
        assert_eq!(
            EmbedFormatter::format(&embed),
            "<font data-mx-color=\"#000000\">**anon**</font>"
        );
    }
}
