//! Configuration templates for `scout init`.
//!
//! The templates under `templates/` are valid TOML; `init` writes them fully commented
//! out so a fresh config changes nothing until the user opts in.

/// Default local configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the local configuration template as a commented-out example.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Returns the global configuration template as a commented-out example.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Comments out every setting line of a TOML template, leaving comments and blank lines.
fn comment_template(template: &str) -> String {
    template
        .lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_config;

    #[test]
    fn templates_parse_as_valid_toml() {
        for template in [LOCAL_TEMPLATE, GLOBAL_TEMPLATE] {
            let result = parse_config(template);
            assert!(result.is_ok(), "template failed to parse: {result:?}");
        }
    }

    #[test]
    fn rendered_templates_are_inert() {
        for rendered in [local_template(), global_template()] {
            let config = parse_config(&rendered).unwrap();
            assert!(config.catalog.is_none());
            assert!(config.recent.is_none());
        }
    }

    #[test]
    fn comment_template_preserves_comments_and_blank_lines() {
        let input = "# note\n[section]\n\nkey = \"value\"\n";
        assert_eq!(
            comment_template(input),
            "# note\n# [section]\n\n# key = \"value\"\n"
        );
    }
}
