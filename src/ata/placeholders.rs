use super::model::{Details, Record};

pub const NAME_TOKEN: &str = "[NOME]";
pub const DATE_TOKEN: &str = "[DATA]";
pub const THEME_TOKEN: &str = "[TEMA]";

/// Values substituted into template text.
///
/// Tokens are matched literally and case-sensitively. Substitution is a single pass
/// over the text, so a substituted value is never itself scanned for tokens, and
/// unknown bracketed text is left untouched. Missing values substitute as an empty
/// string.
///
/// ```
/// use ata_pdf::{Details, Placeholders, Record};
///
/// let record = Record {
///     alias: Some("Ala Centro".to_string()),
///     date: Some("2024-01-07".to_string()),
///     ..Record::default()
/// };
/// let details = Details::default();
/// let placeholders = Placeholders::new(&record, &details);
/// assert_eq!(
///     placeholders.apply("[NOME], [DATA], [TEMA], [OUTRO]"),
///     "Ala Centro, 2024-01-07, , [OUTRO]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholders<'a> {
    pub name: &'a str,
    pub date: &'a str,
    pub theme: &'a str,
}

impl<'a> Placeholders<'a> {
    /// The community name falls back to its alias; the theme only comes from details
    pub fn new(record: &'a Record, details: &'a Details) -> Self {
        Placeholders {
            name: record
                .community_name
                .as_deref()
                .or(record.alias.as_deref())
                .unwrap_or_default(),
            date: record.date.as_deref().unwrap_or_default(),
            theme: details.theme.as_deref().unwrap_or_default(),
        }
    }

    fn tokens(&self) -> [(&'static str, &'a str); 3] {
        [
            (NAME_TOKEN, self.name),
            (DATE_TOKEN, self.date),
            (THEME_TOKEN, self.theme),
        ]
    }

    pub fn apply(&self, text: &str) -> String {
        let tokens = self.tokens();
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find('[') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            match tokens.iter().find(|(token, _)| tail.starts_with(token)) {
                Some((token, value)) => {
                    out.push_str(value);
                    rest = &tail[token.len()..];
                }
                None => {
                    out.push('[');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record {
            community_name: Some("Ala Jardim".to_string()),
            alias: Some("Jardim".to_string()),
            date: Some("07/01/2024".to_string()),
            ..Record::default()
        }
    }

    fn details() -> Details {
        Details {
            theme: Some("Fé em Cristo".to_string()),
            ..Details::default()
        }
    }

    #[test]
    fn test_every_occurrence_replaced() {
        let (record, details) = (record(), details());
        let placeholders = Placeholders::new(&record, &details);
        assert_eq!(
            placeholders.apply("[NOME] - [TEMA] - [NOME] ([DATA])"),
            "Ala Jardim - Fé em Cristo - Ala Jardim (07/01/2024)"
        );
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        let (record, details) = (record(), details());
        let placeholders = Placeholders::new(&record, &details);
        assert_eq!(placeholders.apply("[nome] [Nome]"), "[nome] [Nome]");
    }

    #[test]
    fn test_name_falls_back_to_alias() {
        let record = Record {
            community_name: None,
            ..record()
        };
        let details = Details::default();
        let placeholders = Placeholders::new(&record, &details);
        assert_eq!(placeholders.apply("[NOME]|[TEMA]"), "Jardim|");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let record = Record {
            community_name: Some("[DATA]".to_string()),
            ..record()
        };
        let details = details();
        let placeholders = Placeholders::new(&record, &details);
        assert_eq!(placeholders.apply("[NOME] [DATA]"), "[DATA] 07/01/2024");
    }

    #[test]
    fn test_idempotent() {
        let (record, details) = (record(), details());
        let placeholders = Placeholders::new(&record, &details);
        for text in ["Bem-vindos à [NOME] em [DATA]", "[[NOME]]", "[", "sem tokens", "ã[TEMA]ç"] {
            let once = placeholders.apply(text);
            assert_eq!(placeholders.apply(&once), once);
        }
    }
}
